use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::model::entity::{Entity, Update, set_string, set_text};
use crate::model::partition::Partition;

/// One scheduled matchup.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Schedule {
    #[serde(flatten)]
    pub partition: Partition,
    pub game_id: String,
    pub home_team_code: Option<String>,
    pub away_team_code: Option<String>,
    pub home_team_name: Option<String>,
    pub away_team_name: Option<String>,
    pub game_date: Option<String>,
}

impl Schedule {
    /// Patch that stamps this entry's partition keys and game id onto the
    /// records harvested for it.
    pub fn stamp(&self) -> Update {
        self.partition.update().set("game_id", self.game_id.as_str())
    }
}

impl Entity for Schedule {
    fn assign(&mut self, field: &str, value: &Value) -> bool {
        match field {
            "game_id" => set_string(&mut self.game_id, value),
            "home_team_code" => set_text(&mut self.home_team_code, value),
            "away_team_code" => set_text(&mut self.away_team_code, value),
            "home_team_name" => set_text(&mut self.home_team_name, value),
            "away_team_name" => set_text(&mut self.away_team_name, value),
            "game_date" => set_text(&mut self.game_date, value),
            _ => self.partition.assign(field, value),
        }
    }
}
