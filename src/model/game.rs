use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::model::entity::{Entity, set_bool, set_float, set_text, set_uint};
use crate::model::partition::Partition;

/// Venue, result and betting line for a single game.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Game {
    #[serde(flatten)]
    pub partition: Partition,
    pub game_id: Option<String>,
    pub home_team: Option<String>,
    pub away_team: Option<String>,
    pub location: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub game_date: Option<String>,
    pub is_conference: bool,
    pub note: Option<String>,
    pub home_score: u32,
    pub away_score: u32,
    pub line: Option<String>,
    pub over_under: f64,
}

impl Entity for Game {
    fn assign(&mut self, field: &str, value: &Value) -> bool {
        match field {
            "game_id" => set_text(&mut self.game_id, value),
            "home_team" => set_text(&mut self.home_team, value),
            "away_team" => set_text(&mut self.away_team, value),
            "location" => set_text(&mut self.location, value),
            "city" => set_text(&mut self.city, value),
            "state" => set_text(&mut self.state, value),
            "game_date" => set_text(&mut self.game_date, value),
            "is_conference" => set_bool(&mut self.is_conference, value),
            "note" => set_text(&mut self.note, value),
            "home_score" => set_uint(&mut self.home_score, value),
            "away_score" => set_uint(&mut self.away_score, value),
            "line" => set_text(&mut self.line, value),
            "over_under" => set_float(&mut self.over_under, value),
            _ => self.partition.assign(field, value),
        }
    }
}
