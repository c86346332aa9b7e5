use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::model::entity::{Entity, set_float, set_string, set_text};
use crate::model::partition::Partition;

/// Fields common to team and player statistics.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BaseStatistic {
    #[serde(flatten)]
    pub partition: Partition,
    pub team: Option<String>,
    pub opponent: Option<String>,
    pub statistic_type: Option<String>,
    pub statistic_name: String,
    pub statistic_code: Option<String>,
    pub statistic_value: f64,
    pub game_id: Option<String>,
}

impl BaseStatistic {
    fn assign(&mut self, field: &str, value: &Value) -> bool {
        match field {
            "team" => set_text(&mut self.team, value),
            "opponent" => set_text(&mut self.opponent, value),
            "statistic_type" => set_text(&mut self.statistic_type, value),
            "statistic_name" => set_string(&mut self.statistic_name, value),
            "statistic_code" => set_text(&mut self.statistic_code, value),
            "statistic_value" => set_float(&mut self.statistic_value, value),
            "game_id" => set_text(&mut self.game_id, value),
            _ => self.partition.assign(field, value),
        }
    }
}

/// A record that carries a [`BaseStatistic`] and can be produced by
/// [`crate::explode::explode`].
pub trait Statistic: Entity {
    fn base(&self) -> &BaseStatistic;
    fn base_mut(&mut self) -> &mut BaseStatistic;
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TeamStatistic {
    #[serde(flatten)]
    pub base: BaseStatistic,
    pub team_url: Option<String>,
}

impl Entity for TeamStatistic {
    fn assign(&mut self, field: &str, value: &Value) -> bool {
        match field {
            "team_url" => set_text(&mut self.team_url, value),
            _ => self.base.assign(field, value),
        }
    }
}

impl Statistic for TeamStatistic {
    fn base(&self) -> &BaseStatistic {
        &self.base
    }

    fn base_mut(&mut self) -> &mut BaseStatistic {
        &mut self.base
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerStatistic {
    #[serde(flatten)]
    pub base: BaseStatistic,
    pub player_name: Option<String>,
    pub player_url: Option<String>,
}

impl Entity for PlayerStatistic {
    fn assign(&mut self, field: &str, value: &Value) -> bool {
        match field {
            "player_name" => set_text(&mut self.player_name, value),
            "player_url" => set_text(&mut self.player_url, value),
            _ => self.base.assign(field, value),
        }
    }
}

impl Statistic for PlayerStatistic {
    fn base(&self) -> &BaseStatistic {
        &self.base
    }

    fn base_mut(&mut self) -> &mut BaseStatistic {
        &mut self.base
    }
}
