use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::model::entity::{Update, set_int};

/// Season phase encoded in `game_type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameType {
    Preseason = 1,
    Regular = 2,
    Postseason = 3,
}

impl GameType {
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            1 => Some(GameType::Preseason),
            2 => Some(GameType::Regular),
            3 => Some(GameType::Postseason),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            GameType::Preseason => "preseason",
            GameType::Regular => "regular",
            GameType::Postseason => "postseason",
        }
    }
}

/// Partition keys shared by every record. Zero means unset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Partition {
    pub week: i64,
    pub year: i64,
    pub game_type: i64,
}

impl Partition {
    pub fn season(&self) -> Option<GameType> {
        GameType::from_code(self.game_type)
    }

    /// The patch that stamps these keys onto a record. Unset keys are carried
    /// as zero and therefore leave the target untouched.
    pub fn update(&self) -> Update {
        Update::new()
            .set("week", self.week)
            .set("year", self.year)
            .set("game_type", self.game_type)
    }

    pub(crate) fn assign(&mut self, field: &str, value: &Value) -> bool {
        match field {
            "week" => set_int(&mut self.week, value),
            "year" => set_int(&mut self.year, value),
            "game_type" => set_int(&mut self.game_type, value),
            _ => false,
        }
    }
}
