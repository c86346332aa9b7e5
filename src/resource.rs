use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{ExtractError, Result};
use crate::model::Partition;

/// Filters for a schedule listing. Zero or absent values are left out of the URL.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScheduleQuery {
    pub week: i64,
    pub year: i64,
    pub game_type: i64,
    /// Listing start date as `YYYYMMDD`.
    pub date: Option<String>,
    pub group: Option<String>,
}

impl ScheduleQuery {
    pub fn partition(&self) -> Partition {
        Partition { week: self.week, year: self.year, game_type: self.game_type }
    }
}

/// The logical pages the harvester reads.
#[derive(Debug, Clone, Copy)]
pub enum Resource<'a> {
    Schedule(&'a ScheduleQuery),
    Matchup(&'a str),
    Boxscore(&'a str),
}

impl Resource<'_> {
    pub fn segments(&self) -> Result<Vec<String>> {
        let mut parts: Vec<String> = Vec::new();
        match self {
            Resource::Schedule(query) => {
                parts.extend(["schedule".to_string(), "_".to_string()]);
                for (name, value) in [("week", query.week), ("year", query.year), ("seasontype", query.game_type)] {
                    if value != 0 {
                        parts.extend([name.to_string(), value.to_string()]);
                    }
                }
                if let Some(date) = query.date.as_deref().filter(|d| !d.is_empty()) {
                    NaiveDate::parse_from_str(date, "%Y%m%d").map_err(|_| ExtractError::Date(date.to_string()))?;
                    parts.extend(["date".to_string(), date.to_string()]);
                }
                if let Some(group) = query.group.as_deref().filter(|g| !g.is_empty()) {
                    parts.extend(["group".to_string(), group.to_string()]);
                }
            }
            Resource::Matchup(game_id) => {
                parts.extend(["matchup", "_", "gameId", *game_id].map(str::to_string));
            }
            Resource::Boxscore(game_id) => {
                parts.extend(["boxscore", "_", "gameId", *game_id].map(str::to_string));
            }
        }
        Ok(parts)
    }

    /// Join the segments onto `base_url` with single slashes. An empty base
    /// yields a relative path.
    pub fn url(&self, base_url: &str) -> Result<String> {
        let path = self.segments()?.join("/");
        if base_url.is_empty() {
            return Ok(path);
        }
        Ok(format!("{}/{}", base_url.trim_end_matches('/'), path))
    }
}
