//! Typed view of the page payload.
//!
//! Every section is optional upstream. Missing keys and explicit `null`s both
//! decode to the field's default here, so extractors never chain lookups.
//! Present values of the wrong shape fail the decode.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Decode `null` the same as an absent key.
fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A display string that upstream sometimes publishes as a bare number.
/// `null` decodes to the empty string.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Text(pub String);

impl Text {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl<'de> Deserialize<'de> for Text {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match Value::deserialize(deserializer)? {
            Value::Null => Ok(Text::default()),
            Value::String(s) => Ok(Text(s)),
            Value::Number(n) => Ok(Text(n.to_string())),
            other => Err(serde::de::Error::custom(format!("expected text, found {}", other))),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct PagePayload {
    #[serde(default, deserialize_with = "nullable")]
    pub page: PageSection,
}

#[derive(Debug, Default, Deserialize)]
pub struct PageSection {
    #[serde(default, deserialize_with = "nullable")]
    pub content: PageContent,
}

#[derive(Debug, Default, Deserialize)]
pub struct PageContent {
    /// Kept raw. Each extractor decodes only the sections it reads
    /// (`gmInfo`, `gmStrp`, `prsdTms`, `tmStats`, `bxscr`).
    #[serde(default)]
    pub gamepackage: Option<Value>,
    /// Schedule listing: date key to the events on that date.
    #[serde(default, deserialize_with = "nullable")]
    pub events: BTreeMap<String, Vec<Value>>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ScheduleEvent {
    #[serde(default)]
    pub id: Option<Text>,
    #[serde(default, deserialize_with = "nullable")]
    pub teams: Vec<EventTeam>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub season: Season,
}

fn away_by_default() -> Option<bool> {
    Some(false)
}

#[derive(Debug, Default, Deserialize)]
pub struct EventTeam {
    /// A missing flag means away. An explicit `null` places the team on
    /// neither side.
    #[serde(rename = "isHome", default = "away_by_default")]
    pub is_home: Option<bool>,
    #[serde(default)]
    pub abbrev: Option<String>,
    #[serde(rename = "displayName", default)]
    pub display_name: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Season {
    #[serde(default)]
    pub year: Option<i64>,
    #[serde(rename = "type", default)]
    pub season_type: Option<i64>,
}

#[derive(Debug, Default, Deserialize)]
pub struct GameInfo {
    #[serde(rename = "loc", default)]
    pub location: Option<String>,
    #[serde(rename = "locAddr", default, deserialize_with = "nullable")]
    pub address: Address,
    #[serde(rename = "lne", default)]
    pub line: Option<String>,
    /// Number or numeric string; converted by the game extractor.
    #[serde(rename = "ovUnd", default)]
    pub over_under: Option<Value>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Address {
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct GameStrip {
    #[serde(rename = "gid", default)]
    pub game_id: Option<Text>,
    #[serde(rename = "dt", default)]
    pub date: Option<String>,
    #[serde(rename = "isConferenceGame", default)]
    pub is_conference: Option<bool>,
    #[serde(rename = "nte", default)]
    pub note: Option<String>,
}

/// Only the game id out of `gmStrp`; the other strip fields are not read.
#[derive(Debug, Default, Deserialize)]
pub struct StripGameId {
    #[serde(rename = "gid", default)]
    pub game_id: Option<Text>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ParsedTeams {
    #[serde(default, deserialize_with = "nullable")]
    pub home: ParsedTeam,
    #[serde(default, deserialize_with = "nullable")]
    pub away: ParsedTeam,
}

#[derive(Debug, Default, Deserialize)]
pub struct ParsedTeam {
    #[serde(rename = "displayName", default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub score: Option<Value>,
}

#[derive(Debug, Default, Deserialize)]
pub struct TeamStatsSection {
    #[serde(default)]
    pub home: Option<TeamStatsBlock>,
    #[serde(default)]
    pub away: Option<TeamStatsBlock>,
}

#[derive(Debug, Default, Deserialize)]
pub struct TeamStatsBlock {
    #[serde(rename = "t", default, deserialize_with = "nullable")]
    pub team: Identity,
    #[serde(rename = "s", default, deserialize_with = "nullable")]
    pub stats: BTreeMap<String, StatPair>,
}

/// Display name and site link of a team or athlete.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Identity {
    #[serde(rename = "dspNm", default)]
    pub display_name: Option<String>,
    #[serde(rename = "lnk", default)]
    pub link: Option<String>,
}

/// One team-level stat cell: label `n`, display value `d`.
#[derive(Debug, Default, Deserialize)]
pub struct StatPair {
    #[serde(default)]
    pub n: Option<Text>,
    #[serde(default)]
    pub d: Option<Text>,
}

#[derive(Debug, Default, Deserialize)]
pub struct BoxScoreTeam {
    #[serde(rename = "tm", default, deserialize_with = "nullable")]
    pub team: Identity,
    #[serde(default, deserialize_with = "nullable")]
    pub stats: Vec<StatCategory>,
}

#[derive(Debug, Default, Deserialize)]
pub struct StatCategory {
    #[serde(default, deserialize_with = "nullable")]
    pub keys: Vec<Text>,
    #[serde(rename = "athlts", default, deserialize_with = "nullable")]
    pub athletes: Vec<AthleteLine>,
}

#[derive(Debug, Default, Deserialize)]
pub struct AthleteLine {
    #[serde(rename = "athlt", default, deserialize_with = "nullable")]
    pub athlete: Identity,
    #[serde(default, deserialize_with = "nullable")]
    pub stats: Vec<Text>,
}
