use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::instrument;

use crate::error::{ExtractError, Result};
use crate::model::entity::is_truthy;
use crate::model::page::{GameInfo, GameStrip, PagePayload, ParsedTeams};
use crate::model::{Game, Partition};

/// Score as a non-negative integer. Accepts numbers, truncating any fraction,
/// and integer strings.
fn to_score(field: &'static str, raw: Option<&Value>) -> Result<u32> {
    let invalid = |value: &Value| ExtractError::Number { field, value: value.to_string() };
    let Some(value) = raw else {
        return Ok(0);
    };
    let whole = match value {
        Value::Number(n) => n.as_u64().or_else(|| n.as_f64().filter(|f| f.is_finite() && *f >= 0.0).map(|f| f.trunc() as u64)),
        Value::String(s) => s.trim().parse::<u64>().ok(),
        _ => None,
    };
    whole.and_then(|n| u32::try_from(n).ok()).ok_or_else(|| invalid(value))
}

fn to_float(field: &'static str, raw: Option<&Value>) -> Result<f64> {
    let Some(value) = raw else {
        return Ok(0.0);
    };
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed
        .filter(|f| f.is_finite())
        .ok_or_else(|| ExtractError::Number { field, value: value.to_string() })
}

/// The raw game package, or `None` when the page carries none.
pub(crate) fn game_package(payload: Option<&Value>) -> Result<Option<Map<String, Value>>> {
    let Some(payload) = payload.filter(|p| is_truthy(p)) else {
        return Ok(None);
    };
    let page = PagePayload::deserialize(payload)?;
    match page.page.content.gamepackage {
        Some(package) if is_truthy(&package) => Ok(Some(Map::deserialize(package)?)),
        _ => Ok(None),
    }
}

/// Decode one section of the game package. Absent and `null` sections
/// decode to the default.
pub(crate) fn section<T: DeserializeOwned + Default>(package: &Map<String, Value>, key: &str) -> Result<T> {
    match package.get(key) {
        None | Some(Value::Null) => Ok(T::default()),
        Some(value) => Ok(T::deserialize(value)?),
    }
}

/// Build the game record from a matchup page.
#[instrument(level = "debug", skip(payload))]
pub fn game_from_page(payload: Option<&Value>, game_id: &str) -> Result<Option<Game>> {
    let Some(package) = game_package(payload)? else {
        return Ok(None);
    };
    let info: GameInfo = section(&package, "gmInfo")?;
    let strip: GameStrip = section(&package, "gmStrp")?;
    let teams: ParsedTeams = section(&package, "prsdTms")?;

    Ok(Some(Game {
        partition: Partition::default(),
        game_id: Some(game_id.to_string()),
        home_team: teams.home.display_name,
        away_team: teams.away.display_name,
        location: info.location,
        city: info.address.city,
        state: info.address.state,
        game_date: strip.date,
        is_conference: strip.is_conference.unwrap_or(false),
        note: strip.note,
        home_score: to_score("home_score", teams.home.score.as_ref())?,
        away_score: to_score("away_score", teams.away.score.as_ref())?,
        line: info.line,
        over_under: to_float("over_under", info.over_under.as_ref())?,
    }))
}
