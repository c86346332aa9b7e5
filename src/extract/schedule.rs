use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, instrument};

use crate::error::{ExtractError, Result};
use crate::model::entity::is_truthy;
use crate::model::page::{PagePayload, ScheduleEvent};
use crate::model::{Partition, Schedule};

/// Build a schedule entry from one listing event.
///
/// `Ok(None)` when the event is empty or lists no teams. An event that lists
/// teams for only one side is malformed.
pub fn schedule_from_event(event: &Value) -> Result<Option<Schedule>> {
    if !is_truthy(event) {
        return Ok(None);
    }
    let event = ScheduleEvent::deserialize(event)?;
    let game_id = event.id.map(|id| id.0).unwrap_or_default();

    let side = |is_home: bool| event.teams.iter().find(|team| team.is_home == Some(is_home));

    let (home, away) = match (side(true), side(false)) {
        (None, None) => return Ok(None),
        (Some(home), Some(away)) => (home, away),
        (None, Some(_)) => return Err(ExtractError::MalformedEvent { game_id, side: "home" }),
        (Some(_), None) => return Err(ExtractError::MalformedEvent { game_id, side: "away" }),
    };

    Ok(Some(Schedule {
        partition: Partition {
            week: 0,
            year: event.season.year.unwrap_or(0),
            game_type: event.season.season_type.unwrap_or(0),
        },
        game_id,
        home_team_code: home.abbrev.clone(),
        away_team_code: away.abbrev.clone(),
        home_team_name: home.display_name.clone(),
        away_team_name: away.display_name.clone(),
        game_date: event.date,
    }))
}

/// Every schedule entry in a listing page, in date-key order.
#[instrument(level = "debug", skip(payload))]
pub fn schedules_from_page(payload: Option<&Value>) -> Result<Vec<Schedule>> {
    let Some(payload) = payload.filter(|p| is_truthy(p)) else {
        return Ok(Vec::new());
    };
    let page = PagePayload::deserialize(payload)?;

    let mut entries = Vec::new();
    for (date, events) in &page.page.content.events {
        debug!(date = %date, events = events.len(), "Reading schedule events");
        for event in events {
            if let Some(schedule) = schedule_from_event(event)? {
                entries.push(schedule);
            }
        }
    }
    Ok(entries)
}
