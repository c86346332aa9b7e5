use std::collections::BTreeMap;

use serde_json::Value;
use tracing::{debug, instrument};

use crate::error::Result;
use crate::explode::explode;
use crate::extract::game::{game_package, section};
use crate::model::page::{Identity, StatPair, StripGameId, TeamStatsSection};
use crate::model::{BaseStatistic, TeamStatistic};

/// Team-level statistics for one side of a matchup.
pub fn team_statistics(
    game_id: Option<&str>,
    team: &Identity,
    opponent: &Identity,
    stats: &BTreeMap<String, StatPair>,
) -> Result<Vec<TeamStatistic>> {
    let base = TeamStatistic {
        base: BaseStatistic {
            team: team.display_name.clone(),
            opponent: opponent.display_name.clone(),
            game_id: game_id.map(str::to_string),
            ..BaseStatistic::default()
        },
        team_url: team.link.clone(),
    };

    let mut result = Vec::new();
    for (code, pair) in stats {
        let Some(label) = pair.n.as_ref() else {
            debug!(code = %code, "Stat entry has no label");
            continue;
        };
        let value = pair.d.as_ref().map(|d| d.as_str()).unwrap_or_default();
        result.extend(explode(&base, (label.as_str(), value))?);
    }
    Ok(result)
}

/// Team statistics for both sides of a matchup page, home side first.
/// Empty unless both the home and away blocks are present.
#[instrument(level = "debug", skip(payload))]
pub fn team_statistics_from_page(payload: Option<&Value>) -> Result<Vec<TeamStatistic>> {
    let Some(package) = game_package(payload)? else {
        return Ok(Vec::new());
    };
    let team_stats: TeamStatsSection = section(&package, "tmStats")?;
    let (Some(home), Some(away)) = (&team_stats.home, &team_stats.away) else {
        return Ok(Vec::new());
    };
    let strip: StripGameId = section(&package, "gmStrp")?;
    let game_id = strip.game_id.as_ref().map(|id| id.as_str());

    let mut results = team_statistics(game_id, &home.team, &away.team, &home.stats)?;
    results.extend(team_statistics(game_id, &away.team, &home.team, &away.stats)?);
    Ok(results)
}
