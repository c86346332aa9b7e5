use serde_json::Value;
use tracing::instrument;

use crate::error::Result;
use crate::explode::{explode, zip_shortest};
use crate::extract::game::{game_package, section};
use crate::model::page::{BoxScoreTeam, Identity, StatCategory};
use crate::model::{BaseStatistic, Entity, PlayerStatistic, Update};

/// Player statistics for one team's box score categories.
///
/// Each athlete's `stats` line is paired with the category `keys` by
/// position; a short line simply yields fewer records.
pub fn player_statistics(
    team: &Identity,
    opponent: &Identity,
    categories: &[StatCategory],
) -> Result<Vec<PlayerStatistic>> {
    let mut result = Vec::new();
    for category in categories {
        for line in &category.athletes {
            let item = PlayerStatistic {
                base: BaseStatistic {
                    team: team.display_name.clone(),
                    opponent: opponent.display_name.clone(),
                    ..BaseStatistic::default()
                },
                player_name: line.athlete.display_name.clone(),
                player_url: line.athlete.link.clone(),
            };
            for (key, value) in zip_shortest(&category.keys, &line.stats) {
                result.extend(explode(&item, (key.as_str(), value.as_str()))?);
            }
        }
    }
    Ok(result)
}

/// Player statistics from a box score page, away team first.
///
/// Empty when the page has fewer than two team blocks. Every record is
/// stamped with `game_id`.
#[instrument(level = "debug", skip(payload))]
pub fn player_statistics_from_page(payload: Option<&Value>, game_id: &str) -> Result<Vec<PlayerStatistic>> {
    let Some(package) = game_package(payload)? else {
        return Ok(Vec::new());
    };
    let box_score: Vec<BoxScoreTeam> = section(&package, "bxscr")?;
    let [away, home, ..] = box_score.as_slice() else {
        return Ok(Vec::new());
    };

    let mut stats = player_statistics(&away.team, &home.team, &away.stats)?;
    stats.extend(player_statistics(&home.team, &away.team, &home.stats)?);

    let stamp = Update::new().set("game_id", game_id);
    Ok(stats.iter().map(|stat| stat.copy(Some(&stamp))).collect())
}
