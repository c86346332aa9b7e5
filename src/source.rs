use std::collections::HashMap;

use serde::Serialize;
use serde_json::Value;
use tracing::{info, instrument, warn};

use crate::error::Result;
use crate::extract;
use crate::model::{Entity, Game, PlayerStatistic, Schedule, TeamStatistic};
use crate::resource::{Resource, ScheduleQuery};

/// Supplies the parsed page payload behind a URL. `None` means no data.
pub trait PageSource {
    fn fetch(&self, url: &str) -> Option<Value>;
}

impl<F> PageSource for F
where
    F: Fn(&str) -> Option<Value>,
{
    fn fetch(&self, url: &str) -> Option<Value> {
        self(url)
    }
}

/// Pages fetched ahead of time, keyed by URL.
#[derive(Debug, Clone, Default)]
pub struct Pages(pub HashMap<String, Value>);

impl PageSource for Pages {
    fn fetch(&self, url: &str) -> Option<Value> {
        let page = self.0.get(url).cloned();
        if page.is_none() {
            warn!(url = %url, "No page supplied");
        }
        page
    }
}

/// Everything harvested for one scheduled game, already stamped with the
/// schedule's partition keys and game id.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GameRecords {
    pub game: Option<Game>,
    pub team_statistics: Vec<TeamStatistic>,
    pub player_statistics: Vec<PlayerStatistic>,
}

/// Resolves resources against a base URL and runs the extractors over
/// whatever the page source returns.
#[derive(Debug)]
pub struct Harvester<S> {
    base_url: String,
    source: S,
}

impl<S: PageSource> Harvester<S> {
    pub fn new(base_url: impl Into<String>, source: S) -> Self {
        Self { base_url: base_url.into(), source }
    }

    fn page(&self, resource: Resource<'_>) -> Result<Option<Value>> {
        let url = resource.url(&self.base_url)?;
        Ok(self.source.fetch(&url))
    }

    /// Schedule entries for a listing, stamped with the query's partition keys.
    /// Keys left at zero in the query keep the values read from each event.
    #[instrument(level = "info", skip(self))]
    pub fn schedule(&self, query: &ScheduleQuery) -> Result<Vec<Schedule>> {
        let payload = self.page(Resource::Schedule(query))?;
        let entries = extract::schedules_from_page(payload.as_ref())?;
        let stamp = query.partition().update();
        info!(count = entries.len(), "Extracted schedule entries");
        Ok(entries.iter().map(|entry| entry.copy(Some(&stamp))).collect())
    }

    pub fn game(&self, game_id: &str) -> Result<Option<Game>> {
        let payload = self.page(Resource::Matchup(game_id))?;
        extract::game_from_page(payload.as_ref(), game_id)
    }

    pub fn team_statistics(&self, game_id: &str) -> Result<Vec<TeamStatistic>> {
        let payload = self.page(Resource::Matchup(game_id))?;
        extract::team_statistics_from_page(payload.as_ref())
    }

    pub fn player_statistics(&self, game_id: &str) -> Result<Vec<PlayerStatistic>> {
        let payload = self.page(Resource::Boxscore(game_id))?;
        extract::player_statistics_from_page(payload.as_ref(), game_id)
    }

    /// Game, team and player records for one schedule entry.
    #[instrument(level = "info", skip(self, schedule), fields(game_id = %schedule.game_id))]
    pub fn records_for(&self, schedule: &Schedule) -> Result<GameRecords> {
        let stamp = schedule.stamp();
        let game_id = schedule.game_id.as_str();

        let records = GameRecords {
            game: self.game(game_id)?.map(|game| game.copy(Some(&stamp))),
            team_statistics: self.team_statistics(game_id)?.iter().map(|s| s.copy(Some(&stamp))).collect(),
            player_statistics: self.player_statistics(game_id)?.iter().map(|s| s.copy(Some(&stamp))).collect(),
        };
        info!(
            teams = records.team_statistics.len(),
            players = records.player_statistics.len(),
            has_game = records.game.is_some(),
            "Harvested game records"
        );
        Ok(records)
    }
}
