use std::collections::HashMap;
use std::sync::Arc;

use lambda_runtime::{Error, LambdaEvent};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{error, info, instrument};

use crate::config::Settings;
use crate::model::{Game, PlayerStatistic, Schedule, TeamStatistic};
use crate::resource::ScheduleQuery;
use crate::source::{Harvester, Pages};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Workflow {
    /// Normalize a schedule listing page.
    Schedule,
    /// Normalize matchup and box score pages for each supplied schedule entry.
    Stats,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Request {
    pub workflow: Workflow,
    /// Falls back to `BASE_URL` from the environment when absent.
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default)]
    pub query: ScheduleQuery,
    #[serde(default)]
    pub schedules: Vec<Schedule>,
    /// Page payloads already fetched by the caller, keyed by URL.
    #[serde(default)]
    pub pages: HashMap<String, Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Response {
    pub message: String,
    pub schedules: Vec<Schedule>,
    pub games: Vec<Game>,
    pub team_statistics: Vec<TeamStatistic>,
    pub player_statistics: Vec<PlayerStatistic>,
}

#[instrument(skip(event))]
pub async fn handler(event: LambdaEvent<Request>) -> Result<Response, Error> {
    process(event.payload, &Settings::from_env()).await
}

/// Run one request. Split from [`handler`] so it can be driven without a
/// Lambda context.
pub async fn process(request: Request, settings: &Settings) -> Result<Response, Error> {
    let base_url = request.base_url.unwrap_or_else(|| settings.base_url.clone());
    let harvester = Arc::new(Harvester::new(base_url, Pages(request.pages)));

    match request.workflow {
        Workflow::Schedule => {
            let schedules = harvester.schedule(&request.query).inspect_err(|e| {
                error!(error = %e, "Schedule extraction failed");
            })?;
            let message = format!("Extracted {} schedule entries", schedules.len());
            info!("{}", message);
            Ok(Response { message, schedules, ..Response::default() })
        }
        Workflow::Stats => {
            // Each entry only reads its own pages, so entries are harvested in parallel.
            let mut handles = Vec::with_capacity(request.schedules.len());
            for schedule in request.schedules {
                let harvester = Arc::clone(&harvester);
                handles.push(tokio::task::spawn_blocking(move || harvester.records_for(&schedule)));
            }

            let mut response = Response::default();
            for handle in handles {
                let records = handle.await?.inspect_err(|e| {
                    error!(error = %e, "Stat extraction failed");
                })?;
                response.games.extend(records.game);
                response.team_statistics.extend(records.team_statistics);
                response.player_statistics.extend(records.player_statistics);
            }
            response.message = format!(
                "Extracted {} games, {} team statistics, {} player statistics",
                response.games.len(),
                response.team_statistics.len(),
                response.player_statistics.len()
            );
            info!("{}", response.message);
            Ok(response)
        }
    }
}
