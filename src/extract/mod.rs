//! Page payload to record extractors.

pub mod game;
pub mod player;
pub mod schedule;
pub mod team;

pub use game::game_from_page;
pub use player::{player_statistics, player_statistics_from_page};
pub use schedule::{schedule_from_event, schedules_from_page};
pub use team::{team_statistics, team_statistics_from_page};
