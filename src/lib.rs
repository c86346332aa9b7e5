//! Normalizes box score, matchup and schedule page payloads into flat,
//! typed records.

pub mod config;
pub mod error;
pub mod explode;
pub mod extract;
pub mod handler;
pub mod model;
pub mod resource;
pub mod source;

pub use error::{ExtractError, Result};
