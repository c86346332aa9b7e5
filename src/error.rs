use thiserror::Error;

/// Failures raised while normalizing a page payload.
///
/// Absent sections never produce one of these; extractors return an empty
/// result instead. Errors are reserved for data that is present but cannot
/// be read.
#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("Payload has an unexpected shape: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid {field} value: {value}")]
    Number { field: &'static str, value: String },

    #[error("Invalid clock value for {label}: {value}")]
    Clock { label: String, value: String },

    #[error("Malformed event {game_id}: no {side} team listed")]
    MalformedEvent { game_id: String, side: &'static str },

    #[error("Invalid schedule date {0}, expected YYYYMMDD")]
    Date(String),
}

pub type Result<T> = std::result::Result<T, ExtractError>;
