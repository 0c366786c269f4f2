use thiserror::Error;

#[derive(Error, Debug)]
pub enum HolidayError {
    #[error("unknown region code: {0}")]
    UnknownRegion(String),

    #[error("invalid holiday JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("invalid date '{value}' for holiday '{name}'")]
    InvalidDate { name: String, value: String },
}
