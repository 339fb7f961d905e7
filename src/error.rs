use chrono::NaiveDate;

#[derive(Debug, thiserror::Error)]
pub enum DashboardError {
    #[error("invalid date range: start {start} is after end {end}")]
    InvalidDateRange { start: NaiveDate, end: NaiveDate },

    #[error("invalid filter criteria: {0}")]
    InvalidCriteria(String),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("no data in selection")]
    EmptySelection,

    #[error(
        "no Notion token configured and the {} environment variable is not set",
        crate::config::NOTION_TOKEN_ENV
    )]
    MissingToken,

    #[error("Notion page not found: {0}")]
    PageNotFound(String),

    #[error("Notion request unauthorized: {0}")]
    Unauthorized(String),

    #[error("Notion API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, DashboardError>;
