use thiserror::Error;

/// Errors produced while talking to the sports-data service
#[derive(Error, Debug)]
pub enum FootballError {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("unexpected status {status} from {url}")]
    Status { url: String, status: u16 },

    #[error("failed to decode {what}: {source}")]
    Decode {
        what: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("API error: {message}")]
    Api { message: String },

    #[error("competition \"{0}\" not found")]
    CompetitionNotFound(String),
}

/// Result type for data client operations
pub type FootballResult<T> = Result<T, FootballError>;
