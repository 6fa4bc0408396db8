use thiserror::Error;

pub type OrsResult<T> = Result<T, OrsError>;

#[derive(Error, Debug)]
pub enum OrsError {
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("openrouteservice responded with {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },
    #[error("Expected a {expected} response body")]
    UnexpectedBody { expected: &'static str },
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),
    #[error("API key required as OPENROUTESERVICE_API_KEY")]
    MissingApiKey,
}

#[derive(Error, Debug, PartialEq, Eq, Clone, Copy)]
pub enum PolylineError {
    #[error("Polyline ends inside a value group at byte {index}")]
    Truncated { index: usize },
    #[error("Polyline character {byte:#04x} at byte {index} is outside '?'..='~'")]
    InvalidCharacter { index: usize, byte: u8 },
    #[error("Polyline value starting at byte {index} does not fit in 64 bits")]
    Overflow { index: usize },
}
