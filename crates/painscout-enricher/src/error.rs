use thiserror::Error;

#[derive(Debug, Error)]
pub enum EnricherError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("classifier API error ({status}): {body}")]
    Api { status: u16, body: String },

    #[error("classifier returned no text")]
    EmptyResponse,

    #[error("classifier returned malformed JSON: {0}")]
    Parse(#[from] serde_json::Error),
}
