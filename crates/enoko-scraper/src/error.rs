use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScraperError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("invalid catalog link pattern for host \"{host}\": {source}")]
    InvalidPattern {
        host: String,
        #[source]
        source: regex::Error,
    },
}
