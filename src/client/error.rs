use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("invalid property: {0}")]
    Validation(String),
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server returned {status}: {message}")]
    Api { status: u16, message: String },
    #[error("invalid service url: {0}")]
    Url(#[from] url::ParseError),
    #[error("could not read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
