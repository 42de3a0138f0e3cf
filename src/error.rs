use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum CardError {
    #[error("network error: {0}")]
    Network(String),
    #[error("http {status} from {url}")]
    Status { status: u16, url: String },
    #[error("parse error: {0}")]
    Parse(String),
    #[error("config error: {0}")]
    Config(String),
}

impl From<reqwest::Error> for CardError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Parse(err.to_string())
        } else {
            Self::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for CardError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}
