use thiserror::Error;

#[derive(Error, Debug)]
pub enum EnrichError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Unexpected status {status} from service: {body}")]
    UnexpectedStatus { status: u16, body: String },
}

pub type Result<T> = std::result::Result<T, EnrichError>;
