pub mod certificate;
pub mod transport;

use crate::api::ValidationErrors;
use thiserror::Error;

pub use certificate::{CertificateClient, CertificateQuery};
pub use transport::{HttpTransport, Transport};

pub type Result<T> = std::result::Result<T, ClientError>;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("failed to send request to API server")]
    RequestError(#[from] reqwest::Error),
    #[error("failed to deserialize JSON data")]
    DeserializeError(#[from] serde_json::Error),
    #[error("invalid API url given")]
    InvalidUrlError(#[from] url::ParseError),
    #[error("invalid query parameters {0:?}")]
    InvalidQueryError(ValidationErrors),
    #[error("unexpected status [{status}] cause [{body}]")]
    UnexpectedStatusError { status: u16, body: String },
}
