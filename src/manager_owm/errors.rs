use thiserror::Error;

#[derive(Error, Debug)]
pub enum OwmError {
    #[error("OwmError::Http: {0}")]
    Http(String),
    #[error("OwmError::Document: {0}")]
    Document(String),
}

impl From<serde_json::Error> for OwmError {
    fn from(e: serde_json::Error) -> OwmError {
        OwmError::Document(format!("unexpected json document: {}", e))
    }
}
impl From<ureq::Error> for OwmError {
    fn from(e: ureq::Error) -> OwmError {
        OwmError::Http(format!("http request error: {}", e))
    }
}
