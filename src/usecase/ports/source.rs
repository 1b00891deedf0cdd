use async_trait::async_trait;
use thiserror::Error;

use crate::domain::entities::todo::Todo;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("server answered with status {0}")]
    Status(u16),
    #[error("malformed todo payload: {0}")]
    Decode(#[source] reqwest::Error),
}

#[async_trait]
pub trait TodoSource: Send + Sync {
    async fn fetch_all(&self) -> Result<Vec<Todo>, SourceError>;
}
