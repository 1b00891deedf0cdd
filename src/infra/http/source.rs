use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::domain::entities::todo::Todo;
use crate::usecase::ports::source::{SourceError, TodoSource};

// No query parameters; paging and sorting happen on the client.
pub struct HttpTodoSource {
    http: Client,
    endpoint: String,
}

impl HttpTodoSource {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, SourceError> {
        let builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(timeout);
        #[cfg(target_arch = "wasm32")]
        let _ = timeout;

        Ok(Self {
            http: builder.build()?,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl TodoSource for HttpTodoSource {
    async fn fetch_all(&self) -> Result<Vec<Todo>, SourceError> {
        debug!(endpoint = %self.endpoint, "requesting todos");
        let todos = self
            .http
            .get(&self.endpoint)
            .send()
            .await?
            .error_for_status()
            .map_err(status_error)?
            .json::<Vec<Todo>>()
            .await
            .map_err(decode_error)?;
        Ok(todos)
    }
}

fn status_error(err: reqwest::Error) -> SourceError {
    match err.status() {
        Some(status) => SourceError::Status(status.as_u16()),
        None => SourceError::Request(err),
    }
}

fn decode_error(err: reqwest::Error) -> SourceError {
    if err.is_decode() {
        SourceError::Decode(err)
    } else {
        SourceError::Request(err)
    }
}
