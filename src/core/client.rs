use crate::core::model::{QueryRequest, QueryResponse};
use crate::core::ports::QueryExecutor;
use crate::utils::error::{Result, TesterError};
use reqwest::blocking::Client;
use std::time::Duration;

pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Blocking HTTP adapter; meant to be driven from a worker thread, never the
/// UI thread.
pub struct HttpQueryClient {
    client: Client,
}

impl HttpQueryClient {
    pub fn new() -> Result<Self> {
        Self::with_timeout(REQUEST_TIMEOUT)
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| TesterError::Transport(e.to_string()))?;
        Ok(Self { client })
    }
}

impl QueryExecutor for HttpQueryClient {
    fn execute(&self, request: &QueryRequest) -> Result<QueryResponse> {
        tracing::debug!("POST {} with payload {}", request.target_url, request.payload());

        // 單次請求，不重試；失敗直接映射為錯誤分類
        let response = self
            .client
            .post(&request.target_url)
            .json(&request.payload())
            .send()?;

        let status_code = response.status().as_u16();
        let body = response.text()?;
        tracing::debug!("Response status {} ({} bytes)", status_code, body.len());

        Ok(QueryResponse { status_code, body })
    }
}
