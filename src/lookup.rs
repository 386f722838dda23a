use crate::errors::LookupError;
use crate::models::{ScanCode, StockCandidate};
use async_trait::async_trait;
use tracing::debug;

pub const LOOKUP_PATH: &str = "/api/produtos_por_codigo";

/// Source of stock candidates for a scanned code.
#[async_trait]
pub trait LookupClient: Send + Sync {
    async fn lookup(&self, code: &ScanCode) -> Result<Vec<StockCandidate>, LookupError>;
}

/// Queries the inventory backend's search endpoint. One request per call,
/// no retry and no timeout.
#[derive(Debug, Clone)]
pub struct HttpLookupClient {
    http: reqwest::Client,
    base_url: String,
}

impl HttpLookupClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn endpoint(&self) -> String {
        format!("{}{}", self.base_url, LOOKUP_PATH)
    }
}

#[async_trait]
impl LookupClient for HttpLookupClient {
    async fn lookup(&self, code: &ScanCode) -> Result<Vec<StockCandidate>, LookupError> {
        debug!(%code, "querying backend for candidates");
        let response = self
            .http
            .get(self.endpoint())
            .query(&[("codigo", code.as_str())])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(LookupError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(|err| LookupError::Decode(err.to_string()))
    }
}
