use crate::core::PayloadSource;
use crate::utils::error::{DemoError, Result};
use reqwest::Client;

pub const DEFAULT_ENDPOINT: &str = "https://api.example.com/data";

pub struct HttpPayloadSource {
    client: Client,
    endpoint: String,
}

impl HttpPayloadSource {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait::async_trait]
impl PayloadSource for HttpPayloadSource {
    async fn fetch(&self) -> Result<serde_json::Value> {
        tracing::debug!("Making API request to: {}", self.endpoint);
        let response = self.client.get(&self.endpoint).send().await?;

        let status = response.status();
        tracing::debug!("API response status: {}", status);
        if !status.is_success() {
            return Err(DemoError::HttpStatusError {
                status: status.as_u16(),
            });
        }

        // 先取回原始內容再解碼，解碼失敗歸類為 SerializationError
        let body = response.bytes().await?;
        let payload = serde_json::from_slice(&body)?;
        Ok(payload)
    }
}

/// 抓取遠端資料；任何失敗只記錄日誌，不往上拋
pub async fn fetch_data<P: PayloadSource + ?Sized>(source: &P) -> Option<serde_json::Value> {
    fetch_outcome(source).await.ok()
}

/// 與 [`fetch_data`] 相同，但保留錯誤以便寫入報告
pub(crate) async fn fetch_outcome<P: PayloadSource + ?Sized>(
    source: &P,
) -> std::result::Result<serde_json::Value, String> {
    match source.fetch().await {
        Ok(payload) => {
            tracing::info!("✅ Remote payload fetched");
            Ok(payload)
        }
        Err(e) => {
            tracing::error!("Error fetching data: {}", e);
            Err(e.to_string())
        }
    }
}
