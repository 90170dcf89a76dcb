use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<String>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn endpoint(&self) -> &str;
    fn fetch_enabled(&self) -> bool;
    fn report_path(&self) -> Option<&str>;
    fn monitoring_enabled(&self) -> bool;
}

/// 遠端資料來源，回傳已解碼但結構不定的 JSON
#[async_trait]
pub trait PayloadSource: Send + Sync {
    async fn fetch(&self) -> Result<serde_json::Value>;
}
