use crate::core::presenter::Presentation;
use crate::domain::model::{DealershipConfig, HttpMethod, MarkdownDocument};
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
    fn webhook_url(&self) -> &str;
    fn http_method(&self) -> HttpMethod;
    fn timeout_secs(&self) -> u64;
    fn campaign_id(&self) -> Option<&str>;
    fn input_file(&self) -> Option<&str>;
    fn output_path(&self) -> &str;
    fn output_filename(&self) -> &str;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<DealershipConfig>>;
    async fn transform(&self, data: Vec<DealershipConfig>) -> Result<MarkdownDocument>;
    async fn load(&self, document: MarkdownDocument) -> Result<Presentation>;
}
