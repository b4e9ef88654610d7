use crate::adapters::http::WebhookClient;
use crate::core::markdown::build_document;
use crate::core::parser::parse_dealerships;
use crate::core::presenter::{Presentation, MARKDOWN_MEDIA_TYPE};
use crate::core::{ConfigProvider, DealershipConfig, MarkdownDocument, Pipeline, Storage};
use crate::utils::error::{FormatterError, Result};
use crate::utils::validation::validate_campaign_id;

/// Fetches one campaign's configuration, renders it and saves the document.
pub struct WebhookPipeline<S: Storage, C: ConfigProvider> {
    pub(crate) storage: S,
    pub(crate) config: C,
    pub(crate) client: WebhookClient,
}

impl<S: Storage, C: ConfigProvider> WebhookPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Result<Self> {
        let client = WebhookClient::from_config(&config)?;
        Ok(Self {
            storage,
            config,
            client,
        })
    }

    async fn raw_payload(&self) -> Result<String> {
        if let Some(input_file) = self.config.input_file() {
            tracing::info!("📄 Reading saved response from: {}", input_file);
            return Ok(tokio::fs::read_to_string(input_file).await?);
        }

        let campaign_id = self.config.campaign_id().ok_or_else(|| FormatterError::ConfigError {
            message: "either a campaign ID or an input file is required".to_string(),
        })?;
        // Nothing reaches the network without a well-formed campaign ID.
        validate_campaign_id(campaign_id)?;

        tracing::info!("🌐 Requesting campaign {} from {}", campaign_id, self.client.url());
        self.client.fetch(campaign_id).await
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for WebhookPipeline<S, C> {
    async fn extract(&self) -> Result<Vec<DealershipConfig>> {
        let raw = self.raw_payload().await?;
        tracing::debug!("Parsing {} bytes of payload", raw.len());
        parse_dealerships(&raw)
    }

    async fn transform(&self, data: Vec<DealershipConfig>) -> Result<MarkdownDocument> {
        build_document(&data)
    }

    async fn load(&self, document: MarkdownDocument) -> Result<Presentation> {
        let file_name = self.config.output_filename().to_string();
        tracing::debug!(
            "Writing {} ({} bytes, {})",
            file_name,
            document.markdown.len(),
            MARKDOWN_MEDIA_TYPE
        );

        let output_path = self
            .storage
            .write_file(&file_name, document.markdown.as_bytes())
            .await?;

        Ok(Presentation {
            markdown: document.markdown,
            output_path,
            file_name,
            media_type: MARKDOWN_MEDIA_TYPE,
            dealership_count: document.dealership_count,
        })
    }
}
