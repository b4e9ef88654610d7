pub mod cli;
pub mod toml_config;

use crate::core::presenter::OUTPUT_FILE_NAME;
use crate::core::ConfigProvider;
use crate::domain::model::HttpMethod;
use crate::utils::error::{FormatterError, Result};
use crate::utils::validation::{
    validate_campaign_id, validate_file_name, validate_path, validate_range, validate_url,
    Validate,
};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

pub const DEFAULT_WEBHOOK_URL: &str = "https://apps.dgaauto.com/virtualAgentData/webhook";
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;
pub const MAX_TIMEOUT_SECS: u64 = 300;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "dealership-md")]
#[command(about = "Render a dealership's webhook configuration as Markdown")]
pub struct CliConfig {
    /// 4-digit campaign ID sent to the webhook
    #[arg(long)]
    pub campaign_id: Option<String>,

    /// Render a saved webhook response instead of calling the webhook
    #[arg(long, conflicts_with = "campaign_id")]
    pub input_file: Option<String>,

    #[arg(long, default_value = DEFAULT_WEBHOOK_URL)]
    pub webhook_url: String,

    #[arg(long, value_enum, default_value_t = HttpMethod::Post)]
    pub method: HttpMethod,

    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_secs: u64,

    #[arg(long, default_value = "./output")]
    pub output_path: String,

    #[arg(long, default_value = OUTPUT_FILE_NAME)]
    pub output_filename: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub log_json: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn webhook_url(&self) -> &str {
        &self.webhook_url
    }

    fn http_method(&self) -> HttpMethod {
        self.method
    }

    fn timeout_secs(&self) -> u64 {
        self.timeout_secs
    }

    fn campaign_id(&self) -> Option<&str> {
        self.campaign_id.as_deref()
    }

    fn input_file(&self) -> Option<&str> {
        self.input_file.as_deref()
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn output_filename(&self) -> &str {
        &self.output_filename
    }
}

/// Checks shared by every configuration source.
pub fn validate_provider<C: ConfigProvider>(config: &C) -> Result<()> {
    match (config.campaign_id(), config.input_file()) {
        (Some(campaign_id), _) => validate_campaign_id(campaign_id)?,
        (None, Some(input_file)) => validate_path("input_file", input_file)?,
        (None, None) => {
            return Err(FormatterError::ConfigError {
                message: "either a campaign ID or an input file is required".to_string(),
            })
        }
    }

    if config.input_file().is_none() {
        validate_url("webhook_url", config.webhook_url())?;
        validate_range("timeout_secs", config.timeout_secs(), 1, MAX_TIMEOUT_SECS)?;
    }

    validate_path("output_path", config.output_path())?;
    validate_file_name("output_filename", config.output_filename())?;
    Ok(())
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_provider(self)
    }
}
