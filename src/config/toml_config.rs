use crate::config::{validate_provider, DEFAULT_TIMEOUT_SECS, DEFAULT_WEBHOOK_URL};
use crate::core::presenter::OUTPUT_FILE_NAME;
use crate::core::ConfigProvider;
use crate::domain::model::HttpMethod;
use crate::utils::error::{FormatterError, Result};
use crate::utils::validation::Validate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    #[serde(default = "default_url")]
    pub url: String,
    #[serde(default)]
    pub method: HttpMethod,
    pub timeout_seconds: Option<u64>,
    pub campaign_id: Option<String>,
    pub input_file: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_output_path")]
    pub path: String,
    #[serde(default = "default_filename")]
    pub filename: String,
}

fn default_url() -> String {
    DEFAULT_WEBHOOK_URL.to_string()
}

fn default_output_path() -> String {
    "./output".to_string()
}

fn default_filename() -> String {
    OUTPUT_FILE_NAME.to_string()
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            method: HttpMethod::default(),
            timeout_seconds: None,
            campaign_id: None,
            input_file: None,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: default_output_path(),
            filename: default_filename(),
        }
    }
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;
        Ok(toml::from_str(&processed_content)?)
    }

    /// 替換環境變數 (例如 ${WEBHOOK_URL})；未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| FormatterError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn with_campaign_id(mut self, campaign_id: Option<String>) -> Self {
        if campaign_id.is_some() {
            self.source.campaign_id = campaign_id;
            self.source.input_file = None;
        }
        self
    }

    /// The full request URL, for dry runs.
    pub fn request_preview(&self) -> String {
        format!(
            "{:?} {}?campaign_id={}",
            self.source.method,
            self.source.url,
            self.source.campaign_id.as_deref().unwrap_or("")
        )
    }
}

impl ConfigProvider for TomlConfig {
    fn webhook_url(&self) -> &str {
        &self.source.url
    }

    fn http_method(&self) -> HttpMethod {
        self.source.method
    }

    fn timeout_secs(&self) -> u64 {
        self.source.timeout_seconds.unwrap_or(DEFAULT_TIMEOUT_SECS)
    }

    fn campaign_id(&self) -> Option<&str> {
        self.source.campaign_id.as_deref()
    }

    fn input_file(&self) -> Option<&str> {
        self.source.input_file.as_deref()
    }

    fn output_path(&self) -> &str {
        &self.output.path
    }

    fn output_filename(&self) -> &str {
        &self.output.filename
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_provider(self)
    }
}
