pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::cli::LocalStorage;
#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::toml_config::TomlConfig;

pub use app::pipelines::WebhookPipeline;
pub use core::{engine::FormatterEngine, markdown::render_markdown};
pub use utils::error::{FormatterError, Result};
