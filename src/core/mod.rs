pub mod engine;
pub mod markdown;
pub mod parser;
pub mod presenter;

pub use crate::domain::model::{DealershipConfig, MarkdownDocument};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
