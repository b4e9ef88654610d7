pub mod webhook_pipeline;

pub use webhook_pipeline::WebhookPipeline;
