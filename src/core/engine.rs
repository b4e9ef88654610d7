use crate::core::presenter::Presentation;
use crate::core::Pipeline;
use crate::utils::error::Result;

pub struct FormatterEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> FormatterEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    /// Runs fetch, render and save in order. Any failure aborts the run
    /// before anything is written.
    pub async fn run(&self) -> Result<Presentation> {
        tracing::info!("🚀 Starting markdown generation");

        tracing::info!("📥 Fetching dealership configuration...");
        let configs = self.pipeline.extract().await?;
        tracing::info!("📊 Received {} dealership configuration(s)", configs.len());

        tracing::info!("🔧 Rendering markdown...");
        let document = self.pipeline.transform(configs).await?;
        tracing::info!("✅ Rendered {} bytes of markdown", document.markdown.len());

        tracing::info!("💾 Saving document...");
        let presentation = self.pipeline.load(document).await?;
        tracing::info!("📁 Output saved to: {}", presentation.output_path);

        Ok(presentation)
    }
}
