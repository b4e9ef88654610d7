use clap::Parser;
use dealership_md::core::presenter::render_code_block;
use dealership_md::utils::error::{ErrorSeverity, FormatterError};
use dealership_md::utils::{logger, validation::Validate};
use dealership_md::{CliConfig, FormatterEngine, LocalStorage, WebhookPipeline};

fn exit_code(severity: ErrorSeverity) -> i32 {
    match severity {
        ErrorSeverity::Low => 1,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    }
}

/// Diagnostics stay at debug so the user sees only the single error line.
fn report_details(e: &FormatterError) {
    tracing::debug!(
        "Markdown generation failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::debug!("💡 Recovery suggestion: {}", e.recovery_suggestion());
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.log_json {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting dealership-md");
    tracing::debug!("CLI config: {:?}", config);

    // 驗證輸入，錯誤時不發出任何請求
    if let Err(e) = config.validate() {
        report_details(&e);
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(exit_code(e.severity()));
    }

    let storage = LocalStorage::new(config.output_path.clone());
    let pipeline = match WebhookPipeline::new(storage, config) {
        Ok(pipeline) => pipeline,
        Err(e) => {
            report_details(&e);
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(exit_code(e.severity()));
        }
    };

    let engine = FormatterEngine::new(pipeline);

    match engine.run().await {
        Ok(presentation) => {
            println!("{}", render_code_block(&presentation.markdown));
            tracing::info!(
                "✅ Rendered {} dealership(s) as {}",
                presentation.dealership_count,
                presentation.media_type
            );
            eprintln!(
                "📁 Download {} ({}): {}",
                presentation.file_name, presentation.media_type, presentation.output_path
            );
        }
        Err(e) => {
            report_details(&e);
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(exit_code(e.severity()));
        }
    }
}
