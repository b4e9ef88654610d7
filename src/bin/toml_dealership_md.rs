use clap::Parser;
use dealership_md::core::presenter::render_code_block;
use dealership_md::core::ConfigProvider;
use dealership_md::utils::error::FormatterError;
use dealership_md::utils::{logger, validation::Validate};
use dealership_md::{FormatterEngine, LocalStorage, TomlConfig, WebhookPipeline};

#[derive(Parser)]
#[command(name = "toml-dealership-md")]
#[command(about = "Render dealership configuration as Markdown using a TOML config file")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "dealership-md.toml")]
    config: String,

    /// Override the campaign ID from the config file
    #[arg(long)]
    campaign_id: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Dry run - show the request that would be sent without sending it
    #[arg(long)]
    dry_run: bool,
}

fn display_config_summary(config: &TomlConfig) {
    tracing::info!("📋 Configuration Summary:");
    match config.input_file() {
        Some(input_file) => tracing::info!("   Source: saved response {}", input_file),
        None => {
            tracing::info!("   Webhook: {:?} {}", config.http_method(), config.webhook_url());
            tracing::info!("   Timeout: {}s", config.timeout_secs());
        }
    }
    tracing::info!(
        "   Output: {}/{}",
        config.output_path(),
        config.output_filename()
    );
}

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
    let args = Args::parse();

    logger::init_cli_logger(args.verbose);

    tracing::info!("🚀 Starting TOML-based dealership-md");
    tracing::info!("📁 Loading configuration from: {}", args.config);

    // 載入 TOML 配置
    let config = match TomlConfig::from_file(&args.config) {
        Ok(config) => config.with_campaign_id(args.campaign_id.clone()),
        Err(e) => {
            report_details(&e);
            eprintln!("❌ Failed to load config file '{}': {}", args.config, e);
            std::process::exit(1);
        }
    };

    // 驗證配置
    if let Err(e) = config.validate() {
        report_details(&e);
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    display_config_summary(&config);

    if args.dry_run {
        tracing::info!("🔍 DRY RUN MODE - No request will be sent");
        if config.input_file().is_none() {
            println!("{}", config.request_preview());
        }
        return;
    }

    let storage = LocalStorage::new(config.output_path().to_string());
    let pipeline = match WebhookPipeline::new(storage, config) {
        Ok(pipeline) => pipeline,
        Err(e) => {
            report_details(&e);
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };

    match FormatterEngine::new(pipeline).run().await {
        Ok(presentation) => {
            println!("{}", render_code_block(&presentation.markdown));
            eprintln!(
                "📁 Download {} ({}): {}",
                presentation.file_name, presentation.media_type, presentation.output_path
            );
        }
        Err(e) => {
            report_details(&e);
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    }
}
