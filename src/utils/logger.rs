use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_DIRECTIVES: &str = "dealership_md=info,toml_dealership_md=info";
const VERBOSE_DIRECTIVES: &str = "dealership_md=debug,toml_dealership_md=debug,info";

/// `RUST_LOG` wins; otherwise both the library and the binaries log at info.
fn env_filter(verbose: bool) -> EnvFilter {
    let directives = if verbose { VERBOSE_DIRECTIVES } else { DEFAULT_DIRECTIVES };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directives))
}

/// Logs go to stderr; stdout is reserved for the rendered document.
pub fn init_cli_logger(verbose: bool) {
    tracing_subscriber::registry()
        .with(env_filter(verbose))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}

pub fn init_json_logger(verbose: bool) {
    tracing_subscriber::registry()
        .with(env_filter(verbose))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .json(),
        )
        .init();
}
