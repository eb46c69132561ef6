//! tracing-subscriber setup for the console binary

use tracing_subscriber::EnvFilter;

/// Install the global fmt subscriber
///
/// `RUST_LOG` wins when set; otherwise `verbose` selects debug and `level`
/// (from configuration) applies.
pub fn init(level: &str, verbose: bool) {
    let level = if verbose { "debug" } else { level };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("{},useradmin_console={}", level, level).into()),
        )
        .with_target(true)
        .with_line_number(true)
        .with_writer(std::io::stderr)
        .try_init();
}
