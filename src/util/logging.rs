// RuleScope - util/logging.rs
//
// Structured logging with runtime-selectable debug mode.
//
// Activation:
//   - Environment variable: RUST_LOG=debug (or trace)
//   - CLI flag: --debug (sets the filter to debug)
//   - Config file: [logging] level = "debug"
//
// Output: stderr. Never logs rule text beyond short previews.

use tracing_subscriber::EnvFilter;

/// Pick the filter directive from the three possible sources.
///
/// Priority: RUST_LOG env var > CLI --debug flag > config level > default.
/// Pure so the selection order can be tested without touching the
/// process environment or a global subscriber.
fn filter_directive(
    env_rust_log: Option<&str>,
    debug_flag: bool,
    config_level: Option<&str>,
) -> String {
    if let Some(env) = env_rust_log {
        env.to_string()
    } else if debug_flag {
        "debug".to_string()
    } else if let Some(level) = config_level {
        level.to_string()
    } else {
        super::constants::DEFAULT_LOG_LEVEL.to_string()
    }
}

/// Initialise the logging subsystem.
///
/// `debug_flag` is true when the user passed --debug on the CLI.
/// `config_level` is the validated level from config.toml (if present),
/// so this must run after the config file has been loaded.
pub fn init(debug_flag: bool, config_level: Option<&str>) {
    let rust_log = std::env::var("RUST_LOG").ok();
    let directive = filter_directive(rust_log.as_deref(), debug_flag, config_level);
    let filter = EnvFilter::new(&directive);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .compact()
        .init();

    tracing::debug!(
        app = super::constants::APP_NAME,
        version = super::constants::APP_VERSION,
        filter = %directive,
        "Logging initialised"
    );
}
