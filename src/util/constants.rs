// RuleScope - util/constants.rs
//
// Single source of truth for all named constants, limits, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "RuleScope";

/// Application identifier used for config/data directories.
pub const APP_ID: &str = "RuleScope";

/// Current application version (updated by release script).
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Analyzer executable
// =============================================================================

/// Analyzer file name on Unix-like platforms (and the Windows fallback).
pub const ANALYZER_BIN: &str = "access_analyzer";

/// Preferred analyzer file name on Windows.
pub const ANALYZER_BIN_WINDOWS: &str = "access_analyzer.exe";

/// Interactive-prompt banner the analyzer prints to stdout even when its
/// input is piped. Stripped from displayed output.
///
/// This text is an external contract with the analyzer binary; it must be
/// kept in sync if the analyzer's prompt ever changes.
pub const ANALYZER_BANNER: &str =
    "\u{1f4dd} Ingrese reglas de acceso (Enter y luego Ctrl+D para terminar):";

/// WSL launcher binary used on Windows, where the analyzer is a Linux build.
pub const WSL_BIN: &str = "wsl";

/// Path the analyzer is invoked by inside WSL, relative to the application
/// directory (WSL resolves it against the working directory we set).
pub const WSL_ANALYZER_ARG: &str = "./access_analyzer";

/// File the rule text is mirrored to before a WSL launch, for manual
/// inspection. Never read back by the application.
pub const TEMP_RULE_FILE_NAME: &str = "temp_rule.txt";

// =============================================================================
// Predefined rule examples
// =============================================================================

/// Well-formed example rules offered as one-click buttons.
pub const EXAMPLE_RULES: [&str; 4] = [
    "user admin AND hour >= 9 AND hour <= 17",
    "user guest AND NOT resource = 'config.xml'",
    "user operator AND day = 'Monday' OR day = 'Wednesday'",
    "user admin AND resource != 'logs.txt'",
];

/// Deliberately malformed example used to demonstrate failure reporting
/// (clause order the analyzer rejects).
pub const INVALID_EXAMPLE_RULE: &str = "resource = 'config.xml' AND user admin";

// =============================================================================
// UI defaults
// =============================================================================

/// Default UI body font size in points.
pub const DEFAULT_FONT_SIZE: f32 = 14.5;

/// Minimum user-configurable UI font size (points).
pub const MIN_FONT_SIZE: f32 = 10.0;

/// Maximum user-configurable UI font size (points).
pub const MAX_FONT_SIZE: f32 = 24.0;

/// Maximum characters of a loaded example echoed in the status bar.
pub const STATUS_PREVIEW_CHARS: usize = 30;

// =============================================================================
// Logging
// =============================================================================

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

// =============================================================================
// Configuration
// =============================================================================

/// Configuration file name.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Session persistence file name (stored in the platform data directory).
pub const SESSION_FILE_NAME: &str = "session.json";
