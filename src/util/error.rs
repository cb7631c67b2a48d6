// RuleScope - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// No string-based error propagation; all errors preserve the causal chain
// for diagnostic logging.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Top-level error type for all RuleScope operations.
/// Errors are categorised by the subsystem that produced them.
#[derive(Debug)]
pub enum RuleScopeError {
    /// Analyzer invocation failed.
    Bridge(BridgeError),

    /// Configuration loading or validation failed.
    Config(ConfigError),

    /// I/O error with path context.
    Io {
        path: PathBuf,
        operation: &'static str,
        source: io::Error,
    },
}

impl fmt::Display for RuleScopeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bridge(e) => write!(f, "Analyzer error: {e}"),
            Self::Config(e) => write!(f, "Configuration error: {e}"),
            Self::Io {
                path,
                operation,
                source,
            } => write!(
                f,
                "I/O error during {operation} on '{}': {source}",
                path.display()
            ),
        }
    }
}

impl std::error::Error for RuleScopeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Bridge(e) => Some(e),
            Self::Config(e) => Some(e),
            Self::Io { source, .. } => Some(source),
        }
    }
}

// ---------------------------------------------------------------------------
// Bridge errors
// ---------------------------------------------------------------------------

/// Errors raised by the process bridge when invoking the analyzer.
///
/// A non-zero analyzer exit is NOT an error here: the bridge returns it as
/// data inside `AnalysisResult` and the UI renders an advisory.
#[derive(Debug)]
pub enum BridgeError {
    /// The resolved analyzer path did not exist at call time.
    /// No process was spawned.
    ToolNotFound { path: PathBuf },

    /// The platform failed to create the child process (permissions,
    /// missing WSL layer, corrupt binary).
    SpawnFailure { path: PathBuf, source: io::Error },

    /// The pipe exchange with the child raised an I/O error
    /// (e.g. broken pipe while writing the rule text).
    CommunicationFailure { source: io::Error },
}

impl fmt::Display for BridgeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ToolNotFound { path } => write!(
                f,
                "analyzer not found at '{}' — make sure it is compiled and \
                 placed next to the application",
                path.display()
            ),
            Self::SpawnFailure { path, source } => {
                write!(f, "could not start analyzer '{}': {source}", path.display())
            }
            Self::CommunicationFailure { source } => {
                write!(f, "I/O failure while talking to the analyzer: {source}")
            }
        }
    }
}

impl std::error::Error for BridgeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::SpawnFailure { source, .. } => Some(source),
            Self::CommunicationFailure { source } => Some(source),
            Self::ToolNotFound { .. } => None,
        }
    }
}

impl From<BridgeError> for RuleScopeError {
    fn from(e: BridgeError) -> Self {
        Self::Bridge(e)
    }
}

// ---------------------------------------------------------------------------
// Config errors
// ---------------------------------------------------------------------------

/// Errors related to configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    /// TOML parsing failed.
    TomlParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// A config value is out of the allowed range.
    ValueOutOfRange {
        field: String,
        value: String,
        expected: String,
    },

    /// I/O error reading config file.
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TomlParse { path, source } => {
                write!(f, "Config parse error '{}': {source}", path.display())
            }
            Self::ValueOutOfRange {
                field,
                value,
                expected,
            } => write!(
                f,
                "Config '{field}' = '{value}' is out of range. Expected: {expected}"
            ),
            Self::Io { path, source } => {
                write!(f, "Config I/O error '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::TomlParse { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<ConfigError> for RuleScopeError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

/// Convenience type alias for RuleScope results.
pub type Result<T> = std::result::Result<T, RuleScopeError>;
