// RuleScope - bridge/resolve.rs
//
// Analyzer executable location and launch strategy.
//
// Resolved once at startup and carried as an explicit value through the
// process bridge -- no ambient globals. Existence is still re-checked on
// every invocation, so the binary may be added or removed between runs
// without restarting the application.

use crate::util::constants;
use std::path::{Path, PathBuf};
use std::process::Command;

/// How the analyzer child process is started.
///
/// The analyzer ships as a Linux binary, so on Windows it must be launched
/// through WSL; everywhere else it is executed directly. The strategy is
/// selected once at resolution time, never re-branched at call sites.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LaunchStrategy {
    /// Invoke the resolved path directly.
    Direct,
    /// Invoke `wsl [-d <distro>] ./access_analyzer` from the analyzer's
    /// directory.
    Wsl { distro: Option<String> },
}

/// Resolved analyzer location: filesystem path plus launch strategy.
#[derive(Debug, Clone)]
pub struct AnalyzerLocation {
    pub path: PathBuf,
    pub strategy: LaunchStrategy,
}

impl AnalyzerLocation {
    /// Resolve the analyzer next to the running application.
    ///
    /// Windows: `<app-dir>/access_analyzer.exe`, falling back to
    /// `<app-dir>/access_analyzer` when the .exe is absent (the usual case,
    /// since the analyzer is a Linux build run through WSL).
    /// Other platforms: `<app-dir>/access_analyzer`.
    ///
    /// `override_path` (from config or CLI) replaces the lookup entirely
    /// but keeps the platform strategy.
    pub fn resolve(
        app_dir: &Path,
        override_path: Option<&Path>,
        wsl_distro: Option<&str>,
    ) -> Self {
        let path = match override_path {
            Some(p) => p.to_path_buf(),
            None => Self::default_path(app_dir),
        };

        let strategy = Self::platform_strategy(wsl_distro);

        tracing::info!(
            path = %path.display(),
            strategy = ?strategy,
            present = path.exists(),
            "Analyzer location resolved"
        );

        Self { path, strategy }
    }

    #[cfg(windows)]
    fn default_path(app_dir: &Path) -> PathBuf {
        let exe = app_dir.join(constants::ANALYZER_BIN_WINDOWS);
        if exe.exists() {
            exe
        } else {
            app_dir.join(constants::ANALYZER_BIN)
        }
    }

    #[cfg(not(windows))]
    fn default_path(app_dir: &Path) -> PathBuf {
        app_dir.join(constants::ANALYZER_BIN)
    }

    #[cfg(windows)]
    fn platform_strategy(wsl_distro: Option<&str>) -> LaunchStrategy {
        LaunchStrategy::Wsl {
            distro: wsl_distro.map(str::to_owned),
        }
    }

    #[cfg(not(windows))]
    fn platform_strategy(_wsl_distro: Option<&str>) -> LaunchStrategy {
        LaunchStrategy::Direct
    }

    /// Whether the analyzer binary currently exists on disk.
    pub fn is_present(&self) -> bool {
        self.path.exists()
    }

    /// Build the (not yet spawned) command for this location.
    pub fn command(&self) -> Command {
        match &self.strategy {
            LaunchStrategy::Direct => Command::new(&self.path),
            LaunchStrategy::Wsl { distro } => {
                let mut cmd = Command::new(constants::WSL_BIN);
                if let Some(d) = distro {
                    cmd.arg("-d").arg(d);
                }
                cmd.arg(constants::WSL_ANALYZER_ARG);
                // Run from the analyzer's directory so the relative path
                // resolves inside WSL.
                if let Some(dir) = self.path.parent() {
                    cmd.current_dir(dir);
                }
                cmd
            }
        }
    }
}
