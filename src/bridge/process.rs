// RuleScope - bridge/process.rs
//
// The process bridge: run the external analyzer against one rule string
// and return its outcome.
//
// The exchange is deliberately synchronous -- the caller's thread blocks
// until the child exits. Invocations are therefore strictly sequential:
// a second analysis cannot begin before the previous child has terminated.
// There is no timeout; a hung analyzer hangs the call.

use crate::bridge::resolve::{AnalyzerLocation, LaunchStrategy};
use crate::util::constants;
use crate::util::error::BridgeError;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::Stdio;

/// Outcome of one analyzer invocation.
///
/// Produced once per call and replaced on the next; nothing is persisted.
/// A non-zero exit is represented here as data, not as an error.
#[derive(Debug, Clone)]
pub struct AnalysisResult {
    /// Complete text the analyzer wrote to stdout (lossy UTF-8).
    pub stdout: String,
    /// Complete text the analyzer wrote to stderr (lossy UTF-8).
    pub stderr: String,
    /// Exit code; `None` when the child was terminated by a signal.
    pub exit_code: Option<i32>,
}

impl AnalysisResult {
    /// True when the analyzer exited with status 0.
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

/// Synchronous bridge to the analyzer executable.
pub struct ProcessBridge {
    location: AnalyzerLocation,
    /// Where the WSL inspection copy of the rule text is written.
    inspection_path: PathBuf,
}

impl ProcessBridge {
    /// Create a bridge for the given resolved location.
    ///
    /// `data_dir` receives the `temp_rule.txt` inspection copy written
    /// before each WSL launch.
    pub fn new(location: AnalyzerLocation, data_dir: &Path) -> Self {
        Self {
            location,
            inspection_path: data_dir.join(constants::TEMP_RULE_FILE_NAME),
        }
    }

    /// The resolved analyzer location this bridge launches.
    pub fn location(&self) -> &AnalyzerLocation {
        &self.location
    }

    /// Run the analyzer against `rule` and collect its output.
    ///
    /// Preconditions: `rule` is non-empty after trimming. Empty input is
    /// rejected at the UI boundary, never here.
    ///
    /// The child's stdin is fed from a separate thread while this one
    /// drains stdout and stderr, then closed so the analyzer's read loop
    /// sees end-of-input. The child handle and all three pipes are
    /// released on every exit path.
    pub fn analyze(&self, rule: &str) -> Result<AnalysisResult, BridgeError> {
        // Existence is re-checked per call so the binary can be dropped in
        // (or removed) between runs without restarting the GUI.
        if !self.location.is_present() {
            tracing::warn!(
                path = %self.location.path.display(),
                "Analyzer binary missing; nothing spawned"
            );
            return Err(BridgeError::ToolNotFound {
                path: self.location.path.clone(),
            });
        }

        self.write_inspection_copy(rule);

        tracing::debug!(
            path = %self.location.path.display(),
            rule_len = rule.len(),
            "Spawning analyzer"
        );

        let mut child = self
            .location
            .command()
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| BridgeError::SpawnFailure {
                path: self.location.path.clone(),
                source: e,
            })?;

        // Feed stdin from its own thread while wait_with_output drains
        // stdout and stderr on this one. A rule larger than the OS pipe
        // buffer would otherwise deadlock against a child that writes
        // before reading to end-of-input. Dropping the handle at the end
        // of the closure is the end-of-input signal the analyzer
        // terminates its read loop on.
        let writer = child.stdin.take().map(|mut stdin| {
            let rule_bytes = rule.as_bytes().to_vec();
            std::thread::spawn(move || -> std::io::Result<()> {
                stdin.write_all(&rule_bytes)?;
                stdin.flush()
            })
        });

        // Reaps the child on every path, including a failed write above.
        let output = child
            .wait_with_output()
            .map_err(|e| BridgeError::CommunicationFailure { source: e })?;

        if let Some(handle) = writer {
            match handle.join() {
                // A child is free to exit without consuming its stdin; the
                // broken pipe that produces is not a failed exchange.
                Ok(Err(e)) if e.kind() != std::io::ErrorKind::BrokenPipe => {
                    return Err(BridgeError::CommunicationFailure { source: e });
                }
                _ => {}
            }
        }

        let result = AnalysisResult {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            exit_code: output.status.code(),
        };

        tracing::info!(
            exit_code = ?result.exit_code,
            stdout_len = result.stdout.len(),
            stderr_len = result.stderr.len(),
            "Analyzer finished"
        );

        Ok(result)
    }

    /// Mirror the rule text to `temp_rule.txt` before a WSL launch so it
    /// can be inspected by hand. The file is never read back; failures are
    /// logged and otherwise ignored.
    fn write_inspection_copy(&self, rule: &str) {
        if !matches!(self.location.strategy, LaunchStrategy::Wsl { .. }) {
            return;
        }
        if let Some(parent) = self.inspection_path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        if let Err(e) = std::fs::write(&self.inspection_path, rule.as_bytes()) {
            tracing::warn!(
                path = %self.inspection_path.display(),
                error = %e,
                "Could not write rule inspection copy"
            );
        }
    }
}

// =============================================================================
// Unit tests (stub analyzers are shell scripts, so Unix only)
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_tool_returns_tool_not_found() {
        let location = AnalyzerLocation {
            path: PathBuf::from("/nonexistent/rulescope-test/access_analyzer"),
            strategy: LaunchStrategy::Direct,
        };
        let dir = tempfile::TempDir::new().unwrap();
        let bridge = ProcessBridge::new(location, dir.path());

        let err = bridge.analyze("user admin").unwrap_err();
        assert!(
            matches!(err, BridgeError::ToolNotFound { .. }),
            "expected ToolNotFound, got {err:?}"
        );
    }

    #[cfg(unix)]
    mod unix {
        use super::super::*;
        use std::os::unix::fs::PermissionsExt;
        use tempfile::TempDir;

        /// Write an executable shell-script stub standing in for the analyzer.
        fn stub_analyzer(dir: &TempDir, body: &str) -> PathBuf {
            let path = dir.path().join("access_analyzer");
            std::fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
            let mut perms = std::fs::metadata(&path).unwrap().permissions();
            perms.set_mode(0o755);
            std::fs::set_permissions(&path, perms).unwrap();
            path
        }

        fn bridge_for(dir: &TempDir, path: PathBuf) -> ProcessBridge {
            ProcessBridge::new(
                AnalyzerLocation {
                    path,
                    strategy: LaunchStrategy::Direct,
                },
                dir.path(),
            )
        }

        /// A stub that echoes stdin verbatim proves the rule arrives intact
        /// and that stdin is closed (cat only exits on end-of-input).
        #[test]
        fn test_rule_round_trips_through_child_stdin() {
            let dir = TempDir::new().unwrap();
            let path = stub_analyzer(&dir, "cat");
            let bridge = bridge_for(&dir, path);

            let rule = "user admin AND hour >= 9 AND hour <= 17";
            let result = bridge.analyze(rule).unwrap();

            assert_eq!(result.stdout, rule);
            assert_eq!(result.stderr, "");
            assert_eq!(result.exit_code, Some(0));
            assert!(result.success());
        }

        #[test]
        fn test_nonzero_exit_and_stderr_are_data_not_errors() {
            let dir = TempDir::new().unwrap();
            let path = stub_analyzer(&dir, "printf 'syntax error' >&2; exit 2");
            let bridge = bridge_for(&dir, path);

            let result = bridge
                .analyze("resource = 'config.xml' AND user admin")
                .unwrap();

            assert_eq!(result.exit_code, Some(2));
            assert_eq!(result.stderr, "syntax error");
            assert!(!result.success());
        }

        #[test]
        fn test_both_streams_are_captured_completely() {
            let dir = TempDir::new().unwrap();
            let path = stub_analyzer(
                &dir,
                "printf 'line one\\nline two\\n'; printf 'warn\\n' >&2",
            );
            let bridge = bridge_for(&dir, path);

            let result = bridge.analyze("user guest").unwrap();
            assert_eq!(result.stdout, "line one\nline two\n");
            assert_eq!(result.stderr, "warn\n");
        }

        /// A rule much larger than the OS pipe buffer must still round-trip:
        /// stdin is fed concurrently with the output drain, so neither side
        /// can block the other.
        #[test]
        fn test_rule_larger_than_pipe_buffer_round_trips() {
            let dir = TempDir::new().unwrap();
            let path = stub_analyzer(&dir, "cat");
            let bridge = bridge_for(&dir, path);

            let rule = "user admin AND hour >= 9 AND hour <= 17\n".repeat(16_384);
            let result = bridge.analyze(&rule).unwrap();

            assert_eq!(result.stdout.len(), rule.len());
            assert_eq!(result.stdout, rule);
            assert_eq!(result.exit_code, Some(0));
        }

        /// A child that exits without reading its stdin breaks the pipe
        /// mid-write; that is the child's prerogative, not a bridge failure.
        #[test]
        fn test_child_that_ignores_stdin_is_not_an_error() {
            let dir = TempDir::new().unwrap();
            let path = stub_analyzer(&dir, "exit 0");
            let bridge = bridge_for(&dir, path);

            // Large enough that the write cannot fit in the pipe buffer.
            let rule = "user admin AND resource = 'config.xml'\n".repeat(16_384);
            let result = bridge.analyze(&rule).unwrap();

            assert_eq!(result.stdout, "");
            assert_eq!(result.exit_code, Some(0));
        }

        /// Removing the binary between calls flips the outcome back to
        /// ToolNotFound -- the existence check runs per invocation.
        #[test]
        fn test_existence_rechecked_each_call() {
            let dir = TempDir::new().unwrap();
            let path = stub_analyzer(&dir, "cat");
            let bridge = bridge_for(&dir, path.clone());

            assert!(bridge.analyze("user admin").is_ok());

            std::fs::remove_file(&path).unwrap();
            let err = bridge.analyze("user admin").unwrap_err();
            assert!(matches!(err, BridgeError::ToolNotFound { .. }));
        }
    }
}
