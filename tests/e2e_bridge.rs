// RuleScope - tests/e2e_bridge.rs
//
// End-to-end tests for the process bridge and output rendering.
//
// These tests exercise real child processes: stub analyzers are written to
// a temp directory as executable shell scripts, so most of the suite is
// Unix-only. No mocks — this is the full path from rule text to rendered
// display output.

use rulescope::bridge::process::{AnalysisResult, ProcessBridge};
use rulescope::bridge::report;
use rulescope::bridge::resolve::{AnalyzerLocation, LaunchStrategy};
use rulescope::util::constants;
use rulescope::util::error::BridgeError;
use std::path::PathBuf;

// =============================================================================
// Helpers
// =============================================================================

fn direct_location(path: PathBuf) -> AnalyzerLocation {
    AnalyzerLocation {
        path,
        strategy: LaunchStrategy::Direct,
    }
}

#[cfg(unix)]
fn stub_analyzer(dir: &tempfile::TempDir, body: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;
    let path = dir.path().join("access_analyzer");
    std::fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
    let mut perms = std::fs::metadata(&path).unwrap().permissions();
    perms.set_mode(0o755);
    std::fs::set_permissions(&path, perms).unwrap();
    path
}

// =============================================================================
// Missing tool (platform independent)
// =============================================================================

/// With the executable absent, analyze returns ToolNotFound and spawns
/// nothing.
#[test]
fn e2e_missing_analyzer_returns_tool_not_found() {
    let dir = tempfile::TempDir::new().unwrap();
    let absent = dir.path().join("access_analyzer");
    let bridge = ProcessBridge::new(direct_location(absent.clone()), dir.path());

    let err = bridge.analyze("user admin").unwrap_err();
    match err {
        BridgeError::ToolNotFound { path } => assert_eq!(path, absent),
        other => panic!("expected ToolNotFound, got {other:?}"),
    }
}

/// The ToolNotFound message includes the resolved path so the user knows
/// where to install the binary.
#[test]
fn e2e_tool_not_found_message_names_the_path() {
    let dir = tempfile::TempDir::new().unwrap();
    let absent = dir.path().join("access_analyzer");
    let bridge = ProcessBridge::new(direct_location(absent.clone()), dir.path());

    let err = bridge.analyze("user admin").unwrap_err();
    let message = err.to_string();
    assert!(
        message.contains(&absent.display().to_string()),
        "error should name the path: {message}"
    );
}

// =============================================================================
// Stub-analyzer exchanges (Unix)
// =============================================================================

/// An echoing stub returns the rule verbatim: the rule arrives complete on
/// the child's stdin, EOF is signalled, and stdout is captured whole.
/// Banner stripping is a no-op since no banner is present.
#[cfg(unix)]
#[test]
fn e2e_echo_stub_round_trips_rule_text() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = stub_analyzer(&dir, "cat");
    let bridge = ProcessBridge::new(direct_location(path), dir.path());

    let rule = "user admin AND hour >= 9 AND hour <= 17";
    let result = bridge.analyze(rule).unwrap();

    assert_eq!(result.exit_code, Some(0));
    assert_eq!(result.stdout, rule);
    assert_eq!(report::render(&result), rule);
}

/// Every predefined example must reach the analyzer as its exact literal
/// text, unmodified by the loading or trimming path.
#[cfg(unix)]
#[test]
fn e2e_examples_pass_through_unmodified() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = stub_analyzer(&dir, "cat");
    let bridge = ProcessBridge::new(direct_location(path), dir.path());

    let mut all = constants::EXAMPLE_RULES.to_vec();
    all.push(constants::INVALID_EXAMPLE_RULE);

    for example in all {
        let mut state = rulescope::app::state::AppState::new(
            dir.path().join("session.json"),
            false,
        );
        state.load_example(example);
        state.request_analyze();
        assert!(state.pending_analyze, "examples are never empty");

        let rule = state.trimmed_rule().unwrap();
        let result = bridge.analyze(rule).unwrap();
        assert_eq!(result.stdout, example, "example must arrive literally");
    }
}

/// A stub that prints the interactive banner gets it stripped from the
/// rendered output — and nothing else is altered.
#[cfg(unix)]
#[test]
fn e2e_banner_is_stripped_from_display_text() {
    let dir = tempfile::TempDir::new().unwrap();
    // printf '%s\n' keeps the banner byte-for-byte intact.
    let path = stub_analyzer(
        &dir,
        &format!(
            "printf '%s\\n' \"{}\"; printf 'Regla valida: acceso permitido\\n'",
            constants::ANALYZER_BANNER
        ),
    );
    let bridge = ProcessBridge::new(direct_location(path), dir.path());

    let result = bridge.analyze("user admin").unwrap();
    assert!(
        result.stdout.contains(constants::ANALYZER_BANNER),
        "stub should have printed the banner"
    );

    let display = report::render(&result);
    assert!(!display.contains(constants::ANALYZER_BANNER));
    assert!(display.contains("Regla valida: acceso permitido"));
}

/// A stub exiting 2 with diagnostics on stderr produces a rendered result
/// containing the exit-code advisory and the literal stderr text.
#[cfg(unix)]
#[test]
fn e2e_failing_stub_renders_advisory_and_stderr() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = stub_analyzer(&dir, "printf 'syntax error' >&2; exit 2");
    let bridge = ProcessBridge::new(direct_location(path), dir.path());

    let result = bridge
        .analyze("resource = 'config.xml' AND user admin")
        .unwrap();
    assert_eq!(result.exit_code, Some(2));

    let display = report::render(&result);
    assert!(
        display.contains("exited with code 2"),
        "display should carry the advisory: {display}"
    );
    assert!(display.contains("syntax error"));
}

/// Sequential invocations are strictly ordered: the second analyze cannot
/// observe state from an unfinished first child because analyze only
/// returns after the child has fully terminated.
#[cfg(unix)]
#[test]
fn e2e_sequential_invocations_are_independent() {
    let dir = tempfile::TempDir::new().unwrap();
    // The stub appends a marker to a shared file and echoes stdin; if two
    // children overlapped, the markers could interleave with the echoes.
    let marker = dir.path().join("invocations.log");
    let path = stub_analyzer(
        &dir,
        &format!("echo run >> '{}'\ncat", marker.display()),
    );
    let bridge = ProcessBridge::new(direct_location(path), dir.path());

    let first = bridge.analyze("user admin").unwrap();
    // analyze() has returned, so the first child has terminated and its
    // marker is durably on disk before the second spawn.
    let after_first = std::fs::read_to_string(&marker).unwrap();
    assert_eq!(after_first.lines().count(), 1);

    let second = bridge.analyze("user guest").unwrap();
    let after_second = std::fs::read_to_string(&marker).unwrap();
    assert_eq!(after_second.lines().count(), 2);

    assert_eq!(first.stdout, "user admin");
    assert_eq!(second.stdout, "user guest");
}

/// A non-executable file at the analyzer path surfaces SpawnFailure, not a
/// panic or a hang.
#[cfg(unix)]
#[test]
fn e2e_non_executable_analyzer_is_a_spawn_failure() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("access_analyzer");
    std::fs::write(&path, "not a program").unwrap();
    let bridge = ProcessBridge::new(direct_location(path), dir.path());

    let err = bridge.analyze("user admin").unwrap_err();
    assert!(
        matches!(err, BridgeError::SpawnFailure { .. }),
        "expected SpawnFailure, got {err:?}"
    );
}

// =============================================================================
// Rendering contract (platform independent)
// =============================================================================

/// The stdout text shown for a clean run equals the child's literal stdout
/// with exactly the banner removed and nothing else altered.
#[test]
fn e2e_render_alters_only_the_banner() {
    let stdout = format!(
        "{}\nRegla valida: acceso permitido\n  detalle: user admin\n",
        constants::ANALYZER_BANNER
    );
    let result = AnalysisResult {
        stdout: stdout.clone(),
        stderr: String::new(),
        exit_code: Some(0),
    };

    let expected = stdout.replace(constants::ANALYZER_BANNER, "");
    assert_eq!(report::render(&result), expected);
}
