// RuleScope - bridge/report.rs
//
// Output normalisation and display rendering for analyzer results.
//
// The analyzer prints an interactive-input banner to stdout even when its
// input is piped; stripping it is a cosmetic filter, not a parse of the
// analyzer's semantic output. Everything else is passed through untouched.

use crate::bridge::process::AnalysisResult;
use crate::util::constants;
use regex::Regex;
use std::sync::OnceLock;

/// Placeholder shown when the analyzer exits without writing anything.
const NO_OUTPUT_TEXT: &str = "The analyzer produced no output.";

fn banner_regex() -> &'static Regex {
    static BANNER: OnceLock<Regex> = OnceLock::new();
    BANNER.get_or_init(|| {
        // The banner is matched literally; escape it so the parentheses and
        // plus sign in the prompt text are not treated as regex syntax.
        Regex::new(&regex::escape(constants::ANALYZER_BANNER))
            .expect("escaped banner literal compiles as a regex")
    })
}

/// Remove the known interactive-prompt banner from captured stdout.
///
/// Exactly the banner substring is removed; surrounding text, newlines, and
/// everything else the analyzer wrote are preserved unaltered.
pub fn strip_banner(stdout: &str) -> String {
    banner_regex().replace_all(stdout, "").into_owned()
}

/// Render an analyzer result as the display text for the result area.
///
/// Layout:
///   - non-zero exit (or signal death) -> advisory line first;
///   - banner-stripped stdout, or a placeholder when stdout is empty;
///   - stderr, when present, appended under an `ERRORS:` heading.
pub fn render(result: &AnalysisResult) -> String {
    let mut text = String::new();

    match result.exit_code {
        Some(0) => {}
        Some(code) => {
            text.push_str(&format!("NOTICE: analyzer exited with code {code}\n\n"));
        }
        None => {
            text.push_str("NOTICE: analyzer was terminated by a signal\n\n");
        }
    }

    if result.stdout.is_empty() {
        text.push_str(NO_OUTPUT_TEXT);
    } else {
        text.push_str(&strip_banner(&result.stdout));
    }

    if !result.stderr.is_empty() {
        text.push_str(&format!("\n\nERRORS:\n{}", result.stderr));
    }

    text
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(stdout: &str, stderr: &str, exit_code: Option<i32>) -> AnalysisResult {
        AnalysisResult {
            stdout: stdout.to_string(),
            stderr: stderr.to_string(),
            exit_code,
        }
    }

    #[test]
    fn test_banner_is_removed_exactly() {
        let input = format!("{}\nRegla valida\n", constants::ANALYZER_BANNER);
        assert_eq!(strip_banner(&input), "\nRegla valida\n");
    }

    #[test]
    fn test_strip_is_noop_without_banner() {
        let input = "user admin AND hour >= 9 AND hour <= 17";
        assert_eq!(strip_banner(input), input);
    }

    #[test]
    fn test_strip_preserves_surrounding_text() {
        let input = format!("before {} after", constants::ANALYZER_BANNER);
        assert_eq!(strip_banner(&input), "before  after");
    }

    #[test]
    fn test_render_success_passes_stdout_through() {
        let r = result("Regla valida: acceso permitido\n", "", Some(0));
        assert_eq!(render(&r), "Regla valida: acceso permitido\n");
    }

    #[test]
    fn test_render_nonzero_exit_prepends_advisory() {
        let r = result("partial output", "syntax error", Some(2));
        let text = render(&r);
        assert!(text.starts_with("NOTICE: analyzer exited with code 2\n\n"));
        assert!(text.contains("partial output"));
        assert!(text.contains("ERRORS:\nsyntax error"));
    }

    #[test]
    fn test_render_empty_stdout_shows_placeholder() {
        let r = result("", "", Some(0));
        assert_eq!(render(&r), NO_OUTPUT_TEXT);
    }

    #[test]
    fn test_render_signal_death_is_reported() {
        let r = result("", "", None);
        let text = render(&r);
        assert!(text.starts_with("NOTICE: analyzer was terminated by a signal"));
    }

    #[test]
    fn test_render_strips_banner_from_stdout() {
        let stdout = format!("{}\nOK\n", constants::ANALYZER_BANNER);
        let r = result(&stdout, "", Some(0));
        let text = render(&r);
        assert!(!text.contains(constants::ANALYZER_BANNER));
        assert!(text.contains("OK"));
    }
}
