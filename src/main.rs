// RuleScope - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing
// 2. Config loading
// 3. Logging initialisation (debug flag / config level)
// 4. Analyzer location resolution
// 5. Session restore and eframe GUI launch

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod gui;

// Re-export modules from the library crate so that `gui.rs` and other
// binary-side code can still use `crate::app::...`, `crate::bridge::...` etc.
pub use rulescope::app;
pub use rulescope::bridge;
pub use rulescope::platform;
pub use rulescope::ui;
pub use rulescope::util;

use clap::Parser;
use std::path::PathBuf;

/// Configure fonts for the egui context.
///
/// On Windows, loads Segoe UI and Segoe UI Emoji from the system font
/// directory so the analyzer's emoji banner and any pictographic output
/// render correctly instead of as square glyphs. The built-in egui fonts
/// are kept as final fallbacks so no glyph is ever lost.
///
/// On non-Windows platforms the egui defaults are used unchanged.
fn configure_fonts(ctx: &egui::Context) {
    #[cfg(target_os = "windows")]
    {
        let mut fonts = egui::FontDefinitions::default();

        let candidates: &[(&str, &str)] = &[
            ("Segoe UI", r"C:\Windows\Fonts\segoeui.ttf"),
            ("Segoe UI Emoji", r"C:\Windows\Fonts\seguiemj.ttf"),
        ];

        let mut loaded_names: Vec<&str> = Vec::new();
        for (name, path) in candidates {
            match std::fs::read(path) {
                Ok(data) => {
                    fonts
                        .font_data
                        .insert((*name).to_owned(), egui::FontData::from_owned(data).into());
                    loaded_names.push(name);
                    tracing::debug!(font = name, "Loaded Windows system font");
                }
                Err(e) => {
                    tracing::warn!(
                        font = name,
                        error = %e,
                        "Failed to load Windows system font; some symbols may render as squares"
                    );
                }
            }
        }

        if !loaded_names.is_empty() {
            if let Some(proportional) = fonts.families.get_mut(&egui::FontFamily::Proportional) {
                for (i, name) in loaded_names.iter().enumerate() {
                    proportional.insert(i, (*name).to_owned());
                }
            }
            // Monospace keeps its primary font; Windows fonts are appended as
            // symbol fallbacks so analyzer output stays column-aligned.
            if let Some(monospace) = fonts.families.get_mut(&egui::FontFamily::Monospace) {
                for name in &loaded_names {
                    monospace.push((*name).to_owned());
                }
            }
            ctx.set_fonts(fonts);
        }
    }

    #[cfg(not(target_os = "windows"))]
    let _ = ctx;
}

/// RuleScope - desktop front-end for the access_analyzer rule checker.
///
/// Type an access-control rule, press Analyze, and RuleScope pipes it to
/// the external access_analyzer binary and shows you the verdict.
#[derive(Parser, Debug)]
#[command(name = "RuleScope", version, about)]
struct Cli {
    /// Rule text preloaded into the input box (overrides the saved session).
    rule: Option<String>,

    /// Explicit path to the analyzer binary (overrides config and lookup).
    #[arg(short = 'a', long = "analyzer")]
    analyzer: Option<PathBuf>,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();

    // Config must be loaded before the logging subsystem comes up so a
    // configured [logging] level can feed the filter. Events emitted during
    // loading are lost; the collected warnings are re-logged below.
    let platform_paths = platform::config::PlatformPaths::resolve();
    let (config, config_warnings) = platform::config::load_config(&platform_paths.config_dir);

    util::logging::init(cli.debug, config.log_level.as_deref());

    tracing::info!(
        version = util::constants::APP_VERSION,
        debug = cli.debug,
        "RuleScope starting"
    );

    for warn in &config_warnings {
        tracing::warn!(warning = %warn, "Config warning");
    }

    // Resolve the analyzer: CLI override > config override > app directory.
    let override_path = cli.analyzer.as_deref().or(config.analyzer_path.as_deref());
    let location = bridge::resolve::AnalyzerLocation::resolve(
        &platform::config::app_dir(),
        override_path,
        config.wsl_distro.as_deref(),
    );
    let analyzer_missing = !location.is_present();
    if analyzer_missing {
        tracing::warn!(
            path = %location.path.display(),
            "Analyzer binary not found — analysis will fail until it is installed"
        );
    }

    let bridge = bridge::process::ProcessBridge::new(location, &platform_paths.data_dir);

    // Create application state, restoring the previous session's rule text
    // unless one was given on the command line.
    let session_path = app::session::session_path(&platform_paths.data_dir);
    let mut state = app::state::AppState::new(session_path.clone(), cli.debug);

    if let Some(rule) = cli.rule {
        state.rule_text = rule;
    } else if let Some(session) = app::session::load(&session_path) {
        state.rule_text = session.rule_text;
    }

    if analyzer_missing {
        state.status_message = format!(
            "Warning: analyzer not found at '{}'. Place it next to the application.",
            bridge.location().path.display()
        );
        state.status_kind = app::state::StatusKind::Warning;
    }

    let dark_mode = config.dark_mode;
    let font_size = config.font_size;

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(format!(
                "{} v{}",
                util::constants::APP_NAME,
                util::constants::APP_VERSION
            ))
            .with_inner_size([800.0, 600.0])
            .with_min_inner_size([600.0, 420.0]),
        ..Default::default()
    };

    let result = eframe::run_native(
        util::constants::APP_NAME,
        native_options,
        Box::new(move |cc| {
            configure_fonts(&cc.egui_ctx);
            cc.egui_ctx.set_visuals(if dark_mode {
                egui::Visuals::dark()
            } else {
                egui::Visuals::light()
            });
            let mut style = (*cc.egui_ctx.style()).clone();
            if let Some(body) = style.text_styles.get_mut(&egui::TextStyle::Body) {
                body.size = font_size;
            }
            if let Some(mono) = style.text_styles.get_mut(&egui::TextStyle::Monospace) {
                mono.size = font_size;
            }
            cc.egui_ctx.set_style(style);
            Ok(Box::new(gui::RuleScopeApp::new(state, bridge)))
        }),
    );

    if let Err(e) = result {
        tracing::error!(error = %e, "Failed to launch GUI");
        eprintln!("Error: Failed to launch RuleScope GUI: {e}");
        std::process::exit(1);
    }
}
