use std::io::IsTerminal;
use std::sync::OnceLock;

use crate::cli::{ColorMode, GlobalFlags, OutputFormat, ProgressMode};

#[derive(Clone, Copy, Debug)]
pub struct UiPrefs {
    /// ANSI colors in table and text output.
    pub color: bool,
    pub progress: bool,
    pub term_width: Option<usize>,
}

static UI_PREFS: OnceLock<UiPrefs> = OnceLock::new();

const fn is_human_format(format: OutputFormat) -> bool {
    matches!(format, OutputFormat::Table | OutputFormat::Text)
}

pub fn init(flags: &GlobalFlags) {
    let is_tty = std::io::stdout().is_terminal();
    let color = match flags.color {
        ColorMode::Always => is_human_format(flags.format),
        ColorMode::Never => false,
        ColorMode::Auto => {
            is_tty
                && is_human_format(flags.format)
                && !flags.quiet
                && std::env::var_os("NO_COLOR").is_none()
        }
    };

    // Spinners draw on stderr, so they only depend on stderr being a terminal.
    let stderr_tty = std::io::stderr().is_terminal();
    let progress = match flags.progress {
        ProgressMode::On => !flags.quiet && flags.format != OutputFormat::Json,
        ProgressMode::Off => false,
        ProgressMode::Auto => stderr_tty && !flags.quiet && flags.format != OutputFormat::Json,
    };

    let term_width = std::env::var("COLUMNS")
        .ok()
        .and_then(|value| value.parse::<usize>().ok())
        .filter(|width| *width >= 40);

    let _ = UI_PREFS.set(UiPrefs {
        color,
        progress,
        term_width,
    });
}

#[must_use]
pub fn prefs() -> UiPrefs {
    *UI_PREFS.get().unwrap_or(&UiPrefs {
        color: false,
        progress: false,
        term_width: None,
    })
}
