use std::io::IsTerminal;
use std::sync::OnceLock;

use crate::cli::{GlobalFlags, OutputFormat};

/// Narrower `COLUMNS` values are ignored.
const MIN_TERM_WIDTH: usize = 40;

#[derive(Clone, Copy, Debug, Default)]
pub struct UiPrefs {
    pub table_color: bool,
    pub term_width: Option<usize>,
}

static UI_PREFS: OnceLock<UiPrefs> = OnceLock::new();

pub fn init(flags: &GlobalFlags) {
    let prefs = UiPrefs {
        table_color: wants_color(
            flags,
            std::io::stdout().is_terminal(),
            std::env::var_os("NO_COLOR").is_some(),
        ),
        term_width: parse_width(std::env::var("COLUMNS").ok().as_deref()),
    };
    let _ = UI_PREFS.set(prefs);
}

#[must_use]
pub fn prefs() -> UiPrefs {
    UI_PREFS.get().copied().unwrap_or_default()
}

/// Status colors only for interactive table output.
fn wants_color(flags: &GlobalFlags, is_tty: bool, no_color: bool) -> bool {
    is_tty && !no_color && !flags.quiet && flags.format == OutputFormat::Table
}

fn parse_width(raw: Option<&str>) -> Option<usize> {
    raw?.trim()
        .parse::<usize>()
        .ok()
        .filter(|width| *width >= MIN_TERM_WIDTH)
}

#[cfg(test)]
mod tests {
    use super::{parse_width, wants_color};
    use crate::cli::{GlobalFlags, OutputFormat};

    fn flags(format: OutputFormat) -> GlobalFlags {
        GlobalFlags {
            format,
            limit: None,
            quiet: false,
            verbose: false,
            source: None,
            today: None,
            retry: false,
        }
    }

    #[test]
    fn color_needs_a_terminal_and_table_output() {
        assert!(wants_color(&flags(OutputFormat::Table), true, false));
        assert!(!wants_color(&flags(OutputFormat::Table), false, false));
        assert!(!wants_color(&flags(OutputFormat::Json), true, false));
    }

    #[test]
    fn no_color_env_wins() {
        assert!(!wants_color(&flags(OutputFormat::Table), true, true));
    }

    #[test]
    fn tiny_or_garbage_widths_are_ignored() {
        assert_eq!(parse_width(Some("120")), Some(120));
        assert_eq!(parse_width(Some("20")), None);
        assert_eq!(parse_width(Some("wide")), None);
        assert_eq!(parse_width(None), None);
    }
}
