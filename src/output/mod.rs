//! Reporting sink.
//!
//! Informational and warning messages are side effects: they never
//! alter control flow. Fatal conditions travel as `Err` values instead
//! and are printed by the binary on exit.

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Auto-detect: use colors if stderr is a TTY and `NO_COLOR` is not set
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// ANSI color codes
mod ansi {
    pub const YELLOW: &str = "\x1b[33m";
    pub const CYAN: &str = "\x1b[36m";
    pub const RESET: &str = "\x1b[0m";
}

/// Trait for receiving informational and warning messages.
pub trait Reporter {
    /// Informational message (suppressed in quiet mode).
    fn info(&self, msg: &str);

    /// Warning message. Warnings are purely informational and never
    /// abort a run.
    fn warn(&self, msg: &str);
}

/// Console reporter: info to stdout, warnings to stderr.
pub struct ConsoleReporter {
    use_colors: bool,
    quiet: bool,
}

impl ConsoleReporter {
    #[must_use]
    pub fn new(mode: ColorMode, quiet: bool) -> Self {
        Self {
            use_colors: Self::should_use_colors(mode),
            quiet,
        }
    }

    fn should_use_colors(mode: ColorMode) -> bool {
        match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                // Respect NO_COLOR environment variable
                if std::env::var("NO_COLOR").is_ok() {
                    return false;
                }
                std::io::IsTerminal::is_terminal(&std::io::stderr())
            }
        }
    }

    fn colorize(&self, text: &str, color: &str) -> String {
        if self.use_colors {
            format!("{color}{text}{}", ansi::RESET)
        } else {
            text.to_string()
        }
    }
}

impl Reporter for ConsoleReporter {
    fn info(&self, msg: &str) {
        if !self.quiet {
            println!("{} {msg}", self.colorize("info:", ansi::CYAN));
        }
    }

    fn warn(&self, msg: &str) {
        eprintln!("{} {msg}", self.colorize("warning:", ansi::YELLOW));
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
