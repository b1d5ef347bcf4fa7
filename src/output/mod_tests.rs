use super::*;

#[test]
fn never_mode_disables_colors() {
    let reporter = ConsoleReporter::new(ColorMode::Never, false);
    assert_eq!(reporter.colorize("warning:", ansi::YELLOW), "warning:");
}

#[test]
fn always_mode_wraps_in_ansi_codes() {
    let reporter = ConsoleReporter::new(ColorMode::Always, false);
    let colored = reporter.colorize("warning:", ansi::YELLOW);
    assert!(colored.starts_with(ansi::YELLOW));
    assert!(colored.ends_with(ansi::RESET));
}
