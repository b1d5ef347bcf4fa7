use std::fs;
use std::path::Path;

use clap::Parser;

use locguard::cli::{CheckArgs, Cli, ColorChoice, Commands, ConfigAction, InitArgs};
use locguard::config::{self, SITE_FILE_NAME};
use locguard::engine::ValidationEngine;
use locguard::output::{ColorMode, ConsoleReporter, Reporter};
use locguard::scanner;
use locguard::spellcheck::{API_KEY_ENV, ReqwestClient};
use locguard::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, LocGuardError};

const fn color_choice_to_mode(choice: ColorChoice) -> ColorMode {
    match choice {
        ColorChoice::Auto => ColorMode::Auto,
        ColorChoice::Always => ColorMode::Always,
        ColorChoice::Never => ColorMode::Never,
    }
}

fn main() {
    let cli = Cli::parse();

    let exit_code = match &cli.command {
        Commands::Check(args) => run_check(args, &cli),
        Commands::Init(args) => run_init(args),
        Commands::Config(args) => run_config(args),
    };

    std::process::exit(exit_code);
}

/// Print the error and its cause chain. The messages are the only
/// diagnostic surface of a failed run.
fn report_error(e: &LocGuardError) {
    eprintln!("Error: {e}");
    let mut source = std::error::Error::source(e);
    while let Some(cause) = source {
        eprintln!("  caused by: {cause}");
        source = cause.source();
    }
}

fn run_check(args: &CheckArgs, cli: &Cli) -> i32 {
    match run_check_impl(args, cli) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            report_error(&e);
            e.exit_code()
        }
    }
}

fn run_check_impl(args: &CheckArgs, cli: &Cli) -> locguard::Result<()> {
    let reporter = ConsoleReporter::new(color_choice_to_mode(cli.color), cli.quiet);

    // 1. Read the site configuration before any folder is processed
    let site_path = args
        .site_config
        .clone()
        .unwrap_or_else(|| args.root.join(SITE_FILE_NAME));
    let site = config::load_site_config(&site_path)?;

    if cli.verbose > 0 {
        reporter.info(&format!(
            "Checking site '{}' under {}",
            site.title,
            args.root.display()
        ));
    }

    // 2. Discover governed folders
    let rule_files = scanner::discover_rule_files(&args.root)?;

    // 3. Walk and validate
    let api_key = std::env::var(API_KEY_ENV).ok().filter(|key| !key.is_empty());
    let http = ReqwestClient;
    let engine = ValidationEngine::new(&reporter, &http, &site, &args.root, api_key);
    engine.run(&rule_files)?;

    if !cli.quiet {
        println!(
            "All checks passed ({} folder{})",
            rule_files.len(),
            if rule_files.len() == 1 { "" } else { "s" }
        );
    }
    Ok(())
}

fn run_init(args: &InitArgs) -> i32 {
    match run_init_impl(args) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            report_error(&e);
            EXIT_CONFIG_ERROR
        }
    }
}

fn run_init_impl(args: &InitArgs) -> locguard::Result<()> {
    if args.output.exists() && !args.force {
        return Err(LocGuardError::Config(format!(
            "Rule file already exists: {}. Use --force to overwrite.",
            args.output.display()
        )));
    }

    fs::write(&args.output, generate_rules_template())?;

    println!("Created rule file: {}", args.output.display());
    Ok(())
}

fn generate_rules_template() -> String {
    r#"# locguard rule file
# Every directory containing one of these files is validated as a folder
# of localized Markdown documents.

# Language assumed for files without a language suffix (about.md)
default_language = "en"

# All languages documents in this folder may be written in.
# Variants carry the language as a suffix: about.fr.md
languages = ["en"]

# Front-matter keys every document must carry
required_headers = ["title"]

# Pattern a `slug` header must fully match when present
slug_pattern = "^[a-z0-9-]+$"

# Header keys whose values must be unique across the folder
# duplicate_keys = ["id"]

# File names to skip entirely
# ignore = ["README.md"]

# Require a physical file for every declared language of every document
enforce_language_structure = true

# Detect the body language and compare it against the file name
verify_body_language = false

# Per-language allowed values for list headers
# [required_lists.tags]
# en = ["news", "guide"]

# Remote spell check (reads the API key from LOCGUARD_API_KEY)
# [spellcheck]
# enabled = true
# model = "gpt-4o-mini"
# temperature = 0.0
# max_tokens = 256
"#
    .to_string()
}

fn run_config(args: &locguard::cli::ConfigArgs) -> i32 {
    match &args.action {
        ConfigAction::Validate { config } => run_config_validate(config),
        ConfigAction::Show { config, format } => run_config_show(config, format),
    }
}

fn run_config_validate(config_path: &Path) -> i32 {
    match config::load_rule_set(config_path) {
        Ok(_) => {
            println!("Rule file is valid: {}", config_path.display());
            EXIT_SUCCESS
        }
        Err(e) => {
            report_error(&e);
            EXIT_CONFIG_ERROR
        }
    }
}

fn run_config_show(config_path: &Path, format: &str) -> i32 {
    match run_config_show_impl(config_path, format) {
        Ok(output) => {
            print!("{output}");
            EXIT_SUCCESS
        }
        Err(e) => {
            report_error(&e);
            EXIT_CONFIG_ERROR
        }
    }
}

fn run_config_show_impl(config_path: &Path, format: &str) -> locguard::Result<String> {
    let rules = config::load_rule_set(config_path)?;

    match format {
        "json" => {
            let json = serde_json::to_string_pretty(&rules)
                .map_err(|e| LocGuardError::Config(format!("Failed to serialize rules: {e}")))?;
            Ok(format!("{json}\n"))
        }
        _ => toml::to_string(&rules)
            .map_err(|e| LocGuardError::Config(format!("Failed to serialize rules: {e}"))),
    }
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
