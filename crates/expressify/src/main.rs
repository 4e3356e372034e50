//! Expressify CLI - Project scaffolding for Express.js services

use clap::{CommandFactory, FromArgMatches, Parser};
use colored::Colorize;
use expressify_core::catalog::PackageManager;
use expressify_core::wizard::Answers;
use expressify_core::{AppError, ProductConfig};
use std::path::Path;
use std::process::ExitCode;

/// Expressify product configuration
#[derive(Clone)]
pub struct ExpressifyConfig;

impl ProductConfig for ExpressifyConfig {
    fn name(&self) -> &'static str {
        "expressify"
    }

    fn display_name(&self) -> &'static str {
        "Expressify"
    }

    fn welcome_message(&self) -> &'static str {
        "Welcome to Expressify! Let's scaffold a production-ready Express.js project."
    }

    fn cli_description(&self) -> &'static str {
        "CLI for scaffolding Express.js projects"
    }

    fn bootstrap_project(&self) -> Option<&'static str> {
        Some("auth-service")
    }

    fn next_steps(&self, dir: &Path, answers: &Answers) -> Vec<String> {
        let package_manager = match answers.package_manager {
            Some(PackageManager::Pnpm) => "pnpm",
            _ => "npm",
        };

        vec![
            format!("cd {}", dir.display()),
            format!("{} install", package_manager),
            format!("{} run dev", package_manager),
        ]
    }
}

#[derive(Parser, Debug)]
#[command(version)]
pub struct Args {}

impl Args {
    /// Parse process arguments, naming the command after the product
    fn parse_for<C: ProductConfig>(config: &C) -> Self {
        let matches = Args::command()
            .name(config.name())
            .about(config.cli_description())
            .get_matches();
        Args::from_arg_matches(&matches).unwrap_or_else(|e| e.exit())
    }
}

fn main() -> ExitCode {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stdout().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let config = ExpressifyConfig;
    let _args = Args::parse_for(&config);

    let result = run(&config);

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stdout().show_cursor();

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", err.report());
            ExitCode::FAILURE
        }
    }
}

fn run(config: &ExpressifyConfig) -> Result<(), AppError> {
    let working_dir = expressify_core::working_dir()?;

    if expressify_core::bootstrap(config, &working_dir)?.is_some() {
        println!("{}", "Directory copied successfully.".green());
    }

    // A failed materialization is reported by the wizard and does not change
    // the exit code
    expressify_core::run(config, &working_dir)?;

    Ok(())
}
