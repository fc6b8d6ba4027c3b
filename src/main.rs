mod cli;
mod config;

use cli::{exit_code_for, Args};
use config::{discover_config, load_config_from_path, resolve_options, ConfigFile};
use dep_info::adapters::outbound::console::{should_use_color, StderrProgressReporter};
use dep_info::adapters::outbound::filesystem::FileSystemReader;
use dep_info::application::dto::DependInfoRequest;
use dep_info::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
use dep_info::application::use_cases::DependInfoUseCase;
use dep_info::shared::error::ExitCode;
use dep_info::shared::Result;
use owo_colors::OwoColorize;
use std::io::{self, Write};
use std::process;

fn main() {
    let args = match Args::parse_args() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            let _ = io::stdout().flush();
            process::exit(exit_code_for(&e).as_i32());
        }
    };

    if let Err(e) = run(args) {
        if should_use_color() {
            eprintln!("\n{}\n", "❌ An error occurred:".red().bold());
        } else {
            eprintln!("\n❌ An error occurred:\n");
        }
        eprintln!("{}", e);

        // Display error chain
        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("\nCaused by: {}", err);
            source = err.source();
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }

    process::exit(ExitCode::Success.as_i32());
}

fn run(args: Args) -> Result<()> {
    let config = load_config(&args)?;
    let options = resolve_options(args, config)?;

    // Create adapters (Dependency Injection)
    let registry_reader = FileSystemReader::new();
    let progress_reporter = StderrProgressReporter::new();

    let use_case = DependInfoUseCase::new(registry_reader, progress_reporter);

    let request = DependInfoRequest::new(
        options.registry,
        options.roots,
        options.exclude_patterns,
    );
    let response = use_case.execute(request)?;

    eprintln!("{}", FormatterFactory::progress_message(options.format));

    let formatter = FormatterFactory::create(options.format);
    let formatted_output = formatter.format(&response.graph)?;

    let presenter = PresenterFactory::create(PresenterType::from(options.output));
    presenter.present(&formatted_output)?;

    Ok(())
}

/// Loads the config named by `--config`, or the one found in the current directory
fn load_config(args: &Args) -> Result<Option<ConfigFile>> {
    match args.config {
        Some(ref path) => Ok(Some(load_config_from_path(path)?)),
        None => {
            let current_dir = std::env::current_dir()?;
            discover_config(&current_dir)
        }
    }
}
