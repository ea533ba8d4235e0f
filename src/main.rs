//! Coursework - Main CLI Entry Point

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use coursework::apps::bmi::{risk_message, weight_status, Measurements};
use coursework::apps::distance::{convert, format_conversion};
use coursework::console::{Console, InputHandler};
use coursework::launcher::{run_single, Launcher};
use coursework::{
    apps::AppKind,
    cli::{Args, Commands},
    Config,
};
use tracing::metadata::LevelFilter;
use tracing_subscriber::{fmt, prelude::*, util::SubscriberInitExt};

fn main() -> Result<()> {
    let args = Args::parse();

    let fmt = fmt::layer()
        .without_time()
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr);
    let filter_layer = LevelFilter::from_level(args.verbosity().level());
    tracing_subscriber::registry()
        .with(fmt)
        .with(filter_layer)
        .init();

    let config = Config::load(args.config.as_deref()).context("Failed to load configuration")?;

    if args.no_color || !config.display.color_output {
        colored::control::set_override(false);
    }

    match &args.command {
        None | Some(Commands::Menu) => run_menu(&config)?,
        Some(Commands::Run { app }) => run_app(*app, &config)?,
        Some(Commands::Convert { value, from, to }) => {
            let converted = convert(*value, *from, *to)?;
            println!("{}", format_conversion(*value, *from, converted, *to));
        }
        Some(Commands::Bmi { units }) => {
            let measurements: Measurements = (*units).into();
            let bmi = measurements.bmi()?;
            println!("{}", weight_status(bmi).bold());
            for line in risk_message() {
                println!("{}", line.dimmed());
            }
        }
        Some(Commands::Config) => show_config(args.config.as_deref(), &config)?,
    }

    Ok(())
}

fn interactive_console(config: &Config) -> Result<Console<InputHandler, std::io::Stdout>> {
    let input = InputHandler::with_history(config.history_file())
        .context("Failed to initialise line editor")?;
    Ok(Console::stdout(input).with_author(config.display.author.clone()))
}

fn run_menu(config: &Config) -> Result<()> {
    let mut launcher = Launcher::new(interactive_console(config)?, config.clone());
    launcher.run()?;

    let (mut input, _) = launcher.into_console().into_parts();
    if let Err(e) = input.save_history() {
        tracing::warn!("Could not save history: {}", e);
    }
    Ok(())
}

fn run_app(kind: AppKind, config: &Config) -> Result<()> {
    let mut console = interactive_console(config)?;
    run_single(kind, config, &mut console)?;

    let (mut input, _) = console.into_parts();
    if let Err(e) = input.save_history() {
        tracing::warn!("Could not save history: {}", e);
    }
    Ok(())
}

fn show_config(explicit: Option<&std::path::Path>, config: &Config) -> Result<()> {
    match explicit.map(|p| p.to_path_buf()).or_else(Config::default_path) {
        Some(path) if path.exists() => println!("{} {}", "Config file:".cyan(), path.display()),
        Some(path) => println!("{} {} (not found, using defaults)", "Config file:".cyan(), path.display()),
        None => println!("{} none (no home directory)", "Config file:".cyan()),
    }
    println!();
    print!("{}", config.to_toml()?);
    Ok(())
}
