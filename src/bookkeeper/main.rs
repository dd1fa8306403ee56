use bookkeeper::commands::{CmdMessage, MessageLevel};
use bookkeeper::config::AssistantConfig;
use bookkeeper::dispatch::Dispatcher;
use bookkeeper::error::{AssistantError, Result};
use bookkeeper::session::{SeedPlan, Session};
use bookkeeper::store::fs::FileStore;
use chrono::{Local, NaiveDate};
use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use std::io::IsTerminal;
use std::path::PathBuf;

mod args;
mod logging;
mod repl;

use args::Cli;
use repl::LineSource;

const COMMAND_PROMPT: &str = "Enter a command: ";

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    if !std::io::stdout().is_terminal() {
        colored::control::set_override(false);
    }

    let data_dir = data_dir(&cli)?;
    let config = AssistantConfig::load(&data_dir)?;
    log::debug!("data directory: {}", data_dir.display());

    let store = FileStore::new(data_dir).with_data_file(&config.data_file);
    let seed = if cli.no_seed {
        SeedPlan::none()
    } else {
        SeedPlan::from(&config)
    };
    let mut session = Session::open(store, seed, today())?;

    let dispatcher = Dispatcher::default();
    let mut input = LineSource::detect()?;

    println!("Welcome to the assistant bot!");
    loop {
        let line = match input.read_line(COMMAND_PROMPT) {
            Ok(Some(line)) => line,
            Ok(None) => break,
            // unreadable input ends the session like EOF
            Err(e) => {
                log::warn!("stopped reading input: {}", e);
                break;
            }
        };
        let Some(flow) = dispatcher.execute_line(session.book_mut(), &mut input, today(), &line)
        else {
            continue;
        };
        print_message(flow.message());
        if flow.is_exit() {
            break;
        }
    }

    session.close()?;
    Ok(())
}

fn data_dir(cli: &Cli) -> Result<PathBuf> {
    if let Some(dir) = &cli.data_dir {
        return Ok(dir.clone());
    }
    let proj_dirs = ProjectDirs::from("com", "bookkeeper", "bookkeeper").ok_or_else(|| {
        AssistantError::Io(std::io::Error::other("could not determine a data directory"))
    })?;
    Ok(proj_dirs.data_dir().to_path_buf())
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn print_message(message: &CmdMessage) {
    if message.content.is_empty() {
        return;
    }
    match message.level {
        MessageLevel::Info => println!("{}", message.content),
        MessageLevel::Success => println!("{}", message.content.green()),
        MessageLevel::Warning => println!("{}", message.content.yellow()),
        MessageLevel::Error => println!("{}", message.content.red()),
    }
}
