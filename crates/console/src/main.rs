//! Terminal front-end for the chess rules engine.
//!
//! Reads commands from stdin, one per line; see `help`.

mod config;
mod session;

use std::env;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use config::ConsoleConfig;
use session::{Flow, Session};

fn print_usage() {
    println!("chess_console - play both sides of a game in the terminal");
    println!();
    println!("Usage:");
    println!("  chess_console [--config <file.toml>] [--quiet] [--moves]");
    println!();
    println!("Options:");
    println!("  --config, -c   read settings from a TOML file");
    println!("  --quiet, -q    do not print the board after each move");
    println!("  --moves, -m    list legal moves every turn");
}

fn parse_args(args: &[String]) -> Result<Option<ConsoleConfig>> {
    let mut config_path: Option<PathBuf> = None;
    let mut quiet = false;
    let mut list_moves = false;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--config" | "-c" => {
                let Some(path) = args.get(i + 1) else {
                    bail!("--config needs a file path");
                };
                config_path = Some(PathBuf::from(path));
                i += 1;
            }
            "--quiet" | "-q" => quiet = true,
            "--moves" | "-m" => list_moves = true,
            "--help" | "-h" => return Ok(None),
            other => bail!("unknown argument {other:?}"),
        }
        i += 1;
    }

    let mut config = match config_path {
        Some(path) => ConsoleConfig::load(&path)?,
        None => ConsoleConfig::default(),
    };
    if quiet {
        config.show_board = false;
    }
    if list_moves {
        config.show_moves = true;
    }
    Ok(Some(config))
}

fn main() -> Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();
    let Some(config) = parse_args(&args)? else {
        print_usage();
        return Ok(());
    };

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_filter))
        .context("invalid log_filter")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
    info!(?config, "starting console");

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut session = Session::new(config);
    session.start(&mut stdout)?;
    stdout.flush()?;

    for line in stdin.lock().lines() {
        let line = line.context("failed to read stdin")?;
        let flow = session.handle(&line, &mut stdout)?;
        stdout.flush()?;
        if flow == Flow::Quit {
            break;
        }
    }

    info!(plies = session.game().history().len(), "session ended");
    Ok(())
}
