//! Terminal front end: loads a maze file and plays it on stdin/stdout.

mod exit_codes;
mod play;
mod render;

use std::fs;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use clap_verbosity_flag::{Verbosity, WarnLevel};
use mazerun_core::{Grid, Session, load_maze};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Maze file to play
    mazefile: PathBuf,

    /// Only load and validate the maze, then exit
    #[arg(long)]
    check: bool,

    /// With --check, print the loaded maze as JSON
    #[arg(long, requires = "check")]
    json: bool,

    /// What log level to use
    #[command(flatten)]
    verbose: Verbosity<WarnLevel>,
}

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            // nothing left to report to if stdout/stderr is gone
            err.print().ok();
            return ExitCode::from(parse_failure_code(&err));
        }
    };

    if let Some(log_level) = args.verbose.log_level() {
        env_logger::Builder::new()
            .filter_level(log_level.to_level_filter())
            .init();
    }

    match run(&args) {
        Ok(code) => ExitCode::from(code),
        Err(err) => {
            eprintln!("{err:#}");
            ExitCode::from(exit_codes::ARG_ERROR)
        }
    }
}

/// `--help` and `--version` are successful runs, every other parse failure is a usage error.
fn parse_failure_code(err: &clap::Error) -> u8 {
    if err.use_stderr() {
        exit_codes::ARG_ERROR
    } else {
        exit_codes::OK
    }
}

fn run(args: &Args) -> Result<u8> {
    let grid = match read_maze(args) {
        Ok(grid) => grid,
        Err(code) => return Ok(code),
    };

    if args.check {
        report(&grid, args.json)?;
        return Ok(exit_codes::OK);
    }

    play::play(Session::new(grid), io::stdin().lock(), io::stdout().lock())?;
    Ok(exit_codes::OK)
}

/// Reads and validates the maze file, reporting failures and returning the exit code for them.
fn read_maze(args: &Args) -> std::result::Result<Grid, u8> {
    let path = args.mazefile.display();

    let bytes = fs::read(&args.mazefile).map_err(|err| {
        log::debug!("Reading {path}: {err}");
        eprintln!("Failed to open file: {path}");
        exit_codes::FILE_ERROR
    })?;

    // bytes outside UTF-8 become U+FFFD, which the alphabet check rejects
    let text = String::from_utf8_lossy(&bytes);

    load_maze(&text).map_err(|err| {
        eprintln!("{err}");
        eprintln!("Failed to read maze from file: {path}");
        exit_codes::MAZE_ERROR
    })
}

fn report(grid: &Grid, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(grid)?);
    } else {
        println!(
            "{}x{} maze, start {:?}, end {:?}",
            grid.height(),
            grid.width(),
            grid.start(),
            grid.end()
        );
    }
    Ok(())
}
