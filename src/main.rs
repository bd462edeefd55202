use clap::{Parser, Subcommand};
use seqmon::commands::*;
use seqmon::core::{error::Result, print_error};
use std::env;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "seqmon")]
#[command(about = "Detect and watch numbered image sequences")]
#[command(version = "0.1.0")]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the image sequences in a directory
    Scan {
        /// Directory to scan
        directory: PathBuf,
        /// Descend into subdirectories
        #[arg(short, long)]
        recursive: bool,
        /// Also list files that belong to no sequence
        #[arg(short, long)]
        all: bool,
        /// Print sequences as JSON
        #[arg(long)]
        json: bool,
        /// Show total size and latest modification time
        #[arg(short, long)]
        long: bool,
        /// List the file name of every missing frame
        #[arg(short, long)]
        missing: bool,
    },
    /// Watch a directory and report sequence changes as they happen
    Watch {
        /// Directory to watch
        directory: PathBuf,
        /// Descend into subdirectories
        #[arg(short, long)]
        recursive: bool,
        /// Poll interval in milliseconds
        #[arg(short, long = "interval", value_name = "MS")]
        interval: Option<u64>,
        /// Stop after this many polls
        #[arg(long, value_name = "N")]
        max_polls: Option<u64>,
    },
    /// Show the configuration file and its settings
    Config {
        /// Write a default config file if none exists
        #[arg(long)]
        init: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    // Configure logging based on --debug flag
    if cli.debug {
        env::set_var("RUST_LOG", "debug");
    } else if env::var_os("RUST_LOG").is_none() {
        env::set_var("RUST_LOG", "info");
    }
    env_logger::init();

    if let Err(e) = run(cli.command) {
        print_error(&e.to_string());
        std::process::exit(1);
    }
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Scan {
            directory,
            recursive,
            all,
            json,
            long,
            missing,
        } => execute_scan(ScanArgs {
            directory,
            recursive,
            all,
            json,
            long,
            missing,
        }),
        Commands::Watch {
            directory,
            recursive,
            interval,
            max_polls,
        } => execute_watch(WatchArgs {
            directory,
            recursive,
            interval_ms: interval,
            max_polls,
        }),
        Commands::Config { init } => execute_config(init),
    }
}
