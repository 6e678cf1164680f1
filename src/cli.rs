use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

const DEFAULT_STORE_DIR: &str = "workouts";

#[derive(Parser, Debug)]
#[command(
    name = "ridelog",
    about = "List and inspect locally stored cycling workout records"
)]
pub struct Cli {
    /// Directory holding the saved track record files.
    #[arg(value_name = "DIR", default_value = DEFAULT_STORE_DIR)]
    pub dir: PathBuf,

    /// Print at most this many records.
    #[arg(long, default_value_t = 20)]
    pub count: usize,

    /// Also print per-record sample counts.
    #[arg(long)]
    pub details: bool,

    /// Increase log verbosity (-v, -vv). Defaults to INFO.
    #[arg(short = 'v', long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Decrease log verbosity (-q, -qq). Defaults to INFO.
    #[arg(short = 'q', long, action = ArgAction::Count, global = true)]
    pub quiet: u8,

    #[command(subcommand)]
    pub cmd: Option<Cmd>,
}

#[derive(Subcommand, Debug)]
pub enum Cmd {
    /// Decode one stored record and print its track geometry.
    Show {
        /// Record name (the file name inside the store directory).
        #[arg(value_name = "NAME")]
        name: String,

        /// Directory holding the saved track record files.
        #[arg(long, default_value = DEFAULT_STORE_DIR)]
        dir: PathBuf,
    },
}
