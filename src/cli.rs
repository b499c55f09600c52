use std::path::PathBuf;
use clap::{Parser, Subcommand};
use crate::core::DEFAULT_LOG_FILE;

/// Terminal grab-and-push puzzle game.
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub mode: Option<Mode>,

    /// Where log output goes; the terminal belongs to the game.
    #[arg(long, global = true, default_value = DEFAULT_LOG_FILE)]
    pub log_file: PathBuf,
}

#[derive(Subcommand, Debug)]
pub enum Mode {
    /// Play levels interactively (the built-in set when none are given).
    Play {
        levels: Vec<PathBuf>,
        /// Zero-based index of the level to start on.
        #[arg(long, default_value_t = 0)]
        start: usize,
    },
    /// Convert a level between the text format and JSON.
    Convert {
        input: PathBuf,
        /// Output file; printed to stdout when omitted.
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
}

impl Default for Mode {
    fn default() -> Self {
        Mode::Play { levels: Vec::new(), start: 0 }
    }
}
