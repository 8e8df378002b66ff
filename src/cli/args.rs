//! CLI argument definitions

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

use crate::lexicon::LexiconOptions;

/// Command-line arguments of `packdawg`.
#[derive(Parser)]
#[command(name = "packdawg")]
#[command(about = "Build minimal word graphs and pack them into compact edge arrays")]
#[command(version)]
pub struct Cli {
    /// More logging (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[allow(missing_docs)]
    #[command(subcommand)]
    pub command: Commands,
}

/// The `packdawg` subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Build a DAWG from a word list and optionally write it packed
    Build {
        /// Text file with words separated by whitespace
        input: PathBuf,

        /// Output file (.pup recommended extension)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Minimum length of a word
        #[arg(short = 'm', long, default_value = "1")]
        minimum: usize,

        /// Maximum length of a word
        #[arg(short = 'M', long, default_value = "32")]
        maximum: usize,
    },

    /// Look words up in a packed DAWG
    Lookup {
        /// Packed DAWG file
        file: PathBuf,

        /// Words to look up
        #[arg(required = true)]
        words: Vec<String>,
    },

    /// Print every record of a packed DAWG
    Dump {
        /// Packed DAWG file
        file: PathBuf,
    },
}

impl Cli {
    /// Log level filter matching the number of `-v` flags.
    pub fn log_level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }
}

/// Lexicon options from the `build` length flags.
pub fn lexicon_options(minimum: usize, maximum: usize) -> LexiconOptions {
    LexiconOptions {
        min_len: minimum,
        max_len: maximum,
    }
}
