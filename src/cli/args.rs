//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueHint};

use crate::application::Difficulty;
use crate::domain::Rank;

/// Geologic time scale trainer: explore the hierarchy, order divisions, place them under their parents
#[derive(Parser, Debug)]
#[command(name = "geotime")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-d info, -dd debug, -ddd trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub debug: u8,

    /// Config file layered over the global config
    #[arg(long, global = true, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Random seed for reproducible draws (overrides config)
    #[arg(long, global = true, env = "GEOTIME_SEED")]
    pub seed: Option<u64>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show a division with its place in the hierarchy
    Show {
        /// Division id, e.g. jurassic
        id: String,
    },

    /// List direct children of a division
    Children {
        /// Parent division id
        id: String,
    },

    /// List ancestors from parent up to the eon
    Ancestors {
        /// Division id
        id: String,
    },

    /// Show the whole hierarchy as tree
    Tree,

    /// List divisions intersecting a time range
    Range {
        /// Older bound (Mya)
        #[arg(allow_negative_numbers = true)]
        start: f64,
        /// Younger bound (Mya)
        #[arg(allow_negative_numbers = true)]
        end: f64,
    },

    /// List divisions overlapping a division
    Overlaps {
        /// Division id
        id: String,
    },

    /// Draw random divisions without replacement
    Sample {
        /// Number of divisions (default: config sample_count)
        count: Option<usize>,
        /// Restrict to one rank
        #[arg(short, long, value_enum)]
        rank: Option<Rank>,
    },

    /// Check whether divisions are given oldest first
    Order {
        /// Division ids in the claimed order
        #[arg(num_args = 1.., required = true)]
        ids: Vec<String>,
    },

    /// Check whether a division sits directly under a claimed parent
    Match {
        /// Division being placed
        item: String,
        /// Claimed parent
        target: String,
    },

    /// Timeline position (%) of a time
    Position {
        /// Time (Mya)
        #[arg(allow_negative_numbers = true)]
        mya: f64,
    },

    /// Timeline width (%) of a time span
    Width {
        /// Older bound (Mya)
        #[arg(allow_negative_numbers = true)]
        start: f64,
        /// Younger bound (Mya)
        #[arg(allow_negative_numbers = true)]
        end: f64,
    },

    /// Draw a chronology or placement challenge
    Challenge {
        #[command(subcommand)]
        command: ChallengeCommands,
    },

    /// Answer a random multiple-choice question
    Quiz,

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ChallengeCommands {
    /// Shuffled divisions to put in chronological order
    Chronology {
        /// Difficulty (default: config difficulty)
        #[arg(long, value_enum)]
        difficulty: Option<Difficulty>,
    },
    /// A division to place under one of the target divisions
    Placement {
        /// Target division ids (default: the Phanerozoic eras)
        targets: Vec<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show effective configuration
    Show,
    /// Print a config template
    Template,
    /// Show config file location
    Path,
}
