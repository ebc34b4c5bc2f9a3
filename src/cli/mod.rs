//! Command-line interface for label-matcher.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **score**: Score a hypothesis label file against a reference label file
//! - **compare**: Score two inline, comma-separated label lists
//!
//! ## Usage
//!
//! ```text
//! # Score two label files (one label per line, or .json arrays)
//! label-matcher score reference.txt hypothesis.txt
//!
//! # Treat unknown placeholders ("?") as matching each other
//! label-matcher score reference.txt hypothesis.txt --matcher unknown-aware
//!
//! # JSON output with per-item details
//! label-matcher --format json score reference.txt hypothesis.txt --details
//!
//! # Quick inline comparison
//! label-matcher compare --reference A,B,? --hypothesis B,A,C
//! ```

use clap::{Args, Parser, Subcommand};

use crate::matching::engine::MatchingConfig;
use crate::matching::matcher::MatcherKind;
use crate::parsing::labels::LabelFormat;
use crate::utils::validation::{DEFAULT_UNKNOWN_TOKEN, MAX_LABELS};

pub mod compare;
pub mod score;

#[derive(Parser)]
#[command(name = "label-matcher")]
#[command(author = "Fulcrum Genomics")]
#[command(version)]
#[command(about = "Score hypothesis labels against reference labels")]
#[command(
    long_about = "label-matcher finds the one-to-one pairing between reference and hypothesis labels that maximizes the number of matches, then reports:\n- Correct: paired items with matching labels\n- Confusion: paired items with different labels\n- Missed detection: reference items left unpaired\n- False alarm: hypothesis items left unpaired"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score a hypothesis label file against a reference label file
    Score(score::ScoreArgs),

    /// Score two inline label lists
    Compare(compare::CompareArgs),
}

/// Matching options shared by all commands
#[derive(Args, Clone)]
pub struct MatchArgs {
    /// Label equality used when pairing items
    #[arg(long, default_value = "strict")]
    pub matcher: MatcherKind,

    /// Entry that denotes an unknown placeholder
    #[arg(long, default_value = DEFAULT_UNKNOWN_TOKEN)]
    pub unknown_token: String,

    /// Maximum number of labels on either side
    #[arg(long, default_value_t = MAX_LABELS)]
    pub max_labels: usize,

    /// Also list the items behind each count
    #[arg(long)]
    pub details: bool,
}

impl MatchArgs {
    pub fn matching_config(&self) -> MatchingConfig {
        MatchingConfig {
            matcher: self.matcher,
            max_labels: self.max_labels,
        }
    }

    pub fn label_format(&self) -> LabelFormat {
        LabelFormat {
            unknown_token: self.unknown_token.clone(),
            max_labels: self.max_labels,
        }
    }
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}
