//! CLI Module
//!
//! Command-line interface for Layerpaint.

pub mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::store::DrawStyle;

/// Layerpaint - layered paint canvas with undo and replay
#[derive(Parser, Debug)]
#[command(name = "layerpaint")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the known layers
    #[command(name = "layers")]
    Layers,

    /// Play a replay script against a fresh grid and print the result
    #[command(name = "replay")]
    Replay {
        /// Path to the replay script
        script: PathBuf,

        /// Canvas configuration file (JSON)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Draw style: SET, ADD or SEQUENCE
        #[arg(short, long)]
        style: Option<DrawStyle>,

        /// Grid width
        #[arg(long)]
        width: Option<usize>,

        /// Grid height
        #[arg(long)]
        height: Option<usize>,

        /// Timestamp (seconds) to render at
        #[arg(short, long, default_value_t = 0.0)]
        timestamp: f64,
    },

    /// Write a small demo replay script
    #[command(name = "record-demo")]
    RecordDemo {
        /// Where to write the script
        script: PathBuf,
    },
}
