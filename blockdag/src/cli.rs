use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "blockdag")]
#[command(about = "BlockDAG validity checker and set reporter", long_about = None)]
pub struct Args {
    /// Path to configuration file (optional, uses defaults if not provided)
    #[arg(short, long)]
    pub config_path: Option<PathBuf>,

    /// Graph description file (overrides the configured path)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Result file (overrides the configured path)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Check whether the graph is a valid DAG
    Check,
    /// Report past, future, anticone and tips for a vertex
    Sets {
        /// Vertex name to query
        node: String,
    },
    /// Print the adjacency structure to stdout
    Dump,
}

pub fn parse_args() -> Args {
    Args::parse()
}
