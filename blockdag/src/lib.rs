//! BlockDAG analyzer - one-shot DAG validity and set reporting tool
//!
//! This crate wires the graph engine to the outside world: CLI parsing,
//! configuration, command dispatch and result formatting. The engine
//! itself lives in the `dag` crate.

pub mod cli;
pub mod commands;
pub mod config;
pub mod report;

pub use cli::Args;
pub use config::Config;
