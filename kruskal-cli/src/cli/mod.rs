//! Command-line interface for stepping through Kruskal runs.
//!
//! The `run` command reads a bracketed weight matrix from a file or stdin and
//! either traces every step or prints only the finished spanning forest.

mod commands;
mod matrix_text;

pub use commands::{
    Cli, CliError, Command, ExecutionSummary, OutputMode, RunCommand, render_step,
    render_summary, run_cli,
};
pub use matrix_text::parse_matrix;
