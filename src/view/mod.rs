//! Terminal view module
//!
//! Renders snapshots to stdout and turns stdin lines into timer commands.

pub mod input;
pub mod terminal;

pub use input::{InputCommand, HELP};
pub use terminal::{input_loop, render, render_loop, spawn_stdin_reader, OutputFormat};
