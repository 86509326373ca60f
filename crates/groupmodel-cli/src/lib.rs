// groupmodel CLI - a thin shell over groupmodel-engine.
//
// Reads already-validated configuration from JSON files, runs one rendering
// pass and prints the tree. All composition logic stays in the engine; this
// crate only owns file loading, logging setup and output formatting.

mod args;
mod commands;
pub mod presentation;
pub mod types;

pub use args::{Cli, Commands};
pub use commands::run;
