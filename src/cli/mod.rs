// CLI layer: argument parsing, command execution, and display

pub mod commands;
pub mod display;
pub mod ocp;

pub use commands::CliArgs;
