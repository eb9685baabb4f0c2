pub mod args;
pub mod commands;

pub use args::{Cli, OutputFormat};
pub use commands::{execute, run};
