mod commands;

pub use commands::{classes, generate, sample, Cli, Commands};
