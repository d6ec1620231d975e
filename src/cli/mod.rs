pub mod commands;
pub mod scan;
pub mod serve;

pub use commands::{Cli, Commands};
