//! Command-line interface module.

mod args;
pub mod apply;
pub mod check;
pub mod tokens;

pub use args::{ApplyArgs, Cli, Commands, TokenArgs};
