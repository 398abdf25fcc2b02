//! Terminal front end: splash, login gate, and the account book shell.

pub mod commands;
pub mod context;
pub mod output;
pub mod registry;
pub mod shell;
pub mod splash;
pub mod view;

pub use context::{CliError, CliMode, CommandError, Phase, ShellContext};
pub use shell::run_cli;
