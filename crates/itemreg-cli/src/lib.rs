mod args;
mod commands;
mod handlers;
pub mod logging;
pub mod types;
pub mod views;

pub use args::{Cli, Commands, ConfigCommand, FilterArgs, NewItemArgs, UpdateItemArgs};
pub use commands::run;
