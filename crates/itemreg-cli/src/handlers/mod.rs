pub mod config;
pub mod create;
pub mod delete;
pub mod departments;
pub mod export;
pub mod list;
pub mod show;
pub mod update;

use anyhow::Result;
use serde::Serialize;

pub(crate) fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
