//! CLI command handlers.

mod config;
mod get;
mod name;

pub use config::run_config;
pub use get::{run_get, GetArgs};
pub use name::run_name;
