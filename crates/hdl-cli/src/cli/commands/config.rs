//! `hdl config` – show config path and effective settings.

use anyhow::Result;
use hdl_core::config::{self, HdlConfig};

pub fn run_config(cfg: &HdlConfig) -> Result<()> {
    println!("# {}", config::config_path()?.display());
    print!("{}", cfg.to_toml_string()?);
    Ok(())
}
