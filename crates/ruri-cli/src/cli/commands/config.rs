//! `ruri config` – show config path and effective values.

use anyhow::Result;
use ruri_core::config::{self, RuriConfig};

pub fn run_config(cfg: &RuriConfig) -> Result<()> {
    println!("# {}", config::config_path()?.display());
    print!("{}", cfg.to_toml()?);
    Ok(())
}
