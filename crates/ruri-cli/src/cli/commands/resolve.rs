//! `ruri resolve <input> [--base <base>]` – resolve one reference.

use anyhow::Result;
use ruri_core::config::{OutputFormat, RuriConfig};
use ruri_core::resolve;

pub fn run_resolve(cfg: &RuriConfig, input: &str, base: Option<&str>, json: bool) -> Result<()> {
    let base = cfg.base_or_default(base);
    let resolved = resolve(input, base);
    if json || cfg.output == OutputFormat::Json {
        let value = serde_json::json!({
            "input": input,
            "base": base,
            "resolved": resolved,
        });
        println!("{}", value);
    } else {
        println!("{resolved}");
    }
    Ok(())
}
