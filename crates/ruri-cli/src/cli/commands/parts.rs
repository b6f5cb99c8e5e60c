//! `ruri parts <value>` – print URL components as JSON.

use anyhow::Result;
use ruri_core::{resolve_parts, UrlParts};

pub fn run_parts(value: &str, base: Option<&str>) -> Result<()> {
    let parts = match base {
        Some(base) => resolve_parts(value, base),
        None => UrlParts::parse(value),
    };
    println!("{}", serde_json::to_string_pretty(&parts)?);
    Ok(())
}
