//! `ruri batch <path>` – resolve every line of a file or stdin.

use anyhow::{Context, Result};
use ruri_core::batch::{self, BatchFormat};
use ruri_core::config::{OutputFormat, RuriConfig};
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

fn open_source(path: &Path) -> Result<Box<dyn BufRead>> {
    if path == Path::new("-") {
        return Ok(Box::new(io::stdin().lock()));
    }
    let file = File::open(path).with_context(|| format!("open batch file: {}", path.display()))?;
    Ok(Box::new(BufReader::new(file)))
}

pub fn run_batch(
    cfg: &RuriConfig,
    path: &Path,
    format: Option<BatchFormat>,
    base: Option<&str>,
    json: bool,
) -> Result<()> {
    let format = format.unwrap_or(cfg.batch_format);
    let default_base = cfg.base_or_default(base);
    let reader = open_source(path)?;
    let records = batch::resolve_reader(reader, format, default_base)
        .with_context(|| format!("batch {}", path.display()))?;

    let json = json || cfg.output == OutputFormat::Json;
    let mut out = io::stdout().lock();
    for record in &records {
        if json {
            writeln!(out, "{}", serde_json::to_string(record)?)?;
        } else {
            writeln!(out, "{}", record.resolved)?;
        }
    }
    Ok(())
}
