//! `ruri classify <input>` – print the reference kind.

use anyhow::Result;
use ruri_core::classify;

pub fn run_classify(input: &str) -> Result<()> {
    println!("{}", classify(input));
    Ok(())
}
