//! `fsi checksum` – SHA-256 of a file, defaulting to the installed asset.

use anyhow::Result;
use fsi_core::{checksum, paths};
use std::path::Path;

pub fn run_checksum(path: Option<&Path>) -> Result<()> {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => paths::soundfont_path()?,
    };
    let digest = checksum::sha256_file(&path)?;
    println!("{}  {}", digest, path.display());
    Ok(())
}
