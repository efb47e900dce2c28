//! `fsi install` – provision the soundfont directory and fetch the asset.

use anyhow::Result;
use fsi_core::config::FsiConfig;
use fsi_core::{installer, paths};

use super::print_listing;

pub fn run_install(cfg: &FsiConfig) -> Result<()> {
    let dir = paths::soundfont_dir()?;
    println!("Creating soundfont directory {}", dir.display());
    println!(
        "Downloading MuseScore General soundfont from {}",
        paths::DEFAULT_SOUNDFONT_URL
    );

    let outcome = installer::install(cfg)?;
    print_listing(&dir, &outcome.entries);
    Ok(())
}
