//! `fsi status` – show the soundfont directory without downloading.

use anyhow::Result;
use fsi_core::{listing, paths};

use super::print_listing;

pub fn run_status() -> Result<()> {
    let dir = paths::soundfont_dir()?;
    if !dir.exists() {
        println!(
            "{} does not exist; run `fsi` to install the default soundfont.",
            dir.display()
        );
        return Ok(());
    }
    let entries = listing::list_dir(&dir)?;
    print_listing(&dir, &entries);
    Ok(())
}
