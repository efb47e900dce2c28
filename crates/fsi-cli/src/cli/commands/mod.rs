//! Subcommand implementations.

mod checksum;
mod completions;
mod install;
mod status;

pub use checksum::run_checksum;
pub use completions::run_completions;
pub use install::run_install;
pub use status::run_status;

use fsi_core::listing::EntryInfo;
use std::path::Path;

/// Render the directory listing (mode, size, name) like `ls -l` would.
pub(crate) fn print_listing(dir: &Path, entries: &[EntryInfo]) {
    println!("Contents of {}:", dir.display());
    for e in entries {
        println!("{:<11} {:>12} {}", e.mode, e.size, e.name);
    }
}
