//! Directory listing for the install report.
//!
//! Mirrors what `ls -l` would show for the target directory: mode string,
//! size in bytes, and name, sorted by name.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// One entry of the target directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryInfo {
    pub name: String,
    pub size: u64,
    /// `-rw-r--r--`-style permission string.
    pub mode: String,
}

/// List `dir`'s entries (name, size, permissions), sorted by name.
pub fn list_dir(dir: &Path) -> Result<Vec<EntryInfo>> {
    let mut entries = Vec::new();
    let read_dir =
        fs::read_dir(dir).with_context(|| format!("failed to read directory {}", dir.display()))?;
    for entry in read_dir {
        let entry = entry.with_context(|| format!("failed to read entry in {}", dir.display()))?;
        let metadata = entry
            .metadata()
            .with_context(|| format!("failed to stat {}", entry.path().display()))?;
        entries.push(EntryInfo {
            name: entry.file_name().to_string_lossy().into_owned(),
            size: metadata.len(),
            mode: mode_string(&metadata),
        });
    }
    entries.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(entries)
}

#[cfg(unix)]
fn mode_string(metadata: &fs::Metadata) -> String {
    use std::os::unix::fs::PermissionsExt;

    let file_type = metadata.file_type();
    let kind = if file_type.is_dir() {
        'd'
    } else if file_type.is_symlink() {
        'l'
    } else {
        '-'
    };

    let mode = metadata.permissions().mode();
    let mut out = String::with_capacity(10);
    out.push(kind);
    for shift in [6u32, 3, 0] {
        let bits = (mode >> shift) & 0o7;
        out.push(if bits & 0o4 != 0 { 'r' } else { '-' });
        out.push(if bits & 0o2 != 0 { 'w' } else { '-' });
        out.push(if bits & 0o1 != 0 { 'x' } else { '-' });
    }
    out
}

/// Non-Unix stub: only the readonly bit is available.
#[cfg(not(unix))]
fn mode_string(metadata: &fs::Metadata) -> String {
    let kind = if metadata.is_dir() { 'd' } else { '-' };
    let rw = if metadata.permissions().readonly() {
        "r--r--r--"
    } else {
        "rw-rw-rw-"
    };
    format!("{kind}{rw}")
}
