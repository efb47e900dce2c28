//! Install orchestration: ensure directory, fetch asset, report listing.
//!
//! Strictly sequential; the first failing step aborts the run. There is no
//! rollback and no retry, matching the disposable-setup semantics of the
//! tool. The probe step is best-effort: mirrors that block HEAD still get a
//! plain GET without a size check.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::config::FsiConfig;
use crate::fetch::{self, TransferOptions};
use crate::listing::{self, EntryInfo};
use crate::paths;
use crate::probe;
use crate::storage::AssetWriter;

/// Result of a successful install, for the CLI to render.
#[derive(Debug)]
pub struct InstallOutcome {
    pub asset_path: PathBuf,
    pub bytes_written: u64,
    pub entries: Vec<EntryInfo>,
}

/// Install the default soundfont into `~/.fluidsynth`.
pub fn install(cfg: &FsiConfig) -> Result<InstallOutcome> {
    let dir = paths::soundfont_dir()?;
    install_into(&dir, paths::DEFAULT_SOUNDFONT_URL, cfg)
}

/// Install the asset at `url` into `dir` as the default soundfont filename.
/// Split out from `install` so tests can target a scratch directory and a
/// local server.
pub fn install_into(dir: &Path, url: &str, cfg: &FsiConfig) -> Result<InstallOutcome> {
    paths::validate_source_url(url)?;

    paths::ensure_dir(dir)?;
    tracing::info!("soundfont directory ready at {}", dir.display());

    let opts = TransferOptions::from_config(cfg);
    let expected_len = match probe::probe(url, &opts) {
        Ok(head) => {
            tracing::info!(
                content_length = ?head.content_length,
                content_type = ?head.content_type,
                "probed asset source"
            );
            head.content_length
        }
        Err(err) => {
            tracing::warn!("HEAD probe failed ({err:#}); downloading without size check");
            None
        }
    };

    let asset_path = dir.join(paths::SOUNDFONT_FILENAME);
    let writer = AssetWriter::create(&asset_path)?;
    if let Some(len) = expected_len {
        writer.preallocate(len)?;
    }

    let bytes_written = fetch::fetch_into(url, &writer, expected_len, &opts)
        .with_context(|| format!("failed to download {url}"))?;
    writer.sync()?;
    writer.finalize(&asset_path)?;
    tracing::info!(
        bytes = bytes_written,
        path = %asset_path.display(),
        "soundfont installed"
    );

    let entries = listing::list_dir(dir)?;
    Ok(InstallOutcome {
        asset_path,
        bytes_written,
        entries,
    })
}
