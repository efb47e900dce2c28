//! Temp-file lifecycle for the asset write.
//!
//! The body is streamed into `<final>.part` and renamed onto the final path
//! only after the transfer succeeded, so a failed fetch never leaves a
//! partial file where FluidSynth would look for it. Failed runs leave the
//! `.part` file behind; the next run truncates it.

use anyhow::{Context, Result};
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Arc;

#[cfg(unix)]
use std::os::unix::fs::FileExt;
#[cfg(unix)]
use std::os::unix::io::AsRawFd;

/// Suffix appended to the final path while the transfer is in flight.
pub const TEMP_SUFFIX: &str = ".part";

/// Path of the in-flight temp file for `final_path`
/// (e.g. `default_sound_font.sf2` → `default_sound_font.sf2.part`).
pub fn temp_path(final_path: &Path) -> PathBuf {
    let mut os = final_path.as_os_str().to_owned();
    os.push(TEMP_SUFFIX);
    PathBuf::from(os)
}

/// Writer for the in-flight temp file. Cloneable so the curl write callback
/// can own a handle while the caller keeps one for `sync`/`finalize`.
#[derive(Clone)]
pub struct AssetWriter {
    file: Arc<File>,
    temp_path: PathBuf,
}

impl AssetWriter {
    /// Create the temp file next to `final_path`, truncating any stale
    /// leftover from an earlier failed run.
    pub fn create(final_path: &Path) -> Result<Self> {
        let temp_path = temp_path(final_path);
        let file = File::options()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&temp_path)
            .with_context(|| format!("failed to create temp file {}", temp_path.display()))?;
        Ok(Self {
            file: Arc::new(file),
            temp_path,
        })
    }

    /// Preallocate `size` bytes when the expected length is known up front.
    /// On Unix tries `posix_fallocate` for real block allocation and falls
    /// back to `set_len`; elsewhere uses `set_len` directly.
    pub fn preallocate(&self, size: u64) -> Result<()> {
        #[cfg(unix)]
        {
            let fd = self.file.as_raw_fd();
            let r = unsafe { libc::posix_fallocate(fd, 0, size as libc::off_t) };
            if r == 0 {
                return Ok(());
            }
            tracing::debug!(errno = r, "posix_fallocate failed, falling back to set_len");
        }
        self.file
            .set_len(size)
            .context("failed to preallocate temp file")?;
        Ok(())
    }

    /// Write `data` at `offset` without moving a shared cursor (pwrite).
    #[cfg(unix)]
    pub fn write_at(&self, offset: u64, data: &[u8]) -> Result<()> {
        let n = self
            .file
            .write_at(data, offset)
            .context("temp file write failed")?;
        if n != data.len() {
            anyhow::bail!("short write: {} of {} bytes", n, data.len());
        }
        Ok(())
    }

    /// Non-Unix stub: seek + write on a cloned handle.
    #[cfg(not(unix))]
    pub fn write_at(&self, offset: u64, data: &[u8]) -> Result<()> {
        use std::io::{Seek, SeekFrom, Write};
        let mut f = (*self.file).try_clone()?;
        f.seek(SeekFrom::Start(offset))?;
        f.write_all(data)?;
        Ok(())
    }

    /// Flush file data to disk. Call before `finalize` for durability.
    pub fn sync(&self) -> Result<()> {
        self.file.sync_all().context("temp file sync failed")
    }

    /// Path of the in-flight temp file.
    pub fn temp_path(&self) -> &Path {
        &self.temp_path
    }

    /// Atomically rename the temp file onto `final_path`, consuming the
    /// writer. Overwrites an existing asset unconditionally.
    pub fn finalize(self, final_path: &Path) -> Result<()> {
        let temp_path = self.temp_path.clone();
        drop(self.file);
        std::fs::rename(&temp_path, final_path).with_context(|| {
            format!(
                "failed to rename {} to {}",
                temp_path.display(),
                final_path.display()
            )
        })
    }
}
