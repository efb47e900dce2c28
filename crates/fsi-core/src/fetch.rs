//! Single-stream blocking HTTP GET for the soundfont asset.
//!
//! Streams the response body sequentially into an `AssetWriter`. No retry,
//! no resume: a failed transfer is reported and the run aborts. No overall
//! transfer deadline is applied; a stalled connection is aborted via curl's
//! low-speed limit instead.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

use crate::config::FsiConfig;
use crate::storage::AssetWriter;

/// Curl transfer knobs, derived from the config once per run.
#[derive(Debug, Clone, Copy)]
pub struct TransferOptions {
    pub connect_timeout: Duration,
    pub max_redirections: u32,
    pub low_speed_limit_bytes: u32,
    pub low_speed_time: Duration,
    pub recv_buffer_bytes: Option<usize>,
}

impl TransferOptions {
    pub fn from_config(cfg: &FsiConfig) -> Self {
        Self {
            connect_timeout: cfg.connect_timeout(),
            max_redirections: cfg.max_redirections,
            low_speed_limit_bytes: cfg.low_speed_limit_bytes,
            low_speed_time: cfg.low_speed_time(),
            recv_buffer_bytes: cfg.recv_buffer_bytes,
        }
    }
}

/// Failure modes of a fetch, kept typed so callers can report DNS/connect
/// errors, HTTP error statuses, and truncated bodies distinctly.
#[derive(Debug, Error)]
pub enum FetchError {
    /// libcurl failure: DNS, connection, TLS, stall abort, or a write
    /// callback that gave up after a storage error.
    #[error(transparent)]
    Curl(#[from] curl::Error),
    /// Response had a non-2xx status.
    #[error("GET {url} returned HTTP {code}")]
    HttpStatus { url: String, code: u32 },
    /// Transfer ended with fewer bytes than the server advertised.
    #[error("partial transfer: wrote {written} of {expected} bytes")]
    PartialTransfer { expected: u64, written: u64 },
}

/// Download `url` with a single GET, streaming the body into `writer`.
/// Returns the number of bytes written. When `expected_len` is known the
/// byte count is checked against it after the transfer.
pub fn fetch_into(
    url: &str,
    writer: &AssetWriter,
    expected_len: Option<u64>,
    opts: &TransferOptions,
) -> Result<u64, FetchError> {
    let offset = Arc::new(AtomicU64::new(0));
    let offset_cb = Arc::clone(&offset);
    let writer_cb = writer.clone();

    let mut easy = curl::easy::Easy::new();
    easy.url(url)?;
    easy.follow_location(true)?;
    easy.max_redirections(opts.max_redirections)?;
    easy.connect_timeout(opts.connect_timeout)?;
    easy.low_speed_limit(opts.low_speed_limit_bytes)?;
    easy.low_speed_time(opts.low_speed_time)?;
    if let Some(size) = opts.recv_buffer_bytes {
        easy.buffer_size(size)?;
    }

    {
        let mut transfer = easy.transfer();
        transfer.write_function(move |data| {
            let off = offset_cb.fetch_add(data.len() as u64, Ordering::Relaxed);
            match writer_cb.write_at(off, data) {
                Ok(()) => Ok(data.len()),
                Err(e) => {
                    tracing::warn!("asset write failed: {}", e);
                    Ok(0) // abort transfer
                }
            }
        })?;
        transfer.perform()?;
    }

    let code = easy.response_code()?;
    if !(200..300).contains(&code) {
        return Err(FetchError::HttpStatus {
            url: url.to_string(),
            code,
        });
    }

    let written = offset.load(Ordering::Relaxed);
    if let Some(expected) = expected_len {
        if written != expected {
            return Err(FetchError::PartialTransfer { expected, written });
        }
    }
    Ok(written)
}
