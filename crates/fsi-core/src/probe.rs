//! HTTP HEAD probe for the asset source.
//!
//! Fetches response headers before the GET to learn the expected
//! `Content-Length` (used for partial-transfer detection) and the
//! `Content-Type` (logged only). Some mirrors block HEAD; callers treat a
//! probe failure as non-fatal and download without a size check.

use anyhow::{Context, Result};
use std::str;
use std::time::Duration;

use crate::fetch::TransferOptions;

/// Metadata extracted from a HEAD response.
#[derive(Debug, Clone)]
pub struct ProbeResult {
    /// Total size in bytes, if `Content-Length` is present.
    pub content_length: Option<u64>,
    /// `Content-Type` value if present.
    pub content_type: Option<String>,
}

/// Perform a HEAD request and return parsed metadata. Follows redirects.
pub fn probe(url: &str, opts: &TransferOptions) -> Result<ProbeResult> {
    let mut lines: Vec<String> = Vec::new();

    let mut easy = curl::easy::Easy::new();
    easy.url(url).context("invalid URL")?;
    easy.nobody(true)?; // HEAD request
    easy.follow_location(true)?;
    easy.max_redirections(opts.max_redirections)?;
    easy.connect_timeout(opts.connect_timeout)?;
    easy.timeout(Duration::from_secs(30))?;

    {
        let mut transfer = easy.transfer();
        transfer.header_function(|data| {
            if let Ok(s) = str::from_utf8(data) {
                lines.push(s.trim_end().to_string());
            }
            true
        })?;
        transfer.perform().context("HEAD request failed")?;
    }

    let code = easy.response_code().context("no response code")?;
    if !(200..300).contains(&code) {
        anyhow::bail!("HEAD {} returned HTTP {}", url, code);
    }

    Ok(parse_headers(&lines))
}

/// Parse collected header lines. With redirects the buffer holds every hop's
/// headers; later values win so the final response takes precedence.
fn parse_headers(lines: &[String]) -> ProbeResult {
    let mut content_length = None;
    let mut content_type = None;

    for line in lines {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if let Some((name, value)) = line.split_once(':') {
            let name = name.trim();
            let value = value.trim();
            if name.eq_ignore_ascii_case("content-length") {
                if let Ok(n) = value.parse::<u64>() {
                    content_length = Some(n);
                }
            }
            if name.eq_ignore_ascii_case("content-type") {
                content_type = Some(value.to_string());
            }
        }
    }

    ProbeResult {
        content_length,
        content_type,
    }
}
