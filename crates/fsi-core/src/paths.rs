//! Fixed filesystem and network locations for the soundfont install.
//!
//! FluidSynth looks for its default soundfont under `~/.fluidsynth`, a
//! literal dotted directory in the user's home (not an XDG path), so the
//! home directory is resolved directly.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Directory name under the user's home that FluidSynth reads from.
pub const SOUNDFONT_DIR_NAME: &str = ".fluidsynth";

/// Filename FluidSynth expects for the default soundfont.
pub const SOUNDFONT_FILENAME: &str = "default_sound_font.sf2";

/// Source of the MuseScore General soundfont.
pub const DEFAULT_SOUNDFONT_URL: &str =
    "https://ftp.osuosl.org/pub/musescore/soundfont/MuseScore_General/MuseScore_General.sf2";

/// Resolve `~/.fluidsynth` for the invoking user.
pub fn soundfont_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().context("could not determine home directory")?;
    Ok(home.join(SOUNDFONT_DIR_NAME))
}

/// Full path of the installed soundfont: `~/.fluidsynth/default_sound_font.sf2`.
pub fn soundfont_path() -> Result<PathBuf> {
    Ok(soundfont_dir()?.join(SOUNDFONT_FILENAME))
}

/// Create `dir` and any missing parents. Succeeds silently if it already exists.
pub fn ensure_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir)
        .with_context(|| format!("failed to create directory {}", dir.display()))
}

/// Parse and check the source URL before handing it to libcurl.
/// Only `http` and `https` schemes are accepted.
pub fn validate_source_url(raw: &str) -> Result<url::Url> {
    let parsed = url::Url::parse(raw).with_context(|| format!("invalid URL: {raw}"))?;
    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        other => anyhow::bail!("unsupported URL scheme {other:?} in {raw}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_source_url_accepts_http_and_https() {
        assert!(validate_source_url("https://example.com/font.sf2").is_ok());
        assert!(validate_source_url("http://example.com/font.sf2").is_ok());
    }

    #[test]
    fn validate_source_url_rejects_other_schemes() {
        assert!(validate_source_url("ftp://example.com/font.sf2").is_err());
        assert!(validate_source_url("file:///etc/passwd").is_err());
    }

    #[test]
    fn validate_source_url_rejects_garbage() {
        assert!(validate_source_url("not a url").is_err());
        assert!(validate_source_url("").is_err());
    }

    #[test]
    fn default_url_is_valid() {
        let parsed = validate_source_url(DEFAULT_SOUNDFONT_URL).unwrap();
        assert_eq!(parsed.scheme(), "https");
    }

    #[test]
    fn ensure_dir_is_idempotent() {
        let scratch = tempfile::tempdir().unwrap();
        let dir = scratch.path().join("a").join("b");
        assert!(!dir.exists());
        ensure_dir(&dir).unwrap();
        assert!(dir.is_dir());
        ensure_dir(&dir).unwrap();
        assert!(dir.is_dir());
    }
}
