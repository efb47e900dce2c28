use anyhow::Result;
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Initialize structured logging to `~/.local/state/fsi/fsi.log`.
///
/// Uses the XDG base directory spec via the `xdg` crate to locate the state
/// directory. Human-facing status lines stay on stdout; the log file carries
/// the tracing output.
pub fn init_logging() -> Result<()> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("fsi")?;
    let log_dir = xdg_dirs.get_state_home();

    fs::create_dir_all(&log_dir)?;
    let log_file_path: PathBuf = log_dir.join("fsi.log");

    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_file_path)?;

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,fsi_core=debug,fsi_cli=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(move || file.try_clone().expect("failed to clone log file handle"))
        .with_ansi(false)
        .init();

    tracing::info!("fsi logging initialized at {}", log_file_path.display());

    Ok(())
}
