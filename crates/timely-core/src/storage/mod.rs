mod config;

pub use config::Config;

use std::path::PathBuf;

/// Returns `~/.config/timely[-dev]/` based on TIMELY_ENV.
///
/// Set TIMELY_ENV=dev to use a separate development data directory.
///
/// # Errors
/// Returns an error if the config directory cannot be created.
pub fn data_dir() -> Result<PathBuf, std::io::Error> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("TIMELY_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("timely-dev")
    } else {
        base_dir.join("timely")
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
