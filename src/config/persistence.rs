//! Reading and writing `config.json`
//!
//! Settings live in the user's config directory. Loading never fails from
//! the caller's point of view: anything unreadable falls back to defaults.
//! Saving goes through a sibling `.bak` file that is renamed into place.

use crate::config::Settings;
use crate::error::{Error, Result, ResultExt};
use log::{debug, info, warn};
use std::fs;
use std::path::{Path, PathBuf};

// ─────────────────────────────────────────────────────────────────────────────
// Constants
// ─────────────────────────────────────────────────────────────────────────────

/// Directory name under the platform config dir
const APP_NAME: &str = "tabindent";

/// Settings file inside the config directory
const CONFIG_FILE_NAME: &str = "config.json";

/// Temporary file written before the rename
const CONFIG_BACKUP_NAME: &str = "config.json.bak";

// ─────────────────────────────────────────────────────────────────────────────
// Locations
// ─────────────────────────────────────────────────────────────────────────────

/// Directory holding `config.json`.
///
/// - **Windows**: `%APPDATA%\tabindent\`
/// - **macOS**: `~/Library/Application Support/tabindent/`
/// - **Linux**: `~/.config/tabindent/`
///
/// # Errors
///
/// `Error::ConfigDirNotFound` when the platform has no config directory,
/// typically because `HOME` is unset.
pub fn get_config_dir() -> Result<PathBuf> {
    dirs::config_dir()
        .map(|base| base.join(APP_NAME))
        .ok_or(Error::ConfigDirNotFound)
}

/// Full path of `config.json`.
///
/// # Errors
///
/// Same as [`get_config_dir`].
pub fn get_config_file_path() -> Result<PathBuf> {
    Ok(get_config_dir()?.join(CONFIG_FILE_NAME))
}

/// Ensure `dir` exists, creating it if necessary.
fn ensure_dir(dir: &Path) -> Result<()> {
    if !dir.exists() {
        debug!("Creating config directory: {}", dir.display());
        fs::create_dir_all(dir).map_err(|e| Error::ConfigSave {
            path: dir.to_path_buf(),
            source: Box::new(e),
        })?;
    }
    Ok(())
}

// ─────────────────────────────────────────────────────────────────────────────
// Load Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Settings from the user's config file.
///
/// A missing, unreadable or malformed file yields `Settings::default()`;
/// failures are logged at warn level.
pub fn load_config() -> Settings {
    get_config_file_path()
        .and_then(|path| load_config_from(&path))
        .unwrap_or_warn_default(Settings::default(), "Could not read settings")
}

/// Load configuration from `config_path`.
///
/// A missing or empty file yields default settings.
///
/// # Errors
///
/// - `Error::ConfigLoad`: The file exists but cannot be read
/// - `Error::ConfigParse`: The file does not contain valid settings JSON
pub fn load_config_from(config_path: &Path) -> Result<Settings> {
    if !config_path.exists() {
        debug!(
            "No settings at {}, starting from defaults",
            config_path.display()
        );
        return Ok(Settings::default());
    }

    debug!("Reading settings from {}", config_path.display());

    let contents = fs::read_to_string(config_path).map_err(|e| Error::ConfigLoad {
        path: config_path.to_path_buf(),
        source: Box::new(e),
    })?;

    if contents.trim().is_empty() {
        debug!("Settings file is blank, starting from defaults");
        return Ok(Settings::default());
    }

    let settings = Settings::from_json_sanitized(&contents).map_err(|e| {
        warn!(
            "Settings at {} are not valid JSON: {}",
            config_path.display(),
            e
        );
        Error::ConfigParse {
            message: format!("{}: {}", config_path.display(), e),
            source: Some(Box::new(e)),
        }
    })?;

    info!(
        "Loaded settings from {}",
        config_path.display()
    );
    Ok(settings)
}

// ─────────────────────────────────────────────────────────────────────────────
// Save Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Write settings to the user's config directory.
///
/// # Errors
///
/// `Error::ConfigDirNotFound` or `Error::ConfigSave`.
pub fn save_config(settings: &Settings) -> Result<()> {
    save_config_to(settings, &get_config_dir()?)
}

/// Save configuration into `config_dir`.
///
/// The JSON is first written to a backup file which then replaces the
/// config file, so a failed write never leaves a truncated config behind.
///
/// # Errors
///
/// Returns `Error::ConfigSave` if the directory or file cannot be written.
pub fn save_config_to(settings: &Settings, config_dir: &Path) -> Result<()> {
    ensure_dir(config_dir)?;
    let config_path = config_dir.join(CONFIG_FILE_NAME);
    let backup_path = config_dir.join(CONFIG_BACKUP_NAME);

    debug!("Writing settings to {}", config_path.display());

    let json = serde_json::to_string_pretty(settings).map_err(|e| Error::ConfigSave {
        path: config_path.clone(),
        source: Box::new(e),
    })?;

    fs::write(&backup_path, &json).map_err(|e| Error::ConfigSave {
        path: backup_path.clone(),
        source: Box::new(e),
    })?;

    fs::rename(&backup_path, &config_path).map_err(|e| Error::ConfigSave {
        path: config_path.clone(),
        source: Box::new(e),
    })?;

    info!(
        "Saved settings to {}",
        config_path.display()
    );
    Ok(())
}

/// Best-effort [`save_config`] for autosave and exit paths.
///
/// Logs a failure instead of returning it; `true` means the file was written.
pub fn save_config_silent(settings: &Settings) -> bool {
    match save_config(settings) {
        Ok(()) => true,
        Err(e) => {
            warn!("Settings were not saved: {}", e);
            false
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
