use anyhow::{Result, bail};
use std::path::{Path, PathBuf};

/// File name of the place database inside the data directory
pub const DB_FILE_NAME: &str = "places.db";

/// Resolve the data directory path based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. PLACEKEEP_PATH environment variable (with tilde expansion)
/// 3. XDG data directory (recommended default)
/// 4. ~/.placekeep (fallback for systems without XDG)
pub fn resolve_data_dir(explicit_path: Option<&str>) -> Result<PathBuf> {
    // Priority 1: Explicit path
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    // Priority 2: PLACEKEEP_PATH environment variable
    if let Ok(env_path) = std::env::var("PLACEKEEP_PATH") {
        return Ok(expand_tilde(&env_path));
    }

    // Priority 3: XDG data directory (recommended default)
    if let Some(data_dir) = dirs::data_dir() {
        return Ok(data_dir.join("placekeep"));
    }

    // Priority 4: Fallback to ~/.placekeep (last resort for systems without XDG)
    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".placekeep"));
    }

    bail!("Could not determine data directory: no HOME directory or XDG data directory found")
}

/// Database file path inside a resolved data directory
pub fn db_path(data_dir: &Path) -> PathBuf {
    data_dir.join(DB_FILE_NAME)
}

/// Expand tilde (~) in paths to the user's home directory
fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}
