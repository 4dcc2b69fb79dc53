mod cache;
mod settings;

pub use cache::{children_cache_file, load_children, save_children};
pub use settings::{ApiSettings, Config, DisplaySettings};

use crate::error::{FeesError, Result};
use directories::ProjectDirs;
use std::fs;
use std::path::PathBuf;

/// Get the config directory path (~/.schoolfees/ or XDG config)
pub fn config_dir() -> Result<PathBuf> {
    // First try XDG-style directories
    if let Some(proj_dirs) = ProjectDirs::from("", "", "schoolfees") {
        return Ok(proj_dirs.config_dir().to_path_buf());
    }

    // Fallback to ~/.schoolfees/
    let home = dirs_home().ok_or_else(|| {
        FeesError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "Could not determine home directory",
        ))
    })?;

    Ok(home.join(".schoolfees"))
}

fn dirs_home() -> Option<PathBuf> {
    std::env::var_os("HOME").map(PathBuf::from)
}

/// Load the main config.toml
pub fn load_config(config_dir: &PathBuf) -> Result<Config> {
    let path = config_dir.join("config.toml");
    if !path.exists() {
        return Err(FeesError::ConfigFileNotFound(path));
    }
    let content = fs::read_to_string(&path)?;
    toml::from_str(&content).map_err(|e| FeesError::ConfigParse { path, source: e })
}

/// Template content for config.toml
pub const CONFIG_TEMPLATE: &str = r#"[api]
# Base URL of the school-management backend.
base_url = "https://api.example-school.com"

# Bearer token issued at dashboard login. The parent endpoints return the
# fees of the account the token belongs to.
token = ""

# Request timeout in seconds.
timeout_secs = 10

[display]
currency_symbol = "₦"
"#;
