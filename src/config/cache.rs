use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::fees::Child;

/// The children list is cached after each successful fees fetch so that
/// offline commands can still resolve names. Convenience only — the
/// backend remains authoritative.
pub fn children_cache_file(config_dir: &Path) -> PathBuf {
    config_dir.join("children.json")
}

/// Load the cached children list (empty if the cache doesn't exist yet).
pub fn load_children(config_dir: &Path) -> Result<Vec<Child>> {
    let path = children_cache_file(config_dir);
    if !path.exists() {
        return Ok(Vec::new());
    }
    let content = fs::read_to_string(&path)?;
    // A corrupt cache is not worth failing a command over; treat as empty.
    Ok(serde_json::from_str(&content).unwrap_or_default())
}

/// Save the children list, replacing any previous cache.
pub fn save_children(config_dir: &Path, children: &[Child]) -> Result<()> {
    let path = children_cache_file(config_dir);
    let content = serde_json::to_string_pretty(children)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))?;
    fs::write(path, content)?;
    Ok(())
}
