//! Style Pack Loading
//!
//! Resolves a style pack from an explicit path, the default search
//! locations, or the embedded fallback pack. This is the only place the
//! system touches the filesystem; the lint engine itself does no I/O.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::schema::StylePack;
use crate::config::Config;

/// Load a style pack from a JSON file
pub fn load_style_pack(path: &Path) -> Result<StylePack> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read style pack: {}", path.display()))?;
    let pack: StylePack = serde_json::from_str(&raw)
        .with_context(|| format!("invalid style pack JSON: {}", path.display()))?;
    Ok(pack)
}

/// Find the first style pack file present in the configured search dirs
pub fn find_style_pack(config: &Config) -> Option<PathBuf> {
    config
        .pack_dirs
        .iter()
        .map(|dir| dir.join("stylepack.json"))
        .find(|candidate| candidate.is_file())
}

/// Resolve the effective style pack: explicit path, then search dirs, then
/// the embedded default. Only an explicit path can fail the load.
pub fn resolve_style_pack(config: &Config) -> Result<StylePack> {
    if let Some(path) = &config.pack_path {
        return load_style_pack(path);
    }

    if let Some(found) = find_style_pack(config) {
        log::debug!("using style pack at {}", found.display());
        return load_style_pack(&found);
    }

    log::debug!("no style pack found on disk, using embedded default");
    Ok(embedded_default_pack())
}

/// The default style pack compiled into the binary
pub fn embedded_default_pack() -> StylePack {
    let embedded_json = include_str!("../../resources/stylepack.json");

    match serde_json::from_str::<StylePack>(embedded_json) {
        Ok(pack) => pack,
        Err(e) => {
            // Fallback to an empty permissive pack if parsing fails
            log::warn!("failed to parse embedded style pack: {}. Using empty fallback.", e);
            StylePack::default()
        }
    }
}
