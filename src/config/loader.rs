use log::debug;
use std::path::Path;

use crate::config::types::TocEntryMap;
use crate::utils::error::{BoxResult, TocError};
use crate::utils::fs::read_file;

/// Parse a ToC entry map from YAML. Entries may be bare path strings or
/// mappings with `path` and `ignore_update` keys:
///
/// ```yaml
/// toc.md:
///   - 00.md
///   - path: 99.md
///     ignore_update: true
/// ```
pub fn entry_map_from_yaml(content: &str) -> BoxResult<TocEntryMap> {
    let map: TocEntryMap = serde_yaml::from_str(content)
        .map_err(|e| TocError::Config(format!("Failed to parse ToC entry map: {}", e)))?;
    debug!("parsed entry map with {} targets", map.len());
    Ok(map)
}

/// Load a ToC entry map from a YAML file
pub fn load_entry_map<P: AsRef<Path>>(path: P) -> BoxResult<TocEntryMap> {
    let path = path.as_ref();
    debug!("loading ToC entry map from {}", path.display());
    let content = read_file(path).map_err(|e| {
        TocError::Config(format!(
            "Failed to read entry map {}: {}",
            path.display(),
            e
        ))
    })?;
    entry_map_from_yaml(&content)
}
