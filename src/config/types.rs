use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::dom::HeadingSelector;
use crate::toc::DepthOverrideFn;
use crate::utils::path::to_absolute;

/// Attribute marking a heading as invisible to ToC construction
pub const DEFAULT_IGNORE_ATTR: &str = "data-toc-ignore";

/// Id of the anchor element whose children are replaced with the built ToC
pub const DEFAULT_ANCHOR_ID: &str = "toc";

/// One configured source entry, either a bare path or a path with flags
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum EntrySpec {
    Path(String),
    Detailed {
        path: String,
        #[serde(default)]
        ignore_update: bool,
    },
}

impl EntrySpec {
    fn parts(&self) -> (&str, bool) {
        match self {
            EntrySpec::Path(path) => (path, false),
            EntrySpec::Detailed {
                path,
                ignore_update,
            } => (path, *ignore_update),
        }
    }
}

/// Mapping from ToC target path to its ordered source entries
pub type TocEntryMap = BTreeMap<String, Vec<EntrySpec>>;

/// Host-facing configuration for ToC processing
pub struct TocConfig {
    pub selector: HeadingSelector,
    pub ignore_attr: String,
    pub anchor_id: String,
    pub entry_context: PathBuf,
    pub entries: TocEntryMap,
    pub override_depth: Option<DepthOverrideFn>,
}

impl TocConfig {
    pub fn new(selector: HeadingSelector) -> Self {
        TocConfig {
            selector,
            ignore_attr: DEFAULT_IGNORE_ATTR.to_string(),
            anchor_id: DEFAULT_ANCHOR_ID.to_string(),
            entry_context: PathBuf::from("."),
            entries: TocEntryMap::new(),
            override_depth: None,
        }
    }

    pub fn with_ignore_attr<S: Into<String>>(mut self, attr: S) -> Self {
        self.ignore_attr = attr.into();
        self
    }

    pub fn with_anchor_id<S: Into<String>>(mut self, id: S) -> Self {
        self.anchor_id = id.into();
        self
    }

    pub fn with_entry_context<P: Into<PathBuf>>(mut self, context: P) -> Self {
        self.entry_context = context.into();
        self
    }

    pub fn with_entries(mut self, entries: TocEntryMap) -> Self {
        self.entries = entries;
        self
    }

    pub fn with_override_depth(mut self, f: DepthOverrideFn) -> Self {
        self.override_depth = Some(f);
        self
    }
}

/// A resolved source entry of one ToC target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TocEntry {
    pub path: PathBuf,
    pub ignore_update: bool,
}

/// A resolved back-reference from a source document to a ToC target it feeds
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TocTargetRef {
    pub toc_path: PathBuf,
    pub ignore_update: bool,
}

/// Entry map with all paths resolved to absolute canonical form, plus the
/// derived inverse mapping. Built once at setup and treated as immutable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedEntries {
    toc_map: BTreeMap<PathBuf, Vec<TocEntry>>,
    entry_map: BTreeMap<PathBuf, Vec<TocTargetRef>>,
}

impl ResolvedEntries {
    /// Resolve every configured path against the base context directory and
    /// build the source-to-targets inverse map
    pub fn resolve(entries: &TocEntryMap, context: &Path) -> Self {
        let mut toc_map = BTreeMap::new();
        let mut entry_map: BTreeMap<PathBuf, Vec<TocTargetRef>> = BTreeMap::new();

        for (toc, specs) in entries {
            let toc_path = to_absolute(context, toc);
            let resolved: Vec<TocEntry> = specs
                .iter()
                .map(|spec| {
                    let (path, ignore_update) = spec.parts();
                    TocEntry {
                        path: to_absolute(context, path),
                        ignore_update,
                    }
                })
                .collect();

            for entry in &resolved {
                entry_map
                    .entry(entry.path.clone())
                    .or_default()
                    .push(TocTargetRef {
                        toc_path: toc_path.clone(),
                        ignore_update: entry.ignore_update,
                    });
            }
            toc_map.insert(toc_path, resolved);
        }

        ResolvedEntries { toc_map, entry_map }
    }

    /// Ordered source entries of a ToC target, if the path is one
    pub fn entries_for(&self, target: &Path) -> Option<&[TocEntry]> {
        self.toc_map.get(target).map(|v| v.as_slice())
    }

    /// ToC targets fed by a source document, if the path is one
    pub fn targets_of(&self, source: &Path) -> Option<&[TocTargetRef]> {
        self.entry_map.get(source).map(|v| v.as_slice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry_map() -> TocEntryMap {
        let mut map = TocEntryMap::new();
        map.insert(
            "toc.md".to_string(),
            vec![
                EntrySpec::Path("01.md".to_string()),
                EntrySpec::Detailed {
                    path: "02.md".to_string(),
                    ignore_update: true,
                },
            ],
        );
        map
    }

    #[test]
    fn test_resolve_absolutizes_paths() {
        let resolved = ResolvedEntries::resolve(&entry_map(), Path::new("/docs"));
        let entries = resolved.entries_for(Path::new("/docs/toc.md")).unwrap();
        assert_eq!(
            entries,
            &[
                TocEntry {
                    path: PathBuf::from("/docs/01.md"),
                    ignore_update: false,
                },
                TocEntry {
                    path: PathBuf::from("/docs/02.md"),
                    ignore_update: true,
                },
            ]
        );
    }

    #[test]
    fn test_inverse_map() {
        let resolved = ResolvedEntries::resolve(&entry_map(), Path::new("/docs"));
        let targets = resolved.targets_of(Path::new("/docs/02.md")).unwrap();
        assert_eq!(
            targets,
            &[TocTargetRef {
                toc_path: PathBuf::from("/docs/toc.md"),
                ignore_update: true,
            }]
        );
        assert!(resolved.targets_of(Path::new("/docs/toc.md")).is_none());
    }

    #[test]
    fn test_config_builder_defaults() {
        let config = TocConfig::new(HeadingSelector::all());
        assert_eq!(config.ignore_attr, DEFAULT_IGNORE_ATTR);
        assert_eq!(config.anchor_id, DEFAULT_ANCHOR_ID);
        assert_eq!(config.entry_context, PathBuf::from("."));
        assert!(config.override_depth.is_none());
    }
}
