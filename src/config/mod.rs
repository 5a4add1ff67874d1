pub mod loader;
pub mod types;

pub use loader::{entry_map_from_yaml, load_entry_map};
pub use types::{
    EntrySpec, ResolvedEntries, TocConfig, TocEntry, TocEntryMap, TocTargetRef,
    DEFAULT_ANCHOR_ID, DEFAULT_IGNORE_ATTR,
};
