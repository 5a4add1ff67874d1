//! Builds nested table-of-contents lists from heading-bearing HTML documents
//! and splices them into a designated anchor of a target document.
//!
//! The host pipeline supplies document trees and a [`DocumentPipeline`]
//! primitive for rendering source documents; this crate supplies heading
//! collection, stable identifier assignment, depth resolution, the nested
//! list construction itself, and the multi-document aggregation that ties
//! them together.

pub mod config;
pub mod dom;
pub mod pipeline;
pub mod toc;
pub mod utils;

pub use config::{
    entry_map_from_yaml, load_entry_map, EntrySpec, TocConfig, TocEntryMap,
    DEFAULT_ANCHOR_ID, DEFAULT_IGNORE_ATTR,
};
pub use dom::{parse_html, Document, Element, HeadingSelector, Node};
pub use pipeline::{DocumentPipeline, TocProcessor};
pub use toc::{append_headings, collect_headings, ensure_all_ids, DepthOverrideFn};
pub use utils::error::{BoxResult, TocError};
