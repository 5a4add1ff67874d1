pub mod guard;

use log::{debug, warn};
use std::cell::Cell;
use std::env;
use std::path::Path;

use crate::config::{ResolvedEntries, TocConfig};
use crate::dom::{parse_html, select_by_id, Document, Element, HeadingSelector, Node};
use crate::pipeline::guard::NestedPassGuard;
use crate::toc::{append_headings, ensure_all_ids, DepthOverrideFn};
use crate::utils::error::BoxResult;
use crate::utils::fs::{read_file, touch_file};
use crate::utils::path::{display_slashed, relative_path, to_absolute, with_html_extension};

/// The host's single-document processing primitive: run the given contents
/// through the full pipeline and return the rendered output. Used only to
/// obtain headings; the output is re-parsed by this crate.
pub trait DocumentPipeline {
    fn process(&mut self, contents: &str, path: &Path) -> BoxResult<String>;
}

/// Orchestrates ToC construction across the documents of one build.
///
/// The host calls [`process_tree`](TocProcessor::process_tree) for every
/// document it renders. Documents configured as ToC sources get stable
/// heading ids and signal rebuilds of the targets they feed; documents
/// configured as targets get a ToC built from their sources and spliced into
/// their anchor element.
pub struct TocProcessor {
    selector: HeadingSelector,
    ignore_attr: String,
    anchor_id: String,
    entries: ResolvedEntries,
    override_depth: Option<DepthOverrideFn>,
    in_entry_pass: Cell<bool>,
}

impl TocProcessor {
    /// Resolve the configuration's paths against the entry context and build
    /// the processor. The resolved maps are immutable from here on.
    pub fn new(config: TocConfig) -> BoxResult<Self> {
        let context = to_absolute(env::current_dir()?, &config.entry_context);
        let entries = ResolvedEntries::resolve(&config.entries, &context);
        Ok(TocProcessor {
            selector: config.selector,
            ignore_attr: config.ignore_attr,
            anchor_id: config.anchor_id,
            entries,
            override_depth: config.override_depth,
            in_entry_pass: Cell::new(false),
        })
    }

    /// Apply ToC processing to one document's tree.
    ///
    /// No-op while a nested entry pass is running, and for documents that are
    /// neither a configured source nor a configured target. Anonymous
    /// documents (no path) are skipped with a warning.
    pub fn process_tree(
        &self,
        tree: &mut Document,
        path: Option<&Path>,
        pipeline: &mut dyn DocumentPipeline,
    ) -> BoxResult<()> {
        if self.in_entry_pass.get() {
            return Ok(());
        }

        let raw_path = match path {
            Some(p) => p,
            None => {
                warn!(
                    "cannot extract headings from anonymous documents or expand a \
                     table of contents into them"
                );
                return Ok(());
            }
        };
        let file_path = to_absolute(env::current_dir()?, raw_path);

        if let Some(affects) = self.entries.targets_of(&file_path) {
            // Give every heading a stable id so other documents can link in,
            // then let the targets fed by this document know it changed
            ensure_all_ids(tree, &self.selector, &self.ignore_attr)?;
            for target in affects {
                if target.toc_path != file_path && !target.ignore_update {
                    debug!("signalling rebuild of {}", target.toc_path.display());
                    touch_file(&target.toc_path)?;
                }
            }
        }

        if let Some(depends_on) = self.entries.entries_for(&file_path) {
            let anchor = match select_by_id(tree, &self.anchor_id) {
                Some(anchor) => anchor,
                None => return Ok(()),
            };
            debug!("building ToC for {}", file_path.display());
            let base_dir = file_path.parent().unwrap_or_else(|| Path::new(""));

            let mut toc_root = Element::new("ol");
            for entry in depends_on {
                let contents = read_file(&entry.path)?;
                let rendered = {
                    let _nested = NestedPassGuard::acquire(&self.in_entry_pass);
                    pipeline.process(&contents, &entry.path)?
                };
                let mut source = parse_html(&rendered)?;

                let rel_path = if entry.path == file_path {
                    None
                } else {
                    Some(display_slashed(&relative_path(
                        base_dir,
                        with_html_extension(&entry.path),
                    )))
                };
                append_headings(
                    &mut toc_root,
                    &mut source,
                    &self.selector,
                    &self.ignore_attr,
                    rel_path.as_deref(),
                    self.override_depth.as_ref(),
                )?;
            }

            // select_by_id just produced this path, so the lookup cannot miss
            if let Some(anchor_elem) = tree.element_at_mut(&anchor) {
                anchor_elem.children = vec![Node::Element(toc_root)];
            }
        }

        Ok(())
    }
}
