use crate::dom::{heading_level, strip_positions, Document, Element, HeadingSelector, Node};
use crate::toc::collect::{collect_headings, Heading};
use crate::toc::depth::{resolve_depth, DepthOverrideFn};
use crate::utils::error::BoxResult;

/// One open ordered list above depth 1. The list is owned here while open and
/// attached to the parent's current item when the frame closes, which yields
/// the same structure as attaching eagerly: emissions only ever touch the top
/// of the stack, so the parent's current item cannot change while a deeper
/// frame is open.
struct Frame {
    list: Element,
    has_item: bool,
}

/// Collect a source document's headings and append them to the shared ToC
/// root. Invoked once per source document; the depth bookkeeping restarts from
/// depth 1 each time, so documents contribute independent top-level runs.
pub fn append_headings(
    toc_root: &mut Element,
    source: &mut Document,
    selector: &HeadingSelector,
    ignore_attr: &str,
    rel_path: Option<&str>,
    override_fn: Option<&DepthOverrideFn>,
) -> BoxResult<()> {
    let headings = collect_headings(source, selector, ignore_attr)?;
    append_collected(toc_root, source, &headings, rel_path, override_fn);
    Ok(())
}

/// Grow the nested list structure under `toc_root` by one ordered run of
/// headings, handling depth increases, decreases and skipped levels.
pub fn append_collected(
    toc_root: &mut Element,
    source: &Document,
    headings: &[Heading],
    rel_path: Option<&str>,
    override_fn: Option<&DepthOverrideFn>,
) {
    let mut frames: Vec<Frame> = Vec::new();
    // Seeded against the root's current children: no item is considered open
    // at depth 1 even when earlier documents already contributed entries.
    let mut root_has_item = false;

    for heading in headings {
        let elem = match source.element_at(&heading.path) {
            Some(elem) => elem,
            None => continue,
        };
        // A tag that does not parse as h1..h6 is skipped without touching the
        // stack; upstream selection normally never lets one through.
        let level = match heading_level(&elem.tag) {
            Some(level) => level,
            None => continue,
        };
        let depth = resolve_depth(level, elem, override_fn) as usize;

        // Shrink: close lists deeper than this heading needs
        while frames.len() + 1 > depth {
            close_top(&mut frames, toc_root);
        }

        // Grow: open lists until the target depth, synthesizing placeholder
        // items where a level was skipped
        while frames.len() + 1 < depth {
            let has_item = frames.last().map_or(root_has_item, |f| f.has_item);
            if !has_item {
                let mut placeholder = Element::new("li");
                placeholder.set_attribute("class", format!("toc-level{}", frames.len() + 1));
                push_item(&mut frames, toc_root, &mut root_has_item, placeholder);
            }
            frames.push(Frame {
                list: Element::new("ol"),
                has_item: false,
            });
        }

        // Emit: the item is classed by the heading's original level, not the
        // resolved depth, so remapped content stays styleable by its rank
        let mut link = Element::new("a");
        link.set_attribute(
            "href",
            format!("{}#{}", rel_path.unwrap_or(""), heading.id),
        );
        link.children = elem.children.clone();
        strip_positions(&mut link.children);

        let mut item = Element::new("li");
        item.set_attribute("class", format!("toc-level{}", level));
        item.children.push(Node::Element(link));
        push_item(&mut frames, toc_root, &mut root_has_item, item);
    }

    while !frames.is_empty() {
        close_top(&mut frames, toc_root);
    }
}

/// Append an item at the current depth and mark it as the open item there
fn push_item(frames: &mut Vec<Frame>, toc_root: &mut Element, root_has_item: &mut bool, item: Element) {
    match frames.last_mut() {
        Some(frame) => {
            frame.list.children.push(Node::Element(item));
            frame.has_item = true;
        }
        None => {
            toc_root.children.push(Node::Element(item));
            *root_has_item = true;
        }
    }
}

/// Close the deepest open list and attach it under the parent's current item
fn close_top(frames: &mut Vec<Frame>, toc_root: &mut Element) {
    let frame = match frames.pop() {
        Some(frame) => frame,
        None => return,
    };
    let parent_children = match frames.last_mut() {
        Some(parent) => &mut parent.list.children,
        None => &mut toc_root.children,
    };
    // A frame is only opened once the parent holds an item (real or
    // placeholder), and that item is always the parent's last child
    if let Some(Node::Element(item)) = parent_children.last_mut() {
        item.children.push(Node::Element(frame.list));
    }
}
