use crate::dom::node::{Document, Element, Node, NodePath};

/// Selector over heading levels, built from the set of levels to include.
///
/// The constructor silently drops anything outside 1..=6, so callers can pass
/// arbitrary numbers without pre-validating.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadingSelector {
    levels: Vec<u8>,
}

impl HeadingSelector {
    /// Build a selector including the given heading levels
    pub fn levels<I: IntoIterator<Item = u8>>(levels: I) -> Self {
        let mut levels: Vec<u8> = levels
            .into_iter()
            .filter(|lv| (1..=6).contains(lv))
            .collect();
        levels.sort_unstable();
        levels.dedup();
        HeadingSelector { levels }
    }

    /// Selector matching every heading level
    pub fn all() -> Self {
        HeadingSelector::levels(1..=6)
    }

    pub fn matches(&self, elem: &Element) -> bool {
        heading_level(&elem.tag).map_or(false, |lv| self.levels.contains(&lv))
    }
}

/// Parse the level out of a heading tag ("h3" -> 3). Returns None for
/// anything that is not a well-formed h1..h6 tag.
pub fn heading_level(tag: &str) -> Option<u8> {
    let digit = tag.strip_prefix('h')?;
    match digit.parse::<u8>() {
        Ok(lv) if (1..=6).contains(&lv) => Some(lv),
        _ => None,
    }
}

/// Collect the paths of all elements matching the selector, in document order
pub fn select_headings(doc: &Document, selector: &HeadingSelector) -> Vec<NodePath> {
    let mut found = Vec::new();
    let mut path = Vec::new();
    walk(&doc.children, selector, &mut path, &mut found);
    found
}

fn walk(
    children: &[Node],
    selector: &HeadingSelector,
    path: &mut NodePath,
    found: &mut Vec<NodePath>,
) {
    for (index, node) in children.iter().enumerate() {
        match node {
            Node::Element(elem) => {
                path.push(index);
                if selector.matches(elem) {
                    found.push(path.clone());
                }
                walk(&elem.children, selector, path, found);
                path.pop();
            }
            Node::Text(_) | Node::Comment(_) => {}
        }
    }
}

/// Find the first element carrying the given id attribute, in document order
pub fn select_by_id(doc: &Document, id: &str) -> Option<NodePath> {
    let mut path = Vec::new();
    find_by_id(&doc.children, id, &mut path)
}

fn find_by_id(children: &[Node], id: &str, path: &mut NodePath) -> Option<NodePath> {
    for (index, node) in children.iter().enumerate() {
        match node {
            Node::Element(elem) => {
                path.push(index);
                if elem.get_attribute("id") == Some(id) {
                    return Some(path.clone());
                }
                if let Some(found) = find_by_id(&elem.children, id, path) {
                    return Some(found);
                }
                path.pop();
            }
            Node::Text(_) | Node::Comment(_) => {}
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::parse::parse_html;

    #[test]
    fn test_selector_filters_invalid_levels() {
        assert_eq!(
            HeadingSelector::levels([0, 1, 3, 7, 3]),
            HeadingSelector::levels([1, 3])
        );
    }

    #[test]
    fn test_heading_level() {
        assert_eq!(heading_level("h1"), Some(1));
        assert_eq!(heading_level("h6"), Some(6));
        assert_eq!(heading_level("h7"), None);
        assert_eq!(heading_level("h0"), None);
        assert_eq!(heading_level("header"), None);
        assert_eq!(heading_level("p"), None);
    }

    #[test]
    fn test_select_headings_document_order() {
        let doc = parse_html(
            "<body><h1>a</h1><section><h2>b</h2><h3>c</h3></section><h2>d</h2></body>",
        )
        .unwrap();
        let paths = select_headings(&doc, &HeadingSelector::levels([1, 2]));
        let tags: Vec<&str> = paths
            .iter()
            .map(|p| doc.element_at(p).unwrap().tag.as_str())
            .collect();
        assert_eq!(tags, ["h1", "h2", "h2"]);
        assert_eq!(paths[1], vec![0, 1, 0]);
    }

    #[test]
    fn test_select_by_id() {
        let doc =
            parse_html("<body><nav id=\"toc\"><p>old</p></nav><h1 id=\"x\">a</h1></body>")
                .unwrap();
        assert_eq!(select_by_id(&doc, "toc"), Some(vec![0, 0]));
        assert_eq!(select_by_id(&doc, "missing"), None);
    }
}
