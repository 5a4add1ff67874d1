use log::debug;

use crate::dom::{select_headings, Document, HeadingSelector, NodePath};
use crate::toc::ids::ensure_element_id;
use crate::utils::error::BoxResult;

/// One heading ready for ToC construction: where it lives and what it links as
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading {
    pub path: NodePath,
    pub id: String,
}

/// Collect the document's headings in document order, skipping any marked with
/// the ignore attribute, and assign ids to the included ones as a side effect.
pub fn collect_headings(
    doc: &mut Document,
    selector: &HeadingSelector,
    ignore_attr: &str,
) -> BoxResult<Vec<Heading>> {
    let mut headings = Vec::new();
    for path in select_headings(doc, selector) {
        let elem = match doc.element_at(&path) {
            Some(elem) => elem,
            None => continue,
        };
        if elem.has_attribute(ignore_attr) {
            continue;
        }
        let id = ensure_element_id(doc, &path)?;
        headings.push(Heading { path, id });
    }
    debug!("collected {} headings", headings.len());
    Ok(headings)
}

/// Assign ids to every matching non-ignored heading, whether or not it will
/// appear in a ToC. Used on documents that are ToC sources so other documents
/// can link into them directly.
pub fn ensure_all_ids(
    doc: &mut Document,
    selector: &HeadingSelector,
    ignore_attr: &str,
) -> BoxResult<()> {
    collect_headings(doc, selector, ignore_attr).map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::parse_html;

    #[test]
    fn test_collects_in_document_order_with_ids() {
        let mut doc =
            parse_html("<body><h1 id=\"top\">a</h1><section><h2>b</h2></section></body>")
                .unwrap();
        let headings =
            collect_headings(&mut doc, &HeadingSelector::all(), "data-toc-ignore").unwrap();
        assert_eq!(headings.len(), 2);
        assert_eq!(headings[0].id, "top");
        assert_eq!(headings[1].id, "/body[1]/section[1]/h2[1]");
        assert_eq!(
            doc.element_at(&headings[1].path).unwrap().get_attribute("id"),
            Some("/body[1]/section[1]/h2[1]")
        );
    }

    #[test]
    fn test_ignored_headings_invisible() {
        let mut doc = parse_html(
            "<body><h1>a</h1><h2 data-toc-ignore>hidden</h2><h2>b</h2></body>",
        )
        .unwrap();
        let headings =
            collect_headings(&mut doc, &HeadingSelector::all(), "data-toc-ignore").unwrap();
        assert_eq!(headings.len(), 2);
        // the ignored heading stays in the tree, without an id
        let hidden = doc.element_at(&[0, 1]).unwrap();
        assert!(!hidden.has_attribute("id"));
    }

    #[test]
    fn test_selector_limits_levels() {
        let mut doc = parse_html("<body><h1>a</h1><h4>deep</h4></body>").unwrap();
        let headings =
            collect_headings(&mut doc, &HeadingSelector::levels([1, 2, 3]), "data-toc-ignore")
                .unwrap();
        assert_eq!(headings.len(), 1);
        assert!(!doc.element_at(&[0, 1]).unwrap().has_attribute("id"));
    }

    #[test]
    fn test_ensure_all_ids() {
        let mut doc =
            parse_html("<body><h1>a</h1><h2 data-toc-ignore>skip</h2><h3>c</h3></body>")
                .unwrap();
        ensure_all_ids(&mut doc, &HeadingSelector::all(), "data-toc-ignore").unwrap();
        assert!(doc.element_at(&[0, 0]).unwrap().has_attribute("id"));
        assert!(!doc.element_at(&[0, 1]).unwrap().has_attribute("id"));
        assert!(doc.element_at(&[0, 2]).unwrap().has_attribute("id"));
    }
}
