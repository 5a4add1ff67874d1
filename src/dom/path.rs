use crate::dom::node::{Document, Node};

/// Compute the structural path expression locating a node within its document,
/// as a sequence of tag steps with 1-based same-tag sibling indices, e.g.
/// `/html[1]/body[1]/h2[3]`.
///
/// Total over any valid element path: returns None only when the path does not
/// resolve to an element in this document.
pub fn path_expr(doc: &Document, path: &[usize]) -> Option<String> {
    if path.is_empty() {
        return None;
    }

    let mut expr = String::new();
    let mut children: &[Node] = &doc.children;
    for &index in path {
        let elem = children.get(index)?.as_element()?;
        let nth = children[..index]
            .iter()
            .filter(|sibling| {
                sibling
                    .as_element()
                    .map_or(false, |other| other.tag == elem.tag)
            })
            .count()
            + 1;
        expr.push_str(&format!("/{}[{}]", elem.tag, nth));
        children = &elem.children;
    }
    Some(expr)
}
