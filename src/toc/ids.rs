use crate::dom::{path_expr, Document, NodePath};
use crate::utils::error::{BoxResult, TocError};

/// Make sure the element at `path` carries a stable id, deriving one from its
/// structural position when absent, and return it.
///
/// Idempotent: an element that already has an id is returned untouched, so a
/// second call never mutates the tree. A path expression that cannot be
/// computed for a reachable element is an invariant violation in the query
/// layer and is reported as a fatal error.
pub fn ensure_element_id(doc: &mut Document, path: &NodePath) -> BoxResult<String> {
    let elem = doc
        .element_at(path)
        .ok_or_else(|| TocError::Query(format!("no element at path {:?}", path)))?;

    if let Some(id) = elem.get_attribute("id") {
        return Ok(id.to_string());
    }

    let id = path_expr(doc, path).ok_or_else(|| {
        TocError::Query(
            "structural path computation returned nothing for a reachable element; \
             this is a bug in the query layer"
                .to_string(),
        )
    })?;

    // element_at succeeded above, so the mutable lookup cannot miss
    if let Some(elem) = doc.element_at_mut(path) {
        elem.set_attribute("id", id.clone());
    }
    Ok(id)
}
