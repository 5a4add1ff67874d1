use crate::dom::node::{Document, Element, Node};

const VOID_ELEMENTS: [&str; 14] = [
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

/// Render a document back to HTML
pub fn document_to_html(doc: &Document) -> String {
    let mut html = String::new();
    for child in &doc.children {
        push_node(&mut html, child);
    }
    html
}

/// Render a single element (and its subtree) to HTML
pub fn element_to_html(elem: &Element) -> String {
    let mut html = String::new();
    push_element(&mut html, elem);
    html
}

fn push_node(html: &mut String, node: &Node) {
    match node {
        Node::Element(elem) => push_element(html, elem),
        Node::Text(text) => {
            html.push_str(&html_escape::encode_text(&text.value));
        }
        Node::Comment(comment) => {
            html.push_str("<!--");
            html.push_str(&comment.value);
            html.push_str("-->");
        }
    }
}

fn push_element(html: &mut String, elem: &Element) {
    html.push('<');
    html.push_str(&elem.tag);
    for (name, value) in &elem.properties {
        html.push(' ');
        html.push_str(name);
        if !value.is_empty() {
            html.push_str("=\"");
            html.push_str(&html_escape::encode_double_quoted_attribute(value));
            html.push('"');
        }
    }
    html.push('>');

    if VOID_ELEMENTS.contains(&elem.tag.as_str()) {
        return;
    }

    for child in &elem.children {
        push_node(html, child);
    }
    html.push_str("</");
    html.push_str(&elem.tag);
    html.push('>');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::parse::parse_html;

    #[test]
    fn test_round_trip_basic_document() {
        let input = "<body><h1 id=\"t\">A &amp; B</h1><p>x<br>y</p></body>";
        let doc = parse_html(input).unwrap();
        assert_eq!(document_to_html(&doc), input);
    }

    #[test]
    fn test_bare_attribute_serialized_without_value() {
        let doc = parse_html("<h2 data-toc-ignore>x</h2>").unwrap();
        assert_eq!(document_to_html(&doc), "<h2 data-toc-ignore>x</h2>");
    }
}
