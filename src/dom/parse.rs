use lazy_static::lazy_static;
use regex::Regex;

use crate::dom::node::{Comment, Document, Element, Node, Position, Text};
use crate::utils::error::{BoxResult, TocError};

lazy_static! {
    static ref ATTR_REGEX: Regex = Regex::new(
        r#"([a-zA-Z_:][-a-zA-Z0-9_:.]*)(?:\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s"'=<>`]+)))?"#
    )
    .unwrap();
}

/// Elements that never have a closing tag
const VOID_ELEMENTS: [&str; 14] = [
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

/// Parse an HTML document or fragment into a tree.
///
/// This is a small permissive parser, not a spec-conformant one: it handles
/// tags, attributes, text, comments, void and self-closed elements, and
/// silently drops doctype declarations and stray closing tags. Source
/// positions are recorded on every node.
pub fn parse_html(input: &str) -> BoxResult<Document> {
    Parser::new(input).run()
}

struct Parser<'a> {
    input: &'a str,
    offset: usize,
    line: usize,
    column: usize,
    doc: Document,
    stack: Vec<Element>,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str) -> Self {
        Parser {
            input,
            offset: 0,
            line: 1,
            column: 1,
            doc: Document::default(),
            stack: Vec::new(),
        }
    }

    fn run(mut self) -> BoxResult<Document> {
        while self.offset < self.input.len() {
            let rest = &self.input[self.offset..];
            if let Some(stripped) = rest.strip_prefix("<!--") {
                self.consume_comment(stripped)?;
            } else if rest.starts_with("<!") {
                self.consume_doctype()?;
            } else if rest.starts_with("</") {
                self.consume_close_tag()?;
            } else if rest.starts_with('<') && starts_tag_name(&rest[1..]) {
                self.consume_open_tag()?;
            } else {
                self.consume_text();
            }
        }

        // Unclosed elements are attached as if closed at end of input
        while let Some(elem) = self.stack.pop() {
            self.append(Node::Element(elem));
        }
        Ok(self.doc)
    }

    fn position(&self) -> Position {
        Position {
            line: self.line,
            column: self.column,
            offset: self.offset,
        }
    }

    /// Move past `len` bytes, keeping line/column bookkeeping current
    fn advance(&mut self, len: usize) {
        for ch in self.input[self.offset..self.offset + len].chars() {
            if ch == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
        self.offset += len;
    }

    fn append(&mut self, node: Node) {
        match self.stack.last_mut() {
            Some(parent) => parent.children.push(node),
            None => self.doc.children.push(node),
        }
    }

    fn consume_comment(&mut self, after_marker: &str) -> BoxResult<()> {
        let position = Some(self.position());
        let (value, consumed) = match after_marker.find("-->") {
            Some(end) => (&after_marker[..end], 4 + end + 3),
            None => (after_marker, 4 + after_marker.len()),
        };
        let value = value.to_string();
        self.advance(consumed);
        self.append(Node::Comment(Comment { value, position }));
        Ok(())
    }

    fn consume_doctype(&mut self) -> BoxResult<()> {
        let rest = &self.input[self.offset..];
        match rest.find('>') {
            Some(end) => {
                self.advance(end + 1);
                Ok(())
            }
            None => Err(TocError::Parse(format!(
                "unterminated declaration at line {}",
                self.line
            ))
            .into()),
        }
    }

    fn consume_close_tag(&mut self) -> BoxResult<()> {
        let rest = &self.input[self.offset..];
        let end = rest.find('>').ok_or_else(|| {
            TocError::Parse(format!("unterminated closing tag at line {}", self.line))
        })?;
        let tag = rest[2..end].trim().to_ascii_lowercase();
        self.advance(end + 1);

        if self.stack.iter().any(|elem| elem.tag == tag) {
            // Close intervening unclosed elements along the way
            while let Some(elem) = self.stack.pop() {
                let done = elem.tag == tag;
                self.append(Node::Element(elem));
                if done {
                    break;
                }
            }
        }
        Ok(())
    }

    fn consume_open_tag(&mut self) -> BoxResult<()> {
        let position = Some(self.position());
        let rest = &self.input[self.offset..];
        let end = tag_end(rest).ok_or_else(|| {
            TocError::Parse(format!("unterminated tag at line {}", self.line))
        })?;
        let inner = rest[1..end].trim_end_matches('/').trim();
        let self_closed = rest[1..end].trim_end().ends_with('/');

        let name_len = inner
            .find(|c: char| c.is_whitespace())
            .unwrap_or(inner.len());
        let tag = inner[..name_len].to_ascii_lowercase();

        let mut elem = Element::new(tag);
        elem.position = position;
        for cap in ATTR_REGEX.captures_iter(&inner[name_len..]) {
            let name = cap[1].to_ascii_lowercase();
            let value = cap
                .get(2)
                .or_else(|| cap.get(3))
                .or_else(|| cap.get(4))
                .map(|m| m.as_str())
                .unwrap_or("");
            let value = html_escape::decode_html_entities(value).into_owned();
            elem.properties.entry(name).or_insert(value);
        }
        self.advance(end + 1);

        if self_closed || VOID_ELEMENTS.contains(&elem.tag.as_str()) {
            self.append(Node::Element(elem));
        } else {
            self.stack.push(elem);
        }
        Ok(())
    }

    fn consume_text(&mut self) {
        let position = Some(self.position());
        let rest = &self.input[self.offset..];
        // A "<" that does not open a tag is treated as text
        let mut end = rest.len();
        let mut search = 1.min(rest.len());
        while let Some(found) = rest[search..].find('<') {
            let at = search + found;
            let after = &rest[at + 1..];
            if after.starts_with('!') || after.starts_with('/') || starts_tag_name(after) {
                end = at;
                break;
            }
            search = at + 1;
        }
        let value = html_escape::decode_html_entities(&rest[..end]).into_owned();
        self.advance(end);
        self.append(Node::Text(Text { value, position }));
    }
}

fn starts_tag_name(s: &str) -> bool {
    s.chars().next().map_or(false, |c| c.is_ascii_alphabetic())
}

/// Find the index of the closing ">" of a tag, skipping quoted attribute values
fn tag_end(rest: &str) -> Option<usize> {
    let mut quote: Option<char> = None;
    for (i, ch) in rest.char_indices() {
        match (quote, ch) {
            (Some(q), c) if c == q => quote = None,
            (Some(_), _) => {}
            (None, '"') | (None, '\'') => quote = Some(ch),
            (None, '>') => return Some(i),
            (None, _) => {}
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_nested_elements() {
        let doc = parse_html("<body><h1 id=\"top\">Title</h1><p>text</p></body>").unwrap();
        let body = doc.element_at(&[0]).unwrap();
        assert_eq!(body.tag, "body");
        assert_eq!(body.children.len(), 2);

        let h1 = doc.element_at(&[0, 0]).unwrap();
        assert_eq!(h1.tag, "h1");
        assert_eq!(h1.get_attribute("id"), Some("top"));
        match &h1.children[0] {
            Node::Text(text) => assert_eq!(text.value, "Title"),
            other => panic!("expected text, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_attribute_styles() {
        let doc =
            parse_html("<h2 class='a b' data-toc-ignore custom=plain>x</h2>").unwrap();
        let h2 = doc.element_at(&[0]).unwrap();
        assert_eq!(h2.get_attribute("class"), Some("a b"));
        assert_eq!(h2.get_attribute("data-toc-ignore"), Some(""));
        assert_eq!(h2.get_attribute("custom"), Some("plain"));
    }

    #[test]
    fn test_parse_void_and_self_closing() {
        let doc = parse_html("<p>a<br>b<img src=\"x.png\"/>c</p>").unwrap();
        let p = doc.element_at(&[0]).unwrap();
        assert_eq!(p.children.len(), 5);
        assert_eq!(p.children[1].as_element().unwrap().tag, "br");
        assert_eq!(p.children[3].as_element().unwrap().tag, "img");
    }

    #[test]
    fn test_parse_comment_and_doctype() {
        let doc = parse_html("<!DOCTYPE html><!-- note --><p>x</p>").unwrap();
        assert_eq!(doc.children.len(), 2);
        match &doc.children[0] {
            Node::Comment(comment) => assert_eq!(comment.value, " note "),
            other => panic!("expected comment, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_entities_decoded() {
        let doc = parse_html("<p title=\"a &amp; b\">x &lt; y</p>").unwrap();
        let p = doc.element_at(&[0]).unwrap();
        assert_eq!(p.get_attribute("title"), Some("a & b"));
        match &p.children[0] {
            Node::Text(text) => assert_eq!(text.value, "x < y"),
            other => panic!("expected text, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_records_positions() {
        let doc = parse_html("<p>x</p>\n<h1>y</h1>").unwrap();
        let h1 = doc.element_at(&[2]).unwrap();
        let position = h1.position.unwrap();
        assert_eq!(position.line, 2);
        assert_eq!(position.column, 1);
        assert_eq!(position.offset, 9);
    }

    #[test]
    fn test_parse_unclosed_elements_attach() {
        let doc = parse_html("<div><p>abandoned").unwrap();
        let div = doc.element_at(&[0]).unwrap();
        assert_eq!(div.tag, "div");
        assert_eq!(div.children[0].as_element().unwrap().tag, "p");
    }

    #[test]
    fn test_parse_stray_close_ignored() {
        let doc = parse_html("</div><p>x</p>").unwrap();
        assert_eq!(doc.element_at(&[0]).unwrap().tag, "p");
    }
}
