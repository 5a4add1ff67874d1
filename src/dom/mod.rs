pub mod node;
pub mod parse;
pub mod path;
pub mod query;
pub mod serialize;

pub use node::{strip_positions, Comment, Document, Element, Node, NodePath, Position, Text};
pub use parse::parse_html;
pub use path::path_expr;
pub use query::{heading_level, select_by_id, select_headings, HeadingSelector};
pub use serialize::{document_to_html, element_to_html};
