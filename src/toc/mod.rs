pub mod builder;
pub mod collect;
pub mod depth;
pub mod ids;

pub use builder::{append_collected, append_headings};
pub use collect::{collect_headings, ensure_all_ids, Heading};
pub use depth::{resolve_depth, DepthOverrideFn};
pub use ids::ensure_element_id;
