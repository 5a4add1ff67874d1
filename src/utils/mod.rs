pub mod error;
pub mod fs;
pub mod path;

pub use error::{BoxResult, TocError};
