pub mod html;
pub mod memory;

pub use html::HtmlDocument;
pub use memory::{InMemoryDocument, MemoryElement};
