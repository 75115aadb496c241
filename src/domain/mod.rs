mod document;
mod table;

pub use document::{Document, DocumentId, DocumentKind};
pub use table::TableMatrix;
