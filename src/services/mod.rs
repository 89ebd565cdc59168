pub mod collection;
pub mod contentful;

pub use collection::{extract_collection, extract_collection_item};
pub use contentful::ContentfulService;
