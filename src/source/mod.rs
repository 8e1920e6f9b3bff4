//! Source discovery and caching

pub mod cache;
pub mod discovery;

pub use cache::CachePolicy;
pub use discovery::{compile_filter, discover_pdf, list_pdfs};
