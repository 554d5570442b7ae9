//! Infinite Library: deterministic procedural books.
//!
//! A seed string fully determines a book's title, author, cover style and
//! chapter prose. Every facet of a book re-seeds its own generator from the
//! seed and the facet's label, so facets never disturb one another and any
//! chapter can be produced on its own.

pub mod core;
pub mod schema;
