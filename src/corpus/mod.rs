//! Review corpus loading and domain models.
//!
//! The corpus is the single piece of shared state the rest of the
//! application works on: a [`ReviewCollection`] loaded wholesale from one or
//! more delimited input files at session start. Filtering and search derive
//! new views from it without mutating the loaded records.
//!
//! # Modules
//!
//! - [`model`]: [`Sentiment`], [`ReviewRecord`] and [`ReviewCollection`]
//! - [`schema`]: configured column names resolved against a header row
//! - [`loader`]: CSV parsing into a collection
//! - [`error`]: [`LoadError`] taxonomy

pub mod error;
pub mod loader;
pub mod model;
pub mod schema;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use error::LoadError;
pub use loader::load_collection;
pub use model::{ReviewCollection, ReviewRecord, Sentiment};
pub use schema::ColumnSchema;
