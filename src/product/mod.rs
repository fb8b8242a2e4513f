//! Product catalogue.
//!
//! Products feed the template previews. The catalogue is an in-memory
//! collection seeded from `fixtures/products.json`; nothing is persisted.

mod catalog;
mod types;

pub use catalog::ProductCatalog;
pub use types::{BulkProductUpdate, FieldValue, Product, ProductError, ProductRecord, ProductResult};
