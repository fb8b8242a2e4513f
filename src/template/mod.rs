//! Product description template system.
//!
//! This module provides:
//! - Template definitions with variable placeholders ({{variable}})
//! - A resolver turning product records into substitution values
//! - The substitution engine rendering templates against a product
//! - In-memory template storage with CRUD operations and built-ins
//!
//! # Example
//!
//! ```
//! use storesync_service::product::ProductRecord;
//! use storesync_service::template::{render, TemplateStore};
//!
//! let mut store = TemplateStore::with_builtins();
//! let template = store
//!     .create("Short", "", "<p>{{title}} - ${{price}}</p>")
//!     .unwrap();
//! assert_eq!(template.variables, vec!["title", "price"]);
//!
//! let product = ProductRecord {
//!     title: Some("Widget".into()),
//!     price: Some(9.999.into()),
//!     ..Default::default()
//! };
//!
//! let rendered = render(&template.content, Some(&product));
//! assert_eq!(rendered.text, "<p>Widget - $10.00</p>");
//! ```

mod builtin;
mod extract;
mod resolver;
mod store;
mod substitution;
mod types;
mod variables;

pub use extract::extract_variables;
pub use resolver::{resolve, resolve_at, KNOWN_VARIABLES};
pub use store::TemplateStore;
pub use substitution::{render, render_at};
pub use types::{
    CreateTemplateRequest, RenderedTemplate, Template, TemplateError, TemplateListResponse,
    TemplatePreview, TemplateResult, UpdateTemplateRequest, VariableInfo,
};
pub use variables::available_variables;
