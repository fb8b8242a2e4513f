//! API layer - HTTP endpoint handlers organized by domain.

mod health;
mod product;
mod routes;
mod template;

// Re-export all handlers for use in server/app.rs
pub use health::{health, HealthResponse};
pub use product::{
    bulk_update_products, create_product, delete_product, get_product, list_products,
    update_product, ProductQuery,
};
pub use routes::api_routes;
pub use template::{
    create_template, delete_template, duplicate_template, get_template, list_available_variables,
    list_templates, preview_template, render_template, template_variables, update_template,
    ProductSelection, RenderRequest,
};
