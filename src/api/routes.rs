use axum::{
    middleware,
    routing::{get, post, put},
    Router,
};

use crate::server::{simulated_latency, AppState};

use super::health::health;
use super::product::{
    bulk_update_products, create_product, delete_product, get_product, list_products,
    update_product,
};
use super::template::{
    create_template, delete_template, duplicate_template, get_template,
    list_available_variables, list_templates, preview_template, render_template,
    template_variables, update_template,
};

pub fn api_routes(state: AppState) -> Router<AppState> {
    Router::new()
        // Health
        .route("/health", get(health))
        .nest(
            "/api/v1",
            Router::new()
                // Templates
                .route("/templates", get(list_templates).post(create_template))
                .route("/templates/variables", get(list_available_variables))
                .route("/templates/render", post(render_template))
                .route(
                    "/templates/{id}",
                    get(get_template)
                        .put(update_template)
                        .delete(delete_template),
                )
                .route("/templates/{id}/duplicate", post(duplicate_template))
                .route("/templates/{id}/variables", get(template_variables))
                .route("/templates/{id}/preview", post(preview_template))
                // Products
                .route("/products", get(list_products).post(create_product))
                .route("/products/bulk", put(bulk_update_products))
                .route(
                    "/products/{id}",
                    get(get_product).put(update_product).delete(delete_product),
                )
                .layer(middleware::from_fn_with_state(state, simulated_latency)),
        )
}
