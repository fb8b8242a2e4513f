//! Template CRUD, preview and render endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

use crate::error::Result;
use crate::product::ProductRecord;
use crate::server::AppState;
use crate::template::{
    available_variables, render, CreateTemplateRequest, RenderedTemplate, Template,
    TemplateListResponse, TemplatePreview, UpdateTemplateRequest, VariableInfo,
};

/// Product to render against: inline data or a catalogue product id
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSelection {
    /// Inline product record
    pub product: Option<ProductRecord>,

    /// Catalogue product id, used when no inline record is given
    pub product_id: Option<u32>,
}

/// Body for rendering arbitrary template content
#[derive(Debug, Deserialize)]
pub struct RenderRequest {
    /// Template content to render
    pub content: String,

    #[serde(flatten)]
    pub selection: ProductSelection,
}

async fn select_product(
    state: &AppState,
    selection: ProductSelection,
) -> Result<Option<ProductRecord>> {
    if let Some(product) = selection.product {
        return Ok(Some(product));
    }

    match selection.product_id {
        Some(id) => {
            let product = state.products.read().await.get(id)?;
            Ok(Some(product.record))
        }
        None => Ok(None),
    }
}

/// POST /api/v1/templates - Create a new template
#[tracing::instrument(
    name = "http.create_template",
    skip(state, request),
    fields(template_name = %request.name)
)]
pub async fn create_template(
    State(state): State<AppState>,
    Json(request): Json<CreateTemplateRequest>,
) -> Result<(StatusCode, Json<Template>)> {
    let created = state.templates.write().await.create(
        request.name,
        request.description.unwrap_or_default(),
        request.content,
    )?;

    tracing::info!(template_id = created.id, "Template created");
    Ok((StatusCode::CREATED, Json(created)))
}

/// GET /api/v1/templates - List all templates
#[tracing::instrument(name = "http.list_templates", skip(state))]
pub async fn list_templates(State(state): State<AppState>) -> Json<TemplateListResponse> {
    let templates = state.templates.read().await.list();
    let total = templates.len();

    Json(TemplateListResponse { templates, total })
}

/// GET /api/v1/templates/{id} - Get a specific template
#[tracing::instrument(name = "http.get_template", skip(state))]
pub async fn get_template(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> Result<Json<Template>> {
    Ok(Json(state.templates.read().await.get(id)?))
}

/// PUT /api/v1/templates/{id} - Update an existing template
#[tracing::instrument(name = "http.update_template", skip(state, request))]
pub async fn update_template(
    State(state): State<AppState>,
    Path(id): Path<u32>,
    Json(request): Json<UpdateTemplateRequest>,
) -> Result<Json<Template>> {
    let updated = state.templates.write().await.update(id, request)?;
    Ok(Json(updated))
}

/// DELETE /api/v1/templates/{id} - Delete a template
#[tracing::instrument(name = "http.delete_template", skip(state))]
pub async fn delete_template(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> Result<Json<Template>> {
    let deleted = state.templates.write().await.delete(id)?;

    tracing::info!(template_id = id, "Template deleted");
    Ok(Json(deleted))
}

/// POST /api/v1/templates/{id}/duplicate - Copy a template into a custom one
#[tracing::instrument(name = "http.duplicate_template", skip(state))]
pub async fn duplicate_template(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> Result<(StatusCode, Json<Template>)> {
    let copy = state.templates.write().await.duplicate(id)?;
    Ok((StatusCode::CREATED, Json(copy)))
}

/// GET /api/v1/templates/{id}/variables - Variables declared by a template
#[tracing::instrument(name = "http.template_variables", skip(state))]
pub async fn template_variables(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> Result<Json<Vec<String>>> {
    Ok(Json(state.templates.read().await.preview_variables(id)?))
}

/// POST /api/v1/templates/{id}/preview - Render a stored template
#[tracing::instrument(name = "http.preview_template", skip(state, selection))]
pub async fn preview_template(
    State(state): State<AppState>,
    Path(id): Path<u32>,
    Json(selection): Json<ProductSelection>,
) -> Result<Json<TemplatePreview>> {
    let product = select_product(&state, selection).await?;
    let preview = state
        .templates
        .read()
        .await
        .generate_preview(id, product.as_ref())?;

    Ok(Json(preview))
}

/// POST /api/v1/templates/render - Render unsaved template content
#[tracing::instrument(name = "http.render_template", skip(state, request))]
pub async fn render_template(
    State(state): State<AppState>,
    Json(request): Json<RenderRequest>,
) -> Result<Json<RenderedTemplate>> {
    let product = select_product(&state, request.selection).await?;
    Ok(Json(render(&request.content, product.as_ref())))
}

/// GET /api/v1/templates/variables - Variables available to templates
#[tracing::instrument(name = "http.list_available_variables")]
pub async fn list_available_variables() -> Json<Vec<VariableInfo>> {
    Json(available_variables())
}
