//! Template types and error definitions

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Template-specific error type
#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("Template not found: {0}")]
    NotFound(u32),

    #[error("Template {0} is built in and cannot be modified or deleted")]
    ProtectedResource(u32),

    #[error("Invalid template: {0}")]
    InvalidTemplate(String),
}

/// Result type for template operations
pub type TemplateResult<T> = Result<T, TemplateError>;

/// A product description template
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    /// Unique template identifier
    pub id: u32,

    /// Human-readable template name
    pub name: String,

    /// Template description (may be empty)
    #[serde(default)]
    pub description: String,

    /// Template body with {{variable}} placeholders
    pub content: String,

    /// Distinct placeholder names found in `content` at last write
    #[serde(default)]
    pub variables: Vec<String>,

    /// `false` for built-in templates
    #[serde(default)]
    pub is_custom: bool,

    /// Creation timestamp
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,

    /// Last update timestamp
    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
}

impl Template {
    /// Validate the template
    pub fn validate(&self) -> TemplateResult<()> {
        let name = self.name.trim();
        if name.is_empty() || name.len() > 256 {
            return Err(TemplateError::InvalidTemplate(
                "Name must be 1-256 characters".to_string(),
            ));
        }

        Ok(())
    }
}

/// Request to create a new template
#[derive(Debug, Deserialize)]
pub struct CreateTemplateRequest {
    /// Human-readable template name
    pub name: String,

    /// Template description (optional)
    #[serde(default)]
    pub description: Option<String>,

    /// Template body
    pub content: String,
}

/// Request to update an existing template
#[derive(Debug, Default, Deserialize)]
pub struct UpdateTemplateRequest {
    /// Human-readable template name (optional)
    pub name: Option<String>,

    /// Template description (optional)
    pub description: Option<String>,

    /// Template body (optional); variables are re-derived when present
    pub content: Option<String>,
}

/// Response for listing templates
#[derive(Debug, Serialize)]
pub struct TemplateListResponse {
    /// List of templates
    pub templates: Vec<Template>,

    /// Total count
    pub total: usize,
}

/// Output of rendering template content against a product
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedTemplate {
    /// Rendered text; unresolved placeholders are left verbatim
    pub text: String,

    /// Placeholder names left in `text` after substitution
    pub unresolved: Vec<String>,
}

impl RenderedTemplate {
    /// A result that leaves the content untouched
    pub fn unchanged(content: &str) -> Self {
        Self {
            text: content.to_string(),
            unresolved: Vec::new(),
        }
    }
}

/// Preview of a stored template rendered against a product
#[derive(Debug, Clone, Serialize)]
pub struct TemplatePreview {
    /// Rendered template content
    pub preview: String,

    /// Variables declared by the template
    pub variables: Vec<String>,

    /// Placeholders that could not be resolved
    pub unresolved: Vec<String>,
}

/// Description of a variable that templates may reference
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VariableInfo {
    /// Placeholder name
    pub key: &'static str,

    /// Short label for editors
    pub label: &'static str,

    /// What the variable renders to
    pub description: &'static str,
}
