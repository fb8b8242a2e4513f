//! Template storage with CRUD operations

use std::collections::BTreeMap;

use chrono::Utc;

use super::builtin::builtin_templates;
use super::extract::extract_variables;
use super::substitution::render;
use super::types::{Template, TemplateError, TemplatePreview, TemplateResult, UpdateTemplateRequest};
use crate::product::ProductRecord;

/// In-memory template storage keyed by template id
#[derive(Debug)]
pub struct TemplateStore {
    templates: BTreeMap<u32, Template>,
}

impl Default for TemplateStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateStore {
    /// Create an empty template store
    pub fn new() -> Self {
        Self {
            templates: BTreeMap::new(),
        }
    }

    /// Create a store holding the built-in templates
    pub fn with_builtins() -> Self {
        Self {
            templates: builtin_templates(Utc::now())
                .into_iter()
                .map(|t| (t.id, t))
                .collect(),
        }
    }

    /// Create a new custom template
    ///
    /// The id is one past the highest id in the store, or 1 when empty.
    pub fn create(
        &mut self,
        name: impl Into<String>,
        description: impl Into<String>,
        content: impl Into<String>,
    ) -> TemplateResult<Template> {
        let content = content.into();
        let now = Utc::now();
        let template = Template {
            id: self.next_id(),
            name: name.into(),
            description: description.into(),
            variables: extract_variables(&content),
            content,
            is_custom: true,
            created_at: now,
            updated_at: now,
        };

        template.validate()?;

        tracing::debug!(
            template_id = template.id,
            variables = ?template.variables,
            "Template created"
        );
        self.templates.insert(template.id, template.clone());

        Ok(template)
    }

    /// Get a template by ID
    pub fn get(&self, id: u32) -> TemplateResult<Template> {
        self.templates
            .get(&id)
            .cloned()
            .ok_or(TemplateError::NotFound(id))
    }

    /// List all templates in id order
    pub fn list(&self) -> Vec<Template> {
        self.templates.values().cloned().collect()
    }

    /// Update an existing custom template
    ///
    /// Only the fields present in `updates` change. New content re-derives
    /// the variable list. Built-in templates are rejected; copy them with
    /// [`TemplateStore::duplicate`] first.
    pub fn update(&mut self, id: u32, updates: UpdateTemplateRequest) -> TemplateResult<Template> {
        let mut template = self.get(id)?;

        if !template.is_custom {
            return Err(TemplateError::ProtectedResource(id));
        }

        if let Some(name) = updates.name {
            template.name = name;
        }

        if let Some(description) = updates.description {
            template.description = description;
        }

        if let Some(content) = updates.content {
            template.variables = extract_variables(&content);
            template.content = content;
        }

        template.updated_at = Utc::now();
        template.validate()?;

        self.templates.insert(id, template.clone());

        Ok(template)
    }

    /// Delete a custom template, returning the removed record
    pub fn delete(&mut self, id: u32) -> TemplateResult<Template> {
        let template = self
            .templates
            .get(&id)
            .ok_or(TemplateError::NotFound(id))?;

        if !template.is_custom {
            tracing::warn!(template_id = id, "Refusing to delete built-in template");
            return Err(TemplateError::ProtectedResource(id));
        }

        self.templates
            .remove(&id)
            .ok_or(TemplateError::NotFound(id))
    }

    /// Copy any template into a new custom template
    pub fn duplicate(&mut self, id: u32) -> TemplateResult<Template> {
        let source = self.get(id)?;

        self.create(
            format!("{} (Copy)", source.name),
            source.description,
            source.content,
        )
    }

    /// Variables stored for a template at its last write
    pub fn preview_variables(&self, id: u32) -> TemplateResult<Vec<String>> {
        self.templates
            .get(&id)
            .map(|t| t.variables.clone())
            .ok_or(TemplateError::NotFound(id))
    }

    /// Render a stored template against a product
    pub fn generate_preview(
        &self,
        id: u32,
        product: Option<&ProductRecord>,
    ) -> TemplateResult<TemplatePreview> {
        let template = self
            .templates
            .get(&id)
            .ok_or(TemplateError::NotFound(id))?;

        let rendered = render(&template.content, product);

        Ok(TemplatePreview {
            preview: rendered.text,
            variables: template.variables.clone(),
            unresolved: rendered.unresolved,
        })
    }

    /// Get the number of templates
    pub fn count(&self) -> usize {
        self.templates.len()
    }

    fn next_id(&self) -> u32 {
        self.templates.keys().next_back().map_or(1, |max| max + 1)
    }
}
