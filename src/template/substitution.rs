//! Variable substitution engine for templates

use chrono::{DateTime, Utc};
use regex::Captures;

use super::extract::{extract_variables, PLACEHOLDER};
use super::resolver::resolve_at;
use super::types::RenderedTemplate;
use crate::product::ProductRecord;

/// Render `content` against `product`, substituting {{variable}} placeholders
///
/// Without a product the content is passed through untouched. Placeholders
/// with no known variable stay in the output and are reported in
/// `unresolved`. Only placeholders written in `content` are substituted;
/// placeholders inside product values are copied as-is. The output is not
/// sanitized.
pub fn render(content: &str, product: Option<&ProductRecord>) -> RenderedTemplate {
    render_at(content, product, Utc::now())
}

/// Same as [`render`] with an explicit current time for `lastUpdated` fallbacks
pub fn render_at(
    content: &str,
    product: Option<&ProductRecord>,
    now: DateTime<Utc>,
) -> RenderedTemplate {
    if content.is_empty() {
        return RenderedTemplate::unchanged(content);
    }

    let Some(product) = product else {
        tracing::warn!("Missing product data for template substitution");
        return RenderedTemplate::unchanged(content);
    };

    let variables = resolve_at(product, now);

    let text = PLACEHOLDER
        .replace_all(content, |caps: &Captures| match variables.get(&caps[1]) {
            Some(value) => value.clone(),
            None => caps[0].to_string(),
        })
        .into_owned();

    let unresolved: Vec<String> = extract_variables(content)
        .into_iter()
        .filter(|name| !variables.contains_key(name.as_str()))
        .collect();
    if !unresolved.is_empty() {
        tracing::warn!(unresolved = ?unresolved, "Unreplaced template variables found");
    }

    RenderedTemplate { text, unresolved }
}
