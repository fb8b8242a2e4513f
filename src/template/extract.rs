//! Placeholder extraction

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// A `{{name}}` placeholder; names are ASCII word characters with no padding
    pub(crate) static ref PLACEHOLDER: Regex = Regex::new(r"\{\{([A-Za-z0-9_]+)\}\}").unwrap();
}

/// Return the distinct placeholder names referenced by `content`
///
/// Names are returned in order of first occurrence.
pub fn extract_variables(content: &str) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();

    for captures in PLACEHOLDER.captures_iter(content) {
        let name = &captures[1];
        if !names.iter().any(|existing| existing == name) {
            names.push(name.to_string());
        }
    }

    names
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_collapses_duplicates() {
        let names = extract_variables("Hello {{title}}, SKU {{sku}}, {{title}} again");
        assert_eq!(names, vec!["title", "sku"]);
    }

    #[test]
    fn test_extract_empty_content() {
        assert!(extract_variables("").is_empty());
        assert!(extract_variables("no placeholders here").is_empty());
    }

    #[test]
    fn test_extract_ignores_malformed_placeholders() {
        let names = extract_variables("{{ title }} {title} {{}} {{sku {{price}}} {{a-b}}");
        assert_eq!(names, vec!["price"]);
    }

    #[test]
    fn test_extract_is_case_sensitive() {
        let names = extract_variables("{{Title}} {{title}}");
        assert_eq!(names, vec!["Title", "title"]);
    }

    #[test]
    fn test_extract_is_idempotent() {
        let content = "<h1>{{title}}</h1><p>${{price}}</p>{{custom_note}}";
        assert_eq!(extract_variables(content), extract_variables(content));
        assert_eq!(extract_variables(content), vec!["title", "price", "custom_note"]);
    }
}
