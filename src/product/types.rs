//! Product record types and error definitions

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Product-specific error type
#[derive(Debug, Error)]
pub enum ProductError {
    #[error("Product not found: {0}")]
    NotFound(u32),

    #[error("Invalid product fixture: {0}")]
    Fixture(#[from] serde_json::Error),
}

/// Result type for product operations
pub type ProductResult<T> = Result<T, ProductError>;

/// A single product field as it arrives from a product source.
///
/// Sources are loosely typed: a price may be a number or a string, an
/// inventory count may be a string, and anything may be an array or object.
/// `Other` keeps whatever JSON did not fit the scalar variants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Bool(bool),
    Number(f64),
    Text(String),
    Other(serde_json::Value),
}

impl FieldValue {
    /// Text form of the value
    ///
    /// Numbers use the shortest decimal form (`5`, `5.5`), booleans
    /// `true`/`false`, and arrays or objects their compact JSON.
    pub fn to_text(&self) -> String {
        match self {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Number(n) => n.to_string(),
            FieldValue::Bool(b) => b.to_string(),
            FieldValue::Other(value) => value.to_string(),
        }
    }

    /// Numeric view of the value, if it holds a number or numeric text
    pub fn as_number(&self) -> Option<f64> {
        let number = match self {
            FieldValue::Number(n) => Some(*n),
            FieldValue::Text(s) => s.trim().parse::<f64>().ok(),
            _ => None,
        };

        number.filter(|n| n.is_finite())
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Number(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Number(value as f64)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Bool(value)
    }
}

/// Product data consumed by the template resolver.
///
/// Every field is optional; unknown keys in the source JSON are ignored so a
/// full catalogue product can be passed where a record is expected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProductRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<FieldValue>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<FieldValue>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<FieldValue>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<FieldValue>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor: Option<FieldValue>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<FieldValue>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub inventory: Option<FieldValue>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<FieldValue>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub store_id: Option<FieldValue>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<FieldValue>,
}

impl ProductRecord {
    /// Overwrite fields with every field present in `updates`
    pub fn merge(&mut self, updates: ProductRecord) {
        fn take(target: &mut Option<FieldValue>, update: Option<FieldValue>) {
            if update.is_some() {
                *target = update;
            }
        }

        take(&mut self.title, updates.title);
        take(&mut self.description, updates.description);
        take(&mut self.sku, updates.sku);
        take(&mut self.category, updates.category);
        take(&mut self.vendor, updates.vendor);
        take(&mut self.price, updates.price);
        take(&mut self.inventory, updates.inventory);
        take(&mut self.status, updates.status);
        take(&mut self.store_id, updates.store_id);
        take(&mut self.last_updated, updates.last_updated);
    }
}

/// A product held by the catalogue
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Catalogue identifier
    #[serde(rename = "Id")]
    pub id: u32,

    /// Product fields
    #[serde(flatten)]
    pub record: ProductRecord,

    /// Creation timestamp
    #[serde(rename = "createdAt", default = "Utc::now")]
    pub created_at: DateTime<Utc>,

    /// Last update timestamp
    #[serde(rename = "updatedAt", default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
}

/// One entry of a bulk product update
#[derive(Debug, Clone, Deserialize)]
pub struct BulkProductUpdate {
    /// Target product identifier
    #[serde(rename = "Id")]
    pub id: u32,

    /// Fields to overwrite
    #[serde(flatten)]
    pub fields: ProductRecord,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_record_accepts_mixed_types() {
        let record: ProductRecord = serde_json::from_value(json!({
            "title": "Desk Lamp",
            "price": "24.5",
            "inventory": 12,
            "storeId": null,
            "status": true,
            "vendor": ["a", "b"],
            "unexpected": "ignored"
        }))
        .unwrap();

        assert_eq!(record.title, Some(FieldValue::Text("Desk Lamp".to_string())));
        assert_eq!(record.price, Some(FieldValue::Text("24.5".to_string())));
        assert_eq!(record.inventory, Some(FieldValue::Number(12.0)));
        assert_eq!(record.store_id, None);
        assert_eq!(record.status, Some(FieldValue::Bool(true)));
        assert_eq!(record.vendor, Some(FieldValue::Other(json!(["a", "b"]))));
        assert_eq!(record.sku, None);
    }

    #[test]
    fn test_field_value_text() {
        assert_eq!(FieldValue::from(5i64).to_text(), "5");
        assert_eq!(FieldValue::from(5.5).to_text(), "5.5");
        assert_eq!(FieldValue::from(false).to_text(), "false");
        assert_eq!(FieldValue::Other(json!({"a": 1})).to_text(), r#"{"a":1}"#);
    }

    #[test]
    fn test_field_value_as_number() {
        assert_eq!(FieldValue::from(" 12.5 ").as_number(), Some(12.5));
        assert_eq!(FieldValue::from("abc").as_number(), None);
        assert_eq!(FieldValue::from("inf").as_number(), None);
        assert_eq!(FieldValue::from(true).as_number(), None);
    }

    #[test]
    fn test_merge_only_overwrites_present_fields() {
        let mut record = ProductRecord {
            title: Some("Old".into()),
            sku: Some("SKU-1".into()),
            ..Default::default()
        };

        record.merge(ProductRecord {
            title: Some("New".into()),
            price: Some(3.0.into()),
            ..Default::default()
        });

        assert_eq!(record.title, Some("New".into()));
        assert_eq!(record.sku, Some("SKU-1".into()));
        assert_eq!(record.price, Some(3.0.into()));
    }

    #[test]
    fn test_product_uses_capitalised_id_key() {
        let product: Product = serde_json::from_value(json!({
            "Id": 7,
            "title": "Mug",
            "price": 8.0
        }))
        .unwrap();

        assert_eq!(product.id, 7);
        assert_eq!(product.record.title, Some("Mug".into()));

        let value = serde_json::to_value(&product).unwrap();
        assert_eq!(value["Id"], 7);
        assert_eq!(value["title"], "Mug");
        assert!(value.get("sku").is_none());
    }
}
