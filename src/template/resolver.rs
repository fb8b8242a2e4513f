//! Variable resolver
//!
//! Turns a product record into the substitution table used by the renderer.
//! Every known variable always resolves to a string; missing or oddly typed
//! fields fall back to fixed values instead of failing.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use rust_decimal::{Decimal, RoundingStrategy};

use crate::product::{FieldValue, ProductRecord};

/// The variables every product resolves
pub const KNOWN_VARIABLES: [&str; 10] = [
    "title",
    "description",
    "price",
    "inventory",
    "sku",
    "vendor",
    "category",
    "status",
    "storeId",
    "lastUpdated",
];

/// Variable name to resolved value, built fresh for each render
pub type SubstitutionTable = BTreeMap<&'static str, String>;

/// Resolve all known variables for `product` using the current time
pub fn resolve(product: &ProductRecord) -> SubstitutionTable {
    resolve_at(product, Utc::now())
}

/// Resolve all known variables for `product`
///
/// `now` stands in for a missing or unreadable `lastUpdated`.
pub fn resolve_at(product: &ProductRecord, now: DateTime<Utc>) -> SubstitutionTable {
    let mut table = SubstitutionTable::new();

    table.insert("title", text_or(&product.title, "Product Title"));
    table.insert(
        "description",
        text_or(&product.description, "Product Description"),
    );
    table.insert("price", format_price(&product.price));
    table.insert("inventory", text_or(&product.inventory, "0"));
    table.insert("sku", text_or(&product.sku, "N/A"));
    table.insert("vendor", text_or(&product.vendor, "Unknown Vendor"));
    table.insert("category", text_or(&product.category, "Uncategorized"));
    table.insert("status", text_or(&product.status, "active"));
    table.insert("storeId", text_or(&product.store_id, "0"));
    table.insert(
        "lastUpdated",
        format_date(&parse_timestamp(&product.last_updated).unwrap_or(now)),
    );

    table
}

/// Format a timestamp the way product dates are shown, e.g. `Jan 5, 2024, 03:07 PM`
pub(crate) fn format_date(timestamp: &DateTime<Utc>) -> String {
    timestamp.format("%b %-d, %Y, %I:%M %p").to_string()
}

fn text_or(value: &Option<FieldValue>, fallback: &str) -> String {
    value
        .as_ref()
        .map_or_else(|| fallback.to_string(), FieldValue::to_text)
}

/// Two decimal places with half-cent ties rounded away from zero
fn format_price(value: &Option<FieldValue>) -> String {
    let price = value.as_ref().and_then(FieldValue::as_number).unwrap_or(0.0);

    match Decimal::from_f64_retain(price) {
        Some(exact) => format!(
            "{:.2}",
            exact.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
        ),
        None => format!("{:.2}", price),
    }
}

fn parse_timestamp(value: &Option<FieldValue>) -> Option<DateTime<Utc>> {
    let parsed = match value.as_ref()? {
        FieldValue::Text(text) => parse_date_text(text.trim()),
        FieldValue::Number(millis) if millis.is_finite() => {
            DateTime::from_timestamp_millis(*millis as i64)
        }
        _ => None,
    };

    if parsed.is_none() {
        tracing::debug!(value = ?value, "Unreadable lastUpdated, using current time");
    }

    parsed
}

fn parse_date_text(text: &str) -> Option<DateTime<Utc>> {
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(text) {
        return Some(timestamp.with_timezone(&Utc));
    }

    if let Ok(naive) = NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }

    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}
