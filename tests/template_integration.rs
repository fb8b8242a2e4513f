//! Template engine integration tests
//!
//! These tests exercise the template store, resolver and renderer together
//! through the public crate API, using catalogue products as input.

use serde_json::json;

use storesync_service::product::{ProductCatalog, ProductRecord};
use storesync_service::template::{
    extract_variables, render, resolve, TemplateError, TemplateStore, UpdateTemplateRequest,
    KNOWN_VARIABLES,
};

fn record(value: serde_json::Value) -> ProductRecord {
    serde_json::from_value(value).unwrap()
}

#[test]
fn test_resolve_always_yields_every_variable() {
    let records = [
        record(json!({})),
        record(json!({"title": null, "price": null, "inventory": null})),
        record(json!({"title": 42, "price": [1], "storeId": {"id": 1}, "lastUpdated": false})),
    ];

    for product in &records {
        let table = resolve(product);
        for key in KNOWN_VARIABLES {
            assert!(table.contains_key(key), "missing {key}");
        }
    }
}

#[test]
fn test_resolve_price_examples() {
    assert_eq!(resolve(&record(json!({"price": 19.5})))["price"], "19.50");
    assert_eq!(resolve(&record(json!({"price": "abc"})))["price"], "0.00");
    assert_eq!(resolve(&record(json!({})))["price"], "0.00");
}

#[test]
fn test_render_examples() {
    let widget = record(json!({"title": "Widget", "price": 9.999}));
    let rendered = render("<p>{{title}} - ${{price}}</p>", Some(&widget));
    assert_eq!(rendered.text, "<p>Widget - $10.00</p>");
    assert!(rendered.unresolved.is_empty());

    let x = record(json!({"title": "X"}));
    let rendered = render("{{title}} {{unknownVar}}", Some(&x));
    assert_eq!(rendered.text, "X {{unknownVar}}");
    assert_eq!(rendered.unresolved, vec!["unknownVar"]);

    let content = "<h1>{{title}}</h1>";
    assert_eq!(render(content, None).text, content);
}

#[test]
fn test_create_then_get_round_trip() {
    let mut store = TemplateStore::new();
    let content = "<h2>{{title}}</h2><p>{{vendor}} / {{category}} / {{title}}</p>";

    let created = store.create("Round trip", "", content).unwrap();
    assert_eq!(created.id, 1);

    let fetched = store.get(created.id).unwrap();
    assert_eq!(fetched.id, created.id);
    assert_eq!(fetched.variables, extract_variables(content));
    assert_eq!(store.get(created.id).unwrap().id, 1);
}

#[test]
fn test_builtin_protection() {
    let mut store = TemplateStore::with_builtins();
    let before = store.list();

    for id in 1..=4 {
        assert!(matches!(
            store.delete(id),
            Err(TemplateError::ProtectedResource(_))
        ));
    }

    assert_eq!(store.list(), before);
}

#[test]
fn test_update_discards_old_variables() {
    let mut store = TemplateStore::with_builtins();
    let custom = store.create("Mine", "", "{{title}} {{sku}}").unwrap();

    let updated = store
        .update(
            custom.id,
            UpdateTemplateRequest {
                content: Some("{{inventory}} left".to_string()),
                ..Default::default()
            },
        )
        .unwrap();

    assert_eq!(updated.variables, extract_variables("{{inventory}} left"));
    assert_eq!(store.preview_variables(custom.id).unwrap(), vec!["inventory"]);
}

#[test]
fn test_builtins_render_every_catalogue_product() {
    let store = TemplateStore::with_builtins();
    let catalog = ProductCatalog::seeded().unwrap();

    for template in store.list() {
        for product in catalog.list() {
            let preview = store
                .generate_preview(template.id, Some(&product.record))
                .unwrap();

            assert!(preview.unresolved.is_empty(), "{}", template.name);
            assert!(!preview.preview.contains("{{"), "{}", template.name);
        }
    }
}

#[test]
fn test_preview_of_fixture_product() {
    let store = TemplateStore::with_builtins();
    let catalog = ProductCatalog::seeded().unwrap();
    let water_bottle = catalog.get(3).unwrap();

    let preview = store
        .generate_preview(1, Some(&water_bottle.record))
        .unwrap();

    assert!(preview.preview.contains("<h2>Stainless Steel Water Bottle</h2>"));
    assert!(preview.preview.contains("<strong>Price:</strong> $32.00"));
    assert!(preview.preview.contains("<strong>Stock:</strong> 0 units available"));
    assert!(preview.preview.contains("Last updated: Jan 12, 2024, 09:00 AM"));
}

#[test]
fn test_custom_template_with_unsupported_variable() {
    let mut store = TemplateStore::new();
    let custom = store
        .create("Typo", "", "<p>{{titel}} costs ${{price}}</p>")
        .unwrap();
    assert_eq!(custom.variables, vec!["titel", "price"]);

    let product = record(json!({"title": "Lamp", "price": 5}));
    let preview = store.generate_preview(custom.id, Some(&product)).unwrap();

    assert_eq!(preview.preview, "<p>{{titel}} costs $5.00</p>");
    assert_eq!(preview.unresolved, vec!["titel"]);
}
