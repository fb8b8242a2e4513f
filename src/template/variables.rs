//! Catalogue of the variables templates may reference

use super::types::VariableInfo;

/// Describe every variable the resolver provides, in editor display order
pub fn available_variables() -> Vec<VariableInfo> {
    vec![
        VariableInfo {
            key: "title",
            label: "Product Title",
            description: "The name of the product",
        },
        VariableInfo {
            key: "description",
            label: "Description",
            description: "Product description",
        },
        VariableInfo {
            key: "sku",
            label: "SKU",
            description: "Stock Keeping Unit identifier",
        },
        VariableInfo {
            key: "category",
            label: "Category",
            description: "Product category",
        },
        VariableInfo {
            key: "vendor",
            label: "Vendor",
            description: "Product vendor/supplier",
        },
        VariableInfo {
            key: "price",
            label: "Price",
            description: "Product price (formatted)",
        },
        VariableInfo {
            key: "inventory",
            label: "Inventory",
            description: "Stock quantity",
        },
        VariableInfo {
            key: "lastUpdated",
            label: "Last Updated",
            description: "Last update date (formatted)",
        },
        VariableInfo {
            key: "storeId",
            label: "Store ID",
            description: "Associated store identifier",
        },
        VariableInfo {
            key: "status",
            label: "Status",
            description: "Product status",
        },
    ]
}
