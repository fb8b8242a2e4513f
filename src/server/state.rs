use std::sync::Arc;
use std::time::Instant;

use tokio::sync::RwLock;

use crate::config::Settings;
use crate::error::Result;
use crate::product::ProductCatalog;
use crate::template::TemplateStore;

#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<Settings>,
    pub templates: Arc<RwLock<TemplateStore>>,
    pub products: Arc<RwLock<ProductCatalog>>,
    pub started_at: Instant,
}

impl AppState {
    pub fn new(settings: Settings) -> Result<Self> {
        let templates = if settings.catalog.seed_templates {
            TemplateStore::with_builtins()
        } else {
            TemplateStore::new()
        };

        let products = if settings.catalog.seed_products {
            ProductCatalog::seeded()?
        } else {
            ProductCatalog::new()
        };

        tracing::debug!(
            templates = templates.count(),
            products = products.count(),
            "Stores seeded"
        );

        Ok(Self::with_stores(settings, templates, products))
    }

    pub fn with_stores(
        settings: Settings,
        templates: TemplateStore,
        products: ProductCatalog,
    ) -> Self {
        Self {
            settings: Arc::new(settings),
            templates: Arc::new(RwLock::new(templates)),
            products: Arc::new(RwLock::new(products)),
            started_at: Instant::now(),
        }
    }
}
