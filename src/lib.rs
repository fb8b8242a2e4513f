// Infrastructure layer (shared components)
pub mod infrastructure;

// Re-export infrastructure modules at the crate root
pub use infrastructure::config;
pub use infrastructure::error;

// Domain layer (business logic)
pub mod product;
pub mod template;

// Application layer
pub mod api;
pub mod server;
