mod app;
mod middleware;
mod state;

pub use app::create_app;
pub use middleware::{latency_delay, simulated_latency};
pub use state::AppState;
