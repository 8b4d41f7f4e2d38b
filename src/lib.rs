pub mod app;
pub mod errors;
pub mod handlers;
pub mod metrics;
pub mod models;
pub mod storage;
pub mod ui;
pub mod state;

pub use app::router;
pub use state::AppState;
pub use storage::{load_records, resolve_data_path};
