pub mod aggregate;
pub mod app;
pub mod chart;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod pages;
pub mod scale;
pub mod series;
pub mod state;
pub mod storage;
pub mod ui;

pub use app::router;
pub use chart::TrendChart;
pub use state::AppState;
pub use storage::{load_records, load_template, resolve_csv_path, resolve_template_path};
