pub mod app;
pub mod controller;
pub mod data;
pub mod errors;
pub mod filter;
pub mod handlers;
pub mod models;
pub mod state;
pub mod storage;
pub mod surface;
pub mod ui;

pub use app::router;
pub use data::Dataset;
pub use state::AppState;
pub use storage::{load_dataset, resolve_data_path};
