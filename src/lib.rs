pub mod app;
pub mod dates;
pub mod errors;
pub mod events;
pub mod handlers;
pub mod models;
pub mod progress;
pub mod scheduler;
pub mod settings;
pub mod state;
pub mod storage;
pub mod ui;

pub use app::router;
pub use state::AppState;
pub use storage::{resolve_data_dir, LedgerStore, SettingsStore};
