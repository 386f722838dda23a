pub mod app;
pub mod config;
pub mod controller;
pub mod errors;
pub mod handlers;
pub mod i18n;
pub mod lookup;
pub mod models;
pub mod render;
pub mod scan;
pub mod state;
pub mod ui;

pub use app::router;
pub use config::Config;
pub use controller::{PageController, PageState, ViewMode};
pub use lookup::{HttpLookupClient, LookupClient};
pub use state::AppState;
