mod app_context;
mod config_warnings;
mod loader;
mod source;

pub use app_context::AppContext;
pub use config_warnings::warn_unconfigured;
pub use loader::{LoadState, Loader};
pub use source::Source;
