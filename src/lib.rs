pub mod app;
pub mod infra;
pub mod transport;

// Convenience re-exports (keeps call-sites clean)
pub use app::movie_store::{BindValue, MovieStore};
pub use infra::config;
