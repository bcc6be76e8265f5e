//! Configuration loading and validation.
//!
//! Settings live in a TOML file under the platform config dir. A missing
//! file is not an error; defaults point at a local development backend.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{ApiConfig, Config, SessionConfig};
