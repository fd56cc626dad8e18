//! Configuration: defaults, validation, loading from environment + arguments.

pub mod app_config;
pub mod defaults;
pub mod validation;

pub use app_config::AppConfig;
