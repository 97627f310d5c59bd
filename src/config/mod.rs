//! Configuration for a termbatch invocation

pub mod loader;
pub mod models;

pub use models::{AppConfig, StoreConfig};
