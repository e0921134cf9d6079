pub mod bootstrap;
pub mod config;

pub use bootstrap::{ChatFeature, DisabledReason};
pub use config::AppConfig;
