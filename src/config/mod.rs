pub mod schema;

pub use schema::{Config, LocationConfig, ProvidersConfig};
