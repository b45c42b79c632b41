mod schema;

pub use schema::{Config, ServerConfig};
