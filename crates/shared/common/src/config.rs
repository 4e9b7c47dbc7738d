//! Shared configuration structures.

use serde::{Deserialize, Serialize};

/// Base service configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ServiceConfig {
    /// Service name for logging and tracing
    pub service_name: String,
    /// Host address to bind
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Default log filter when `RUST_LOG` is unset
    pub log_level: String,
}

impl ServiceConfig {
    /// Socket address string in `host:port` form
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            service_name: "filmorate".to_string(),
            host: "0.0.0.0".to_string(),
            port: 8080,
            log_level: "info,tower_http=debug".to_string(),
        }
    }
}
