//! Gateway configuration.

use std::env;

use common::ServiceConfig;

/// Gateway configuration.
#[derive(Debug, Clone, Default)]
pub struct GatewayConfig {
    /// Bind address, service name and default log filter
    pub service: ServiceConfig,
}

impl GatewayConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let defaults = ServiceConfig::default();
        Self {
            service: ServiceConfig {
                service_name: defaults.service_name,
                host: env::var("FILMORATE_HOST").unwrap_or(defaults.host),
                port: env::var("FILMORATE_PORT")
                    .ok()
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(defaults.port),
                log_level: env::var("FILMORATE_LOG").unwrap_or(defaults.log_level),
            },
        }
    }

    /// Override host and port from command-line arguments.
    pub fn with_bind(mut self, host: Option<String>, port: Option<u16>) -> Self {
        if let Some(host) = host {
            self.service.host = host;
        }
        if let Some(port) = port {
            self.service.port = port;
        }
        self
    }
}
