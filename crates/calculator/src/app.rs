//! Service assembly.

use std::time::Duration;

use calculator_config::CalculatorConfig;
use calculator_server::{Server, ServerConfig};

use crate::api;

/// Builds the calculator server with both API versions mounted.
///
/// The returned server is not bound yet; call [`Server::run`] to serve it.
///
/// # Example
///
/// ```
/// use calculator::create_app;
/// use calculator_config::CalculatorConfig;
///
/// let server = create_app(&CalculatorConfig::default());
/// assert!(server.router().has_operation("v2_calculate"));
/// ```
#[must_use]
pub fn create_app(config: &CalculatorConfig) -> Server {
    let server_config = ServerConfig::builder()
        .http_addr(config.server.http_addr.clone())
        .shutdown_timeout(Duration::from_secs(config.server.shutdown_timeout_secs))
        .request_timeout(Duration::from_millis(config.server.request_timeout_ms))
        .max_body_bytes(config.server.max_body_bytes)
        .service_name(config.server.service_name.clone())
        .build();

    let mut server = Server::new(server_config);
    api::mount(&mut server);

    tracing::debug!(
        routes = server.router().route_count(),
        handlers = server.handlers().len(),
        "calculator app assembled"
    );
    server
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_app_maps_config() {
        let mut config = CalculatorConfig::default();
        config.server.http_addr = "127.0.0.1:5055".to_string();
        config.server.request_timeout_ms = 250;
        config.server.shutdown_timeout_secs = 3;
        config.server.max_body_bytes = 2048;

        let server = create_app(&config);

        assert_eq!(server.config().http_addr(), "127.0.0.1:5055");
        assert_eq!(server.config().request_timeout(), Duration::from_millis(250));
        assert_eq!(server.config().shutdown_timeout(), Duration::from_secs(3));
        assert_eq!(server.config().max_body_bytes(), 2048);
        assert_eq!(server.config().service_name(), "calculator");
    }

    #[test]
    fn test_create_app_mounts_both_versions() {
        let server = create_app(&CalculatorConfig::default());

        assert_eq!(server.router().route_count(), 5);
        assert_eq!(server.handlers().len(), 5);
        for op in ["v1_addition", "v1_subtraction", "v1_multiplication", "v1_division", "v2_calculate"] {
            assert!(server.router().has_operation(op), "{op} not routed");
            assert!(server.handlers().contains(op), "{op} not handled");
        }
    }
}
