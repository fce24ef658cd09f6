//! The `GET /status` probe.
//!
//! The probe answers `{"success": true}` while the server accepts traffic.
//! Once shutdown begins it flips to `{"success": false}` with status 503 so
//! load balancers stop routing new requests.
//!
//! ```rust
//! use calculator_server::health::StatusCheck;
//!
//! let check = StatusCheck::new();
//! assert!(check.status().success);
//!
//! check.set_ready(false);
//! assert!(!check.status().success);
//! ```

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Body of the status probe.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatusResponse {
    /// Whether the service is accepting traffic.
    pub success: bool,
}

/// Tracks whether the server is accepting traffic.
#[derive(Debug, Clone)]
pub struct StatusCheck {
    ready: Arc<AtomicBool>,
}

impl StatusCheck {
    /// Creates a check that starts out ready.
    #[must_use]
    pub fn new() -> Self {
        Self {
            ready: Arc::new(AtomicBool::new(true)),
        }
    }

    /// Marks the server ready or draining.
    pub fn set_ready(&self, ready: bool) {
        self.ready.store(ready, Ordering::SeqCst);
    }

    /// Returns the current probe body.
    #[must_use]
    pub fn status(&self) -> StatusResponse {
        StatusResponse {
            success: self.ready.load(Ordering::SeqCst),
        }
    }
}

impl Default for StatusCheck {
    fn default() -> Self {
        Self::new()
    }
}
