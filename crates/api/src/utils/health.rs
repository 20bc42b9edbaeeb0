//! Health check reporting for the service's dependencies

use serde::{Deserialize, Serialize};

/// Overall health status of the service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    /// `"ok"` when every component is healthy, `"unavailable"` otherwise
    pub status: String,

    /// Individual component health checks
    pub components: Vec<ComponentHealth>,
}

impl HealthStatus {
    /// Aggregate component checks into an overall status
    pub fn from_components(components: Vec<ComponentHealth>) -> Self {
        let status = if components.iter().all(|c| c.is_healthy) { "ok" } else { "unavailable" };
        Self { status: status.to_string(), components }
    }

    /// Whether every component reported healthy
    pub fn is_healthy(&self) -> bool {
        self.status == "ok"
    }
}

/// Health status of an individual component
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentHealth {
    /// Component identifier (e.g., "database")
    pub name: String,

    /// Whether the component is healthy
    pub is_healthy: bool,

    /// Optional message describing health state or error
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ComponentHealth {
    /// Create a healthy component status
    pub fn healthy(name: impl Into<String>) -> Self {
        Self { name: name.into(), is_healthy: true, message: None }
    }

    /// Create an unhealthy component status with a message
    pub fn unhealthy(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self { name: name.into(), is_healthy: false, message: Some(message.into()) }
    }
}
