//! Health, status and cache diagnostic payloads

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Name reported by the health endpoint
pub const SERVICE_NAME: &str = "backend-api";

/// Reachability of a backing dependency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DependencyStatus {
    Connected,
    Disconnected,
}

impl DependencyStatus {
    pub fn from_reachable(reachable: bool) -> Self {
        if reachable {
            DependencyStatus::Connected
        } else {
            DependencyStatus::Disconnected
        }
    }
}

impl std::fmt::Display for DependencyStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DependencyStatus::Connected => write!(f, "connected"),
            DependencyStatus::Disconnected => write!(f, "disconnected"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: NaiveDateTime,
    pub service: String,
}

impl HealthResponse {
    pub fn healthy(timestamp: NaiveDateTime) -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp,
            service: SERVICE_NAME.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusResponse {
    pub api: String,
    pub redis: DependencyStatus,
    pub database: DependencyStatus,
    pub timestamp: NaiveDateTime,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheTestResponse {
    pub cache: String,
    pub test_value: Option<String>,
}
