//! Health checks
//!
//! Liveness only says the process answers. Readiness probes the project
//! store and caches the result briefly.

use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use ip_api::repository::ProjectRepository;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Unhealthy,
}

#[derive(Debug, Clone, Serialize)]
pub struct ComponentHealth {
    pub name: String,
    pub status: HealthStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub response_time_ms: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthReport {
    pub status: HealthStatus,
    pub version: String,
    pub uptime_seconds: u64,
    pub components: Vec<ComponentHealth>,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

impl HealthReport {
    pub fn http_status(&self) -> StatusCode {
        match self.status {
            HealthStatus::Healthy => StatusCode::OK,
            HealthStatus::Unhealthy => StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}

#[derive(Debug, Clone)]
pub struct HealthConfig {
    /// Timeout for the store probe
    pub check_timeout: Duration,
    /// How long a report is reused
    pub cache_duration: Duration,
}

impl Default for HealthConfig {
    fn default() -> Self {
        Self {
            check_timeout: Duration::from_secs(5),
            cache_duration: Duration::from_secs(10),
        }
    }
}

struct CachedHealth {
    report: HealthReport,
    cached_at: Instant,
}

pub struct HealthChecker {
    config: HealthConfig,
    start_time: Instant,
    cache: RwLock<Option<CachedHealth>>,
    repo: Arc<dyn ProjectRepository>,
}

impl HealthChecker {
    pub fn new(config: HealthConfig, repo: Arc<dyn ProjectRepository>) -> Self {
        Self {
            config,
            start_time: Instant::now(),
            cache: RwLock::new(None),
            repo,
        }
    }

    /// Cached report, or a fresh one once the cache has expired
    pub async fn check(&self) -> HealthReport {
        {
            let cache = self.cache.read().await;
            if let Some(ref cached) = *cache {
                if cached.cached_at.elapsed() < self.config.cache_duration {
                    debug!("Returning cached health report");
                    return cached.report.clone();
                }
            }
        }

        let report = self.perform_checks().await;
        *self.cache.write().await = Some(CachedHealth {
            report: report.clone(),
            cached_at: Instant::now(),
        });
        report
    }

    async fn perform_checks(&self) -> HealthReport {
        let store = self.check_store().await;

        HealthReport {
            status: store.status,
            version: env!("CARGO_PKG_VERSION").to_string(),
            uptime_seconds: self.start_time.elapsed().as_secs(),
            components: vec![store],
            timestamp: chrono::Utc::now(),
        }
    }

    async fn check_store(&self) -> ComponentHealth {
        let start = Instant::now();
        let probe = tokio::time::timeout(self.config.check_timeout, self.repo.count()).await;

        let (status, message, details) = match probe {
            Ok(Ok(count)) => (
                HealthStatus::Healthy,
                "Project store reachable".to_string(),
                Some(serde_json::json!({ "projects": count })),
            ),
            Ok(Err(e)) => {
                warn!(error = %e, "Project store check failed");
                (HealthStatus::Unhealthy, e.to_string(), None)
            }
            Err(_) => {
                warn!(timeout = ?self.config.check_timeout, "Project store check timed out");
                (HealthStatus::Unhealthy, "timed out".to_string(), None)
            }
        };

        ComponentHealth {
            name: "project_store".to_string(),
            status,
            message: Some(message),
            response_time_ms: start.elapsed().as_millis() as u64,
            details,
        }
    }
}

pub struct HealthState {
    pub health: HealthChecker,
}

/// Liveness probe
pub async fn liveness() -> &'static str {
    "OK"
}

/// Readiness probe; 503 when the store cannot be reached
pub async fn readiness(State(state): State<Arc<HealthState>>) -> (StatusCode, Json<HealthReport>) {
    let report = state.health.check().await;
    (report.http_status(), Json(report))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ip_api::repository::InMemoryProjectRepository;

    #[tokio::test]
    async fn test_store_counts_projects() {
        let repo = Arc::new(InMemoryProjectRepository::new());
        repo.create().await.unwrap();
        let checker = HealthChecker::new(HealthConfig::default(), repo);

        let report = checker.check().await;
        assert_eq!(report.status, HealthStatus::Healthy);
        assert_eq!(report.components[0].name, "project_store");
        assert_eq!(
            report.components[0].details,
            Some(serde_json::json!({ "projects": 1 }))
        );
    }

    #[tokio::test]
    async fn test_health_cache() {
        let repo = Arc::new(InMemoryProjectRepository::new());
        let checker = HealthChecker::new(
            HealthConfig {
                cache_duration: Duration::from_secs(60),
                ..Default::default()
            },
            repo.clone(),
        );

        let first = checker.check().await;
        repo.create().await.unwrap();
        let second = checker.check().await;

        assert_eq!(first.timestamp, second.timestamp);
        assert_eq!(second.components[0].details, Some(serde_json::json!({ "projects": 0 })));
    }

    #[test]
    fn test_unhealthy_is_unavailable() {
        let report = HealthReport {
            status: HealthStatus::Unhealthy,
            version: "0.1.0".to_string(),
            uptime_seconds: 1,
            components: vec![],
            timestamp: chrono::Utc::now(),
        };
        assert_eq!(report.http_status(), StatusCode::SERVICE_UNAVAILABLE);
    }
}
