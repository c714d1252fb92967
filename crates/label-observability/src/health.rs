//! Health report: which embedding provider serves the classifier and what
//! degradations it took to get there.

use chrono::{DateTime, Utc};
use label_core::models::DegradationEvent;
use serde::{Deserialize, Serialize};

/// Overall tagging health.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthStatus {
    /// Classifier running on the primary provider.
    Healthy,
    /// Classifier running on a fallback provider.
    Degraded,
    /// No classifier; only the rule engine is labeling.
    RulesOnly,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthReport {
    pub status: HealthStatus,
    pub embedding_provider: Option<String>,
    pub degradations: Vec<DegradationEvent>,
    pub generated_at: DateTime<Utc>,
}

impl HealthReport {
    pub fn new(embedding_provider: Option<&str>, degradations: &[DegradationEvent]) -> Self {
        let status = match embedding_provider {
            None => HealthStatus::RulesOnly,
            Some(_) if !degradations.is_empty() => HealthStatus::Degraded,
            Some(_) => HealthStatus::Healthy,
        };
        Self {
            status,
            embedding_provider: embedding_provider.map(str::to_string),
            degradations: degradations.to_vec(),
            generated_at: Utc::now(),
        }
    }

    pub fn is_healthy(&self) -> bool {
        self.status == HealthStatus::Healthy
    }
}
