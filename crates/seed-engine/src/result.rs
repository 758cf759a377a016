//! Per-model outcome of a seeding run.

use std::fmt;
use std::time::Duration;

/// Outcome of seeding one model.
#[derive(Debug, Clone, PartialEq)]
pub struct SeedResult {
    /// Model name.
    pub model: String,
    /// Number of records inserted.
    pub count: u64,
    /// Whether seeding completed without error.
    pub success: bool,
    /// Error message when `success` is false.
    pub error: Option<String>,
    /// Wall-clock time spent on the model.
    pub duration: Duration,
}

impl SeedResult {
    pub fn succeeded(model: impl Into<String>, count: u64, duration: Duration) -> Self {
        Self {
            model: model.into(),
            count,
            success: true,
            error: None,
            duration,
        }
    }

    pub fn failed(model: impl Into<String>, error: impl Into<String>, duration: Duration) -> Self {
        Self {
            model: model.into(),
            count: 0,
            success: false,
            error: Some(error.into()),
            duration,
        }
    }

    /// Calculate records per second.
    pub fn records_per_second(&self) -> f64 {
        if self.duration.as_secs_f64() > 0.0 {
            self.count as f64 / self.duration.as_secs_f64()
        } else {
            0.0
        }
    }
}

impl fmt::Display for SeedResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.error {
            None => write!(
                f,
                "{}: {} records in {:.2?}",
                self.model, self.count, self.duration
            ),
            Some(error) => write!(f, "{}: FAILED ({})", self.model, error),
        }
    }
}
