//! Snapshot of an asynchronous backend job (extraction or scoring)

use serde::{Deserialize, Serialize};

/// Job state as reported by the backend
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProcessState {
    Idle,
    Running,
    Completed,
    Error,
    Cancelled,
    /// Any state string this dashboard does not know yet
    #[serde(untagged)]
    Other(String),
}

impl Default for ProcessState {
    fn default() -> Self {
        ProcessState::Idle
    }
}

impl ProcessState {
    pub fn as_str(&self) -> &str {
        match self {
            ProcessState::Idle => "idle",
            ProcessState::Running => "running",
            ProcessState::Completed => "completed",
            ProcessState::Error => "error",
            ProcessState::Cancelled => "cancelled",
            ProcessState::Other(s) => s,
        }
    }

    pub fn is_running(&self) -> bool {
        matches!(self, ProcessState::Running)
    }
}

/// Kind of job behind a status snapshot
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProcessKind {
    Phase1,
    Phase2,
    Tubebuddy,
    #[serde(untagged)]
    Other(String),
}

impl ProcessKind {
    pub fn label(&self) -> &str {
        match self {
            ProcessKind::Phase1 => "Phase 1 - Full extraction",
            ProcessKind::Phase2 => "Phase 2 - Weekly extraction",
            ProcessKind::Tubebuddy => "TubeBuddy scoring",
            ProcessKind::Other(s) => s,
        }
    }
}

/// Status of the current (or last) backend job
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ProcessStatus {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub process_type: Option<ProcessKind>,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub status: ProcessState,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub progress_percentage: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_step: Option<String>,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub sources_processed: u64,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub total_sources: u64,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub artists_processed: u64,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub artists_saved: u64,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub new_artists: u64,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub updated_artists: u64,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub errors_count: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub started_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_update: Option<String>,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub is_active: bool,
    /// Set only on the degraded snapshot served when the backend is unreachable
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ProcessStatus {
    /// The fixed "nothing running" snapshot
    pub fn idle() -> Self {
        Self::default()
    }

    /// Idle snapshot carrying the reason the real status was unavailable
    pub fn idle_with_error(message: impl Into<String>) -> Self {
        Self {
            error: Some(message.into()),
            ..Self::default()
        }
    }

    /// Progress clamped to 0-100 for the progress bar
    pub fn progress_clamped(&self) -> f64 {
        if self.progress_percentage.is_nan() {
            return 0.0;
        }
        self.progress_percentage.clamp(0.0, 100.0)
    }
}
