//! Result types for the password reset orchestrator

use serde::{Deserialize, Serialize};

/// The four independent reset strategies, in escalation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyKind {
    /// Administrative set-password call
    Direct,
    /// Session invalidation, settle pause, recovery link, then set-password
    SessionReset,
    /// Metadata marker write; soft success only
    MetadataTouch,
    /// Global sign-out, settle pause, email reset, forced set-password
    Force,
}

impl StrategyKind {
    /// Stable wire name of the strategy
    pub fn as_str(&self) -> &'static str {
        match self {
            StrategyKind::Direct => "direct",
            StrategyKind::SessionReset => "session_reset",
            StrategyKind::MetadataTouch => "metadata_touch",
            StrategyKind::Force => "force",
        }
    }

    /// Whether a success here changes the credential itself.
    ///
    /// The metadata touch records intent but leaves the password untouched.
    pub fn changes_credential(&self) -> bool {
        !matches!(self, StrategyKind::MetadataTouch)
    }
}

impl std::fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Outcome of one strategy attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StrategyResult {
    Success,
    Failure { reason: String },
}

impl StrategyResult {
    /// Whether the attempt succeeded
    pub fn is_success(&self) -> bool {
        matches!(self, StrategyResult::Success)
    }

    /// Build a failure from any error message
    pub fn failure(reason: impl Into<String>) -> Self {
        StrategyResult::Failure {
            reason: reason.into(),
        }
    }
}

/// Bookkeeping for one strategy within a single reset request.
///
/// Ephemeral; exists only to compute the combined outcome and the
/// diagnostics returned to the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrategyRecord {
    /// Which strategy this record tracks
    pub strategy: StrategyKind,

    /// Whether the driver ran the strategy at all
    pub attempted: bool,

    /// Whether the strategy reported success
    pub succeeded: bool,

    /// Failure reason, when there was one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl StrategyRecord {
    /// A record for a strategy that has not run yet
    pub fn pending(strategy: StrategyKind) -> Self {
        Self {
            strategy,
            attempted: false,
            succeeded: false,
            error: None,
        }
    }

    /// Fold a strategy result into this record.
    ///
    /// A later success overrides an earlier failure (the direct strategy
    /// gets a second chance before the force strategy runs).
    pub fn absorb(&mut self, result: &StrategyResult) {
        self.attempted = true;
        match result {
            StrategyResult::Success => {
                self.succeeded = true;
                self.error = None;
            }
            StrategyResult::Failure { reason } => {
                if !self.succeeded {
                    self.error = Some(reason.clone());
                }
            }
        }
    }
}

/// Combined outcome of a reset request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResetReport {
    /// A credential-changing strategy succeeded
    pub full_success: bool,

    /// Only the metadata touch succeeded
    pub partial_success: bool,

    /// Names of the strategies that succeeded, for diagnostics
    pub methods: Vec<String>,

    /// User-facing follow-up instructions
    pub instructions: Vec<String>,

    /// Per-strategy records of this request
    pub records: Vec<StrategyRecord>,
}
