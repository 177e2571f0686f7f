//! Result of checking one narrative draft, and which failures may still be
//! handed out once retries run dry.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::DomainError;

/// Which hard rule a draft broke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// The model refused the prompt with an `error` envelope.
    Rejected,
    /// Required keys are missing or the NPC is malformed.
    Schema,
    /// Structurally complete but a content guardrail failed.
    Guardrail,
}

/// `{ valid, reason }` for one validation call. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationOutcome {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<FailureKind>,
}

impl ValidationOutcome {
    pub fn valid() -> Self {
        Self {
            valid: true,
            reason: None,
            kind: None,
        }
    }

    pub fn invalid(kind: FailureKind, reason: impl Into<String>) -> Self {
        Self {
            valid: false,
            reason: Some(reason.into()),
            kind: Some(kind),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    pub fn reason(&self) -> Option<&str> {
        self.reason.as_deref()
    }

    pub fn is_rejection(&self) -> bool {
        self.kind == Some(FailureKind::Rejected)
    }
}

/// Which invalid drafts may be returned after the last attempt.
///
/// Rejections (`error` envelopes) are never returned under any policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FallbackPolicy {
    /// Any draft that failed a schema or guardrail rule.
    #[default]
    BestEffort,
    /// Only structurally complete drafts that failed a guardrail rule.
    SchemaOnly,
    /// Never return an invalid draft.
    Strict,
}

impl FallbackPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            FallbackPolicy::BestEffort => "best_effort",
            FallbackPolicy::SchemaOnly => "schema_only",
            FallbackPolicy::Strict => "strict",
        }
    }

    /// Whether a draft that failed with `kind` is eligible as a fallback.
    pub fn permits(&self, kind: FailureKind) -> bool {
        match (self, kind) {
            (_, FailureKind::Rejected) => false,
            (FallbackPolicy::BestEffort, _) => true,
            (FallbackPolicy::SchemaOnly, FailureKind::Guardrail) => true,
            (FallbackPolicy::SchemaOnly, FailureKind::Schema) => false,
            (FallbackPolicy::Strict, _) => false,
        }
    }
}

impl fmt::Display for FallbackPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FallbackPolicy {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "best_effort" => Ok(FallbackPolicy::BestEffort),
            "schema_only" => Ok(FallbackPolicy::SchemaOnly),
            "strict" => Ok(FallbackPolicy::Strict),
            _ => Err(DomainError::parse(format!("Unknown fallback policy: {}", s))),
        }
    }
}
