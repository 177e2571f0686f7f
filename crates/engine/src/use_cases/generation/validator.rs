//! Narrative draft validation.
//!
//! Two passes. The hard pass decides validity; its rules run in order and the
//! first failure wins. The advisory pass only reports word-count overruns and
//! never changes the verdict.

use std::fmt;

use lorecrafter_domain::{FailureKind, NarrativeDraft, ValidationOutcome, DIALOGUE_FIELDS};
use serde_json::Value;

/// Word ceilings that also count towards [`MAX_TOTAL_WORDS`].
pub const WORD_LIMITS: [(&str, usize); 7] = [
    ("hook", 25),
    ("quest_offer", 35),
    ("choice_a", 12),
    ("choice_b", 12),
    ("climax", 35),
    ("ending_good", 40),
    ("ending_bad", 40),
];

/// Word ceilings reported on their own.
pub const SOFT_WORD_LIMITS: [(&str, usize); 2] = [("challenge_intro", 20), ("epilogue", 18)];

pub const MAX_TOTAL_WORDS: usize = 200;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advisory {
    FieldTooLong {
        field: &'static str,
        words: usize,
        limit: usize,
    },
    TotalTooLong {
        words: usize,
        limit: usize,
    },
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Advisory::FieldTooLong {
                field,
                words,
                limit,
            } => write!(f, "{} exceeds {} words ({})", field, limit, words),
            Advisory::TotalTooLong { words, limit } => {
                write!(f, "Total word count exceeds {} words ({})", limit, words)
            }
        }
    }
}

/// Hard pass.
pub fn validate(draft: &NarrativeDraft) -> ValidationOutcome {
    if let Some(message) = draft.rejection() {
        return ValidationOutcome::invalid(FailureKind::Rejected, message);
    }

    if !draft.missing_required_fields().is_empty() {
        return ValidationOutcome::invalid(FailureKind::Schema, "missing required keys");
    }

    if !draft.has_npc_structure() {
        return ValidationOutcome::invalid(FailureKind::Schema, "invalid NPC structure");
    }

    for field in DIALOGUE_FIELDS {
        let acceptable = match draft.get(field) {
            Some(Value::String(text)) => text.is_empty() || text.contains(['"', '\'']),
            // null, numbers and nested shapes carry no dialogue at all
            _ => false,
        };
        if !acceptable {
            return ValidationOutcome::invalid(
                FailureKind::Guardrail,
                format!("{} missing quotation marks for dialogue", field),
            );
        }
    }

    ValidationOutcome::valid()
}

/// Advisory pass.
pub fn advisories(draft: &NarrativeDraft) -> Vec<Advisory> {
    let mut found = Vec::new();
    let mut total = 0;

    for (field, limit) in WORD_LIMITS {
        let words = word_count(draft, field);
        total += words;
        if words > limit {
            found.push(Advisory::FieldTooLong {
                field,
                words,
                limit,
            });
        }
    }

    for (field, limit) in SOFT_WORD_LIMITS {
        let words = word_count(draft, field);
        if words > limit {
            found.push(Advisory::FieldTooLong {
                field,
                words,
                limit,
            });
        }
    }

    if total > MAX_TOTAL_WORDS {
        found.push(Advisory::TotalTooLong {
            words: total,
            limit: MAX_TOTAL_WORDS,
        });
    }

    found
}

fn word_count(draft: &NarrativeDraft, field: &str) -> usize {
    draft.text_or_empty(field).split_whitespace().count()
}
