//! Audit trail entities: login attempts, field edits, status changes,
//! review actions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::publication::PublicationStatus;
use crate::error::DomainError;

/// One login attempt, successful or not. `user_id` is unset when the
/// submitted username matched no account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginLog {
    pub id: i32,
    pub user_id: Option<i32>,
    pub username: String,
    pub success: bool,
    pub ip: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl LoginLog {
    pub fn new(user_id: Option<i32>, username: String, success: bool, ip: Option<String>) -> Self {
        Self {
            id: 0,
            user_id,
            username,
            success,
            ip,
            created_at: Utc::now(),
        }
    }
}

/// One field change within an edit save. All rows written by the same
/// save share a `version`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditRecord {
    pub id: i32,
    pub publication_id: i32,
    pub version: i32,
    pub field: String,
    pub old_value: Option<String>,
    pub new_value: Option<String>,
    pub edited_by: i32,
    pub edited_at: DateTime<Utc>,
}

impl EditRecord {
    pub fn new(
        publication_id: i32,
        version: i32,
        field: impl Into<String>,
        old_value: Option<String>,
        new_value: Option<String>,
        edited_by: i32,
    ) -> Self {
        Self {
            id: 0,
            publication_id,
            version,
            field: field.into(),
            old_value,
            new_value,
            edited_by,
            edited_at: Utc::now(),
        }
    }
}

/// A workflow status change on a publication.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusChange {
    pub id: i32,
    pub publication_id: i32,
    pub from_status: PublicationStatus,
    pub to_status: PublicationStatus,
    pub changed_by: i32,
    pub note: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl StatusChange {
    pub fn new(
        publication_id: i32,
        from_status: PublicationStatus,
        to_status: PublicationStatus,
        changed_by: i32,
        note: Option<String>,
    ) -> Self {
        Self {
            id: 0,
            publication_id,
            from_status,
            to_status,
            changed_by,
            note,
            created_at: Utc::now(),
        }
    }
}

/// Reviewer decision, mapping onto a status transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReviewDecision {
    Approve,
    RequestChanges,
    Archive,
}

impl ReviewDecision {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReviewDecision::Approve => "approve",
            ReviewDecision::RequestChanges => "request_changes",
            ReviewDecision::Archive => "archive",
        }
    }

    /// Target status this decision drives the publication to.
    pub fn target_status(&self) -> PublicationStatus {
        match self {
            ReviewDecision::Approve => PublicationStatus::Published,
            ReviewDecision::RequestChanges => PublicationStatus::NeedsRevision,
            ReviewDecision::Archive => PublicationStatus::Archived,
        }
    }
}

impl fmt::Display for ReviewDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReviewDecision {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "approve" => Ok(ReviewDecision::Approve),
            "request_changes" => Ok(ReviewDecision::RequestChanges),
            "archive" => Ok(ReviewDecision::Archive),
            unknown => Err(DomainError::Validation(format!(
                "unknown review decision: {unknown}"
            ))),
        }
    }
}

/// A recorded review action.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewAction {
    pub id: i32,
    pub publication_id: i32,
    pub reviewer_id: i32,
    pub decision: ReviewDecision,
    pub note: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl ReviewAction {
    pub fn new(
        publication_id: i32,
        reviewer_id: i32,
        decision: ReviewDecision,
        note: Option<String>,
    ) -> Self {
        Self {
            id: 0,
            publication_id,
            reviewer_id,
            decision,
            note,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decisions_map_to_statuses() {
        assert_eq!(
            ReviewDecision::Approve.target_status(),
            PublicationStatus::Published
        );
        assert_eq!(
            ReviewDecision::RequestChanges.target_status(),
            PublicationStatus::NeedsRevision
        );
        assert_eq!(
            ReviewDecision::Archive.target_status(),
            PublicationStatus::Archived
        );
    }

    #[test]
    fn decision_parsing() {
        assert_eq!(
            "request_changes".parse::<ReviewDecision>().unwrap(),
            ReviewDecision::RequestChanges
        );
        assert!("reject".parse::<ReviewDecision>().is_err());
    }
}
