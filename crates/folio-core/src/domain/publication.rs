use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// Review workflow status of a publication.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PublicationStatus {
    Draft,
    UnderReview,
    NeedsRevision,
    Published,
    Archived,
}

impl PublicationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PublicationStatus::Draft => "draft",
            PublicationStatus::UnderReview => "under_review",
            PublicationStatus::NeedsRevision => "needs_revision",
            PublicationStatus::Published => "published",
            PublicationStatus::Archived => "archived",
        }
    }

    /// Allowed workflow transitions.
    ///
    /// draft -> under_review
    /// under_review -> published | needs_revision | archived
    /// needs_revision -> under_review
    /// published -> archived
    pub fn can_transition_to(&self, next: PublicationStatus) -> bool {
        use PublicationStatus::*;
        matches!(
            (self, next),
            (Draft, UnderReview)
                | (UnderReview, Published)
                | (UnderReview, NeedsRevision)
                | (UnderReview, Archived)
                | (NeedsRevision, UnderReview)
                | (Published, Archived)
        )
    }

    /// Validate a transition, surfacing a domain error on violation.
    pub fn transition_to(&self, next: PublicationStatus) -> Result<PublicationStatus, DomainError> {
        if self.can_transition_to(next) {
            Ok(next)
        } else {
            Err(DomainError::InvalidTransition {
                from: self.as_str(),
                to: next.as_str(),
            })
        }
    }

    /// Statuses in which the owner may still edit the record.
    pub fn is_editable_by_owner(&self) -> bool {
        matches!(
            self,
            PublicationStatus::Draft | PublicationStatus::NeedsRevision
        )
    }
}

impl fmt::Display for PublicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PublicationStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draft" => Ok(PublicationStatus::Draft),
            "under_review" => Ok(PublicationStatus::UnderReview),
            "needs_revision" => Ok(PublicationStatus::NeedsRevision),
            "published" => Ok(PublicationStatus::Published),
            "archived" => Ok(PublicationStatus::Archived),
            other => Err(format!("unknown publication status: {other}")),
        }
    }
}

/// Publication entity.
///
/// `version` counts successful edit saves; every edit-log row produced by
/// one save carries the same version number.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Publication {
    pub id: i32,
    pub owner_id: i32,
    pub title: String,
    pub abstract_text: String,
    pub category_id: Option<i32>,
    pub venue_id: Option<i32>,
    pub year: Option<i32>,
    pub status: PublicationStatus,
    pub version: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Publication {
    /// Create a new draft. The id is assigned on insert.
    pub fn new_draft(owner_id: i32, title: String) -> Self {
        let now = Utc::now();
        Self {
            id: 0,
            owner_id,
            title,
            abstract_text: String::new(),
            category_id: None,
            venue_id: None,
            year: None,
            status: PublicationStatus::Draft,
            version: 0,
            created_at: now,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draft_can_only_be_submitted() {
        let draft = PublicationStatus::Draft;
        assert!(draft.can_transition_to(PublicationStatus::UnderReview));
        assert!(!draft.can_transition_to(PublicationStatus::Published));
        assert!(!draft.can_transition_to(PublicationStatus::Archived));
    }

    #[test]
    fn review_outcomes() {
        let reviewing = PublicationStatus::UnderReview;
        assert!(reviewing.can_transition_to(PublicationStatus::Published));
        assert!(reviewing.can_transition_to(PublicationStatus::NeedsRevision));
        assert!(reviewing.can_transition_to(PublicationStatus::Archived));
        assert!(!reviewing.can_transition_to(PublicationStatus::Draft));
    }

    #[test]
    fn revision_goes_back_to_review() {
        assert!(
            PublicationStatus::NeedsRevision.can_transition_to(PublicationStatus::UnderReview)
        );
        assert!(!PublicationStatus::NeedsRevision.can_transition_to(PublicationStatus::Published));
    }

    #[test]
    fn published_can_only_be_archived() {
        assert!(PublicationStatus::Published.can_transition_to(PublicationStatus::Archived));
        assert!(!PublicationStatus::Published.can_transition_to(PublicationStatus::UnderReview));
    }

    #[test]
    fn archived_is_terminal() {
        for next in [
            PublicationStatus::Draft,
            PublicationStatus::UnderReview,
            PublicationStatus::NeedsRevision,
            PublicationStatus::Published,
        ] {
            assert!(!PublicationStatus::Archived.can_transition_to(next));
        }
    }

    #[test]
    fn invalid_transition_reports_both_ends() {
        let err = PublicationStatus::Draft
            .transition_to(PublicationStatus::Published)
            .unwrap_err();
        assert!(err.to_string().contains("draft"));
        assert!(err.to_string().contains("published"));
    }

    #[test]
    fn owner_edit_window() {
        assert!(PublicationStatus::Draft.is_editable_by_owner());
        assert!(PublicationStatus::NeedsRevision.is_editable_by_owner());
        assert!(!PublicationStatus::UnderReview.is_editable_by_owner());
        assert!(!PublicationStatus::Published.is_editable_by_owner());
    }

    #[test]
    fn status_round_trips_through_str() {
        for status in [
            PublicationStatus::Draft,
            PublicationStatus::UnderReview,
            PublicationStatus::NeedsRevision,
            PublicationStatus::Published,
            PublicationStatus::Archived,
        ] {
            assert_eq!(
                status.as_str().parse::<PublicationStatus>().unwrap(),
                status
            );
        }
    }
}
