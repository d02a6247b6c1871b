//! Challenge post submission
//!
//! `SubmissionDraft` is the transient state owned by the open compose screen;
//! `ChallengeSubmission` is the immutable record handed to the acceptance
//! collaborator. Building validates first: an empty draft is rejected before
//! any id or timestamp is allocated.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::challenge::ChallengeCard;

/// Whether a post represents an individual or a team entry
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParticipationMode {
    #[default]
    Individual,
    Team,
}

impl ParticipationMode {
    pub fn label(self) -> &'static str {
        match self {
            ParticipationMode::Individual => "Individual",
            ParticipationMode::Team => "Team",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ParticipationMode::Individual => ParticipationMode::Team,
            ParticipationMode::Team => ParticipationMode::Individual,
        }
    }
}

/// Mutable in-memory draft while the compose screen is open
#[derive(Debug, Clone, Default)]
pub struct SubmissionDraft {
    /// Free text, edited live
    pub text: String,
    /// Opaque image reference (URI), set by the photo picker
    pub image: Option<String>,
}

impl SubmissionDraft {
    /// True when neither trimmed text nor an image is present
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty() && self.image.is_none()
    }
}

/// Fixed author descriptor (no authentication in scope)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub name: String,
    pub avatar: String,
    pub handle: String,
}

impl Default for Author {
    fn default() -> Self {
        Self {
            name: "You".to_string(),
            avatar: "avatar://default".to_string(),
            handle: "@you".to_string(),
        }
    }
}

/// Engagement counters, all zero at creation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngagementCounts {
    pub likes: u32,
    pub comments: u32,
    pub shares: u32,
}

/// Identity of the source challenge, copied verbatim into the record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChallengeRef {
    pub id: String,
    pub title: String,
    pub icon: String,
}

impl From<&ChallengeCard> for ChallengeRef {
    fn from(card: &ChallengeCard) -> Self {
        Self {
            id: card.id.to_string(),
            title: card.title.to_string(),
            icon: card.icon.to_string(),
        }
    }
}

/// Submission failures surfaced to the user
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    /// Draft has neither text nor image.
    #[error("add a note or a photo before submitting")]
    EmptySubmission,

    /// Photo library access was refused.
    #[error("photo library access was denied")]
    PermissionDenied,

    /// The acceptance collaborator reported failure.
    #[error("post was not accepted: {0}")]
    Acceptance(String),
}

/// Injectable id/time source so tests can assert deterministic output.
pub trait StampSource {
    fn next_id(&self) -> Uuid;
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock stamps used outside of tests
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemStamps;

impl StampSource for SystemStamps {
    fn next_id(&self) -> Uuid {
        Uuid::new_v4()
    }

    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A completed challenge post, immutable once built
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChallengeSubmission {
    /// Submission ID
    pub id: Uuid,
    /// Source challenge identity
    pub challenge: ChallengeRef,
    /// Trimmed post text (may be empty when an image is attached)
    pub text: String,
    /// Attached image reference, if any
    pub image: Option<String>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Author descriptor
    pub author: Author,
    /// Likes/comments/shares, zero at creation
    pub engagement: EngagementCounts,
    /// Individual or team entry
    pub mode: ParticipationMode,
}

impl ChallengeSubmission {
    /// Build a submission from the current draft.
    ///
    /// The emptiness check runs before `stamps` is consulted, so a rejected
    /// draft never allocates an id or timestamp.
    pub fn from_draft(
        draft: &SubmissionDraft,
        card: &ChallengeCard,
        mode: ParticipationMode,
        author: &Author,
        stamps: &dyn StampSource,
    ) -> Result<Self, SubmitError> {
        if draft.is_empty() {
            return Err(SubmitError::EmptySubmission);
        }

        Ok(ChallengeSubmission {
            id: stamps.next_id(),
            challenge: ChallengeRef::from(card),
            text: draft.text.trim().to_string(),
            image: draft.image.clone(),
            created_at: stamps.now(),
            author: author.clone(),
            engagement: EngagementCounts::default(),
            mode,
        })
    }

    /// Display submission details
    pub fn display(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "  Challenge: {} {}\n",
            self.challenge.icon, self.challenge.title
        ));
        output.push_str(&format!("  Mode: {}\n", self.mode.label()));
        output.push_str(&format!("  Author: {} ({})\n", self.author.name, self.author.handle));

        if !self.text.is_empty() {
            output.push_str(&format!("  Text: {}\n", self.text));
        }
        if let Some(ref image) = self.image {
            output.push_str(&format!("  Photo: {}\n", image));
        }

        output.push_str(&format!(
            "  Created: {}\n",
            self.created_at.format("%Y-%m-%d %H:%M:%S UTC")
        ));

        output
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use chrono::TimeZone;

    use super::*;
    use crate::challenge::KNOWN_CHALLENGES;

    /// Fixed stamps that also count how often they were consulted.
    struct CountingStamps {
        calls: Cell<u32>,
    }

    impl CountingStamps {
        fn new() -> Self {
            Self { calls: Cell::new(0) }
        }
    }

    impl StampSource for CountingStamps {
        fn next_id(&self) -> Uuid {
            self.calls.set(self.calls.get() + 1);
            Uuid::from_u128(0xfeed_beef)
        }

        fn now(&self) -> DateTime<Utc> {
            self.calls.set(self.calls.get() + 1);
            Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
        }
    }

    fn card() -> &'static ChallengeCard {
        &KNOWN_CHALLENGES[0]
    }

    #[test]
    fn rejects_empty_draft_without_allocating_stamps() {
        let stamps = CountingStamps::new();
        let draft = SubmissionDraft::default();

        let err = ChallengeSubmission::from_draft(
            &draft,
            card(),
            ParticipationMode::Individual,
            &Author::default(),
            &stamps,
        )
        .unwrap_err();

        assert_eq!(err, SubmitError::EmptySubmission);
        assert_eq!(stamps.calls.get(), 0);
    }

    #[test]
    fn rejects_whitespace_only_text_without_image() {
        let draft = SubmissionDraft {
            text: "   \n\t  ".to_string(),
            image: None,
        };
        let err = ChallengeSubmission::from_draft(
            &draft,
            card(),
            ParticipationMode::Team,
            &Author::default(),
            &CountingStamps::new(),
        )
        .unwrap_err();
        assert_eq!(err, SubmitError::EmptySubmission);
    }

    #[test]
    fn accepts_image_only_draft() {
        let draft = SubmissionDraft {
            text: String::new(),
            image: Some("file:///photos/sunrise.jpg".to_string()),
        };
        let submission = ChallengeSubmission::from_draft(
            &draft,
            card(),
            ParticipationMode::Individual,
            &Author::default(),
            &CountingStamps::new(),
        )
        .unwrap();

        assert!(submission.text.is_empty());
        assert_eq!(
            submission.image.as_deref(),
            Some("file:///photos/sunrise.jpg")
        );
    }

    #[test]
    fn accepts_text_only_draft_and_trims() {
        let draft = SubmissionDraft {
            text: "  made it through day three  ".to_string(),
            image: None,
        };
        let submission = ChallengeSubmission::from_draft(
            &draft,
            card(),
            ParticipationMode::Individual,
            &Author::default(),
            &CountingStamps::new(),
        )
        .unwrap();

        assert_eq!(submission.text, "made it through day three");
        assert!(submission.image.is_none());
    }

    #[test]
    fn counters_start_at_zero_and_mode_passes_through() {
        for mode in [ParticipationMode::Individual, ParticipationMode::Team] {
            let draft = SubmissionDraft {
                text: "check-in".to_string(),
                image: None,
            };
            let submission = ChallengeSubmission::from_draft(
                &draft,
                card(),
                mode,
                &Author::default(),
                &CountingStamps::new(),
            )
            .unwrap();

            assert_eq!(submission.engagement, EngagementCounts::default());
            assert_eq!(submission.mode, mode);
        }
    }

    #[test]
    fn challenge_identity_is_copied_verbatim() {
        let draft = SubmissionDraft {
            text: "done".to_string(),
            image: None,
        };
        let submission = ChallengeSubmission::from_draft(
            &draft,
            card(),
            ParticipationMode::Individual,
            &Author::default(),
            &CountingStamps::new(),
        )
        .unwrap();

        assert_eq!(submission.challenge.id, card().id);
        assert_eq!(submission.challenge.title, card().title);
        assert_eq!(submission.challenge.icon, card().icon);
    }

    #[test]
    fn injected_stamps_make_output_deterministic() {
        let draft = SubmissionDraft {
            text: "day one".to_string(),
            image: None,
        };
        let submission = ChallengeSubmission::from_draft(
            &draft,
            card(),
            ParticipationMode::Individual,
            &Author::default(),
            &CountingStamps::new(),
        )
        .unwrap();

        assert_eq!(submission.id, Uuid::from_u128(0xfeed_beef));
        assert_eq!(
            submission.created_at,
            Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
        );
    }

    #[test]
    fn mode_toggles_round_trip() {
        assert_eq!(
            ParticipationMode::Individual.toggled(),
            ParticipationMode::Team
        );
        assert_eq!(
            ParticipationMode::Team.toggled().toggled(),
            ParticipationMode::Team
        );
    }
}
