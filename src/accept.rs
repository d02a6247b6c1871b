//! Acceptance collaborator
//!
//! Once built, a submission is handed to an acceptance collaborator that owns
//! its whole later lifecycle. The shipped implementation is an in-process
//! feed: it sleeps for the configured delay to mimic a round trip, then
//! either records the post or rejects it when failure injection is enabled
//! (useful for exercising the retry path end to end).

use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;
use tracing::{info, warn};

use crate::config::Config;
use crate::post::{ChallengeSubmission, SubmitError};

/// Acceptance failures reported back to the screen
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AcceptError {
    #[error("{0}")]
    Rejected(String),
}

impl From<AcceptError> for SubmitError {
    fn from(err: AcceptError) -> Self {
        SubmitError::Acceptance(err.to_string())
    }
}

/// Takes ownership of a completed submission
#[async_trait]
pub trait Acceptance: Send + Sync {
    async fn accept(&self, submission: &ChallengeSubmission) -> Result<(), AcceptError>;
}

/// In-process feed used as the default acceptance collaborator
pub struct LocalFeed {
    delay: Duration,
    always_fails: bool,
    posts: Mutex<Vec<ChallengeSubmission>>,
}

impl LocalFeed {
    pub fn new(delay: Duration, always_fails: bool) -> Self {
        Self {
            delay,
            always_fails,
            posts: Mutex::new(Vec::new()),
        }
    }

    pub fn from_config(cfg: &Config) -> Self {
        Self::new(
            Duration::from_millis(cfg.feed.accept_delay_ms),
            cfg.feed.accept_always_fails,
        )
    }

    /// Snapshot of everything accepted so far, oldest first.
    pub fn posts(&self) -> Vec<ChallengeSubmission> {
        self.posts.lock().expect("feed lock poisoned").clone()
    }

    pub fn len(&self) -> usize {
        self.posts.lock().expect("feed lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl Acceptance for LocalFeed {
    async fn accept(&self, submission: &ChallengeSubmission) -> Result<(), AcceptError> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        if self.always_fails {
            warn!(id = %submission.id, "post rejected by failure injection");
            return Err(AcceptError::Rejected(
                "feed is refusing posts (accept_always_fails is set)".to_string(),
            ));
        }

        self.posts
            .lock()
            .expect("feed lock poisoned")
            .push(submission.clone());
        info!(
            id = %submission.id,
            challenge = %submission.challenge.id,
            mode = submission.mode.label(),
            has_photo = submission.image.is_some(),
            "post accepted"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::challenge::KNOWN_CHALLENGES;
    use crate::post::{
        Author, ChallengeSubmission, ParticipationMode, SubmissionDraft, SystemStamps,
    };

    fn sample_submission() -> ChallengeSubmission {
        let draft = SubmissionDraft {
            text: "done for today".to_string(),
            image: None,
        };
        ChallengeSubmission::from_draft(
            &draft,
            &KNOWN_CHALLENGES[0],
            ParticipationMode::Individual,
            &Author::default(),
            &SystemStamps,
        )
        .unwrap()
    }

    #[tokio::test]
    async fn accepted_posts_land_in_the_feed() {
        let feed = LocalFeed::new(Duration::ZERO, false);
        let submission = sample_submission();

        feed.accept(&submission).await.unwrap();

        let posts = feed.posts();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].id, submission.id);
    }

    #[tokio::test]
    async fn failure_injection_rejects_without_recording() {
        let feed = LocalFeed::new(Duration::ZERO, true);
        let err = feed.accept(&sample_submission()).await.unwrap_err();

        assert!(matches!(err, AcceptError::Rejected(_)));
        assert!(feed.is_empty());
    }
}
