//! Post composition core: themed copy, drafts, and submission building.

pub mod state;
pub mod submission;
pub mod theme;

pub use state::{ComposeFlow, ComposePhase};
pub use submission::{
    Author, ChallengeRef, ChallengeSubmission, EngagementCounts, ParticipationMode, StampSource,
    SubmissionDraft, SubmitError, SystemStamps,
};
pub use theme::{resolve as resolve_theme, PostTheme, ThemeCopy, ThemeKind};
