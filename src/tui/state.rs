//! TUI application state types.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use crate::accept::LocalFeed;
use crate::challenge::{ChallengeCard, KNOWN_CHALLENGES};
use crate::config::Config;
use crate::media::LibraryPicker;
use crate::post::{
    resolve_theme, Author, ChallengeSubmission, ComposeFlow, ComposePhase, ParticipationMode,
    PostTheme, SubmissionDraft,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Screen {
    Home,
    Compose,
    Result,
    ErrorModal,
}

/// State of one open compose screen
pub(crate) struct ComposeScreen {
    pub card: &'static ChallengeCard,
    pub theme: &'static PostTheme,
    pub draft: SubmissionDraft,
    pub mode: ParticipationMode,
    pub flow: ComposeFlow,
    pub picker: Option<PickerState>,
}

impl ComposeScreen {
    pub fn open(card: &'static ChallengeCard) -> Self {
        Self {
            card,
            theme: resolve_theme(card.title),
            draft: SubmissionDraft::default(),
            mode: ParticipationMode::Individual,
            flow: ComposeFlow::new(),
            picker: None,
        }
    }

    pub fn tip(&self) -> &'static str {
        match self.mode {
            ParticipationMode::Individual => self.theme.copy.individual_tip,
            ParticipationMode::Team => self.theme.copy.team_tip,
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.flow.phase() == ComposePhase::Submitting
    }
}

/// Photo picker overlay state
#[derive(Debug, Clone)]
pub(crate) struct PickerState {
    pub photos: Vec<PathBuf>,
    pub cursor: usize,
}

impl PickerState {
    pub fn new(photos: Vec<PathBuf>) -> Self {
        Self { photos, cursor: 0 }
    }

    pub fn selected(&self) -> Option<&PathBuf> {
        self.photos.get(self.cursor)
    }
}

#[derive(Debug, Clone)]
pub(crate) struct ResultState {
    pub title: String,
    pub body: String,
}

#[derive(Debug, Clone)]
pub(crate) struct ErrorModalState {
    pub title: String,
    pub message: String,
}

/// Deferred work picked up by the event loop after the next draw, so the
/// Submitting frame is on screen before the loop blocks on acceptance.
#[derive(Debug)]
pub(crate) enum Action {
    SubmitPost(ChallengeSubmission),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TuiExit {
    Quit,
}

pub(crate) struct AnimationState {
    pub tick: u64,
}

impl AnimationState {
    pub fn new() -> Self {
        Self { tick: 0 }
    }

    pub fn advance(&mut self) {
        self.tick = self.tick.wrapping_add(1);
    }

    pub fn spinner_char(&self) -> char {
        const FRAMES: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];
        FRAMES[(self.tick as usize / 6) % FRAMES.len()]
    }
}

pub(crate) struct App {
    pub screen: Screen,
    pub home_cursor: usize,
    pub compose: Option<ComposeScreen>,
    pub result: Option<ResultState>,
    pub error_modal: Option<ErrorModalState>,
    pub error_return_screen: Screen,
    pub pending_action: Option<Action>,
    pub exit: Option<TuiExit>,
    pub last_tick: Instant,
    pub animation: AnimationState,
    pub feed: Arc<LocalFeed>,
    pub picker_backend: LibraryPicker,
    pub author: Author,
}

impl App {
    pub fn new(cfg: &Config) -> Self {
        Self {
            screen: Screen::Home,
            home_cursor: 0,
            compose: None,
            result: None,
            error_modal: None,
            error_return_screen: Screen::Home,
            pending_action: None,
            exit: None,
            last_tick: Instant::now(),
            animation: AnimationState::new(),
            feed: Arc::new(LocalFeed::from_config(cfg)),
            picker_backend: LibraryPicker::from_config(cfg),
            author: cfg.author(),
        }
    }

    pub fn selected_card(&self) -> &'static ChallengeCard {
        &KNOWN_CHALLENGES[self.home_cursor.min(KNOWN_CHALLENGES.len() - 1)]
    }

    pub fn set_error(&mut self, title: impl Into<String>, message: impl Into<String>) {
        self.error_return_screen = self.screen;
        self.error_modal = Some(ErrorModalState {
            title: title.into(),
            message: message.into(),
        });
        self.screen = Screen::ErrorModal;
    }
}
