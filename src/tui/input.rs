//! TUI keyboard input handling.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::accept::Acceptance;
use crate::challenge::KNOWN_CHALLENGES;
use crate::media::{photo_uri, Permission, PhotoPicker};
use crate::post::{ChallengeSubmission, SubmitError, SystemStamps};

use super::state::*;

pub(crate) fn handle_key(
    rt: &tokio::runtime::Runtime,
    app: &mut App,
    key: KeyEvent,
) -> Result<bool> {
    if key.code == KeyCode::Char('q') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.exit = Some(TuiExit::Quit);
        return Ok(true);
    }

    match app.screen {
        Screen::Home => handle_home_key(app, key),
        Screen::Compose => handle_compose_key(rt, app, key),
        Screen::Result => handle_result_key(app, key),
        Screen::ErrorModal => handle_error_modal_key(app, key),
    }
}

fn handle_home_key(app: &mut App, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Esc => {
            app.exit = Some(TuiExit::Quit);
            return Ok(true);
        }
        KeyCode::Up => {
            if app.home_cursor == 0 {
                app.home_cursor = KNOWN_CHALLENGES.len() - 1;
            } else {
                app.home_cursor -= 1;
            }
        }
        KeyCode::Down => {
            app.home_cursor = (app.home_cursor + 1) % KNOWN_CHALLENGES.len();
        }
        KeyCode::Enter => {
            app.compose = Some(ComposeScreen::open(app.selected_card()));
            app.screen = Screen::Compose;
        }
        _ => {}
    }
    Ok(false)
}

fn handle_compose_key(
    rt: &tokio::runtime::Runtime,
    app: &mut App,
    key: KeyEvent,
) -> Result<bool> {
    let Some(compose) = app.compose.as_mut() else {
        app.screen = Screen::Home;
        return Ok(false);
    };

    // No edits while a submission is in flight.
    if compose.is_submitting() {
        return Ok(false);
    }

    if compose.picker.is_some() {
        return handle_picker_key(app, key);
    }

    match key.code {
        KeyCode::Esc => {
            if compose.flow.close() {
                app.compose = None;
                app.screen = Screen::Home;
            }
        }
        KeyCode::Tab => {
            compose.mode = compose.mode.toggled();
        }
        KeyCode::F(5) if compose.flow.can_submit() => {
            // Validate (and build) before the phase moves; a rejected draft
            // never leaves Idle.
            match ChallengeSubmission::from_draft(
                &compose.draft,
                compose.card,
                compose.mode,
                &app.author,
                &SystemStamps,
            ) {
                Ok(submission) => {
                    compose.flow.begin_submit();
                    app.pending_action = Some(Action::SubmitPost(submission));
                }
                Err(err) => {
                    app.set_error("Nothing to post", err.to_string());
                }
            }
        }
        KeyCode::Char('p') | KeyCode::Char('P')
            if key.modifiers.contains(KeyModifiers::CONTROL) =>
        {
            open_photo_picker(rt, app);
        }
        KeyCode::Char('x') | KeyCode::Char('X')
            if key.modifiers.contains(KeyModifiers::CONTROL) =>
        {
            compose.draft.image = None;
        }
        KeyCode::Backspace => {
            compose.draft.text.pop();
        }
        KeyCode::Enter => {
            compose.draft.text.push('\n');
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            compose.draft.text.push(c);
        }
        _ => {}
    }
    Ok(false)
}

fn open_photo_picker(rt: &tokio::runtime::Runtime, app: &mut App) {
    match rt.block_on(app.picker_backend.ensure_access()) {
        Permission::Denied => {
            app.set_error("Photo access", SubmitError::PermissionDenied.to_string());
        }
        Permission::Granted => {
            let photos = app.picker_backend.list_photos();
            if photos.is_empty() {
                app.set_error(
                    "No photos",
                    "The photo library is empty.\nAdd an image file and try again.",
                );
            } else if let Some(compose) = app.compose.as_mut() {
                compose.picker = Some(PickerState::new(photos));
            }
        }
    }
}

fn handle_picker_key(app: &mut App, key: KeyEvent) -> Result<bool> {
    let Some(compose) = app.compose.as_mut() else {
        return Ok(false);
    };
    let Some(picker) = compose.picker.as_mut() else {
        return Ok(false);
    };

    match key.code {
        KeyCode::Esc => {
            compose.picker = None;
        }
        KeyCode::Up => {
            if picker.cursor == 0 {
                picker.cursor = picker.photos.len().saturating_sub(1);
            } else {
                picker.cursor -= 1;
            }
        }
        KeyCode::Down => {
            if !picker.photos.is_empty() {
                picker.cursor = (picker.cursor + 1) % picker.photos.len();
            }
        }
        KeyCode::Enter => {
            if let Some(path) = picker.selected() {
                compose.draft.image = Some(photo_uri(path));
            }
            compose.picker = None;
        }
        _ => {}
    }
    Ok(false)
}

fn handle_result_key(app: &mut App, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Enter => {
            app.result = None;
            app.screen = Screen::Home;
        }
        KeyCode::Esc => {
            app.exit = Some(TuiExit::Quit);
            return Ok(true);
        }
        _ => {}
    }
    Ok(false)
}

fn handle_error_modal_key(app: &mut App, key: KeyEvent) -> Result<bool> {
    if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
        app.error_modal = None;
        app.screen = app.error_return_screen;
    }
    Ok(false)
}

/// Hand a built submission to the acceptance collaborator.
///
/// Runs from the event loop so the spinner frame is drawn before we block on
/// the acceptance call. The draft is kept intact on failure so the user can
/// retry without re-entering content.
pub(crate) fn handle_submit_post(
    rt: &tokio::runtime::Runtime,
    app: &mut App,
    submission: ChallengeSubmission,
) {
    let Some(compose) = app.compose.as_mut() else {
        return;
    };

    match rt.block_on(app.feed.accept(&submission)) {
        Ok(()) => {
            compose.flow.acceptance_succeeded();
            app.result = Some(ResultState {
                title: "Post is live".to_string(),
                body: format!(
                    "{}\n\nPress Enter to return.",
                    submission.display()
                ),
            });
            app.compose = None;
            app.screen = Screen::Result;
        }
        Err(err) => {
            compose.flow.acceptance_failed();
            app.set_error("Post not accepted", SubmitError::from(err).to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::post::ComposePhase;

    fn app_with_open_compose(cfg: &Config) -> App {
        let mut app = App::new(cfg);
        app.compose = Some(ComposeScreen::open(&KNOWN_CHALLENGES[0]));
        app.screen = Screen::Compose;
        app
    }

    fn f5() -> KeyEvent {
        KeyEvent::new(KeyCode::F(5), KeyModifiers::NONE)
    }

    fn fast_feed_config(always_fails: bool) -> Config {
        let mut cfg = Config::default();
        cfg.feed.accept_delay_ms = 0;
        cfg.feed.accept_always_fails = always_fails;
        cfg
    }

    #[test]
    fn submitting_an_empty_draft_stays_idle() {
        let rt = tokio::runtime::Runtime::new().unwrap();
        let cfg = Config::default();
        let mut app = app_with_open_compose(&cfg);

        handle_compose_key(&rt, &mut app, f5()).unwrap();

        let compose = app.compose.as_ref().unwrap();
        assert_eq!(compose.flow.phase(), ComposePhase::Idle);
        assert!(app.pending_action.is_none());
        assert_eq!(app.screen, Screen::ErrorModal);
        assert!(app.error_modal.is_some());
    }

    #[test]
    fn failed_acceptance_preserves_the_draft_for_retry() {
        let rt = tokio::runtime::Runtime::new().unwrap();
        let cfg = fast_feed_config(true);
        let mut app = app_with_open_compose(&cfg);
        {
            let compose = app.compose.as_mut().unwrap();
            compose.draft.text = "day one done".to_string();
            compose.draft.image = Some("file:///photos/sunrise.jpg".to_string());
        }

        handle_compose_key(&rt, &mut app, f5()).unwrap();
        assert_eq!(
            app.compose.as_ref().unwrap().flow.phase(),
            ComposePhase::Submitting
        );
        let Some(Action::SubmitPost(submission)) = app.pending_action.take() else {
            panic!("expected a queued submission");
        };

        handle_submit_post(&rt, &mut app, submission);

        let compose = app.compose.as_ref().unwrap();
        assert_eq!(compose.flow.phase(), ComposePhase::Idle);
        assert_eq!(compose.draft.text, "day one done");
        assert_eq!(
            compose.draft.image.as_deref(),
            Some("file:///photos/sunrise.jpg")
        );
        assert_eq!(app.screen, Screen::ErrorModal);
        assert!(app.feed.is_empty());
    }

    #[test]
    fn accepted_submission_closes_compose_and_shows_result() {
        let rt = tokio::runtime::Runtime::new().unwrap();
        let cfg = fast_feed_config(false);
        let mut app = app_with_open_compose(&cfg);
        app.compose.as_mut().unwrap().draft.text = "made it".to_string();

        handle_compose_key(&rt, &mut app, f5()).unwrap();
        let Some(Action::SubmitPost(submission)) = app.pending_action.take() else {
            panic!("expected a queued submission");
        };

        handle_submit_post(&rt, &mut app, submission);

        assert!(app.compose.is_none());
        assert_eq!(app.screen, Screen::Result);
        assert!(app.result.is_some());
        assert_eq!(app.feed.len(), 1);
    }
}
