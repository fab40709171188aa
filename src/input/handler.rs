use crate::app::AppState;
use crate::domain::{SessionMode, UiMode, View};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Handle keyboard input events; returns true when the app should quit
pub fn handle_key(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Ok(true);
    }

    // Any key dismisses the last status message
    app.status_message = None;

    match app.ui_mode {
        UiMode::Normal => handle_normal_mode(app, key),
        UiMode::Tagging => handle_tagging_mode(app, key),
    }
}

/// Handle keys in normal mode
fn handle_normal_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => return Ok(true),

        // Navigation between views
        KeyCode::Tab | KeyCode::BackTab => app.toggle_view(),
        KeyCode::Char('1') => app.set_view(View::Timer),
        KeyCode::Char('2') => app.set_view(View::Stats),

        // Timer controls
        KeyCode::Char(' ') | KeyCode::Enter => app.toggle_run_pause(),
        KeyCode::Char('s') | KeyCode::Char('S') => app.start_timer(),
        KeyCode::Char('p') | KeyCode::Char('P') => app.pause_timer(),
        KeyCode::Char('r') | KeyCode::Char('R') => app.reset_timer(),
        KeyCode::Char('w') | KeyCode::Char('W') => app.select_mode(SessionMode::Work),
        KeyCode::Char('b') | KeyCode::Char('B') => app.select_mode(SessionMode::Break),

        // Statistics view
        KeyCode::Char('a') | KeyCode::Char('A') if app.view == View::Stats => app.request_analysis(),
        KeyCode::Up if app.view == View::Stats => app.scroll_history_up(),
        KeyCode::Down if app.view == View::Stats => app.scroll_history_down(),

        _ => {}
    }
    Ok(false)
}

/// Handle keys while the tag capture step is open
fn handle_tagging_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Esc => {
            app.discard_capture();
            return Ok(false);
        }
        KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.confirm_capture();
            return Ok(false);
        }
        _ => {}
    }

    let Some(capture) = app.capture.as_mut() else {
        return Ok(false);
    };

    match key.code {
        // Enter only turns the typed text into a tag; saving is Ctrl+S
        KeyCode::Enter => capture.submit_input(),
        KeyCode::Backspace => {
            if capture.input.is_empty() {
                capture.remove_last();
            } else {
                capture.backspace();
            }
        }
        // Chip focus
        KeyCode::Left => capture.focus_prev(),
        KeyCode::Right => capture.focus_next(),
        KeyCode::Delete => capture.remove_focused(),
        // Quick-add suggestions
        KeyCode::F(n @ 1..=9) => capture.add_suggestion(usize::from(n) - 1),
        KeyCode::Char(c @ '1'..='9') if key.modifiers.contains(KeyModifiers::ALT) => {
            capture.add_suggestion(c as usize - '1' as usize);
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => capture.push_char(c),
        _ => {}
    }
    Ok(false)
}
