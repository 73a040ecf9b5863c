use crate::app::{Action, AppState};
use crate::domain::{PageNav, UiMode};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What the event loop should do after a key press
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Handled locally (or ignored), just redraw
    Continue,
    Quit,
    Dispatch(Action),
}

/// Handle keyboard input events
pub fn handle_key(app: &mut AppState, key: KeyEvent) -> KeyOutcome {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return KeyOutcome::Quit;
    }

    match app.ui_mode {
        UiMode::Auth => handle_auth_mode(app, key),
        UiMode::Normal => handle_normal_mode(app, key),
        UiMode::ComposingTask => handle_compose_mode(app, key),
        UiMode::TaskModal => handle_modal_mode(app, key),
    }
}

/// Ctrl or Alt combinations are commands, never text.
/// AltGr arrives as Ctrl+Alt and still types.
fn is_chord(key: KeyEvent) -> bool {
    let held = key.modifiers & (KeyModifiers::CONTROL | KeyModifiers::ALT);
    held == KeyModifiers::CONTROL || held == KeyModifiers::ALT
}

/// Login/register forms
fn handle_auth_mode(app: &mut AppState, key: KeyEvent) -> KeyOutcome {
    match key.code {
        // Switch between login and register
        KeyCode::Char('r') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.toggle_auth_mode();
            KeyOutcome::Continue
        }
        KeyCode::Tab | KeyCode::Down => {
            app.active_form_mut().next_field();
            KeyOutcome::Continue
        }
        KeyCode::BackTab | KeyCode::Up => {
            app.active_form_mut().previous_field();
            KeyOutcome::Continue
        }
        KeyCode::Enter => match app.auth_submit_action() {
            Some(action) => KeyOutcome::Dispatch(action),
            None => KeyOutcome::Continue,
        },
        KeyCode::Backspace => {
            app.active_form_mut().backspace();
            KeyOutcome::Continue
        }
        KeyCode::Char(c) if !is_chord(key) => {
            app.active_form_mut().push_char(c);
            KeyOutcome::Continue
        }
        KeyCode::Esc => KeyOutcome::Quit,
        _ => KeyOutcome::Continue,
    }
}

/// Dashboard: list navigation, tabs, pages
fn handle_normal_mode(app: &mut AppState, key: KeyEvent) -> KeyOutcome {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => KeyOutcome::Dispatch(Action::SelectPrevious),
        KeyCode::Down | KeyCode::Char('j') => KeyOutcome::Dispatch(Action::SelectNext),

        // Pages
        KeyCode::Left | KeyCode::PageUp | KeyCode::Char('h') => {
            KeyOutcome::Dispatch(Action::ChangePage(PageNav::Previous))
        }
        KeyCode::Right | KeyCode::PageDown | KeyCode::Char('l') => {
            KeyOutcome::Dispatch(Action::ChangePage(PageNav::Next))
        }
        KeyCode::Char(c @ '1'..='9') => {
            let page = c.to_digit(10).map(|d| d as usize).unwrap_or(1);
            KeyOutcome::Dispatch(Action::ChangePage(PageNav::Jump(page)))
        }

        // Tabs
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Char('t') => {
            KeyOutcome::Dispatch(Action::SwitchTab(app.view.tab.other()))
        }

        // Details
        KeyCode::Enter => match app.selected_task() {
            Some(task) => KeyOutcome::Dispatch(Action::OpenTask(task.id)),
            None => KeyOutcome::Continue,
        },

        // New task
        KeyCode::Char('a') | KeyCode::Char('n') => {
            app.start_compose();
            KeyOutcome::Continue
        }

        KeyCode::Char('r') | KeyCode::Char('R') => KeyOutcome::Dispatch(Action::Refresh),
        KeyCode::Char('o') | KeyCode::Char('O') => KeyOutcome::Dispatch(Action::Logout),
        KeyCode::Char('q') | KeyCode::Char('Q') => KeyOutcome::Quit,
        _ => KeyOutcome::Continue,
    }
}

/// Typing a task description
fn handle_compose_mode(app: &mut AppState, key: KeyEvent) -> KeyOutcome {
    match key.code {
        KeyCode::Enter => {
            if app.busy.is_some() || app.task_draft.trim().is_empty() {
                return KeyOutcome::Continue;
            }
            KeyOutcome::Dispatch(Action::CreateTask(app.task_draft.clone()))
        }
        KeyCode::Esc => {
            app.cancel_compose();
            KeyOutcome::Continue
        }
        KeyCode::Backspace => {
            app.task_draft.pop();
            KeyOutcome::Continue
        }
        KeyCode::Char(c) if !is_chord(key) => {
            app.task_draft.push(c);
            KeyOutcome::Continue
        }
        _ => KeyOutcome::Continue,
    }
}

/// Task detail modal with the status control
fn handle_modal_mode(app: &mut AppState, key: KeyEvent) -> KeyOutcome {
    match key.code {
        KeyCode::Left | KeyCode::Char('h') => KeyOutcome::Dispatch(Action::CycleStatus { forward: false }),
        KeyCode::Right | KeyCode::Char('l') => KeyOutcome::Dispatch(Action::CycleStatus { forward: true }),
        KeyCode::Enter => match &app.modal {
            Some(modal) if modal.editable && modal.control != modal.committed => {
                KeyOutcome::Dispatch(Action::UpdateStatus {
                    task_id: modal.task_id,
                    status: modal.control,
                })
            }
            _ => KeyOutcome::Continue,
        },
        KeyCode::Esc | KeyCode::Char('q') => KeyOutcome::Dispatch(Action::CloseModal),
        _ => KeyOutcome::Continue,
    }
}
