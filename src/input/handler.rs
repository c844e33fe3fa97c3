use crate::app::AppState;
use crate::domain::UiMode;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

/// Handle keyboard input events. Returns true when the app should quit.
pub fn handle_key(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match app.ui_mode {
        UiMode::Normal => handle_normal_mode(app, key),
        UiMode::AddingTask => handle_input_form_mode(app, key),
        UiMode::ConfirmDelete => handle_confirm_mode(app, key),
    }
}

/// Handle keys in normal mode
fn handle_normal_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        // Navigation within the visible page
        KeyCode::Up => {
            app.move_selection_up();
            Ok(false)
        }
        KeyCode::Down => {
            app.move_selection_down();
            Ok(false)
        }

        // Page navigation
        KeyCode::Left | KeyCode::Char('[') => {
            app.page_prev();
            Ok(false)
        }
        KeyCode::Right | KeyCode::Char(']') => {
            app.page_next();
            Ok(false)
        }
        // Jump straight to a page number
        KeyCode::Char(c @ '1'..='9') => {
            let target = c.to_digit(10).unwrap_or(1) as usize;
            app.paginate(target);
            Ok(false)
        }

        // Toggle the selected task across lists
        KeyCode::Enter | KeyCode::Char(' ') => {
            app.toggle_selected()?;
            Ok(false)
        }

        // Add task
        KeyCode::Char('a') | KeyCode::Char('A') => {
            app.start_add_task();
            Ok(false)
        }

        // Delete selected (asks for confirmation)
        KeyCode::Char('d') | KeyCode::Delete => {
            app.request_delete_selected();
            Ok(false)
        }

        // Delete all on the shown panel (asks for confirmation)
        KeyCode::Char('D') => {
            app.request_delete_all();
            Ok(false)
        }

        // Move flagged completed tasks back to active
        KeyCode::Char('m') | KeyCode::Char('M') => {
            app.commit_pending_return();
            Ok(false)
        }

        // Switch between Active and Completed panels
        KeyCode::Tab => {
            app.switch_panel();
            Ok(false)
        }

        // Quit
        KeyCode::Char('q') | KeyCode::Char('Q') => Ok(true),

        KeyCode::Esc => Ok(false),

        _ => Ok(false),
    }
}

/// Handle keys in the add-task form
fn handle_input_form_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Enter => {
            app.submit_input();
            Ok(false)
        }
        KeyCode::Esc => {
            app.cancel_input();
            Ok(false)
        }
        KeyCode::Backspace => {
            app.input_backspace();
            Ok(false)
        }
        KeyCode::Char(c) => {
            app.input_add_char(c);
            Ok(false)
        }
        _ => Ok(false),
    }
}

/// Handle keys in the confirm modal
fn handle_confirm_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
            app.confirm_accept()?;
            Ok(false)
        }
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
            app.confirm_decline()?;
            Ok(false)
        }
        _ => Ok(false),
    }
}
