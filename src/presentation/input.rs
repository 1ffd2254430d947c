use crate::application::{App, AppMode, Focus, Route};
use crate::infrastructure::RegistrationApi;
use crossterm::event::{KeyCode, KeyModifiers};

pub struct InputHandler;

impl InputHandler {
    pub fn handle_key_event(app: &mut App, key: KeyCode, modifiers: KeyModifiers) {
        match app.mode {
            AppMode::Normal => match app.route {
                Route::Home => Self::handle_home(app, key),
                Route::Register => Self::handle_register(app, key, modifiers),
            },
            AppMode::Editing => Self::handle_editing_mode(app, key, modifiers),
            AppMode::Help => Self::handle_help_mode(app, key),
        }
    }

    fn handle_home(app: &mut App, key: KeyCode) {
        match key {
            KeyCode::Char('s') | KeyCode::Enter => {
                app.open_register();
            }
            KeyCode::F(1) | KeyCode::Char('?') => {
                app.mode = AppMode::Help;
                app.help_scroll = 0;
            }
            KeyCode::Char('q') => {
                // Will be handled by main loop
            }
            _ => {}
        }
    }

    fn handle_register(app: &mut App, key: KeyCode, modifiers: KeyModifiers) {
        if modifiers.contains(KeyModifiers::CONTROL) {
            match key {
                KeyCode::Char('s') => {
                    Self::submit(app);
                    return;
                }
                KeyCode::Char('t') => {
                    app.fill_sample_data();
                    return;
                }
                _ => {}
            }
        }

        app.status_message = None;

        match key {
            KeyCode::Up | KeyCode::BackTab => {
                app.focus_prev();
            }
            KeyCode::Down | KeyCode::Tab => {
                app.focus_next();
            }
            KeyCode::Enter | KeyCode::F(2) => {
                if app.focus == Focus::SubmitButton {
                    Self::submit(app);
                } else {
                    app.start_editing();
                }
            }
            KeyCode::F(1) | KeyCode::Char('?') => {
                app.mode = AppMode::Help;
                app.help_scroll = 0;
            }
            KeyCode::Esc => {
                app.go_home();
            }
            KeyCode::Char('q') => {
                // Will be handled by main loop
            }
            _ => {}
        }
    }

    fn handle_editing_mode(app: &mut App, key: KeyCode, modifiers: KeyModifiers) {
        if modifiers.contains(KeyModifiers::CONTROL) {
            if let KeyCode::Char('v') = key {
                Self::paste_from_clipboard(app);
            }
            return;
        }

        match key {
            KeyCode::Enter => {
                app.finish_editing();
            }
            KeyCode::Esc => {
                app.cancel_editing();
            }
            KeyCode::Backspace => {
                app.delete_back();
            }
            KeyCode::Delete => {
                app.delete_forward();
            }
            KeyCode::Left => {
                app.cursor_left();
            }
            KeyCode::Right => {
                app.cursor_right();
            }
            KeyCode::Home => {
                app.cursor_home();
            }
            KeyCode::End => {
                app.cursor_end();
            }
            KeyCode::Char(c) => {
                app.insert_char(c);
            }
            _ => {}
        }
    }

    fn handle_help_mode(app: &mut App, key: KeyCode) {
        match key {
            KeyCode::Esc | KeyCode::F(1) | KeyCode::Char('?') | KeyCode::Char('q') => {
                app.mode = AppMode::Normal;
            }
            KeyCode::Up | KeyCode::Char('k') => {
                if app.help_scroll > 0 {
                    app.help_scroll -= 1;
                }
            }
            KeyCode::Down | KeyCode::Char('j') => {
                app.help_scroll += 1;
            }
            KeyCode::PageUp => {
                app.help_scroll = app.help_scroll.saturating_sub(5);
            }
            KeyCode::PageDown => {
                app.help_scroll += 5;
            }
            KeyCode::Home => {
                app.help_scroll = 0;
            }
            _ => {}
        }
    }

    fn submit(app: &mut App) {
        match app.prepare_submission() {
            Ok(payload) => {
                let result = RegistrationApi::register(&app.backend_url, &payload);
                app.set_submit_result(result);
            }
            Err(error) => {
                app.set_validation_alert(&error);
            }
        }
    }

    fn paste_from_clipboard(app: &mut App) {
        if let Ok(mut clipboard) = arboard::Clipboard::new() {
            if let Ok(text) = clipboard.get_text() {
                app.insert_text(&text);
            }
        }
    }
}
