//! Application state management for the signup client.
//!
//! This module contains the main application state, page routing, and
//! mode management for the terminal user interface.

use crate::domain::{
    DomainError, DomainResult, Field, FormValidator, PasswordValidator, RegistrationForm,
    RegistrationPayload,
};

/// Backend base URL used when no override is configured.
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000/";

/// Pages reachable from the navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// Landing page with navigation hints
    Home,
    /// The signup form
    Register,
}

/// Represents the current mode of the application.
///
/// The application can be in different modes that determine how user input
/// is interpreted and what UI elements are displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    /// Normal navigation mode - arrow keys move focus, shortcuts available
    Normal,
    /// Field editing mode - user is typing into the focused field
    Editing,
    /// Help screen is displayed
    Help,
}

/// The element on the register page that currently has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Field(Field),
    SubmitButton,
}

impl Focus {
    const ORDER: [Focus; 8] = [
        Focus::Field(Field::ScreenName),
        Focus::Field(Field::Email),
        Focus::Field(Field::Password),
        Focus::Field(Field::FirstName),
        Focus::Field(Field::MiddleName),
        Focus::Field(Field::LastName),
        Focus::Field(Field::Phone),
        Focus::SubmitButton,
    ];

    /// The next focusable element, wrapping past the submit button.
    pub fn next(&self) -> Focus {
        let position = Self::ORDER.iter().position(|f| f == self).unwrap_or(0);
        Self::ORDER[(position + 1) % Self::ORDER.len()]
    }

    /// The previous focusable element, wrapping before the first field.
    pub fn prev(&self) -> Focus {
        let position = Self::ORDER.iter().position(|f| f == self).unwrap_or(0);
        Self::ORDER[(position + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }

    /// The focused field, if focus is on a field rather than the button.
    pub fn field(&self) -> Option<Field> {
        match self {
            Focus::Field(field) => Some(*field),
            Focus::SubmitButton => None,
        }
    }
}

/// Main application state containing the form and UI state.
///
/// This structure holds all the data needed to render the terminal UI
/// and manage the signup workflow.
///
/// # Examples
///
/// ```
/// use onyx_signup::application::App;
///
/// let app = App::default();
/// assert!(app.form.screen_name.is_empty());
/// assert_eq!(app.backend_url, "http://localhost:8000/");
/// ```
#[derive(Debug)]
pub struct App {
    /// The registration form being filled in
    pub form: RegistrationForm,
    /// The page currently shown
    pub route: Route,
    /// Current application mode
    pub mode: AppMode,
    /// The focused element on the register page
    pub focus: Focus,
    /// Current input buffer (for editing mode)
    pub input: String,
    /// Cursor position within the input buffer, as a byte index
    pub cursor_position: usize,
    /// Inline feedback shown under the password field
    pub password_feedback: Option<String>,
    /// Whether the password field has been edited yet
    pub password_touched: bool,
    /// Temporary status message to display
    pub status_message: Option<String>,
    /// Scroll position in help text
    pub help_scroll: usize,
    /// Base URL of the backend the form submits to
    pub backend_url: String,
    /// Compiled password policy rules
    pub password_rules: PasswordValidator,
}

impl Default for App {
    fn default() -> Self {
        App {
            form: RegistrationForm::default(),
            route: Route::Home,
            mode: AppMode::Normal,
            focus: Focus::Field(Field::ScreenName),
            input: String::new(),
            cursor_position: 0,
            password_feedback: None,
            password_touched: false,
            status_message: None,
            help_scroll: 0,
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            password_rules: PasswordValidator::new(),
        }
    }
}

impl App {
    /// Creates a new application targeting the given backend.
    pub fn new(backend_url: String) -> Self {
        App {
            backend_url,
            ..Self::default()
        }
    }

    /// Navigates to the register page.
    pub fn open_register(&mut self) {
        self.route = Route::Register;
        self.focus = Focus::Field(Field::ScreenName);
        self.status_message = None;
    }

    /// Navigates back to the home page.
    pub fn go_home(&mut self) {
        self.route = Route::Home;
        self.status_message = None;
    }

    /// Moves focus to the next element on the register page.
    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    /// Moves focus to the previous element on the register page.
    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    /// Starts editing the focused field.
    ///
    /// Loads the field's current value into the input buffer and
    /// positions the cursor at the end. Does nothing when the submit
    /// button is focused.
    pub fn start_editing(&mut self) {
        if let Some(field) = self.focus.field() {
            self.mode = AppMode::Editing;
            self.input = self.form.value(field).to_string();
            self.cursor_position = self.input.len();
            self.status_message = None;
        }
    }

    /// Completes editing and commits the input buffer to the focused
    /// field.
    ///
    /// Editing the password refreshes the inline feedback. Returns to
    /// normal mode and advances focus to the next element.
    pub fn finish_editing(&mut self) {
        if let Some(field) = self.focus.field() {
            self.form.set_value(field, self.input.clone());
            if field == Field::Password {
                self.password_touched = true;
                self.password_feedback = self.password_rules.feedback(&self.form.password);
            }
        }
        self.mode = AppMode::Normal;
        self.input.clear();
        self.cursor_position = 0;
        self.focus_next();
    }

    /// Cancels editing and returns to normal mode without saving changes.
    ///
    /// Clears the input buffer and restores the feedback for the
    /// committed password value.
    pub fn cancel_editing(&mut self) {
        self.mode = AppMode::Normal;
        self.input.clear();
        self.cursor_position = 0;
        if self.password_touched {
            self.password_feedback = self.password_rules.feedback(&self.form.password);
        }
    }

    /// Inserts a character at the cursor. Digit-only fields drop
    /// anything that is not a digit.
    pub fn insert_char(&mut self, c: char) {
        if let Some(field) = self.focus.field() {
            if field.digits_only() && !c.is_ascii_digit() {
                return;
            }
        }
        self.input.insert(self.cursor_position, c);
        self.cursor_position += c.len_utf8();
        self.after_input_change();
    }

    /// Inserts a pasted string at the cursor, skipping control
    /// characters and applying the digit filter.
    pub fn insert_text(&mut self, text: &str) {
        let digits_only = self
            .focus
            .field()
            .map(|field| field.digits_only())
            .unwrap_or(false);
        for c in text.chars() {
            if c.is_control() {
                continue;
            }
            if digits_only && !c.is_ascii_digit() {
                continue;
            }
            self.input.insert(self.cursor_position, c);
            self.cursor_position += c.len_utf8();
        }
        self.after_input_change();
    }

    /// Deletes the character before the cursor.
    pub fn delete_back(&mut self) {
        if self.cursor_position > 0 {
            let prev = previous_boundary(&self.input, self.cursor_position);
            self.input.remove(prev);
            self.cursor_position = prev;
            self.after_input_change();
        }
    }

    /// Deletes the character at the cursor.
    pub fn delete_forward(&mut self) {
        if self.cursor_position < self.input.len() {
            self.input.remove(self.cursor_position);
            self.after_input_change();
        }
    }

    pub fn cursor_left(&mut self) {
        if self.cursor_position > 0 {
            self.cursor_position = previous_boundary(&self.input, self.cursor_position);
        }
    }

    pub fn cursor_right(&mut self) {
        if self.cursor_position < self.input.len() {
            self.cursor_position = next_boundary(&self.input, self.cursor_position);
        }
    }

    pub fn cursor_home(&mut self) {
        self.cursor_position = 0;
    }

    pub fn cursor_end(&mut self) {
        self.cursor_position = self.input.len();
    }

    /// Refreshes live password feedback while the password field is
    /// being edited.
    fn after_input_change(&mut self) {
        if self.focus.field() == Some(Field::Password) {
            self.password_touched = true;
            self.password_feedback = self.password_rules.feedback(&self.input);
        }
    }

    /// Validates the form and builds the wire payload for submission.
    ///
    /// The first validation failure is returned as the error; the
    /// payload is only built once every check passes.
    pub fn prepare_submission(&self) -> DomainResult<RegistrationPayload> {
        FormValidator::new(&self.form, &self.password_rules).validate_submission()?;
        Ok(self.form.to_payload())
    }

    /// Surfaces a validation failure in the status bar.
    pub fn set_validation_alert(&mut self, error: &DomainError) {
        self.status_message = Some(error.to_string());
    }

    /// Processes the result of a submission attempt.
    ///
    /// A completed request is logged with the server's status line; a
    /// transport failure is surfaced as an alert.
    ///
    /// # Arguments
    ///
    /// * `result` - Result of the request (response status line or error message)
    pub fn set_submit_result(&mut self, result: Result<String, String>) {
        match result {
            Ok(response) => {
                self.status_message = Some(format!("Submitted: {}", response));
            }
            Err(error) => {
                self.status_message =
                    Some(format!("Failed to submit data! Server Error: {}", error));
            }
        }
    }

    /// Fills the form with sample data for quick manual testing.
    pub fn fill_sample_data(&mut self) {
        self.form = RegistrationForm {
            screen_name: "HAPPY_GUY".to_string(),
            email: "hap@hap.com".to_string(),
            password: "Abcd123$#".to_string(),
            first_name: "happu".to_string(),
            middle_name: "naasd".to_string(),
            last_name: "asdasd".to_string(),
            phone: "1234567890".to_string(),
        };
        self.password_touched = true;
        self.password_feedback = self.password_rules.feedback(&self.form.password);
        self.status_message = Some("Sample data filled".to_string());
    }
}

fn previous_boundary(s: &str, index: usize) -> usize {
    let mut i = index - 1;
    while i > 0 && !s.is_char_boundary(i) {
        i -= 1;
    }
    i
}

fn next_boundary(s: &str, index: usize) -> usize {
    let mut i = index + 1;
    while i < s.len() && !s.is_char_boundary(i) {
        i += 1;
    }
    i
}

#[cfg(test)]
mod tests {
    use super::*;

    fn focus_field(app: &mut App, field: Field) {
        app.focus = Focus::Field(field);
    }

    #[test]
    fn test_default_state() {
        let app = App::default();
        assert_eq!(app.route, Route::Home);
        assert!(matches!(app.mode, AppMode::Normal));
        assert_eq!(app.focus, Focus::Field(Field::ScreenName));
        assert_eq!(app.backend_url, DEFAULT_BACKEND_URL);
        assert!(app.status_message.is_none());
        assert!(app.input.is_empty());
        assert_eq!(app.cursor_position, 0);
        assert!(!app.password_touched);
    }

    #[test]
    fn test_new_sets_backend_url() {
        let app = App::new("http://example.com/".to_string());
        assert_eq!(app.backend_url, "http://example.com/");
    }

    #[test]
    fn test_open_register_and_go_home() {
        let mut app = App::default();
        app.status_message = Some("old".to_string());

        app.open_register();
        assert_eq!(app.route, Route::Register);
        assert_eq!(app.focus, Focus::Field(Field::ScreenName));
        assert_eq!(app.status_message, None);

        app.status_message = Some("old".to_string());
        app.go_home();
        assert_eq!(app.route, Route::Home);
        assert_eq!(app.status_message, None);
    }

    #[test]
    fn test_focus_order_wraps() {
        let mut app = App::default();

        for field in Field::ALL {
            assert_eq!(app.focus, Focus::Field(field));
            app.focus_next();
        }
        assert_eq!(app.focus, Focus::SubmitButton);
        app.focus_next();
        assert_eq!(app.focus, Focus::Field(Field::ScreenName));

        app.focus_prev();
        assert_eq!(app.focus, Focus::SubmitButton);
        app.focus_prev();
        assert_eq!(app.focus, Focus::Field(Field::Phone));
    }

    #[test]
    fn test_start_editing_loads_field_value() {
        let mut app = App::default();
        app.form.email = "hap@hap.com".to_string();
        focus_field(&mut app, Field::Email);

        app.start_editing();
        assert_eq!(app.mode, AppMode::Editing);
        assert_eq!(app.input, "hap@hap.com");
        assert_eq!(app.cursor_position, "hap@hap.com".len());
    }

    #[test]
    fn test_start_editing_ignores_submit_button() {
        let mut app = App::default();
        app.focus = Focus::SubmitButton;

        app.start_editing();
        assert_eq!(app.mode, AppMode::Normal);
    }

    #[test]
    fn test_finish_editing_commits_and_advances() {
        let mut app = App::default();
        app.start_editing();
        app.input = "HAPPY_GUY".to_string();

        app.finish_editing();
        assert_eq!(app.form.screen_name, "HAPPY_GUY");
        assert_eq!(app.mode, AppMode::Normal);
        assert_eq!(app.input, "");
        assert_eq!(app.focus, Focus::Field(Field::Email));
    }

    #[test]
    fn test_cancel_editing_discards_input() {
        let mut app = App::default();
        app.form.screen_name = "original".to_string();
        app.start_editing();
        app.input = "changed".to_string();

        app.cancel_editing();
        assert_eq!(app.form.screen_name, "original");
        assert_eq!(app.mode, AppMode::Normal);
        assert_eq!(app.focus, Focus::Field(Field::ScreenName));
    }

    #[test]
    fn test_insert_and_delete() {
        let mut app = App::default();
        app.start_editing();

        app.insert_char('a');
        app.insert_char('b');
        app.insert_char('c');
        assert_eq!(app.input, "abc");

        app.cursor_left();
        app.delete_back();
        assert_eq!(app.input, "ac");

        app.delete_forward();
        assert_eq!(app.input, "a");
    }

    #[test]
    fn test_cursor_moves_over_multibyte_chars() {
        let mut app = App::default();
        app.start_editing();

        app.insert_char('ä');
        app.insert_char('b');
        assert_eq!(app.input, "äb");

        app.cursor_home();
        assert_eq!(app.cursor_position, 0);
        app.cursor_right();
        assert_eq!(app.cursor_position, 'ä'.len_utf8());
        app.cursor_left();
        app.delete_forward();
        assert_eq!(app.input, "b");
    }

    #[test]
    fn test_delete_back_over_multibyte_char() {
        let mut app = App::default();
        app.start_editing();

        app.insert_char('a');
        app.insert_char('ü');
        app.delete_back();
        assert_eq!(app.input, "a");
    }

    #[test]
    fn test_phone_accepts_digits_only() {
        let mut app = App::default();
        focus_field(&mut app, Field::Phone);
        app.start_editing();

        app.insert_char('1');
        app.insert_char('a');
        app.insert_char('-');
        app.insert_char('2');
        assert_eq!(app.input, "12");
    }

    #[test]
    fn test_insert_text_filters_phone_input() {
        let mut app = App::default();
        focus_field(&mut app, Field::Phone);
        app.start_editing();

        app.insert_text("(123) 456-7890");
        assert_eq!(app.input, "1234567890");
    }

    #[test]
    fn test_insert_text_skips_control_chars() {
        let mut app = App::default();
        app.start_editing();

        app.insert_text("ab\ncd\t");
        assert_eq!(app.input, "abcd");
    }

    #[test]
    fn test_password_feedback_updates_while_typing() {
        let mut app = App::default();
        focus_field(&mut app, Field::Password);
        app.start_editing();

        app.insert_char('a');
        assert!(app.password_touched);
        assert_eq!(
            app.password_feedback,
            Some("Password must contain at least one upper case character".to_string())
        );

        for c in "Abcd123$#".chars().skip(1) {
            app.insert_char(c);
        }
        app.cursor_home();
        app.delete_forward();
        app.insert_char('A');
        // "Abcd123$#" reassembled: the policy is satisfied.
        assert_eq!(app.password_feedback, None);
    }

    #[test]
    fn test_password_feedback_untouched_until_edited() {
        let mut app = App::default();
        focus_field(&mut app, Field::ScreenName);
        app.start_editing();
        app.insert_char('x');

        assert!(!app.password_touched);
        assert_eq!(app.password_feedback, None);
    }

    #[test]
    fn test_cancel_editing_restores_committed_password_feedback() {
        let mut app = App::default();
        focus_field(&mut app, Field::Password);
        app.start_editing();
        for c in "Abcd123$#".chars() {
            app.insert_char(c);
        }
        app.finish_editing();
        assert_eq!(app.password_feedback, None);

        focus_field(&mut app, Field::Password);
        app.start_editing();
        // Pushes the buffer past 16 characters without committing it.
        app.insert_text("zzzzzzzz");
        assert!(app.password_feedback.is_some());

        app.cancel_editing();
        assert_eq!(app.password_feedback, None);
    }

    #[test]
    fn test_finish_editing_password_refreshes_feedback() {
        let mut app = App::default();
        focus_field(&mut app, Field::Password);
        app.start_editing();
        app.input = "short".to_string();

        app.finish_editing();
        assert!(app.password_touched);
        assert_eq!(
            app.password_feedback,
            Some("Password must contain at least one upper case character".to_string())
        );
    }

    #[test]
    fn test_prepare_submission_validates_first() {
        let app = App::default();
        assert_eq!(
            app.prepare_submission(),
            Err(DomainError::EmptyRequiredField(Field::ScreenName))
        );
    }

    #[test]
    fn test_prepare_submission_builds_payload() {
        let mut app = App::default();
        app.fill_sample_data();

        let payload = app.prepare_submission().unwrap();
        assert_eq!(payload.screen_name, "HAPPY_GUY");
        assert_eq!(payload.phone.as_deref(), Some("1234567890"));
    }

    #[test]
    fn test_validation_alert_messages() {
        let mut app = App::default();

        app.set_validation_alert(&DomainError::EmptyRequiredField(Field::ScreenName));
        assert_eq!(
            app.status_message,
            Some("Screen Name cannot be empty".to_string())
        );

        app.set_validation_alert(&DomainError::PasswordConditionsNotMet);
        assert_eq!(
            app.status_message,
            Some("Password conditions not met".to_string())
        );
    }

    #[test]
    fn test_submit_result_messages() {
        let mut app = App::default();

        app.set_submit_result(Ok("HTTP 200 OK".to_string()));
        assert_eq!(
            app.status_message,
            Some("Submitted: HTTP 200 OK".to_string())
        );

        app.set_submit_result(Err("connection refused".to_string()));
        assert_eq!(
            app.status_message,
            Some("Failed to submit data! Server Error: connection refused".to_string())
        );
    }

    #[test]
    fn test_fill_sample_data() {
        let mut app = App::default();
        app.fill_sample_data();

        assert_eq!(app.form.screen_name, "HAPPY_GUY");
        assert_eq!(app.form.email, "hap@hap.com");
        assert_eq!(app.form.password, "Abcd123$#");
        assert_eq!(app.form.phone, "1234567890");
        assert_eq!(app.password_feedback, None);
        assert_eq!(app.status_message, Some("Sample data filled".to_string()));
        assert!(app.prepare_submission().is_ok());
    }
}
