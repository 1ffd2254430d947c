use crate::application::{App, AppMode, Focus, Route};
use crate::domain::Field;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

pub fn render_ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(f.area());

    render_nav_bar(f, app, chunks[0]);
    match app.route {
        Route::Home => render_home(f, chunks[1]),
        Route::Register => render_register(f, app, chunks[1]),
    }
    render_status_bar(f, app, chunks[2]);

    if matches!(app.mode, AppMode::Help) {
        render_help_popup(f, app.help_scroll);
    }
}

fn render_nav_bar(f: &mut Frame, app: &App, area: Rect) {
    let home_style = if app.route == Route::Home {
        Style::default().bg(Color::LightBlue).fg(Color::Black)
    } else {
        Style::default().fg(Color::Yellow)
    };
    let register_style = if app.route == Route::Register {
        Style::default().bg(Color::LightBlue).fg(Color::Black)
    } else {
        Style::default().fg(Color::Yellow)
    };

    let nav = Line::from(vec![
        Span::styled(
            "ONYX SALAMANDER CMS",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::raw("   "),
        Span::styled(" Home ", home_style),
        Span::raw(" "),
        Span::styled(" Sign Up ", register_style),
    ]);
    f.render_widget(Paragraph::new(nav), area);
}

fn render_home(f: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Welcome to Onyx Salamander CMS",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("Press s to open the signup form."),
        Line::from("Press F1 or ? for help, q to quit."),
    ];
    let home = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Home"));
    f.render_widget(home, area);
}

fn render_register(f: &mut Frame, app: &App, area: Rect) {
    let mut lines = vec![
        Line::from(Span::styled(
            "SignUp",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "(Fields marked * are required fields)",
            Style::default().add_modifier(Modifier::ITALIC),
        )),
        Line::from(""),
    ];

    for field in Field::ALL {
        let mut label_spans = vec![Span::styled(
            field.label(),
            Style::default().fg(Color::Yellow),
        )];
        if field.is_required() {
            label_spans.push(Span::styled(" *", Style::default().fg(Color::Red)));
        }
        lines.push(Line::from(label_spans));

        let value_style = if app.focus == Focus::Field(field) {
            Style::default().bg(Color::Blue).fg(Color::White)
        } else {
            Style::default()
        };
        let shown = display_value(field, app.form.value(field));
        let shown = if shown.is_empty() { " ".to_string() } else { shown };
        lines.push(Line::from(vec![
            Span::raw("  "),
            Span::styled(shown, value_style),
        ]));

        if field == Field::Password {
            if app.password_touched {
                if let Some(ref feedback) = app.password_feedback {
                    lines.push(Line::from(Span::styled(
                        format!("  {}", feedback),
                        Style::default()
                            .fg(Color::Red)
                            .add_modifier(Modifier::ITALIC),
                    )));
                }
            }
        }
        lines.push(Line::from(""));
    }

    let button_style = if app.focus == Focus::SubmitButton {
        Style::default()
            .bg(Color::Blue)
            .fg(Color::White)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };
    lines.push(Line::from(vec![
        Span::raw("  "),
        Span::styled("[ Sign Up ]", button_style),
    ]));

    let form = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title("Register"));
    f.render_widget(form, area);
}

fn display_value(field: Field, value: &str) -> String {
    if field.is_masked() {
        "•".repeat(value.chars().count())
    } else {
        value.to_string()
    }
}

fn render_status_bar(f: &mut Frame, app: &App, area: Rect) {
    let input_text = match app.mode {
        AppMode::Normal => {
            if let Some(ref status) = app.status_message {
                status.clone()
            } else {
                match app.route {
                    Route::Home => "s: open signup | F1/?: help | q: quit".to_string(),
                    Route::Register => "Tab/↓: next field | Enter/F2: edit or submit | Ctrl+S: submit | Ctrl+T: sample data | Esc: home | F1/?: help | q: quit".to_string(),
                }
            }
        }
        AppMode::Editing => {
            let shown = match app.focus.field() {
                Some(field) => display_value(field, &app.input),
                None => app.input.clone(),
            };
            let label = app.focus.field().map(|f| f.label()).unwrap_or("");
            format!("Editing {}: {} (Enter to save, Esc to cancel)", label, shown)
        }
        AppMode::Help => "↑↓/jk: scroll | PgUp/PgDn: fast scroll | Home: top | Esc/q: close help".to_string(),
    };

    let input = Paragraph::new(input_text)
        .block(Block::default().borders(Borders::ALL).title("Status"))
        .style(match app.mode {
            AppMode::Normal => Style::default(),
            AppMode::Editing => Style::default().fg(Color::Green),
            AppMode::Help => Style::default().fg(Color::Cyan),
        });
    f.render_widget(input, area);
}

fn render_help_popup(f: &mut Frame, scroll: usize) {
    let area = f.area();
    let popup_area = Rect {
        x: area.width / 10,
        y: area.height / 10,
        width: area.width * 4 / 5,
        height: area.height * 4 / 5,
    };

    f.render_widget(Clear, popup_area);

    let help_text = get_help_text();
    let help_lines: Vec<&str> = help_text.lines().collect();
    let visible_height = popup_area.height.saturating_sub(2) as usize;

    let start_line = scroll.min(help_lines.len().saturating_sub(visible_height));
    let end_line = (start_line + visible_height).min(help_lines.len());

    let visible_text = help_lines[start_line..end_line].join("\n");

    let help_widget = Paragraph::new(visible_text)
        .block(Block::default()
            .borders(Borders::ALL)
            .title(format!("Onyx Signup Help (Line {}/{})", start_line + 1, help_lines.len()))
            .style(Style::default().fg(Color::Cyan)))
        .style(Style::default().fg(Color::White));

    f.render_widget(help_widget, popup_area);
}

fn get_help_text() -> String {
    r#"ONYX SIGNUP CLIENT REFERENCE

=== PAGES ===
Home            Landing page with shortcuts
Sign Up         The registration form
                Switch with s (open signup) and Esc (back home)

=== SIGNUP FORM ===
Screen Name *   Public handle, required
Email *         Contact address, required
Password *      Must satisfy the password rules below
First Name      Optional
Middle Name     Optional
Last Name       Optional
Phone number    Optional, digits only

Fields marked * cannot be empty. Optional fields left blank are
sent to the server as null.

=== PASSWORD RULES ===
• At least one upper case character
• At least one lower case character
• At least one number
• At least one special character (e.g. $, -, #, etc.)
• 8 - 16 characters long

Rules are checked in order while you type; the first unmet rule
is shown under the password field.

=== FORM NAVIGATION ===
Tab / Down      Move to the next field
Shift+Tab / Up  Move to the previous field
Enter or F2     Edit the focused field (or submit on the button)
Esc             Back to the home page

=== EDITING A FIELD ===
Enter           Save the value and move on
Esc             Discard the value
Ctrl+V          Paste from the system clipboard
Arrow keys      Move the cursor
Home / End      Jump to start / end

=== SUBMISSION ===
Ctrl+S          Validate and submit the form
Enter           Same, when the Sign Up button is focused
                Validation failures appear in the status bar.
                A server reply of any status counts as submitted;
                only a transport failure is reported as an error.

=== SAMPLE DATA ===
Ctrl+T          Fill the form with sample data for a quick test

=== BACKEND ===
The form posts JSON to {backend}auth/register. The backend base
URL defaults to http://localhost:8000/ and can be overridden with
the ONYX_BACKEND_URL environment variable.

=== HELP NAVIGATION ===
↑↓ or j/k       Scroll help text up/down one line
Page Up/Down    Scroll help text up/down 5 lines
Home            Jump to top of help text
Esc/F1/?/q      Close this help window"#.to_string()
}
