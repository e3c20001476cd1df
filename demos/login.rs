//! Login form demo: two input fields with validation, a clearable email and
//! a password with a reveal toggle.
//!
//! Run with `cargo run --example login`. Tab switches fields, Enter
//! validates, Esc quits. Mouse clicks focus fields and hit the inline
//! action glyphs.

use std::fs::File;
use std::io;
use std::time::Duration;

use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind, MouseButton,
    MouseEventKind,
};
use crossterm::execute;
use ratatui::layout::{Constraint, Layout, Position, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::Paragraph;
use ratatui::{DefaultTerminal, Frame};
use simplelog::{Config, LevelFilter, WriteLogger};

use formgrid::events::ClickEvent;
use formgrid::keybinds::{Key, KeyCombo};
use formgrid::validation::{ValidationResult, Validator};
use formgrid::widgets::{InputEvent, InputField, InputFieldState, InputKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Focus {
    #[default]
    Email,
    Password,
}

#[derive(Default)]
struct App {
    email: String,
    password: String,
    email_state: InputFieldState,
    password_state: InputFieldState,
    focus: Focus,
    result: ValidationResult,
    submitted: bool,
}

fn email_field<'a>(value: &'a str, focused: bool, result: &'a ValidationResult) -> InputField<'a> {
    let mut field = InputField::new(value)
        .label("Email")
        .placeholder("you@example.com")
        .clearable(true)
        .focused(focused);
    if let Some(message) = result.message_for("email") {
        field = field.invalid(true).error_message(message);
    }
    field
}

fn password_field<'a>(
    value: &'a str,
    focused: bool,
    result: &'a ValidationResult,
) -> InputField<'a> {
    let mut field = InputField::new(value)
        .label("Password")
        .kind(InputKind::Password)
        .helper_text("At least 8 characters")
        .focused(focused);
    if let Some(message) = result.message_for("password") {
        field = field.invalid(true).error_message(message);
    }
    field
}

fn field_areas(area: Rect) -> (Rect, Rect, Rect) {
    let [_, email, _, password, _, status] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .horizontal_margin(2)
    .areas(area);
    (email, password, status)
}

fn draw(frame: &mut Frame, app: &mut App) {
    let (email_area, password_area, status_area) = field_areas(frame.area());
    let App {
        email,
        password,
        email_state,
        password_state,
        focus,
        result,
        submitted,
    } = app;

    let email_widget = email_field(email, *focus == Focus::Email, result);
    frame.render_stateful_widget(email_widget, email_area, email_state);

    let password_widget = password_field(password, *focus == Focus::Password, result);
    frame.render_stateful_widget(password_widget, password_area, password_state);

    if *submitted && result.is_valid() {
        let status = Paragraph::new("Signed in").style(Style::default().fg(Color::Green));
        frame.render_widget(status, status_area);
    }
}

fn validate(app: &mut App) {
    app.result = Validator::new()
        .field("email", &app.email)
        .required("Email is required")
        .email("Enter a valid email address")
        .field("password", &app.password)
        .required("Password is required")
        .min_length(8, "Password must be at least 8 characters")
        .validate();
    app.submitted = true;
    log::info!("login validation: valid={}", app.result.is_valid());
}

fn handle_key(app: &mut App, combo: KeyCombo) -> bool {
    match combo.key {
        Key::Escape => return false,
        Key::Tab => {
            app.focus = match app.focus {
                Focus::Email => Focus::Password,
                Focus::Password => Focus::Email,
            };
        }
        Key::Enter => validate(app),
        _ => {
            let event = match app.focus {
                Focus::Email => email_field(&app.email, true, &app.result)
                    .handle_key(&combo, &mut app.email_state),
                Focus::Password => password_field(&app.password, true, &app.result)
                    .handle_key(&combo, &mut app.password_state),
            };
            if let Some(InputEvent::Changed(next)) = event {
                match app.focus {
                    Focus::Email => app.email = next,
                    Focus::Password => app.password = next,
                }
            }
        }
    }
    true
}

fn handle_click(app: &mut App, click: ClickEvent, screen: Rect) {
    let (email_area, password_area, _) = field_areas(screen);
    let pos = Position::new(click.position.x, click.position.y);
    if email_area.contains(pos) {
        app.focus = Focus::Email;
        let event = email_field(&app.email, true, &app.result).handle_click(
            &click,
            email_area,
            &mut app.email_state,
        );
        if let Some(InputEvent::Changed(next)) = event {
            app.email = next;
        }
    } else if password_area.contains(pos) {
        app.focus = Focus::Password;
        let event = password_field(&app.password, true, &app.result).handle_click(
            &click,
            password_area,
            &mut app.password_state,
        );
        if let Some(InputEvent::Changed(next)) = event {
            app.password = next;
        }
    }
}

fn run(terminal: &mut DefaultTerminal, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|frame| draw(frame, app))?;

        if !event::poll(Duration::from_millis(100))? {
            continue;
        }
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if !handle_key(app, key.into()) {
                    return Ok(());
                }
            }
            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                let size = terminal.size()?;
                let screen = Rect::new(0, 0, size.width, size.height);
                handle_click(app, ClickEvent::at(mouse.column, mouse.row), screen);
            }
            _ => {}
        }
    }
}

fn main() -> io::Result<()> {
    let _ = WriteLogger::init(
        LevelFilter::Debug,
        Config::default(),
        File::create("login-demo.log")?,
    );

    let mut terminal = ratatui::init();
    execute!(io::stdout(), EnableMouseCapture)?;
    let result = run(&mut terminal, &mut App::default());
    let _ = execute!(io::stdout(), DisableMouseCapture);
    ratatui::restore();
    result
}
