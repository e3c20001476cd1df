//! Data table demo: a sortable, selectable user list.
//!
//! Run with `cargo run --example users`. Up/Down/Home/End move the cursor,
//! Space toggles selection, clicking a header sorts that column, `l`
//! simulates a loading refresh and Esc quits.

use std::fs::File;
use std::io;
use std::time::Duration;

use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind, MouseButton,
    MouseEventKind,
};
use crossterm::execute;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::Paragraph;
use ratatui::{DefaultTerminal, Frame};
use simplelog::{Config, LevelFilter, WriteLogger};

use formgrid::events::ClickEvent;
use formgrid::keybinds::{Key, KeyCombo};
use formgrid::widgets::{
    Alignment, Column, DataTable, DataTableState, SortValue, TableEvent, TableRow,
};

#[derive(Debug, Clone)]
struct User {
    id: u32,
    name: &'static str,
    role: &'static str,
    age: u32,
}

impl TableRow for User {
    type Id = u32;

    fn id(&self) -> u32 {
        self.id
    }

    fn cell(&self, data_index: &str) -> String {
        match data_index {
            "name" => self.name.to_string(),
            "role" => self.role.to_string(),
            "age" => self.age.to_string(),
            _ => String::new(),
        }
    }

    fn sort_value(&self, data_index: &str) -> SortValue {
        match data_index {
            "age" => self.age.into(),
            other => self.cell(other).into(),
        }
    }
}

fn users() -> Vec<User> {
    vec![
        User { id: 1, name: "Robin", role: "Admin", age: 34 },
        User { id: 2, name: "Alex", role: "Editor", age: 28 },
        User { id: 3, name: "Sam", role: "Viewer", age: 41 },
        User { id: 4, name: "Kim", role: "Editor", age: 35 },
        User { id: 5, name: "Jo", role: "Viewer", age: 23 },
    ]
}

fn columns() -> Vec<Column> {
    vec![
        Column::new("name", "Name").width(16).sortable(),
        Column::new("role", "Role").width(12).sortable(),
        Column::new("age", "Age")
            .width(6)
            .align(Alignment::Right)
            .sortable(),
    ]
}

struct App {
    rows: Vec<User>,
    columns: Vec<Column>,
    state: DataTableState<u32>,
    loading: bool,
    selected: usize,
}

impl App {
    fn new() -> Self {
        Self {
            rows: users(),
            columns: columns(),
            state: DataTableState::new(),
            loading: false,
            selected: 0,
        }
    }

    fn apply(&mut self, event: Option<TableEvent<User>>) {
        match event {
            Some(TableEvent::SortChanged { data_index, ascending }) => {
                log::info!("sorted by {data_index}, ascending={ascending}");
            }
            Some(TableEvent::SelectionChanged(rows)) => {
                self.selected = rows.len();
            }
            None => {}
        }
    }
}

fn areas(screen: Rect) -> (Rect, Rect) {
    let [table, footer] =
        Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]).areas(screen);
    (table, footer)
}

fn draw(frame: &mut Frame, app: &mut App) {
    let (table_area, footer_area) = areas(frame.area());
    let table = DataTable::new(&app.rows, &app.columns)
        .selectable(true)
        .loading(app.loading)
        .empty_text("No users");
    frame.render_stateful_widget(table, table_area, &mut app.state);

    let footer = Paragraph::new(format!(
        "{} selected | space select, click headers to sort, l load, esc quit",
        app.selected
    ))
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, footer_area);
}

fn run(terminal: &mut DefaultTerminal, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|frame| draw(frame, app))?;

        if !event::poll(Duration::from_millis(100))? {
            if app.loading {
                app.state.tick();
            }
            continue;
        }
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                let combo: KeyCombo = key.into();
                match combo.key {
                    Key::Escape => return Ok(()),
                    Key::Char('l') if !combo.modifiers.any() => {
                        app.loading = !app.loading;
                    }
                    _ => {
                        let table = DataTable::new(&app.rows, &app.columns)
                            .selectable(true)
                            .loading(app.loading);
                        let event = table.handle_key(&combo, &mut app.state);
                        app.apply(event);
                    }
                }
            }
            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                let size = terminal.size()?;
                let (table_area, _) = areas(Rect::new(0, 0, size.width, size.height));
                let click = ClickEvent::at(mouse.column, mouse.row);
                let table = DataTable::new(&app.rows, &app.columns)
                    .selectable(true)
                    .loading(app.loading);
                let event = table.handle_click(&click, table_area, &mut app.state);
                app.apply(event);
            }
            _ => {}
        }
    }
}

fn main() -> io::Result<()> {
    let _ = WriteLogger::init(
        LevelFilter::Debug,
        Config::default(),
        File::create("users-demo.log")?,
    );

    let mut terminal = ratatui::init();
    execute!(io::stdout(), EnableMouseCapture)?;
    let result = run(&mut terminal, &mut App::new());
    let _ = execute!(io::stdout(), DisableMouseCapture);
    ratatui::restore();
    result
}
