use formgrid::events::ClickEvent;
use formgrid::keybinds::{Key, KeyCombo};
use formgrid::widgets::{
    Column, DataTable, DataTableState, SortValue, TableEvent, TableMode, TableRow,
};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::StatefulWidget;

#[derive(Clone, Debug, PartialEq)]
struct User {
    id: u32,
    name: &'static str,
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
        User { id: 1, name: "B", age: 30 },
        User { id: 2, name: "A", age: 25 },
    ]
}

fn columns() -> Vec<Column> {
    vec![
        Column::new("name", "Name").width(8).sortable(),
        Column::new("age", "Age").width(6),
    ]
}

fn ids(rows: &[User], order: &[usize]) -> Vec<u32> {
    order.iter().map(|&i| rows[i].id).collect()
}

fn row_text(buf: &Buffer, y: u16) -> String {
    (0..buf.area.width)
        .map(|x| buf.cell((x, y)).unwrap().symbol())
        .collect()
}

#[test]
fn test_header_click_sorts_ascending_then_descending() {
    let rows = users();
    let cols = columns();
    let table = DataTable::new(&rows, &cols);
    let mut state = DataTableState::new();

    table.toggle_sort(0, &mut state).unwrap();
    assert_eq!(ids(&rows, &table.view_order(&state)), vec![2, 1]);

    table.toggle_sort(0, &mut state).unwrap();
    assert_eq!(ids(&rows, &table.view_order(&state)), vec![1, 2]);
}

#[test]
fn test_ascending_and_descending_are_reverses() {
    let rows = users();
    let cols = columns();
    let table = DataTable::new(&rows, &cols);
    let mut state = DataTableState::new();

    table.toggle_sort(0, &mut state);
    let ascending = table.view_order(&state);
    table.toggle_sort(0, &mut state);
    let mut descending = table.view_order(&state);
    descending.reverse();

    assert_eq!(ascending, descending);
}

#[test]
fn test_switching_sort_column_resets_to_ascending() {
    let rows = users();
    let cols = vec![
        Column::new("name", "Name").width(8).sortable(),
        Column::new("age", "Age").width(6).sortable(),
    ];
    let table = DataTable::new(&rows, &cols);
    let mut state = DataTableState::new();

    // Name descending first.
    table.toggle_sort(0, &mut state);
    table.toggle_sort(0, &mut state);
    assert_eq!(ids(&rows, &table.view_order(&state)), vec![1, 2]);

    // Activating a different column starts over at ascending.
    let event = table.toggle_sort(1, &mut state).unwrap();
    assert_eq!(
        event,
        TableEvent::SortChanged {
            data_index: "age".to_string(),
            ascending: true,
        }
    );
    assert_eq!(ids(&rows, &table.view_order(&state)), vec![2, 1]);
}

#[test]
fn test_sort_is_stable_on_ties() {
    let rows = vec![
        User { id: 1, name: "same", age: 1 },
        User { id: 2, name: "same", age: 2 },
        User { id: 3, name: "aaaa", age: 3 },
    ];
    let cols = columns();
    let table = DataTable::new(&rows, &cols);
    let mut state = DataTableState::new();

    table.toggle_sort(0, &mut state);
    // Tied "same" rows keep their input order after "aaaa".
    assert_eq!(ids(&rows, &table.view_order(&state)), vec![3, 1, 2]);
}

#[test]
fn test_sort_never_mutates_rows() {
    let rows = users();
    let original = rows.clone();
    let cols = columns();
    let table = DataTable::new(&rows, &cols);
    let mut state = DataTableState::new();

    table.toggle_sort(0, &mut state);
    table.view_order(&state);
    assert_eq!(rows, original);
}

#[test]
fn test_non_sortable_header_is_a_noop() {
    let rows = users();
    let cols = columns();
    let table = DataTable::new(&rows, &cols);
    let mut state = DataTableState::new();

    assert!(table.toggle_sort(1, &mut state).is_none());
    assert!(state.sort.is_none());
    assert_eq!(ids(&rows, &table.view_order(&state)), vec![1, 2]);
}

#[test]
fn test_toggle_pair_restores_selection() {
    let rows = users();
    let cols = columns();
    let table = DataTable::new(&rows, &cols).selectable(true);
    let mut state = DataTableState::new();

    let selected = table.toggle_select(0, &mut state).unwrap();
    assert_eq!(selected, TableEvent::SelectionChanged(vec![rows[0].clone()]));

    let deselected = table.toggle_select(0, &mut state).unwrap();
    assert_eq!(deselected, TableEvent::SelectionChanged(vec![]));
    assert!(state.selection.is_empty());
}

#[test]
fn test_selection_resolves_full_rows_in_input_order() {
    let rows = users();
    let cols = columns();
    let table = DataTable::new(&rows, &cols).selectable(true);
    let mut state = DataTableState::new();

    table.toggle_select(1, &mut state);
    let event = table.toggle_select(0, &mut state).unwrap();
    // Both rows selected; resolved against the data array in input order.
    assert_eq!(
        event,
        TableEvent::SelectionChanged(vec![rows[0].clone(), rows[1].clone()])
    );
}

#[test]
fn test_selection_is_keyed_by_id_across_resort() {
    let rows = users();
    let cols = columns();
    let table = DataTable::new(&rows, &cols).selectable(true);
    let mut state = DataTableState::new();

    table.toggle_select(1, &mut state); // id 2
    table.toggle_sort(0, &mut state);
    assert!(state.selection.is_selected(&2));
    assert_eq!(table.selected_rows(&state), vec![rows[1].clone()]);
}

#[test]
fn test_selection_ignored_when_not_selectable() {
    let rows = users();
    let cols = columns();
    let table = DataTable::new(&rows, &cols);
    let mut state = DataTableState::new();

    assert!(table.toggle_select(0, &mut state).is_none());
}

#[test]
fn test_loading_takes_priority_over_rows() {
    let rows = users();
    let cols = columns();
    let table = DataTable::new(&rows, &cols).loading(true);
    assert_eq!(table.mode(), TableMode::Loading);

    let mut state = DataTableState::new();
    let mut buf = Buffer::empty(Rect::new(0, 0, 30, 6));
    table.render(buf.area, &mut buf, &mut state);
    let text: String = (0..6).map(|y| row_text(&buf, y)).collect();
    assert!(text.contains("Loading"));
    assert!(!text.contains("Name"));
}

#[test]
fn test_empty_placeholder_without_rows() {
    let rows: Vec<User> = Vec::new();
    let cols = columns();
    let table = DataTable::new(&rows, &cols);
    assert_eq!(table.mode(), TableMode::Empty);

    let mut state = DataTableState::new();
    let mut buf = Buffer::empty(Rect::new(0, 0, 30, 6));
    table.render(buf.area, &mut buf, &mut state);
    let text: String = (0..6).map(|y| row_text(&buf, y)).collect();
    assert!(text.contains("No data"));
}

#[test]
fn test_populated_render_shows_sorted_rows_and_indicator() {
    let rows = users();
    let cols = columns();
    let mut state = DataTableState::new();
    let table = DataTable::new(&rows, &cols);
    table.toggle_sort(0, &mut state);

    let mut buf = Buffer::empty(Rect::new(0, 0, 20, 4));
    DataTable::new(&rows, &cols).render(buf.area, &mut buf, &mut state);

    assert!(row_text(&buf, 0).contains("Name ▲"));
    assert!(row_text(&buf, 1).starts_with("A"));
    assert!(row_text(&buf, 2).starts_with("B"));
}

#[test]
fn test_checkbox_render_reflects_selection() {
    let rows = users();
    let cols = columns();
    let table = DataTable::new(&rows, &cols).selectable(true);
    let mut state = DataTableState::new();
    table.toggle_select(0, &mut state);

    let mut buf = Buffer::empty(Rect::new(0, 0, 20, 4));
    DataTable::new(&rows, &cols)
        .selectable(true)
        .render(buf.area, &mut buf, &mut state);

    assert!(row_text(&buf, 1).starts_with("■ B"));
    assert!(row_text(&buf, 2).starts_with("□ A"));
}

#[test]
fn test_click_on_header_and_checkbox() {
    let rows = users();
    let cols = columns();
    let table = DataTable::new(&rows, &cols).selectable(true);
    let mut state = DataTableState::new();
    let area = Rect::new(0, 0, 20, 4);

    // Header click on the name column (checkbox cells shift columns right).
    let event = table.handle_click(&ClickEvent::at(3, 0), area, &mut state);
    assert!(matches!(
        event,
        Some(TableEvent::SortChanged { ascending: true, .. })
    ));

    // Click the checkbox cell of the first displayed row ("A", id 2).
    let event = table.handle_click(&ClickEvent::at(0, 1), area, &mut state);
    assert_eq!(
        event,
        Some(TableEvent::SelectionChanged(vec![rows[1].clone()]))
    );

    // A click outside the checkbox cell only moves the cursor.
    let event = table.handle_click(&ClickEvent::at(5, 2), area, &mut state);
    assert!(event.is_none());
    assert_eq!(state.cursor, Some(1));
}

#[test]
fn test_space_toggles_selection_at_cursor() {
    let rows = users();
    let cols = columns();
    let table = DataTable::new(&rows, &cols).selectable(true);
    let mut state = DataTableState::new();

    table.handle_key(&KeyCombo::key(Key::Down), &mut state);
    assert_eq!(state.cursor, Some(0));
    let event = table.handle_key(&KeyCombo::key(Key::Space), &mut state);
    assert_eq!(
        event,
        Some(TableEvent::SelectionChanged(vec![rows[0].clone()]))
    );
}

#[test]
fn test_stale_selection_preserved_until_pruned() {
    let rows = users();
    let cols = columns();
    let table = DataTable::new(&rows, &cols).selectable(true);
    let mut state = DataTableState::new();
    table.toggle_select(0, &mut state); // id 1

    // Data changes out from under the selection; the stale id stays...
    let shrunk = vec![rows[1].clone()];
    let table = DataTable::new(&shrunk, &cols).selectable(true);
    assert!(state.selection.is_selected(&1));
    assert!(table.selected_rows(&state).is_empty());

    // ...until the caller opts into pruning.
    state.prune(&shrunk);
    assert!(!state.selection.is_selected(&1));
}
