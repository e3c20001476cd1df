use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use formgrid::events::Modifiers;
use formgrid::keybinds::{Key, KeyCombo, KeybindError};

#[test]
fn test_parse_plain_key() {
    assert_eq!(KeyCombo::parse("u").unwrap(), KeyCombo::key(Key::Char('u')));
    assert_eq!(KeyCombo::parse("enter").unwrap(), KeyCombo::key(Key::Enter));
    assert_eq!(KeyCombo::parse("f5").unwrap(), KeyCombo::key(Key::F(5)));
}

#[test]
fn test_parse_with_modifiers() {
    assert_eq!(
        KeyCombo::parse("ctrl+u").unwrap(),
        KeyCombo::key(Key::Char('u')).ctrl()
    );
    assert_eq!(
        KeyCombo::parse("shift+tab").unwrap(),
        KeyCombo::key(Key::Tab).shift()
    );
    assert_eq!(
        KeyCombo::parse("ctrl+alt+delete").unwrap(),
        KeyCombo::key(Key::Delete).ctrl().alt()
    );
}

#[test]
fn test_parse_is_case_and_whitespace_tolerant() {
    assert_eq!(
        KeyCombo::parse("Ctrl + R").unwrap(),
        KeyCombo::key(Key::Char('r')).ctrl()
    );
}

#[test]
fn test_parse_rejects_bad_input() {
    assert_eq!(
        KeyCombo::parse(""),
        Err(KeybindError::Parse(String::new()))
    );
    assert_eq!(
        KeyCombo::parse("ctrl+"),
        Err(KeybindError::Parse("ctrl+".to_string()))
    );
    assert_eq!(
        KeyCombo::parse("ctrl+foo"),
        Err(KeybindError::UnknownKey("foo".to_string()))
    );
    assert_eq!(
        KeyCombo::parse("f13"),
        Err(KeybindError::UnknownKey("f13".to_string()))
    );
    // Two key tokens in one combo.
    assert!(matches!(
        KeyCombo::parse("a+b"),
        Err(KeybindError::Parse(_))
    ));
}

#[test]
fn test_from_crossterm_event() {
    let combo: KeyCombo = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::CONTROL).into();
    assert_eq!(combo, KeyCombo::key(Key::Char('a')).ctrl());

    let combo: KeyCombo = KeyEvent::new(KeyCode::Up, KeyModifiers::NONE).into();
    assert_eq!(combo, KeyCombo::key(Key::Up));

    // The space character maps to the dedicated Space key.
    let combo: KeyCombo = KeyEvent::new(KeyCode::Char(' '), KeyModifiers::NONE).into();
    assert_eq!(combo, KeyCombo::key(Key::Space));
}

#[test]
fn test_modifier_builders_compose() {
    let combo = KeyCombo::key(Key::Char('x')).ctrl().shift();
    assert_eq!(
        combo.modifiers,
        Modifiers {
            ctrl: true,
            shift: true,
            alt: false
        }
    );
    assert!(combo.modifiers.any());
}
