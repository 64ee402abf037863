use super::*;

fn typed(text: &str) -> InputFieldState {
    let mut field = InputFieldState::default();
    for ch in text.chars() {
        field.apply(InputAction::Insert(ch));
    }
    field
}

#[test]
fn insert_and_backspace_track_cursor() {
    let mut field = typed("héllo");
    assert_eq!(field.value(), "héllo");
    assert_eq!(field.cursor(), "héllo".len());

    assert!(field.apply(InputAction::Backspace));
    assert_eq!(field.value(), "héll");

    field.apply(InputAction::Home);
    field.apply(InputAction::Right);
    field.apply(InputAction::Right);
    assert_eq!(field.cursor(), "hé".len());
    assert!(field.apply(InputAction::Backspace));
    assert_eq!(field.value(), "hll");
    assert_eq!(field.cursor(), 1);
}

#[test]
fn delete_removes_char_under_cursor() {
    let mut field = typed("abc");
    field.apply(InputAction::Home);
    assert!(field.apply(InputAction::Delete));
    assert_eq!(field.value(), "bc");
    field.apply(InputAction::End);
    assert!(!field.apply(InputAction::Delete));
}

#[test]
fn insert_respects_char_limit() {
    let mut field = InputFieldState::new(3);
    for ch in "abcd".chars() {
        field.apply(InputAction::Insert(ch));
    }
    assert_eq!(field.value(), "abc");
    assert!(!field.apply(InputAction::Insert('z')));
}

#[test]
fn paste_strips_newlines_and_truncates() {
    let mut field = InputFieldState::new(8);
    field.apply(InputAction::Insert('>'));
    assert!(field.apply(InputAction::Paste("http://\nexample".to_string())));
    assert_eq!(field.value(), ">http://");
}

#[test]
fn clear_to_start_keeps_tail() {
    let mut field = typed("hello world");
    for _ in 0..5 {
        field.apply(InputAction::Left);
    }
    assert!(field.apply(InputAction::ClearToStart));
    assert_eq!(field.value(), "world");
    assert_eq!(field.cursor(), 0);
    assert!(!field.apply(InputAction::ClearToStart));
}

#[test]
fn reset_keeps_placeholder() {
    let mut field = typed("x");
    field.focus("Enter note title...");
    field.reset();
    assert_eq!(field.value(), "");
    assert_eq!(field.cursor(), 0);
    assert_eq!(field.placeholder(), "Enter note title...");
    assert!(field.is_focused());
}
