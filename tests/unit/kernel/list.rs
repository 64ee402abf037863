use super::*;
use std::path::PathBuf;

fn note(title: &str) -> NoteItem {
    NoteItem {
        path: PathBuf::from(format!("/notes/{title}.md")),
        title: title.to_string(),
    }
}

fn list_of(titles: &[&str]) -> NoteListState {
    NoteListState::new(titles.iter().map(|t| note(t)).collect())
}

#[test]
fn empty_list_has_no_selection() {
    let list = NoteListState::default();
    assert!(list.selected_item().is_none());
    assert_eq!(list.selected_index(), None);
}

#[test]
fn navigation_clamps_to_bounds() {
    let mut list = list_of(&["a", "b", "c"]);
    assert_eq!(list.selected_item().unwrap().title, "a");

    assert!(!list.apply(ListAction::Up));
    assert!(list.apply(ListAction::Down));
    assert!(list.apply(ListAction::End));
    assert_eq!(list.selected_item().unwrap().title, "c");
    assert!(!list.apply(ListAction::Down));
    assert!(list.apply(ListAction::Home));
    assert_eq!(list.selected_item().unwrap().title, "a");
}

#[test]
fn paging_scrolls_the_window() {
    let mut list = list_of(&["a", "b", "c", "d", "e"]);
    list.set_size(40, ITEM_HEIGHT * 2);
    assert_eq!(list.page_size(), 2);

    list.apply(ListAction::PageDown);
    list.apply(ListAction::Down);
    assert_eq!(list.selected_item().unwrap().title, "d");
    let page: Vec<&str> = list.page().map(|(_, item)| item.title.as_str()).collect();
    assert_eq!(page, ["c", "d"]);

    list.apply(ListAction::PageUp);
    let page: Vec<usize> = list.page().map(|(pos, _)| pos).collect();
    assert_eq!(list.selected_index(), Some(1));
    assert_eq!(page, [1, 2]);
}

#[test]
fn filter_matches_title_substring_case_insensitively() {
    let mut list = list_of(&["Meeting notes", "groceries", "team meeting"]);

    assert!(!list.apply(ListAction::FilterInput('m')));
    assert!(list.apply(ListAction::StartFilter));
    assert!(list.is_filtering());
    for ch in "MEET".chars() {
        list.apply(ListAction::FilterInput(ch));
    }
    assert_eq!(list.visible_len(), 2);
    assert_eq!(list.selected_item().unwrap().title, "Meeting notes");

    list.apply(ListAction::AcceptFilter);
    assert_eq!(list.filter_state(), FilterState::FilterApplied);
    list.apply(ListAction::Down);
    assert_eq!(list.selected_item().unwrap().title, "team meeting");

    assert!(list.apply(ListAction::ClearFilter));
    assert_eq!(list.filter_state(), FilterState::Unfiltered);
    assert_eq!(list.query(), "");
    assert_eq!(list.visible_len(), 3);
}

#[test]
fn filter_with_no_matches_has_no_selection() {
    let mut list = list_of(&["a", "b"]);
    list.apply(ListAction::StartFilter);
    list.apply(ListAction::FilterInput('z'));
    assert_eq!(list.visible_len(), 0);
    assert!(list.selected_item().is_none());

    list.apply(ListAction::FilterBackspace);
    assert_eq!(list.visible_len(), 2);
}

#[test]
fn accepting_empty_filter_returns_to_unfiltered() {
    let mut list = list_of(&["a"]);
    list.apply(ListAction::StartFilter);
    list.apply(ListAction::AcceptFilter);
    assert_eq!(list.filter_state(), FilterState::Unfiltered);
}

#[test]
fn refresh_keeps_selected_path() {
    let mut list = list_of(&["a", "b", "c"]);
    list.apply(ListAction::Down);
    assert_eq!(list.selected_item().unwrap().title, "b");

    list.set_items(vec![note("new"), note("a"), note("b"), note("c")]);
    assert_eq!(list.selected_item().unwrap().title, "b");

    list.set_items(vec![note("x")]);
    assert_eq!(list.selected_item().unwrap().title, "x");
}
