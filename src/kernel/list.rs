//! Selectable, filterable note list.
//!
//! `visible` holds indices into `items` that match the current filter, in scan
//! order. `selected` and `offset` index into `visible`.

use crate::kernel::action::ListAction;
use crate::kernel::notebook::NoteItem;

/// Terminal rows taken by one entry: title, path, spacer.
pub const ITEM_HEIGHT: u16 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterState {
    #[default]
    Unfiltered,
    /// Keys edit the filter query.
    Filtering,
    /// Query is fixed; keys navigate the matches.
    FilterApplied,
}

#[derive(Debug, Clone)]
pub struct NoteListState {
    items: Vec<NoteItem>,
    visible: Vec<usize>,
    query: String,
    filter: FilterState,
    selected: usize,
    offset: usize,
    width: u16,
    page_size: usize,
}

impl Default for NoteListState {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl NoteListState {
    pub fn new(items: Vec<NoteItem>) -> Self {
        let mut list = Self {
            items: Vec::new(),
            visible: Vec::new(),
            query: String::new(),
            filter: FilterState::Unfiltered,
            selected: 0,
            offset: 0,
            width: 80,
            page_size: 1,
        };
        list.set_items(items);
        list
    }

    /// Replaces the list with a fresh scan, keeping the selection on the same path when
    /// it survived.
    pub fn set_items(&mut self, items: Vec<NoteItem>) {
        let previous = self.selected_item().map(|item| item.path.clone());
        self.items = items;
        self.refilter();

        if let Some(path) = previous {
            if let Some(pos) = self
                .visible
                .iter()
                .position(|&idx| self.items[idx].path == path)
            {
                self.selected = pos;
            }
        }
        self.clamp();
    }

    pub fn set_size(&mut self, width: u16, height: u16) {
        self.width = width;
        self.page_size = usize::from((height / ITEM_HEIGHT).max(1));
        self.clamp();
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn items(&self) -> &[NoteItem] {
        &self.items
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn filter_state(&self) -> FilterState {
        self.filter
    }

    pub fn is_filtering(&self) -> bool {
        self.filter == FilterState::Filtering
    }

    pub fn visible_len(&self) -> usize {
        self.visible.len()
    }

    pub fn selected_index(&self) -> Option<usize> {
        (!self.visible.is_empty()).then_some(self.selected)
    }

    /// `None` when the list is empty or everything is filtered out.
    pub fn selected_item(&self) -> Option<&NoteItem> {
        self.visible
            .get(self.selected)
            .and_then(|&idx| self.items.get(idx))
    }

    /// Items on the current page, paired with their position among the matches.
    pub fn page(&self) -> impl Iterator<Item = (usize, &NoteItem)> + '_ {
        self.visible
            .iter()
            .enumerate()
            .skip(self.offset)
            .take(self.page_size)
            .map(|(pos, &idx)| (pos, &self.items[idx]))
    }

    pub fn apply(&mut self, action: ListAction) -> bool {
        let before = (self.selected, self.offset, self.filter, self.query.len());
        match action {
            ListAction::Up => self.selected = self.selected.saturating_sub(1),
            ListAction::Down => self.selected = self.selected.saturating_add(1),
            ListAction::PageUp => self.selected = self.selected.saturating_sub(self.page_size),
            ListAction::PageDown => {
                self.selected = self.selected.saturating_add(self.page_size)
            }
            ListAction::Home => self.selected = 0,
            ListAction::End => self.selected = self.visible.len().saturating_sub(1),
            ListAction::StartFilter => {
                self.filter = FilterState::Filtering;
            }
            ListAction::FilterInput(ch) => {
                if self.filter != FilterState::Filtering || ch.is_control() {
                    return false;
                }
                self.query.push(ch);
                self.refilter();
            }
            ListAction::FilterBackspace => {
                if self.filter != FilterState::Filtering || self.query.pop().is_none() {
                    return false;
                }
                self.refilter();
            }
            ListAction::AcceptFilter => {
                if self.filter != FilterState::Filtering {
                    return false;
                }
                self.filter = if self.query.is_empty() {
                    FilterState::Unfiltered
                } else {
                    FilterState::FilterApplied
                };
            }
            ListAction::ClearFilter => {
                if self.filter == FilterState::Unfiltered {
                    return false;
                }
                self.filter = FilterState::Unfiltered;
                self.query.clear();
                self.refilter();
            }
        }
        self.clamp();
        before != (self.selected, self.offset, self.filter, self.query.len())
    }

    fn refilter(&mut self) {
        let query = self.query.to_lowercase();
        self.visible = self
            .items
            .iter()
            .enumerate()
            .filter(|(_, item)| query.is_empty() || item.title.to_lowercase().contains(&query))
            .map(|(idx, _)| idx)
            .collect();
        self.selected = 0;
        self.offset = 0;
    }

    fn clamp(&mut self) {
        let last = self.visible.len().saturating_sub(1);
        self.selected = self.selected.min(last);
        if self.selected < self.offset {
            self.offset = self.selected;
        } else if self.selected >= self.offset + self.page_size {
            self.offset = self.selected + 1 - self.page_size;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/list.rs"]
mod tests;
