use std::collections::VecDeque;

use ratatui::widgets::ListState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Home,
    End,
}

/// Notifications produced by [`ArticleList`] and routed by the reader screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListEvent {
    /// Fired on every index-change request, including clamped moves that
    /// leave the index numerically unchanged. Carries the entry index of
    /// the newly highlighted item, or `None` when the list became empty.
    Highlighted(Option<usize>),
    /// The user committed to the item with this entry index.
    Selected(usize),
}

/// A display row: an entry's title plus its stable position in the entry
/// store. Only the highlight flag ever changes after creation.
#[derive(Debug)]
pub struct ArticleItem {
    pub title: String,
    pub entry_index: usize,
    pub highlighted: bool,
}

/// An ordered list of selectable articles with a single highlighted index.
///
/// Invariant: the index is `Some(i)` with `i < len` whenever the list is
/// non-empty, and `None` when it is empty. All mutation goes through
/// explicit methods which push their change notifications onto an event
/// queue; the reader screen drains and routes them.
pub struct ArticleList {
    items: Vec<ArticleItem>,
    index: Option<usize>,
    /// Scroll state for the ratatui list widget; kept in sync with `index`
    /// so the highlighted row stays visible.
    pub state: ListState,
    events: VecDeque<ListEvent>,
}

impl ArticleList {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            index: None,
            state: ListState::default(),
            events: VecDeque::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn index(&self) -> Option<usize> {
        self.index
    }

    pub fn items(&self) -> &[ArticleItem] {
        &self.items
    }

    pub fn highlighted_child(&self) -> Option<&ArticleItem> {
        self.items.get(self.index?)
    }

    pub fn pop_event(&mut self) -> Option<ListEvent> {
        self.events.pop_front()
    }

    /// Append an item to the end of the list. Appending to an empty list
    /// moves the highlight to index 0; otherwise the highlight is untouched.
    pub fn append(&mut self, title: String, entry_index: usize) {
        self.items.push(ArticleItem {
            title,
            entry_index,
            highlighted: false,
        });
        if self.items.len() == 1 {
            self.set_index(Some(0));
        }
    }

    /// Remove all items. The highlight becomes `None`.
    pub fn clear(&mut self) {
        self.items.clear();
        self.set_index(None);
    }

    /// Move the highlight, clamped into `[0, len - 1]`. Never wraps. On an
    /// empty list this is a silent no-op.
    pub fn navigate(&mut self, direction: Direction) {
        let current = match self.index {
            Some(i) => i,
            None => return,
        };
        let last = self.items.len() - 1;
        let candidate = match direction {
            Direction::Up => current.saturating_sub(1),
            Direction::Down => current + 1,
            Direction::Home => 0,
            Direction::End => last,
        };
        self.set_index(Some(candidate.min(last)));
    }

    /// Emit a Selected event for the highlighted item, if any.
    pub fn select_current(&mut self) {
        if let Some(item) = self.highlighted_child() {
            let entry_index = item.entry_index;
            self.events.push_back(ListEvent::Selected(entry_index));
        }
    }

    /// A click both highlights and selects the clicked row. Out-of-range
    /// rows (clicks below the last item) are ignored.
    pub fn click(&mut self, row: usize) {
        if row >= self.items.len() {
            return;
        }
        self.set_index(Some(row));
        let entry_index = self.items[row].entry_index;
        self.events.push_back(ListEvent::Selected(entry_index));
    }

    /// Apply an index change: swap the highlight flags, keep the widget
    /// scroll in sync, and fire Highlighted unconditionally so idempotent
    /// re-highlighting after structural changes still notifies.
    fn set_index(&mut self, new_index: Option<usize>) {
        if let Some(old) = self.index {
            if let Some(item) = self.items.get_mut(old) {
                item.highlighted = false;
            }
        }
        let highlighted_entry = match new_index {
            Some(new) => {
                let item = &mut self.items[new];
                item.highlighted = true;
                Some(item.entry_index)
            }
            None => None,
        };
        self.index = new_index;
        self.state.select(new_index);
        self.events.push_back(ListEvent::Highlighted(highlighted_entry));
    }
}

impl Default for ArticleList {
    fn default() -> Self {
        Self::new()
    }
}
