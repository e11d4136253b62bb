use ratatui::layout::Rect;

use crate::config::UiConfig;
use crate::domain::Entry;
use crate::tui::detail::DetailPane;
use crate::tui::event::Action;
use crate::tui::list::{ArticleList, Direction, ListEvent};

/// Which region currently receives navigation input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    List,
    Detail,
}

/// The reader screen: owns the entry store, the article list and the detail
/// pane, routes list events to detail updates, and manages focus handoff.
pub struct Reader {
    pub feed_title: String,
    entries: Vec<Entry>,
    pub list: ArticleList,
    pub detail: DetailPane,
    pub focus: Focus,
    pub help_visible: bool,
    pub should_quit: bool,
    pub help_text: String,
    /// Screen region the list occupied on the last draw, for click hit tests.
    pub list_area: Option<Rect>,
}

impl Reader {
    pub fn new(feed_title: String, entries: Vec<Entry>, config: &UiConfig) -> Self {
        let mut list = ArticleList::new();
        for (i, entry) in entries.iter().enumerate() {
            list.append(entry.display_title().to_string(), i);
        }

        let mut reader = Self {
            feed_title,
            entries,
            list,
            detail: DetailPane::new(config.placeholder.clone()),
            focus: Focus::List,
            help_visible: false,
            should_quit: false,
            help_text: config.help.clone(),
            list_area: None,
        };
        reader.route_list_events();
        reader
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Apply one decoded key action. The help overlay, when visible,
    /// swallows everything except its dismiss keys.
    pub fn update(&mut self, action: Action) {
        if self.help_visible {
            if matches!(action, Action::Help | Action::Dismiss | Action::Quit) {
                self.help_visible = false;
            }
            return;
        }

        match action {
            Action::Quit => {
                self.should_quit = true;
            }
            Action::Help => {
                self.help_visible = true;
            }
            Action::CursorUp => match self.focus {
                Focus::List => self.list.navigate(Direction::Up),
                Focus::Detail => self.detail.scroll_up(),
            },
            Action::CursorDown => match self.focus {
                Focus::List => self.list.navigate(Direction::Down),
                Focus::Detail => self.detail.scroll_down(),
            },
            Action::JumpToTop => match self.focus {
                Focus::List => self.list.navigate(Direction::Home),
                Focus::Detail => self.detail.scroll_home(),
            },
            Action::JumpToBottom => match self.focus {
                Focus::List => self.list.navigate(Direction::End),
                Focus::Detail => self.detail.scroll_end(),
            },
            Action::Select => {
                if self.focus == Focus::List {
                    self.list.select_current();
                }
            }
            Action::MoveFocus => {
                // Nothing meaningful to focus until an article is shown.
                if !self.detail.is_placeholder() {
                    self.focus = match self.focus {
                        Focus::List => Focus::Detail,
                        Focus::Detail => Focus::List,
                    };
                }
            }
            Action::Dismiss | Action::None => {}
        }

        self.route_list_events();
    }

    /// A left click inside the list pane focuses the list and clicks the
    /// row under the cursor. Clicks elsewhere are ignored.
    pub fn handle_click(&mut self, column: u16, row: u16) {
        if self.help_visible {
            return;
        }
        let Some(area) = self.list_area else {
            return;
        };
        if column < area.x || column >= area.x + area.width {
            return;
        }
        // Exclude the border rows.
        if row <= area.y || row + 1 >= area.y + area.height {
            return;
        }

        self.focus = Focus::List;
        let clicked = self.list.state.offset() + (row - area.y - 1) as usize;
        self.list.click(clicked);
        self.route_list_events();
    }

    /// Drain the list's event queue. Selection events terminate here: focus
    /// moves to the detail pane and the selected entry's fields are shown.
    fn route_list_events(&mut self) {
        while let Some(event) = self.list.pop_event() {
            match event {
                // The list already reflects the new highlight; the next draw
                // renders it. Nothing further to route.
                ListEvent::Highlighted(_) => {}
                ListEvent::Selected(entry_index) => {
                    if let Some(entry) = self.entries.get(entry_index) {
                        self.focus = Focus::Detail;
                        self.detail.update(
                            entry.display_title(),
                            entry.display_date(),
                            &entry.summary,
                        );
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(title: &str, body: &str, date: &str) -> Entry {
        Entry::new(
            Some(title.to_string()),
            body.to_string(),
            Some(date.to_string()),
        )
    }

    fn reader_with(entries: Vec<Entry>) -> Reader {
        Reader::new("Test Feed".into(), entries, &UiConfig::default())
    }

    fn three_entry_reader() -> Reader {
        reader_with(vec![
            entry("A", "body a", "date a"),
            entry("B", "body b", "date b"),
            entry("C", "body c", "date c"),
        ])
    }

    #[test]
    fn test_construction_selects_first_entry() {
        let reader = three_entry_reader();
        assert_eq!(reader.list.len(), 3);
        assert_eq!(reader.list.index(), Some(0));
        assert_eq!(reader.focus, Focus::List);
        assert!(reader.detail.is_placeholder());
    }

    #[test]
    fn test_select_updates_detail_and_focus() {
        let mut reader = three_entry_reader();
        reader.update(Action::CursorDown);
        reader.update(Action::CursorDown);
        assert_eq!(reader.list.index(), Some(2));

        // Already at the last index: stays put.
        reader.update(Action::CursorDown);
        assert_eq!(reader.list.index(), Some(2));

        reader.update(Action::Select);
        assert_eq!(reader.focus, Focus::Detail);
        assert!(!reader.detail.is_placeholder());
        let content = reader.detail.content().unwrap();
        assert_eq!(content.title, "C");
        assert_eq!(content.date, "date c");
        assert_eq!(content.body, "body c");
    }

    #[test]
    fn test_detail_matches_entry_store_fields() {
        let mut reader = three_entry_reader();
        reader.update(Action::CursorDown);
        reader.update(Action::Select);

        let stored = reader.entries()[1].clone();
        let content = reader.detail.content().unwrap();
        assert_eq!(content.title, stored.display_title());
        assert_eq!(content.date, stored.display_date());
        assert_eq!(content.body, stored.summary);
    }

    #[test]
    fn test_empty_feed_stays_in_placeholder_mode() {
        let mut reader = reader_with(Vec::new());
        assert!(reader.list.is_empty());
        assert_eq!(reader.list.index(), None);

        reader.update(Action::CursorDown);
        reader.update(Action::Select);
        assert_eq!(reader.list.index(), None);
        assert!(reader.detail.is_placeholder());
        assert_eq!(reader.focus, Focus::List);
    }

    #[test]
    fn test_move_focus_ignored_while_placeholder() {
        let mut reader = three_entry_reader();
        reader.update(Action::MoveFocus);
        assert_eq!(reader.focus, Focus::List);
    }

    #[test]
    fn test_move_focus_toggles_after_first_selection() {
        let mut reader = three_entry_reader();
        reader.update(Action::Select);
        assert_eq!(reader.focus, Focus::Detail);

        reader.update(Action::MoveFocus);
        assert_eq!(reader.focus, Focus::List);
        reader.update(Action::MoveFocus);
        assert_eq!(reader.focus, Focus::Detail);
    }

    #[test]
    fn test_cursor_scrolls_detail_when_it_has_focus() {
        let mut reader = reader_with(vec![entry("A", "l1\nl2\nl3\nl4", "d")]);
        reader.update(Action::Select);
        assert_eq!(reader.focus, Focus::Detail);

        reader.update(Action::CursorDown);
        reader.update(Action::CursorDown);
        assert_eq!(reader.detail.scroll, 2);
        reader.update(Action::JumpToBottom);
        assert_eq!(reader.detail.scroll, 3);
        reader.update(Action::JumpToTop);
        assert_eq!(reader.detail.scroll, 0);
        // The list highlight never moved.
        assert_eq!(reader.list.index(), Some(0));
    }

    #[test]
    fn test_jump_to_bottom_goes_to_last_item() {
        let mut reader = three_entry_reader();
        reader.update(Action::JumpToBottom);
        assert_eq!(reader.list.index(), Some(2));
        reader.update(Action::JumpToTop);
        assert_eq!(reader.list.index(), Some(0));
    }

    #[test]
    fn test_help_opens_and_dismisses() {
        let mut reader = three_entry_reader();
        reader.update(Action::Help);
        assert!(reader.help_visible);

        // Input other than the dismiss keys is swallowed.
        reader.update(Action::CursorDown);
        assert!(reader.help_visible);
        assert_eq!(reader.list.index(), Some(0));

        reader.update(Action::Dismiss);
        assert!(!reader.help_visible);
    }

    #[test]
    fn test_every_dismiss_key_closes_help() {
        for action in [Action::Help, Action::Dismiss, Action::Quit] {
            let mut reader = three_entry_reader();
            reader.update(Action::Help);
            reader.update(action);
            assert!(!reader.help_visible);
            // Closing the help never quits the app.
            assert!(!reader.should_quit);
        }
    }

    #[test]
    fn test_help_restores_prior_state() {
        let mut reader = three_entry_reader();
        reader.update(Action::Select);
        reader.update(Action::Help);
        reader.update(Action::Dismiss);
        assert_eq!(reader.focus, Focus::Detail);
        assert_eq!(reader.detail.content().unwrap().title, "A");
    }

    #[test]
    fn test_quit_action_sets_should_quit() {
        let mut reader = three_entry_reader();
        reader.update(Action::Quit);
        assert!(reader.should_quit);
    }

    #[test]
    fn test_click_inside_list_selects_the_row() {
        let mut reader = three_entry_reader();
        // Simulated layout: list pane at origin, 20 wide, 10 tall.
        reader.list_area = Some(Rect::new(0, 0, 20, 10));

        // Row 0 is the border; row 2 is the second item.
        reader.handle_click(5, 2);
        assert_eq!(reader.list.index(), Some(1));
        assert_eq!(reader.focus, Focus::Detail);
        assert_eq!(reader.detail.content().unwrap().title, "B");
    }

    #[test]
    fn test_click_outside_list_is_ignored() {
        let mut reader = three_entry_reader();
        reader.list_area = Some(Rect::new(0, 0, 20, 10));

        reader.handle_click(25, 2);
        assert_eq!(reader.list.index(), Some(0));
        assert!(reader.detail.is_placeholder());
    }

    #[test]
    fn test_click_below_last_item_is_ignored() {
        let mut reader = three_entry_reader();
        reader.list_area = Some(Rect::new(0, 0, 20, 10));

        reader.handle_click(5, 8);
        assert_eq!(reader.list.index(), Some(0));
        assert!(reader.detail.is_placeholder());
    }
}
