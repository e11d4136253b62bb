/// The triple the detail pane is currently showing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleContent {
    pub title: String,
    pub date: String,
    pub body: String,
}

/// The right-hand article pane. Starts in placeholder mode and leaves it
/// permanently on the first [`update`](DetailPane::update); after that only
/// which article is shown ever changes.
pub struct DetailPane {
    placeholder: String,
    content: Option<ArticleContent>,
    pub scroll: u16,
    body_lines: u16,
}

impl DetailPane {
    pub fn new(placeholder: String) -> Self {
        Self {
            placeholder,
            content: None,
            scroll: 0,
            body_lines: 0,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.content.is_none()
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    pub fn content(&self) -> Option<&ArticleContent> {
        self.content.as_ref()
    }

    /// Replace the displayed triple. No history is kept.
    pub fn update(&mut self, title: &str, date: &str, body: &str) {
        self.body_lines = body.lines().count() as u16;
        self.content = Some(ArticleContent {
            title: title.to_string(),
            date: date.to_string(),
            body: body.to_string(),
        });
        self.scroll = 0;
    }

    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }

    pub fn scroll_down(&mut self) {
        self.scroll = self.scroll.saturating_add(1).min(self.max_scroll());
    }

    pub fn scroll_home(&mut self) {
        self.scroll = 0;
    }

    pub fn scroll_end(&mut self) {
        self.scroll = self.max_scroll();
    }

    fn max_scroll(&self) -> u16 {
        self.body_lines.saturating_sub(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pane() -> DetailPane {
        DetailPane::new("nothing selected".into())
    }

    #[test]
    fn test_starts_in_placeholder_mode() {
        let pane = pane();
        assert!(pane.is_placeholder());
        assert!(pane.content().is_none());
        assert_eq!(pane.placeholder(), "nothing selected");
    }

    #[test]
    fn test_update_leaves_placeholder_permanently() {
        let mut pane = pane();
        pane.update("Title", "Date", "Body");
        assert!(!pane.is_placeholder());
        pane.update("Other", "", "");
        assert!(!pane.is_placeholder());
    }

    #[test]
    fn test_update_stores_the_triple() {
        let mut pane = pane();
        pane.update("Title", "Mon, 01 Jan 2024 00:00 UTC", "Body text");
        let content = pane.content().unwrap();
        assert_eq!(content.title, "Title");
        assert_eq!(content.date, "Mon, 01 Jan 2024 00:00 UTC");
        assert_eq!(content.body, "Body text");
    }

    #[test]
    fn test_reinvocation_replaces_the_triple() {
        let mut pane = pane();
        pane.update("First", "d1", "b1");
        pane.update("Second", "d2", "b2");
        assert_eq!(pane.content().unwrap().title, "Second");
    }

    #[test]
    fn test_update_resets_scroll() {
        let mut pane = pane();
        pane.update("A", "", "one\ntwo\nthree");
        pane.scroll_down();
        pane.scroll_down();
        assert_eq!(pane.scroll, 2);
        pane.update("B", "", "one\ntwo");
        assert_eq!(pane.scroll, 0);
    }

    #[test]
    fn test_scroll_clamps_to_body_length() {
        let mut pane = pane();
        pane.update("A", "", "one\ntwo\nthree");
        for _ in 0..10 {
            pane.scroll_down();
        }
        assert_eq!(pane.scroll, 2);
        pane.scroll_up();
        assert_eq!(pane.scroll, 1);
        pane.scroll_end();
        assert_eq!(pane.scroll, 2);
        pane.scroll_home();
        assert_eq!(pane.scroll, 0);
    }

    #[test]
    fn test_scroll_up_at_top_stays_at_top() {
        let mut pane = pane();
        pane.update("A", "", "one");
        pane.scroll_up();
        assert_eq!(pane.scroll, 0);
    }
}
