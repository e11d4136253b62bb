use chrono::{DateTime, Utc};
use feed_rs::parser;
use html_escape::decode_html_entities;

use crate::app::{Result, TidingsError};
use crate::domain::Entry;

/// Display width used when flattening entry HTML to plain text.
const TEXT_WIDTH: usize = 80;

#[derive(Debug, Clone)]
pub struct FeedMeta {
    pub title: Option<String>,
}

#[derive(Clone)]
pub struct Normalizer;

impl Default for Normalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Normalizer {
    pub fn new() -> Self {
        Self
    }

    /// Parse a raw feed document into its metadata and an ordered entry list.
    ///
    /// Entry order is the feed's document order; the index into the returned
    /// vec is the stable identifier the UI uses for selection.
    pub fn normalize(&self, body: &[u8]) -> Result<(FeedMeta, Vec<Entry>)> {
        let feed = parser::parse(body).map_err(|e| TidingsError::FeedParse(e.to_string()))?;

        let meta = FeedMeta {
            title: feed
                .title
                .map(|t| decode_html_entities(&t.content).to_string()),
        };

        let entries: Vec<Entry> = feed
            .entries
            .into_iter()
            .map(|entry| {
                let title = entry
                    .title
                    .map(|t| decode_html_entities(&t.content).to_string());

                let html = entry
                    .content
                    .and_then(|c| c.body)
                    .or(entry.summary.map(|s| s.content))
                    .unwrap_or_default();
                let summary = html2text::from_read(html.as_bytes(), TEXT_WIDTH)
                    .trim_end()
                    .to_string();

                let date = entry.published.or(entry.updated).map(format_date);

                Entry::new(title, summary, date)
            })
            .collect();

        Ok((meta, entries))
    }
}

/// Render the parsed timestamp to the display string once; the UI treats
/// dates as opaque text from here on.
fn format_date(dt: DateTime<Utc>) -> String {
    dt.format("%a, %d %b %Y %H:%M UTC").to_string()
}
