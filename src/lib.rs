//! # Tidings
//!
//! A terminal RSS/Atom feed reader for a single feed.
//!
//! ## Architecture
//!
//! ```text
//! Fetcher → Normalizer → Entry store → TUI
//! ```
//!
//! The feed is fetched and parsed exactly once at startup; the resulting
//! entries are immutable for the rest of the session. The interactive part
//! is a two-pane ratatui screen: an article list on the left, the selected
//! article on the right, with a dismissible help overlay.
//!
//! ## Quick Start
//!
//! ```bash
//! tidings https://blog.rust-lang.org/feed.xml
//! ```
//!
//! ## Modules
//!
//! - [`app`]: application context and error types
//! - [`cli`]: command-line interface (one positional feed URL)
//! - [`config`]: fixed per-session UI configuration
//! - [`domain`]: the [`Entry`](domain::Entry) model
//! - [`fetcher`]: one-shot HTTP fetching via reqwest
//! - [`normalizer`]: feed parsing and HTML-to-text conversion
//! - [`tui`]: the interactive reader

pub mod app;
pub mod cli;
pub mod config;
pub mod domain;
pub mod fetcher;
pub mod normalizer;
pub mod tui;
