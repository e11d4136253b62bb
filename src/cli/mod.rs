use clap::Parser;

/// Missing the URL argument is a usage error: clap prints usage to stderr
/// and exits non-zero before any UI is shown.
#[derive(Parser)]
#[command(name = "tidings")]
#[command(about = "A terminal RSS/Atom feed reader", long_about = None)]
pub struct Cli {
    /// URL of the feed to read
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_argument_is_required() {
        let result = Cli::try_parse_from(["tidings"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_url_argument_parses() {
        let cli = Cli::try_parse_from(["tidings", "https://example.com/feed.xml"]).unwrap();
        assert_eq!(cli.url, "https://example.com/feed.xml");
    }

    #[test]
    fn test_extra_arguments_are_rejected() {
        let result = Cli::try_parse_from(["tidings", "https://a.example", "https://b.example"]);
        assert!(result.is_err());
    }
}
