use std::time::Duration;

const DEFAULT_PLACEHOLDER: &str = "Click on an article to display its contents.";

const DEFAULT_HELP: &str = "\
Navigation

  up / k          highlight the previous article
  down / j        highlight the next article
  g / G           jump to the first / last article
  enter / o / O   open the highlighted article
  h / l           move focus between the list and the article
  left / right    move focus between the list and the article

Reading

  up / k          scroll the article up
  down / j        scroll the article down
  g / G           scroll to the top / bottom

Other

  ?               show this help
  escape space q  close this help
  q / ctrl-c      quit";

/// Everything the UI layer treats as fixed for a session, passed at
/// construction instead of read from module globals.
#[derive(Debug, Clone)]
pub struct UiConfig {
    /// Detail pane text shown before any article has been selected.
    pub placeholder: String,
    /// Body of the help overlay.
    pub help: String,
    /// Poll interval for the terminal event loop.
    pub tick_rate: Duration,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            help: DEFAULT_HELP.to_string(),
            tick_rate: Duration::from_millis(100),
        }
    }
}
