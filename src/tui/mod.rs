pub mod app;
pub mod detail;
pub mod event;
pub mod help;
pub mod layout;
pub mod list;

use std::io::{self, Stdout};

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, MouseButton, MouseEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::app::Result;
use crate::config::UiConfig;
use crate::domain::Entry;

use self::app::Reader;
use self::event::{Action, AppEvent, EventHandler};

type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Run the interactive reader until the user quits. Entries were loaded
/// before this point; the loop itself never touches the network.
pub fn run(feed_title: String, entries: Vec<Entry>, config: UiConfig) -> Result<()> {
    let mut terminal = setup_terminal()?;
    let result = run_app(&mut terminal, feed_title, entries, config);
    restore_terminal(&mut terminal)?;
    result
}

fn setup_terminal() -> Result<Tui> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

fn restore_terminal(terminal: &mut Tui) -> Result<()> {
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;
    Ok(())
}

fn run_app(
    terminal: &mut Tui,
    feed_title: String,
    entries: Vec<Entry>,
    config: UiConfig,
) -> Result<()> {
    let event_handler = EventHandler::new(config.tick_rate);
    let mut reader = Reader::new(feed_title, entries, &config);

    loop {
        terminal.draw(|frame| layout::render(frame, &mut reader))?;

        match event_handler.next()? {
            AppEvent::Key(key) => {
                reader.update(Action::from(key));
            }
            AppEvent::Mouse(mouse) => {
                if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
                    reader.handle_click(mouse.column, mouse.row);
                }
            }
            AppEvent::Tick => {}
        }

        if reader.should_quit {
            break;
        }
    }

    Ok(())
}
