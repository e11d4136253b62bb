use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

use crate::tui::app::{Focus, Reader};
use crate::tui::help;

pub fn render(frame: &mut Frame, app: &mut Reader) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(0),    // Panes
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
        .split(chunks[1]);

    // Remember where the list landed so mouse clicks can be hit-tested.
    app.list_area = Some(panes[0]);

    render_header(frame, app, chunks[0]);
    render_list_pane(frame, app, panes[0]);
    render_detail_pane(frame, app, panes[1]);
    render_status_bar(frame, chunks[2]);

    if app.help_visible {
        help::render(frame, app);
    }
}

fn render_header(frame: &mut Frame, app: &Reader, area: Rect) {
    let header = Paragraph::new(Line::from(Span::styled(
        app.feed_title.as_str(),
        Style::default().add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
    .style(Style::default().fg(Color::White).bg(Color::DarkGray));

    frame.render_widget(header, area);
}

fn render_list_pane(frame: &mut Frame, app: &mut Reader, area: Rect) {
    let is_active = app.focus == Focus::List;
    let border_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let items: Vec<ListItem> = app
        .list
        .items()
        .iter()
        .map(|item| {
            let style = if item.highlighted && is_active {
                Style::default()
                    .bg(Color::Cyan)
                    .fg(Color::Black)
                    .add_modifier(Modifier::BOLD)
            } else if item.highlighted {
                Style::default().bg(Color::DarkGray)
            } else {
                Style::default()
            };

            ListItem::new(item.title.clone()).style(style)
        })
        .collect();

    let title = format!(" Articles ({}) ", app.list.len());
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style);

    let list = List::new(items).block(block);
    frame.render_stateful_widget(list, area, &mut app.list.state);
}

fn render_detail_pane(frame: &mut Frame, app: &Reader, area: Rect) {
    let is_active = app.focus == Focus::Detail;
    let border_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let block = Block::default()
        .title(" Article ")
        .borders(Borders::ALL)
        .border_style(border_style);

    let paragraph = match app.detail.content() {
        Some(content) => {
            let mut lines = Vec::new();

            lines.push(
                Line::from(Span::styled(
                    content.date.as_str(),
                    Style::default().add_modifier(Modifier::ITALIC),
                ))
                .alignment(Alignment::Right),
            );
            lines.push(Line::from(""));
            lines.push(
                Line::from(Span::styled(
                    content.title.as_str(),
                    Style::default().add_modifier(Modifier::BOLD),
                ))
                .alignment(Alignment::Center),
            );
            lines.push(Line::from(""));
            for line in content.body.lines() {
                lines.push(Line::from(line.to_string()));
            }

            Paragraph::new(Text::from(lines))
                .block(block)
                .wrap(Wrap { trim: false })
                .scroll((app.detail.scroll, 0))
        }
        None => {
            // Vertically center the placeholder message.
            let pad = area.height.saturating_sub(3) / 2;
            let mut lines = vec![Line::from(""); pad as usize];
            lines.push(
                Line::from(Span::styled(
                    app.detail.placeholder(),
                    Style::default().fg(Color::DarkGray),
                ))
                .alignment(Alignment::Center),
            );

            Paragraph::new(Text::from(lines))
                .block(block)
                .wrap(Wrap { trim: false })
        }
    };

    frame.render_widget(paragraph, area);
}

fn render_status_bar(frame: &mut Frame, area: Rect) {
    let hints = "j/k:Navigate  enter:Select  h/l:Focus  g/G:Top/Bottom  ?:Help  q:Quit";
    let paragraph =
        Paragraph::new(hints).style(Style::default().fg(Color::White).bg(Color::DarkGray));

    frame.render_widget(paragraph, area);
}
