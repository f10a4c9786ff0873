//! Terminal rendering.

use ratatui::{
    layout::{Constraint, Direction, Layout},
    prelude::*,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

use crate::app::{App, Focus, MessageKind};

pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // search box
            Constraint::Min(7),    // user list
            Constraint::Length(1), // pagination controls
            Constraint::Length(3), // add-user form
            Constraint::Length(1), // status line
        ])
        .split(frame.size());

    render_search(frame, app, chunks[0]);
    render_users(frame, app, chunks[1]);
    render_pagination(frame, app, chunks[2]);
    render_form(frame, app, chunks[3]);
    render_status(frame, app, chunks[4]);
}

fn field_style(focused: bool) -> Style {
    if focused {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    }
}

fn render_search(frame: &mut Frame, app: &App, area: Rect) {
    let search = Paragraph::new(app.directory.search_term()).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Search users by name")
            .border_style(field_style(app.focus == Focus::Search)),
    );
    frame.render_widget(search, area);
}

fn render_users(frame: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .directory
        .visible_page()
        .into_iter()
        .map(|user| ListItem::new(format!("{} - {}", user.name, user.email)))
        .collect();

    let list = List::new(items).block(Block::default().borders(Borders::ALL).title("Users"));
    frame.render_widget(list, area);
}

fn render_pagination(frame: &mut Frame, app: &App, area: Rect) {
    // One control per page; none at all when nothing matches.
    let pages = app.directory.page_count();
    let current = app.directory.current_page();

    let mut spans = vec![Span::raw(" ")];
    for page in 1..=pages {
        let style = if page == current {
            Style::default().fg(Color::Black).bg(Color::Yellow)
        } else {
            Style::default().fg(Color::Yellow)
        };
        spans.push(Span::styled(format!(" {page} "), style));
        spans.push(Span::raw(" "));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_form(frame: &mut Frame, app: &App, area: Rect) {
    let fields = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let name = Paragraph::new(app.name_input.as_str()).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Name")
            .border_style(field_style(app.focus == Focus::Name)),
    );
    frame.render_widget(name, fields[0]);

    let email = Paragraph::new(app.email_input.as_str()).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Email")
            .border_style(field_style(app.focus == Focus::Email)),
    );
    frame.render_widget(email, fields[1]);
}

fn render_status(frame: &mut Frame, app: &App, area: Rect) {
    let line = match &app.message {
        Some(message) => {
            let style = match message.kind {
                MessageKind::Success => Style::default().fg(Color::Green),
                MessageKind::Error => Style::default().fg(Color::Red),
            };
            Line::from(Span::styled(message.text.clone(), style))
        }
        None => Line::from(Span::styled(
            "Tab: switch field | Left/Right: page | Enter: add user | Esc: quit",
            Style::default().fg(Color::DarkGray),
        )),
    };
    frame.render_widget(Paragraph::new(line), area);
}
