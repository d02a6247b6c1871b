//! Home screen: challenge catalog.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, BorderType, Borders, List, ListItem, Paragraph, Wrap};

use crate::challenge::KNOWN_CHALLENGES;
use crate::post::resolve_theme;
use crate::tui::state::App;
use crate::tui::theme::UiTheme;

pub(crate) fn draw_home(area: Rect, f: &mut ratatui::Frame, app: &App, theme: UiTheme) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    let posted = app.feed.len();
    let mut intro_lines = vec![
        Line::from(Span::styled(
            "Pick a challenge to post to",
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("Posts this session: {posted}"),
            Style::default().fg(theme.muted),
        )),
    ];
    if let Some(last) = app.feed.posts().last() {
        intro_lines.push(Line::from(Span::styled(
            format!("Last posted: {} {}", last.challenge.icon, last.challenge.title),
            Style::default().fg(theme.text_dim),
        )));
    }
    let intro = Paragraph::new(Text::from(intro_lines)).wrap(Wrap { trim: true });
    f.render_widget(intro, layout[0]);

    let items = KNOWN_CHALLENGES
        .iter()
        .enumerate()
        .map(|(idx, card)| {
            let selected = idx == app.home_cursor;
            let accent = theme.accent_for(resolve_theme(card.title).kind);
            let style = if selected {
                Style::default().fg(accent).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.text)
            };
            ListItem::new(vec![
                Line::from(vec![
                    Span::styled(if selected { " › " } else { "   " }, style),
                    Span::styled(format!("{} {}", card.icon, card.title), style),
                ]),
                Line::from(vec![
                    Span::raw("     "),
                    Span::styled(card.subtitle, Style::default().fg(theme.muted)),
                ]),
            ])
        })
        .collect::<Vec<_>>();

    let list = List::new(items).block(
        Block::default()
            .title(Span::styled(
                " Challenges ",
                Style::default().fg(theme.text_dim),
            ))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(theme.border)),
    );
    f.render_widget(list, layout[1]);

    crate::tui::widgets::footer::draw_footer(
        layout[2],
        f,
        &theme,
        &[("↑/↓", "Select"), ("Enter", "Compose"), ("Esc", "Quit")],
    );
}
