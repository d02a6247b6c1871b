//! Compose screen drawing.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Wrap};

use crate::tui::state::{App, ComposeScreen};
use crate::tui::theme::UiTheme;
use crate::tui::widgets::footer::draw_footer;

pub(crate) fn draw_compose(area: Rect, f: &mut ratatui::Frame, app: &App, theme: UiTheme) {
    let Some(compose) = app.compose.as_ref() else {
        return;
    };

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Min(6),
            Constraint::Length(4),
            Constraint::Length(1),
        ])
        .split(area);

    let accent = theme.accent_for(compose.theme.kind);

    let header = Paragraph::new(Text::from(vec![
        Line::from(Span::styled(
            compose.theme.copy.heading,
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled(
                format!("{} {}", compose.card.icon, compose.card.title),
                Style::default().fg(theme.text),
            ),
            Span::styled(
                format!("   [{}]", compose.mode.label()),
                Style::default().fg(theme.text_dim),
            ),
        ]),
        Line::from(Span::styled(
            compose.card.subtitle,
            Style::default().fg(theme.muted),
        )),
    ]))
    .wrap(Wrap { trim: true });
    f.render_widget(header, layout[0]);

    draw_text_input(layout[1], f, compose, &theme);
    draw_status(
        layout[2],
        f,
        compose,
        &theme,
        accent,
        app.animation.spinner_char(),
    );

    let hints: &[(&str, &str)] = if compose.is_submitting() {
        &[]
    } else if compose.picker.is_some() {
        &[("↑/↓", "Photo"), ("Enter", "Attach"), ("Esc", "Cancel")]
    } else {
        &[
            ("Type", "Write"),
            ("Tab", "Mode"),
            ("Ctrl+P", "Photo"),
            ("Ctrl+X", "Remove photo"),
            ("F5", "Submit"),
            ("Esc", "Close"),
        ]
    };
    draw_footer(layout[3], f, &theme, hints);

    if compose.picker.is_some() {
        super::picker::draw_picker_overlay(layout[1], f, compose, &theme);
    }
}

fn draw_text_input(area: Rect, f: &mut ratatui::Frame, compose: &ComposeScreen, theme: &UiTheme) {
    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", compose.theme.copy.input_label),
            Style::default().fg(theme.text_dim),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.border));

    let body = if compose.draft.text.is_empty() {
        Text::from(Line::from(Span::styled(
            compose.theme.copy.placeholder,
            Style::default().fg(theme.muted),
        )))
    } else {
        Text::from(compose.draft.text.as_str())
    };

    let para = Paragraph::new(body).block(block).wrap(Wrap { trim: false });
    f.render_widget(para, area);
}

fn draw_status(
    area: Rect,
    f: &mut ratatui::Frame,
    compose: &ComposeScreen,
    theme: &UiTheme,
    accent: ratatui::style::Color,
    spinner: char,
) {
    let photo_line = match compose.draft.image.as_deref() {
        Some(uri) => Line::from(vec![
            Span::styled("Photo: ", Style::default().fg(theme.text_dim)),
            Span::styled(uri.to_string(), Style::default().fg(theme.good)),
        ]),
        None => Line::from(Span::styled(
            "No photo attached",
            Style::default().fg(theme.muted),
        )),
    };

    let second = if compose.is_submitting() {
        Line::from(vec![
            Span::styled(format!(" {spinner} "), Style::default().fg(accent)),
            Span::styled(
                "Submitting...",
                Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
            ),
        ])
    } else {
        Line::from(Span::styled(compose.tip(), Style::default().fg(accent)))
    };

    let para = Paragraph::new(Text::from(vec![photo_line, second])).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(theme.border)),
    );
    f.render_widget(para, area);
}
