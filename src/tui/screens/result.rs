//! Post-accepted result screen.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Wrap};

use crate::tui::animation::SUCCESS_CHECKMARK;
use crate::tui::state::App;
use crate::tui::theme::UiTheme;
use crate::tui::widgets::footer::draw_footer;

pub(crate) fn draw_result(area: Rect, f: &mut ratatui::Frame, app: &App, theme: UiTheme) {
    let state = match &app.result {
        Some(s) => s,
        None => return,
    };

    let mut lines: Vec<Line> = Vec::new();
    lines.push(Line::from(""));

    for art_line in SUCCESS_CHECKMARK {
        lines.push(Line::from(Span::styled(
            format!("       {art_line}"),
            Style::default().fg(theme.good).add_modifier(Modifier::BOLD),
        )));
    }
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled(
        format!("  {}", state.title),
        Style::default().fg(theme.good).add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(""));

    for line in state.body.lines() {
        lines.push(Line::from(Span::styled(
            format!("  {line}"),
            Style::default().fg(theme.text),
        )));
    }

    let block = Block::default()
        .title(Span::styled(
            " Posted ",
            Style::default().fg(theme.good).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.good));

    let body_area = Rect {
        height: area.height.saturating_sub(1),
        ..area
    };
    let para = Paragraph::new(Text::from(lines))
        .block(block)
        .wrap(Wrap { trim: false });
    f.render_widget(para, body_area);

    let footer_area = Rect {
        y: area.y + area.height.saturating_sub(1),
        height: 1,
        ..area
    };
    draw_footer(footer_area, f, &theme, &[("Enter", "Home"), ("Esc", "Quit")]);
}
