//! Photo picker overlay drawing.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, List, ListItem};

use super::error::centered_rect;
use crate::tui::state::ComposeScreen;
use crate::tui::theme::UiTheme;

pub(crate) fn draw_picker_overlay(
    area: Rect,
    f: &mut ratatui::Frame,
    compose: &ComposeScreen,
    theme: &UiTheme,
) {
    let Some(picker) = compose.picker.as_ref() else {
        return;
    };

    let overlay = centered_rect(80, 80, area);
    f.render_widget(Clear, overlay);

    let items = picker
        .photos
        .iter()
        .enumerate()
        .map(|(idx, path)| {
            let selected = idx == picker.cursor;
            let style = if selected {
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.text)
            };
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_else(|| path.display().to_string());
            ListItem::new(Line::from(vec![
                Span::styled(if selected { " › " } else { "   " }, style),
                Span::styled(name, style),
            ]))
        })
        .collect::<Vec<_>>();

    let list = List::new(items).block(
        Block::default()
            .title(Span::styled(
                " Pick a photo ",
                Style::default().fg(theme.text_dim),
            ))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(theme.accent)),
    );
    f.render_widget(list, overlay);
}
