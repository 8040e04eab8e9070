use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span, Text},
};

use super::theme::Theme;
use crate::app::{App, Focus};
use crate::color::Rgb;

use super::helpers::rgb_to_color;

pub fn build_history_text(app: &App) -> Text<'_> {
    if !app.history.is_visible() {
        return Text::from(Span::styled(
            "No picked colors yet. Press 'p' to pick one from the screen.",
            Style::default().fg(Theme::dim()),
        ));
    }

    let mut lines = vec![Line::from(Span::styled(
        "Picked colors",
        Style::default()
            .fg(Theme::accent())
            .add_modifier(Modifier::BOLD),
    ))];

    for (index, entry) in app.history.render().into_iter().enumerate() {
        let selected = app.focus == Focus::History && index == app.selected_entry;
        let marker_style = if selected {
            Style::default()
                .fg(Theme::selection_marker())
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Theme::dim())
        };
        let swatch_style = Rgb::from_hex(&entry.hex)
            .map(|rgb| Style::default().fg(rgb_to_color(rgb)))
            .unwrap_or_else(|| Style::default().fg(Theme::dim()));
        let label = app.entry_label(index, &entry.hex).to_string();
        let label_style = if label == entry.hex {
            Style::default().fg(Theme::text())
        } else {
            Style::default()
                .fg(Theme::selection_marker())
                .add_modifier(Modifier::BOLD)
        };
        let mut spans = vec![Span::styled(if selected { "> " } else { "  " }, marker_style)];
        if entry.outlined {
            spans.push(Span::styled("[", Style::default().fg(Theme::dim())));
            spans.push(Span::styled("█", swatch_style));
            spans.push(Span::styled("]", Style::default().fg(Theme::dim())));
        } else {
            spans.push(Span::styled(" █ ", swatch_style));
        }
        spans.push(Span::raw(" "));
        spans.push(Span::styled(label, label_style));
        lines.push(Line::from(spans));
    }

    Text::from(lines)
}
