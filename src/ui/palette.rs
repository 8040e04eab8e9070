use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::helpers::{contrast_text, rgb_to_color};
use super::theme::Theme;
use crate::app::{App, Focus};
use crate::palette::{PALETTE_SIZE, Slot};

/// Renders the five swatches side by side.
pub fn render_palette(frame: &mut Frame, app: &App, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, PALETTE_SIZE as u32); PALETTE_SIZE])
        .split(area);

    for (slot, column) in app.palette.slots().zip(columns.iter()) {
        let selected = app.focus == Focus::Palette && slot.index == app.selected_slot;
        frame.render_widget(swatch(slot, selected), *column);
    }
}

fn swatch(slot: Slot<'_>, selected: bool) -> Paragraph<'_> {
    let text_color = contrast_text(slot.color);
    let border_style = if selected {
        Style::default()
            .fg(Theme::selection_marker())
            .add_modifier(Modifier::BOLD)
    } else if slot.locked {
        Style::default().fg(Theme::locked())
    } else {
        Style::default().fg(Theme::dim())
    };
    let border_type = if slot.locked {
        BorderType::Double
    } else {
        BorderType::Rounded
    };

    let lock_label = if slot.locked { "[locked]" } else { "" };
    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("{}", slot.index + 1),
            Style::default().fg(text_color).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(lock_label, Style::default().fg(text_color))),
    ];
    if let Some(hex) = slot.hex {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            hex,
            Style::default().fg(text_color).add_modifier(Modifier::BOLD),
        )));
    }

    Paragraph::new(Text::from(lines))
        .alignment(Alignment::Center)
        .style(Style::default().bg(rgb_to_color(slot.color)))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(border_type)
                .border_style(border_style),
        )
}
