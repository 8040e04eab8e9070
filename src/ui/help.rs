use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span, Text},
};

use super::theme::Theme;

pub fn build_help_text() -> Text<'static> {
    let mut lines = Vec::new();

    lines.push(Line::from(Span::styled(
        "Key bindings",
        Style::default()
            .fg(Theme::accent())
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(""));

    lines.push(section_title("Global"));
    lines.extend(section_lines(&[
        "q / esc: Quit (esc closes help and alerts first)",
        "?: Toggle help",
        "Tab: Toggle focus (palette / picked colors)",
    ]));

    lines.push(Line::from(""));
    lines.push(section_title("Palette"));
    lines.extend(section_lines(&[
        "space / g: Generate new colors (locked swatches stay)",
        "1-5: Lock/unlock a swatch",
        "Left/Right: Select swatch",
        "l / Enter: Lock/unlock selected swatch",
        "x: Show/hide hex codes",
    ]));

    lines.push(Line::from(""));
    lines.push(section_title("Picked colors"));
    lines.extend(section_lines(&[
        "p: Pick a color from the screen",
        "Up/Down: Select picked color",
        "Enter: Copy hex code",
        "c: Clear all",
    ]));

    Text::from(lines)
}

fn section_title(title: &str) -> Line<'static> {
    Line::from(Span::styled(
        format!("  {title}"),
        Style::default()
            .fg(Theme::secondary())
            .add_modifier(Modifier::BOLD),
    ))
}

fn section_lines(items: &[&str]) -> Vec<Line<'static>> {
    items
        .iter()
        .map(|item| {
            Line::from(Span::styled(
                format!("  - {item}"),
                Style::default().fg(Theme::text()),
            ))
        })
        .collect()
}
