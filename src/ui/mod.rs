mod help;
mod helpers;
mod history;
mod palette;
mod theme;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    prelude::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
};

use crate::app::{App, AppView, Focus};
use theme::Theme;

/// Renders the entire UI for a single frame.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(3),
        ])
        .split(area);

    let header_lines = vec![Line::from(vec![
        Span::styled(
            "  Palettr  ",
            Style::default().fg(Color::Black).bg(Theme::primary()),
        ),
        Span::raw(" "),
        Span::styled(
            "color palettes",
            Style::default()
                .fg(Theme::secondary())
                .add_modifier(Modifier::BOLD),
        ),
    ])];
    let header = Paragraph::new(Text::from(header_lines))
        .alignment(Alignment::Left)
        .block(rounded_block());
    frame.render_widget(header, layout[0]);

    match app.view {
        AppView::Main => render_main(frame, app, layout[1]),
        AppView::Help => {
            let mut lines = help::build_help_text().lines;
            lines.push(Line::from(""));
            lines.extend(keybinds_lines(app));
            let body = Paragraph::new(Text::from(lines))
                .style(Style::default().fg(Theme::text()))
                .block(rounded_block().title(" Help "));
            frame.render_widget(body, layout[1]);
        }
    }

    let footer = Paragraph::new(Text::from(status_line(app)))
        .alignment(Alignment::Left)
        .block(rounded_block());
    frame.render_widget(footer, layout[2]);

    if let Some(message) = &app.alert {
        render_alert_popup(frame, message);
    }
}

fn render_main(frame: &mut Frame, app: &App, area: Rect) {
    let outer = rounded_block().title(" Palette ");
    let inner = outer.inner(area);
    frame.render_widget(outer, area);

    let sections = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(9),
            Constraint::Min(3),
            Constraint::Length(3),
        ])
        .split(inner);

    palette::render_palette(frame, app, sections[0]);

    let history = Paragraph::new(history::build_history_text(app))
        .style(Style::default().fg(Theme::text()))
        .block(Block::default().borders(Borders::TOP).border_style(
            Style::default().fg(if app.focus == Focus::History {
                Theme::highlight()
            } else {
                Theme::dim()
            }),
        ));
    frame.render_widget(history, sections[1]);

    let mut keybinds = vec![Line::from(Span::styled(
        "----------------------------------------",
        Style::default().fg(Theme::dim()),
    ))];
    keybinds.extend(keybinds_lines(app));
    frame.render_widget(Paragraph::new(Text::from(keybinds)), sections[2]);
}

fn rounded_block() -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .style(Style::default().fg(Theme::secondary()))
}

fn render_alert_popup(frame: &mut Frame, message: &str) {
    let area = centered_rect(60, 30, frame.area());
    frame.render_widget(Clear, area);

    let lines = vec![
        Line::from(Span::styled(
            "Something went wrong",
            Style::default()
                .fg(Theme::error())
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(message, Style::default().fg(Theme::text()))),
        Line::from(""),
        Line::from(Span::styled(
            "Press any key to continue",
            Style::default().fg(Theme::dim()),
        )),
    ];

    let popup = Paragraph::new(Text::from(lines))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Theme::error()))
                .title(" Alert "),
        );
    frame.render_widget(popup, area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            [
                Constraint::Percentage((100 - percent_y) / 2),
                Constraint::Percentage(percent_y),
                Constraint::Percentage((100 - percent_y) / 2),
            ]
            .as_ref(),
        )
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints(
            [
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ]
            .as_ref(),
        )
        .split(popup_layout[1])[1]
}

fn status_line(app: &App) -> Line<'_> {
    if let Some(status) = &app.status {
        return Line::from(Span::styled(
            format!(" {status}"),
            Style::default().fg(Theme::text()),
        ));
    }
    let locked = app.palette.locked_count();
    let hex_state = if app.palette.hex_visible() {
        "shown"
    } else {
        "hidden"
    };
    Line::from(vec![
        Span::styled(" Locked: ", Style::default().fg(Theme::dim())),
        Span::styled(
            format!("{locked}"),
            Style::default()
                .fg(Theme::locked())
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("   Hex codes: ", Style::default().fg(Theme::dim())),
        Span::styled(hex_state, Style::default().fg(Theme::accent())),
        Span::styled("   Picked: ", Style::default().fg(Theme::dim())),
        Span::styled(
            format!("{}", app.history.len()),
            Style::default().fg(Theme::accent()),
        ),
    ])
}

fn keybinds_lines(app: &App) -> Vec<Line<'static>> {
    let (primary, secondary) = match (app.view, app.focus) {
        (AppView::Help, _) => ("Press ? or ESC to close this help screen", ""),
        (AppView::Main, Focus::Palette) => (
            "space: Generate  1-5/l: Lock  ←/→: Select  x: Hex codes",
            "p: Pick color  Tab: Picked colors  ?: Help  q: Quit",
        ),
        (AppView::Main, Focus::History) => (
            "Up/Down: Select  Enter: Copy  c: Clear all",
            "p: Pick color  Tab: Palette  ?: Help  q: Quit",
        ),
    };
    vec![
        Line::from(Span::styled(primary, Style::default().fg(Theme::dim()))),
        Line::from(Span::styled(secondary, Style::default().fg(Theme::dim()))),
    ]
}
