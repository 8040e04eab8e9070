use ratatui::style::Color;

/// Unified color theme for the application chrome
pub struct Theme;

impl Theme {
    /// Primary branding color
    pub fn primary() -> Color {
        Color::Magenta
    }

    /// Secondary/border color
    pub fn secondary() -> Color {
        Color::Cyan
    }

    /// Locked swatch marker
    pub fn locked() -> Color {
        Color::Yellow
    }

    /// Error/alert text
    pub fn error() -> Color {
        Color::Red
    }

    /// Selection/highlight
    pub fn highlight() -> Color {
        Color::Cyan
    }

    /// Selection marker/arrow
    pub fn selection_marker() -> Color {
        Color::Green
    }

    /// Dimmed/inactive text
    pub fn dim() -> Color {
        Color::DarkGray
    }

    /// Normal text
    pub fn text() -> Color {
        Color::White
    }

    /// Accent for titles
    pub fn accent() -> Color {
        Color::LightBlue
    }
}
