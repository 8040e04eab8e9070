use ratatui::style::Color;

use crate::color::Rgb;

pub fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.r, rgb.g, rgb.b)
}

/// Black or white, whichever reads better on `background`.
pub fn contrast_text(background: Rgb) -> Color {
    // ITU-R BT.601 luma
    let luma = 299 * u32::from(background.r)
        + 587 * u32::from(background.g)
        + 114 * u32::from(background.b);
    if luma > 128_000 {
        Color::Black
    } else {
        Color::White
    }
}
