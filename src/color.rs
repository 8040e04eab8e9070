/// Color utilities for palettes and picked colors.
use std::fmt;

use rand::{Rng, RngExt};

/// An RGB color, one byte per channel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Lowercase `#rrggbb` form.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Parses `#rrggbb` or `rrggbb` in any case.
    pub fn from_hex(value: &str) -> Option<Self> {
        let trimmed = value.trim();
        let hex = trimmed.strip_prefix('#').unwrap_or(trimmed);
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        Some(Self::new(r, g, b))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Normalizes any accepted hex spelling to lowercase `#rrggbb`.
pub fn normalize_hex(value: &str) -> Option<String> {
    Rgb::from_hex(value).map(Rgb::to_hex)
}

/// Finds the first hex color in free-form program output.
///
/// A bare `rrggbb` is accepted only as the whole output; inside longer text
/// the color needs its `#`.
pub fn find_hex(text: &str) -> Option<String> {
    let trimmed = text.trim();
    if !trimmed.starts_with('#') {
        if let Some(hex) = normalize_hex(trimmed) {
            return Some(hex);
        }
    }
    trimmed
        .split(|c: char| c.is_whitespace() || c == ',' || c == ';' || c == '"')
        .filter(|token| token.starts_with('#'))
        .find_map(normalize_hex)
}

/// Draws a color with every channel uniform over 0..=255.
pub fn random_color<R: Rng + ?Sized>(rng: &mut R) -> Rgb {
    Rgb::new(rng.random(), rng.random(), rng.random())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn hex_is_lowercase_and_zero_padded() {
        assert_eq!(Rgb::new(0, 10, 255).to_hex(), "#000aff");
        assert_eq!(Rgb::new(161, 178, 195).to_string(), "#a1b2c3");
    }

    #[test]
    fn parses_both_spellings() {
        assert_eq!(Rgb::from_hex("#A1B2C3"), Some(Rgb::new(161, 178, 195)));
        assert_eq!(Rgb::from_hex("112233"), Some(Rgb::new(17, 34, 51)));
        assert_eq!(Rgb::from_hex("#12345"), None);
        assert_eq!(Rgb::from_hex("#zzzzzz"), None);
    }

    #[test]
    fn normalizes_to_lowercase_with_hash() {
        assert_eq!(normalize_hex("FF00AA").as_deref(), Some("#ff00aa"));
        assert_eq!(normalize_hex(" #ff00aa\n").as_deref(), Some("#ff00aa"));
        assert_eq!(normalize_hex("#ff00a"), None);
    }

    #[test]
    fn finds_hex_in_picker_output() {
        assert_eq!(find_hex("#FF8800\n"), Some("#ff8800".to_string()));
        assert_eq!(
            find_hex("picked: \"#00ff00\", rgb(0, 255, 0)"),
            Some("#00ff00".to_string())
        );
        assert_eq!(find_hex("rgb(1, 2, 3)"), None);
        assert_eq!(find_hex(" 00FF88\n"), Some("#00ff88".to_string()));
        assert_eq!(find_hex(""), None);
    }

    #[test]
    fn bare_hex_words_in_text_are_not_colors() {
        assert_eq!(find_hex("Picked: facade"), None);
        assert_eq!(find_hex("facade #0a0b0c"), Some("#0a0b0c".to_string()));
    }

    #[test]
    fn random_channels_stay_in_range_and_vary() {
        let mut rng = StdRng::seed_from_u64(42);
        let colors = (0..500).map(|_| random_color(&mut rng)).collect::<Vec<_>>();
        // u8 bounds the range; the hex form must always round-trip.
        assert!(colors.iter().all(|c| Rgb::from_hex(&c.to_hex()) == Some(*c)));
        assert!(colors.iter().any(|c| c.r < 64) && colors.iter().any(|c| c.r > 191));
        assert!(colors.windows(2).any(|pair| pair[0] != pair[1]));
    }
}
