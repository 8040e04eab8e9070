/// The generated palette: five slots, each with a color, a lock and a hex label.
use rand::Rng;
use rand::rngs::ThreadRng;
use tracing::debug;

use crate::color::{Rgb, random_color};

pub const PALETTE_SIZE: usize = 5;

/// Read-only view of one palette slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Slot<'a> {
    pub index: usize,
    pub color: Rgb,
    pub locked: bool,
    /// `Some` only while hex codes are shown.
    pub hex: Option<&'a str>,
}

pub struct PaletteManager<R = ThreadRng> {
    colors: [Rgb; PALETTE_SIZE],
    locked: [bool; PALETTE_SIZE],
    hex_labels: [Option<String>; PALETTE_SIZE],
    rng: R,
}

impl PaletteManager<ThreadRng> {
    pub fn new() -> Self {
        Self::with_rng(rand::rng())
    }
}

impl Default for PaletteManager<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> PaletteManager<R> {
    /// Starts with every slot unlocked, randomly colored and hex hidden.
    pub fn with_rng(mut rng: R) -> Self {
        let colors = std::array::from_fn(|_| random_color(&mut rng));
        Self {
            colors,
            locked: [false; PALETTE_SIZE],
            hex_labels: Default::default(),
            rng,
        }
    }

    /// Recolors every unlocked slot. Locked slots keep their color.
    pub fn generate(&mut self) {
        for (color, locked) in self.colors.iter_mut().zip(self.locked.iter()) {
            if !locked {
                *color = random_color(&mut self.rng);
            }
        }
        debug!(locked = self.locked_count(), "palette regenerated");
        self.rebuild_view();
    }

    /// Flips the lock at `index`. Returns `false` for an index outside the palette.
    pub fn toggle_lock(&mut self, index: usize) -> bool {
        let Some(locked) = self.locked.get_mut(index) else {
            return false;
        };
        *locked = !*locked;
        self.rebuild_view();
        true
    }

    /// Shows or hides the hex code of every slot at once.
    pub fn toggle_hex_visibility(&mut self) {
        for (label, color) in self.hex_labels.iter_mut().zip(self.colors.iter()) {
            *label = match label.take() {
                Some(_) => None,
                None => Some(color.to_hex()),
            };
        }
    }
}

impl<R> PaletteManager<R> {
    pub fn colors(&self) -> &[Rgb; PALETTE_SIZE] {
        &self.colors
    }

    #[cfg(test)]
    pub fn locked(&self) -> &[bool; PALETTE_SIZE] {
        &self.locked
    }

    #[cfg(test)]
    pub fn is_locked(&self, index: usize) -> bool {
        self.locked.get(index).copied().unwrap_or(false)
    }

    pub fn locked_count(&self) -> usize {
        self.locked.iter().filter(|locked| **locked).count()
    }

    pub fn hex_visible(&self) -> bool {
        self.hex_labels.iter().any(Option::is_some)
    }

    pub fn slots(&self) -> impl Iterator<Item = Slot<'_>> + '_ {
        (0..PALETTE_SIZE).map(|index| Slot {
            index,
            color: self.colors[index],
            locked: self.locked[index],
            hex: self.hex_labels[index].as_deref(),
        })
    }

    // A fresh view starts with hex codes hidden.
    fn rebuild_view(&mut self) {
        self.hex_labels = Default::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn seeded() -> PaletteManager<StdRng> {
        PaletteManager::with_rng(StdRng::seed_from_u64(7))
    }

    #[test]
    fn starts_unlocked_with_hex_hidden() {
        let palette = seeded();
        assert_eq!(palette.locked(), &[false; PALETTE_SIZE]);
        assert!(!palette.hex_visible());
        assert_eq!(palette.slots().count(), PALETTE_SIZE);
    }

    #[test]
    fn double_toggle_restores_lock() {
        let mut palette = seeded();
        assert!(palette.toggle_lock(2));
        assert!(palette.is_locked(2));
        assert!(palette.toggle_lock(2));
        assert_eq!(palette.locked(), &[false; PALETTE_SIZE]);
    }

    #[test]
    fn out_of_range_toggle_is_noop() {
        let mut palette = seeded();
        assert!(!palette.toggle_lock(PALETTE_SIZE));
        assert_eq!(palette.locked(), &[false; PALETTE_SIZE]);
    }

    #[test]
    fn generate_keeps_locked_slots() {
        let mut palette = seeded();
        palette.toggle_lock(0);
        palette.toggle_lock(3);
        let before = *palette.colors();
        for _ in 0..20 {
            palette.generate();
            assert_eq!(palette.colors()[0], before[0]);
            assert_eq!(palette.colors()[3], before[3]);
        }
        let unlocked_changed = [1, 2, 4]
            .iter()
            .any(|&index| palette.colors()[index] != before[index]);
        assert!(unlocked_changed);
    }

    #[test]
    fn hex_toggle_is_global_and_lazy() {
        let mut palette = seeded();
        palette.toggle_hex_visibility();
        assert!(palette.hex_visible());
        for slot in palette.slots() {
            assert_eq!(slot.hex, Some(slot.color.to_hex().as_str()));
        }
        palette.toggle_hex_visibility();
        assert!(palette.slots().all(|slot| slot.hex.is_none()));
    }

    #[test]
    fn hex_toggle_does_not_touch_colors() {
        let mut palette = seeded();
        let before = *palette.colors();
        palette.toggle_hex_visibility();
        assert_eq!(palette.colors(), &before);
    }

    #[test]
    fn regenerate_hides_hex_codes() {
        let mut palette = seeded();
        palette.toggle_hex_visibility();
        palette.generate();
        assert!(!palette.hex_visible());
        palette.toggle_hex_visibility();
        palette.toggle_lock(1);
        assert!(!palette.hex_visible());
    }
}
