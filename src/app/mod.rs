mod state;

use std::time::Instant;

use crossterm::event::KeyCode;

pub use state::App;

/// Possible input events the app reacts to.
pub enum AppEvent {
    Tick,
    KeyPress(KeyCode),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppView {
    Main,
    Help,
}

/// Which pane receives selection and activation keys.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Focus {
    Palette,
    History,
}

/// Transient "Copied" label on a history entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CopyFeedback {
    pub index: usize,
    pub expires_at: Instant,
}
