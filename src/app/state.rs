use std::time::{Duration, Instant};

use crossterm::event::KeyCode;
use tracing::{error, info, warn};

use crate::clipboard::Clipboard;
use crate::color;
use crate::db::KvStore;
use crate::history::PickHistory;
use crate::palette::{PALETTE_SIZE, PaletteManager};
use crate::sampler::{self, ColorSampler, SampleError, Surface};

use super::{AppEvent, AppView, CopyFeedback, Focus};

/// How long a copied history entry reads "Copied".
pub const COPY_FEEDBACK: Duration = Duration::from_secs(1);

/// The top-level application state.
pub struct App {
    pub running: bool,
    pub view: AppView,
    pub focus: Focus,
    pub palette: PaletteManager,
    pub history: PickHistory<Box<dyn KvStore>>,
    sampler: Box<dyn ColorSampler>,
    clipboard: Box<dyn Clipboard>,
    settle: Duration,
    pub selected_slot: usize,
    pub selected_entry: usize,
    pub status: Option<String>,
    /// Blocking notification; swallows the next key press.
    pub alert: Option<String>,
    pub copy_feedback: Option<CopyFeedback>,
    sample_requested: bool,
}

impl App {
    pub fn new(
        store: Box<dyn KvStore>,
        sampler: Box<dyn ColorSampler>,
        clipboard: Box<dyn Clipboard>,
        settle: Duration,
    ) -> Self {
        Self {
            running: true,
            view: AppView::Main,
            focus: Focus::Palette,
            palette: PaletteManager::new(),
            history: PickHistory::load(store),
            sampler,
            clipboard,
            settle,
            selected_slot: 0,
            selected_entry: 0,
            status: None,
            alert: None,
            copy_feedback: None,
            sample_requested: false,
        }
    }

    /// Central update function - process an event and mutate state.
    pub fn update(&mut self, event: AppEvent) {
        match event {
            AppEvent::Tick => self.expire_feedback(Instant::now()),
            AppEvent::KeyPress(key) => self.handle_key(key),
        }
    }

    /// Returns `true` once after the user asked to pick a color.
    pub fn take_sample_request(&mut self) -> bool {
        std::mem::take(&mut self.sample_requested)
    }

    fn handle_key(&mut self, key: KeyCode) {
        if self.alert.is_some() {
            self.alert = None;
            return;
        }
        if self.view == AppView::Help {
            match key {
                KeyCode::Char('q') => self.running = false,
                KeyCode::Char('?') | KeyCode::Esc => self.view = AppView::Main,
                _ => {}
            }
            return;
        }

        match key {
            KeyCode::Char('q') | KeyCode::Esc => self.running = false,
            KeyCode::Char('?') => self.view = AppView::Help,
            KeyCode::Char(' ') | KeyCode::Char('g') => {
                self.palette.generate();
                self.clear_status();
            }
            KeyCode::Char(ch @ '1'..='5') => {
                let index = (ch as usize) - ('1' as usize);
                self.selected_slot = index;
                self.toggle_lock(index);
            }
            KeyCode::Char('l') => self.toggle_lock(self.selected_slot),
            KeyCode::Char('x') => self.palette.toggle_hex_visibility(),
            KeyCode::Char('p') => {
                self.sample_requested = true;
                self.status = Some("Pick a color anywhere on screen...".to_string());
            }
            KeyCode::Char('c') => self.clear_history(),
            KeyCode::Tab => {
                self.focus = match self.focus {
                    Focus::Palette if !self.history.is_empty() => Focus::History,
                    _ => Focus::Palette,
                };
            }
            KeyCode::Left => {
                self.focus = Focus::Palette;
                self.selected_slot = (self.selected_slot + PALETTE_SIZE - 1) % PALETTE_SIZE;
            }
            KeyCode::Right => {
                self.focus = Focus::Palette;
                self.selected_slot = (self.selected_slot + 1) % PALETTE_SIZE;
            }
            KeyCode::Up => self.move_entry_selection(-1),
            KeyCode::Down => self.move_entry_selection(1),
            KeyCode::Enter => match self.focus {
                Focus::Palette => self.toggle_lock(self.selected_slot),
                Focus::History => self.copy_entry(self.selected_entry),
            },
            _ => {}
        }
    }

    fn clear_status(&mut self) {
        self.status = None;
    }

    fn toggle_lock(&mut self, index: usize) {
        if self.palette.toggle_lock(index) {
            self.clear_status();
        }
    }

    fn move_entry_selection(&mut self, delta: isize) {
        let len = self.history.len();
        if len == 0 {
            return;
        }
        self.focus = Focus::History;
        self.selected_entry = if delta < 0 {
            if self.selected_entry == 0 {
                len - 1
            } else {
                self.selected_entry - 1
            }
        } else {
            (self.selected_entry + 1) % len
        };
    }

    /// Hides `surface`, samples one color and records it in the history.
    pub fn pick_color(&mut self, surface: &mut dyn Surface) {
        let sampled = sampler::pick_color(surface, self.sampler.as_mut(), self.settle)
            .and_then(|raw| color::normalize_hex(&raw).ok_or(SampleError::InvalidOutput(raw)));
        let hex = match sampled {
            Ok(hex) => hex,
            Err(err) => {
                warn!(error = %err, "color sampling failed");
                self.clear_status();
                self.alert = Some(format!("Failed to pick the color! {err}"));
                return;
            }
        };
        match self.history.record_pick(&hex) {
            Ok(true) => {
                self.selected_entry = self.history.len() - 1;
                self.status = Some(format!("Picked {hex}"));
            }
            Ok(false) => self.status = Some(format!("{hex} is already in the history")),
            Err(err) => {
                error!(error = %err, "failed to save picked colors");
                self.status = Some(format!("Failed to save picked colors: {err}"));
            }
        }
    }

    /// Copies a history entry. Success shows "Copied" briefly; failure only logs.
    pub fn copy_entry(&mut self, index: usize) {
        let Some(hex) = self.history.get(index).map(str::to_string) else {
            return;
        };
        match self.clipboard.set_text(&hex) {
            Ok(()) => {
                info!(hex = %hex, "copied color to clipboard");
                self.copy_feedback = Some(CopyFeedback {
                    index,
                    expires_at: Instant::now() + COPY_FEEDBACK,
                });
            }
            Err(err) => {
                warn!(error = %err, "failed to copy the color code");
                self.copy_feedback = None;
            }
        }
    }

    fn clear_history(&mut self) {
        if let Err(err) = self.history.clear_all() {
            error!(error = %err, "failed to save cleared history");
            self.status = Some(format!("Failed to clear picked colors: {err}"));
        } else {
            self.clear_status();
        }
        self.selected_entry = 0;
        self.copy_feedback = None;
        self.focus = Focus::Palette;
    }

    pub fn expire_feedback(&mut self, now: Instant) {
        if self
            .copy_feedback
            .is_some_and(|feedback| feedback.expires_at <= now)
        {
            self.copy_feedback = None;
        }
    }

    /// Label for the history entry at `index`: its hex, or "Copied" while feedback lasts.
    pub fn entry_label<'a>(&self, index: usize, hex: &'a str) -> &'a str {
        match self.copy_feedback {
            Some(feedback) if feedback.index == index => "Copied",
            _ => hex,
        }
    }
}
