//! Which series is emphasized.
//!
//! Two layers are tracked: a transient hover (pointer devices) and a
//! persistent tap lock (touch devices). While a lock is held it wins over
//! hover; pointer events are still recorded but stay hidden. Releasing the
//! lock, or a filter reset, clears both layers.
//!
//! ```text
//!              enter(i)                    tap(i)
//!   Normal ─────────────▶ Hover(i)   Normal ───────▶ Locked(i)
//!      ▲      leave          │          ▲   tap(i)      │ tap(j)
//!      └─────────────────────┘          └───────────────┘──────▶ Locked(j)
//! ```
//!
//! Indices refer to the displayed series, newest first. Events naming an
//! index outside the displayed set are ignored.

use serde::Serialize;

/// Input from the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HighlightEvent {
    PointerEnter(usize),
    /// The pointer left every series.
    PointerLeave,
    Tap(usize),
}

impl HighlightEvent {
    /// Decode an event reported by the renderer as a kind (`"enter"`,
    /// `"leave"` or `"tap"`) plus a series index. Anything else is `None`.
    pub fn from_renderer(kind: &str, index: f64) -> Option<Self> {
        let index = (index.is_finite() && index >= 0.0 && index.fract() == 0.0)
            .then_some(index as usize);
        match (kind, index) {
            ("enter", Some(index)) => Some(HighlightEvent::PointerEnter(index)),
            ("leave", _) => Some(HighlightEvent::PointerLeave),
            ("tap", Some(index)) => Some(HighlightEvent::Tap(index)),
            _ => None,
        }
    }
}

/// The externally visible state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HighlightMode {
    Normal,
    HoverEmphasis(usize),
    TapLocked(usize),
}

/// How one series should be drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Emphasis {
    /// Nothing is highlighted.
    Default,
    Active,
    Dimmed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HighlightState {
    series_count: usize,
    hovered: Option<usize>,
    locked: Option<usize>,
}

impl HighlightState {
    pub fn new(series_count: usize) -> Self {
        Self {
            series_count,
            hovered: None,
            locked: None,
        }
    }

    /// Back to `Normal` for a new set of displayed series.
    pub fn reset(&mut self, series_count: usize) {
        *self = HighlightState::new(series_count);
    }

    pub fn series_count(&self) -> usize {
        self.series_count
    }

    /// Apply one event. Returns whether the visible mode changed.
    pub fn apply(&mut self, event: HighlightEvent) -> bool {
        let before = self.mode();
        match event {
            HighlightEvent::PointerEnter(index) if index < self.series_count => {
                self.hovered = Some(index);
            }
            HighlightEvent::PointerLeave => {
                self.hovered = None;
            }
            HighlightEvent::Tap(index) if index < self.series_count => {
                if self.locked == Some(index) {
                    self.locked = None;
                    self.hovered = None;
                } else {
                    self.locked = Some(index);
                }
            }
            HighlightEvent::PointerEnter(index) | HighlightEvent::Tap(index) => {
                log::debug!(
                    "[CSF] highlight: ignoring {:?} for index {} of {} series",
                    event,
                    index,
                    self.series_count
                );
            }
        }
        self.mode() != before
    }

    pub fn mode(&self) -> HighlightMode {
        match (self.locked, self.hovered) {
            (Some(index), _) => HighlightMode::TapLocked(index),
            (None, Some(index)) => HighlightMode::HoverEmphasis(index),
            (None, None) => HighlightMode::Normal,
        }
    }

    pub fn highlighted_index(&self) -> Option<usize> {
        self.locked.or(self.hovered)
    }

    pub fn is_persistent(&self) -> bool {
        self.locked.is_some()
    }

    pub fn emphasis(&self, index: usize) -> Emphasis {
        match self.highlighted_index() {
            None => Emphasis::Default,
            Some(active) if active == index => Emphasis::Active,
            Some(_) => Emphasis::Dimmed,
        }
    }
}
