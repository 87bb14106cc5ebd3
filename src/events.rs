//! Lifecycle notifications.
//!
//! A gallery reports what it is doing as [`GalleryEvent`]s on an optional
//! `mpsc` channel. Events for one operation always arrive as ordered
//! before/after pairs:
//!
//! ```text
//! open   Show ─ ─ ─(transition)─ ─ ─▶ Shown
//! close  Close ─ ─ ─(transition)─ ─ ─▶ Closed
//! next   Next{from} → Change{to} → Changed{to} → NextDone{to}
//! prev   Prev{from} → Change{to} → Changed{to} → PrevDone{to}
//! ```
//!
//! `Shown` and `Closed` are emitted from [`Gallery::tick`](crate::gallery::Gallery::tick)
//! once the modal transition delay has elapsed.

use serde::{Deserialize, Serialize};
use std::sync::mpsc::Sender;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "camelCase")]
pub enum GalleryEvent {
    /// Gallery constructed and laid out.
    Init,
    /// Lightbox about to open.
    Show,
    /// Lightbox finished opening.
    Shown,
    /// Lightbox about to close.
    Close,
    /// Lightbox finished closing.
    Closed,
    /// Before stepping forward, with the index being left.
    Next { index: usize },
    /// After stepping forward, with the new index.
    NextDone { index: usize },
    Prev { index: usize },
    PrevDone { index: usize },
    /// Selection moved, before the image is displayed.
    Change { index: usize },
    /// Image displayed in the single view.
    Changed { index: usize },
    /// The full-size image for the displayed index failed to load.
    LoadError { index: usize, url: String },
    /// Gallery torn down.
    Destroyed,
}

impl GalleryEvent {
    /// Event name as the presenter dispatches it (`"nextDone"`, `"shown"`, ...).
    pub fn name(&self) -> &'static str {
        match self {
            Self::Init => "init",
            Self::Show => "show",
            Self::Shown => "shown",
            Self::Close => "close",
            Self::Closed => "closed",
            Self::Next { .. } => "next",
            Self::NextDone { .. } => "nextDone",
            Self::Prev { .. } => "prev",
            Self::PrevDone { .. } => "prevDone",
            Self::Change { .. } => "change",
            Self::Changed { .. } => "changed",
            Self::LoadError { .. } => "loadError",
            Self::Destroyed => "destroyed",
        }
    }
}

/// Sends events to an optional listener. A dropped receiver is not an error.
#[derive(Debug, Clone, Default)]
pub struct EventEmitter {
    sender: Option<Sender<GalleryEvent>>,
}

impl EventEmitter {
    pub fn new(sender: Option<Sender<GalleryEvent>>) -> Self {
        Self { sender }
    }

    pub fn emit(&self, event: GalleryEvent) {
        let Some(sender) = &self.sender else {
            return;
        };
        if let Err(err) = sender.send(event) {
            tracing::debug!(event = err.0.name(), "event listener gone, dropping event");
        }
    }
}
