//! Drag gesture interpretation.
//!
//! Turns a pointer-down / move / up sequence into at most one discrete
//! navigation intent. Works on raw `(x, y)` samples so mouse and touch
//! input feed it the same way.
//!
//! ```text
//!          press(x, y)            release(y?)
//!   Idle ──────────────▶ Dragging ───────────▶ Idle  (+ Option<NavIntent>)
//!                         │    ▲
//!                         └────┘ motion(x)
//! ```

use serde::{Deserialize, Serialize};

/// A discrete navigation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavIntent {
    /// Forward / next page.
    Advance,
    /// Backward / previous page.
    Retreat,
}

/// An in-progress drag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    pub start_x: f64,
    pub start_y: f64,
    pub current_x: f64,
}

#[derive(Debug, Clone)]
pub struct DragGestureInterpreter {
    threshold: f64,
    session: Option<DragSession>,
}

impl DragGestureInterpreter {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            session: None,
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    /// Pointer down: start a session. A second press restarts it.
    pub fn press(&mut self, x: f64, y: f64) {
        self.session = Some(DragSession {
            start_x: x,
            start_y: y,
            current_x: x,
        });
    }

    /// Pointer move. Only the horizontal position is tracked; ignored while idle.
    pub fn motion(&mut self, x: f64) {
        if let Some(session) = self.session.as_mut() {
            session.current_x = x;
        }
    }

    /// Pointer up: end the session and decide.
    ///
    /// `release_y` is `None` when the release event carries no coordinates
    /// (touch end); the vertical delta is then zero.
    pub fn release(&mut self, release_y: Option<f64>) -> Option<NavIntent> {
        let session = self.session.take()?;
        let delta_x = session.current_x - session.start_x;
        let delta_y = (release_y.unwrap_or(session.start_y) - session.start_y).abs();

        let distance = delta_x.abs();
        if distance > self.threshold && distance > delta_y {
            // Dragging toward the start reveals earlier items
            Some(if delta_x > 0.0 {
                NavIntent::Retreat
            } else {
                NavIntent::Advance
            })
        } else {
            None
        }
    }

    /// Drop the session without deciding.
    pub fn cancel(&mut self) {
        self.session = None;
    }
}
