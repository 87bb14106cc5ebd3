//! Thumbnail carousel position model.
//!
//! The single source of truth for where the thumbnail strip sits. Positions
//! are item offsets: position `p` means item `p` is the first visible
//! thumbnail. The strip can never scroll past `max_position`, the offset at
//! which the last page is flush with the right edge:
//!
//! ```text
//! total = 10, per page = 4  →  max_position = 6
//!
//! position 0:  [0 1 2 3] 4 5 6 7 8 9
//! position 4:   0 1 2 3 [4 5 6 7] 8 9
//! position 6:   0 1 2 3 4 5 [6 7 8 9]
//! ```
//!
//! ## Looping Never Skips the Last Page
//!
//! With `loop` enabled, a forward step that would overshoot the end first
//! lands exactly on `max_position`; only the step after that wraps to 0. In
//! the example above, stepping by 4 goes `0 → 4 → 6 → 0`, so items 8 and 9
//! are always shown before wrapping. Stepping backward past 0 lands on
//! `max_position`.

use serde::{Deserialize, Serialize};

use crate::gesture::NavIntent;

/// Snapshot of the carousel for rendering and button state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarouselState {
    pub position: usize,
    pub items_per_page: usize,
    pub total_items: usize,
    pub max_position: usize,
    #[serde(rename = "loop")]
    pub looping: bool,
}

/// Visibility and enablement of the thumbnail prev/next (and "show all") buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavControls {
    /// False when everything fits on one page.
    pub visible: bool,
    pub prev_enabled: bool,
    pub next_enabled: bool,
}

#[derive(Debug, Clone)]
pub struct CarouselModel {
    state: CarouselState,
    /// Explicit step from config; `None` steps one page.
    step: Option<usize>,
}

fn max_position(total_items: usize, items_per_page: usize) -> usize {
    total_items.saturating_sub(items_per_page)
}

impl CarouselModel {
    pub fn new(
        total_items: usize,
        items_per_page: usize,
        looping: bool,
        step: Option<usize>,
    ) -> Self {
        let mut model = Self {
            state: CarouselState {
                position: 0,
                items_per_page: 1,
                total_items: 0,
                max_position: 0,
                looping,
            },
            step,
        };
        model.initialize(total_items, items_per_page, looping);
        model
    }

    /// Reset to the first page with new dimensions.
    pub fn initialize(&mut self, total_items: usize, items_per_page: usize, looping: bool) {
        let items_per_page = items_per_page.max(1);
        self.state = CarouselState {
            position: 0,
            items_per_page,
            total_items,
            max_position: max_position(total_items, items_per_page),
            looping,
        };
    }

    pub fn state(&self) -> CarouselState {
        self.state
    }

    pub fn position(&self) -> usize {
        self.state.position
    }

    pub fn items_per_page(&self) -> usize {
        self.state.items_per_page
    }

    pub fn max_position(&self) -> usize {
        self.state.max_position
    }

    /// Items moved per step: the configured step, capped at one page, or
    /// one full page when unset.
    pub fn step_size(&self) -> usize {
        let page = self.state.items_per_page;
        self.step.map_or(page, |step| step.clamp(1, page))
    }

    /// Move forward by `step` items.
    pub fn advance(&mut self, step: usize) {
        let before = self.state.position;
        let max = self.state.max_position;
        let after = before.saturating_add(step);

        self.state.position = if after <= max {
            after
        } else if !self.state.looping {
            max
        } else if before < max {
            // First overshoot: show the final page before wrapping
            max
        } else {
            0
        };
    }

    /// Move backward by `step` items.
    pub fn retreat(&mut self, step: usize) {
        self.state.position = match self.state.position.checked_sub(step) {
            Some(after) => after,
            None if self.state.looping => self.state.max_position,
            None => 0,
        };
    }

    pub fn next(&mut self) {
        self.advance(self.step_size());
    }

    pub fn prev(&mut self) {
        self.retreat(self.step_size());
    }

    pub fn apply(&mut self, intent: NavIntent) {
        match intent {
            NavIntent::Advance => self.next(),
            NavIntent::Retreat => self.prev(),
        }
    }

    /// Recompute bounds for a new page size and pull the position back in range.
    pub fn recompute_on_resize(&mut self, items_per_page: usize) {
        let items_per_page = items_per_page.max(1);
        self.state.items_per_page = items_per_page;
        self.state.max_position = max_position(self.state.total_items, items_per_page);
        self.state.position = self.state.position.min(self.state.max_position);
    }

    pub fn is_at_start(&self) -> bool {
        self.state.position == 0
    }

    pub fn is_at_end(&self) -> bool {
        self.state.position == self.state.max_position
    }

    /// Whether there is more than one page to move between.
    pub fn has_paging(&self) -> bool {
        self.state.total_items > self.state.items_per_page
    }

    pub fn nav_controls(&self) -> NavControls {
        if !self.has_paging() {
            return NavControls {
                visible: false,
                prev_enabled: false,
                next_enabled: false,
            };
        }
        let looping = self.state.looping;
        NavControls {
            visible: true,
            prev_enabled: looping || !self.is_at_start(),
            next_enabled: looping || !self.is_at_end(),
        }
    }

    /// Horizontal strip offset as a percentage of the viewport (`translateX`).
    pub fn translate_percent(&self) -> f64 {
        // Subtracting from zero keeps the first page at +0 rather than -0
        0.0 - self.state.position as f64 * (100.0 / self.state.items_per_page as f64)
    }
}
