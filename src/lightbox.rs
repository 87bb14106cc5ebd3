//! Lightbox selection over the full item list.
//!
//! Independent of carousel paging: the lightbox always steps one image at a
//! time across every item, whichever page the thumbnail strip shows.

use serde::{Deserialize, Serialize};

/// Which face of the modal is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LightboxView {
    Grid,
    Single,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LightboxSelection {
    current_index: usize,
    total_items: usize,
    #[serde(rename = "loop")]
    looping: bool,
}

impl LightboxSelection {
    pub fn new(total_items: usize, looping: bool) -> Self {
        Self {
            current_index: 0,
            total_items,
            looping,
        }
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn total_items(&self) -> usize {
        self.total_items
    }

    pub fn is_empty(&self) -> bool {
        self.total_items == 0
    }

    fn last_index(&self) -> usize {
        self.total_items.saturating_sub(1)
    }

    /// Jump to `index`, clamped into range. Returns the index actually selected.
    pub fn select(&mut self, index: usize) -> usize {
        self.current_index = index.min(self.last_index());
        self.current_index
    }

    pub fn next(&mut self) -> usize {
        if self.is_empty() {
            return 0;
        }
        self.current_index = if self.looping {
            (self.current_index + 1) % self.total_items
        } else {
            (self.current_index + 1).min(self.last_index())
        };
        self.current_index
    }

    pub fn prev(&mut self) -> usize {
        if self.is_empty() {
            return 0;
        }
        self.current_index = match self.current_index.checked_sub(1) {
            Some(index) => index,
            None if self.looping => self.last_index(),
            None => 0,
        };
        self.current_index
    }

    /// Prev button state. Always enabled when looping.
    pub fn can_prev(&self) -> bool {
        self.looping || self.current_index > 0
    }

    /// Next button state. Always enabled when looping.
    pub fn can_next(&self) -> bool {
        self.looping || self.current_index < self.last_index()
    }

    /// One-based counter, e.g. `"3 / 10"`.
    pub fn counter_text(&self) -> String {
        if self.is_empty() {
            return "0 / 0".to_string();
        }
        format!("{} / {}", self.current_index + 1, self.total_items)
    }
}
