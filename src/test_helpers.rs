//! Shared test utilities for the gallery test suite.
//!
//! Builds descriptor fixtures and galleries wired to an event channel, and
//! drains the events they emit.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let (mut gallery, rx) = gallery_with(10, "[carousel]\nloop = true\n", 1200);
//! gallery.open_single(Instant::now(), 2);
//! assert_eq!(event_names(&drain(&rx)), vec!["init", "show", "changed"]);
//! ```

use std::sync::mpsc::{self, Receiver};

use crate::config::config_from_str;
use crate::events::GalleryEvent;
use crate::gallery::Gallery;
use crate::items::ImageDescriptor;

// =========================================================================
// Fixtures
// =========================================================================

/// `count` images with `thumb-{i}.jpg` sources, `full-{i}.jpg` full-size
/// URLs and `Caption {i}` alt text.
pub fn descriptors(count: usize) -> Vec<ImageDescriptor> {
    (0..count)
        .map(|i| {
            ImageDescriptor::new(format!("thumb-{i}.jpg"))
                .with_attr("data-fullsize", format!("full-{i}.jpg"))
                .with_attr("alt", format!("Caption {i}"))
        })
        .collect()
}

/// Gallery over `descriptors(count)` with inline TOML options.
pub fn gallery_with(count: usize, options: &str, width: u32) -> (Gallery, Receiver<GalleryEvent>) {
    gallery_from(&descriptors(count), options, width)
}

/// Gallery over explicit descriptors. Panics on invalid options.
pub fn gallery_from(
    descriptors: &[ImageDescriptor],
    options: &str,
    width: u32,
) -> (Gallery, Receiver<GalleryEvent>) {
    let config = config_from_str(options)
        .unwrap_or_else(|e| panic!("invalid test options {options:?}: {e}"));
    let (tx, rx) = mpsc::channel();
    (Gallery::new(config, descriptors, width, Some(tx)), rx)
}

// =========================================================================
// Events
// =========================================================================

/// Every event received so far.
pub fn drain(rx: &Receiver<GalleryEvent>) -> Vec<GalleryEvent> {
    rx.try_iter().collect()
}

pub fn event_names(events: &[GalleryEvent]) -> Vec<&'static str> {
    events.iter().map(GalleryEvent::name).collect()
}
