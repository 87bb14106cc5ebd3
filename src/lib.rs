//! # VNS Gallery
//!
//! The core of an image gallery widget: a thumbnail carousel that pages
//! through a container's images, and a lightbox modal with a grid view and a
//! single-image view. The host page hands over its images once, then forwards
//! viewport changes, pointer samples, key presses and image-load results; the
//! gallery answers with state to render and lifecycle events.
//!
//! # Architecture: State In, State Out
//!
//! The crate owns no DOM and no timers. Everything it needs from the outside
//! arrives as a method call, and everything it decides is readable back:
//!
//! ```text
//! descriptors ─┐
//! width/resize ─┤                        ┌─▶ carousel / lightbox state
//! pointer/keys ─┼─▶  Gallery  ──────────┼─▶ render::render_gallery (HTML)
//! load results ─┤    (+ now: Instant)    └─▶ GalleryEvent channel
//! tick(now) ────┘
//! ```
//!
//! A presenter (a WASM binding, a server-side renderer, a test) is the only
//! part that touches the real page.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`gallery`] | The per-container controller that wires everything below together |
//! | [`carousel`] | Thumbnail strip position, paging, looping and resize clamping |
//! | [`responsive`] | Viewport width → items per page (breakpoint table or defaults) |
//! | [`gesture`] | Horizontal drag detection on the thumbnail strip |
//! | [`lightbox`] | Selected index, prev/next, counter text |
//! | [`items`] | Image descriptors → immutable gallery items and captions |
//! | [`preload`] | Full-size load tickets; stale completions are ignored |
//! | [`schedule`] | Cancellable deadlines for debounce and transition notifications |
//! | [`events`] | Lifecycle events sent over an optional `mpsc` channel |
//! | [`render`] | Maud markup for the widget and CSS custom properties |
//! | [`config`] | `config.toml` loading, layering over stock defaults, clamping |
//!
//! # Design Decisions
//!
//! ## Caller-Supplied Time
//!
//! Operations that start a delay take `now: Instant`, and [`gallery::Gallery::tick`]
//! fires whatever is due. Resize debouncing, the `Shown`/`Closed` notifications
//! and delayed captions are all deadlines in one [`schedule::Scheduler`], so
//! tests drive time explicitly and never sleep.
//!
//! ## Two Independent Indices
//!
//! The carousel position and the lightbox index never influence each other.
//! Opening image 7 does not scroll the strip, and paging the strip does not
//! change what the lightbox shows.
//!
//! ## Last Request Wins
//!
//! Each full-size load gets a [`preload::PreloadTicket`]. When the viewer
//! moves on before a load finishes, the older ticket becomes stale: its
//! completion neither hides the spinner for the newer image nor reports an
//! error for an image no longer shown.
//!
//! ## Clamp, Don't Reject
//!
//! Malformed TOML and unknown keys are [`config::ConfigError`]s. Values that
//! parse but make no sense, such as zero columns, are clamped to the smallest
//! usable value with a `tracing` warning. Empty galleries, zero widths and
//! out-of-range indices degrade to valid minimal state rather than errors.

pub mod carousel;
pub mod config;
pub mod events;
pub mod gallery;
pub mod gesture;
pub mod items;
pub mod lightbox;
pub mod preload;
pub mod render;
pub mod responsive;
pub mod schedule;

#[cfg(test)]
pub(crate) mod test_helpers;
