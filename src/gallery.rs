//! Gallery instance: the state a presenter drives.
//!
//! One [`Gallery`] owns everything for one container on the page: the
//! collected items, the carousel position, the drag session, the lightbox
//! selection, preload tracking and pending timers. Nothing is shared between
//! instances, so any number of galleries can live side by side.
//!
//! ## Driving a Gallery
//!
//! The presenter forwards its UI events and the current time:
//!
//! ```text
//! window resize      → resize(now, width)        (debounced)
//! timer / animation  → tick(now)                 (fires due deadlines)
//! thumb ‹ / ›        → thumb_prev() / thumb_next()
//! pointer down/move/up on the strip → pointer_down / pointer_move / pointer_up
//! thumbnail click    → open_single(now, index)
//! "show all"         → open_grid(now) / show_grid()
//! grid image click   → show_single(now, index)
//! lightbox ◀ / ▶     → prev(now) / next(now)
//! key press          → key(now, key)
//! image load result  → image_loaded(&ticket, outcome)
//! ```
//!
//! and re-renders from the accessors (or [`crate::render`]) afterwards.
//! Operations that show an image return the [`PreloadTicket`] the presenter
//! must hand back once the full-size image has loaded or failed.

use std::sync::mpsc::Sender;
use std::time::{Duration, Instant};

use crate::carousel::{CarouselModel, CarouselState, NavControls};
use crate::config::{CaptionPosition, GalleryConfig, MoreIndicatorAction};
use crate::events::{EventEmitter, GalleryEvent};
use crate::gesture::{DragGestureInterpreter, NavIntent};
use crate::items::{GalleryItem, ImageDescriptor, collect_items};
use crate::lightbox::{LightboxSelection, LightboxView};
use crate::preload::{LoadOutcome, PreloadResolution, PreloadTicket, PreloadTracker};
use crate::responsive::{self, BreakpointTable};
use crate::schedule::{Scheduler, TaskKind};

/// Keys the lightbox responds to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    Escape,
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "ArrowLeft" => Some(Self::ArrowLeft),
            "ArrowRight" => Some(Self::ArrowRight),
            "Escape" | "Esc" => Some(Self::Escape),
            _ => None,
        }
    }
}

/// Lightbox prev/next button state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LightboxControls {
    pub prev_enabled: bool,
    pub next_enabled: bool,
}

/// Caption of the displayed image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaptionView<'a> {
    pub text: &'a str,
    pub position: CaptionPosition,
    /// False while the reveal delay runs or when there is no text.
    pub visible: bool,
}

pub struct Gallery {
    config: GalleryConfig,
    breakpoints: BreakpointTable,
    items: Vec<GalleryItem>,
    viewport_width: u32,
    pending_width: Option<u32>,
    /// `None` when the thumbnails render as a static grid.
    carousel: Option<CarouselModel>,
    drag: DragGestureInterpreter,
    selection: LightboxSelection,
    open: bool,
    view: LightboxView,
    caption_visible: bool,
    grid_expanded: bool,
    preload: PreloadTracker,
    scheduler: Scheduler,
    events: EventEmitter,
}

impl Gallery {
    pub fn new(
        config: GalleryConfig,
        descriptors: &[ImageDescriptor],
        viewport_width: u32,
        events: Option<Sender<GalleryEvent>>,
    ) -> Self {
        let config = config.clamped();
        let looping = config.carousel.looping;
        let mut gallery = Self {
            breakpoints: BreakpointTable::from_config(&config.responsive),
            items: collect_items(descriptors, &config.captions),
            drag: DragGestureInterpreter::new(config.navigation.drag_threshold),
            selection: LightboxSelection::new(0, looping),
            config,
            viewport_width,
            pending_width: None,
            carousel: None,
            open: false,
            view: LightboxView::Grid,
            caption_visible: false,
            grid_expanded: false,
            preload: PreloadTracker::default(),
            scheduler: Scheduler::default(),
            events: EventEmitter::new(events),
        };
        gallery.init_layout();
        gallery.events.emit(GalleryEvent::Init);
        gallery
    }

    fn init_layout(&mut self) {
        let looping = self.config.carousel.looping;
        let total = self.items.len();
        self.selection = LightboxSelection::new(total, looping);
        self.carousel = self.config.carousel.enabled.then(|| {
            CarouselModel::new(total, self.items_per_page(), looping, self.config.carousel.step)
        });
        tracing::debug!(
            items = total,
            per_page = self.items_per_page(),
            carousel = self.carousel.is_some(),
            "gallery laid out"
        );
    }

    pub fn config(&self) -> &GalleryConfig {
        &self.config
    }

    pub fn items(&self) -> &[GalleryItem] {
        &self.items
    }

    pub fn viewport_width(&self) -> u32 {
        self.viewport_width
    }

    /// Items per carousel page at the current viewport width.
    pub fn items_per_page(&self) -> usize {
        responsive::resolve(
            self.viewport_width,
            &self.breakpoints,
            self.config.layout.columns,
        )
    }

    /// Earliest pending timer, for the presenter to arm a wake-up.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.scheduler.next_deadline()
    }

    // =========================================================================
    // Resize
    // =========================================================================

    /// Record a resize notification. Applied once `resize_debounce_ms` passes
    /// without another one.
    pub fn resize(&mut self, now: Instant, width: u32) {
        self.pending_width = Some(width);
        let delay = Duration::from_millis(self.config.timing.resize_debounce_ms);
        self.scheduler.schedule(TaskKind::ResizeSettle, now, delay);
    }

    /// Apply a viewport width immediately.
    pub fn apply_resize(&mut self, width: u32) {
        self.viewport_width = width;
        let per_page = self.items_per_page();
        if let Some(carousel) = self.carousel.as_mut() {
            carousel.recompute_on_resize(per_page);
            tracing::debug!(
                width,
                per_page,
                position = carousel.position(),
                "carousel resized"
            );
        }
    }

    /// Fire every deadline due at `now`.
    pub fn tick(&mut self, now: Instant) {
        for task in self.scheduler.take_due(now) {
            match task {
                TaskKind::ResizeSettle => {
                    if let Some(width) = self.pending_width.take() {
                        self.apply_resize(width);
                    }
                }
                TaskKind::ShownNotify => self.events.emit(GalleryEvent::Shown),
                TaskKind::ClosedNotify => self.events.emit(GalleryEvent::Closed),
                TaskKind::CaptionReveal => self.caption_visible = true,
            }
        }
    }

    // =========================================================================
    // Carousel
    // =========================================================================

    pub fn carousel(&self) -> Option<&CarouselModel> {
        self.carousel.as_ref()
    }

    pub fn carousel_state(&self) -> Option<CarouselState> {
        self.carousel.as_ref().map(CarouselModel::state)
    }

    /// Thumbnail prev/next state. Hidden for a static grid.
    pub fn nav_controls(&self) -> NavControls {
        self.carousel
            .as_ref()
            .map(CarouselModel::nav_controls)
            .unwrap_or(NavControls {
                visible: false,
                prev_enabled: false,
                next_enabled: false,
            })
    }

    pub fn thumb_next(&mut self) {
        if let Some(carousel) = self.carousel.as_mut() {
            carousel.next();
        }
    }

    pub fn thumb_prev(&mut self) {
        if let Some(carousel) = self.carousel.as_mut() {
            carousel.prev();
        }
    }

    // =========================================================================
    // Drag
    // =========================================================================

    pub fn drag_enabled(&self) -> bool {
        self.config.navigation.enable_drag && self.carousel.is_some()
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    pub fn pointer_down(&mut self, x: f64, y: f64) {
        if self.drag_enabled() {
            self.drag.press(x, y);
        }
    }

    pub fn pointer_move(&mut self, x: f64) {
        self.drag.motion(x);
    }

    /// End a drag; pages the carousel when the gesture qualifies.
    pub fn pointer_up(&mut self, release_y: Option<f64>) -> Option<NavIntent> {
        let intent = self.drag.release(release_y)?;
        if let Some(carousel) = self.carousel.as_mut() {
            carousel.apply(intent);
        }
        Some(intent)
    }

    // =========================================================================
    // Keyboard
    // =========================================================================

    /// Handle a key press. Returns whether the key was consumed.
    pub fn key(&mut self, now: Instant, key: Key) -> bool {
        if !self.config.navigation.enable_keyboard || !self.open {
            return false;
        }
        match key {
            Key::ArrowLeft => {
                self.prev(now);
            }
            Key::ArrowRight => {
                self.next(now);
            }
            Key::Escape => self.close(now),
        }
        true
    }

    // =========================================================================
    // Lightbox
    // =========================================================================

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn view(&self) -> LightboxView {
        self.view
    }

    pub fn selection(&self) -> &LightboxSelection {
        &self.selection
    }

    pub fn current_index(&self) -> usize {
        self.selection.current_index()
    }

    pub fn current_item(&self) -> Option<&GalleryItem> {
        self.items.get(self.selection.current_index())
    }

    pub fn counter_text(&self) -> String {
        self.selection.counter_text()
    }

    pub fn lightbox_controls(&self) -> LightboxControls {
        LightboxControls {
            prev_enabled: self.selection.can_prev(),
            next_enabled: self.selection.can_next(),
        }
    }

    pub fn caption(&self) -> Option<CaptionView<'_>> {
        if !self.config.captions.enabled {
            return None;
        }
        let item = self.current_item()?;
        Some(CaptionView {
            text: &item.caption,
            position: self.config.captions.position,
            visible: self.caption_visible && !item.caption.is_empty(),
        })
    }

    pub fn is_loading(&self) -> bool {
        self.preload.is_loading()
    }

    /// Open on the single view at `index`, or on the grid when `None`.
    pub fn open(&mut self, now: Instant, index: Option<usize>) -> Option<PreloadTicket> {
        match index {
            Some(index) => self.open_single(now, index),
            None => {
                self.open_grid(now);
                None
            }
        }
    }

    pub fn open_grid(&mut self, now: Instant) {
        self.show_grid();
        self.show_modal(now);
    }

    pub fn open_single(&mut self, now: Instant, index: usize) -> Option<PreloadTicket> {
        if self.items.is_empty() {
            return None;
        }
        self.selection.select(index);
        self.show_modal(now);
        Some(self.show_single_image(now))
    }

    /// Switch the open modal to the grid view.
    pub fn show_grid(&mut self) {
        self.view = LightboxView::Grid;
        self.scheduler.cancel(TaskKind::CaptionReveal);
    }

    /// Switch to the single view at `index` (grid image click).
    pub fn show_single(&mut self, now: Instant, index: usize) -> Option<PreloadTicket> {
        if self.items.is_empty() {
            return None;
        }
        self.selection.select(index);
        Some(self.show_single_image(now))
    }

    pub fn close(&mut self, now: Instant) {
        if !self.open {
            return;
        }
        self.events.emit(GalleryEvent::Close);
        self.open = false;
        self.scheduler.cancel(TaskKind::CaptionReveal);
        let delay = Duration::from_millis(self.config.timing.modal_transition_ms);
        self.scheduler.schedule(TaskKind::ClosedNotify, now, delay);
    }

    pub fn next(&mut self, now: Instant) -> Option<PreloadTicket> {
        if self.items.is_empty() {
            return None;
        }
        self.events.emit(GalleryEvent::Next {
            index: self.selection.current_index(),
        });
        let index = self.selection.next();
        self.events.emit(GalleryEvent::Change { index });
        let ticket = self.show_single_image(now);
        self.events.emit(GalleryEvent::NextDone { index });
        Some(ticket)
    }

    pub fn prev(&mut self, now: Instant) -> Option<PreloadTicket> {
        if self.items.is_empty() {
            return None;
        }
        self.events.emit(GalleryEvent::Prev {
            index: self.selection.current_index(),
        });
        let index = self.selection.prev();
        self.events.emit(GalleryEvent::Change { index });
        let ticket = self.show_single_image(now);
        self.events.emit(GalleryEvent::PrevDone { index });
        Some(ticket)
    }

    /// Report the outcome of a full-size load.
    pub fn image_loaded(&mut self, ticket: &PreloadTicket, outcome: LoadOutcome) {
        if let PreloadResolution::Failed { index, url } = self.preload.complete(ticket, outcome) {
            tracing::warn!(index, url = %url, "full-size image failed to load");
            self.events.emit(GalleryEvent::LoadError { index, url });
        }
    }

    fn show_modal(&mut self, now: Instant) {
        self.events.emit(GalleryEvent::Show);
        self.open = true;
        let delay = Duration::from_millis(self.config.timing.modal_transition_ms);
        self.scheduler.schedule(TaskKind::ShownNotify, now, delay);
    }

    /// Display the selected item in the single view. Requires a non-empty gallery.
    fn show_single_image(&mut self, now: Instant) -> PreloadTicket {
        self.view = LightboxView::Single;
        let index = self.selection.current_index();
        let item = &self.items[index];
        let ticket = self.preload.request(index, item.full_size_url.clone());

        let has_caption = self.config.captions.enabled && !item.caption.is_empty();
        let delay_ms = self.config.captions.delay_ms;
        if has_caption && delay_ms > 0 {
            self.caption_visible = false;
            self.scheduler
                .schedule(TaskKind::CaptionReveal, now, Duration::from_millis(delay_ms));
        } else {
            self.caption_visible = has_caption;
            self.scheduler.cancel(TaskKind::CaptionReveal);
        }

        self.events.emit(GalleryEvent::Changed { index });
        ticket
    }

    // =========================================================================
    // Static grid
    // =========================================================================

    /// Thumbnails shown in the page body.
    pub fn visible_thumbnails(&self) -> usize {
        let total = self.items.len();
        if self.carousel.is_some() || self.grid_expanded {
            return total;
        }
        self.config
            .grid
            .max_images
            .map_or(total, |max| max.min(total))
    }

    /// Whether the static grid shows the "more" indicator.
    pub fn has_more_indicator(&self) -> bool {
        self.config.grid.show_more_indicator && self.visible_thumbnails() < self.items.len()
    }

    pub fn more_indicator_click(&mut self, now: Instant) {
        match self.config.grid.more_indicator_action {
            MoreIndicatorAction::Modal => self.open_grid(now),
            MoreIndicatorAction::Load => self.load_more(),
        }
    }

    /// Reveal every thumbnail in the static grid.
    pub fn load_more(&mut self) {
        self.grid_expanded = true;
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Re-collect items from fresh descriptors and lay out from scratch.
    pub fn refresh(&mut self, descriptors: &[ImageDescriptor]) {
        self.events.emit(GalleryEvent::Destroyed);
        self.scheduler.cancel_all();
        self.preload.reset();
        self.drag.cancel();
        self.pending_width = None;
        self.open = false;
        self.view = LightboxView::Grid;
        self.caption_visible = false;
        self.grid_expanded = false;
        self.items = collect_items(descriptors, &self.config.captions);
        self.init_layout();
        self.events.emit(GalleryEvent::Init);
    }

    pub fn destroy(self) {
        self.events.emit(GalleryEvent::Destroyed);
    }
}
