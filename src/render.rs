//! HTML rendering of a gallery's current state.
//!
//! Produces the widget markup for one [`Gallery`]: the thumbnail carousel (or
//! static grid) that replaces the original images in the page, and the
//! lightbox modal with its grid and single views. Re-render after any
//! operation and patch or swap the container's contents.
//!
//! ## Markup Structure
//!
//! ```text
//! div.vns-gallery-container
//! ├── div.vns-gallery-thumbnail-carousel-container[data-columns]
//! │   ├── div.vns-gallery-thumbnail-header      (show all, ‹, ›)
//! │   └── div.vns-gallery-thumbnail-carousel-wrapper
//! │       └── div.vns-gallery-thumbnail-carousel  (translateX strip)
//! │   ── or ──
//! ├── div.vns-gallery-static-grid[data-columns]   (+ more indicator)
//! └── div.vns-gallery-modal
//!     ├── close buttons (grid / single)
//!     ├── div.vns-gallery-grid[data-columns]
//!     └── div.vns-gallery-single-container
//!         ├── header: counter, show all, ◀, ▶
//!         ├── div.vns-gallery-image-wrapper   (spinner, image, overlay caption)
//!         └── caption below the image for `outside-*` positions
//! ```
//!
//! Every thumbnail carries `data-index`, its position in document order, which
//! is what the presenter passes back to [`Gallery::open_single`] and
//! [`Gallery::show_single`]. Hidden parts are rendered with the `hidden`
//! attribute rather than omitted so the presenter can toggle them cheaply.
//!
//! Uses [maud](https://maud.lambda.xyz/); all text and attribute values are
//! escaped.

use maud::{Markup, html};

use crate::carousel::CarouselModel;
use crate::config::{CaptionPlacement, GalleryConfig};
use crate::gallery::Gallery;
use crate::lightbox::LightboxView;

// ============================================================================
// Entry points
// ============================================================================

/// Render the whole widget for `gallery`.
pub fn render_gallery(gallery: &Gallery) -> Markup {
    let hover = gallery.config().navigation.hover_effect;
    html! {
        div.vns-gallery-container.vns-gallery-hover-enabled[hover] {
            @if let Some(carousel) = gallery.carousel() {
                (render_carousel(gallery, carousel))
            } @else {
                (render_static_grid(gallery))
            }
            (render_modal(gallery))
        }
    }
}

/// CSS custom properties derived from the configuration.
pub fn gallery_css(config: &GalleryConfig) -> String {
    format!(
        r#".vns-gallery-container {{
    --vns-gallery-modal-columns: {modal_columns};
    --vns-gallery-modal-width: {modal_width};
    --vns-gallery-transition: {transition}ms;
    --vns-gallery-caption-fade: {caption_fade}ms;
}}"#,
        modal_columns = config.layout.modal_columns,
        modal_width = config.layout.modal_width,
        transition = config.timing.modal_transition_ms,
        caption_fade = config.timing.caption_fade_ms,
    )
}

// ============================================================================
// Thumbnails
// ============================================================================

fn render_carousel(gallery: &Gallery, carousel: &CarouselModel) -> Markup {
    let config = gallery.config();
    let controls = carousel.nav_controls();
    let transform = format!("transform: translateX({}%);", carousel.translate_percent());

    html! {
        div.vns-gallery-thumbnail-carousel-container data-columns=(carousel.items_per_page()) {
            div.vns-gallery-thumbnail-header {
                div.vns-gallery-thumbnail-nav-controls hidden[!controls.visible] {
                    @if config.carousel.show_all_button {
                        button.vns-gallery-see-all-btn type="button" { (config.labels.show_all) }
                    }
                    button.vns-gallery-carousel-nav.vns-gallery-thumb-prev
                        type="button" disabled[!controls.prev_enabled] { (config.labels.thumb_prev) }
                    button.vns-gallery-carousel-nav.vns-gallery-thumb-next
                        type="button" disabled[!controls.next_enabled] { (config.labels.thumb_next) }
                }
            }
            div.vns-gallery-thumbnail-carousel-wrapper {
                div.vns-gallery-thumbnail-carousel.vns-gallery-dragging[gallery.is_dragging()] style=(transform) {
                    @for (index, item) in gallery.items().iter().enumerate() {
                        div.vns-gallery-thumbnail-item {
                            img.vns-gallery-thumbnail-img src=(item.source_url) alt=(item.alt_text)
                                title=[non_empty(&item.title_text)] data-index=(index) loading="lazy";
                        }
                    }
                }
            }
        }
    }
}

fn render_static_grid(gallery: &Gallery) -> Markup {
    let visible = gallery.visible_thumbnails();
    html! {
        div.vns-gallery-static-grid data-columns=(gallery.items_per_page()) {
            @for (index, item) in gallery.items().iter().take(visible).enumerate() {
                div.vns-gallery-static-item {
                    img.vns-gallery-thumbnail-img src=(item.source_url) alt=(item.alt_text)
                        title=[non_empty(&item.title_text)] data-index=(index) loading="lazy";
                }
            }
            @if gallery.has_more_indicator() {
                div.vns-gallery-static-item.vns-gallery-more-indicator {
                    div.vns-gallery-more-indicator-content { (gallery.config().grid.more_indicator_text) }
                }
            }
        }
    }
}

// ============================================================================
// Lightbox
// ============================================================================

fn render_modal(gallery: &Gallery) -> Markup {
    let config = gallery.config();
    let nav = &config.navigation;
    let open = gallery.is_open();
    let single = gallery.view() == LightboxView::Single;

    html! {
        div.vns-gallery-modal.vns-gallery-open[open] role="dialog" tabindex="-1" hidden[!open] {
            div.vns-gallery-modal-dialog {
                div.vns-gallery-modal-content {
                    @if nav.show_close_button_grid {
                        button.vns-gallery-modal-close.vns-gallery-close-grid
                            type="button" aria-label="Close" hidden[single] { "×" }
                    }
                    @if nav.show_close_button_single {
                        button.vns-gallery-modal-close.vns-gallery-close-single
                            type="button" aria-label="Close" hidden[!single] { "×" }
                    }
                    div.vns-gallery-modal-body {
                        (render_lightbox_grid(gallery, single))
                        (render_single_view(gallery, single))
                    }
                }
            }
        }
    }
}

fn render_lightbox_grid(gallery: &Gallery, hide: bool) -> Markup {
    let current = gallery.current_index();
    html! {
        div.vns-gallery-grid data-columns=(gallery.config().layout.modal_columns) hidden[hide] {
            @for (index, item) in gallery.items().iter().enumerate() {
                img.vns-gallery-grid-img.vns-gallery-active[index == current]
                    src=(item.source_url) alt=(item.alt_text) data-index=(index) loading="lazy";
            }
        }
    }
}

fn render_single_view(gallery: &Gallery, show: bool) -> Markup {
    let config = gallery.config();
    let nav = &config.navigation;
    let controls = gallery.lightbox_controls();
    let width = format!("width: {};", config.layout.modal_width);
    let item = gallery.current_item().filter(|_| show);
    let caption = gallery.caption();
    let placement = config.captions.position.placement();
    // Static grids always offer "show all"; a carousel only when it pages
    let hide_show_all = gallery.carousel().is_some() && !gallery.nav_controls().visible;

    let caption_markup = html! {
        @if let Some(caption) = caption {
            div class={ "vns-gallery-caption vns-gallery-caption-" (caption.position.css_suffix()) }
                hidden[!caption.visible] {
                (caption.text)
            }
        }
    };

    html! {
        div.vns-gallery-single-container style=(width) hidden[!show] {
            div.vns-gallery-single {
                div.vns-gallery-lightbox-header {
                    @if nav.show_counter {
                        div.vns-gallery-lightbox-counter { (gallery.counter_text()) }
                    }
                    div.vns-gallery-lightbox-controls {
                        @if config.carousel.show_all_button {
                            button.vns-gallery-show-all-btn type="button"
                                hidden[hide_show_all] { (config.labels.show_all) }
                        }
                        @if nav.show_navigation {
                            button.vns-gallery-prev-btn type="button"
                                disabled[!controls.prev_enabled] { (config.labels.prev) }
                            button.vns-gallery-next-btn type="button"
                                disabled[!controls.next_enabled] { (config.labels.next) }
                        }
                    }
                }
                div.vns-gallery-image-wrapper {
                    div.vns-gallery-loading hidden[!gallery.is_loading()] {
                        div.vns-gallery-spinner {}
                    }
                    @if let Some(item) = item {
                        img.vns-gallery-single-img src=(item.full_size_url) alt=(item.alt_text)
                            title=[non_empty(&item.title_text)];
                    }
                    @if placement != CaptionPlacement::Outside {
                        (caption_markup)
                    }
                }
                @if placement == CaptionPlacement::Outside {
                    (caption_markup)
                }
            }
        }
    }
}

fn non_empty(s: &str) -> Option<&str> {
    (!s.is_empty()).then_some(s)
}

// ============================================================================
// Tests
// ============================================================================
