//! End-to-end flows through the public API: a presenter's view of the gallery.

use std::sync::mpsc;
use std::time::{Duration, Instant};

use vns_gallery::carousel::CarouselModel;
use vns_gallery::config::{GalleryConfig, config_from_str, load_config};
use vns_gallery::events::GalleryEvent;
use vns_gallery::gallery::{Gallery, Key};
use vns_gallery::gesture::{DragGestureInterpreter, NavIntent};
use vns_gallery::items::ImageDescriptor;
use vns_gallery::lightbox::{LightboxSelection, LightboxView};
use vns_gallery::preload::LoadOutcome;
use vns_gallery::render::render_gallery;
use vns_gallery::responsive::{self, BreakpointTable};

const MS: Duration = Duration::from_millis(1);

fn photos(count: usize) -> Vec<ImageDescriptor> {
    (0..count)
        .map(|i| {
            ImageDescriptor::new(format!("/img/{i:03}-thumb.jpg"))
                .with_attr("data-fullsize", format!("/img/{i:03}.jpg"))
                .with_attr("alt", format!("Photo {i}"))
        })
        .collect()
}

// =========================================================================
// Carousel properties
// =========================================================================

#[test]
fn max_position_formula_holds() {
    for total in 0..12 {
        for per_page in 1..6 {
            let model = CarouselModel::new(total, per_page, false, None);
            assert_eq!(
                model.max_position(),
                total.saturating_sub(per_page),
                "total={total} per_page={per_page}"
            );
        }
    }
}

#[test]
fn non_loop_position_stays_in_range() {
    let mut model = CarouselModel::new(11, 3, false, Some(2));
    let moves = [true, true, true, true, true, true, false, true, false, false, false, false, false];
    for forward in moves {
        if forward {
            model.next()
        } else {
            model.prev()
        }
        assert!(model.position() <= model.max_position());
    }
    assert_eq!(model.position(), 0);
}

#[test]
fn loop_lands_on_last_page_before_wrapping() {
    let mut model = CarouselModel::new(10, 4, true, None);
    for _ in 0..5 {
        model.advance(1);
    }
    assert_eq!(model.position(), 5);

    model.next();
    assert_eq!(model.position(), 6, "overshoot lands on max_position");
    model.next();
    assert_eq!(model.position(), 0, "then wraps");
}

#[test]
fn default_responsive_tiers() {
    let table = BreakpointTable::default();
    assert_eq!(responsive::resolve(1200, &table, None), 4);
    assert_eq!(responsive::resolve(800, &table, None), 3);
    assert_eq!(responsive::resolve(500, &table, None), 2);
}

#[test]
fn drag_thresholds() {
    let mut drag = DragGestureInterpreter::new(50.0);
    drag.press(100.0, 0.0);
    drag.motion(20.0);
    assert_eq!(drag.release(Some(5.0)), Some(NavIntent::Advance));

    drag.press(100.0, 0.0);
    drag.motion(70.0);
    assert_eq!(drag.release(Some(0.0)), None);
}

#[test]
fn lightbox_end_behavior() {
    let mut clamped = LightboxSelection::new(5, false);
    clamped.select(4);
    assert_eq!(clamped.next(), 4);

    let mut looping = LightboxSelection::new(5, true);
    looping.select(4);
    assert_eq!(looping.next(), 0);
}

// =========================================================================
// Presenter flows
// =========================================================================

#[test]
fn indices_map_back_to_document_order() {
    let descriptors = photos(7);
    let gallery = Gallery::new(GalleryConfig::default(), &descriptors, 1200, None);
    let html = render_gallery(&gallery).into_string();

    for (index, item) in gallery.items().iter().enumerate() {
        assert_eq!(item.source_url, format!("/img/{index:03}-thumb.jpg"));
        let thumb = format!(r#"src="/img/{index:03}-thumb.jpg" alt="Photo {index}""#);
        assert!(html.contains(&thumb), "missing thumbnail {index}");
    }

    let grid = &html[html.find("vns-gallery-grid-img").expect("lightbox grid rendered")..];
    let mut last = 0;
    for index in 0..7 {
        let at = grid
            .find(&format!("/img/{index:03}-thumb.jpg"))
            .expect("grid image present");
        assert!(at >= last, "grid image {index} out of order");
        last = at;
    }
}

#[test]
fn browse_session_event_sequence() {
    let t0 = Instant::now();
    let (tx, rx) = mpsc::channel();
    let mut gallery = Gallery::new(GalleryConfig::default(), &photos(4), 1200, Some(tx));

    let first = gallery.open_single(t0, 0).expect("items present");
    gallery.tick(t0 + 150 * MS);
    gallery.image_loaded(&first, LoadOutcome::Loaded);
    let second = gallery.next(t0 + 200 * MS).expect("items present");
    gallery.image_loaded(&second, LoadOutcome::Loaded);
    assert!(gallery.key(t0 + 300 * MS, Key::Escape));
    gallery.tick(t0 + 450 * MS);
    gallery.destroy();

    let names: Vec<&str> = rx.try_iter().map(|e| e.name()).collect();
    assert_eq!(
        names,
        vec![
            "init", "show", "changed", "shown", "next", "change", "changed", "nextDone",
            "close", "closed", "destroyed",
        ]
    );
}

#[test]
fn rapid_navigation_ignores_stale_loads() {
    let t0 = Instant::now();
    let (tx, rx) = mpsc::channel();
    let mut gallery = Gallery::new(GalleryConfig::default(), &photos(5), 1200, Some(tx));

    let a = gallery.open_single(t0, 0).expect("items present");
    let b = gallery.next(t0).expect("items present");
    let c = gallery.next(t0).expect("items present");
    rx.try_iter().for_each(drop);

    gallery.image_loaded(&a, LoadOutcome::Failed);
    gallery.image_loaded(&b, LoadOutcome::Loaded);
    assert!(gallery.is_loading());
    assert_eq!(rx.try_iter().count(), 0);

    gallery.image_loaded(&c, LoadOutcome::Failed);
    assert!(!gallery.is_loading());
    assert_eq!(
        rx.try_iter().collect::<Vec<_>>(),
        vec![GalleryEvent::LoadError { index: 2, url: "/img/002.jpg".into() }]
    );
}

#[test]
fn window_resize_burst_settles_once() {
    let t0 = Instant::now();
    let mut gallery = Gallery::new(GalleryConfig::default(), &photos(12), 1200, None);
    gallery.thumb_next();
    gallery.thumb_next();
    assert_eq!(gallery.carousel_state().unwrap().position, 8);

    for (i, width) in [1100, 900, 780, 640, 1300].into_iter().enumerate() {
        gallery.resize(t0 + (i as u32 * 30) * MS, width);
        gallery.tick(t0 + (i as u32 * 30) * MS);
    }
    assert_eq!(gallery.viewport_width(), 1200);

    let deadline = gallery.next_deadline().expect("resize pending");
    gallery.tick(deadline);
    assert_eq!(gallery.viewport_width(), 1300);
    assert_eq!(gallery.carousel_state().unwrap().position, 8);
}

#[test]
fn galleries_do_not_share_state() {
    let t0 = Instant::now();
    let mut left = Gallery::new(GalleryConfig::default(), &photos(10), 1200, None);
    let right = Gallery::new(GalleryConfig::default(), &photos(10), 1200, None);

    left.thumb_next();
    left.open_single(t0, 3);
    assert_eq!(right.carousel_state().unwrap().position, 0);
    assert!(!right.is_open());
    assert_eq!(right.view(), LightboxView::Grid);
}

#[test]
fn static_grid_with_load_more() {
    let config = config_from_str(
        r#"
        [carousel]
        enabled = false

        [grid]
        max_images = 5
        more_indicator_action = "load"
        "#,
    )
    .unwrap();
    let mut gallery = Gallery::new(config, &photos(9), 1200, None);
    assert!(render_gallery(&gallery).into_string().contains("vns-gallery-more-indicator"));

    gallery.more_indicator_click(Instant::now());
    let html = render_gallery(&gallery).into_string();
    assert!(!html.contains("vns-gallery-more-indicator"));
    assert!(html.contains("/img/008-thumb.jpg"));
}

#[test]
fn config_file_drives_layout() {
    let tmp = tempfile::TempDir::new().unwrap();
    std::fs::write(
        tmp.path().join("config.toml"),
        r#"
        [carousel]
        loop = true

        [[responsive]]
        min_width = 0
        columns = 1

        [[responsive]]
        min_width = 900
        columns = 5
        "#,
    )
    .unwrap();
    let config = load_config(tmp.path()).unwrap();
    let mut gallery = Gallery::new(config, &photos(6), 1000, None);

    assert_eq!(gallery.items_per_page(), 5);
    gallery.thumb_prev();
    assert_eq!(gallery.carousel_state().unwrap().position, 1, "loop back to last page");

    gallery.apply_resize(400);
    assert_eq!(gallery.items_per_page(), 1);
    assert_eq!(gallery.carousel_state().unwrap().max_position, 5);
}
