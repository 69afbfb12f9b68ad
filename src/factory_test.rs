#![allow(clippy::float_cmp)]

use super::*;
use crate::shape::MarkupShape;
use crate::style::{CIRCLE_DEFAULT_STYLE, POLYLINE_DEFAULT_STYLE, RECTANGLE_DEFAULT_STYLE, Style};

fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

fn no_options() -> StyleUpdate {
    StyleUpdate::default()
}

/// The four ways to drag between (100,100) and (200,200).
fn four_drags() -> [(Point, Point); 4] {
    [
        (pt(100.0, 100.0), pt(200.0, 200.0)), // down-right
        (pt(200.0, 200.0), pt(100.0, 100.0)), // up-left
        (pt(200.0, 100.0), pt(100.0, 200.0)), // down-left
        (pt(100.0, 200.0), pt(200.0, 100.0)), // up-right
    ]
}

// =============================================================
// create_rectangle
// =============================================================

#[test]
fn rectangle_same_for_every_drag_direction() {
    for (start, end) in four_drags() {
        let r = create_rectangle(start, end, &no_options()).unwrap();
        assert_eq!(r.position_x(), 100.0);
        assert_eq!(r.position_y(), 100.0);
        assert_eq!(r.shape_width(), 100.0);
        assert_eq!(r.shape_height(), 100.0);
        assert!(r.is_square());
    }
}

#[test]
fn rectangle_six_pixel_drag_accepted() {
    let r = create_rectangle(pt(100.0, 100.0), pt(106.0, 106.0), &no_options()).unwrap();
    assert_eq!(r.shape_width(), 6.0);
}

#[test]
fn rectangle_five_pixel_drag_accepted() {
    assert!(create_rectangle(pt(0.0, 0.0), pt(5.0, 5.0), &no_options()).is_some());
}

#[test]
fn rectangle_three_pixel_drag_rejected() {
    assert!(create_rectangle(pt(100.0, 100.0), pt(103.0, 103.0), &no_options()).is_none());
}

#[test]
fn rectangle_zero_drag_rejected() {
    assert!(create_rectangle(pt(100.0, 100.0), pt(100.0, 100.0), &no_options()).is_none());
}

#[test]
fn rectangle_thin_drag_rejected() {
    assert!(create_rectangle(pt(0.0, 0.0), pt(200.0, 3.0), &no_options()).is_none());
    assert!(create_rectangle(pt(0.0, 0.0), pt(3.0, 200.0), &no_options()).is_none());
}

#[test]
fn rectangle_options_merge_over_defaults() {
    let r = create_rectangle(pt(0.0, 0.0), pt(50.0, 50.0), &StyleUpdate::stroke("#ff0000")).unwrap();
    assert_eq!(r.style().stroke, "#ff0000");
    assert_eq!(r.style().stroke_width, RECTANGLE_DEFAULT_STYLE.stroke_width);
    assert_eq!(r.style().fill, RECTANGLE_DEFAULT_STYLE.fill);
}

#[test]
fn rectangle_with_config_threshold() {
    let config = MarkupConfig { min_shape_size: 20.0, ..MarkupConfig::default() };
    assert!(create_rectangle_with(&config, pt(0.0, 0.0), pt(10.0, 10.0), &no_options()).is_none());
    assert!(create_rectangle_with(&config, pt(0.0, 0.0), pt(20.0, 20.0), &no_options()).is_some());
}

// =============================================================
// create_circle
// =============================================================

#[test]
fn circle_same_for_every_drag_direction() {
    for (start, end) in four_drags() {
        let c = create_circle(start, end, &no_options()).unwrap();
        assert_eq!(c.center_x(), 150.0);
        assert_eq!(c.center_y(), 150.0);
        assert_eq!(c.rx(), 50.0);
        assert_eq!(c.ry(), 50.0);
        assert!(c.is_circle());
    }
}

#[test]
fn circle_wide_drag_is_ellipse() {
    let c = create_circle(pt(100.0, 100.0), pt(300.0, 200.0), &no_options()).unwrap();
    assert_eq!(c.rx(), 100.0);
    assert_eq!(c.ry(), 50.0);
    assert!(!c.is_circle());
    assert!(c.is_ellipse());
}

#[test]
fn circle_threshold() {
    assert!(create_circle(pt(100.0, 100.0), pt(106.0, 106.0), &no_options()).is_some());
    assert!(create_circle(pt(100.0, 100.0), pt(103.0, 103.0), &no_options()).is_none());
    assert!(create_circle(pt(100.0, 100.0), pt(100.0, 100.0), &no_options()).is_none());
}

#[test]
fn circle_default_style() {
    let c = create_circle(pt(0.0, 0.0), pt(40.0, 40.0), &no_options()).unwrap();
    assert_eq!(c.get_style(), Style::from(&CIRCLE_DEFAULT_STYLE));
}

// =============================================================
// create_polyline
// =============================================================

#[test]
fn polyline_needs_two_points() {
    assert!(create_polyline(&[], &no_options()).is_none());
    assert!(create_polyline(&[pt(100.0, 100.0)], &no_options()).is_none());
}

#[test]
fn polyline_two_points_is_open() {
    let p = create_polyline(&[pt(100.0, 100.0), pt(200.0, 100.0)], &no_options()).unwrap();
    assert_eq!(p.point_count(), 2);
    assert!(!p.is_closed());
    assert_eq!(p.get_style(), Style::from(&POLYLINE_DEFAULT_STYLE));
}

#[test]
fn polyline_options_merge() {
    let p = create_polyline(&[pt(0.0, 0.0), pt(1.0, 1.0)], &StyleUpdate::stroke_width(8.0)).unwrap();
    assert_eq!(p.style().stroke_width, 8.0);
    assert_eq!(p.style().stroke, POLYLINE_DEFAULT_STYLE.stroke);
}
