//! End-to-end markup flows over the public API: pointer gestures in,
//! shapes out, records saved and restored.
#![allow(clippy::float_cmp)]

use serde_json::{Value, json};
use survey_markup::{
    MarkupConfig, MarkupShape, Point, PolylineBuilder, Shape, StyleUpdate, create_circle, create_rectangle,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

/// Simulate a photo's markup layer: a rectangle and circle from drags, and a
/// polyline from clicks.
fn draw_layer() -> Vec<Shape> {
    let mut layer: Vec<Shape> = Vec::new();

    if let Some(rect) = create_rectangle(pt(320.0, 240.0), pt(120.0, 80.0), &StyleUpdate::stroke("#d32f2f")) {
        layer.push(rect.into());
    }
    // A stray click is dropped.
    if let Some(speck) = create_rectangle(pt(10.0, 10.0), pt(11.0, 12.0), &StyleUpdate::default()) {
        layer.push(speck.into());
    }
    if let Some(circle) = create_circle(pt(400.0, 100.0), pt(500.0, 160.0), &StyleUpdate::default()) {
        layer.push(circle.into());
    }

    let mut builder = PolylineBuilder::with_style(StyleUpdate::stroke_width(4.0));
    for p in [pt(50.0, 75.0), pt(250.0, 50.0), pt(300.0, 200.0), pt(200.0, 250.0), pt(100.0, 225.0)] {
        builder.add_point(p);
    }
    if let Some(poly) = builder.into_shape() {
        layer.push(poly.into());
    }
    layer
}

#[test]
fn drawn_layer_has_expected_shapes() {
    init_tracing();
    let layer = draw_layer();
    let kinds: Vec<_> = layer.iter().map(|s| s.type_name()).collect();
    assert_eq!(kinds, vec!["rectangleShape", "circleShape", "polylineShape"]);

    let rect = layer[0].as_rectangle().unwrap();
    assert_eq!((rect.position_x(), rect.position_y()), (120.0, 80.0));
    assert_eq!((rect.shape_width(), rect.shape_height()), (200.0, 160.0));

    let circle = layer[1].as_circle().unwrap();
    assert_eq!((circle.rx(), circle.ry()), (50.0, 30.0));
    assert!(circle.is_ellipse());

    let poly = layer[2].as_polyline().unwrap();
    let b = poly.get_bounds();
    assert_eq!((b.left, b.top, b.right, b.bottom), (50.0, 50.0, 300.0, 250.0));
}

#[test]
fn saved_layer_restores_identically() {
    init_tracing();
    let layer = draw_layer();
    let saved: Vec<Value> = layer.iter().map(|s| s.to_object()).collect();

    // Through a JSON string, as a storage layer would.
    let text = serde_json::to_string(&saved).unwrap();
    let loaded: Vec<Value> = serde_json::from_str(&text).unwrap();

    let restored: Vec<Shape> = loaded.iter().map(|v| Shape::from_object(v).unwrap()).collect();
    assert_eq!(restored, layer);
    for shape in &restored {
        assert!(shape.drawable().coords().is_some());
        assert!(shape.drawable().has_controls);
    }
}

#[test]
fn older_documents_still_load() {
    init_tracing();
    let legacy = json!([
        {"type": "rectangleShape", "positionX": 10, "positionY": 20, "width": 30, "height": 40},
        {"type": "circleShape", "centerX": 5, "centerY": 5, "rx": 2, "ry": 2, "left": 3, "top": 3},
        {"type": "polylineShape", "points": [{"x": 0, "y": 0}, {"x": 9, "y": 9}], "left": 0, "top": 0,
         "stroke": "#00ff00"}
    ]);
    let restored: Vec<Shape> = legacy
        .as_array()
        .unwrap()
        .iter()
        .map(|v| Shape::from_object(v).unwrap())
        .collect();
    assert_eq!(restored.len(), 3);
    assert_eq!(restored[0].as_rectangle().unwrap().position_y(), 20.0);
    assert!(restored[1].as_circle().unwrap().is_circle());
    assert_eq!(restored[2].style().stroke, "#00ff00");
    assert_eq!(restored[2].style().stroke_width, 2.0);
}

#[test]
fn editing_after_restore_keeps_cache_in_step() {
    init_tracing();
    let mut layer = draw_layer();
    let Shape::Rectangle(rect) = &mut layer[0] else {
        panic!("expected rectangle first");
    };
    rect.update_from_drag(pt(0.0, 0.0), pt(-40.0, -30.0));
    let coords = rect.drawable().coords().unwrap();
    assert_eq!(coords.tl, pt(-40.0, -30.0));
    assert_eq!(coords.br, pt(0.0, 0.0));
    assert!(layer[0].hit_test(pt(-20.0, -15.0), &MarkupConfig::default()));
}
