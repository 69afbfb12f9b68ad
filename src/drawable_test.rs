#![allow(clippy::float_cmp)]

use serde_json::json;

use super::*;

#[test]
fn new_has_interaction_defaults() {
    let d = Drawable::new();
    assert!(d.has_controls);
    assert!(d.has_borders);
    assert!(!d.lock_movement_x);
    assert!(!d.lock_movement_y);
    assert_eq!(d.coords(), None);
    assert_eq!(d.coords_refreshes(), 0);
}

// =============================================================
// Props
// =============================================================

#[test]
fn set_and_get_props() {
    let mut d = Drawable::new();
    d.set("left", 12.5);
    d.set("stroke", "#112233");
    assert_eq!(d.get_f64("left"), Some(12.5));
    assert_eq!(d.get_str("stroke"), Some("#112233"));
    assert_eq!(d.get_f64("stroke"), None);
    assert_eq!(d.get("missing"), None);
}

#[test]
fn set_props_merges_and_null_deletes() {
    let mut d = Drawable::new();
    d.set("a", 1);
    d.set("b", 2);
    assert!(d.set_props(&json!({"b": null, "c": 3})));
    assert_eq!(d.get_f64("a"), Some(1.0));
    assert_eq!(d.get("b"), None);
    assert_eq!(d.get_f64("c"), Some(3.0));
}

#[test]
fn set_props_rejects_non_object() {
    let mut d = Drawable::new();
    d.set("a", 1);
    assert!(!d.set_props(&json!([1, 2])));
    assert_eq!(d.get_f64("a"), Some(1.0));
}

// =============================================================
// Coordinate cache
// =============================================================

#[test]
fn set_coords_caches_corners_and_counts() {
    let mut d = Drawable::new();
    d.set_coords(Bounds { left: 10.0, top: 20.0, right: 110.0, bottom: 70.0 });
    let c = d.coords().unwrap();
    assert_eq!(c.tl, Point::new(10.0, 20.0));
    assert_eq!(c.tr, Point::new(110.0, 20.0));
    assert_eq!(c.br, Point::new(110.0, 70.0));
    assert_eq!(c.bl, Point::new(10.0, 70.0));
    assert_eq!(d.coords_refreshes(), 1);

    d.set_coords(Bounds::default());
    assert_eq!(d.coords_refreshes(), 2);
}

#[test]
fn contains_point_uses_cache() {
    let mut d = Drawable::new();
    assert!(!d.contains_point(Point::new(0.0, 0.0)));
    d.set_coords(Bounds { left: 0.0, top: 0.0, right: 10.0, bottom: 10.0 });
    assert!(d.contains_point(Point::new(5.0, 5.0)));
    assert!(!d.contains_point(Point::new(15.0, 5.0)));
}

#[test]
fn to_object_includes_flags() {
    let mut d = Drawable::new();
    d.set("left", 1);
    let obj = d.to_object();
    assert_eq!(obj["left"], json!(1));
    assert_eq!(obj["hasControls"], json!(true));
    assert_eq!(obj["hasBorders"], json!(true));
    assert_eq!(obj["lockMovementX"], json!(false));
    assert_eq!(obj["lockMovementY"], json!(false));
}
