#![allow(clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-10;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn point_approx_eq(a: Point, b: Point) -> bool {
    approx_eq(a.x, b.x) && approx_eq(a.y, b.y)
}

fn big_scene() -> Viewport {
    Viewport::new(Size::new(800.0, 600.0), Size::new(1600.0, 1200.0))
}

// --- Point ---

#[test]
fn point_add_and_sub() {
    let a = Point::new(3.0, 4.0);
    let b = Point::new(1.0, -2.0);
    assert_eq!(a + b, Point::new(4.0, 2.0));
    assert_eq!(a - b, Point::new(2.0, 6.0));
}

#[test]
fn size_max_is_component_wise() {
    let s = Size::new(100.0, 50.0).max(Size::new(80.0, 90.0));
    assert_eq!(s, Size::new(100.0, 90.0));
}

// --- clamp ---

#[test]
fn clamp_keeps_in_range_offset() {
    let vp = big_scene();
    assert_eq!(vp.clamp(Point::new(-200.0, -100.0)), Point::new(-200.0, -100.0));
}

#[test]
fn clamp_pins_positive_offsets_to_zero() {
    let vp = big_scene();
    assert_eq!(vp.clamp(Point::new(50.0, 10.0)), Point::new(0.0, 0.0));
}

#[test]
fn clamp_stops_at_far_edge() {
    let vp = big_scene();
    assert_eq!(vp.clamp(Point::new(-5000.0, -5000.0)), Point::new(-800.0, -600.0));
}

#[test]
fn clamp_equal_sizes_forces_origin() {
    let vp = Viewport::new(Size::new(800.0, 600.0), Size::new(800.0, 600.0));
    for requested in [Point::new(-300.0, 200.0), Point::new(123.0, -45.0), Point::new(0.0, 0.0)] {
        assert_eq!(vp.clamp(requested), Point::new(0.0, 0.0));
    }
}

#[test]
fn clamp_smaller_scene_pins_to_origin_not_center() {
    let vp = Viewport::new(Size::new(800.0, 600.0), Size::new(400.0, 300.0));
    assert_eq!(vp.clamp(Point::new(200.0, 150.0)), Point::new(0.0, 0.0));
    assert_eq!(vp.clamp(Point::new(-10.0, -10.0)), Point::new(0.0, 0.0));
}

#[test]
fn clamp_axes_are_independent() {
    let vp = Viewport::new(Size::new(800.0, 600.0), Size::new(1600.0, 300.0));
    assert_eq!(vp.clamp(Point::new(-400.0, -100.0)), Point::new(-400.0, 0.0));
}

#[test]
fn clamp_output_within_bounds_across_grid() {
    let containers = [Size::new(320.0, 240.0), Size::new(800.0, 600.0), Size::new(1920.0, 1080.0)];
    let scenes = [Size::new(1920.0, 1080.0), Size::new(2000.0, 2000.0), Size::new(4096.0, 3000.0)];
    for container in containers {
        for scene in scenes {
            let vp = Viewport::new(container, scene);
            let min = vp.min_offset();
            for x in [-10_000.0, -1000.0, -1.5, 0.0, 7.0, 10_000.0] {
                for y in [-10_000.0, -333.0, 0.0, 42.0] {
                    let out = vp.clamp(Point::new(x, y));
                    assert!(min.x <= out.x && out.x <= 0.0, "{container:?} {scene:?} x={x} -> {out:?}");
                    assert!(min.y <= out.y && out.y <= 0.0, "{container:?} {scene:?} y={y} -> {out:?}");
                }
            }
        }
    }
}

// --- center ---

#[test]
fn center_large_scene() {
    let mut vp = big_scene();
    assert_eq!(vp.center(), Point::new(-400.0, -300.0));
    assert_eq!(vp.offset(), Point::new(-400.0, -300.0));
}

#[test]
fn center_is_idempotent() {
    let mut vp = Viewport::new(Size::new(1024.0, 700.0), Size::new(2000.0, 2000.0));
    let first = vp.center();
    let second = vp.center();
    assert_eq!(first, second);
}

#[test]
fn center_smaller_scene_still_clamps_to_origin() {
    let mut vp = Viewport::new(Size::new(800.0, 600.0), Size::new(400.0, 300.0));
    assert_eq!(vp.center(), Point::new(0.0, 0.0));
}

// --- pan_to ---

#[test]
fn drag_scenario_within_bounds() {
    let mut vp = big_scene();
    let anchor = vp.anchor_for(Point::new(0.0, 0.0));
    let offset = vp.pan_to(Point::new(-200.0, -100.0), anchor);
    assert_eq!(offset, Point::new(-200.0, -100.0));
}

#[test]
fn pan_keeps_grabbed_scene_point_under_pointer() {
    let mut vp = big_scene();
    vp.center();
    let start = Point::new(410.0, 275.0);
    let grabbed = vp.screen_to_scene(start);
    let anchor = vp.anchor_for(start);

    for pointer in [Point::new(300.0, 200.0), Point::new(500.0, 350.0), Point::new(90.0, 12.5)] {
        vp.pan_to(pointer, anchor);
        assert!(point_approx_eq(vp.scene_to_screen(grabbed), pointer));
    }
}

#[test]
fn pan_clamps_at_boundaries() {
    let mut vp = big_scene();
    let anchor = vp.anchor_for(Point::new(100.0, 100.0));
    assert_eq!(vp.pan_to(Point::new(900.0, 900.0), anchor), Point::new(0.0, 0.0));
    assert_eq!(vp.pan_to(Point::new(-2000.0, -2000.0), anchor), Point::new(-800.0, -600.0));
}

// --- resizing ---

#[test]
fn growing_container_reclamps_offset() {
    let mut vp = big_scene();
    vp.pan_to(Point::new(-800.0, -600.0), Point::default());
    vp.set_container(Size::new(1200.0, 900.0));
    assert_eq!(vp.offset(), Point::new(-400.0, -300.0));
}

#[test]
fn shrinking_scene_reclamps_offset() {
    let mut vp = big_scene();
    vp.pan_to(Point::new(-700.0, -500.0), Point::default());
    vp.set_scene(Size::new(1000.0, 800.0));
    assert_eq!(vp.offset(), Point::new(-200.0, -200.0));
}

// --- conversions ---

#[test]
fn screen_scene_round_trip() {
    let mut vp = big_scene();
    vp.pan_to(Point::new(-123.0, -45.0), Point::default());
    let screen = Point::new(17.0, 300.0);
    assert!(point_approx_eq(vp.scene_to_screen(vp.screen_to_scene(screen)), screen));
}

#[test]
fn screen_to_scene_subtracts_offset() {
    let mut vp = big_scene();
    vp.pan_to(Point::new(-200.0, -100.0), Point::default());
    assert_eq!(vp.screen_to_scene(Point::new(10.0, 10.0)), Point::new(210.0, 110.0));
}

#[test]
fn css_transform_formats_pixels() {
    let mut vp = big_scene();
    vp.pan_to(Point::new(-200.5, -100.0), Point::default());
    assert_eq!(vp.css_transform(), "translate(-200.5px, -100px)");
}
