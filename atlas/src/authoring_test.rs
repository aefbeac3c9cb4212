use rand::SeedableRng;
use rand::rngs::SmallRng;

use super::*;
use crate::catalog::Catalog;

fn rng() -> SmallRng {
    SmallRng::seed_from_u64(7)
}

// =============================================================
// Rounding and labels
// =============================================================

#[test]
fn rounds_half_up() {
    assert_eq!(round_half_up(2.5), 3);
    assert_eq!(round_half_up(-2.5), -2);
    assert_eq!(round_half_up(-2.6), -3);
    assert_eq!(round_half_up(0.49), 0);
}

#[test]
fn coordinate_label_is_rounded() {
    assert_eq!(coordinate_label(Point::new(10.4, 19.6)), "x: 10, y: 20");
}

#[test]
fn negative_zero_prints_as_zero() {
    assert_eq!(coordinate_label(Point::new(-0.2, -0.4)), "x: 0, y: 0");
}

// =============================================================
// Ids
// =============================================================

#[test]
fn authored_id_hashes_coordinates() {
    assert_eq!(authored_id(10, 20), "rtiaz");
    assert_eq!(authored_id(0, 0), "10ok");
}

#[test]
fn authored_id_is_stable() {
    assert_eq!(authored_id(-5, 7), authored_id(-5, 7));
    assert_ne!(authored_id(-5, 7), authored_id(7, -5));
}

// =============================================================
// Records
// =============================================================

#[test]
fn authored_planet_fields() {
    let p = author_planet(Point::new(9.6, 20.2), &mut rng());
    assert_eq!(p.id, "rtiaz");
    assert_eq!((p.x, p.y), (10, 20));
    assert!((AUTHORED_RADIUS_MIN..=AUTHORED_RADIUS_MAX).contains(&p.radius));
    assert_eq!(p.color.len(), 7);
    assert!(p.color.starts_with('#'));
    assert!(p.color[1..].chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    assert!(p.border_color.is_none());
    assert!(p.name.is_empty() && p.info.is_empty() && p.race.is_empty());
    assert!(p.visible);
    assert!(p.unknown);
}

#[test]
fn radius_stays_in_range_over_many_draws() {
    let mut rng = rng();
    for _ in 0..500 {
        let p = author_planet(Point::new(1.0, 1.0), &mut rng);
        assert!((12..=35).contains(&p.radius), "radius {}", p.radius);
    }
}

#[test]
fn same_seed_same_record() {
    let a = author_planet(Point::new(3.0, 4.0), &mut rng());
    let b = author_planet(Point::new(3.0, 4.0), &mut rng());
    assert_eq!(a, b);
}

#[test]
fn pretty_json_shape() {
    let p = author_planet(Point::new(10.0, 20.0), &mut rng());
    let json = p.to_pretty_json().unwrap();
    assert!(json.starts_with("{\n  \"id\": \"rtiaz\",\n  \"x\": 10,\n  \"y\": 20,"));
    assert!(json.contains("\n  \"borderColor\": null,"));
    assert!(json.contains("\n  \"unknown\": true,"));
    assert!(json.ends_with("\n  \"race\": \"\"\n}"));
}

#[test]
fn authored_record_loads_back_as_unknown_planet() {
    let p = author_planet(Point::new(100.0, 200.0), &mut rng());
    let json = format!("[{}]", p.to_pretty_json().unwrap());
    let catalog = Catalog::from_json(&json, "[]").unwrap();
    let loaded = catalog.planet(&p.id).unwrap();
    assert_eq!(loaded.id, p.id);
    assert!(loaded.unknown);
    assert!(loaded.is_rendered());
    assert!(!loaded.has_anchor);
}
