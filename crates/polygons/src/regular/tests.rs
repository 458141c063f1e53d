use super::*;
use crate::error::PolygonError;
use nalgebra::Vector2;
use rand::{rngs::StdRng, Rng, SeedableRng};

fn shoelace(verts: &[Vector2<f64>]) -> f64 {
    let mut acc = 0.0;
    for i in 0..verts.len() {
        let p = verts[i];
        let q = verts[(i + 1) % verts.len()];
        acc += p.x * q.y - q.x * p.y;
    }
    0.5 * acc
}

#[test]
fn square_measures() {
    let sq = RegularPolygon::new(4, 10.0).unwrap();
    assert_eq!(sq.interior_angle(), 90.0);
    assert!((sq.edge_length() - 200f64.sqrt()).abs() < 1e-12);
    assert_eq!(sq.apothem(), 7.07);
    // Area uses the rounded apothem, not 10 cos(π/4).
    assert_eq!(sq.area(), 4.0 * sq.edge_length() * 7.07 / 2.0);
    assert!((sq.area() - 199.969_797_719_555_6).abs() < 1e-9);
    assert_eq!(sq.perimeter(), 4.0 * sq.edge_length());
    assert!((sq.ratio() - 3.535).abs() < 1e-12);
}

#[test]
fn triangle_and_hexagon_measures() {
    let tri = RegularPolygon::new(3, 10.0).unwrap();
    assert_eq!(tri.interior_angle(), 60.0);
    assert_eq!(tri.apothem(), 5.0);
    assert!((tri.edge_length() - 10.0 * 3f64.sqrt()).abs() < 1e-12);

    let hex = RegularPolygon::new(6, 10.0).unwrap();
    assert_eq!(hex.interior_angle(), 120.0);
    assert!((hex.edge_length() - 10.0).abs() < 1e-12);
    assert_eq!(hex.apothem(), 8.66);
    assert!((hex.ratio() - 4.33).abs() < 1e-12);
}

#[test]
fn rejects_out_of_domain_inputs() {
    for n in [0, 1, 2] {
        assert!(matches!(
            RegularPolygon::new(n, 1.0),
            Err(PolygonError::InvalidArgument { .. })
        ));
    }
    assert!(matches!(
        RegularPolygon::new(10, -1.0),
        Err(PolygonError::InvalidArgument { .. })
    ));
    assert!(RegularPolygon::new(5, f64::NAN).is_err());
    assert!(RegularPolygon::new(5, f64::INFINITY).is_err());
}

#[test]
fn zero_radius_is_degenerate_but_valid() {
    let p = RegularPolygon::new(3, 0.0).unwrap();
    assert_eq!(p.area(), 0.0);
    assert_eq!(p.perimeter(), 0.0);
    assert_eq!(p.edge_length(), 0.0);
    assert_eq!(p.ratio(), 0.0);
}

#[test]
fn interior_angle_increases_toward_180() {
    let mut prev = 0.0;
    for n in 3..500 {
        let a = RegularPolygon::new(n, 1.0).unwrap().interior_angle();
        assert!(a > prev && a < 180.0);
        prev = a;
    }
    let big = RegularPolygon::new(1_000_000, 1.0).unwrap().interior_angle();
    assert!(180.0 - big < 1e-3);
}

#[test]
fn equality_is_exact_on_both_fields() {
    let a = RegularPolygon::new(5, 2.0).unwrap();
    let b = RegularPolygon::new(5, 2.0).unwrap();
    let c = RegularPolygon::new(5, 2.000_000_1).unwrap();
    let d = RegularPolygon::new(6, 2.0).unwrap();
    let a_copy = a;
    assert_eq!(a, a_copy);
    assert_eq!(a, b);
    assert_eq!(b, a);
    assert_ne!(a, c);
    assert_ne!(a, d);
}

#[test]
fn ordering_ignores_circumradius() {
    let small_many = RegularPolygon::new(8, 0.5).unwrap();
    let big_few = RegularPolygon::new(4, 100.0).unwrap();
    assert!(small_many > big_few);
    assert!(big_few < small_many);
    assert!(!(big_few > small_many));

    // Same edge count, different radius: neither greater nor equal.
    let x = RegularPolygon::new(5, 1.0).unwrap();
    let y = RegularPolygon::new(5, 2.0).unwrap();
    assert!(!(x > y) && !(y > x));
    assert!(x.partial_cmp(&y).is_none());
    let x_copy = x;
    assert!(x >= x_copy && x <= x_copy);
}

#[test]
fn dynamic_comparisons_guard_the_operand_type() {
    let a = RegularPolygon::new(7, 3.0).unwrap();
    let b = RegularPolygon::new(5, 3.0).unwrap();
    assert_eq!(a.try_eq(&a), Ok(true));
    assert_eq!(a.try_eq(&b), Ok(false));
    assert_eq!(a.try_gt(&b), Ok(true));
    assert_eq!(b.try_gt(&a), Ok(false));

    assert_eq!(
        a.try_eq(&42_i32),
        Err(PolygonError::TypeMismatch {
            expected: "RegularPolygon"
        })
    );
    assert!(matches!(
        a.try_gt(&"heptagon"),
        Err(PolygonError::TypeMismatch { .. })
    ));
    assert!(matches!(
        a.try_eq(&(7_u32, 3.0_f64)),
        Err(PolygonError::TypeMismatch { .. })
    ));
}

#[test]
fn positional_access() {
    let p = RegularPolygon::new(9, 1.5).unwrap();
    assert_eq!(p.get(0), Ok(Component::EdgeCount(9)));
    assert_eq!(p.get(1), Ok(Component::Circumradius(1.5)));
    assert_eq!(
        p.get(2),
        Err(PolygonError::IndexOutOfRange { index: 2, len: 2 })
    );
    assert_eq!(p.as_pair(), (9, 1.5));
    assert_eq!(p.vertex_count(), p.edge_count());
}

#[test]
fn vertices_match_measures() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..20 {
        let n = rng.gen_range(3..40);
        let r = rng.gen_range(0.1..50.0);
        let p = RegularPolygon::new(n, r).unwrap();
        let verts = p.vertices();
        assert_eq!(verts.len(), n as usize);
        for v in &verts {
            assert!((v.norm() - r).abs() < 1e-9);
        }
        for i in 0..verts.len() {
            let d = (verts[(i + 1) % verts.len()] - verts[i]).norm();
            assert!((d - p.edge_length()).abs() < 1e-9);
        }
        let exact = n as f64 * r * r * (2.0 * std::f64::consts::PI / n as f64).sin() / 2.0;
        assert!((shoelace(&verts) - exact).abs() < 1e-9 * exact.max(1.0));
        // Rounded apothem shifts the area by at most n s * 0.005 / 2.
        assert!((p.area() - exact).abs() <= p.perimeter() * 0.0025 + 1e-9);
    }
}

#[test]
fn display_and_details() {
    let p = RegularPolygon::new(4, 10.0).unwrap();
    assert_eq!(p.to_string(), "RegularPolygon(edges=4, circumradius=10)");
    let details = p.details();
    assert!(details.starts_with("RegularPolygon(edges(n)=4,"));
    assert!(details.contains("vertices(n)=4"));
    assert!(details.contains("interior_angle=90"));
    assert!(details.contains("apothem(a)=7.07"));
    assert_eq!(details.lines().count(), 8);
}

#[test]
fn round_to_two_places() {
    assert_eq!(round_to(7.071_067_8, 2), 7.07);
    assert_eq!(round_to(8.660_254, 2), 8.66);
    assert_eq!(round_to(0.0, 2), 0.0);
    assert_eq!(round_to(4.999, 2), 5.0);
}

#[test]
fn dynamic_comparisons_accept_erased_operands() {
    use std::any::Any;

    let a = RegularPolygon::new(6, 2.0).unwrap();
    let erased: &dyn Any = &RegularPolygon::new(6, 2.0).unwrap();
    assert_eq!(a.try_eq(erased), Ok(true));
    assert_eq!(a.try_gt(erased), Ok(false));

    let boxed: Box<dyn Any> = Box::new(RegularPolygon::new(4, 2.0).unwrap());
    assert_eq!(a.try_gt(boxed.as_ref()), Ok(true));
    assert_eq!(a.try_eq(boxed.as_ref()), Ok(false));

    let not_polygon: Box<dyn Any> = Box::new(String::from("hexagon"));
    assert!(matches!(
        a.try_eq(not_polygon.as_ref()),
        Err(PolygonError::TypeMismatch { .. })
    ));
}
