//! Integration tests: scene hit testing across random layouts.
//!
//! Checks `Scene::hit_test` against a brute-force scan under both policies.

use proptest::prelude::*;
use sp_core::{HitPolicy, Point, Scene, Shape};

fn shape_strategy() -> impl Strategy<Value = Shape> {
    prop_oneof![
        (0.0f64..400.0, 0.0f64..400.0, 1.0f64..150.0, 1.0f64..150.0)
            .prop_map(|(x, y, w, h)| Shape::rect(x, y, w, h)),
        (0.0f64..400.0, 0.0f64..400.0, 1.0f64..100.0).prop_map(|(x, y, r)| Shape::circle(x, y, r)),
    ]
}

proptest! {
    #[test]
    fn first_declared_returns_earliest_container(
        shapes in prop::collection::vec(shape_strategy(), 0..8),
        px in 0.0f64..500.0,
        py in 0.0f64..500.0,
    ) {
        let p = Point::new(px, py);
        let expected = shapes.iter().position(|s| s.contains_point(p));
        let scene = Scene::new(shapes);
        prop_assert_eq!(scene.hit_test(p), expected);
    }

    #[test]
    fn topmost_returns_latest_container(
        shapes in prop::collection::vec(shape_strategy(), 0..8),
        px in 0.0f64..500.0,
        py in 0.0f64..500.0,
    ) {
        let p = Point::new(px, py);
        let expected = shapes.iter().rposition(|s| s.contains_point(p));
        let scene = Scene::new(shapes).with_hit_policy(HitPolicy::Topmost);
        prop_assert_eq!(scene.hit_test(p), expected);
    }

    #[test]
    fn move_shape_touches_one_index(
        shapes in prop::collection::vec(shape_strategy(), 1..8),
        pick in any::<prop::sample::Index>(),
        nx in -100.0f64..600.0,
        ny in -100.0f64..600.0,
    ) {
        let index = pick.index(shapes.len());
        let mut scene = Scene::new(shapes.clone());
        scene.move_shape(index, nx, ny);

        for (i, (before, after)) in shapes.iter().zip(scene.snapshot()).enumerate() {
            if i == index {
                prop_assert_eq!(after.anchor(), Point::new(nx, ny));
                prop_assert_eq!(after.is_selected(), before.is_selected());
            } else {
                prop_assert_eq!(after, before);
            }
        }
    }
}

#[test]
fn circle_radius_minus_epsilon_hits() {
    let scene = Scene::new(vec![Shape::circle(0.0, 0.0, 10.0)]);
    assert_eq!(scene.hit_test(Point::new(10.0, 0.0)), None);
    assert_eq!(scene.hit_test(Point::new(10.0 - 0.001, 0.0)), Some(0));
}
