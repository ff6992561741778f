use super::{cuboid, unit_cube};
use oorandom::Rand32;
use tricoll3d::math::{Isometry, Real, Vector};
use tricoll3d::query;

fn random_unit(rng: &mut Rand32) -> Real {
    rng.rand_float() as Real
}

fn random_isometry(rng: &mut Rand32, translation_range: Real) -> Isometry<Real> {
    let translation = Vector::new(
        (random_unit(rng) * 2.0 - 1.0) * translation_range,
        (random_unit(rng) * 2.0 - 1.0) * translation_range,
        (random_unit(rng) * 2.0 - 1.0) * translation_range,
    );
    let axisangle = Vector::new(
        random_unit(rng) * 2.0 - 1.0,
        random_unit(rng) * 2.0 - 1.0,
        random_unit(rng) * 2.0 - 1.0,
    ) * (random_unit(rng) * std::f32::consts::PI as Real);

    Isometry::new(translation, axisangle)
}

#[test]
fn collision_is_symmetric() {
    let mesh_a = unit_cube();
    let mesh_b = cuboid(0.8, 0.3, 0.5);
    let mut rng = Rand32::new(42);

    let mut collisions = 0;
    for _ in 0..100 {
        let pos_a = random_isometry(&mut rng, 1.5);
        let pos_b = random_isometry(&mut rng, 1.5);

        let ab = query::intersection_test(&pos_a, &mesh_a, &pos_b, &mesh_b);
        let ba = query::intersection_test(&pos_b, &mesh_b, &pos_a, &mesh_a);
        assert_eq!(ab, ba);

        collisions += ab as u32;
    }

    // The translation range is small enough for both outcomes to show up.
    assert!(collisions > 0 && collisions < 100);
}

#[test]
fn distance_is_symmetric() {
    let mesh_a = unit_cube();
    let mesh_b = cuboid(0.4, 0.6, 0.2);
    let mut rng = Rand32::new(7);

    for _ in 0..100 {
        let pos_a = random_isometry(&mut rng, 3.0);
        let pos_b = random_isometry(&mut rng, 3.0);

        let ab = query::distance(&pos_a, &mesh_a, &pos_b, &mesh_b);
        let ba = query::distance(&pos_b, &mesh_b, &pos_a, &mesh_a);
        assert_relative_eq!(ab, ba, epsilon = 1.0e-3, max_relative = 1.0e-3);
    }
}

#[test]
fn collision_agrees_with_zero_distance() {
    let mesh_a = unit_cube();
    let mesh_b = cuboid(0.5, 0.7, 0.4);
    let mut rng = Rand32::new(1234);

    for _ in 0..100 {
        let pos_a = random_isometry(&mut rng, 2.0);
        let pos_b = random_isometry(&mut rng, 2.0);

        let colliding = query::intersection_test(&pos_a, &mesh_a, &pos_b, &mesh_b);
        let distance = query::distance(&pos_a, &mesh_a, &pos_b, &mesh_b);

        if colliding {
            assert_eq!(distance, 0.0);
        } else {
            assert!(distance > 0.0);
        }
    }
}

#[test]
fn distance_is_invariant_under_a_common_rigid_motion() {
    let mesh_a = unit_cube();
    let mesh_b = cuboid(0.3, 0.3, 0.9);
    let mut rng = Rand32::new(99);

    for _ in 0..50 {
        let pos_a = random_isometry(&mut rng, 2.0);
        let pos_b = random_isometry(&mut rng, 2.0);
        let motion = random_isometry(&mut rng, 5.0);

        let base = query::distance(&pos_a, &mesh_a, &pos_b, &mesh_b);
        let moved = query::distance(&(motion * pos_a), &mesh_a, &(motion * pos_b), &mesh_b);
        assert_relative_eq!(base, moved, epsilon = 1.0e-3, max_relative = 1.0e-3);
    }
}
