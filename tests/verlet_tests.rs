use approx::{assert_abs_diff_eq, assert_relative_eq};
use drape::{Bounds, ClothError, DistanceConstraint, Particle, Resolution, Vec2};

#[test]
fn integrate_applies_damped_velocity_and_gravity() {
    let mut p: Particle = Particle::new(Vec2::new(10.0, 20.0));
    p.prev_pos = Vec2::new(8.0, 19.0);

    p.integrate(1.0, 0.99);

    assert_relative_eq!(p.pos.x, 11.98, epsilon = 1e-12);
    assert_relative_eq!(p.pos.y, 21.99, epsilon = 1e-12);
    assert_eq!(p.prev_pos, Vec2::new(10.0, 20.0));
}

#[test]
fn gravity_scales_with_particle_mass() {
    let mut light: Particle = Particle::with_mass(Vec2::new(0.0, 0.0), 1.0);
    let mut heavy: Particle = Particle::with_mass(Vec2::new(0.0, 0.0), 3.0);
    light.integrate(2.0, 0.99);
    heavy.integrate(2.0, 0.99);
    assert_eq!(light.pos.y, 2.0);
    assert_eq!(heavy.pos.y, 6.0);
}

#[test]
fn integrate_is_bit_reproducible() {
    let mut first: Particle = Particle::new(Vec2::new(0.1, 0.7));
    first.prev_pos = Vec2::new(0.3, 0.2);
    let mut second = first.clone();

    for _ in 0..100 {
        first.integrate(1.0, 0.99);
        second.integrate(1.0, 0.99);
    }
    assert_eq!(first.pos.x.to_bits(), second.pos.x.to_bits());
    assert_eq!(first.pos.y.to_bits(), second.pos.y.to_bits());
}

#[test]
fn clamp_leaves_interior_particle_untouched() {
    let bounds = Bounds::new(200.0, 100.0).unwrap();
    let mut p: Particle = Particle::new(Vec2::new(50.0, 40.0));
    p.prev_pos = Vec2::new(45.0, 38.0);
    let before = p.clone();

    bounds.clamp(&mut p);
    assert_eq!(p, before);
}

#[test]
fn clamp_pulls_particle_exactly_to_floor() {
    let bounds = Bounds::new(200.0, 100.0).unwrap();
    let mut p: Particle = Particle::new(Vec2::new(50.0, 140.0));
    bounds.clamp(&mut p);
    assert_eq!(p.pos.y, 95.0);
    // No horizontal motion, so the friction term has nothing to remove.
    assert_eq!(p.pos.x, 50.0);
}

#[test]
fn pinned_endpoint_converges_to_rest_length() {
    let mut particles = [
        Particle::pinned(Vec2::new(0.0, 0.0)),
        Particle::new(Vec2::new(0.0, 10.0)),
    ];
    let mut c = DistanceConstraint::between(0, 1, &particles).unwrap();
    particles[1].pos = Vec2::new(3.0, 25.0);

    for _ in 0..20 {
        c.resolve(&mut particles, 1.0, 20.0);
    }

    assert_eq!(particles[0].pos, Vec2::new(0.0, 0.0));
    assert_abs_diff_eq!(particles[0].pos.distance(particles[1].pos), 10.0, epsilon = 1e-9);
}

#[test]
fn equal_masses_split_the_correction() {
    let mut particles = [
        Particle::new(Vec2::new(0.0, 0.0)),
        Particle::new(Vec2::new(10.0, 0.0)),
    ];
    let mut c = DistanceConstraint::between(0, 1, &particles).unwrap();
    particles[1].pos = Vec2::new(12.0, 0.0);

    assert_eq!(c.resolve(&mut particles, 0.5, 20.0), Resolution::Corrected);
    assert_relative_eq!(particles[0].pos.x, 1.0, epsilon = 1e-12);
    assert_relative_eq!(particles[1].pos.x, 11.0, epsilon = 1e-12);
}

#[test]
fn overstretched_constraint_breaks_and_stays_inert() {
    let mut particles = [
        Particle::new(Vec2::new(0.0, 0.0)),
        Particle::new(Vec2::new(10.0, 0.0)),
    ];
    let mut c = DistanceConstraint::between(0, 1, &particles).unwrap();
    particles[1].pos = Vec2::new(250.0, 0.0);

    assert_eq!(c.resolve(&mut particles, 0.7, 20.0), Resolution::Broke);
    assert!(c.is_broken());
    assert_eq!(particles[1].pos, Vec2::new(250.0, 0.0));

    particles[1].pos = Vec2::new(11.0, 0.0);
    assert_eq!(c.resolve(&mut particles, 0.7, 20.0), Resolution::Inert);
    assert_eq!(particles[0].pos, Vec2::new(0.0, 0.0));
    assert_eq!(particles[1].pos, Vec2::new(11.0, 0.0));
}

#[test]
fn coincident_endpoints_are_skipped() {
    let mut particles = [
        Particle::new(Vec2::new(0.0, 0.0)),
        Particle::new(Vec2::new(10.0, 0.0)),
    ];
    let mut c = DistanceConstraint::between(0, 1, &particles).unwrap();
    particles[1].pos = Vec2::new(0.0, 0.0);

    assert_eq!(c.resolve(&mut particles, 0.7, 20.0), Resolution::Degenerate);
    assert!(!c.is_broken());
    assert!(particles.iter().all(|p| p.pos.is_finite()));
}

#[test]
fn construction_rejects_bad_endpoints() {
    let particles = [
        Particle::new(Vec2::new(0.0, 0.0)),
        Particle::new(Vec2::new(0.0, 0.0)),
        Particle::new(Vec2::new(5.0, 0.0)),
    ];
    assert_eq!(
        DistanceConstraint::between(0, 0, &particles).unwrap_err(),
        ClothError::SelfConstraint { index: 0 }
    );
    assert_eq!(
        DistanceConstraint::between(0, 3, &particles).unwrap_err(),
        ClothError::ParticleOutOfBounds { index: 3, count: 3 }
    );
    assert_eq!(
        DistanceConstraint::between(0, 1, &particles).unwrap_err(),
        ClothError::DegenerateRestLength { a: 0, b: 1 }
    );
    let c = DistanceConstraint::between(1, 2, &particles).unwrap();
    assert_eq!(c.rest_length, 5.0);
}
