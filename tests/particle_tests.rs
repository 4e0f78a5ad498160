// Host-side tests for the particle field simulation.

use folio_core::constants::{PARTICLE_COUNT, PARTICLE_MAX_SPEED};
use folio_core::{wants_particles, Particle, ParticleField};
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn in_bounds(field: &ParticleField) -> bool {
    let b = field.bounds();
    field.particles().iter().all(|p| {
        (0.0..=b.x).contains(&p.position.x) && (0.0..=b.y).contains(&p.position.y)
    })
}

#[test]
fn new_field_has_fixed_count_within_bounds() {
    let mut rng = StdRng::seed_from_u64(7);
    let field = ParticleField::new(PARTICLE_COUNT, Vec2::new(800.0, 600.0), &mut rng);
    assert_eq!(field.particles().len(), 30);
    assert!(in_bounds(&field));
    for p in field.particles() {
        assert!(p.velocity.x.abs() <= PARTICLE_MAX_SPEED);
        assert!(p.velocity.y.abs() <= PARTICLE_MAX_SPEED);
        assert!((1.0..=3.0).contains(&p.radius));
        assert!((0.1..=0.4).contains(&p.opacity));
    }
}

#[test]
fn positions_stay_in_bounds_over_many_frames() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut field = ParticleField::new(PARTICLE_COUNT, Vec2::new(320.0, 200.0), &mut rng);
    for _ in 0..10_000 {
        field.step();
        assert!(in_bounds(&field));
    }
}

fn dot(x: f32, y: f32, dx: f32, dy: f32) -> Particle {
    Particle {
        position: Vec2::new(x, y),
        velocity: Vec2::new(dx, dy),
        radius: 1.0,
        opacity: 0.2,
    }
}

#[test]
fn crossing_an_edge_wraps_to_the_opposite_side() {
    let mut field = ParticleField::from_particles(
        vec![
            dot(99.9, 10.0, 0.25, 0.0),  // exits right
            dot(0.1, 10.0, -0.25, 0.0),  // exits left
            dot(10.0, 49.9, 0.0, 0.25),  // exits bottom
            dot(10.0, 0.1, 0.0, -0.25),  // exits top
            dot(50.0, 25.0, 0.25, 0.25), // stays put
        ],
        Vec2::new(100.0, 50.0),
    );
    field.step();
    let got: Vec<Vec2> = field.particles().iter().map(|p| p.position).collect();
    assert_eq!(got[0], Vec2::new(0.0, 10.0));
    assert_eq!(got[1], Vec2::new(100.0, 10.0));
    assert_eq!(got[2], Vec2::new(10.0, 0.0));
    assert_eq!(got[3], Vec2::new(10.0, 50.0));
    assert_eq!(got[4], Vec2::new(50.25, 25.25));
}

#[test]
fn shrinking_the_canvas_pulls_particles_back_in() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut field = ParticleField::new(PARTICLE_COUNT, Vec2::new(1920.0, 1080.0), &mut rng);
    field.resize(Vec2::new(200.0, 100.0));
    field.step();
    assert!(in_bounds(&field));
}

#[test]
fn zero_sized_canvas_pins_particles_at_origin() {
    let mut rng = StdRng::seed_from_u64(9);
    let mut field = ParticleField::new(5, Vec2::ZERO, &mut rng);
    field.step();
    assert!(field.particles().iter().all(|p| p.position == Vec2::ZERO));
}

#[test]
fn step_adds_velocity_inside_bounds() {
    let mut rng = StdRng::seed_from_u64(11);
    let mut field = ParticleField::new(PARTICLE_COUNT, Vec2::new(1000.0, 1000.0), &mut rng);
    let before: Vec<Particle> = field.particles().to_vec();
    field.step();
    for (a, b) in before.iter().zip(field.particles()) {
        let expected = a.position + a.velocity;
        let inside = expected.x >= 0.0 && expected.x <= 1000.0 && expected.y >= 0.0 && expected.y <= 1000.0;
        if inside {
            assert!((b.position - expected).length() < 1e-4);
        }
    }
}

#[test]
fn fill_style_uses_accent_color() {
    let p = Particle {
        position: Vec2::ZERO,
        velocity: Vec2::ZERO,
        radius: 2.0,
        opacity: 0.25,
    };
    assert_eq!(p.fill_style(), "rgba(17, 126, 35, 0.25)");
}

#[test]
fn particles_only_on_wide_viewports() {
    assert!(!wants_particles(375.0));
    assert!(!wants_particles(1024.0));
    assert!(wants_particles(1025.0));
    assert!(wants_particles(1920.0));
}

#[test]
fn cleared_field_stays_empty_through_steps_and_resizes() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut field = ParticleField::new(PARTICLE_COUNT, Vec2::new(640.0, 480.0), &mut rng);
    field.clear();
    assert!(field.particles().is_empty());
    field.resize(Vec2::new(1280.0, 720.0));
    field.step();
    // A stopped animation leaves nothing to paint
    assert!(field.particles().is_empty());
    assert_eq!(field.bounds(), Vec2::new(1280.0, 720.0));
}
