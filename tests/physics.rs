use glam::DVec2;
use planetsim::physics::{self, gravity_magnitude, Body, Bounds, PhysicsParams};

const EPS: f64 = 1e-12;

fn screen() -> Bounds {
    Bounds::new(900.0, 600.0)
}

#[test]
fn test_magnitude_uses_distance_when_separated() {
    let magnitude = gravity_magnitude(100.0, 50.0, 26.0);
    assert!((magnitude - 100.0 / 2500.0).abs() < EPS, "got {magnitude}");
}

#[test]
fn test_magnitude_clamps_to_radius_sum_when_touching() {
    // Exactly touching counts as contact.
    let touching = gravity_magnitude(100.0, 26.0, 26.0);
    let overlapping = gravity_magnitude(100.0, 3.0, 26.0);
    let expected = 100.0 / (26.0 * 26.0);

    assert!((touching - expected).abs() < EPS);
    assert!((overlapping - expected).abs() < EPS);
}

#[test]
fn test_two_body_scenario_single_step() {
    let params = PhysicsParams::default();
    let mut a = Body::new(DVec2::new(100.0, 100.0), DVec2::new(5.0, 25.0), 18.0, 100.0);
    let mut b = Body::new(DVec2::new(300.0, 300.0), DVec2::new(5.0, -25.0), 8.0, 10.0);

    // Positions move first, gravity is computed from where they end up.
    let a_moved = DVec2::new(100.5, 102.5);
    let b_moved = DVec2::new(300.5, 297.5);
    let offset = b_moved - a_moved;
    let distance = offset.length();
    let accel = offset / distance * (params.gravity / (distance * distance));
    let a_velocity = DVec2::new(5.0, 25.0) + accel * 10.0;
    let b_velocity = DVec2::new(5.0, -25.0) - accel * 100.0;

    let report = physics::step(&mut a, &mut b, &params, &screen());

    assert!((a.position - a_moved).length() < EPS, "a at {:?}", a.position);
    assert!((b.position - b_moved).length() < EPS, "b at {:?}", b.position);
    assert!((report.distance - distance).abs() < EPS);
    assert!(!report.clamped);
    assert!((a.velocity - a_velocity).length() < EPS, "a velocity {:?}", a.velocity);
    assert!((b.velocity - b_velocity).length() < EPS, "b velocity {:?}", b.velocity);
    assert!(!report.contacts[0].any() && !report.contacts[1].any());
}

#[test]
fn test_gravity_pulls_bodies_towards_each_other() {
    let params = PhysicsParams {
        delta_t: 0.0,
        ..PhysicsParams::default()
    };
    let mut a = Body::new(DVec2::new(200.0, 300.0), DVec2::ZERO, 10.0, 1.0);
    let mut b = Body::new(DVec2::new(600.0, 300.0), DVec2::ZERO, 10.0, 1.0);

    physics::step(&mut a, &mut b, &params, &screen());

    assert!(a.velocity.x > 0.0, "a should accelerate towards b");
    assert!(b.velocity.x < 0.0, "b should accelerate towards a");
    assert_eq!(a.velocity.y, 0.0);
    assert_eq!(b.velocity.y, 0.0);
}

#[test]
fn test_impulse_scaled_by_other_mass() {
    let params = PhysicsParams {
        delta_t: 0.0,
        ..PhysicsParams::default()
    };
    let mut heavy = Body::new(DVec2::new(300.0, 300.0), DVec2::ZERO, 10.0, 100.0);
    let mut light = Body::new(DVec2::new(500.0, 300.0), DVec2::ZERO, 10.0, 10.0);

    physics::step(&mut heavy, &mut light, &params, &screen());

    let ratio = light.velocity.length() / heavy.velocity.length();
    assert!((ratio - 10.0).abs() < 1e-9, "ratio was {ratio}");
}

#[test]
fn test_free_body_moves_by_velocity_times_delta_t() {
    let params = PhysicsParams::default();
    // A massless partner exerts no pull on the body under test.
    let mut body = Body::new(DVec2::new(400.0, 250.0), DVec2::new(-7.0, 12.0), 10.0, 50.0);
    let mut ghost = Body::new(DVec2::new(800.0, 500.0), DVec2::ZERO, 1.0, 0.0);

    physics::step(&mut body, &mut ghost, &params, &screen());

    assert!((body.position - DVec2::new(399.3, 251.2)).length() < 1e-9);
    assert_eq!(body.velocity, DVec2::new(-7.0, 12.0));
}

#[test]
fn test_overlapping_bodies_use_clamped_magnitude() {
    let params = PhysicsParams {
        delta_t: 0.0,
        ..PhysicsParams::default()
    };
    let mut a = Body::new(DVec2::new(300.0, 300.0), DVec2::ZERO, 18.0, 1.0);
    let mut b = Body::new(DVec2::new(305.0, 300.0), DVec2::ZERO, 8.0, 1.0);

    let report = physics::step(&mut a, &mut b, &params, &screen());

    assert!(report.clamped);
    assert!((report.magnitude - 100.0 / 676.0).abs() < EPS);
    assert!((a.velocity.x - 100.0 / 676.0).abs() < EPS);
    assert!((b.velocity.x + 100.0 / 676.0).abs() < EPS);
}

#[test]
fn test_coincident_centres_stay_finite() {
    let params = PhysicsParams::default();
    let mut a = Body::new(DVec2::new(450.0, 300.0), DVec2::ZERO, 18.0, 100.0);
    let mut b = Body::new(DVec2::new(450.0, 300.0), DVec2::ZERO, 8.0, 10.0);

    let report = physics::step(&mut a, &mut b, &params, &screen());

    assert_eq!(report.magnitude, 0.0);
    assert!(a.velocity.is_finite() && b.velocity.is_finite());
    assert!(a.position.is_finite() && b.position.is_finite());
    assert_eq!(a.velocity, DVec2::ZERO);
}

#[test]
fn test_right_wall_bounce_reflects_and_amplifies() {
    let bounds = screen();
    let mut body = Body::new(DVec2::new(895.0, 300.0), DVec2::new(3.0, 1.5), 10.0, 1.0);

    let contacts = bounds.resolve(&mut body, 1.001);

    assert!(contacts.right);
    assert_eq!(contacts.count(), 1);
    assert_eq!(body.position.x, 890.0);
    assert!((body.velocity.x + 3.0 * 1.001).abs() < EPS);
    assert_eq!(body.velocity.y, 1.5);
}

#[test]
fn test_bottom_wall_bounce() {
    let bounds = screen();
    let mut body = Body::new(DVec2::new(100.0, 598.0), DVec2::new(0.0, 20.0), 8.0, 1.0);

    let contacts = bounds.resolve(&mut body, 1.001);

    assert!(contacts.bottom);
    assert_eq!(body.position.y, 592.0);
    assert!((body.velocity.y + 20.0 * 1.001).abs() < EPS);
}

#[test]
fn test_corner_bounce_hits_top_and_left() {
    let bounds = screen();
    let mut body = Body::new(DVec2::new(-5.0, -5.0), DVec2::new(-2.0, -3.0), 10.0, 1.0);

    let contacts = bounds.resolve(&mut body, 1.001);

    assert!(contacts.top && contacts.left);
    assert!(!contacts.right && !contacts.bottom);
    assert_eq!(body.position, DVec2::new(10.0, 10.0));
    assert!((body.velocity.x - 2.0 * 1.001).abs() < EPS);
    assert!((body.velocity.y - 3.0 * 1.001).abs() < EPS);
}

#[test]
fn test_sub_unit_dampening_loses_speed() {
    let bounds = screen();
    let mut body = Body::new(DVec2::new(5.0, 300.0), DVec2::new(-10.0, 0.0), 10.0, 1.0);

    bounds.resolve(&mut body, 0.8);

    assert!((body.velocity.x - 8.0).abs() < EPS);
    assert!(body.speed() < 10.0);
}

#[test]
fn test_body_inside_bounds_is_untouched() {
    let bounds = screen();
    let before = Body::new(DVec2::new(450.0, 300.0), DVec2::new(4.0, -4.0), 18.0, 1.0);
    let mut body = before;

    let contacts = bounds.resolve(&mut body, 1.001);

    assert!(!contacts.any());
    assert_eq!(body, before);
}

#[test]
fn test_long_run_stays_inside_bounds() {
    let params = PhysicsParams::default();
    let bounds = screen();
    let mut a = Body::new(DVec2::new(350.0, 200.0), DVec2::new(12.0, 25.0), 18.0, 100.0);
    let mut b = Body::new(DVec2::new(550.0, 400.0), DVec2::new(-9.0, -25.0), 8.0, 10.0);

    for _ in 0..5000 {
        physics::step(&mut a, &mut b, &params, &bounds);
        for body in [&a, &b] {
            assert!(body.position.is_finite() && body.velocity.is_finite());
            assert!(body.position.x >= body.radius && body.position.x <= bounds.width - body.radius);
            assert!(body.position.y >= body.radius && body.position.y <= bounds.height - body.radius);
        }
    }
}
