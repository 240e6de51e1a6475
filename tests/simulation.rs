//! End-to-end checks of the interface a render/input host drives

use glam::Vec3;
use sphere_bounce::render;
use sphere_bounce::{Particle, SimEvent, Simulation, TickInput, step, tick};

#[test]
fn test_bounce_off_wall_from_scenario() {
    let mut sim = Simulation::new(2024);
    sim.set_gravity_enabled(false);
    sim.particles.push(Particle {
        id: 77,
        position: Vec3::new(1.4, 0.0, 0.0),
        velocity: Vec3::new(0.2, 0.0, 0.0),
        radius: 0.1,
        color: 0x000000,
    });

    step(&mut sim);

    let ball = sim.particle(77).expect("ball still present").clone();
    assert!((ball.velocity - Vec3::new(-0.2, 0.0, 0.0)).length() < 1e-6);
    assert!((ball.position.length() - 1.4).abs() < 1e-5);
    assert_eq!(
        sim.drain_events(),
        vec![SimEvent::WallHit {
            id: 77,
            color: ball.color
        }]
    );
    assert!(sim.events().is_empty());
}

#[test]
fn test_host_session() {
    let mut sim = Simulation::new(31337);

    // Space bar pressed three times before the first frame
    tick(
        &mut sim,
        &TickInput {
            spawn: 3,
            ..Default::default()
        },
    );
    assert_eq!(render::instances(&sim).len(), 3);

    // Control panel tweaks
    sim.set_ball_size(10.0);
    assert_eq!(sim.settings.ball_size(), 0.5);
    sim.set_gravity_strength(0.1);
    sim.set_ball_speed(0.1);
    sim.spawn();
    assert_eq!(sim.particles.last().map(|p| p.radius), Some(0.5));

    for _ in 0..600 {
        step(&mut sim);
        for p in &sim.particles {
            assert!(p.position.length() + p.radius <= sim.boundary().radius + 1e-5);
        }
    }
    assert_eq!(sim.frame, 601);

    sim.reset();
    assert!(sim.particles.is_empty());
    assert!(render::instances(&sim).is_empty());
    sim.reset();
    assert!(sim.particles.is_empty());
}

#[test]
fn test_gravity_toggle_takes_effect_next_step() {
    let mut sim = Simulation::new(1);
    sim.particles.push(Particle {
        id: 1,
        position: Vec3::new(-0.8, 0.0, 0.0),
        velocity: Vec3::ZERO,
        radius: 0.1,
        color: 0xFFFFFF,
    });
    sim.set_gravity_strength(0.02);

    sim.settings.toggle_gravity();
    assert!(!sim.settings.gravity_enabled());
    assert_eq!(sim.particles[0].velocity, Vec3::ZERO);
    step(&mut sim);
    assert_eq!(sim.particles[0].velocity, Vec3::ZERO);

    sim.settings.toggle_gravity();
    step(&mut sim);
    assert!((sim.particles[0].velocity - Vec3::new(0.02, 0.0, 0.0)).length() < 1e-6);
}
