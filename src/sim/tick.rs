//! Per-frame simulation step
//!
//! Advances every ball by one animation frame, then reports wall hits.

use super::collision::{clamp_inside, reflect_velocity, wall_contact};
use super::state::{SimEvent, Simulation, random_color};

/// Commands collected from the input layer between frames
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Remove every ball (applied before spawning)
    pub reset: bool,
    /// Number of balls to add (space bar / "Add Ball")
    pub spawn: u32,
    pub ball_size: Option<f32>,
    /// New spawn speed; existing velocities are re-rolled when set
    pub ball_speed: Option<f32>,
    pub gravity_strength: Option<f32>,
    pub gravity_enabled: Option<bool>,
    /// Re-roll velocities without changing the speed setting
    pub update_speeds: bool,
}

/// Apply one frame of input, then advance the simulation one step.
///
/// Settings changes land before the step, so the step sees a single
/// consistent snapshot of them.
pub fn tick(sim: &mut Simulation, input: &TickInput) {
    if input.reset {
        sim.reset();
    }

    if let Some(size) = input.ball_size {
        sim.set_ball_size(size);
    }
    if let Some(strength) = input.gravity_strength {
        sim.set_gravity_strength(strength);
    }
    if let Some(enabled) = input.gravity_enabled {
        sim.set_gravity_enabled(enabled);
    }
    if let Some(speed) = input.ball_speed {
        sim.set_ball_speed(speed);
    } else if input.update_speeds {
        sim.update_speeds();
    }

    for _ in 0..input.spawn {
        sim.spawn();
    }

    step(sim);
}

/// Advance every ball by one frame
pub fn step(sim: &mut Simulation) {
    sim.events.clear();

    let settings = sim.settings;
    let boundary = *sim.boundary();

    for particle in &mut sim.particles {
        particle.position += particle.velocity;

        if settings.gravity_enabled() {
            // Undefined at the exact center; normalize_or_zero makes it a no-op
            let to_center = (boundary.center - particle.position).normalize_or_zero();
            particle.velocity += to_center * settings.gravity_strength();
        }

        let contact = wall_contact(particle.position, particle.radius, &boundary);
        if contact.hit {
            particle.velocity = reflect_velocity(particle.velocity, contact.normal);
            particle.color = random_color(&mut sim.rng);
            log::trace!(
                "Ball {} hit wall (depth {:.4}), new color #{:06x}",
                particle.id,
                contact.penetration,
                particle.color
            );
            sim.events.push(SimEvent::WallHit {
                id: particle.id,
                color: particle.color,
            });
        }

        particle.position = clamp_inside(particle.position, particle.radius, &boundary);
    }

    sim.frame += 1;
}
