//! Simulation state and core types
//!
//! The `Simulation` is the single context object every caller (input layer,
//! control panel, renderer) holds a reference to.

use glam::Vec3;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::settings::Settings;

/// A ball moving inside the boundary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    pub id: u32,
    /// World position, relative to the boundary center at the origin
    pub position: Vec3,
    /// Units per frame
    pub velocity: Vec3,
    /// Fixed at spawn
    pub radius: f32,
    /// Packed 0xRRGGBB
    pub color: u32,
}

/// Spherical containment volume
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundarySphere {
    pub center: Vec3,
    pub radius: f32,
}

impl Default for BoundarySphere {
    fn default() -> Self {
        Self {
            center: Vec3::ZERO,
            radius: BOUNDARY_RADIUS,
        }
    }
}

impl BoundarySphere {
    /// Largest distance from the center a ball of `radius` may sit at
    #[inline]
    pub fn max_center_distance(&self, radius: f32) -> f32 {
        (self.radius - radius).max(0.0)
    }
}

/// Something the renderer should react to this frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SimEvent {
    /// Ball reached the wall, bounced and took a new color
    WallHit { id: u32, color: u32 },
}

/// Draw a uniformly random packed 0xRRGGBB color
pub fn random_color(rng: &mut impl Rng) -> u32 {
    rng.random_range(0..COLOR_RANGE)
}

/// Per-axis uniform sample in `[-0.5, 0.5) * scale`.
///
/// Cube-uniform on purpose: spawn positions and velocities have always been
/// drawn this way, corners included.
fn cube_sample(rng: &mut impl Rng, scale: f32) -> Vec3 {
    Vec3::new(
        (rng.random::<f32>() - 0.5) * scale,
        (rng.random::<f32>() - 0.5) * scale,
        (rng.random::<f32>() - 0.5) * scale,
    )
}

/// Complete simulation context
#[derive(Debug, Clone)]
pub struct Simulation {
    /// Seed the RNG was created from
    pub seed: u64,
    /// Fixed for the simulation's lifetime
    boundary: BoundarySphere,
    pub settings: Settings,
    /// Active balls. Order is irrelevant to the update.
    pub particles: Vec<Particle>,
    /// Completed steps
    pub frame: u64,
    /// Events from the most recent step
    pub(crate) events: Vec<SimEvent>,
    pub(crate) rng: Pcg32,
    /// Next entity ID
    next_id: u32,
}

impl Simulation {
    /// Create an empty simulation with default settings
    pub fn new(seed: u64) -> Self {
        Self::with_settings(seed, Settings::default())
    }

    pub fn with_settings(seed: u64, settings: Settings) -> Self {
        Self {
            seed,
            boundary: BoundarySphere::default(),
            settings,
            particles: Vec::new(),
            frame: 0,
            events: Vec::new(),
            rng: Pcg32::seed_from_u64(seed),
            next_id: 1,
        }
    }

    #[cfg(test)]
    pub(crate) fn with_boundary(seed: u64, settings: Settings, boundary: BoundarySphere) -> Self {
        Self {
            boundary,
            ..Self::with_settings(seed, settings)
        }
    }

    /// Allocate a new entity ID
    fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        id
    }

    /// Add one ball using the current settings. Returns its ID.
    pub fn spawn(&mut self) -> u32 {
        let id = self.next_entity_id();
        let radius = self.settings.ball_size();
        let safe_distance = self.boundary.max_center_distance(radius);

        let position = self.boundary.center + cube_sample(&mut self.rng, safe_distance);
        let velocity = cube_sample(&mut self.rng, self.settings.ball_speed());
        let color = random_color(&mut self.rng);

        log::debug!("Spawned ball {id} at {position} (r={radius})");
        self.particles.push(Particle {
            id,
            position,
            velocity,
            radius,
            color,
        });
        id
    }

    /// Re-roll every ball's velocity at the current speed setting.
    /// Position, radius and color are untouched.
    pub fn update_speeds(&mut self) {
        let speed = self.settings.ball_speed();
        for particle in &mut self.particles {
            particle.velocity = cube_sample(&mut self.rng, speed);
        }
        log::debug!("Re-rolled {} velocities at speed {speed}", self.particles.len());
    }

    /// Remove every ball
    pub fn reset(&mut self) {
        if !self.particles.is_empty() {
            log::info!("Reset: removed {} balls", self.particles.len());
        }
        self.particles.clear();
        self.events.clear();
    }

    pub fn set_ball_size(&mut self, size: f32) {
        self.settings.set_ball_size(size);
    }

    /// Set spawn speed and re-roll existing velocities to match
    pub fn set_ball_speed(&mut self, speed: f32) {
        self.settings.set_ball_speed(speed);
        self.update_speeds();
    }

    pub fn set_gravity_strength(&mut self, strength: f32) {
        self.settings.set_gravity_strength(strength);
    }

    pub fn set_gravity_enabled(&mut self, enabled: bool) {
        self.settings.set_gravity_enabled(enabled);
    }

    pub fn boundary(&self) -> &BoundarySphere {
        &self.boundary
    }

    /// Look up a ball by ID (render handle back to particle)
    pub fn particle(&self, id: u32) -> Option<&Particle> {
        self.particles.iter().find(|p| p.id == id)
    }

    /// Events produced by the most recent step
    pub fn events(&self) -> &[SimEvent] {
        &self.events
    }

    /// Take the events produced by the most recent step
    pub fn drain_events(&mut self) -> Vec<SimEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_respects_settings() {
        let mut sim = Simulation::new(7);
        sim.set_ball_size(0.3);
        sim.set_ball_speed(0.05);
        let id = sim.spawn();

        let ball = sim.particle(id).expect("spawned ball");
        assert_eq!(ball.radius, 0.3);
        let half_range = (BOUNDARY_RADIUS - 0.3) * 0.5;
        assert!(ball.position.abs().max_element() <= half_range);
        assert!(ball.velocity.abs().max_element() <= 0.05 * 0.5);
        assert!(ball.color < COLOR_RANGE);
    }

    #[test]
    fn test_spawn_ids_are_unique_across_reset() {
        let mut sim = Simulation::new(1);
        let a = sim.spawn();
        let b = sim.spawn();
        sim.reset();
        let c = sim.spawn();
        assert!(a < b && b < c);
        assert_eq!(sim.particles.len(), 1);
    }

    #[test]
    fn test_spawn_oversized_ball_sits_at_center() {
        let boundary = BoundarySphere {
            center: Vec3::ZERO,
            radius: 0.2,
        };
        let mut sim = Simulation::with_boundary(3, Settings::default(), boundary);
        sim.set_ball_size(0.5);
        let id = sim.spawn();
        assert_eq!(sim.particle(id).map(|p| p.position), Some(Vec3::ZERO));
        assert_eq!(boundary.max_center_distance(0.5), 0.0);
    }

    #[test]
    fn test_boundary_fixed_for_lifetime() {
        let mut sim = Simulation::new(21);
        sim.set_ball_size(0.5);
        sim.set_ball_speed(0.1);
        sim.set_gravity_strength(0.1);
        for _ in 0..10 {
            sim.spawn();
        }
        for _ in 0..300 {
            crate::sim::step(&mut sim);
        }
        sim.reset();
        assert_eq!(*sim.boundary(), BoundarySphere::default());
    }

    #[test]
    fn test_entity_ids_wrap_instead_of_overflowing() {
        let mut sim = Simulation::new(2);
        sim.next_id = u32::MAX;
        assert_eq!(sim.spawn(), u32::MAX);
        assert_eq!(sim.spawn(), 0);
    }

    #[test]
    fn test_update_speeds_keeps_everything_but_velocity() {
        let mut sim = Simulation::new(11);
        for _ in 0..5 {
            sim.spawn();
        }
        let before = sim.particles.clone();
        sim.set_ball_speed(0.1);

        for (old, new) in before.iter().zip(&sim.particles) {
            assert_eq!(old.id, new.id);
            assert_eq!(old.position, new.position);
            assert_eq!(old.radius, new.radius);
            assert_eq!(old.color, new.color);
            assert!(new.velocity.abs().max_element() <= 0.1 * 0.5);
        }
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut sim = Simulation::new(5);
        sim.spawn();
        sim.spawn();
        sim.reset();
        assert!(sim.particles.is_empty());
        sim.reset();
        assert!(sim.particles.is_empty());
    }

    #[test]
    fn test_same_seed_same_spawns() {
        let mut a = Simulation::new(42);
        let mut b = Simulation::new(42);
        for _ in 0..10 {
            a.spawn();
            b.spawn();
        }
        assert_eq!(a.particles, b.particles);
    }
}
