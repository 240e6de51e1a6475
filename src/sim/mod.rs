//! Particle simulation module
//!
//! All ball motion lives here. This module must stay pure and deterministic:
//! - One step per animation frame, velocities in units/frame
//! - Seeded RNG only
//! - Particles never interact with each other, only with the boundary
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{WallContact, clamp_inside, reflect_velocity, wall_contact};
pub use state::{BoundarySphere, Particle, SimEvent, Simulation, random_color};
pub use tick::{TickInput, step, tick};
