//! Render proxy
//!
//! Plain instance records the drawing layer uploads as-is. The renderer only
//! reads these; it never touches `Particle` directly.

use bytemuck::{Pod, Zeroable};

use crate::sim::{BoundarySphere, Particle, Simulation};

/// One ball as the renderer sees it
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct BallInstance {
    pub center: [f32; 3],
    pub radius: f32,
    pub color: [f32; 4],
}

impl BallInstance {
    pub fn from_particle(particle: &Particle) -> Self {
        Self {
            center: particle.position.to_array(),
            radius: particle.radius,
            color: unpack_color(particle.color, 1.0),
        }
    }
}

/// The translucent containment sphere
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct BoundaryInstance {
    pub center: [f32; 3],
    pub radius: f32,
    pub color: [f32; 4],
}

impl BoundaryInstance {
    pub fn from_boundary(boundary: &BoundarySphere) -> Self {
        Self {
            center: boundary.center.to_array(),
            radius: boundary.radius,
            color: colors::BOUNDARY,
        }
    }
}

/// Colors for scene elements
pub mod colors {
    /// White glass at half opacity
    pub const BOUNDARY: [f32; 4] = [1.0, 1.0, 1.0, 0.5];
    pub const BACKGROUND: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
}

/// Convert packed 0xRRGGBB into linear-ish RGBA floats
pub fn unpack_color(rgb: u32, alpha: f32) -> [f32; 4] {
    let channel = |shift: u32| ((rgb >> shift) & 0xFF) as f32 / 255.0;
    [channel(16), channel(8), channel(0), alpha]
}

/// Instance buffer contents for every active ball
pub fn instances(sim: &Simulation) -> Vec<BallInstance> {
    sim.particles.iter().map(BallInstance::from_particle).collect()
}

/// Instance record for a single ball, by render handle
pub fn instance_for(sim: &Simulation, id: u32) -> Option<BallInstance> {
    sim.particle(id).map(BallInstance::from_particle)
}

/// Raw bytes ready for a GPU instance buffer
pub fn instance_bytes(instances: &[BallInstance]) -> &[u8] {
    bytemuck::cast_slice(instances)
}
