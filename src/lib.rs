//! Sphere Bounce - balls bouncing inside a translucent sphere
//!
//! Core modules:
//! - `sim`: Particle simulation (integration, central gravity, wall bounces)
//! - `settings`: Live-tunable simulation parameters
//! - `render`: Read-only render proxy handed to the drawing layer
//! - `clock`: Fixed-rate frame clock for hosts with variable frame deltas

pub mod clock;
pub mod render;
pub mod settings;
pub mod sim;

pub use clock::FrameClock;
pub use render::{BallInstance, BoundaryInstance};
pub use settings::Settings;
pub use sim::{BoundarySphere, Particle, SimEvent, Simulation, TickInput, step, tick};

/// Simulation configuration constants
pub mod consts {
    /// Boundary sphere radius (world units)
    pub const BOUNDARY_RADIUS: f32 = 1.5;

    /// Ball radius bounds and default
    pub const BALL_SIZE_MIN: f32 = 0.05;
    pub const BALL_SIZE_MAX: f32 = 0.5;
    pub const BALL_SIZE_DEFAULT: f32 = 0.1;

    /// Spawn speed bounds (units per frame) and default
    pub const BALL_SPEED_MIN: f32 = 0.01;
    pub const BALL_SPEED_MAX: f32 = 0.1;
    pub const BALL_SPEED_DEFAULT: f32 = 0.02;

    /// Central gravity bounds (velocity added per frame) and default
    pub const GRAVITY_MIN: f32 = 0.0;
    pub const GRAVITY_MAX: f32 = 0.1;
    pub const GRAVITY_DEFAULT: f32 = 0.005;

    /// Frame rate the per-frame units are tuned for
    pub const FRAME_DT: f32 = 1.0 / 60.0;
    /// Maximum frames per clock advance to prevent spiral of death
    pub const MAX_FRAMES_PER_ADVANCE: u32 = 8;
    /// Largest wall-clock delta accepted by the clock (seconds)
    pub const MAX_FRAME_DELTA: f32 = 0.25;

    /// Exclusive upper bound of packed 0xRRGGBB ball colors
    pub const COLOR_RANGE: u32 = 0xFF_FFFF;
}
