//! Rebound - a 2D bouncing-shapes animation core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (motion, collision, world state)
//! - `renderer`: Surface abstraction and mesh tessellation
//! - `driver`: Fixed-timestep frame pacing
//! - `settings`: Data-driven runtime configuration

pub mod driver;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use driver::FramePacer;
pub use settings::Settings;

/// Animation configuration constants
pub mod consts {
    /// Canvas dimensions when no settings file overrides them
    pub const CANVAS_WIDTH: f32 = 900.0;
    pub const CANVAS_HEIGHT: f32 = 600.0;

    /// Fixed simulation tick rate, one tick per displayed frame
    pub const TICK_RATE: f32 = 60.0;
    /// Maximum ticks per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Construction velocity for every shape; not a constructor parameter
    pub const DEFAULT_VELOCITY_X: f32 = 10.0;
    pub const DEFAULT_VELOCITY_Y: f32 = 10.0;

    /// Shape geometry defaults
    pub const DEFAULT_RECT_SIZE: f32 = 100.0;
    pub const DEFAULT_CIRCLE_RADIUS: f32 = 10.0;

    /// Half-width of a stroked circle outline, in canvas units
    pub const STROKE_HALF_WIDTH: f32 = 1.0;
}
