//! Orbit Scene - a radial button carousel with a gravity-ball spawner
//!
//! Core modules:
//! - `scene`: Deterministic scene logic (ball physics, radial layout, animator)
//! - `geom`: Rectangle math shared by layout and hit testing
//! - `node`: Capability surface for paintable/hit-testable scene nodes
//! - `settings`: Data-driven scene tuning

pub mod geom;
pub mod node;
pub mod scene;
pub mod settings;

pub use geom::Rect;
pub use node::{Color, DisplayList, Primitive, SceneNode};
pub use settings::Settings;

use glam::Vec2;

/// Scene tuning constants
pub mod consts {
    /// Default scene dimensions
    pub const SCENE_WIDTH: f32 = 620.0;
    pub const SCENE_HEIGHT: f32 = 620.0;

    /// Fixed tick period (60 Hz)
    pub const TICK_MS: f32 = 1000.0 / 60.0;
    /// Maximum fixed steps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Number of animated buttons in the carousel
    pub const BUTTON_COUNT: usize = 11;
    /// Slot stride per layout cycle
    pub const CYCLE_STRIDE: u32 = 3;
    /// Cycle counter starts past the initial layout
    pub const INITIAL_CYCLE: u32 = 2;
    /// Radial layout radius as a fraction of scene width
    pub const LAYOUT_RADIUS_FRACTION: f32 = 0.35;
    /// Un-inset button slot size
    pub const SLOT_SIZE: f32 = 100.0;
    /// Margin trimmed from each slot edge
    pub const SLOT_MARGIN: f32 = 10.0;
    /// Buttons start stacked on the scene center (scene inset by this much per side)
    pub const INITIAL_STACK_INSET: f32 = 250.0;

    /// Ball dimensions
    pub const BALL_SIZE: f32 = 20.0;
    /// Downward acceleration per tick
    pub const GRAVITY_PER_TICK: f32 = 0.1;
    /// Percent chance of spawning a ball on any tick
    pub const SPAWN_CHANCE_PCT: u32 = 4;

    /// Spawner dimensions
    pub const SPAWNER_WIDTH: f32 = 80.0;
    pub const SPAWNER_HEIGHT: f32 = 50.0;

    /// Survival window for balls with no scene bounds
    pub const FALLBACK_FLOOR_Y: f32 = 400.0;
    pub const FALLBACK_MIN_X: f32 = -10.0;
}

/// Offset from a center point at the given angle and radius.
///
/// The radial layout measures angles clockwise from straight down the
/// scene: x grows with sin, y with cos.
#[inline]
pub fn polar_offset(radius: f32, angle: f32) -> Vec2 {
    Vec2::new(radius * angle.sin(), radius * angle.cos())
}
