//! Deterministic scene module
//!
//! All scene behavior lives here. This module must be pure and deterministic:
//! - Fixed timestep only (one tick = 1000/60 ms)
//! - Seeded RNG only
//! - Stable iteration order (by entity ID)
//! - No rendering or platform dependencies beyond the display list

pub mod animator;
pub mod layout;
pub mod spawner;
pub mod state;
pub mod tick;

pub use animator::Animator;
pub use layout::{
    click_duration_ms, initial_duration_ms, initial_slot_index, slot_angle, slot_index,
    target_rect,
};
pub use spawner::Spawner;
pub use state::{Ball, ButtonSlot, RngState, SceneEvent, SceneState};
pub use tick::{FrameClock, TickInput, tick};
