//! Fixed timestep scene tick
//!
//! One tick advances the scene by 1000/60 ms: pointer input, ball physics,
//! the spawn roll, then the animator. `FrameClock` folds variable frame
//! deltas into fixed steps.

use glam::Vec2;
use rand::Rng;

use super::layout::{click_duration_ms, slot_angle, slot_index, target_rect};
use super::state::{SceneEvent, SceneState};
use crate::consts::{MAX_SUBSTEPS, TICK_MS};
use crate::node::SceneNode;

/// Pointer input applied during a tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Click position (one-shot)
    pub click: Option<Vec2>,
    /// Pointer-down position starting a drag (one-shot)
    pub drag_begin: Option<Vec2>,
    /// Current pointer position while dragging (held)
    pub drag_move: Option<Vec2>,
    /// Pointer released (one-shot)
    pub drag_end: bool,
}

impl TickInput {
    /// Clear inputs that must apply to exactly one tick
    pub fn clear_one_shot(&mut self) {
        self.click = None;
        self.drag_begin = None;
        self.drag_end = false;
    }
}

/// Advance the scene by one fixed timestep
pub fn tick(state: &mut SceneState, input: &TickInput) {
    // Spawner drag
    if let Some(pointer) = input.drag_begin
        && state.spawner.hit_test(pointer)
    {
        state.spawner.begin_drag(pointer);
    }
    if let Some(pointer) = input.drag_move {
        let scene = state.size;
        state.spawner.drag_to(pointer, scene);
    }
    if input.drag_end {
        state.spawner.end_drag();
    }

    // A click on any button reshuffles the whole carousel
    if let Some(pointer) = input.click
        && let Some(clicked) = state.button_at(pointer)
    {
        recycle_layout(state, clicked);
    }

    state.time_ticks += 1;

    // Advance balls in reverse so removal never skips an entry
    for idx in (0..state.balls.len()).rev() {
        let scene = state.size;
        if !state.balls[idx].advance(Some(scene)) {
            let id = state.balls[idx].id;
            log::debug!("Ball {} left the scene", id);
            state.events.push(SceneEvent::BallRemoved { id });
            state.balls.remove(idx);
        }
    }

    // Spawn roll
    if state.rng.random_range(0..100) < state.spawn_chance_pct {
        state.spawn_ball();
    }

    // Drive in-flight button transitions
    for (id, rect) in state.animator.advance(TICK_MS) {
        if let Some(button) = state.buttons.iter_mut().find(|b| b.id == id) {
            button.bounds = rect;
        }
    }
}

/// Send every button toward its next permuted slot and bump the cycle counter
fn recycle_layout(state: &mut SceneState, clicked_id: u32) {
    let n = state.buttons.len();
    if n == 0 {
        return;
    }

    for i in 0..n {
        let angle = slot_angle(slot_index(i, state.cycle, n), n);
        let target = target_rect(state.size, angle);
        let button = &state.buttons[i];
        state
            .animator
            .animate(button.id, button.bounds, target, click_duration_ms(angle));
    }

    if let Some(button) = state.buttons.iter_mut().find(|b| b.id == clicked_id) {
        button.pressed = !button.pressed;
    }

    state.cycle += 1;
    log::info!("Layout cycle {} dispatched ({} buttons)", state.cycle, n);
    state.events.push(SceneEvent::LayoutCycled { cycle: state.cycle });
}

/// Folds real frame time into fixed simulation steps
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    accumulator_ms: f32,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run as many fixed ticks as `delta_ms` covers (capped to avoid a
    /// spiral of death). One-shot inputs are consumed by the first tick.
    /// Returns the number of ticks executed.
    pub fn advance(&mut self, state: &mut SceneState, input: &mut TickInput, delta_ms: f32) -> u32 {
        self.accumulator_ms += delta_ms.min(250.0);

        let mut steps = 0;
        while self.accumulator_ms >= TICK_MS && steps < MAX_SUBSTEPS {
            tick(state, input);
            input.clear_one_shot();
            self.accumulator_ms -= TICK_MS;
            steps += 1;
        }
        steps
    }
}
