//! Orbit Scene headless driver
//!
//! Runs the "10 Components: Animation" scene without a host toolkit: a fixed
//! frame loop feeds scripted clicks and a drag gesture into the scene and
//! logs what happens. Usage: `orbit-scene [seed] [frames]`.

use std::path::Path;

use glam::Vec2;

use orbit_scene::consts::TICK_MS;
use orbit_scene::scene::{FrameClock, SceneEvent, SceneState, TickInput};
use orbit_scene::settings::Settings;

const DEFAULT_FRAMES: u64 = 600;

/// Everything the frame loop owns
struct Driver {
    state: SceneState,
    clock: FrameClock,
    input: TickInput,
    spawned: u64,
    removed: u64,
    cycles: u32,
}

impl Driver {
    fn new(seed: u64, settings: &Settings) -> Self {
        Self {
            state: SceneState::with_settings(seed, settings),
            clock: FrameClock::new(),
            input: TickInput::default(),
            spawned: 0,
            removed: 0,
            cycles: 0,
        }
    }

    /// Scripted input: a click every two seconds, and a drag gesture that
    /// walks the spawner toward the top-left corner during frames 60-120.
    fn script_input(&mut self, frame: u64) {
        if frame > 0 && frame % 120 == 0 {
            self.input.click = Some(self.state.buttons[0].bounds.center());
        }
        match frame {
            60 => self.input.drag_begin = Some(self.state.spawner.center()),
            61..=119 => {
                let t = (frame - 60) as f32 / 60.0;
                let from = self.state.size / 2.0;
                let to = Vec2::new(80.0, 60.0);
                self.input.drag_move = Some(from.lerp(to, t));
            }
            120 => {
                self.input.drag_end = true;
                self.input.drag_move = None;
            }
            _ => {}
        }
    }

    fn run_frame(&mut self, frame: u64) {
        self.script_input(frame);
        self.clock.advance(&mut self.state, &mut self.input, TICK_MS);

        for event in self.state.drain_events() {
            match event {
                SceneEvent::BallSpawned { id, pos } => {
                    self.spawned += 1;
                    log::debug!("frame {}: ball {} spawned at {:.1?}", frame, id, pos);
                }
                SceneEvent::BallRemoved { id } => {
                    self.removed += 1;
                    log::debug!("frame {}: ball {} removed", frame, id);
                }
                SceneEvent::LayoutCycled { cycle } => {
                    self.cycles += 1;
                    log::info!("frame {}: layout cycle {}", frame, cycle);
                }
            }
        }
    }
}

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let seed = args
        .next()
        .and_then(|s| s.parse().ok())
        .unwrap_or(0xB0B0_CAFE);
    let frames = args
        .next()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_FRAMES);

    let settings = Settings::load(Path::new("orbit-scene.json"));

    log::info!("10 Components: Animation (headless) - seed {}", seed);
    let mut driver = Driver::new(seed, &settings);

    for frame in 0..frames {
        driver.run_frame(frame);
    }

    let display = driver.state.paint();
    log::info!(
        "Done after {} ticks: {} balls spawned, {} removed, {} live, {} layout cycles, {} primitives in final frame",
        driver.state.time_ticks,
        driver.spawned,
        driver.removed,
        driver.state.balls.len(),
        driver.cycles,
        display.len(),
    );
}
