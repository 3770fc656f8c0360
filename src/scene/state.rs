//! Scene state and entity types
//!
//! Everything needed to reproduce a run from a seed lives here.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::animator::Animator;
use super::layout::{initial_duration_ms, initial_slot_index, slot_angle, target_rect};
use super::spawner::Spawner;
use crate::consts::*;
use crate::geom::Rect;
use crate::node::{Color, DisplayList, Primitive, SceneNode};
use crate::settings::Settings;

/// A bouncing ball entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub id: u32,
    pub pos: Vec2,
    pub vel: Vec2,
    pub color: Color,
}

impl Ball {
    pub fn new(id: u32, pos: Vec2, vel: Vec2) -> Self {
        Self {
            id,
            pos,
            vel,
            color: Color::WHITE,
        }
    }

    /// Integrate one tick of motion and report survival.
    ///
    /// With scene bounds, the ball survives while `0 <= x < width` and
    /// `y < height` (it may fly above the top edge and fall back in).
    /// Without bounds the documented fallback window applies: `y < 400`
    /// and `x >= -10`.
    pub fn advance(&mut self, scene: Option<Vec2>) -> bool {
        self.pos += self.vel;
        self.vel.y += GRAVITY_PER_TICK;

        match scene {
            Some(bounds) => {
                self.pos.x >= 0.0 && self.pos.x < bounds.x && self.pos.y < bounds.y
            }
            None => self.pos.y < FALLBACK_FLOOR_Y && self.pos.x >= FALLBACK_MIN_X,
        }
    }
}

impl SceneNode for Ball {
    fn bounds(&self) -> Rect {
        Rect::centered(self.pos, Vec2::splat(BALL_SIZE))
    }

    fn paint(&self, out: &mut DisplayList) {
        out.push(Primitive::Ellipse {
            rect: self.bounds().reduced(2.0),
            fill: self.color,
            outline: Color::DARK_GREY,
            outline_width: 1.0,
        });
    }
}

/// One animated carousel button
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ButtonSlot {
    pub id: u32,
    pub bounds: Rect,
    /// Toggle state flipped by clicks
    pub pressed: bool,
}

impl SceneNode for ButtonSlot {
    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn paint(&self, out: &mut DisplayList) {
        out.push(Primitive::Sprite {
            rect: self.bounds,
            pressed: self.pressed,
        });
    }
}

/// Events emitted during a tick, drained by the host each frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SceneEvent {
    BallSpawned { id: u32, pos: Vec2 },
    BallRemoved { id: u32 },
    LayoutCycled { cycle: u32 },
}

/// RNG state wrapper for serialization
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RngState {
    pub seed: u64,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    pub fn to_rng(&self) -> Pcg32 {
        Pcg32::seed_from_u64(self.seed)
    }
}

fn default_rng() -> Pcg32 {
    Pcg32::seed_from_u64(0)
}

/// Complete scene state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneState {
    /// Scene dimensions
    pub size: Vec2,
    /// Run seed for reproducibility
    pub seed: u64,
    /// RNG state (live rng is rebuilt from this on restore)
    pub rng_state: RngState,
    #[serde(skip, default = "default_rng")]
    pub rng: Pcg32,
    /// Tick counter
    pub time_ticks: u64,
    /// Layout cycle counter, bumped once per click
    pub cycle: u32,
    /// Percent chance of a ball spawn per tick
    pub spawn_chance_pct: u32,
    /// Carousel buttons (stable id order)
    pub buttons: Vec<ButtonSlot>,
    /// Ball source, draggable
    pub spawner: Spawner,
    /// Live balls (stable id order)
    pub balls: Vec<Ball>,
    /// Bounds animator shared by all buttons
    pub animator: Animator,
    /// Events since the last drain
    #[serde(skip)]
    pub events: Vec<SceneEvent>,
    /// Next entity ID
    next_id: u32,
}

impl SceneState {
    /// Create a scene with default tuning
    pub fn new(seed: u64) -> Self {
        Self::with_settings(seed, &Settings::default())
    }

    /// Create a scene from settings. Buttons start stacked on the center
    /// and immediately animate out to their first radial layout.
    pub fn with_settings(seed: u64, settings: &Settings) -> Self {
        let settings = settings.validated();
        let size = Vec2::new(settings.scene_width, settings.scene_height);

        let mut state = Self {
            size,
            seed,
            rng_state: RngState::new(seed),
            rng: Pcg32::seed_from_u64(seed),
            time_ticks: 0,
            cycle: INITIAL_CYCLE,
            spawn_chance_pct: settings.spawn_chance_pct,
            buttons: Vec::with_capacity(settings.button_count),
            spawner: Spawner::new(size),
            balls: Vec::new(),
            animator: Animator::new(),
            events: Vec::new(),
            next_id: 1,
        };

        let n = settings.button_count;
        let stack = Rect::new(
            INITIAL_STACK_INSET,
            INITIAL_STACK_INSET,
            (size.x - INITIAL_STACK_INSET * 2.0).max(0.0),
            (size.y - INITIAL_STACK_INSET * 2.0).max(0.0),
        );

        for _ in 0..n {
            let id = state.next_entity_id();
            state.buttons.push(ButtonSlot {
                id,
                bounds: stack,
                pressed: false,
            });
        }

        for i in 0..n {
            let angle = slot_angle(initial_slot_index(i, n), n);
            let target = target_rect(size, angle);
            let button = &state.buttons[i];
            state
                .animator
                .animate(button.id, button.bounds, target, initial_duration_ms(i));
        }

        log::info!(
            "Scene created: seed={} size={}x{} buttons={}",
            seed,
            size.x,
            size.y,
            n
        );

        state
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Spawn a ball at the spawner's center with a randomized kick: a small
    /// horizontal component and an upward launch. The ball integrates once
    /// immediately so it never sits exactly on the emission point.
    pub fn spawn_ball(&mut self) {
        let vel = Vec2::new(
            self.rng.random::<f32>() * 4.0 - 2.0,
            self.rng.random::<f32>() * -6.0 - 2.0,
        );
        let id = self.next_entity_id();
        let mut ball = Ball::new(id, self.spawner.center(), vel);
        // First-step survival is not checked; the next tick will cull if needed
        ball.advance(Some(self.size));

        log::debug!("Ball {} spawned at {:?}", id, ball.pos);
        self.events.push(SceneEvent::BallSpawned { id, pos: ball.pos });
        self.balls.push(ball);
    }

    /// Button under the given point, if any (topmost wins on overlap)
    pub fn button_at(&self, point: Vec2) -> Option<u32> {
        self.buttons
            .iter()
            .rev()
            .find(|b| b.hit_test(point))
            .map(|b| b.id)
    }

    /// Ensure entities are sorted by ID for deterministic iteration
    pub fn normalize_order(&mut self) {
        self.buttons.sort_by_key(|b| b.id);
        self.balls.sort_by_key(|b| b.id);
    }

    /// Rebuild the live RNG after deserialization
    pub fn resume(&mut self) {
        self.rng = self.rng_state.to_rng();
        self.normalize_order();
    }

    /// Drain events accumulated since the last call
    pub fn drain_events(&mut self) -> Vec<SceneEvent> {
        std::mem::take(&mut self.events)
    }

    /// Paint the whole scene back-to-front: buttons, spawner, then balls
    pub fn paint(&self) -> DisplayList {
        let mut list = DisplayList::new();
        for button in &self.buttons {
            button.paint(&mut list);
        }
        self.spawner.paint(&mut list);
        for ball in &self.balls {
            ball.paint(&mut list);
        }
        list
    }
}
