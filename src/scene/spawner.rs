//! Draggable ball spawner
//!
//! A small marker rect that emits balls from its center. Dragging keeps it
//! fully inside the scene.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::{SPAWNER_HEIGHT, SPAWNER_WIDTH};
use crate::geom::Rect;
use crate::node::{Color, DisplayList, Primitive, SceneNode};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Spawner {
    pub bounds: Rect,
    /// Pointer offset from the rect origin while a drag is active
    #[serde(skip)]
    grab: Option<Vec2>,
}

impl Spawner {
    /// Spawner centered in a scene of the given size
    pub fn new(scene: Vec2) -> Self {
        Self {
            bounds: Rect::centered(scene / 2.0, Vec2::new(SPAWNER_WIDTH, SPAWNER_HEIGHT)),
            grab: None,
        }
    }

    /// Emission point for new balls
    pub fn center(&self) -> Vec2 {
        self.bounds.center()
    }

    /// Start a drag, remembering where inside the rect the pointer grabbed
    pub fn begin_drag(&mut self, pointer: Vec2) {
        self.grab = Some(pointer - self.bounds.pos);
    }

    /// Follow the pointer, clamped so the rect stays fully on-screen.
    /// No-op unless a drag is active.
    pub fn drag_to(&mut self, pointer: Vec2, scene: Vec2) {
        if let Some(grab) = self.grab {
            self.bounds.pos = pointer - grab;
            self.bounds = self.bounds.clamped_inside(scene);
        }
    }

    pub fn end_drag(&mut self) {
        self.grab = None;
    }

    pub fn is_dragging(&self) -> bool {
        self.grab.is_some()
    }
}

impl SceneNode for Spawner {
    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn paint(&self, out: &mut DisplayList) {
        out.push(Primitive::RoundedRect {
            rect: self.bounds.reduced(2.0),
            corner_radius: 10.0,
            stroke_width: 2.0,
            color: Color::ORANGE,
        });
        out.push(Primitive::Label {
            rect: self.bounds,
            text: "Drag Me!".to_string(),
            color: Color::WHITE,
        });
    }
}
