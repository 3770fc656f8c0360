//! Scene node capability surface
//!
//! Nodes are plain data composed into the scene; anything visible implements
//! `SceneNode` and paints into a retained `DisplayList` of primitives. The
//! list is the rendering output - rasterization belongs to whatever host
//! consumes it.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::geom::Rect;

/// Packed RGBA color (0xRRGGBBAA)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color(pub u32);

impl Color {
    pub const WHITE: Color = Color(0xffff_ffff);
    pub const ORANGE: Color = Color(0xffa5_00ff);
    pub const DARK_GREY: Color = Color(0x5555_55ff);

    pub fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Color(u32::from_be_bytes([r, g, b, a]))
    }

    pub fn r(&self) -> u8 {
        (self.0 >> 24) as u8
    }

    pub fn g(&self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub fn b(&self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub fn a(&self) -> u8 {
        self.0 as u8
    }
}

/// A single draw primitive
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Primitive {
    /// Stroked rounded rectangle
    RoundedRect {
        rect: Rect,
        corner_radius: f32,
        stroke_width: f32,
        color: Color,
    },
    /// Filled ellipse with an outline
    Ellipse {
        rect: Rect,
        fill: Color,
        outline: Color,
        outline_width: f32,
    },
    /// Image stand-in for a button face (the host owns actual image data)
    Sprite { rect: Rect, pressed: bool },
    /// Centered single-line text
    Label {
        rect: Rect,
        text: String,
        color: Color,
    },
}

/// Ordered list of primitives produced by one paint pass
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DisplayList {
    prims: Vec<Primitive>,
}

impl DisplayList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, prim: Primitive) {
        self.prims.push(prim);
    }

    pub fn prims(&self) -> &[Primitive] {
        &self.prims
    }

    pub fn len(&self) -> usize {
        self.prims.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prims.is_empty()
    }

    pub fn clear(&mut self) {
        self.prims.clear();
    }
}

/// Boundable + hit-testable + paintable capability, composed rather than
/// inherited. Everything visible in the scene implements this.
pub trait SceneNode {
    fn bounds(&self) -> Rect;

    fn hit_test(&self, point: Vec2) -> bool {
        self.bounds().contains(point)
    }

    fn paint(&self, out: &mut DisplayList);
}
