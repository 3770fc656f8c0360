//! Bounds animator
//!
//! Interpolates node bounds from a start rect to a target rect over a fixed
//! duration with ease-in/ease-out. Transitions are non-additive: submitting a
//! new target for a node replaces whatever was in flight.

use serde::{Deserialize, Serialize};

use crate::geom::Rect;

/// One in-flight bounds transition
#[derive(Debug, Clone, Serialize, Deserialize)]
struct Transition {
    node_id: u32,
    from: Rect,
    to: Rect,
    duration_ms: f32,
    elapsed_ms: f32,
}

/// Smoothstep: zero velocity at both endpoints
#[inline]
fn ease(t: f32) -> f32 {
    t * t * (3.0 - 2.0 * t)
}

/// Schedules and advances bounds transitions for scene nodes
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Animator {
    transitions: Vec<Transition>,
}

impl Animator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule a transition for `node_id`, replacing any in-flight one.
    /// Non-positive durations complete on the next advance.
    pub fn animate(&mut self, node_id: u32, from: Rect, to: Rect, duration_ms: f32) {
        self.transitions.retain(|t| t.node_id != node_id);
        self.transitions.push(Transition {
            node_id,
            from,
            to,
            duration_ms: duration_ms.max(0.0),
            elapsed_ms: 0.0,
        });
    }

    /// Advance all transitions by `delta_ms` and return the new bounds per
    /// node. Completed transitions land exactly on their target and are
    /// dropped.
    pub fn advance(&mut self, delta_ms: f32) -> Vec<(u32, Rect)> {
        let mut updates = Vec::with_capacity(self.transitions.len());

        self.transitions.retain_mut(|t| {
            t.elapsed_ms += delta_ms;

            let done = t.elapsed_ms >= t.duration_ms;
            let rect = if done {
                t.to
            } else {
                let progress = t.elapsed_ms / t.duration_ms;
                Rect::lerp(t.from, t.to, ease(progress))
            };

            updates.push((t.node_id, rect));
            !done
        });

        updates
    }

    pub fn is_animating(&self, node_id: u32) -> bool {
        self.transitions.iter().any(|t| t.node_id == node_id)
    }

    pub fn active_count(&self) -> usize {
        self.transitions.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rects() -> (Rect, Rect) {
        (
            Rect::new(0.0, 0.0, 100.0, 100.0),
            Rect::new(200.0, 300.0, 80.0, 80.0),
        )
    }

    #[test]
    fn test_completes_exactly_on_target() {
        let (from, to) = rects();
        let mut animator = Animator::new();
        animator.animate(1, from, to, 100.0);

        let mut last = from;
        for _ in 0..10 {
            for (id, rect) in animator.advance(10.0) {
                assert_eq!(id, 1);
                last = rect;
            }
        }
        assert_eq!(last, to);
        assert!(!animator.is_animating(1));
    }

    #[test]
    fn test_non_additive_replacement() {
        let (from, to) = rects();
        let mut animator = Animator::new();
        animator.animate(1, from, to, 1000.0);
        animator.advance(100.0);

        // New target replaces the in-flight transition entirely
        let other = Rect::new(50.0, 50.0, 10.0, 10.0);
        animator.animate(1, from, other, 50.0);
        assert_eq!(animator.active_count(), 1);

        let updates = animator.advance(50.0);
        assert_eq!(updates, vec![(1, other)]);
        assert_eq!(animator.active_count(), 0);
    }

    #[test]
    fn test_zero_duration_snaps() {
        let (from, to) = rects();
        let mut animator = Animator::new();
        animator.animate(7, from, to, 0.0);

        let updates = animator.advance(0.1);
        assert_eq!(updates, vec![(7, to)]);
        assert!(!animator.is_animating(7));
    }

    #[test]
    fn test_eased_midpoint_is_halfway() {
        let (from, to) = rects();
        let mut animator = Animator::new();
        animator.animate(1, from, to, 100.0);

        let updates = animator.advance(50.0);
        let (_, rect) = updates[0];
        // smoothstep(0.5) == 0.5
        let mid = Rect::lerp(from, to, 0.5);
        assert!((rect.pos - mid.pos).length() < 1e-3);
        assert!((rect.size - mid.size).length() < 1e-3);
    }

    #[test]
    fn test_ease_endpoints() {
        assert_eq!(ease(0.0), 0.0);
        assert_eq!(ease(1.0), 1.0);
        // Slow start: first quarter of time covers well under a quarter of distance
        assert!(ease(0.25) < 0.25);
        assert!(ease(0.75) > 0.75);
    }

    #[test]
    fn test_independent_nodes() {
        let (from, to) = rects();
        let mut animator = Animator::new();
        animator.animate(1, from, to, 100.0);
        animator.animate(2, from, to, 200.0);
        assert_eq!(animator.active_count(), 2);

        animator.advance(150.0);
        assert!(!animator.is_animating(1));
        assert!(animator.is_animating(2));
    }
}
