//! Radial slot layout
//!
//! Buttons orbit the scene center; every layout cycle rotates each button
//! three slots further around the ring, so repeated clicks visit different
//! positions.

use std::f32::consts::TAU;

use glam::Vec2;

use crate::consts::{CYCLE_STRIDE, LAYOUT_RADIUS_FRACTION, SLOT_MARGIN, SLOT_SIZE};
use crate::geom::Rect;
use crate::polar_offset;

/// Slot assigned to button `i` for the given layout cycle.
///
/// A rotation by a constant offset, so the assignment is a bijection on
/// `[0, n)` for any cycle.
pub fn slot_index(i: usize, cycle: u32, n: usize) -> usize {
    (i + CYCLE_STRIDE as usize * cycle as usize) % n
}

/// Slot used for the initial (construction-time) layout
pub fn initial_slot_index(i: usize, n: usize) -> usize {
    (i + CYCLE_STRIDE as usize) % n
}

/// Angle of a slot on the ring, measured from straight down the scene
pub fn slot_angle(slot: usize, n: usize) -> f32 {
    slot as f32 * TAU / n as f32
}

/// Target bounds for a button at the given ring angle
pub fn target_rect(scene: Vec2, angle: f32) -> Rect {
    let radius = scene.x * LAYOUT_RADIUS_FRACTION;
    let center = scene / 2.0 + polar_offset(radius, angle);
    Rect::centered(center, Vec2::splat(SLOT_SIZE)).reduced(SLOT_MARGIN)
}

/// Transition duration for a click-triggered move, varying with ring angle
pub fn click_duration_ms(angle: f32) -> f32 {
    900.0 + 300.0 * angle.sin()
}

/// Transition duration for the initial layout, staggered per button
pub fn initial_duration_ms(i: usize) -> f32 {
    500.0 + 100.0 * i as f32
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_worked_example() {
        // 11 buttons, cycle 2: button 0 lands in slot 6
        let n = 11;
        let slot = slot_index(0, 2, n);
        assert_eq!(slot, 6);

        let angle = slot_angle(slot, n);
        assert!((angle - 6.0 * TAU / 11.0).abs() < 1e-6);

        let scene = Vec2::new(620.0, 620.0);
        let rect = target_rect(scene, angle);
        let radius = 0.35 * 620.0;
        let expected = Vec2::new(
            310.0 + radius * angle.sin(),
            310.0 + radius * angle.cos(),
        );
        assert!((rect.center() - expected).length() < 1e-3);
        assert_eq!(rect.size, Vec2::splat(80.0));
    }

    #[test]
    fn test_initial_slot_matches_cycle_one() {
        // The fixed initial permutation is the stride applied once
        for i in 0..11 {
            assert_eq!(initial_slot_index(i, 11), slot_index(i, 1, 11));
        }
    }

    #[test]
    fn test_durations() {
        assert_eq!(initial_duration_ms(0), 500.0);
        assert_eq!(initial_duration_ms(10), 1500.0);

        // sin(0) = 0 -> base duration at the bottom of the ring
        assert_eq!(click_duration_ms(0.0), 900.0);
        let quarter = click_duration_ms(std::f32::consts::FRAC_PI_2);
        assert!((quarter - 1200.0).abs() < 1e-3);
    }

    proptest! {
        #[test]
        fn prop_slot_assignment_is_bijection(n in 1usize..64, cycle in 0u32..1000) {
            let mut seen = vec![false; n];
            for i in 0..n {
                let slot = slot_index(i, cycle, n);
                prop_assert!(slot < n);
                prop_assert!(!seen[slot], "slot {} assigned twice", slot);
                seen[slot] = true;
            }
        }

        #[test]
        fn prop_target_rect_on_ring(n in 1usize..64, slot in 0usize..64) {
            prop_assume!(slot < n);
            let scene = Vec2::new(620.0, 620.0);
            let rect = target_rect(scene, slot_angle(slot, n));
            let dist = (rect.center() - scene / 2.0).length();
            prop_assert!((dist - 0.35 * scene.x).abs() < 1e-2);
        }
    }
}
