use crate::types::SurfaceBounds;

/// Smoothed pointer position in normalized surface coordinates.
///
/// Input events only move the *target*; the *current* position is advanced
/// once per animation frame by exponential smoothing. That decouples input
/// frequency from render frequency and turns raw pointer jitter into a
/// trailing motion. The vertical axis is inverted so (0, 0) is the
/// bottom-left corner, matching the shader's coordinate convention.
#[derive(Debug)]
pub struct PointerState {
    current: [f32; 2],
    target: [f32; 2],
    smoothing: f32,
}

impl PointerState {
    /// Both positions start at the surface centre, like the original.
    pub fn new(smoothing: f32) -> Self {
        Self {
            current: [0.5, 0.5],
            target: [0.5, 0.5],
            smoothing: smoothing.clamp(f32::EPSILON, 1.0),
        }
    }

    /// Maps a raw pointer/touch coordinate into the target position.
    ///
    /// Coordinates are normalized against the surface bounds, clamped to
    /// [0, 1] on both axes, and Y-flipped. Degenerate bounds are ignored;
    /// the aspect correction downstream would otherwise divide by zero.
    pub fn set_target(&mut self, x: f64, y: f64, bounds: SurfaceBounds) {
        if bounds.is_degenerate() {
            return;
        }
        let nx = ((x - bounds.left) / bounds.width).clamp(0.0, 1.0);
        let ny = ((y - bounds.top) / bounds.height).clamp(0.0, 1.0);
        self.target = [nx as f32, (1.0 - ny) as f32];
    }

    /// Advances the current position one frame toward the target.
    pub fn advance(&mut self) {
        for axis in 0..2 {
            self.current[axis] += (self.target[axis] - self.current[axis]) * self.smoothing;
        }
    }

    pub fn current(&self) -> [f32; 2] {
        self.current
    }

    pub fn target(&self) -> [f32; 2] {
        self.target
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds() -> SurfaceBounds {
        SurfaceBounds::from_size(800.0, 600.0)
    }

    #[test]
    fn top_left_corner_maps_to_zero_one() {
        let mut pointer = PointerState::new(0.05);
        pointer.set_target(0.0, 0.0, bounds());
        assert_eq!(pointer.target(), [0.0, 1.0]);
    }

    #[test]
    fn bottom_right_corner_maps_to_one_zero() {
        let mut pointer = PointerState::new(0.05);
        pointer.set_target(800.0, 600.0, bounds());
        assert_eq!(pointer.target(), [1.0, 0.0]);
    }

    #[test]
    fn coordinates_outside_bounds_clamp() {
        let mut pointer = PointerState::new(0.05);
        pointer.set_target(-40.0, 900.0, bounds());
        assert_eq!(pointer.target(), [0.0, 0.0]);
    }

    #[test]
    fn offset_bounds_shift_the_mapping() {
        let mut pointer = PointerState::new(0.05);
        let bounds = SurfaceBounds {
            left: 100.0,
            top: 50.0,
            width: 200.0,
            height: 100.0,
        };
        pointer.set_target(200.0, 100.0, bounds);
        assert_eq!(pointer.target(), [0.5, 0.5]);
    }

    #[test]
    fn degenerate_bounds_are_ignored() {
        let mut pointer = PointerState::new(0.05);
        pointer.set_target(10.0, 10.0, SurfaceBounds::from_size(0.0, 600.0));
        assert_eq!(pointer.target(), [0.5, 0.5]);
    }

    #[test]
    fn smoothing_converges_without_overshoot() {
        let mut pointer = PointerState::new(0.05);
        pointer.set_target(0.0, 0.0, bounds());

        let mut previous = (pointer.current()[0] - 0.0).abs();
        for _ in 0..400 {
            pointer.advance();
            let distance = (pointer.current()[0] - 0.0).abs();
            assert!(distance < previous, "distance must strictly decrease");
            assert!(pointer.current()[0] >= 0.0, "must not overshoot the target");
            previous = distance;
        }
        assert!(previous < 1e-3);
    }

    #[test]
    fn events_do_not_move_the_current_position() {
        let mut pointer = PointerState::new(0.05);
        pointer.set_target(0.0, 0.0, bounds());
        assert_eq!(pointer.current(), [0.5, 0.5]);
    }
}
