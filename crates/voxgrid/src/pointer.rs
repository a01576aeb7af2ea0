//! Pointer handling: click detection and canvas coordinate conversion.

/// Movement in pixels, per axis, below which a press and release is a click.
pub const DEFAULT_MOVEMENT_SENSITIVITY: f32 = 5.0;

/// Tells clicks apart from camera drags.
///
/// Every move event adds the absolute distance from the press position to a
/// per-axis total. A release is a click only while both totals stay under
/// the sensitivity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClickTracker {
    sensitivity: f32,
    origin: [f32; 2],
    moved: [f32; 2],
    pressed: bool,
}

impl Default for ClickTracker {
    fn default() -> Self {
        Self::new(DEFAULT_MOVEMENT_SENSITIVITY)
    }
}

impl ClickTracker {
    /// Creates a tracker with the given movement threshold in pixels.
    #[must_use]
    pub const fn new(sensitivity: f32) -> Self {
        Self {
            sensitivity,
            origin: [0.0; 2],
            moved: [0.0; 2],
            pressed: false,
        }
    }

    /// Records a pointer press at client coordinates `[x, y]`.
    pub fn press(&mut self, position: [f32; 2]) {
        self.origin = position;
        self.moved = [0.0; 2];
        self.pressed = true;
    }

    /// Records a pointer move. Ignored when no press is active.
    pub fn movement(&mut self, position: [f32; 2]) {
        if !self.pressed {
            return;
        }
        self.moved[0] += (self.origin[0] - position[0]).abs();
        self.moved[1] += (self.origin[1] - position[1]).abs();
    }

    /// Records the release and returns whether it completes a click.
    pub fn release(&mut self) -> bool {
        let was_pressed = std::mem::replace(&mut self.pressed, false);
        was_pressed && self.moved[0] < self.sensitivity && self.moved[1] < self.sensitivity
    }

    /// Returns true between a press and its release.
    #[must_use]
    pub const fn is_pressed(&self) -> bool {
        self.pressed
    }
}

/// Converts a canvas pixel position to normalized device coordinates.
///
/// `x` maps `0..width` to `-1..1`; `y` maps `0..height` to `1..-1` since
/// canvas rows grow downward.
#[must_use]
pub fn pointer_to_ndc(position: [f32; 2], canvas_size: [f32; 2]) -> [f32; 2] {
    [
        position[0] / canvas_size[0] * 2.0 - 1.0,
        position[1] / canvas_size[1] * -2.0 + 1.0,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_still_press_is_click() {
        let mut t = ClickTracker::default();
        t.press([100.0, 100.0]);
        t.movement([101.0, 102.0]);
        assert!(t.release());
        assert!(!t.is_pressed());
    }

    #[test]
    fn test_drag_is_not_click() {
        let mut t = ClickTracker::default();
        t.press([100.0, 100.0]);
        t.movement([110.0, 100.0]);
        assert!(!t.release());
    }

    #[test]
    fn test_small_moves_accumulate() {
        let mut t = ClickTracker::default();
        t.press([0.0, 0.0]);
        // 2 + 2 + 2 px away from the press point on y.
        for _ in 0..3 {
            t.movement([0.0, 2.0]);
        }
        assert!(!t.release());
    }

    #[test]
    fn test_release_without_press() {
        let mut t = ClickTracker::new(5.0);
        assert!(!t.release());
    }

    #[test]
    fn test_ndc_corners_and_center() {
        let size = [800.0, 600.0];
        assert_eq!(pointer_to_ndc([0.0, 0.0], size), [-1.0, 1.0]);
        assert_eq!(pointer_to_ndc([800.0, 600.0], size), [1.0, -1.0]);
        assert_eq!(pointer_to_ndc([400.0, 300.0], size), [0.0, 0.0]);
    }
}
