//! Wheel layout geometry
//!
//! The layout is derived, never stored: a bijection between candidate index
//! and an angular slice of `360/N` degrees. The drawing frame puts angle 0
//! at 3 o'clock, so every slice is shifted by -90 degrees to anchor slice
//! 0's leading edge under the pointer (12 o'clock). With cumulative rotation
//! r, the unrotated angle sitting under the pointer is `(-r) mod 360`
//! measured from slice 0's leading edge.

use glam::Vec2;

use crate::polar_to_cartesian;

/// Canvas angle offset so slice 0 starts at the pointer instead of the
/// 3-o'clock drawing origin (degrees).
pub const SLICE_OFFSET_DEG: f64 = -90.0;

/// Immutable snapshot of the wheel's slice arrangement for one candidate
/// list. A spin session captures one of these at spin start so entry-list
/// edits cannot disturb an in-flight animation.
#[derive(Debug, Clone, PartialEq)]
pub struct WheelLayout {
    labels: Vec<String>,
}

impl WheelLayout {
    /// Build a layout over an already-sanitized candidate list.
    pub fn new(labels: Vec<String>) -> Self {
        Self { labels }
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Angular width of one slice in degrees
    pub fn slice_width(&self) -> f64 {
        360.0 / self.labels.len() as f64
    }

    /// Slice index for a label (exact, case-sensitive match)
    pub fn index_of(&self, label: &str) -> Option<usize> {
        self.labels.iter().position(|l| l == label)
    }

    /// Start angle of slice `i` in the unrotated drawing frame (degrees)
    pub fn slice_start(&self, i: usize) -> f64 {
        i as f64 * self.slice_width() + SLICE_OFFSET_DEG
    }

    /// End angle of slice `i` in the unrotated drawing frame (degrees)
    pub fn slice_end(&self, i: usize) -> f64 {
        (i + 1) as f64 * self.slice_width() + SLICE_OFFSET_DEG
    }

    /// Center of slice `i` measured from slice 0's leading edge (degrees)
    pub fn slice_center_offset(&self, i: usize) -> f64 {
        (i as f64 + 0.5) * self.slice_width()
    }

    /// Which slice sits under the fixed pointer at cumulative rotation
    /// `rotation` (degrees, unbounded).
    pub fn slice_at_pointer(&self, rotation: f64) -> usize {
        debug_assert!(!self.labels.is_empty());
        let under_pointer = (-rotation).rem_euclid(360.0);
        // Guard the i == len edge from float round-off at exact multiples
        ((under_pointer / self.slice_width()) as usize).min(self.labels.len() - 1)
    }

    /// Label of the pointer-aligned slice
    pub fn label_at_pointer(&self, rotation: f64) -> &str {
        &self.labels[self.slice_at_pointer(rotation)]
    }

    /// Anchor point for slice `i`'s label, at `radius_frac` of `radius`
    /// along the slice's center ray in the unrotated drawing frame.
    pub fn label_anchor(&self, i: usize, radius: f32, radius_frac: f32) -> Vec2 {
        let mid_deg = (self.slice_start(i) + self.slice_end(i)) / 2.0;
        polar_to_cartesian(radius * radius_frac, (mid_deg as f32).to_radians())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout(n: usize) -> WheelLayout {
        WheelLayout::new((0..n).map(|i| format!("entry-{i}")).collect())
    }

    #[test]
    fn test_slice_bounds() {
        let l = layout(4);
        assert_eq!(l.slice_width(), 90.0);
        assert_eq!(l.slice_start(0), -90.0);
        assert_eq!(l.slice_end(0), 0.0);
        assert_eq!(l.slice_start(3), 180.0);
        assert_eq!(l.slice_end(3), 270.0);
    }

    #[test]
    fn test_slice_zero_under_pointer_at_rest() {
        for n in [1, 2, 3, 7, 12] {
            let l = layout(n);
            assert_eq!(l.slice_at_pointer(0.0), 0);
            assert_eq!(l.slice_at_pointer(360.0), 0);
            assert_eq!(l.slice_at_pointer(-720.0), 0);
        }
    }

    #[test]
    fn test_pointer_lookup_inverts_center_rotation() {
        // Rotating by (360 - center(i)) mod 360 must land slice i under
        // the pointer, for every slice.
        for n in [1, 2, 5, 12, 37] {
            let l = layout(n);
            for i in 0..n {
                let rotation = (360.0 - l.slice_center_offset(i)).rem_euclid(360.0);
                assert_eq!(l.slice_at_pointer(rotation), i, "n={n} i={i}");
                // Extra full turns change nothing
                assert_eq!(l.slice_at_pointer(rotation + 6.0 * 360.0), i);
            }
        }
    }

    #[test]
    fn test_label_anchor_points_along_center_ray() {
        let l = layout(4);
        // Slice 1 spans [0, 90) in the drawing frame; its center ray is 45
        let anchor = l.label_anchor(1, 200.0, 0.75);
        let expected = polar_to_cartesian(150.0, 45.0_f32.to_radians());
        assert!((anchor - expected).length() < 1e-3);
    }
}
