use super::WheelError;

/// Angular span of one slot in degrees. Both ends are unbounded, like the
/// wheel angle they are derived from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliceSpan {
    pub start: f64,
    pub end: f64,
}

impl SliceSpan {
    pub fn mid(&self) -> f64 {
        (self.start + self.end) / 2.0
    }
}

/// Stateless slice layout for a wheel with a fixed number of slots.
///
/// Angles are counter-clockwise from "pointing right", in degrees. Points
/// come back in math convention (y grows upward); flipping the vertical
/// axis for a screen is the renderer's business.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelGeometry {
    slot_count: usize,
    slice_width: f64,
}

impl WheelGeometry {
    pub fn new(slot_count: usize) -> Result<Self, WheelError> {
        if slot_count == 0 {
            return Err(WheelError::NoSlots);
        }
        Ok(Self {
            slot_count,
            slice_width: 360.0 / slot_count as f64,
        })
    }

    pub fn slice_width(&self) -> f64 {
        self.slice_width
    }

    pub fn slice_span(&self, index: usize, current_angle: f64) -> SliceSpan {
        SliceSpan {
            start: current_angle + index as f64 * self.slice_width,
            end: current_angle + (index + 1) as f64 * self.slice_width,
        }
    }

    /// Point on the bisector of slot `index`, `radius * anchor_fraction`
    /// away from the centre.
    pub fn label_anchor(
        &self,
        index: usize,
        current_angle: f64,
        radius: f64,
        anchor_fraction: f64,
    ) -> (f64, f64) {
        let mid = self.slice_span(index, current_angle).mid().to_radians();
        let distance = radius * anchor_fraction;
        (distance * mid.cos(), distance * mid.sin())
    }

    /// Slot covering direction `theta` once the wheel sits at `current_angle`.
    pub fn slot_at(&self, theta: f64, current_angle: f64) -> usize {
        let relative = (theta - current_angle).rem_euclid(360.0);
        (relative / self.slice_width).floor() as usize % self.slot_count
    }
}
