use super::WheelError;

/// Index of the slot lined up with the fixed pointer at 0 degrees after the
/// wheel has rotated counter-clockwise by `angle`.
///
/// Slot spans are closed-open, so a pointer sitting exactly on a boundary
/// belongs to the slot whose span starts there.
pub fn resolve(angle: f64, slot_count: usize) -> Result<usize, WheelError> {
    if slot_count == 0 {
        return Err(WheelError::NoSlots);
    }
    if !angle.is_finite() {
        return Err(WheelError::NonFiniteAngle(angle));
    }

    let slice_width = 360.0 / slot_count as f64;
    let normalized = (-angle).rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    Ok((normalized / slice_width).floor() as usize % slot_count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_slots_is_rejected() {
        assert_eq!(resolve(12.0, 0), Err(WheelError::NoSlots));
    }

    #[test]
    fn test_non_finite_angle_is_rejected() {
        assert!(resolve(f64::NAN, 4).is_err());
        assert!(resolve(f64::INFINITY, 4).is_err());
    }

    #[test]
    fn test_boundaries_are_closed_open() {
        assert_eq!(resolve(0.0, 4), Ok(0));
        assert_eq!(resolve(90.0, 4), Ok(3));
        assert_eq!(resolve(180.0, 4), Ok(2));
        assert_eq!(resolve(270.0, 4), Ok(1));
    }

    #[test]
    fn test_interior_angles() {
        // Rotating by 10 degrees puts the pointer 10 degrees into the last slot
        assert_eq!(resolve(10.0, 4), Ok(3));
        assert_eq!(resolve(-10.0, 4), Ok(0));
        assert_eq!(resolve(-100.0, 4), Ok(1));
    }

    #[test]
    fn test_single_slot_always_wins() {
        for angle in [0.0, 45.5, 359.999, -720.0, 1.0e6] {
            assert_eq!(resolve(angle, 1), Ok(0));
        }
    }

    #[test]
    fn test_result_always_in_range() {
        for n in 1..=12 {
            let mut angle = -1000.0;
            while angle < 1000.0 {
                let idx = resolve(angle, n).unwrap();
                assert!(idx < n, "resolve({angle}, {n}) = {idx}");
                angle += 7.3;
            }
        }
    }

    #[test]
    fn test_periodic_in_full_turns() {
        for n in [2, 3, 6, 8] {
            for angle in [0.0, 17.0, 90.0, 123.25, 300.0, -45.0] {
                assert_eq!(resolve(angle, n), resolve(angle + 360.0, n));
                assert_eq!(resolve(angle, n), resolve(angle - 720.0, n));
            }
        }
    }

    #[test]
    fn test_tiny_negative_remainder_wraps_to_first_slot() {
        assert_eq!(resolve(1.0e-300, 6), Ok(0));
    }
}
