/// Inputs the wheel refuses. These all indicate a misconfigured caller,
/// so nothing here is ever clamped into range.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum WheelError {
    #[error("wheel needs at least one slot")]
    NoSlots,

    #[error("initial velocity must be a positive finite number, got {0}")]
    InvalidVelocity(f64),

    #[error("friction factor must lie strictly between 0 and 1, got {0}")]
    InvalidFriction(f64),

    #[error("minimum velocity must be a positive finite number, got {0}")]
    InvalidMinVelocity(f64),

    #[error("spin range must satisfy 0 < min <= max, got {min}..={max}")]
    InvalidSpinRange { min: f64, max: f64 },

    #[error("angle must be finite, got {0}")]
    NonFiniteAngle(f64),
}
