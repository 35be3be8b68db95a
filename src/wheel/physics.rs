use rand::Rng;

use super::WheelError;

pub const DEFAULT_FRICTION: f64 = 0.992;
pub const DEFAULT_MIN_VELOCITY: f64 = 0.1;
pub const DEFAULT_SPIN_MIN: f64 = 15.0;
pub const DEFAULT_SPIN_MAX: f64 = 25.0;

/// Friction law for one spin. Validated once on construction so `tick`
/// never has to re-check it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysicsParams {
    friction: f64,
    min_velocity: f64,
}

impl PhysicsParams {
    pub fn new(friction: f64, min_velocity: f64) -> Result<Self, WheelError> {
        // Written as negated comparisons so NaN is rejected too
        if !(friction > 0.0 && friction < 1.0) {
            return Err(WheelError::InvalidFriction(friction));
        }
        if !(min_velocity > 0.0 && min_velocity.is_finite()) {
            return Err(WheelError::InvalidMinVelocity(min_velocity));
        }
        Ok(Self { friction, min_velocity })
    }
}

impl Default for PhysicsParams {
    fn default() -> Self {
        Self {
            friction: DEFAULT_FRICTION,
            min_velocity: DEFAULT_MIN_VELOCITY,
        }
    }
}

/// Uniform range the initial kick is drawn from, in degrees per tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpinRange {
    min: f64,
    max: f64,
}

impl SpinRange {
    pub fn new(min: f64, max: f64) -> Result<Self, WheelError> {
        if !(min > 0.0 && min <= max && max.is_finite()) {
            return Err(WheelError::InvalidSpinRange { min, max });
        }
        Ok(Self { min, max })
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        if self.min == self.max {
            return self.min;
        }
        rng.gen_range(self.min..=self.max)
    }
}

impl Default for SpinRange {
    fn default() -> Self {
        Self {
            min: DEFAULT_SPIN_MIN,
            max: DEFAULT_SPIN_MAX,
        }
    }
}

/// Rotational state of the wheel. `angle` accumulates across spins and is
/// never wrapped here; readers normalise it when they need to.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WheelState {
    pub angle: f64,
    pub angular_velocity: f64,
    pub is_spinning: bool,
}

impl WheelState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start_spin(&mut self, initial_velocity: f64) -> Result<(), WheelError> {
        if !(initial_velocity > 0.0 && initial_velocity.is_finite()) {
            return Err(WheelError::InvalidVelocity(initial_velocity));
        }
        self.angular_velocity = initial_velocity;
        self.is_spinning = true;
        Ok(())
    }

    /// Advance one step. Returns true only on the call where the wheel
    /// comes to rest.
    pub fn tick(&mut self, params: &PhysicsParams) -> bool {
        if !self.is_spinning {
            return false;
        }

        self.angle += self.angular_velocity;
        self.angular_velocity *= params.friction;

        if self.angular_velocity < params.min_velocity {
            self.angular_velocity = 0.0;
            self.is_spinning = false;
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_params_reject_out_of_range_friction() {
        for bad in [0.0, 1.0, -0.5, 1.5, f64::NAN] {
            assert!(matches!(
                PhysicsParams::new(bad, 0.1),
                Err(WheelError::InvalidFriction(_))
            ));
        }
        assert!(PhysicsParams::new(0.992, 0.1).is_ok());
    }

    #[test]
    fn test_params_reject_non_positive_min_velocity() {
        for bad in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                PhysicsParams::new(0.9, bad),
                Err(WheelError::InvalidMinVelocity(_))
            ));
        }
    }

    #[test]
    fn test_start_spin_rejects_non_positive_velocity() {
        let mut wheel = WheelState::new();
        for bad in [0.0, -3.0, f64::NAN, f64::INFINITY] {
            assert!(wheel.start_spin(bad).is_err());
        }
        assert!(!wheel.is_spinning);
        assert_eq!(wheel.angular_velocity, 0.0);
    }

    #[test]
    fn test_tick_is_noop_when_idle() {
        let mut wheel = WheelState::new();
        assert!(!wheel.tick(&PhysicsParams::default()));
        assert_eq!(wheel, WheelState::new());
    }

    #[test]
    fn test_first_tick_moves_then_decays() {
        let params = PhysicsParams::new(0.5, 0.1).unwrap();
        let mut wheel = WheelState::new();
        wheel.start_spin(10.0).unwrap();

        assert!(!wheel.tick(&params));
        assert_eq!(wheel.angle, 10.0);
        assert_eq!(wheel.angular_velocity, 5.0);
    }

    #[test]
    fn test_spin_converges_to_exact_zero() {
        let params = PhysicsParams::default();
        let mut wheel = WheelState::new();
        wheel.start_spin(25.0).unwrap();

        let mut ticks = 0;
        let mut stops = 0;
        while wheel.is_spinning {
            if wheel.tick(&params) {
                stops += 1;
            }
            ticks += 1;
            assert!(ticks < 10_000, "spin never came to rest");
        }

        assert_eq!(stops, 1);
        assert_eq!(wheel.angular_velocity, 0.0);
        assert!(wheel.angle > 0.0);
    }

    #[test]
    fn test_single_tick_stop_with_aggressive_decay() {
        let params = PhysicsParams::new(0.001, 5.0).unwrap();
        let mut wheel = WheelState::new();
        wheel.start_spin(1000.0).unwrap();

        assert!(wheel.tick(&params));
        assert!(!wheel.is_spinning);
        assert_eq!(wheel.angle, 1000.0);
        assert_eq!(wheel.angular_velocity, 0.0);
    }

    #[test]
    fn test_angle_accumulates_across_spins() {
        let params = PhysicsParams::new(0.5, 1.0).unwrap();
        let mut wheel = WheelState::new();

        for _ in 0..3 {
            wheel.start_spin(300.0).unwrap();
            while !wheel.tick(&params) {}
        }

        assert!(wheel.angle > 360.0 * 3.0);
    }

    #[test]
    fn test_rest_is_idempotent() {
        let params = PhysicsParams::default();
        let mut wheel = WheelState::new();
        wheel.start_spin(2.0).unwrap();
        while !wheel.tick(&params) {}

        let rested = wheel;
        for _ in 0..50 {
            assert!(!wheel.tick(&params));
        }
        assert_eq!(wheel, rested);
    }

    #[test]
    fn test_spin_range_validation() {
        assert!(SpinRange::new(15.0, 25.0).is_ok());
        assert!(SpinRange::new(20.0, 20.0).is_ok());
        assert!(SpinRange::new(0.0, 25.0).is_err());
        assert!(SpinRange::new(25.0, 15.0).is_err());
        assert!(SpinRange::new(1.0, f64::INFINITY).is_err());
    }

    #[test]
    fn test_spin_range_samples_within_bounds() {
        let range = SpinRange::default();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            let v = range.sample(&mut rng);
            assert!((15.0..=25.0).contains(&v));
        }
    }

    #[test]
    fn test_degenerate_spin_range_is_constant() {
        let range = SpinRange::new(20.0, 20.0).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(range.sample(&mut rng), 20.0);
    }
}
