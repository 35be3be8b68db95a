use rand::Rng;

use super::physics::{PhysicsParams, SpinRange, WheelState};
use super::{resolve, WheelError};

/// One selectable entry. The payload is whatever the candidate generator
/// attached; the wheel never looks inside it.
#[derive(Debug, Clone, PartialEq)]
pub struct Slot<P> {
    pub label: String,
    pub payload: P,
}

impl<P> Slot<P> {
    pub fn new(label: impl Into<String>, payload: P) -> Self {
        Self {
            label: label.into(),
            payload,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Spinning,
    Stopped { winner: usize, details_visible: bool },
}

/// Drives one wheel from idle through any number of spins.
///
/// Commands that make no sense in the current phase (spinning while already
/// spinning, toggling details mid-spin) are ignored rather than reported.
pub struct Session<P> {
    slots: Vec<Slot<P>>,
    wheel: WheelState,
    phase: Phase,
    physics: PhysicsParams,
    spin_range: SpinRange,
    spins_completed: u32,
}

impl<P> Session<P> {
    pub fn new(
        slots: Vec<Slot<P>>,
        physics: PhysicsParams,
        spin_range: SpinRange,
    ) -> Result<Self, WheelError> {
        if slots.is_empty() {
            return Err(WheelError::NoSlots);
        }
        Ok(Self {
            slots,
            wheel: WheelState::new(),
            phase: Phase::Idle,
            physics,
            spin_range,
            spins_completed: 0,
        })
    }

    pub fn slots(&self) -> &[Slot<P>] {
        &self.slots
    }

    pub fn wheel(&self) -> &WheelState {
        &self.wheel
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_spinning(&self) -> bool {
        self.wheel.is_spinning
    }

    pub fn spins_completed(&self) -> u32 {
        self.spins_completed
    }

    pub fn winner_index(&self) -> Option<usize> {
        match self.phase {
            Phase::Stopped { winner, .. } => Some(winner),
            _ => None,
        }
    }

    pub fn winner(&self) -> Option<&Slot<P>> {
        self.winner_index().map(|i| &self.slots[i])
    }

    pub fn details_visible(&self) -> bool {
        matches!(self.phase, Phase::Stopped { details_visible: true, .. })
    }

    /// Spin with a velocity drawn from the configured range.
    /// Returns false if the wheel was already spinning.
    pub fn request_spin<R: Rng + ?Sized>(&mut self, rng: &mut R) -> bool {
        if self.wheel.is_spinning {
            return false;
        }
        let velocity = self.spin_range.sample(rng);
        // SpinRange only ever yields positive finite velocities
        self.start_spin(velocity).unwrap_or(false)
    }

    /// Spin with an explicit initial velocity. `Ok(false)` means the wheel
    /// was already spinning and nothing changed.
    pub fn start_spin(&mut self, initial_velocity: f64) -> Result<bool, WheelError> {
        if self.wheel.is_spinning {
            return Ok(false);
        }
        self.wheel.start_spin(initial_velocity)?;
        self.phase = Phase::Spinning;
        tracing::debug!(velocity = initial_velocity, angle = self.wheel.angle, "spin started");
        Ok(true)
    }

    /// Flip the details panel. Only has an effect once a winner exists.
    pub fn toggle_details(&mut self) -> bool {
        match &mut self.phase {
            Phase::Stopped { details_visible, .. } => {
                *details_visible = !*details_visible;
                true
            }
            _ => false,
        }
    }

    /// Advance the wheel by one tick. Yields the winner on the tick the
    /// wheel comes to rest and `None` on every other call.
    pub fn tick(&mut self) -> Option<usize> {
        if !self.wheel.tick(&self.physics) {
            return None;
        }

        // Slots are non-empty and the accumulated angle stays finite
        let winner = match resolve(self.wheel.angle, self.slots.len()) {
            Ok(winner) => winner,
            Err(e) => {
                tracing::error!("could not resolve winner: {}", e);
                0
            }
        };
        self.phase = Phase::Stopped {
            winner,
            details_visible: false,
        };
        self.spins_completed += 1;
        tracing::info!(
            winner,
            label = %self.slots[winner].label,
            angle = self.wheel.angle,
            "wheel stopped"
        );
        Some(winner)
    }
}
