//! Animation state

use std::time::Duration;

/// Progress of the animation
///
/// The angle is derived from the tick count, so it never accumulates
/// floating-point drift. Ticks only advance while the shell is running.
#[derive(Clone, Debug, PartialEq)]
pub struct AnimationState {
    ticks: u64,
    rotation_step: f64,
    running: bool,
    frame_interval: Duration,
}

impl AnimationState {
    pub fn new(rotation_step: f64, frame_interval: Duration) -> Self {
        Self {
            ticks: 0,
            rotation_step,
            running: false,
            frame_interval,
        }
    }

    /// Current rotation angle in radians
    pub fn rotation_angle(&self) -> f64 {
        self.ticks as f64 * self.rotation_step
    }

    /// Number of ticks consumed so far
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn rotation_step(&self) -> f64 {
        self.rotation_step
    }

    pub fn frame_interval(&self) -> Duration {
        self.frame_interval
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn set_running(&mut self, running: bool) {
        self.running = running;
    }

    /// Consume one tick and return the new angle
    ///
    /// Returns `None` without touching the state when not running.
    pub fn advance(&mut self) -> Option<f64> {
        if !self.running {
            return None;
        }
        self.ticks += 1;
        Some(self.rotation_angle())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn running(step: f64) -> AnimationState {
        let mut state = AnimationState::new(step, Duration::from_millis(25));
        state.set_running(true);
        state
    }

    #[test]
    fn test_starts_idle_at_zero() {
        let state = AnimationState::new(0.01, Duration::from_millis(25));
        assert_eq!(state.ticks(), 0);
        assert_eq!(state.rotation_angle(), 0.0);
        assert!(!state.is_running());
    }

    #[test]
    fn test_advance_requires_running() {
        let mut state = AnimationState::new(0.01, Duration::from_millis(25));
        assert_eq!(state.advance(), None);
        assert_eq!(state.ticks(), 0);
    }

    #[test]
    fn test_angle_is_ticks_times_step() {
        let mut state = running(0.01);
        for n in 1..=1000u64 {
            let angle = state.advance().unwrap();
            assert_eq!(angle, n as f64 * 0.01);
        }
        assert!((state.rotation_angle() - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_hundred_ticks() {
        let mut state = running(0.01);
        for _ in 0..100 {
            state.advance();
        }
        assert!((state.rotation_angle() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_stopping_freezes_angle() {
        let mut state = running(0.5);
        state.advance();
        state.set_running(false);
        assert_eq!(state.advance(), None);
        assert_eq!(state.rotation_angle(), 0.5);
    }
}
