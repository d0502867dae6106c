//! Countdown timer
//!
//! The timer is driven from outside: the UI calls [`Timer::tick`] once a
//! second while playing. Expiry pauses the timer and puts the configured
//! duration back on the clock.

use super::error::{DomainError, DomainResult};

/// Longest round the duration form accepts, in seconds
pub const MAX_DURATION_SECS: u32 = 3600;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GamePhase {
    #[default]
    Paused,
    Playing,
}

/// Result of a single one-second tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Timer was paused; nothing happened
    Idle,
    /// Still counting, with this many seconds left
    Running(u32),
    /// Reached zero; timer is paused again and restored
    Expired,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timer {
    phase: GamePhase,
    duration: u32,
    remaining: u32,
}

impl Timer {
    pub fn new(duration: u32) -> Self {
        let duration = duration.clamp(1, MAX_DURATION_SECS);
        Self {
            phase: GamePhase::Paused,
            duration,
            remaining: duration,
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn is_playing(&self) -> bool {
        self.phase == GamePhase::Playing
    }

    /// Configured round length
    pub fn duration(&self) -> u32 {
        self.duration
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Paused -> Playing. Returns false if already playing.
    pub fn start(&mut self) -> bool {
        if self.is_playing() {
            return false;
        }
        self.phase = GamePhase::Playing;
        true
    }

    /// Playing -> Paused. Returns false if already paused.
    pub fn pause(&mut self) -> bool {
        if !self.is_playing() {
            return false;
        }
        self.phase = GamePhase::Paused;
        true
    }

    /// Play/pause control. Returns the new phase.
    pub fn toggle(&mut self) -> GamePhase {
        if self.is_playing() {
            self.pause();
        } else {
            self.start();
        }
        self.phase
    }

    pub fn tick(&mut self) -> TickOutcome {
        if !self.is_playing() {
            return TickOutcome::Idle;
        }
        if self.remaining <= 1 {
            self.restore();
            return TickOutcome::Expired;
        }
        self.remaining -= 1;
        TickOutcome::Running(self.remaining)
    }

    /// Pause and put the configured duration back on the clock
    pub fn restore(&mut self) {
        self.phase = GamePhase::Paused;
        self.remaining = self.duration;
    }

    /// Change the round length. Only allowed while paused.
    pub fn set_duration(&mut self, secs: u32) -> DomainResult<()> {
        if self.is_playing() {
            return Err(DomainError::InvalidInput(
                "duration can only change while paused".to_string(),
            ));
        }
        if secs == 0 || secs > MAX_DURATION_SECS {
            return Err(DomainError::InvalidInput(format!(
                "duration must be between 1 and {} seconds, got {}",
                MAX_DURATION_SECS, secs
            )));
        }
        self.duration = secs;
        self.remaining = secs;
        Ok(())
    }

    /// Parse duration form input as whole seconds
    pub fn parse_duration(input: &str) -> DomainResult<u32> {
        input
            .trim()
            .parse::<u32>()
            .map_err(|e| DomainError::InvalidInput(format!("{:?} is not a number of seconds: {}", input, e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_down_and_expires() {
        for duration in [1u32, 2, 5, 120] {
            let mut timer = Timer::new(duration);
            assert!(timer.start());

            for expected in (1..duration).rev() {
                assert_eq!(timer.tick(), TickOutcome::Running(expected));
            }
            assert_eq!(timer.tick(), TickOutcome::Expired);

            assert_eq!(timer.phase(), GamePhase::Paused);
            assert_eq!(timer.remaining(), duration);
            assert_eq!(timer.tick(), TickOutcome::Idle);
        }
    }

    #[test]
    fn test_pause_halts_countdown() {
        let mut timer = Timer::new(10);
        timer.start();
        timer.tick();
        assert!(timer.pause());

        assert_eq!(timer.tick(), TickOutcome::Idle);
        assert_eq!(timer.remaining(), 9);

        timer.start();
        assert_eq!(timer.tick(), TickOutcome::Running(8));
    }

    #[test]
    fn test_toggle() {
        let mut timer = Timer::new(30);
        assert_eq!(timer.toggle(), GamePhase::Playing);
        assert!(!timer.start());
        assert_eq!(timer.toggle(), GamePhase::Paused);
        assert!(!timer.pause());
    }

    #[test]
    fn test_set_duration_only_while_paused() {
        let mut timer = Timer::new(120);
        timer.start();
        assert!(timer.set_duration(60).is_err());
        assert_eq!(timer.duration(), 120);

        timer.pause();
        timer.set_duration(60).unwrap();
        assert_eq!(timer.duration(), 60);
        assert_eq!(timer.remaining(), 60);
    }

    #[test]
    fn test_set_duration_bounds() {
        let mut timer = Timer::new(120);
        assert!(timer.set_duration(0).is_err());
        assert!(timer.set_duration(MAX_DURATION_SECS + 1).is_err());
        assert_eq!(timer.duration(), 120);
    }

    #[test]
    fn test_parse_duration() {
        assert_eq!(Timer::parse_duration(" 90 ").unwrap(), 90);
        assert!(Timer::parse_duration("ninety").is_err());
        assert!(Timer::parse_duration("").is_err());
        assert!(Timer::parse_duration("-5").is_err());
    }
}
