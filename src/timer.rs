//! Countdown timer for the evaluation session view.
//!
//! A self-contained component with no shared state: the owning view drives
//! it by calling `tick()` once per second and owns the start/stop lifecycle.
//! At zero the timer switches to its expired terminal state, fires
//! `on_expire` once, and stops decrementing. No countdown value feeds into
//! report compilation.

/// Default session length: 12 minutes.
pub const SESSION_SECONDS: u32 = 12 * 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerState {
    Running,
    Expired,
}

/// Cooperative countdown timer.
pub struct SessionTimer {
    remaining: u32,
    state: TimerState,
    on_tick: Option<Box<dyn FnMut(u32)>>,
    on_expire: Option<Box<dyn FnMut()>>,
}

impl SessionTimer {
    pub fn new(seconds: u32) -> Self {
        SessionTimer {
            remaining: seconds,
            state: if seconds == 0 { TimerState::Expired } else { TimerState::Running },
            on_tick: None,
            on_expire: None,
        }
    }

    /// A timer for one interview session (12:00).
    pub fn for_session() -> Self {
        SessionTimer::new(SESSION_SECONDS)
    }

    /// Called after every decrement with the seconds remaining.
    pub fn on_tick<F: FnMut(u32) + 'static>(mut self, callback: F) -> Self {
        self.on_tick = Some(Box::new(callback));
        self
    }

    /// Called exactly once when the timer reaches zero.
    pub fn on_expire<F: FnMut() + 'static>(mut self, callback: F) -> Self {
        self.on_expire = Some(Box::new(callback));
        self
    }

    pub fn remaining_seconds(&self) -> u32 {
        self.remaining
    }

    pub fn state(&self) -> TimerState {
        self.state
    }

    /// Advance the countdown by one second.
    ///
    /// Expired is terminal: further ticks neither decrement nor fire
    /// callbacks again.
    pub fn tick(&mut self) -> TimerState {
        if self.state == TimerState::Expired {
            return TimerState::Expired;
        }

        self.remaining = self.remaining.saturating_sub(1);
        if let Some(callback) = self.on_tick.as_mut() {
            callback(self.remaining);
        }

        if self.remaining == 0 {
            self.state = TimerState::Expired;
            if let Some(callback) = self.on_expire.as_mut() {
                callback();
            }
        }
        self.state
    }

    /// Visual state: `MM:SS` while running, `Time!` once expired.
    pub fn display(&self) -> String {
        match self.state {
            TimerState::Running => format!("{:02}:{:02}", self.remaining / 60, self.remaining % 60),
            TimerState::Expired => "Time!".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_starts_at_session_length() {
        let timer = SessionTimer::for_session();
        assert_eq!(timer.remaining_seconds(), 720);
        assert_eq!(timer.display(), "12:00");
        assert_eq!(timer.state(), TimerState::Running);
    }

    #[test]
    fn test_tick_decrements_and_formats() {
        let mut timer = SessionTimer::new(65);
        timer.tick();
        assert_eq!(timer.remaining_seconds(), 64);
        assert_eq!(timer.display(), "01:04");
    }

    #[test]
    fn test_expires_at_zero_and_stops() {
        let mut timer = SessionTimer::new(2);
        assert_eq!(timer.tick(), TimerState::Running);
        assert_eq!(timer.tick(), TimerState::Expired);
        assert_eq!(timer.display(), "Time!");

        // Terminal: further ticks change nothing
        assert_eq!(timer.tick(), TimerState::Expired);
        assert_eq!(timer.remaining_seconds(), 0);
    }

    #[test]
    fn test_on_tick_sees_each_remaining_value() {
        let seen = Rc::new(Cell::new(0u32));
        let seen_inner = Rc::clone(&seen);
        let mut timer = SessionTimer::new(3).on_tick(move |remaining| seen_inner.set(remaining));

        timer.tick();
        assert_eq!(seen.get(), 2);
        timer.tick();
        assert_eq!(seen.get(), 1);
    }

    #[test]
    fn test_on_expire_fires_exactly_once() {
        let fired = Rc::new(Cell::new(0u32));
        let fired_inner = Rc::clone(&fired);
        let mut timer = SessionTimer::new(1).on_expire(move || fired_inner.set(fired_inner.get() + 1));

        timer.tick();
        timer.tick();
        timer.tick();
        assert_eq!(fired.get(), 1);
    }

    #[test]
    fn test_zero_length_timer_is_born_expired() {
        let mut timer = SessionTimer::new(0);
        assert_eq!(timer.state(), TimerState::Expired);
        assert_eq!(timer.tick(), TimerState::Expired);
    }
}
