//! When to play the click.
//!
//! The click fires once each time the displayed duration or the sound
//! preference changes, and only while sound is allowed. Overlapping clips
//! are fine; nothing is cancelled.

/// Remembers the last `(duration, allow_sound)` pair and calls `play` on change.
pub struct ClickTrigger<F: FnMut()> {
    last: Option<(f64, bool)>,
    play: F,
}

impl<F: FnMut()> ClickTrigger<F> {
    pub fn new(play: F) -> Self {
        Self { last: None, play }
    }

    /// Record the current values. Returns `true` if the click was played.
    ///
    /// The first observation always counts as a change.
    pub fn observe(&mut self, duration: f64, allow_sound: bool) -> bool {
        let current = (duration, allow_sound);
        if self.last == Some(current) {
            return false;
        }
        self.last = Some(current);

        if allow_sound {
            (self.play)();
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{CalculatorState, Transition};
    use std::cell::Cell;

    #[test]
    fn fires_once_per_duration_change() {
        let clicks = Cell::new(0);
        let mut trigger = ClickTrigger::new(|| clicks.set(clicks.get() + 1));

        assert!(trigger.observe(0.0, true));
        assert!(trigger.observe(46.0, true));
        assert!(!trigger.observe(46.0, true));
        assert!(trigger.observe(47.0, true));
        assert_eq!(clicks.get(), 3);
    }

    #[test]
    fn never_fires_when_disabled() {
        let clicks = Cell::new(0);
        let mut trigger = ClickTrigger::new(|| clicks.set(clicks.get() + 1));

        for duration in [0.0, 46.0, 47.0, 46.0, 0.0] {
            assert!(!trigger.observe(duration, false));
        }
        assert_eq!(clicks.get(), 0);
    }

    #[test]
    fn enabling_sound_plays_current_duration() {
        let clicks = Cell::new(0);
        let mut trigger = ClickTrigger::new(|| clicks.set(clicks.get() + 1));

        trigger.observe(46.0, false);
        assert!(trigger.observe(46.0, true));
        assert!(!trigger.observe(46.0, false));
        assert_eq!(clicks.get(), 1);
    }

    #[test]
    fn follows_a_transition_sequence() {
        let clicks = Cell::new(0);
        let mut trigger = ClickTrigger::new(|| clicks.set(clicks.get() + 1));

        let mut state = CalculatorState::new(8);
        trigger.observe(state.duration, true);

        let transitions = [
            Transition::InitDuration,            // 0 -> 46
            Transition::InitDuration,            // unchanged
            Transition::ChangeSets(3),           // unchanged
            Transition::IncreaseDuration,        // 47
            Transition::DecreaseDuration,        // 46
            Transition::ChangeSpeed(60),         // 34
            Transition::ChangeDurationBreak(10), // 44
        ];
        for transition in transitions {
            state = state.apply(transition);
            trigger.observe(state.duration, true);
        }

        // mount, then five distinct changes
        assert_eq!(clicks.get(), 6);
    }
}
