//! Calculator state and the transitions that drive it.
//!
//! Every parameter change recomputes `duration` from scratch. The two nudges
//! edit `duration` directly and leave the parameters alone, so the derived
//! value only comes back on the next parameter change.

use crate::config::{DEFAULT_DURATION_BREAK, DEFAULT_SETS, DEFAULT_SPEED};
use crate::{calc_duration, CalculatorError};
use log::debug;
use std::fmt;
use std::rc::Rc;
use yew::Reducible;

/// All the ways the calculator state can change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Recompute `duration` from the current parameters.
    InitDuration,
    ChangeNumber(u32),
    ChangeSets(u32),
    ChangeSpeed(u32),
    ChangeDurationBreak(u32),
    /// Round up to the next whole minute.
    IncreaseDuration,
    /// Take off one minute, bottoming out at zero.
    DecreaseDuration,
}

impl Transition {
    /// Resolve a transition by its dispatch name.
    ///
    /// `payload` is only read by the `change*` transitions.
    pub fn from_name(name: &str, payload: u32) -> Result<Self, CalculatorError> {
        match name {
            "initDuration" => Ok(Transition::InitDuration),
            "changeNumber" => Ok(Transition::ChangeNumber(payload)),
            "changeSets" => Ok(Transition::ChangeSets(payload)),
            "changeSpeed" => Ok(Transition::ChangeSpeed(payload)),
            "changeDurationBreak" => Ok(Transition::ChangeDurationBreak(payload)),
            "increaseDuration" => Ok(Transition::IncreaseDuration),
            "decreaseDuration" => Ok(Transition::DecreaseDuration),
            other => Err(CalculatorError::UnknownTransition(other.to_string())),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Transition::InitDuration => "initDuration",
            Transition::ChangeNumber(_) => "changeNumber",
            Transition::ChangeSets(_) => "changeSets",
            Transition::ChangeSpeed(_) => "changeSpeed",
            Transition::ChangeDurationBreak(_) => "changeDurationBreak",
            Transition::IncreaseDuration => "increaseDuration",
            Transition::DecreaseDuration => "decreaseDuration",
        }
    }
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Transition::ChangeNumber(v)
            | Transition::ChangeSets(v)
            | Transition::ChangeSpeed(v)
            | Transition::ChangeDurationBreak(v) => write!(f, "{}({})", self.name(), v),
            _ => f.write_str(self.name()),
        }
    }
}

/// Parameters of the session plus the duration shown to the user.
#[derive(Debug, Clone, PartialEq)]
pub struct CalculatorState {
    /// Exercises in the selected workout.
    pub number: u32,
    pub sets: u32,
    /// Seconds per exercise.
    pub speed: u32,
    /// Minutes per break.
    pub duration_break: u32,
    /// Minutes. Derived, except right after a nudge.
    pub duration: f64,
}

impl CalculatorState {
    /// Fresh state with the default sliders and a placeholder `duration` of
    /// zero; apply [`Transition::InitDuration`] to get the real value.
    pub fn new(number: u32) -> Self {
        Self {
            number,
            sets: DEFAULT_SETS,
            speed: DEFAULT_SPEED,
            duration_break: DEFAULT_DURATION_BREAK,
            duration: 0.0,
        }
    }

    /// Duration implied by the current parameters.
    pub fn derived_duration(&self) -> f64 {
        calc_duration(self.number, self.sets, self.speed, self.duration_break)
    }

    pub fn apply(&self, transition: Transition) -> Self {
        let mut next = self.clone();
        match transition {
            Transition::InitDuration => {}
            Transition::ChangeNumber(number) => next.number = number,
            Transition::ChangeSets(sets) => next.sets = sets,
            Transition::ChangeSpeed(speed) => next.speed = speed,
            Transition::ChangeDurationBreak(duration_break) => {
                next.duration_break = duration_break
            }
            Transition::IncreaseDuration => {
                next.duration = self.duration.floor() + 1.0;
                debug!("{}: {} -> {}", transition, self.duration, next.duration);
                return next;
            }
            Transition::DecreaseDuration => {
                next.duration = if self.duration > 1.0 {
                    self.duration - 1.0
                } else {
                    0.0
                };
                debug!("{}: {} -> {}", transition, self.duration, next.duration);
                return next;
            }
        }
        next.duration = next.derived_duration();
        debug!("{}: {} -> {}", transition, self.duration, next.duration);
        next
    }

    /// Apply a transition given by name.
    ///
    /// # Panics
    /// On an unrecognised name; that is a caller defect, not a runtime
    /// condition.
    pub fn dispatch_named(&self, name: &str, payload: u32) -> Self {
        match Transition::from_name(name, payload) {
            Ok(transition) => self.apply(transition),
            Err(e) => panic!("{}", e),
        }
    }
}

impl Reducible for CalculatorState {
    type Action = Transition;

    fn reduce(self: Rc<Self>, action: Transition) -> Rc<Self> {
        let next = self.apply(action);
        // Same Rc means no re-render.
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}
