//! Workout duration calculator.
//!
//! Derives a session length in minutes from the exercise count of the chosen
//! workout, the number of sets, the time spent per exercise and the break
//! between sets. The [`components::Calculator`] widget owns a
//! [`state::CalculatorState`] and lets the user nudge the result.

use log::info;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::rc::Rc;
use wasm_bindgen::prelude::*;

pub mod audio;
pub mod components;
pub mod config;
pub mod hooks;
pub mod sound;
pub mod state;
pub mod validation;

/// A selectable workout, supplied by the embedding application.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutPlan {
    pub name: String,
    pub num_exercises: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalculatorError {
    /// A transition name outside the recognised set was dispatched.
    UnknownTransition(String),
}

impl fmt::Display for CalculatorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalculatorError::UnknownTransition(name) => {
                write!(f, "Unknown transition type: '{}'", name)
            }
        }
    }
}

impl std::error::Error for CalculatorError {}

/// Session length in minutes.
///
/// `number * sets` exercises of `speed` seconds each, plus one break of
/// `duration_break` minutes between consecutive sets. Inputs are taken as-is.
///
/// # Examples
/// ```
/// assert_eq!(workout_calculator::calc_duration(8, 3, 90, 5), 46.0);
/// ```
pub fn calc_duration(number: u32, sets: u32, speed: u32, duration_break: u32) -> f64 {
    let active = f64::from(number) * f64::from(sets) * f64::from(speed) / 60.0;
    let breaks = (f64::from(sets) - 1.0) * f64::from(duration_break);
    active + breaks
}

/// Split a duration in minutes into whole minutes and remaining seconds.
pub fn split_duration(duration: f64) -> (u64, u32) {
    let minutes = duration.floor();
    let seconds = ((duration - minutes) * 60.0).round() as u32;
    if seconds >= 60 {
        (minutes as u64 + 1, 0)
    } else {
        (minutes as u64, seconds)
    }
}

/// Format a duration in minutes as `MM:SS`.
pub fn format_duration(duration: f64) -> String {
    let (minutes, seconds) = split_duration(duration);
    format!("{:02}:{:02}", minutes, seconds)
}

/// Parse a JSON array of `{ "name": ..., "numExercises": ... }` records.
pub fn load_workouts_from_json(json: &str) -> Result<Vec<WorkoutPlan>, serde_json::Error> {
    let workouts: Vec<WorkoutPlan> = serde_json::from_str(json)?;
    info!("Loaded {} workouts", workouts.len());
    Ok(workouts)
}

/// Mount the calculator into the element with id `element_id`.
///
/// Called from the host page with the workout list and the sound preference:
/// ```js
/// mount_calculator("calculator", [{ name: "Full-body", numExercises: 9 }], true);
/// ```
#[wasm_bindgen]
pub fn mount_calculator(
    element_id: &str,
    workouts: JsValue,
    allow_sound: bool,
) -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let workouts: Vec<WorkoutPlan> = serde_wasm_bindgen::from_value(workouts)
        .map_err(|e| JsValue::from_str(&format!("Failed to deserialize workouts: {}", e)))?;
    if workouts.is_empty() {
        return Err(JsValue::from_str("Workout list cannot be empty"));
    }

    let root = gloo_utils::document()
        .get_element_by_id(element_id)
        .ok_or_else(|| JsValue::from_str(&format!("No element with id '{}'", element_id)))?;

    info!(
        "Mounting calculator into #{} with {} workouts (sound {})",
        element_id,
        workouts.len(),
        if allow_sound { "on" } else { "off" }
    );

    let props = components::CalculatorProps {
        workouts: Rc::new(workouts),
        allow_sound,
    };
    yew::Renderer::<components::Calculator>::with_root_and_props(root, props).render();
    Ok(())
}
