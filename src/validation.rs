//! Coercion of raw control values into typed transition payloads.
//!
//! Range and select elements hand back text. Everything is parsed and
//! range-checked here before a [`crate::state::Transition`] is built; the
//! calculator itself trusts its inputs.

use crate::config::{
    MAX_DURATION_BREAK, MAX_SETS, MAX_SPEED, MIN_DURATION_BREAK, MIN_SETS, MIN_SPEED, SPEED_STEP,
};
use crate::WorkoutPlan;

/// Generic numeric input validation
pub fn validate_numeric_input<T>(
    input: &str,
    min: Option<T>,
    max: Option<T>,
    field_name: &str,
) -> Result<T, String>
where
    T: std::str::FromStr + std::fmt::Display + PartialOrd,
{
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(format!("{} cannot be empty", field_name));
    }

    match trimmed.parse::<T>() {
        Ok(val) => {
            if let Some(min_val) = min {
                if val < min_val {
                    return Err(format!("{} must be at least {}", field_name, min_val));
                }
            }
            if let Some(max_val) = max {
                if val > max_val {
                    return Err(format!("{} cannot exceed {}", field_name, max_val));
                }
            }
            Ok(val)
        }
        Err(_) => Err(format!("{} must be a valid number", field_name)),
    }
}

/// Validate the exercise count picked from the workout selector.
///
/// With a non-empty list the value has to belong to one of its workouts.
pub fn parse_number(input: &str, workouts: &[WorkoutPlan]) -> Result<u32, String> {
    let number = validate_numeric_input(input, Some(1), None, "Number of exercises")?;
    if !workouts.is_empty() && !workouts.iter().any(|w| w.num_exercises == number) {
        return Err(format!("No workout has {} exercises", number));
    }
    Ok(number)
}

pub fn parse_sets(input: &str) -> Result<u32, String> {
    validate_numeric_input(input, Some(MIN_SETS), Some(MAX_SETS), "Sets")
}

/// Validate seconds per exercise; only whole steps from the minimum are allowed.
pub fn parse_speed(input: &str) -> Result<u32, String> {
    let speed = validate_numeric_input(input, Some(MIN_SPEED), Some(MAX_SPEED), "Speed")?;
    if (speed - MIN_SPEED) % SPEED_STEP != 0 {
        return Err(format!("Speed must be a multiple of {} seconds", SPEED_STEP));
    }
    Ok(speed)
}

pub fn parse_duration_break(input: &str) -> Result<u32, String> {
    validate_numeric_input(
        input,
        Some(MIN_DURATION_BREAK),
        Some(MAX_DURATION_BREAK),
        "Break length",
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn workouts() -> Vec<WorkoutPlan> {
        vec![
            WorkoutPlan {
                name: "Full-body workout".to_string(),
                num_exercises: 9,
            },
            WorkoutPlan {
                name: "Arms only".to_string(),
                num_exercises: 3,
            },
        ]
    }

    #[test]
    fn sets_accepts_range_values() {
        assert_eq!(parse_sets("1"), Ok(1));
        assert_eq!(parse_sets(" 5 "), Ok(5));
    }

    #[test]
    fn sets_rejects_out_of_range() {
        assert_eq!(parse_sets("0"), Err("Sets must be at least 1".to_string()));
        assert_eq!(parse_sets("6"), Err("Sets cannot exceed 5".to_string()));
        assert_eq!(parse_sets(""), Err("Sets cannot be empty".to_string()));
        assert_eq!(parse_sets("three"), Err("Sets must be a valid number".to_string()));
    }

    #[test]
    fn speed_follows_slider_steps() {
        for value in [30, 60, 90, 120, 150, 180] {
            assert_eq!(parse_speed(&value.to_string()), Ok(value));
        }
        assert!(parse_speed("45").is_err());
        assert!(parse_speed("0").is_err());
        assert!(parse_speed("210").is_err());
    }

    #[test]
    fn break_length_range() {
        assert_eq!(parse_duration_break("1"), Ok(1));
        assert_eq!(parse_duration_break("10"), Ok(10));
        assert!(parse_duration_break("11").is_err());
        assert!(parse_duration_break("-1").is_err());
        assert!(parse_duration_break("2.5").is_err());
    }

    #[test]
    fn number_must_match_a_workout() {
        let workouts = workouts();
        assert_eq!(parse_number("9", &workouts), Ok(9));
        assert_eq!(parse_number("3", &workouts), Ok(3));
        assert_eq!(
            parse_number("4", &workouts),
            Err("No workout has 4 exercises".to_string())
        );
        assert!(parse_number("0", &workouts).is_err());
    }

    #[test]
    fn number_without_workouts_only_needs_to_be_positive() {
        assert_eq!(parse_number("12", &[]), Ok(12));
        assert!(parse_number("0", &[]).is_err());
    }
}
