//! Yew view components for the workout calculator.
//!
//! [`Calculator`] owns the reducer; the other components only render props.

use crate::config::{
    MAX_DURATION_BREAK, MAX_SETS, MAX_SPEED, MIN_DURATION_BREAK, MIN_SETS, MIN_SPEED, SPEED_STEP,
};
use crate::format_duration;
use crate::hooks::use_click_sound;
use crate::state::{CalculatorState, Transition};
use crate::validation::{parse_duration_break, parse_number, parse_sets, parse_speed};
use crate::WorkoutPlan;
use log::warn;
use std::rc::Rc;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

/// Build an `oninput` callback that parses a range value and dispatches it.
fn range_callback(
    state: &UseReducerHandle<CalculatorState>,
    parse: fn(&str) -> Result<u32, String>,
    transition: fn(u32) -> Transition,
) -> Callback<InputEvent> {
    let state = state.clone();
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        match parse(&input.value()) {
            Ok(value) => state.dispatch(transition(value)),
            Err(err) => warn!("Ignoring slider input: {}", err),
        }
    })
}

/// Slider bound to one calculator parameter.
#[derive(Properties, PartialEq)]
pub struct RangeFieldProps {
    pub label: AttrValue,
    pub min: u32,
    pub max: u32,
    #[prop_or(1)]
    pub step: u32,
    pub value: u32,
    /// Shown after the current value, e.g. "sec/exercise".
    #[prop_or_default]
    pub unit: AttrValue,
    pub oninput: Callback<InputEvent>,
}

#[function_component(RangeField)]
pub fn range_field(props: &RangeFieldProps) -> Html {
    html! {
        <div class="form-group">
            <label>{ props.label.clone() }</label>
            <div class="slider-with-value">
                <input type="range"
                    min={props.min.to_string()}
                    max={props.max.to_string()}
                    step={props.step.to_string()}
                    value={props.value.to_string()}
                    oninput={props.oninput.clone()}
                />
                <span class="slider-value">{
                    if props.unit.is_empty() {
                        props.value.to_string()
                    } else {
                        format!("{} {}", props.value, props.unit)
                    }
                }</span>
            </div>
        </div>
    }
}

/// Selector listing every workout by name and exercise count.
#[derive(Properties, PartialEq)]
pub struct WorkoutSelectProps {
    pub workouts: Rc<Vec<WorkoutPlan>>,
    pub selected: u32,
    pub onchange: Callback<Event>,
}

#[function_component(WorkoutSelect)]
pub fn workout_select(props: &WorkoutSelectProps) -> Html {
    html! {
        <div class="form-group">
            <label>{ "Type of workout" }</label>
            <select onchange={props.onchange.clone()}>
                { props.workouts.iter().map(|workout| {
                    html! {
                        <option
                            key={workout.name.clone()}
                            value={workout.num_exercises.to_string()}
                            selected={workout.num_exercises == props.selected}
                        >
                            { format!("{} ({} exercises)", workout.name, workout.num_exercises) }
                        </option>
                    }
                }).collect::<Html>() }
            </select>
        </div>
    }
}

/// Duration readout flanked by the two nudge buttons.
#[derive(Properties, PartialEq)]
pub struct DurationDisplayProps {
    pub duration: f64,
    pub on_decrease: Callback<MouseEvent>,
    pub on_increase: Callback<MouseEvent>,
}

#[function_component(DurationDisplay)]
pub fn duration_display(props: &DurationDisplayProps) -> Html {
    html! {
        <section class="duration">
            <button onclick={props.on_decrease.clone()}>{ "–" }</button>
            <p>{ format_duration(props.duration) }</p>
            <button onclick={props.on_increase.clone()}>{ "+" }</button>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct CalculatorProps {
    /// The first workout seeds the exercise count.
    pub workouts: Rc<Vec<WorkoutPlan>>,
    pub allow_sound: bool,
}

/// The workout duration calculator.
#[function_component(Calculator)]
pub fn calculator(props: &CalculatorProps) -> Html {
    let initial_number = props.workouts.first().map(|w| w.num_exercises).unwrap_or(0);
    let state = use_reducer(|| CalculatorState::new(initial_number));

    // The reducer starts with a placeholder duration; correct it once on mount.
    {
        let state = state.clone();
        use_effect_with((), move |_| {
            state.dispatch(Transition::InitDuration);
        });
    }

    use_click_sound(state.duration, props.allow_sound);

    if props.workouts.is_empty() {
        return html! {
            <p class="no-workouts-message">{ "No workouts available" }</p>
        };
    }

    let on_number_change = {
        let state = state.clone();
        let workouts = props.workouts.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            match parse_number(&select.value(), &workouts) {
                Ok(number) => state.dispatch(Transition::ChangeNumber(number)),
                Err(err) => warn!("Ignoring workout selection: {}", err),
            }
        })
    };
    let on_decrease = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.dispatch(Transition::DecreaseDuration))
    };
    let on_increase = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.dispatch(Transition::IncreaseDuration))
    };

    html! {
        <>
            <form class="calculator-form">
                <WorkoutSelect
                    workouts={props.workouts.clone()}
                    selected={state.number}
                    onchange={on_number_change}
                />
                <RangeField
                    label="How many sets?"
                    min={MIN_SETS}
                    max={MAX_SETS}
                    value={state.sets}
                    oninput={range_callback(&state, parse_sets, Transition::ChangeSets)}
                />
                <RangeField
                    label="How fast are you?"
                    min={MIN_SPEED}
                    max={MAX_SPEED}
                    step={SPEED_STEP}
                    value={state.speed}
                    unit="sec/exercise"
                    oninput={range_callback(&state, parse_speed, Transition::ChangeSpeed)}
                />
                <RangeField
                    label="Break length"
                    min={MIN_DURATION_BREAK}
                    max={MAX_DURATION_BREAK}
                    value={state.duration_break}
                    unit="minutes/break"
                    oninput={range_callback(&state, parse_duration_break, Transition::ChangeDurationBreak)}
                />
            </form>
            <DurationDisplay
                duration={state.duration}
                {on_decrease}
                {on_increase}
            />
        </>
    }
}
