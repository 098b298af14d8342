//! Demo page for the workout calculator.
//! Loads the bundled workout list and adds a sound toggle around the widget.

use log::{info, warn};
use once_cell::sync::Lazy;
use web_sys::HtmlInputElement;
use workout_calculator::{
    components::Calculator, config::ROOT_ELEMENT_ID, load_workouts_from_json, WorkoutPlan,
};
use yew::prelude::*;

static BUNDLED_WORKOUTS: Lazy<Vec<WorkoutPlan>> = Lazy::new(|| {
    load_workouts_from_json(include_str!("workouts.json")).unwrap_or_else(|e| {
        warn!("Bundled workout list is invalid: {}", e);
        Vec::new()
    })
});

#[function_component]
pub fn App() -> Html {
    let allow_sound = use_state(|| true);
    let workouts = use_memo((), |_| BUNDLED_WORKOUTS.clone());

    let on_sound_toggle = {
        let allow_sound = allow_sound.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            allow_sound.set(input.checked());
        })
    };

    html! {
        <div class="calculator">
            <label class="sound-toggle">
                <input
                    type="checkbox"
                    checked={*allow_sound}
                    onchange={on_sound_toggle}
                />
                { "Allow sound" }
            </label>
            if workouts.is_empty() {
                <div class="no-workouts-message">
                    <p>{ "No workouts could be loaded." }</p>
                </div>
            } else {
                <Calculator workouts={workouts.clone()} allow_sound={*allow_sound} />
            }
        </div>
    }
}

/// Entry point: renders into `#app` when present, otherwise into `<body>`.
fn main() {
    console_error_panic_hook::set_once();

    match gloo_utils::document().get_element_by_id(ROOT_ELEMENT_ID) {
        Some(root) => yew::Renderer::<App>::with_root(root).render(),
        None => {
            info!("No #{} element, rendering into body", ROOT_ELEMENT_ID);
            yew::Renderer::<App>::new().render()
        }
    };
}
