use crate::audio::play_click;
use crate::sound::ClickTrigger;
use yew::prelude::*;

/// Play the click whenever `duration` or `allow_sound` changes.
///
/// Runs after the render that shows the new duration has been committed.
#[hook]
pub fn use_click_sound(duration: f64, allow_sound: bool) {
    let trigger = use_mut_ref(|| ClickTrigger::new(play_click));

    use_effect_with((duration, allow_sound), move |&(duration, allow_sound)| {
        trigger.borrow_mut().observe(duration, allow_sound);
        || ()
    });
}
