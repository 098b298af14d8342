//! Browser playback of the bundled click clip.

use crate::config::CLICK_SOUND_URL;
use log::warn;
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlAudioElement;

/// Start the click from the beginning without waiting for it to finish.
///
/// Each call gets its own audio element, so rapid changes overlap.
pub fn play_click() {
    let audio = match HtmlAudioElement::new_with_src(CLICK_SOUND_URL) {
        Ok(audio) => audio,
        Err(e) => {
            warn!("Failed to create audio element: {:?}", e);
            return;
        }
    };

    let promise: js_sys::Promise = match audio.play() {
        Ok(promise) => promise,
        Err(e) => {
            warn!("Failed to start click sound: {:?}", e);
            return;
        }
    };

    // Autoplay policies reject the promise until the user interacts with the page.
    wasm_bindgen_futures::spawn_local(async move {
        if let Err(e) = JsFuture::from(promise).await {
            warn!("Click sound playback rejected: {:?}", e);
        }
    });
}
