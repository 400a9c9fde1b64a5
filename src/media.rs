use crate::constants::MEDIA_HAVE_METADATA;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

// Media calls are best effort: autoplay rejections and seeks during unready
// states are swallowed, they only cost visual fidelity.

/// Start playback, ignoring a rejected play promise (autoplay policy).
pub fn play_quietly(media: &web::HtmlMediaElement) {
    match media.play() {
        Ok(promise) => spawn_local(async move {
            if let Err(e) = JsFuture::from(promise).await {
                log::debug!("[media] play rejected: {:?}", e);
            }
        }),
        Err(e) => log::debug!("[media] play threw: {:?}", e),
    }
}

pub fn pause_quietly(media: &web::HtmlMediaElement) {
    _ = media.pause();
}

/// Assign `currentTime` through `Reflect` so a throwing setter is caught.
pub fn seek_quietly(media: &web::HtmlMediaElement, time_sec: f64) {
    if let Err(e) = js_sys::Reflect::set(
        media,
        &JsValue::from_str("currentTime"),
        &JsValue::from_f64(time_sec),
    ) {
        log::debug!("[media] seek to {:.2}s failed: {:?}", time_sec, e);
    }
}

#[inline]
pub fn has_metadata(media: &web::HtmlMediaElement) -> bool {
    media.ready_state() >= MEDIA_HAVE_METADATA
}
