//! Browser services the controller's effects need: microphone capture,
//! audio playback, blocking dialogs and file reading.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use gloo_timers::future::sleep;
use js_sys::{Array, Promise, Uint8Array};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::{JsFuture, spawn_local};
use web_sys::{
    Blob, BlobEvent, BlobPropertyBag, File, HtmlAudioElement, MediaRecorder, MediaStream,
    MediaStreamConstraints, MediaStreamTrack, Url,
};

use wanderguide::models::AudioClip;

fn js_err(e: JsValue) -> String {
    e.as_string().unwrap_or_else(|| format!("{e:?}"))
}

fn window() -> Result<web_sys::Window, String> {
    web_sys::window().ok_or_else(|| "no window".to_string())
}

pub fn alert(message: &str) {
    if let Ok(w) = window() {
        let _ = w.alert_with_message(message);
    }
}

pub fn confirm(prompt: &str) -> bool {
    window()
        .ok()
        .and_then(|w| w.confirm_with_message(prompt).ok())
        .unwrap_or(false)
}

pub fn bytes_to_blob(bytes: &[u8], mime: Option<&str>) -> Result<Blob, JsValue> {
    let parts = Array::of1(&Uint8Array::from(bytes));
    let options = BlobPropertyBag::new();
    if let Some(mime) = mime {
        options.set_type(mime);
    }
    Blob::new_with_u8_array_sequence_and_options(&parts, &options)
}

pub async fn blob_to_bytes(blob: &Blob) -> Result<Vec<u8>, String> {
    let buffer = JsFuture::from(blob.array_buffer()).await.map_err(js_err)?;
    Ok(Uint8Array::new(&buffer).to_vec())
}

pub async fn read_file(file: &File) -> Result<Vec<u8>, String> {
    blob_to_bytes(file).await
}

/// Records from the default microphone for `limit`.
///
/// The stream's tracks are stopped once the recorder halts, whether or not
/// the capture succeeded.
pub async fn record_audio(limit: Duration) -> Result<AudioClip, String> {
    let devices = window()?.navigator().media_devices().map_err(js_err)?;
    let constraints = MediaStreamConstraints::new();
    constraints.set_audio(&JsValue::TRUE);

    let stream: MediaStream = JsFuture::from(
        devices
            .get_user_media_with_constraints(&constraints)
            .map_err(js_err)?,
    )
    .await
    .map_err(js_err)?
    .dyn_into()
    .map_err(js_err)?;

    let captured = capture(&stream, limit).await;
    release(&stream);
    let blob = captured?;

    let bytes = blob_to_bytes(&blob).await?;
    log::debug!("Captured {} bytes of audio", bytes.len());
    Ok(AudioClip::new(bytes))
}

async fn capture(stream: &MediaStream, limit: Duration) -> Result<Blob, String> {
    let recorder = MediaRecorder::new_with_media_stream(stream).map_err(js_err)?;

    let chunks = Rc::new(RefCell::new(Vec::<Blob>::new()));
    let on_data = {
        let chunks = Rc::clone(&chunks);
        Closure::<dyn Fn(BlobEvent)>::new(move |ev: BlobEvent| {
            if let Some(data) = ev.data() {
                chunks.borrow_mut().push(data);
            }
        })
    };
    recorder.set_ondataavailable(Some(on_data.as_ref().unchecked_ref()));

    // Resolves on the recorder's `stop` event, after the final chunk.
    let stopped = Promise::new(&mut |resolve, _reject| {
        recorder.set_onstop(Some(&resolve));
    });

    recorder.start().map_err(js_err)?;
    sleep(limit).await;
    recorder.stop().map_err(js_err)?;
    JsFuture::from(stopped).await.map_err(js_err)?;

    recorder.set_ondataavailable(None);
    drop(on_data);

    let parts = Array::new();
    for chunk in chunks.borrow().iter() {
        parts.push(chunk);
    }
    let options = BlobPropertyBag::new();
    options.set_type(AudioClip::MIME_TYPE);
    Blob::new_with_blob_sequence_and_options(&parts, &options).map_err(js_err)
}

fn release(stream: &MediaStream) {
    for track in stream.get_tracks().iter() {
        if let Ok(track) = track.dyn_into::<MediaStreamTrack>() {
            track.stop();
        }
    }
}

/// Plays `bytes` through a detached audio element and calls `on_done` once,
/// when playback ends or fails. The object URL is revoked either way.
pub fn play_audio(bytes: &[u8], on_done: impl FnOnce(Result<(), String>) + 'static) {
    let on_done = Rc::new(RefCell::new(Some(on_done)));
    let finish = move |url: &str, result: Result<(), String>| {
        let _ = Url::revoke_object_url(url);
        if let Some(callback) = on_done.borrow_mut().take() {
            callback(result);
        }
    };

    let url = match bytes_to_blob(bytes, None).and_then(|blob| Url::create_object_url_with_blob(&blob)) {
        Ok(url) => url,
        Err(e) => return finish("", Err(js_err(e))),
    };

    let audio = match HtmlAudioElement::new_with_src(&url) {
        Ok(audio) => audio,
        Err(e) => return finish(&url, Err(js_err(e))),
    };

    let finish = Rc::new(finish);
    let on_ended = {
        let finish = Rc::clone(&finish);
        let url = url.clone();
        Closure::once_into_js(move || finish(&url, Ok(())))
    };
    audio.set_onended(Some(on_ended.unchecked_ref()));

    match audio.play() {
        Ok(promise) => spawn_local(async move {
            if let Err(e) = JsFuture::from(promise).await {
                audio.set_onended(None);
                finish(&url, Err(js_err(e)));
            }
        }),
        Err(e) => {
            audio.set_onended(None);
            finish(&url, Err(js_err(e)));
        }
    }
}
