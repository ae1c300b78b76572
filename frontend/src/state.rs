use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::File;

use wanderguide::models::Upload;
use wanderguide::{execute, ApiConfig, AppState, Effect, Event, ViewState};

use crate::api::HttpApi;
use crate::media;

/// Shared application state, provided via Leptos context.
///
/// Views read from `state` and report user intents through the methods
/// below; every change goes through [`AppState::apply`], and the effects it
/// returns are run here.
#[derive(Clone, Copy)]
pub struct Controller {
    pub state: RwSignal<AppState>,
    api: StoredValue<HttpApi>,
}

impl Controller {
    /// Create a new `Controller` and provide it in the current Leptos context.
    pub fn provide() -> Self {
        let controller = Self {
            state: RwSignal::new(AppState::new()),
            api: StoredValue::new(HttpApi::new(ApiConfig::from_build_env())),
        };
        provide_context(controller);
        controller
    }

    pub fn dispatch(&self, event: Event) {
        let effects = self.state.try_update(|s| s.apply(event)).unwrap_or_default();
        for effect in effects {
            self.run(effect);
        }
    }

    fn run(&self, effect: Effect) {
        let this = *self;
        match effect {
            Effect::Call(call) => {
                let api = self.api.get_value();
                spawn_local(async move {
                    let completion = execute(&api, call).await;
                    this.dispatch(completion);
                });
            }
            Effect::Alert(message) => media::alert(&message),
            Effect::Confirm { prompt, on_confirm } => {
                if media::confirm(&prompt) {
                    self.dispatch(on_confirm);
                }
            }
            Effect::CaptureAudio { limit } => spawn_local(async move {
                match media::record_audio(limit).await {
                    Ok(clip) => this.dispatch(Event::AudioCaptured(clip)),
                    Err(e) => this.dispatch(Event::CaptureFailed(e)),
                }
            }),
            Effect::PlayAudio(bytes) => media::play_audio(&bytes, move |result| match result {
                Ok(()) => this.dispatch(Event::PlaybackEnded),
                Err(e) => this.dispatch(Event::PlaybackFailed(e)),
            }),
        }
    }

    // ── Intents ──────────────────────────────────────────────────────────────

    pub fn start(&self) {
        self.dispatch(Event::Started);
    }

    pub fn navigate(&self, view: ViewState) {
        self.dispatch(Event::NavigateTo(view));
    }

    pub fn set_current_message(&self, text: String) {
        self.dispatch(Event::InputChanged(text));
    }

    pub fn send_message(&self, text: String) {
        self.dispatch(Event::SendMessage(text));
    }

    pub fn set_location(&self, text: String) {
        self.dispatch(Event::SetLocation(text));
    }

    pub fn handle_voice_input(&self) {
        self.dispatch(Event::VoiceInputRequested);
    }

    pub fn speak_text(&self, text: String) {
        self.dispatch(Event::SpeakRequested(text));
    }

    /// Reads the picked or dropped file, then hands it to the controller.
    pub fn upload_document(&self, file: File) {
        let this = *self;
        spawn_local(async move {
            match media::read_file(&file).await {
                Ok(bytes) => this.dispatch(Event::UploadRequested(Upload::new(file.name(), bytes))),
                Err(e) => log::error!("Failed to read {}: {e}", file.name()),
            }
        });
    }

    pub fn delete_document(&self, name: String) {
        self.dispatch(Event::DeleteRequested(name));
    }

    pub fn refresh_knowledge_base(&self) {
        self.dispatch(Event::RefreshKnowledgeBase);
    }

    // ── Reads ────────────────────────────────────────────────────────────────

    pub fn with<R>(&self, f: impl FnOnce(&AppState) -> R) -> R {
        self.state.with(f)
    }

    pub fn is_loading(&self) -> bool {
        self.state.with(|s| s.is_loading)
    }
}
