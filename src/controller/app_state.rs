use tracing::{debug, error, warn};

use crate::config::VOICE_CAPTURE_LIMIT;
use crate::controller::{ApiCall, Effect, Event};
use crate::errors::{ApiError, ValidationError};
use crate::models::{
    ChatMessage, ChatReply, ChatRequest, Document, SetLocationRequest, SpeakRequest, Upload,
};

/// Top-level screens. Exactly one is active.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ViewState {
    #[default]
    Home,
    Chat,
    Documents,
}

impl ViewState {
    pub const ALL: [ViewState; 3] = [ViewState::Home, ViewState::Chat, ViewState::Documents];

    pub fn as_str(&self) -> &'static str {
        match self {
            ViewState::Home => "home",
            ViewState::Chat => "chat",
            ViewState::Documents => "documents",
        }
    }

    /// Sidebar caption.
    pub fn label(&self) -> &'static str {
        match self {
            ViewState::Home => "Dashboard",
            ViewState::Chat => "AI Chat",
            ViewState::Documents => "Documents",
        }
    }
}

/// Everything the views render from.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AppState {
    pub active_view: ViewState,
    pub chat_history: Vec<ChatMessage>,
    /// Text in the chat composer.
    pub current_message: String,
    pub current_location: Option<String>,
    pub documents: Vec<Document>,
    pub is_loading: bool,
    pub is_recording: bool,
    pub is_speaking: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies one event and returns the effects it asks for.
    pub fn apply(&mut self, event: Event) -> Vec<Effect> {
        match event {
            Event::Started => self.enter_view(),
            Event::NavigateTo(view) => self.navigate(view),

            Event::CheckServerHealth => vec![Effect::Call(ApiCall::CheckHealth)],
            Event::FetchCurrentLocation => vec![Effect::Call(ApiCall::FetchCurrentLocation)],
            Event::FetchDocuments => vec![self.begin_document_fetch()],
            Event::InputChanged(text) => {
                self.current_message = text;
                Vec::new()
            }
            Event::SendMessage(text) => self.send_message(text),
            Event::SetLocation(text) => self.set_location(text),
            Event::VoiceInputRequested => self.start_voice_input(),
            Event::SpeakRequested(text) => self.speak(text),
            Event::UploadRequested(upload) => self.upload(upload),
            Event::DeleteRequested(name) => self.request_delete(name),
            Event::DeleteConfirmed(name) => self.delete(name),
            Event::RefreshKnowledgeBase => self.refresh_knowledge_base(),

            Event::AudioCaptured(clip) => {
                self.is_recording = false;
                vec![Effect::Call(ApiCall::Transcribe(clip))]
            }
            Event::CaptureFailed(reason) => {
                error!("Microphone error: {reason}");
                self.is_recording = false;
                Vec::new()
            }
            Event::PlaybackEnded => {
                self.is_speaking = false;
                Vec::new()
            }
            Event::PlaybackFailed(reason) => {
                warn!("Audio playback failed: {reason}");
                self.is_speaking = false;
                Vec::new()
            }

            Event::HealthChecked(result) => {
                if let Err(e) = result {
                    error!("Server health check failed: {e}");
                }
                Vec::new()
            }
            Event::CurrentLocationLoaded(result) => {
                match result {
                    Ok(loaded) => {
                        if let Some(location) = non_blank(loaded.current_location) {
                            self.current_location = Some(location);
                        }
                    }
                    Err(e) => error!("Failed to fetch location: {e}"),
                }
                Vec::new()
            }
            Event::DocumentsLoaded(result) => {
                match result {
                    Ok(list) => self.documents = list.documents,
                    Err(e) => error!("Failed to fetch documents: {e}"),
                }
                self.is_loading = false;
                Vec::new()
            }
            Event::ChatReplied(result) => {
                self.receive_reply(result);
                Vec::new()
            }
            Event::LocationSet(result) => {
                match result {
                    Ok(update) => self.current_location = Some(update.location),
                    Err(e) => warn!("Location error: {e}"),
                }
                Vec::new()
            }
            Event::Transcribed(result) => {
                match result {
                    Ok(t) => {
                        if let Some(text) = non_blank(t.transcription) {
                            self.current_message = text;
                        }
                    }
                    Err(e) => error!("Transcription error: {e}"),
                }
                Vec::new()
            }
            Event::SpeechSynthesized(result) => match result {
                Ok(audio) => vec![Effect::PlayAudio(audio)],
                Err(e) => {
                    warn!("TTS error: {e}");
                    self.is_speaking = false;
                    Vec::new()
                }
            },
            Event::DocumentUploaded(result) => self.after_document_change("Upload", result),
            Event::DocumentDeleted(result) => self.after_document_change("Delete", result),
            Event::KnowledgeBaseRefreshed(result) => self.after_document_change("Refresh", result),
        }
    }

    // ── Navigation ───────────────────────────────────────────────────────────

    fn navigate(&mut self, view: ViewState) -> Vec<Effect> {
        if view == self.active_view {
            return Vec::new();
        }
        self.active_view = view;
        self.enter_view()
    }

    /// Effects owed on entering the active view.
    fn enter_view(&mut self) -> Vec<Effect> {
        let mut effects = vec![
            Effect::Call(ApiCall::CheckHealth),
            Effect::Call(ApiCall::FetchCurrentLocation),
        ];
        if self.active_view == ViewState::Documents {
            effects.push(self.begin_document_fetch());
        }
        effects
    }

    // ── Chat ─────────────────────────────────────────────────────────────────

    fn send_message(&mut self, text: String) -> Vec<Effect> {
        if let Err(e) = require_text(&text, "message") {
            debug!("Ignoring send: {e}");
            return Vec::new();
        }
        if self.is_loading {
            debug!("Ignoring send while a request is in flight");
            return Vec::new();
        }

        let request = ChatRequest::new(text.clone(), &self.chat_history);
        self.chat_history.push(ChatMessage::user(text));
        self.current_message.clear();
        self.is_loading = true;
        vec![Effect::Call(ApiCall::SendChat(request))]
    }

    fn receive_reply(&mut self, result: Result<ChatReply, ApiError>) {
        match result {
            Ok(reply) => {
                self.chat_history.push(ChatMessage::assistant(reply.reply));
                if let Some(location) = non_blank(reply.location_detected) {
                    self.current_location = Some(location);
                }
            }
            Err(e) => {
                error!("Chat error: {e}");
                self.chat_history.push(ChatMessage::error(format!("Error: {e}")));
            }
        }
        self.is_loading = false;
    }

    // ── Location ─────────────────────────────────────────────────────────────

    fn set_location(&mut self, text: String) -> Vec<Effect> {
        if let Err(e) = require_text(&text, "location") {
            debug!("Ignoring location: {e}");
            return Vec::new();
        }
        vec![Effect::Call(ApiCall::SetLocation(SetLocationRequest { location: text }))]
    }

    // ── Voice ────────────────────────────────────────────────────────────────

    fn start_voice_input(&mut self) -> Vec<Effect> {
        if self.is_recording || self.is_loading {
            return Vec::new();
        }
        self.is_recording = true;
        vec![Effect::CaptureAudio { limit: VOICE_CAPTURE_LIMIT }]
    }

    fn speak(&mut self, text: String) -> Vec<Effect> {
        if self.is_speaking {
            return Vec::new();
        }
        self.is_speaking = true;
        vec![Effect::Call(ApiCall::Speak(SpeakRequest { text }))]
    }

    // ── Documents ────────────────────────────────────────────────────────────

    fn begin_document_fetch(&mut self) -> Effect {
        self.is_loading = true;
        Effect::Call(ApiCall::ListDocuments)
    }

    fn upload(&mut self, upload: Upload) -> Vec<Effect> {
        if let Err(e) = upload.validate() {
            debug!("Rejected upload of {}: {e}", upload.name);
            return vec![Effect::Alert(e.to_string())];
        }
        // A pending list fetch does not block an upload.
        self.is_loading = true;
        vec![Effect::Call(ApiCall::UploadDocument(upload))]
    }

    fn request_delete(&mut self, name: String) -> Vec<Effect> {
        if self.is_loading {
            return Vec::new();
        }
        vec![Effect::Confirm {
            prompt: format!("Delete {name}?"),
            on_confirm: Event::DeleteConfirmed(name),
        }]
    }

    fn delete(&mut self, name: String) -> Vec<Effect> {
        if self.is_loading {
            return Vec::new();
        }
        self.is_loading = true;
        vec![Effect::Call(ApiCall::DeleteDocument(name))]
    }

    fn refresh_knowledge_base(&mut self) -> Vec<Effect> {
        if self.is_loading {
            return Vec::new();
        }
        self.is_loading = true;
        vec![Effect::Call(ApiCall::RefreshKnowledgeBase)]
    }

    /// Upload, delete and refresh all end in a full list re-fetch.
    fn after_document_change(&mut self, action: &str, result: Result<(), ApiError>) -> Vec<Effect> {
        match result {
            Ok(()) => vec![self.begin_document_fetch()],
            Err(e) => {
                error!("{action} error: {e}");
                self.is_loading = false;
                Vec::new()
            }
        }
    }
}

fn require_text(text: &str, field_name: &'static str) -> Result<(), ValidationError> {
    if text.trim().is_empty() {
        Err(ValidationError::EmptyField { field_name })
    } else {
        Ok(())
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
