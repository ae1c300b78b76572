use std::time::Duration;

use tracing::debug;

use crate::api::{Endpoint, TravelApi};
use crate::controller::Event;
use crate::models::{AudioClip, ChatRequest, SetLocationRequest, SpeakRequest, Upload};

/// Work requested by a transition, run by the host.
#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    /// One request against the backend; see [`execute`].
    Call(ApiCall),
    /// Blocking alert.
    Alert(String),
    /// Ask the user; dispatch `on_confirm` only if they accept.
    Confirm { prompt: String, on_confirm: Event },
    /// Record from the microphone for `limit`, then report
    /// [`Event::AudioCaptured`] or [`Event::CaptureFailed`].
    CaptureAudio { limit: Duration },
    /// Play audio, then report [`Event::PlaybackEnded`] or
    /// [`Event::PlaybackFailed`].
    PlayAudio(Vec<u8>),
}

#[derive(Clone, Debug, PartialEq)]
pub enum ApiCall {
    CheckHealth,
    FetchCurrentLocation,
    ListDocuments,
    SendChat(ChatRequest),
    SetLocation(SetLocationRequest),
    Transcribe(AudioClip),
    Speak(SpeakRequest),
    UploadDocument(Upload),
    DeleteDocument(String),
    RefreshKnowledgeBase,
}

impl ApiCall {
    pub fn endpoint(&self) -> Endpoint {
        match self {
            ApiCall::CheckHealth => Endpoint::Health,
            ApiCall::FetchCurrentLocation => Endpoint::CurrentLocation,
            ApiCall::ListDocuments => Endpoint::ListDocuments,
            ApiCall::SendChat(_) => Endpoint::Chat,
            ApiCall::SetLocation(_) => Endpoint::SetLocation,
            ApiCall::Transcribe(_) => Endpoint::Transcribe,
            ApiCall::Speak(_) => Endpoint::Speak,
            ApiCall::UploadDocument(_) => Endpoint::UploadDocument,
            ApiCall::DeleteDocument(name) => Endpoint::DeleteDocument(name.clone()),
            ApiCall::RefreshKnowledgeBase => Endpoint::RefreshDocuments,
        }
    }
}

/// Runs one call and wraps its outcome in the matching completion event.
pub async fn execute<A: TravelApi + ?Sized>(api: &A, call: ApiCall) -> Event {
    debug!(path = %call.endpoint().path(), "api call");
    match call {
        ApiCall::CheckHealth => Event::HealthChecked(api.health().await),
        ApiCall::FetchCurrentLocation => Event::CurrentLocationLoaded(api.current_location().await),
        ApiCall::ListDocuments => Event::DocumentsLoaded(api.list_documents().await),
        ApiCall::SendChat(request) => Event::ChatReplied(api.chat(&request).await),
        ApiCall::SetLocation(request) => Event::LocationSet(api.set_location(&request).await),
        ApiCall::Transcribe(clip) => Event::Transcribed(api.transcribe(&clip).await),
        ApiCall::Speak(request) => Event::SpeechSynthesized(api.speak(&request).await),
        ApiCall::UploadDocument(upload) => Event::DocumentUploaded(api.upload_document(&upload).await),
        ApiCall::DeleteDocument(name) => Event::DocumentDeleted(api.delete_document(&name).await),
        ApiCall::RefreshKnowledgeBase => Event::KnowledgeBaseRefreshed(api.refresh_documents().await),
    }
}
