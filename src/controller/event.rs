use crate::controller::ViewState;
use crate::errors::ApiError;
use crate::models::{
    AudioClip, ChatReply, CurrentLocation, DocumentList, LocationUpdate, Transcription, Upload,
};

/// Everything that can happen to the application: user intents, host
/// callbacks and API completions.
#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    // ── Lifecycle / navigation ───────────────────────────────────────────────
    /// The app was mounted.
    Started,
    NavigateTo(ViewState),

    // ── User intents ─────────────────────────────────────────────────────────
    CheckServerHealth,
    FetchCurrentLocation,
    FetchDocuments,
    InputChanged(String),
    SendMessage(String),
    SetLocation(String),
    VoiceInputRequested,
    SpeakRequested(String),
    UploadRequested(Upload),
    /// Asks for confirmation before deleting.
    DeleteRequested(String),
    DeleteConfirmed(String),
    RefreshKnowledgeBase,

    // ── Host callbacks ───────────────────────────────────────────────────────
    AudioCaptured(AudioClip),
    CaptureFailed(String),
    PlaybackEnded,
    PlaybackFailed(String),

    // ── API completions ──────────────────────────────────────────────────────
    HealthChecked(Result<(), ApiError>),
    CurrentLocationLoaded(Result<CurrentLocation, ApiError>),
    DocumentsLoaded(Result<DocumentList, ApiError>),
    ChatReplied(Result<ChatReply, ApiError>),
    LocationSet(Result<LocationUpdate, ApiError>),
    Transcribed(Result<Transcription, ApiError>),
    SpeechSynthesized(Result<Vec<u8>, ApiError>),
    DocumentUploaded(Result<(), ApiError>),
    DocumentDeleted(Result<(), ApiError>),
    KnowledgeBaseRefreshed(Result<(), ApiError>),
}
