//! Drives the controller against an in-memory backend, running effects the
//! way the browser host does but one at a time.

use std::cell::RefCell;
use std::collections::VecDeque;

use wanderguide::api::{Endpoint, Method, TravelApi};
use wanderguide::models::{
    AudioClip, ChatReply, ChatRequest, CurrentLocation, Document, DocumentList, LocationUpdate,
    Role, SetLocationRequest, SpeakRequest, Transcription, Upload,
};
use wanderguide::{execute, ApiError, AppState, Effect, Event, ViewState};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "wanderguide=debug".into()),
        )
        .with_test_writer()
        .try_init();
}

/// Backend double keeping a document store and a log of every request.
#[derive(Default)]
struct FakeBackend {
    requests: RefCell<Vec<Endpoint>>,
    chat_requests: RefCell<Vec<ChatRequest>>,
    documents: RefCell<Vec<Document>>,
    location: RefCell<Option<String>>,
    chat_error: Option<ApiError>,
    offline: bool,
}

impl FakeBackend {
    fn record(&self, endpoint: Endpoint) -> Result<(), ApiError> {
        self.requests.borrow_mut().push(endpoint);
        if self.offline {
            Err(ApiError::Network("connection refused".into()))
        } else {
            Ok(())
        }
    }

    fn requests(&self) -> Vec<Endpoint> {
        self.requests.borrow().clone()
    }

    fn count(&self, endpoint: &Endpoint) -> usize {
        self.requests.borrow().iter().filter(|e| *e == endpoint).count()
    }
}

impl TravelApi for FakeBackend {
    async fn health(&self) -> Result<(), ApiError> {
        self.record(Endpoint::Health)
    }

    async fn current_location(&self) -> Result<CurrentLocation, ApiError> {
        self.record(Endpoint::CurrentLocation)?;
        Ok(CurrentLocation { current_location: self.location.borrow().clone() })
    }

    async fn set_location(&self, request: &SetLocationRequest) -> Result<LocationUpdate, ApiError> {
        self.record(Endpoint::SetLocation)?;
        *self.location.borrow_mut() = Some(request.location.clone());
        Ok(LocationUpdate { location: request.location.clone() })
    }

    async fn chat(&self, request: &ChatRequest) -> Result<ChatReply, ApiError> {
        self.record(Endpoint::Chat)?;
        self.chat_requests.borrow_mut().push(request.clone());
        if let Some(err) = &self.chat_error {
            return Err(err.clone());
        }
        Ok(ChatReply {
            reply: format!("You said: {}", request.message),
            location_detected: None,
        })
    }

    async fn transcribe(&self, clip: &AudioClip) -> Result<Transcription, ApiError> {
        self.record(Endpoint::Transcribe)?;
        Ok(Transcription {
            transcription: Some(format!("{} bytes of speech", clip.bytes.len())),
        })
    }

    async fn speak(&self, request: &SpeakRequest) -> Result<Vec<u8>, ApiError> {
        self.record(Endpoint::Speak)?;
        Ok(request.text.as_bytes().to_vec())
    }

    async fn list_documents(&self) -> Result<DocumentList, ApiError> {
        self.record(Endpoint::ListDocuments)?;
        Ok(DocumentList { documents: self.documents.borrow().clone() })
    }

    async fn upload_document(&self, upload: &Upload) -> Result<(), ApiError> {
        self.record(Endpoint::UploadDocument)?;
        self.documents.borrow_mut().push(Document {
            name: upload.name.clone(),
            size: upload.bytes.len() as u64,
        });
        Ok(())
    }

    async fn delete_document(&self, name: &str) -> Result<(), ApiError> {
        self.record(Endpoint::DeleteDocument(name.to_string()))?;
        self.documents.borrow_mut().retain(|d| d.name != name);
        Ok(())
    }

    async fn refresh_documents(&self) -> Result<(), ApiError> {
        self.record(Endpoint::RefreshDocuments)
    }
}

/// Scripted answers for the browser-side effects.
#[derive(Default)]
struct Host {
    confirm: bool,
    alerts: Vec<String>,
    prompts: Vec<String>,
    played: Vec<Vec<u8>>,
}

async fn drive(state: &mut AppState, api: &FakeBackend, host: &mut Host, event: Event) {
    let mut queue = VecDeque::from([event]);
    while let Some(event) = queue.pop_front() {
        for effect in state.apply(event) {
            match effect {
                Effect::Call(call) => queue.push_back(execute(api, call).await),
                Effect::Alert(message) => host.alerts.push(message),
                Effect::Confirm { prompt, on_confirm } => {
                    host.prompts.push(prompt);
                    if host.confirm {
                        queue.push_back(on_confirm);
                    }
                }
                Effect::CaptureAudio { .. } => {
                    queue.push_back(Event::AudioCaptured(AudioClip::new(vec![0; 42])));
                }
                Effect::PlayAudio(bytes) => {
                    host.played.push(bytes);
                    queue.push_back(Event::PlaybackEnded);
                }
            }
        }
    }
}

#[tokio::test]
async fn blank_message_issues_no_request() {
    init_tracing();
    let api = FakeBackend::default();
    let mut host = Host::default();
    let mut state = AppState::new();

    drive(&mut state, &api, &mut host, Event::SendMessage("   ".into())).await;

    assert!(state.chat_history.is_empty());
    assert!(api.requests().is_empty());
}

#[tokio::test]
async fn conversation_appends_user_then_assistant() {
    init_tracing();
    let api = FakeBackend::default();
    let mut host = Host::default();
    let mut state = AppState::new();

    drive(&mut state, &api, &mut host, Event::SendMessage("Hi".into())).await;
    drive(&mut state, &api, &mut host, Event::SendMessage("Where to eat?".into())).await;

    let roles: Vec<Role> = state.chat_history.iter().map(|m| m.role).collect();
    assert_eq!(roles, vec![Role::User, Role::Assistant, Role::User, Role::Assistant]);
    assert_eq!(state.chat_history[3].content, "You said: Where to eat?");
    assert!(!state.is_loading);

    let sent = api.chat_requests.borrow();
    assert_eq!(
        sent[1].history,
        vec![("Hi".to_string(), String::new()), ("You said: Hi".to_string(), String::new())]
    );
}

#[tokio::test]
async fn chat_failure_surfaces_in_thread() {
    init_tracing();
    let api = FakeBackend {
        chat_error: Some(ApiError::Application("Model overloaded".into())),
        ..Default::default()
    };
    let mut host = Host::default();
    let mut state = AppState::new();

    drive(&mut state, &api, &mut host, Event::SendMessage("Hello".into())).await;

    assert_eq!(state.chat_history.len(), 2);
    let reply = &state.chat_history[1];
    assert!(reply.is_error);
    assert_eq!(reply.content, "Error: Model overloaded");
    assert!(!state.is_loading);
}

#[tokio::test]
async fn non_pdf_upload_never_reaches_backend() {
    init_tracing();
    let api = FakeBackend::default();
    let mut host = Host::default();
    let mut state = AppState::new();

    let upload = Upload::new("notes.txt", b"hello".to_vec());
    drive(&mut state, &api, &mut host, Event::UploadRequested(upload)).await;

    assert_eq!(host.alerts, vec!["Please select a PDF file".to_string()]);
    assert!(api.requests().is_empty());
}

#[tokio::test]
async fn pdf_upload_refreshes_list_once() {
    init_tracing();
    let api = FakeBackend::default();
    let mut host = Host::default();
    let mut state = AppState::new();

    let upload = Upload::new("trip.pdf", vec![7; 2048]);
    drive(&mut state, &api, &mut host, Event::UploadRequested(upload)).await;

    assert_eq!(api.requests(), vec![Endpoint::UploadDocument, Endpoint::ListDocuments]);
    assert_eq!(state.documents, vec![Document { name: "trip.pdf".into(), size: 2048 }]);
    assert!(!state.is_loading);
}

#[tokio::test]
async fn declined_delete_sends_nothing() {
    init_tracing();
    let api = FakeBackend::default();
    api.documents.borrow_mut().push(Document { name: "visa.pdf".into(), size: 1 });
    let mut host = Host { confirm: false, ..Default::default() };
    let mut state = AppState::new();

    drive(&mut state, &api, &mut host, Event::DeleteRequested("visa.pdf".into())).await;

    assert_eq!(host.prompts, vec!["Delete visa.pdf?".to_string()]);
    assert!(api.requests().is_empty());
}

#[tokio::test]
async fn confirmed_delete_then_refresh() {
    init_tracing();
    let api = FakeBackend::default();
    api.documents.borrow_mut().push(Document { name: "visa.pdf".into(), size: 1 });
    let mut host = Host { confirm: true, ..Default::default() };
    let mut state = AppState::new();

    drive(&mut state, &api, &mut host, Event::DeleteRequested("visa.pdf".into())).await;

    assert_eq!(
        api.requests(),
        vec![Endpoint::DeleteDocument("visa.pdf".into()), Endpoint::ListDocuments]
    );
    assert_eq!(api.requests()[0].method(), Method::Delete);
    assert!(state.documents.is_empty());
}

#[tokio::test]
async fn documents_fetch_clears_loading_even_offline() {
    init_tracing();
    let api = FakeBackend { offline: true, ..Default::default() };
    let mut host = Host::default();
    let mut state = AppState::new();

    drive(&mut state, &api, &mut host, Event::FetchDocuments).await;

    assert!(!state.is_loading);
    assert_eq!(api.requests(), vec![Endpoint::ListDocuments]);
}

#[tokio::test]
async fn only_documents_view_fetches_documents() {
    init_tracing();
    let api = FakeBackend::default();
    let mut host = Host::default();
    let mut state = AppState::new();

    drive(&mut state, &api, &mut host, Event::NavigateTo(ViewState::Chat)).await;
    drive(&mut state, &api, &mut host, Event::NavigateTo(ViewState::Home)).await;
    assert_eq!(api.count(&Endpoint::ListDocuments), 0);
    assert_eq!(api.count(&Endpoint::Health), 2);
    assert_eq!(api.count(&Endpoint::CurrentLocation), 2);

    drive(&mut state, &api, &mut host, Event::NavigateTo(ViewState::Documents)).await;
    assert_eq!(api.count(&Endpoint::ListDocuments), 1);
    assert!(!state.is_loading);
}

#[tokio::test]
async fn location_round_trip() {
    init_tracing();
    let api = FakeBackend::default();
    let mut host = Host::default();
    let mut state = AppState::new();

    drive(&mut state, &api, &mut host, Event::SetLocation("Tokyo".into())).await;
    assert_eq!(state.current_location.as_deref(), Some("Tokyo"));

    // A later location fetch agrees with the backend.
    drive(&mut state, &api, &mut host, Event::NavigateTo(ViewState::Chat)).await;
    assert_eq!(state.current_location.as_deref(), Some("Tokyo"));
}

#[tokio::test]
async fn voice_round_trip_fills_composer() {
    init_tracing();
    let api = FakeBackend::default();
    let mut host = Host::default();
    let mut state = AppState::new();

    drive(&mut state, &api, &mut host, Event::VoiceInputRequested).await;

    assert_eq!(state.current_message, "42 bytes of speech");
    assert!(!state.is_recording);
    assert_eq!(api.requests(), vec![Endpoint::Transcribe]);
}

#[tokio::test]
async fn speech_is_played_and_released() {
    init_tracing();
    let api = FakeBackend::default();
    let mut host = Host::default();
    let mut state = AppState::new();

    drive(&mut state, &api, &mut host, Event::SpeakRequested("Ciao".into())).await;

    assert_eq!(host.played, vec![b"Ciao".to_vec()]);
    assert!(!state.is_speaking);
}
