//! Contract with the travel backend.
//!
//! [`TravelApi`] is the seam between the controller and the transport: the
//! browser build implements it over `fetch`, tests implement it in memory.
//! Both share [`Endpoint`] for routing and [`decode`] for turning a response
//! body into a typed value.

use serde::de::DeserializeOwned;

use crate::errors::ApiError;
use crate::models::{
    AudioClip, ChatReply, ChatRequest, CurrentLocation, DocumentList, LocationUpdate,
    SetLocationRequest, SpeakRequest, Transcription, Upload,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Delete,
}

/// Every route the client talks to, relative to the configured base URL.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Endpoint {
    Health,
    CurrentLocation,
    SetLocation,
    Chat,
    Transcribe,
    Speak,
    ListDocuments,
    UploadDocument,
    DeleteDocument(String),
    RefreshDocuments,
}

impl Endpoint {
    pub fn method(&self) -> Method {
        match self {
            Endpoint::Health | Endpoint::CurrentLocation | Endpoint::ListDocuments => Method::Get,
            Endpoint::DeleteDocument(_) => Method::Delete,
            _ => Method::Post,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Endpoint::Health => "/health".into(),
            Endpoint::CurrentLocation => "/location/current".into(),
            Endpoint::SetLocation => "/location/set".into(),
            Endpoint::Chat => "/chat".into(),
            Endpoint::Transcribe => "/voice/transcribe".into(),
            Endpoint::Speak => "/voice/speak".into(),
            Endpoint::ListDocuments => "/documents/list".into(),
            Endpoint::UploadDocument => "/documents/upload".into(),
            Endpoint::DeleteDocument(name) => {
                format!("/documents/delete/{}", urlencoding::encode(name))
            }
            Endpoint::RefreshDocuments => "/documents/refresh".into(),
        }
    }
}

/// Async operations offered by the backend, one per endpoint.
///
/// Upload, delete and refresh only report transport failures: their response
/// is ignored and any HTTP answer counts as done.
#[allow(async_fn_in_trait)]
pub trait TravelApi {
    async fn health(&self) -> Result<(), ApiError>;

    async fn current_location(&self) -> Result<CurrentLocation, ApiError>;

    async fn set_location(&self, request: &SetLocationRequest) -> Result<LocationUpdate, ApiError>;

    async fn chat(&self, request: &ChatRequest) -> Result<ChatReply, ApiError>;

    async fn transcribe(&self, clip: &AudioClip) -> Result<Transcription, ApiError>;

    /// Returns the synthesized audio bytes.
    async fn speak(&self, request: &SpeakRequest) -> Result<Vec<u8>, ApiError>;

    async fn list_documents(&self) -> Result<DocumentList, ApiError>;

    async fn upload_document(&self, upload: &Upload) -> Result<(), ApiError>;

    async fn delete_document(&self, name: &str) -> Result<(), ApiError>;

    async fn refresh_documents(&self) -> Result<(), ApiError>;
}

/// Decodes a JSON response body.
///
/// Order matters: a body that is not JSON is a transport failure, an
/// `{"error": ...}` body wins over the status code, a non-2xx status without
/// one is reported as such, and only then is the body checked against `T`.
pub fn decode<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, ApiError> {
    let value: serde_json::Value =
        serde_json::from_str(body).map_err(|e| ApiError::MalformedBody(e.to_string()))?;

    if let Some(message) = value
        .get("error")
        .and_then(|e| e.as_str())
        .filter(|m| !m.is_empty())
    {
        return Err(ApiError::Application(message.to_string()));
    }

    if !(200..300).contains(&status) {
        return Err(ApiError::Status(status));
    }

    serde_json::from_value(value).map_err(|e| ApiError::Schema(e.to_string()))
}
