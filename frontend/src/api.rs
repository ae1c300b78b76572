use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use web_sys::FormData;

use wanderguide::api::{decode, Endpoint, TravelApi};
use wanderguide::models::{
    AudioClip, ChatReply, ChatRequest, CurrentLocation, DocumentList, LocationUpdate,
    SetLocationRequest, SpeakRequest, Transcription, Upload,
};
use wanderguide::{ApiConfig, ApiError};

use crate::media::bytes_to_blob;

/// `fetch`-backed client for the travel backend.
#[derive(Clone, Debug)]
pub struct HttpApi {
    config: ApiConfig,
}

impl HttpApi {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    fn url(&self, endpoint: &Endpoint) -> String {
        self.config.url(&endpoint.path())
    }
}

impl TravelApi for HttpApi {
    async fn health(&self) -> Result<(), ApiError> {
        send(Request::get(&self.url(&Endpoint::Health))).await.map(|_| ())
    }

    async fn current_location(&self) -> Result<CurrentLocation, ApiError> {
        let resp = send(Request::get(&self.url(&Endpoint::CurrentLocation))).await?;
        read_json(resp).await
    }

    async fn set_location(&self, request: &SetLocationRequest) -> Result<LocationUpdate, ApiError> {
        let req = Request::post(&self.url(&Endpoint::SetLocation))
            .json(request)
            .map_err(|e| ApiError::Request(e.to_string()))?;
        read_json(send_built(req).await?).await
    }

    async fn chat(&self, request: &ChatRequest) -> Result<ChatReply, ApiError> {
        let req = Request::post(&self.url(&Endpoint::Chat))
            .json(request)
            .map_err(|e| ApiError::Request(e.to_string()))?;
        read_json(send_built(req).await?).await
    }

    async fn transcribe(&self, clip: &AudioClip) -> Result<Transcription, ApiError> {
        let form = multipart("audio", &clip.bytes, AudioClip::FILE_NAME, Some(AudioClip::MIME_TYPE))?;
        let req = Request::post(&self.url(&Endpoint::Transcribe))
            .body(form)
            .map_err(|e| ApiError::Request(e.to_string()))?;
        read_json(send_built(req).await?).await
    }

    async fn speak(&self, request: &SpeakRequest) -> Result<Vec<u8>, ApiError> {
        let req = Request::post(&self.url(&Endpoint::Speak))
            .json(request)
            .map_err(|e| ApiError::Request(e.to_string()))?;
        let resp = send_built(req).await?;

        if !resp.ok() {
            return Err(ApiError::Status(resp.status()));
        }

        resp.binary()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))
    }

    async fn list_documents(&self) -> Result<DocumentList, ApiError> {
        let resp = send(Request::get(&self.url(&Endpoint::ListDocuments))).await?;
        read_json(resp).await
    }

    async fn upload_document(&self, upload: &Upload) -> Result<(), ApiError> {
        let form = multipart("file", &upload.bytes, &upload.name, Some("application/pdf"))?;
        let req = Request::post(&self.url(&Endpoint::UploadDocument))
            .body(form)
            .map_err(|e| ApiError::Request(e.to_string()))?;
        ignore_body(&Endpoint::UploadDocument, send_built(req).await?);
        Ok(())
    }

    async fn delete_document(&self, name: &str) -> Result<(), ApiError> {
        let endpoint = Endpoint::DeleteDocument(name.to_string());
        let resp = send(Request::delete(&self.url(&endpoint))).await?;
        ignore_body(&endpoint, resp);
        Ok(())
    }

    async fn refresh_documents(&self) -> Result<(), ApiError> {
        let endpoint = Endpoint::RefreshDocuments;
        let resp = send(Request::post(&self.url(&endpoint))).await?;
        ignore_body(&endpoint, resp);
        Ok(())
    }
}

async fn send(builder: gloo_net::http::RequestBuilder) -> Result<Response, ApiError> {
    builder
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))
}

async fn send_built(request: Request) -> Result<Response, ApiError> {
    request
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))
}

async fn read_json<T: DeserializeOwned>(resp: Response) -> Result<T, ApiError> {
    let status = resp.status();
    let body = resp
        .text()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    decode(status, &body)
}

/// Mutating document endpoints only need to have been answered.
fn ignore_body(endpoint: &Endpoint, resp: Response) {
    if !resp.ok() {
        log::warn!("{} answered {}", endpoint.path(), resp.status());
    }
}

fn multipart(
    field: &str,
    bytes: &[u8],
    file_name: &str,
    mime: Option<&str>,
) -> Result<FormData, ApiError> {
    let js_err = |e: wasm_bindgen::JsValue| ApiError::Request(format!("{e:?}"));
    let blob = bytes_to_blob(bytes, mime).map_err(js_err)?;
    let form = FormData::new().map_err(js_err)?;
    form.append_with_blob_and_filename(field, &blob, file_name)
        .map_err(js_err)?;
    Ok(form)
}
