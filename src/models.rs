use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One turn of the in-memory chat transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
    #[serde(default, rename = "isError", skip_serializing_if = "std::ops::Not::not")]
    pub is_error: bool,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self { role: Role::User, content: content.into(), is_error: false }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self { role: Role::Assistant, content: content.into(), is_error: false }
    }

    /// An assistant turn carrying a failure instead of a reply.
    pub fn error(content: impl Into<String>) -> Self {
        Self { role: Role::Assistant, content: content.into(), is_error: true }
    }

    /// Whether the "Listen" action applies to this message.
    pub fn is_speakable(&self) -> bool {
        self.role == Role::Assistant && !self.is_error
    }
}

/// A stored PDF as reported by the document list endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub name: String,
    pub size: u64,
}

impl Document {
    /// Size in kibibytes with one decimal, e.g. `"12.5 KB"`.
    pub fn size_label(&self) -> String {
        format!("{:.1} KB", self.size as f64 / 1024.0)
    }
}

/// A local file picked for upload.
#[derive(Clone, PartialEq, Eq)]
pub struct Upload {
    pub name: String,
    pub bytes: Vec<u8>,
}

impl Upload {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self { name: name.into(), bytes }
    }

    pub fn is_pdf(&self) -> bool {
        self.name.to_lowercase().ends_with(".pdf")
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.is_pdf() {
            Ok(())
        } else {
            Err(ValidationError::NotPdf { file_name: self.name.clone() })
        }
    }
}

impl std::fmt::Debug for Upload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Upload")
            .field("name", &self.name)
            .field("bytes", &self.bytes.len())
            .finish()
    }
}

/// Captured microphone audio, ready for transcription.
#[derive(Clone, PartialEq, Eq)]
pub struct AudioClip {
    pub bytes: Vec<u8>,
}

impl AudioClip {
    pub const MIME_TYPE: &'static str = "audio/webm";
    pub const FILE_NAME: &'static str = "recording.webm";

    pub fn new(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }
}

impl std::fmt::Debug for AudioClip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AudioClip").field("bytes", &self.bytes.len()).finish()
    }
}

// ── Request bodies ───────────────────────────────────────────────────────────

/// Body of `POST /chat`.
///
/// `history` holds one `[content, ""]` pair per prior message, whatever its
/// role. The backend expects `[user, assistant]` pairs, so assistant replies
/// end up in the user slot and the assistant slot is always empty. This is
/// the shape the backend currently receives; keep it until the backend
/// contract changes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ChatRequest {
    pub message: String,
    pub history: Vec<(String, String)>,
}

impl ChatRequest {
    pub fn new(message: impl Into<String>, prior: &[ChatMessage]) -> Self {
        let history = prior
            .iter()
            .map(|m| (m.content.clone(), String::new()))
            .collect();
        Self { message: message.into(), history }
    }
}

/// Body of `POST /location/set`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SetLocationRequest {
    pub location: String,
}

/// Body of `POST /voice/speak`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SpeakRequest {
    pub text: String,
}

// ── Response bodies ──────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ChatReply {
    pub reply: String,
    #[serde(default)]
    pub location_detected: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct LocationUpdate {
    pub location: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct CurrentLocation {
    #[serde(default)]
    pub current_location: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct DocumentList {
    #[serde(default)]
    pub documents: Vec<Document>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct Transcription {
    #[serde(default)]
    pub transcription: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn chat_history_keeps_only_content_in_first_slot() {
        let prior = vec![ChatMessage::user("Hi"), ChatMessage::assistant("Hello!")];
        let req = ChatRequest::new("Where to?", &prior);
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({
                "message": "Where to?",
                "history": [["Hi", ""], ["Hello!", ""]],
            })
        );
    }

    #[test]
    fn error_flag_serializes_only_when_set() {
        let ok = serde_json::to_value(ChatMessage::assistant("x")).unwrap();
        assert_eq!(ok, json!({ "role": "assistant", "content": "x" }));

        let failed = serde_json::to_value(ChatMessage::error("Error: boom")).unwrap();
        assert_eq!(failed["isError"], json!(true));
    }

    #[test]
    fn pdf_check_ignores_case() {
        assert!(Upload::new("Trip.PDF", vec![]).is_pdf());
        assert!(Upload::new("trip.pdf", vec![]).validate().is_ok());
        assert_eq!(
            Upload::new("notes.txt", vec![]).validate(),
            Err(ValidationError::NotPdf { file_name: "notes.txt".into() })
        );
        assert!(!Upload::new("pdf", vec![]).is_pdf());
    }

    #[test]
    fn document_size_is_shown_in_kilobytes() {
        let doc = Document { name: "a.pdf".into(), size: 12_800 };
        assert_eq!(doc.size_label(), "12.5 KB");
        let empty = Document { name: "b.pdf".into(), size: 0 };
        assert_eq!(empty.size_label(), "0.0 KB");
    }

    #[test]
    fn missing_document_field_means_empty_list() {
        let list: DocumentList = serde_json::from_value(json!({})).unwrap();
        assert!(list.documents.is_empty());
    }

    #[test]
    fn only_assistant_replies_are_speakable() {
        assert!(ChatMessage::assistant("Kyoto is lovely").is_speakable());
        assert!(!ChatMessage::error("Error: offline").is_speakable());
        assert!(!ChatMessage::user("Tell me about Kyoto").is_speakable());
    }
}
