//! Client core of the WanderGuide travel assistant.
//!
//! Everything here is platform independent and runs under plain `cargo test`;
//! the browser build in `frontend/` supplies the HTTP transport, the
//! microphone/speaker and the views.

pub mod api;
pub mod config;
pub mod controller;
pub mod errors;
pub mod models;
pub mod view;

pub use api::TravelApi;
pub use config::ApiConfig;
pub use controller::{execute, ApiCall, AppState, Effect, Event, ViewState};
pub use errors::{ApiError, ValidationError};
