//! Application state and its transitions.
//!
//! The controller is the only part of the client that decides when to talk to
//! the network. [`AppState::apply`] takes an [`Event`], updates the state in
//! place and returns the [`Effect`]s the host has to run; it never performs
//! I/O itself. The host feeds the outcome of each effect back as another
//! event, so every state change goes through `apply`.

mod app_state;
mod effect;
mod event;


pub use app_state::{AppState, ViewState};
pub use effect::{execute, ApiCall, Effect};
pub use event::Event;
