//! Small presentation rules shared by the views.

use crate::config::JUMP_TO_BOTTOM_THRESHOLD_PX;

/// Colour scheme of the shell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub const STORAGE_KEY: &'static str = "wanderguide-theme";

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Unknown values fall back to the default.
    pub fn parse(s: &str) -> Self {
        match s {
            "light" => Theme::Light,
            "dark" => Theme::Dark,
            _ => Theme::default(),
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(&self) -> bool {
        *self == Theme::Dark
    }
}

/// What a key press in the chat composer should do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ComposerKey {
    Submit,
    Newline,
    Other,
}

impl ComposerKey {
    pub fn from_key(key: &str, shift: bool) -> Self {
        match (key, shift) {
            ("Enter", false) => ComposerKey::Submit,
            ("Enter", true) => ComposerKey::Newline,
            _ => ComposerKey::Other,
        }
    }
}

/// Whether the "jump to bottom" button should be visible for the given
/// scroll metrics.
pub fn show_jump_to_bottom(scroll_height: f64, scroll_top: f64, client_height: f64) -> bool {
    scroll_height - scroll_top - client_height > JUMP_TO_BOTTOM_THRESHOLD_PX
}

pub fn can_send(draft: &str, is_loading: bool) -> bool {
    !is_loading && !draft.trim().is_empty()
}

pub fn composer_placeholder(is_loading: bool) -> &'static str {
    if is_loading {
        "WanderGuide is thinking..."
    } else {
        "Ask anything about your travel..."
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enter_submits_unless_shift_is_held() {
        assert_eq!(ComposerKey::from_key("Enter", false), ComposerKey::Submit);
        assert_eq!(ComposerKey::from_key("Enter", true), ComposerKey::Newline);
        assert_eq!(ComposerKey::from_key("a", false), ComposerKey::Other);
    }

    #[test]
    fn jump_button_appears_past_threshold() {
        // 1000px of content, 400px viewport.
        assert!(!show_jump_to_bottom(1000.0, 600.0, 400.0));
        assert!(!show_jump_to_bottom(1000.0, 400.0, 400.0));
        assert!(show_jump_to_bottom(1000.0, 399.0, 400.0));
    }

    #[test]
    fn send_needs_text_and_idle() {
        assert!(can_send("hello", false));
        assert!(!can_send("   ", false));
        assert!(!can_send("hello", true));
    }

    #[test]
    fn theme_round_trips_through_storage_value() {
        for theme in [Theme::Light, Theme::Dark] {
            assert_eq!(Theme::parse(theme.as_str()), theme);
        }
        assert_eq!(Theme::parse("sepia"), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
    }
}
