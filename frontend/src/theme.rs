//! Theme preference, persisted in localStorage and applied as a `dark` class
//! on the document root.

use leptos::prelude::*;

use wanderguide::view::Theme;

#[derive(Clone, Copy)]
pub struct ThemeContext {
    pub theme: ReadSignal<Theme>,
    set_theme: WriteSignal<Theme>,
}

impl ThemeContext {
    /// Create the theme signal from storage and provide it in the current
    /// Leptos context.
    pub fn provide() -> Self {
        let (theme, set_theme) = signal(load());
        apply(theme.get_untracked());

        let ctx = Self { theme, set_theme };
        provide_context(ctx);
        ctx
    }

    pub fn toggle(&self) {
        let next = self.theme.get_untracked().toggled();
        self.set_theme.set(next);
        apply(next);
        store(next);
    }
}

fn storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

fn load() -> Theme {
    storage()
        .and_then(|s| s.get_item(Theme::STORAGE_KEY).ok().flatten())
        .map(|v| Theme::parse(&v))
        .unwrap_or_default()
}

fn store(theme: Theme) {
    if let Some(s) = storage() {
        if let Err(e) = s.set_item(Theme::STORAGE_KEY, theme.as_str()) {
            log::warn!("Failed to persist theme: {e:?}");
        }
    }
}

fn apply(theme: Theme) {
    let root = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element());
    if let Some(root) = root {
        let _ = root.class_list().toggle_with_force("dark", theme.is_dark());
    }
}
