use leptos::prelude::*;

use crate::theme::ThemeContext;

/// Logo and theme toggle.
#[component]
pub fn Topbar() -> impl IntoView {
    let theme = expect_context::<ThemeContext>();

    view! {
        <header class="topbar">
            <div class="logo">
                <span class="logo-icon">"🧭"</span>
                <h1>"WanderGuide"</h1>
            </div>
            <button
                class="theme-toggle"
                title="Toggle theme"
                on:click=move |_| theme.toggle()
            >
                {move || if theme.theme.get().is_dark() { "☀" } else { "☾" }}
            </button>
        </header>
    }
}
