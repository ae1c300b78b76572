mod api;
mod components;
mod media;
mod state;
mod theme;

use leptos::mount::mount_to_body;
use leptos::prelude::*;

use wanderguide::ViewState;

use components::chat::Chat;
use components::documents::Documents;
use components::home::Home;
use components::sidebar::Sidebar;
use components::topbar::Topbar;
use state::Controller;
use theme::ThemeContext;

/// Root application component.
#[component]
fn App() -> impl IntoView {
    ThemeContext::provide();
    let controller = Controller::provide();

    // Health check and location on mount
    controller.start();

    let active_view = Memo::new(move |_| controller.with(|s| s.active_view));

    view! {
        <div class="app-container">
            <Topbar />
            <Sidebar />
            <main class="content">
                {move || match active_view.get() {
                    ViewState::Home => view! { <Home /> }.into_any(),
                    ViewState::Chat => view! { <Chat /> }.into_any(),
                    ViewState::Documents => view! { <Documents /> }.into_any(),
                }}
            </main>
        </div>
    }
}

fn main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Debug).expect("Failed to init logger");
    mount_to_body(App);
}
