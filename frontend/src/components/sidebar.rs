use leptos::prelude::*;

use wanderguide::ViewState;

use crate::state::Controller;

fn icon(view: ViewState) -> &'static str {
    match view {
        ViewState::Home => "▦",
        ViewState::Chat => "💬",
        ViewState::Documents => "📄",
    }
}

/// Navigation between the three views.
#[component]
pub fn Sidebar() -> impl IntoView {
    let controller = expect_context::<Controller>();

    view! {
        <nav class="sidebar">
            <ul>
                {ViewState::ALL
                    .into_iter()
                    .map(|view| {
                        view! {
                            <li>
                                <button
                                    class="nav-item"
                                    class:active=move || controller.with(|s| s.active_view == view)
                                    on:click=move |_| controller.navigate(view)
                                >
                                    <span class="nav-icon">{icon(view)}</span>
                                    <span class="nav-label">{view.label()}</span>
                                </button>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </nav>
    }
}
