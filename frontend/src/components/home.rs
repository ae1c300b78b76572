use leptos::ev;
use leptos::prelude::*;

use wanderguide::ViewState;

use crate::state::Controller;

struct Destination {
    name: &'static str,
    image: &'static str,
}

static TRENDING: [Destination; 4] = [
    Destination {
        name: "Paris",
        image: "https://images.unsplash.com/photo-1502602898657-3e91760cbb34?q=80&w=1000",
    },
    Destination {
        name: "New York",
        image: "https://images.unsplash.com/photo-1496442226666-8d4d0e62e6e9?q=80&w=1000",
    },
    Destination {
        name: "Bali",
        image: "https://images.unsplash.com/photo-1537996194471-e657df975ab4?q=80&w=1000",
    },
    Destination {
        name: "Santorini",
        image: "https://images.unsplash.com/photo-1570077188670-e3a8d69ac5ff?q=80&w=1000",
    },
];

/// Dashboard: destination search, trending places and quick actions.
#[component]
pub fn Home() -> impl IntoView {
    let controller = expect_context::<Controller>();
    let (query, set_query) = signal(String::new());

    let on_keydown = move |ev: ev::KeyboardEvent| {
        if ev.key() != "Enter" {
            return;
        }
        let text = query.get_untracked();
        if text.trim().is_empty() {
            return;
        }
        controller.set_location(text);
        set_query.set(String::new());
    };

    view! {
        <div class="home">
            <section class="hero">
                <div class="hero-copy">
                    <h1>"Your Next Adventure"</h1>
                    <p class="muted">"An intelligent travel companion for seamless exploration."</p>
                    <div class="search">
                        <span class="search-icon">"🔍"</span>
                        <input
                            type="text"
                            placeholder="Set your next destination..."
                            prop:value=query
                            on:input=move |ev| set_query.set(event_target_value(&ev))
                            on:keydown=on_keydown
                        />
                    </div>
                    {move || {
                        controller
                            .with(|s| s.current_location.clone())
                            .map(|location| {
                                view! {
                                    <p class="current-location">"📍 " {location}</p>
                                }
                            })
                    }}
                </div>
                <div class="featured">
                    <img
                        src="https://images.unsplash.com/photo-1493976040374-85c8e12f0c0e?q=80&w=2070"
                        alt="Featured Destination"
                    />
                    <div class="featured-caption">
                        <h3>"Kyoto, Japan"</h3>
                        <p>"Cherry Blossom Season is here."</p>
                    </div>
                </div>
            </section>

            <section>
                <h2>"Trending Now"</h2>
                <div class="trending">
                    {TRENDING
                        .iter()
                        .map(|dest| {
                            view! {
                                <div class="destination">
                                    <img src=dest.image alt=dest.name />
                                    <p>{dest.name}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <section>
                <h2>"Quick Actions"</h2>
                <div class="quick-actions">
                    <button class="action" on:click=move |_| controller.navigate(ViewState::Chat)>
                        <span class="action-icon">"💬"</span>
                        <h3>"Start a Chat"</h3>
                        <p>"Ask our AI for travel advice."</p>
                    </button>
                    <button class="action" on:click=move |_| controller.navigate(ViewState::Documents)>
                        <span class="action-icon">"📄"</span>
                        <h3>"Manage Documents"</h3>
                        <p>"Organize your travel papers."</p>
                    </button>
                    <div class="action weather">
                        <span class="action-icon">"☀"</span>
                        <h3>"Travel Weather"</h3>
                        <p class="temperature">"24°C Sunny"</p>
                    </div>
                </div>
            </section>
        </div>
    }
}
