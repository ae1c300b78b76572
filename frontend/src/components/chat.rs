use leptos::ev;
use leptos::html;
use leptos::prelude::*;

use wanderguide::models::{ChatMessage, Role};
use wanderguide::view::{can_send, composer_placeholder, show_jump_to_bottom, ComposerKey};

use crate::state::Controller;

/// Chat panel with message history, typing indicator and composer.
#[component]
pub fn Chat() -> impl IntoView {
    let controller = expect_context::<Controller>();
    let scroller = NodeRef::<html::Div>::new();
    let (show_jump, set_show_jump) = signal(false);

    let scroll_to_bottom = move || {
        if let Some(el) = scroller.get_untracked() {
            el.set_scroll_top(el.scroll_height());
        }
    };

    // Follow new content, but not while a reply is pending.
    let progress = Memo::new(move |_| controller.with(|s| (s.chat_history.len(), s.is_loading)));
    Effect::new(move |_| {
        let (count, loading) = progress.get();
        if !loading && count > 0 {
            scroll_to_bottom();
        }
    });

    let on_scroll = move |_: ev::Event| {
        if let Some(el) = scroller.get_untracked() {
            set_show_jump.set(show_jump_to_bottom(
                el.scroll_height() as f64,
                el.scroll_top() as f64,
                el.client_height() as f64,
            ));
        }
    };

    view! {
        <div class="chat">
            <div class="messages" node_ref=scroller on:scroll=on_scroll>
                <Show when=move || controller.with(|s| s.chat_history.is_empty())>
                    <div class="empty-state">
                        <p class="empty-title">"Start a conversation"</p>
                        <p class="muted">"Ask about destinations, attractions, or travel tips."</p>
                    </div>
                </Show>
                <For
                    each=move || {
                        controller.with(|s| {
                            s.chat_history.iter().cloned().enumerate().collect::<Vec<_>>()
                        })
                    }
                    key=|(index, _)| *index
                    let:entry
                >
                    <MessageBubble message=entry.1 />
                </For>
                <Show when=move || controller.is_loading()>
                    <TypingIndicator />
                </Show>
            </div>

            <Show when=move || show_jump.get()>
                <button class="jump-to-bottom" title="Jump to bottom" on:click=move |_| scroll_to_bottom()>
                    "↓"
                </button>
            </Show>

            <Composer />
        </div>
    }
}

/// A single chat message bubble.
#[component]
fn MessageBubble(message: ChatMessage) -> impl IntoView {
    let controller = expect_context::<Controller>();
    let css_class = match (message.role, message.is_error) {
        (Role::User, _) => "message user",
        (Role::Assistant, true) => "message assistant error",
        (Role::Assistant, false) => "message assistant",
    };
    let speakable = message.is_speakable();
    let content = message.content.clone();

    view! {
        <div class=css_class>
            <div class="avatar">{if message.role == Role::User { "🧑" } else { "🤖" }}</div>
            <div class="bubble">
                <p class="content">{message.content}</p>
                {speakable.then(|| {
                    view! {
                        <div class="message-actions">
                            <button
                                class="listen-btn"
                                disabled=move || controller.with(|s| s.is_speaking)
                                on:click=move |_| controller.speak_text(content.clone())
                            >
                                "🔊 Listen"
                            </button>
                        </div>
                    }
                })}
            </div>
        </div>
    }
}

#[component]
fn TypingIndicator() -> impl IntoView {
    view! {
        <div class="message assistant typing">
            <div class="avatar">"🤖"</div>
            <div class="bubble dots">
                <span class="dot"></span>
                <span class="dot"></span>
                <span class="dot"></span>
            </div>
        </div>
    }
}

/// Chat input with textarea, microphone and send button.
#[component]
fn Composer() -> impl IntoView {
    let controller = expect_context::<Controller>();

    let draft = move || controller.with(|s| s.current_message.clone());
    let is_loading = move || controller.is_loading();
    let is_recording = move || controller.with(|s| s.is_recording);

    let send = move || controller.send_message(draft());

    let on_keydown = move |ev: ev::KeyboardEvent| {
        if ComposerKey::from_key(&ev.key(), ev.shift_key()) == ComposerKey::Submit {
            ev.prevent_default();
            send();
        }
    };

    view! {
        <div class="composer">
            <textarea
                rows="1"
                placeholder=move || composer_placeholder(is_loading())
                prop:value=draft
                on:input=move |ev| controller.set_current_message(event_target_value(&ev))
                on:keydown=on_keydown
                disabled=is_loading
            />
            <button
                class="mic-btn"
                class:recording=is_recording
                title="Voice input"
                disabled=move || is_recording() || is_loading()
                on:click=move |_| controller.handle_voice_input()
            >
                "🎤"
            </button>
            <button
                class="send-btn"
                title="Send"
                disabled=move || !can_send(&draft(), is_loading())
                on:click=move |_| send()
            >
                "➤"
            </button>
        </div>
    }
}
