use leptos::ev;
use leptos::html;
use leptos::prelude::*;
use web_sys::{FileList, HtmlInputElement};

use wanderguide::models::Document;

use crate::state::Controller;

fn first_file(files: Option<FileList>) -> Option<web_sys::File> {
    files.and_then(|list| list.get(0))
}

/// Uploaded PDFs, with upload, refresh and delete.
#[component]
pub fn Documents() -> impl IntoView {
    let controller = expect_context::<Controller>();
    let picker = NodeRef::<html::Input>::new();
    let is_loading = move || controller.is_loading();
    let is_empty = Memo::new(move |_| controller.with(|s| s.documents.is_empty()));

    let open_picker = move || {
        if let Some(input) = picker.get_untracked() {
            input.click();
        }
    };

    let on_picked = move |ev: ev::Event| {
        let input: HtmlInputElement = event_target(&ev);
        if let Some(file) = first_file(input.files()) {
            controller.upload_document(file);
        }
        // Allow picking the same file again.
        input.set_value("");
    };

    view! {
        <div class="documents">
            <div class="documents-header">
                <div>
                    <h1>"Your Documents"</h1>
                    <p class="muted">"Upload PDFs to give the AI context for your trip."</p>
                </div>
                <div class="documents-actions">
                    <button class="primary" disabled=is_loading on:click=move |_| open_picker()>
                        "⤒ Upload PDF"
                    </button>
                    <button
                        class="secondary"
                        class:spinning=is_loading
                        disabled=is_loading
                        on:click=move |_| controller.refresh_knowledge_base()
                    >
                        "⟳ Refresh"
                    </button>
                </div>
                <input
                    node_ref=picker
                    type="file"
                    accept=".pdf"
                    class="hidden"
                    on:change=on_picked
                />
            </div>

            {move || {
                if is_empty.get() {
                    view! { <Dropzone /> }.into_any()
                } else {
                    view! {
                        <div class="document-grid">
                            <div class="document-card add">
                                <button disabled=is_loading on:click=move |_| open_picker()>
                                    <span class="plus">"+"</span>
                                    "Add Document"
                                </button>
                            </div>
                            <For
                                each=move || controller.with(|s| s.documents.clone())
                                key=|doc| doc.name.clone()
                                let:doc
                            >
                                <DocumentCard doc=doc />
                            </For>
                        </div>
                    }
                    .into_any()
                }
            }}
        </div>
    }
}

/// Drag-and-drop target shown while there are no documents.
#[component]
fn Dropzone() -> impl IntoView {
    let controller = expect_context::<Controller>();
    let (dragging, set_dragging) = signal(false);

    let on_drop = move |ev: ev::DragEvent| {
        ev.prevent_default();
        set_dragging.set(false);
        let file = ev.data_transfer().and_then(|dt| first_file(dt.files()));
        if let Some(file) = file {
            controller.upload_document(file);
        }
    };

    view! {
        <div
            class="dropzone"
            class:dragging=dragging
            on:dragenter=move |_| set_dragging.set(true)
            on:dragleave=move |_| set_dragging.set(false)
            on:dragover=move |ev: ev::DragEvent| ev.prevent_default()
            on:drop=on_drop
        >
            <span class="dropzone-icon">"⤒"</span>
            <h3>"Drag & Drop PDF files here"</h3>
            <p class="muted">"or click the \"Upload PDF\" button"</p>
        </div>
    }
}

#[component]
fn DocumentCard(doc: Document) -> impl IntoView {
    let controller = expect_context::<Controller>();
    let size = doc.size_label();
    let name = doc.name.clone();

    view! {
        <div class="document-card">
            <div class="document-name">
                <span class="file-icon">"📄"</span>
                <p>{doc.name}</p>
            </div>
            <div class="document-footer">
                <p class="muted">{size}</p>
                <button
                    class="delete-btn"
                    title="Delete"
                    disabled=move || controller.is_loading()
                    on:click=move |_| controller.delete_document(name.clone())
                >
                    "🗑"
                </button>
            </div>
        </div>
    }
}
