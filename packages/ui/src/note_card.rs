use api::{Note, NoteInput};
use dioxus::prelude::*;

use crate::board::NoteDraft;
use crate::browser::copy_to_clipboard;
use crate::components::{Button, ButtonVariant, Input, Status, Textarea};
use crate::display::{format_note_date, truncate_chars};
use crate::icons::{FaCheck, FaCopy, FaPenToSquare, FaTrash, FaXmark};
use crate::Icon;

/// One note in the workspace grid, with copy, inline edit and delete.
#[component]
pub fn NoteCard(
    note: Note,
    #[props(default = 240)] preview_chars: usize,
    #[props(default)] busy: bool,
    on_update: EventHandler<(String, NoteInput)>,
    on_delete: EventHandler<String>,
    on_status: EventHandler<Status>,
) -> Element {
    let mut editing = use_signal(|| false);
    let mut expanded = use_signal(|| false);
    let mut draft = use_signal(NoteDraft::default);

    let title = note.display_title().map(str::to_string);
    let date = format_note_date(note.created_at);
    let long = note.content.chars().count() > preview_chars;
    let body = if long && !expanded() {
        truncate_chars(&note.content, preview_chars)
    } else {
        note.content.clone()
    };

    let start_edit = {
        let note = note.clone();
        move |_| {
            draft.set(NoteDraft::new(
                note.title.clone().unwrap_or_default(),
                note.content.clone(),
            ));
            editing.set(true);
        }
    };

    let save_edit = {
        let note = note.clone();
        move |_| {
            // Blank or unchanged edits never reach the network.
            if let Some(input) = draft().edit_of(&note) {
                on_update.call((note.id.clone(), input));
            }
            editing.set(false);
        }
    };

    let copy = {
        let content = note.content.clone();
        move |_| {
            let content = content.clone();
            spawn(async move {
                match copy_to_clipboard(&content).await {
                    Ok(()) => on_status.call(Status::success("Copied to clipboard")),
                    Err(e) => {
                        tracing::warn!("clipboard write failed: {e}");
                        on_status.call(Status::error("Could not copy note"));
                    }
                }
            });
        }
    };

    let id = note.id.clone();

    rsx! {
        article {
            class: "card note-card",
            if editing() {
                div {
                    class: "note-edit",
                    Input {
                        value: draft().title,
                        placeholder: "Title (optional)",
                        oninput: move |evt: FormEvent| draft.write().title = evt.value(),
                    }
                    Textarea {
                        value: draft().content,
                        rows: 6,
                        oninput: move |evt: FormEvent| draft.write().content = evt.value(),
                    }
                    div {
                        class: "card-actions",
                        Button {
                            variant: ButtonVariant::Primary,
                            disabled: busy,
                            onclick: save_edit,
                            Icon { icon: FaCheck, width: 12, height: 12 }
                            " Save"
                        }
                        Button {
                            variant: ButtonVariant::Ghost,
                            onclick: move |_| editing.set(false),
                            Icon { icon: FaXmark, width: 12, height: 12 }
                            " Cancel"
                        }
                    }
                }
            } else {
                header {
                    class: "card-header",
                    if let Some(title) = title {
                        h3 { class: "card-title", "{title}" }
                    }
                    time { class: "card-date", "{date}" }
                }
                if let Some(url) = note.image_url.as_deref().filter(|u| !u.is_empty()) {
                    img { class: "card-image", src: "{url}", alt: "Note attachment" }
                }
                p { class: "note-body", "{body}" }
                if long {
                    button {
                        class: "link-button",
                        r#type: "button",
                        onclick: move |_| expanded.set(!expanded()),
                        if expanded() { "Show less" } else { "Show more" }
                    }
                }
                div {
                    class: "card-actions",
                    Button {
                        variant: ButtonVariant::Ghost,
                        title: "Copy",
                        onclick: copy,
                        Icon { icon: FaCopy, width: 14, height: 14 }
                    }
                    Button {
                        variant: ButtonVariant::Ghost,
                        title: "Edit",
                        disabled: busy,
                        onclick: start_edit,
                        Icon { icon: FaPenToSquare, width: 14, height: 14 }
                    }
                    Button {
                        variant: ButtonVariant::Ghost,
                        title: "Delete",
                        disabled: busy,
                        onclick: move |_| on_delete.call(id.clone()),
                        Icon { icon: FaTrash, width: 14, height: 14 }
                    }
                }
            }
        }
    }
}
