//! The signed-in user's workspace: compose, dictate, enhance, and manage notes.

use api::{Attachment, NoteInput};
use dioxus::prelude::*;
use store::Role;
use ui::browser::confirm;
use ui::components::{Button, ButtonVariant, Input, Spinner, Status, StatusBanner, Textarea};
use ui::display::derive_title;
use ui::icons::{FaFloppyDisk, FaMicrophone, FaMicrophoneSlash, FaWandMagicSparkles};
use ui::{
    use_api, use_dictation, use_settings, Icon, ImagePicker, NoteBoard, NoteCard, NoteDraft,
    AI_OFFLINE,
};

use crate::Protected;

#[component]
pub fn Notes() -> Element {
    rsx! {
        Protected {
            allowed: vec![Role::User],
            Workspace {}
        }
    }
}

#[component]
fn Workspace() -> Element {
    let api = use_api();
    let settings = use_settings();
    let mut board = use_signal(NoteBoard::default);
    let mut draft = use_signal(NoteDraft::default);
    let mut image = use_signal(|| Option::<Attachment>::None);
    let mut status = use_signal(|| Option::<Status>::None);
    let mut saving = use_signal(|| false);
    let mut enhancing = use_signal(|| false);
    let mut busy_note = use_signal(|| Option::<String>::None);

    let display = settings().config.display.clone();
    let title_chars = display.title_chars;

    let loader = use_resource(move || async move {
        match api.client().list_notes().await {
            Ok(notes) => board.set(NoteBoard::new(notes)),
            Err(e) => api.report(status, &e, "Could not load your notes"),
        }
    });

    let mut dictation = use_dictation(
        move |transcript| draft.write().content = transcript,
        move |message| status.set(Some(Status::error(message))),
    );

    let save = move |_| async move {
        let Some(input) = draft().submission(title_chars) else {
            return;
        };
        saving.set(true);
        status.set(None);
        let client = api.client();
        let result = match image() {
            Some(attachment) => client.create_note_with_image(&input, attachment).await,
            None => client.create_note(&input).await,
        };
        match result {
            Ok(note) => {
                board.write().prepend(note);
                draft.set(NoteDraft::default());
                image.set(None);
                status.set(Some(Status::success("Note saved")));
            }
            Err(e) => api.report(status, &e, "Error saving note"),
        }
        saving.set(false);
    };

    let enhance = move |_| async move {
        let text = draft().content.trim().to_string();
        if text.is_empty() {
            return;
        }
        let backend = match api.ai_backend() {
            Ok(backend) => backend,
            Err(e) => {
                tracing::error!("AI backend unavailable: {e}");
                status.set(Some(Status::error(AI_OFFLINE)));
                return;
            }
        };

        enhancing.set(true);
        status.set(None);
        let client = api.client();
        let content = match client.enhance(&backend, &text).await {
            Ok(content) => content,
            Err(e) => {
                api.report_ai(status, &e);
                enhancing.set(false);
                return;
            }
        };
        let input =
            NoteInput::new(content.clone()).with_title(Some(derive_title(&content, title_chars)));
        match client.create_note(&input).await {
            Ok(note) => {
                board.write().prepend(note);
                draft.set(NoteDraft::default());
                status.set(Some(Status::success("Enhanced note saved")));
            }
            Err(e) => api.report(status, &e, "Error saving note"),
        }
        enhancing.set(false);
    };

    let update = move |(id, input): (String, NoteInput)| async move {
        busy_note.set(Some(id.clone()));
        match api.client().update_note(&id, &input).await {
            Ok(note) => {
                board.write().replace(note);
                status.set(Some(Status::success("Note updated")));
            }
            Err(e) => api.report(status, &e, "Error updating note"),
        }
        busy_note.set(None);
    };

    let delete = move |id: String| async move {
        if !confirm("Delete this note?") {
            return;
        }
        busy_note.set(Some(id.clone()));
        match api.client().delete_note(&id).await {
            Ok(()) => {
                board.write().remove(&id);
            }
            Err(e) => api.report(status, &e, "Error deleting note"),
        }
        busy_note.set(None);
    };

    let busy = saving() || enhancing();
    let listening = dictation.listening();
    let content_class = if listening { "listening" } else { "" }.to_string();
    let mic_title = if listening { "Stop dictation" } else { "Dictate" }.to_string();
    let mic_variant = if listening {
        ButtonVariant::Danger
    } else {
        ButtonVariant::Secondary
    };

    rsx! {
        section {
            class: "workspace",
            header {
                class: "page-header",
                h1 { "My Notes" }
                span { class: "page-count", "{board().len()} notes" }
            }

            StatusBanner {
                status: status(),
                on_dismiss: move |_| status.set(None),
            }

            div {
                class: "composer card",
                Input {
                    placeholder: "Title (optional)",
                    value: draft().title,
                    disabled: busy,
                    oninput: move |evt: FormEvent| draft.write().title = evt.value(),
                }
                Textarea {
                    class: content_class,
                    placeholder: "Write or dictate a note...",
                    rows: 6,
                    value: draft().content,
                    disabled: busy,
                    oninput: move |evt: FormEvent| draft.write().content = evt.value(),
                }
                ImagePicker {
                    attachment: image(),
                    disabled: busy,
                    on_pick: move |picked| image.set(picked),
                }
                div {
                    class: "composer-actions",
                    if dictation.supported() {
                        Button {
                            variant: mic_variant,
                            title: mic_title,
                            disabled: busy,
                            onclick: move |_| dictation.toggle(),
                            if listening {
                                Icon { icon: FaMicrophoneSlash, width: 14, height: 14 }
                            } else {
                                Icon { icon: FaMicrophone, width: 14, height: 14 }
                            }
                        }
                    }
                    Button {
                        variant: ButtonVariant::Outline,
                        title: "Enhance with AI",
                        disabled: busy,
                        onclick: enhance,
                        if enhancing() {
                            Spinner { size: 14 }
                        } else {
                            Icon { icon: FaWandMagicSparkles, width: 14, height: 14 }
                        }
                        " Enhance"
                    }
                    Button {
                        variant: ButtonVariant::Primary,
                        disabled: busy,
                        onclick: save,
                        Icon { icon: FaFloppyDisk, width: 14, height: 14 }
                        if saving() { " Saving..." } else { " Save" }
                    }
                }
            }

            if loader.read().is_none() {
                Spinner { label: "Loading notes" }
            } else if board().is_empty() {
                p { class: "empty", "No notes yet. Write your first one above." }
            } else {
                div {
                    class: "grid",
                    for (id, note) in board().notes().iter().map(|n| (n.id.clone(), n.clone())) {
                        NoteCard {
                            key: "{id}",
                            busy: busy_note().as_deref() == Some(id.as_str()),
                            note: note,
                            preview_chars: display.preview_chars,
                            on_update: update,
                            on_delete: delete,
                            on_status: move |s| status.set(Some(s)),
                        }
                    }
                }
            }
        }
    }
}
