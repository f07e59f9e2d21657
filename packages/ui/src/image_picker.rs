use api::Attachment;
use dioxus::prelude::*;

use crate::browser::{object_url, revoke_object_url};
use crate::display::format_size;
use crate::icons::{FaImage, FaXmark};
use crate::Icon;

/// File input for a single image, with a preview and a clear button.
///
/// The picked file is owned by the parent; when the parent drops it (for
/// example after a successful upload) the preview is released too.
#[component]
pub fn ImagePicker(
    attachment: Option<Attachment>,
    on_pick: EventHandler<Option<Attachment>>,
    #[props(default)] disabled: bool,
    #[props(default = "Attach image".to_string())] label: String,
) -> Element {
    let mut preview = use_signal(|| None::<String>);

    let release = move |mut preview: Signal<Option<String>>| {
        let previous = preview.write().take();
        if let Some(url) = previous {
            revoke_object_url(&url);
        }
    };

    let has_attachment = attachment.is_some();
    use_effect(use_reactive!(|has_attachment| {
        if !has_attachment {
            release(preview);
        }
    }));
    use_drop(move || release(preview));

    let onchange = move |evt: FormEvent| async move {
        let Some(engine) = evt.files() else {
            return;
        };
        let Some(name) = engine.files().into_iter().next() else {
            return;
        };
        let Some(bytes) = engine.read_file(&name).await else {
            tracing::warn!("could not read picked file {name}");
            return;
        };
        let picked = Attachment::new(name, bytes);
        release(preview);
        preview.set(object_url(&picked));
        on_pick.call(Some(picked));
    };

    let clear = move |_| {
        release(preview);
        on_pick.call(None);
    };

    let summary = attachment
        .as_ref()
        .map(|a| format!("{} ({})", a.file_name, format_size(a.len())));

    rsx! {
        div {
            class: "image-picker",
            label {
                class: "image-picker-label",
                Icon { icon: FaImage, width: 14, height: 14 }
                " {label}"
                input {
                    r#type: "file",
                    accept: "image/*",
                    disabled: disabled,
                    onchange: onchange,
                }
            }
            if let Some(summary) = summary {
                div {
                    class: "image-preview",
                    if let Some(url) = preview() {
                        img { src: "{url}", alt: "Selected image preview" }
                    }
                    span { class: "image-preview-name", "{summary}" }
                    button {
                        class: "image-preview-clear",
                        r#type: "button",
                        title: "Remove image",
                        disabled: disabled,
                        onclick: clear,
                        Icon { icon: FaXmark, width: 12, height: 12 }
                    }
                }
            }
        }
    }
}
