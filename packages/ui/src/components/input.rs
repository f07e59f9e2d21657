use dioxus::prelude::*;

#[component]
pub fn Label(html_for: String, children: Element) -> Element {
    rsx! {
        label {
            class: "field-label",
            r#for: "{html_for}",
            {children}
        }
    }
}

#[component]
pub fn Input(
    #[props(default)] id: String,
    #[props(default)] class: String,
    #[props(default = "text".to_string())] input_type: String,
    #[props(default)] placeholder: String,
    value: String,
    #[props(default)] required: bool,
    #[props(default)] disabled: bool,
    oninput: EventHandler<FormEvent>,
) -> Element {
    rsx! {
        input {
            id: "{id}",
            class: "field {class}",
            r#type: "{input_type}",
            placeholder: "{placeholder}",
            value: "{value}",
            required: required,
            disabled: disabled,
            oninput: move |evt| oninput.call(evt),
        }
    }
}

#[component]
pub fn Textarea(
    #[props(default)] id: String,
    #[props(default)] class: String,
    #[props(default)] placeholder: String,
    value: String,
    #[props(default = 4)] rows: u32,
    #[props(default)] disabled: bool,
    oninput: EventHandler<FormEvent>,
) -> Element {
    rsx! {
        textarea {
            id: "{id}",
            class: "field field-area {class}",
            placeholder: "{placeholder}",
            rows: "{rows}",
            value: "{value}",
            disabled: disabled,
            oninput: move |evt| oninput.call(evt),
        }
    }
}
