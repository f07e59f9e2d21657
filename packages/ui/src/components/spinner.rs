use dioxus::prelude::*;

use crate::icons::FaSpinner;
use crate::Icon;

#[component]
pub fn Spinner(#[props(default = 16)] size: u32, #[props(default)] label: String) -> Element {
    rsx! {
        span {
            class: "spinner",
            Icon { class: "spin", icon: FaSpinner, width: size, height: size }
            if !label.is_empty() {
                span { "{label}" }
            }
        }
    }
}
