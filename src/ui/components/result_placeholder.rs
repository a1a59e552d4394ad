use dioxus::prelude::*;

use crate::ui::theme;

#[component]
pub fn ResultPlaceholder(icon: String, text: String) -> Element {
    rsx! {
        div { class: "{theme::placeholder_panel()}",
            span { class: "pulse-soft mb-4 text-6xl", "{icon}" }
            p { class: "font-bold uppercase tracking-widest text-[10px]", "{text}" }
        }
    }
}

#[component]
pub fn Spinner() -> Element {
    rsx! { span { class: "spinner spin", aria_hidden: "true" } }
}
