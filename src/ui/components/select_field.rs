use dioxus::prelude::*;

use crate::ui::theme;

/// Labelled dropdown over a fetched option list, with an empty placeholder entry.
#[component]
pub fn SelectField(
    label: String,
    placeholder: String,
    options: Vec<String>,
    value: String,
    onchange: EventHandler<String>,
    #[props(default = "col-span-2".to_string())] class: String,
) -> Element {
    rsx! {
        div { class: "{class}",
            label { class: "{theme::label_class()}", "{label}" }
            select {
                class: "{theme::input_class()}",
                value: "{value}",
                onchange: move |evt: FormEvent| onchange.call(evt.value()),
                option { value: "", selected: value.is_empty(), "{placeholder}" }
                for item in options {
                    option {
                        key: "{item}",
                        value: "{item}",
                        selected: item == value,
                        "{item}"
                    }
                }
            }
        }
    }
}
