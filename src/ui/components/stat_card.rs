use dioxus::prelude::*;

use crate::ui::theme;

/// Headline number on the dashboard overview.
#[component]
pub fn StatCard(
    icon: String,
    title: String,
    value: String,
    caption: Option<String>,
    #[props(default)] style: String,
) -> Element {
    rsx! {
        div {
            class: "{theme::stat_panel()} reveal",
            style: "{style}",
            div { class: "flex items-center gap-3 mb-2",
                span { class: "text-lg", "{icon}" }
                span { class: "text-[10px] font-bold uppercase tracking-widest text-slate-500", "{title}" }
            }
            p { class: "text-3xl font-black tracking-tighter text-white", "{value}" }
            if let Some(caption) = caption {
                p { class: "mt-1 text-xs text-slate-500", "{caption}" }
            }
        }
    }
}
