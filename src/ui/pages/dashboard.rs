use std::time::Duration;

use dioxus::prelude::*;

use crate::{
    app::Route,
    domain::AppState,
    ui::{animation::stagger_style, components::StatCard, theme},
};

const STAGGER: Duration = Duration::from_millis(120);
const MODEL_ACCURACY: &str = "94.2%";

#[component]
pub fn DashboardPage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let nav = use_navigator();

    let user_name = state.with(|st| st.session.display_name("Captain").to_string());
    let backend = state.with(|st| st.backend.clone());
    let queries = state.with(|st| st.predictions_run);

    let (api_value, api_caption) = match backend {
        Some(status) => {
            let caption = match (&status.system, &status.version) {
                (Some(system), Some(version)) => format!("{system} v{version}"),
                (Some(system), None) => system.clone(),
                (None, Some(version)) => format!("v{version}"),
                (None, None) => "prediction service".to_string(),
            };
            (status.headline().to_string(), caption)
        }
        None => ("CHECKING".to_string(), "contacting backend".to_string()),
    };

    rsx! {
        div { class: "space-y-10",
            header { class: "reveal",
                h2 { class: "{theme::page_title()}", "Welcome back, {user_name}" }
                p { class: "{theme::page_subtitle()} mt-2", "Flight intelligence overview" }
            }

            div { class: "grid grid-cols-3 gap-6",
                StatCard {
                    icon: "📡".to_string(),
                    title: "API Status".to_string(),
                    value: api_value,
                    caption: Some(api_caption),
                    style: stagger_style(0, STAGGER),
                }
                StatCard {
                    icon: "🎯".to_string(),
                    title: "Model Accuracy".to_string(),
                    value: MODEL_ACCURACY.to_string(),
                    caption: Some("validation set".to_string()),
                    style: stagger_style(1, STAGGER),
                }
                StatCard {
                    icon: "📊".to_string(),
                    title: "Queries This Session".to_string(),
                    value: queries.to_string(),
                    style: stagger_style(2, STAGGER),
                }
            }

            div { class: "grid grid-cols-2 gap-6",
                ModuleCard {
                    icon: "⏱️",
                    title: "Delay Predictor",
                    body: "Score a departure for delay risk by airline, route and schedule.",
                    target: Route::DelayPredictor {},
                    index: 3,
                }
                ModuleCard {
                    icon: "💲",
                    title: "Price Oracle",
                    body: "Estimate the fare for a route from airline and flight duration.",
                    target: Route::PriceOracle {},
                    index: 4,
                }
            }

            button {
                class: "text-[10px] font-bold uppercase tracking-widest text-slate-500 hover:text-brand-blue",
                onclick: move |_| { nav.push(Route::Landing {}); },
                "← Back to landing"
            }
        }
    }
}

#[component]
fn ModuleCard(
    icon: &'static str,
    title: &'static str,
    body: &'static str,
    target: Route,
    index: usize,
) -> Element {
    let nav = use_navigator();
    rsx! {
        button {
            class: "reveal text-left {theme::panel()} hover:border-brand-blue/60 transition-all group",
            style: stagger_style(index, STAGGER),
            onclick: move |_| {
                nav.push(target.clone());
            },
            span { class: "text-4xl", "{icon}" }
            h3 { class: "mt-6 text-xl font-black uppercase tracking-tight group-hover:text-brand-blue", "{title}" }
            p { class: "mt-2 text-sm text-slate-400", "{body}" }
            p { class: "mt-6 text-[10px] font-black uppercase tracking-widest text-brand-blue", "Open module →" }
        }
    }
}
