use std::time::Duration;

use dioxus::prelude::*;

use crate::{
    app::Route,
    infra::config::ClientConfig,
    ui::{animation::stagger_style, components::CountUp},
    util::version::version_label,
};

const STAGGER: Duration = Duration::from_millis(150);

const SAMPLE_REQUEST: &str = r#"POST /api/predict-delay
Authorization: Bearer <token>

{
  "airline": "Garuda Indonesia",
  "origin": "Jakarta",
  "destination": "Bali",
  "date": "2026-05-20",
  "time": "14:00"
}"#;

const SAMPLE_RESPONSE: &str = r#"{
  "prediction": "ON TIME",
  "probability": 0.12,
  "risk_score": 12.4
}"#;

struct Metric {
    target: u64,
    suffix: &'static str,
    label: &'static str,
}

static METRICS: [Metric; 4] = [
    Metric { target: 88, suffix: "%", label: "Model Accuracy" },
    Metric { target: 50_000, suffix: "+", label: "Flights Analysed" },
    Metric { target: 1_200, suffix: "+", label: "Routes Covered" },
    Metric { target: 2, suffix: "s", label: "Avg. Response" },
];

struct Feature {
    icon: &'static str,
    title: &'static str,
    body: &'static str,
}

static FEATURES: [Feature; 3] = [
    Feature {
        icon: "⏱️",
        title: "Delay Forecasting",
        body: "Score any scheduled departure for delay risk before you book.",
    },
    Feature {
        icon: "💲",
        title: "Fare Oracle",
        body: "Estimate ticket prices from airline, route and flight duration.",
    },
    Feature {
        icon: "🛰️",
        title: "Open API",
        body: "Every prediction is one authenticated HTTP call away.",
    },
];

#[component]
pub fn LandingPage() -> Element {
    let nav = use_navigator();
    let config = use_context::<ClientConfig>();
    let docs_url = config
        .base_url
        .join("docs")
        .map(|url| url.to_string())
        .unwrap_or_else(|_| config.base_url.to_string());

    rsx! {
        div { class: "min-h-screen bg-app-bg text-slate-100 font-sans overflow-x-hidden",
            nav { class: "flex items-center justify-between px-10 py-6 border-b border-app-border",
                div { class: "flex items-center gap-2",
                    span { class: "text-2xl float", "✈️" }
                    h1 { class: "text-xl font-black italic tracking-tighter",
                        "WINDBREAKER"
                        span { class: "text-brand-blue", ".AI" }
                    }
                }
                button {
                    class: "px-6 py-2 rounded-xl border border-brand-blue/40 text-brand-blue font-bold text-xs uppercase tracking-widest hover:bg-brand-blue hover:text-white transition-all",
                    onclick: move |_| { nav.push(Route::Login {}); },
                    "Control Panel"
                }
            }

            section { class: "max-w-5xl mx-auto px-10 pt-28 pb-20 text-center",
                p { class: "reveal text-[10px] font-black uppercase tracking-[0.3em] text-brand-blue mb-6",
                    style: stagger_style(0, STAGGER),
                    "Flight Intelligence Platform"
                }
                h2 { class: "reveal text-6xl font-black italic tracking-tighter leading-none mb-8",
                    style: stagger_style(1, STAGGER),
                    "Know Before"
                    br {}
                    span { class: "text-brand-blue", "You Fly." }
                }
                p { class: "reveal text-slate-400 max-w-2xl mx-auto mb-12",
                    style: stagger_style(2, STAGGER),
                    "Predict departure delays and estimate fares with models trained on historical flight data."
                }
                div { class: "reveal flex items-center justify-center gap-4",
                    style: stagger_style(3, STAGGER),
                    button {
                        class: "px-8 py-4 rounded-2xl bg-brand-blue text-white font-black uppercase tracking-widest text-xs shadow-xl shadow-brand-blue/30 hover:opacity-90 transition-all glow-blue",
                        onclick: move |_| { nav.push(Route::Dashboard {}); },
                        "Launch Platform"
                    }
                    a {
                        class: "px-8 py-4 rounded-2xl border border-app-border text-slate-300 font-black uppercase tracking-widest text-xs hover:border-brand-blue transition-all",
                        href: "{docs_url}",
                        target: "_blank",
                        "Documentation"
                    }
                }
            }

            section { class: "max-w-5xl mx-auto px-10 pb-24 grid grid-cols-4 gap-6",
                for (idx, metric) in METRICS.iter().enumerate() {
                    div {
                        key: "{metric.label}",
                        class: "reveal text-center p-6 rounded-3xl border border-app-border bg-slate-900/40",
                        style: stagger_style(idx, STAGGER),
                        CountUp { target: metric.target, suffix: metric.suffix.to_string() }
                        p { class: "mt-2 text-[10px] font-bold uppercase tracking-widest text-slate-500", "{metric.label}" }
                    }
                }
            }

            section { class: "max-w-5xl mx-auto px-10 pb-24 grid grid-cols-3 gap-6",
                for (idx, feature) in FEATURES.iter().enumerate() {
                    div {
                        key: "{feature.title}",
                        class: "reveal-left p-8 rounded-4xl border border-app-border bg-slate-900/40 hover:border-brand-blue/50 transition-all",
                        style: stagger_style(idx, STAGGER),
                        span { class: "text-3xl", "{feature.icon}" }
                        h3 { class: "mt-4 text-lg font-black uppercase tracking-tight", "{feature.title}" }
                        p { class: "mt-2 text-sm text-slate-400", "{feature.body}" }
                    }
                }
            }

            section { class: "max-w-5xl mx-auto px-10 pb-24 grid grid-cols-2 gap-6",
                div { class: "reveal-left",
                    p { class: "text-[10px] font-black uppercase tracking-widest text-slate-500 mb-3", "Request" }
                    pre { class: "p-6 rounded-3xl bg-black border border-app-border text-xs font-mono text-blue-300 overflow-x-auto", "{SAMPLE_REQUEST}" }
                }
                div { class: "reveal-right",
                    p { class: "text-[10px] font-black uppercase tracking-widest text-slate-500 mb-3", "Response" }
                    pre { class: "p-6 rounded-3xl bg-black border border-app-border text-xs font-mono text-green-300 overflow-x-auto", "{SAMPLE_RESPONSE}" }
                }
            }

            section { class: "max-w-3xl mx-auto px-10 pb-24 text-center",
                div { class: "reveal p-14 rounded-5xl border border-brand-blue/30 bg-gradient-to-b from-slate-900 to-black",
                    h2 { class: "text-4xl font-black italic tracking-tighter mb-4", "Ready for Takeoff?" }
                    p { class: "text-slate-400 mb-8", "Sign in to start scoring your next flight." }
                    button {
                        class: "px-10 py-4 rounded-2xl bg-brand-blue text-white font-black uppercase tracking-widest text-xs hover:opacity-90 transition-all",
                        onclick: move |_| { nav.push(Route::Login {}); },
                        "Get Started"
                    }
                }
            }

            footer { class: "border-t border-app-border px-10 py-8 flex items-center justify-between text-[10px] font-mono text-slate-600",
                span { "WINDBREAKER.AI" }
                span { "{version_label()}" }
            }
        }
    }
}
