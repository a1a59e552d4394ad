use dioxus::prelude::*;

use crate::{
    app::connect,
    domain::{AppState, DelayForm, DelayPrediction, OptionsSource, ResultSlot},
    infra::config::ClientConfig,
    ui::{
        animation::Easing,
        components::{
            toast::{push_toast, ToastKind, ToastMessage},
            CountUp, ResultPlaceholder, RiskBadge, SelectField, Spinner,
        },
        pages::fetch_options,
        theme,
    },
};

const PREDICTION_FAILED: &str =
    "Failed to predict delay. Check the backend connection or session token.";

#[component]
pub fn DelayPredictorPage() -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let config = use_context::<ClientConfig>();

    let mut form = use_signal(DelayForm::default);
    let mut result = use_signal(ResultSlot::<DelayPrediction>::default);

    let options = use_resource({
        let config = config.clone();
        move || {
            let config = config.clone();
            async move {
                let options = fetch_options(&config, OptionsSource::Delay).await;
                form.with_mut(|f| f.apply_options(&options));
                options
            }
        }
    });
    let options = options().unwrap_or_default();

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let request = form();
        if let Err(err) = request.validate() {
            push_toast(toasts, ToastKind::Error, err.to_string());
            return;
        }
        let Some(client) = connect(&config, toasts) else {
            return;
        };
        let session = state.with(|st| st.session.clone());

        result.with_mut(|slot| slot.begin());
        spawn(async move {
            let answer = match client.predict_delay(&session, &request).await {
                Ok(prediction) => {
                    tracing::info!(
                        score = prediction.risk_score,
                        level = %prediction.risk_level(),
                        "delay prediction received"
                    );
                    state.with_mut(|st| st.record_prediction());
                    Some(prediction)
                }
                Err(err) => {
                    push_toast(toasts, ToastKind::Error, err.user_message(PREDICTION_FAILED));
                    None
                }
            };
            result.with_mut(|slot| slot.settle(answer));
        });
    };

    let current = form();
    let slot = result();
    let busy = slot.is_pending();

    rsx! {
        div { class: "space-y-10",
            header { class: "reveal",
                h2 { class: "{theme::page_title()}", "Delay Predictor" }
                p { class: "{theme::page_subtitle()} mt-2", "Departure risk analysis" }
            }

            div { class: "grid grid-cols-2 gap-10 items-stretch",
                form { class: "reveal-left {theme::panel()}", onsubmit: on_submit,
                    div { class: "grid grid-cols-2 gap-6",
                        SelectField {
                            label: "Airline".to_string(),
                            placeholder: "Select airline".to_string(),
                            options: options.airlines.clone(),
                            value: current.airline.clone(),
                            onchange: move |value: String| form.with_mut(|f| f.airline = value),
                        }
                        SelectField {
                            label: "Origin".to_string(),
                            placeholder: "From".to_string(),
                            options: options.cities.clone(),
                            value: current.origin.clone(),
                            onchange: move |value: String| form.with_mut(|f| f.origin = value),
                            class: "col-span-1".to_string(),
                        }
                        SelectField {
                            label: "Destination".to_string(),
                            placeholder: "To".to_string(),
                            options: options.cities.clone(),
                            value: current.destination.clone(),
                            onchange: move |value: String| form.with_mut(|f| f.destination = value),
                            class: "col-span-1".to_string(),
                        }
                        div {
                            label { class: "{theme::label_class()}", "Date" }
                            input {
                                class: "{theme::input_class()}",
                                r#type: "date",
                                value: "{current.date}",
                                oninput: move |evt: FormEvent| form.with_mut(|f| f.date = evt.value()),
                            }
                        }
                        div {
                            label { class: "{theme::label_class()}", "Departure Time" }
                            input {
                                class: "{theme::input_class()}",
                                r#type: "time",
                                value: "{current.time}",
                                oninput: move |evt: FormEvent| form.with_mut(|f| f.time = evt.value()),
                            }
                        }
                    }
                    button { class: "{theme::btn_primary()}", r#type: "submit", disabled: busy,
                        if busy {
                            Spinner {}
                            "Analysing..."
                        } else {
                            "Run Prediction"
                        }
                    }
                }

                div { class: "reveal-right",
                    if let Some(prediction) = slot.latest().cloned() {
                        DelayResult { prediction }
                    } else {
                        ResultPlaceholder {
                            icon: "🛰️".to_string(),
                            text: "Awaiting Telemetry...".to_string(),
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn DelayResult(prediction: DelayPrediction) -> Element {
    let danger = prediction.is_danger();
    let score_color = if danger { "text-brand-danger" } else { "text-green-400" };
    let probability = format!("{:.0}%", prediction.probability * 100.0);

    rsx! {
        div { class: "{theme::result_panel()} {theme::glow(danger)}",
            p { class: "{theme::label_class()}", "Risk Score" }
            CountUp {
                key: "{prediction.risk_score}",
                target: prediction.score_percent(),
                suffix: "%".to_string(),
                duration_ms: 1200,
                easing: Easing::Power3,
                class: format!("text-8xl font-black tracking-tighter flex items-baseline {score_color}"),
                suffix_class: "text-4xl".to_string(),
            }
            div { class: "mt-8 {theme::status_pill(danger)}", "STATUS: {prediction.prediction}" }
            div { class: "mt-6 flex items-center gap-4",
                RiskBadge { level: prediction.risk_level() }
                span { class: "text-[10px] font-bold uppercase tracking-widest text-slate-500",
                    "Delay probability {probability}"
                }
            }
        }
    }
}
