use dioxus::prelude::*;

use crate::{
    app::connect,
    domain::{AppState, FareQuote, OptionsSource, PriceForm, ResultSlot},
    infra::config::ClientConfig,
    ui::{
        components::{
            toast::{push_toast, ToastKind, ToastMessage},
            ResultPlaceholder, SelectField, Spinner,
        },
        pages::fetch_options,
        theme,
    },
};

const ESTIMATE_FAILED: &str = "Failed to estimate the fare. Check the backend connection.";

#[component]
pub fn PriceOraclePage() -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let config = use_context::<ClientConfig>();

    let mut form = use_signal(PriceForm::default);
    let mut quote = use_signal(ResultSlot::<FareQuote>::default);

    let options = use_resource({
        let config = config.clone();
        move || {
            let config = config.clone();
            async move {
                let options = fetch_options(&config, OptionsSource::Price).await;
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

        quote.with_mut(|slot| slot.begin());
        spawn(async move {
            let answer = match client.predict_price(&session, &request).await {
                Ok(estimate) => {
                    tracing::info!(price = estimate.estimated_price, "fare estimate received");
                    state.with_mut(|st| st.record_prediction());
                    Some(FareQuote {
                        form: request,
                        estimate,
                    })
                }
                Err(err) => {
                    push_toast(toasts, ToastKind::Error, err.user_message(ESTIMATE_FAILED));
                    None
                }
            };
            quote.with_mut(|slot| slot.settle(answer));
        });
    };

    let current = form();
    let slot = quote();
    let busy = slot.is_pending();

    rsx! {
        div { class: "space-y-10",
            header { class: "reveal",
                h2 { class: "{theme::page_title()}", "Price Oracle" }
                p { class: "{theme::page_subtitle()} mt-2", "Fare estimation engine" }
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
                        div { class: "col-span-2",
                            label { class: "{theme::label_class()}", "Flight Duration (minutes)" }
                            input {
                                class: "{theme::input_class()}",
                                r#type: "number",
                                min: "1",
                                value: "{current.duration_mins}",
                                oninput: move |evt: FormEvent| form.with_mut(|f| f.set_duration(&evt.value())),
                            }
                        }
                    }
                    button { class: "{theme::btn_primary()}", r#type: "submit", disabled: busy,
                        if busy {
                            Spinner {}
                            "Consulting Oracle..."
                        } else {
                            "Estimate Fare"
                        }
                    }
                }

                div { class: "reveal-right",
                    if let Some(fare) = slot.latest().cloned() {
                        div { class: "{theme::result_panel()} glow-blue",
                            p { class: "{theme::label_class()}", "Estimated Fare" }
                            p { class: "text-7xl font-black tracking-tighter text-white",
                                span { class: "text-brand-blue", "$" }
                                "{fare.estimate.display()}"
                            }
                            p { class: "mt-6 text-[10px] font-bold uppercase tracking-widest text-slate-500",
                                "{fare.route_caption()}"
                            }
                        }
                    } else {
                        ResultPlaceholder {
                            icon: "💲".to_string(),
                            text: "Awaiting Flight Parameters...".to_string(),
                        }
                    }
                }
            }
        }
    }
}
