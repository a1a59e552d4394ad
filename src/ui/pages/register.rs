use dioxus::prelude::*;

use crate::{
    app::{connect, Route},
    domain::RegisterForm,
    infra::config::ClientConfig,
    ui::{
        components::{
            toast::{push_toast, ToastKind, ToastMessage},
            Spinner,
        },
        theme,
    },
};

const REGISTER_FAILED: &str = "Registration failed. Please check your details.";

#[component]
pub fn RegisterPage() -> Element {
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let config = use_context::<ClientConfig>();
    let nav = use_navigator();

    let mut form = use_signal(RegisterForm::default);
    let mut error = use_signal(|| None::<String>);
    let mut loading = use_signal(|| false);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let details = form();
        if let Err(err) = details.validate() {
            error.set(Some(err.to_string()));
            return;
        }
        let Some(client) = connect(&config, toasts) else {
            return;
        };

        error.set(None);
        loading.set(true);
        spawn(async move {
            match client.register(&details).await {
                Ok(reply) => {
                    let text = reply
                        .message
                        .unwrap_or_else(|| "Account created. Please sign in.".to_string());
                    push_toast(toasts, ToastKind::Success, text);
                    nav.push(Route::Login {});
                }
                Err(err) => {
                    tracing::warn!("registration failed: {err}");
                    error.set(Some(err.user_message(REGISTER_FAILED)));
                }
            }
            loading.set(false);
        });
    };

    let busy = loading();

    rsx! {
        div { class: "min-h-screen bg-app-bg text-slate-100 flex items-center justify-center p-6",
            div { class: "reveal w-full max-w-md",
                div { class: "text-center mb-10",
                    h1 { class: "text-3xl font-black italic tracking-tighter uppercase", "Join the Crew" }
                    p { class: "{theme::page_subtitle()} mt-2", "Create an operator account" }
                }

                form { class: "{theme::panel()} space-y-6", onsubmit: on_submit,
                    if let Some(message) = error() {
                        div { class: "{theme::error_box()}", role: "alert", "{message}" }
                    }
                    div {
                        label { class: "{theme::label_class()}", "Full Name" }
                        input {
                            class: "{theme::auth_input_class()}",
                            r#type: "text",
                            placeholder: "Amelia Earhart",
                            value: "{form().name}",
                            oninput: move |evt: FormEvent| form.with_mut(|f| f.name = evt.value()),
                        }
                    }
                    div {
                        label { class: "{theme::label_class()}", "Email" }
                        input {
                            class: "{theme::auth_input_class()}",
                            r#type: "email",
                            placeholder: "pilot@windbreaker.ai",
                            value: "{form().email}",
                            oninput: move |evt: FormEvent| form.with_mut(|f| f.email = evt.value()),
                        }
                    }
                    div {
                        label { class: "{theme::label_class()}", "Password" }
                        input {
                            class: "{theme::auth_input_class()}",
                            r#type: "password",
                            placeholder: "••••••••",
                            value: "{form().password}",
                            oninput: move |evt: FormEvent| form.with_mut(|f| f.password = evt.value()),
                        }
                    }
                    button { class: "{theme::btn_auth()}", r#type: "submit", disabled: busy,
                        if busy {
                            Spinner {}
                            "Creating account..."
                        } else {
                            "Register"
                        }
                    }
                    p { class: "text-center text-xs text-slate-500",
                        "Already registered? "
                        Link { class: "text-brand-blue font-bold", to: Route::Login {}, "Sign in" }
                    }
                }
            }
        }
    }
}
