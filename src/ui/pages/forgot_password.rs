use std::time::Duration;

use dioxus::prelude::*;
use tokio::time::sleep;

use crate::{
    app::{connect, Route},
    domain::ResetForm,
    infra::config::ClientConfig,
    ui::{
        components::{toast::ToastMessage, Spinner},
        theme,
    },
};

const RESET_FAILED: &str = "Reset failed. Email not found.";
const REDIRECT_AFTER: Duration = Duration::from_secs(3);

#[component]
pub fn ForgotPasswordPage() -> Element {
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let config = use_context::<ClientConfig>();
    let nav = use_navigator();

    let mut form = use_signal(ResetForm::default);
    let mut error = use_signal(|| None::<String>);
    let mut loading = use_signal(|| false);
    let mut success = use_signal(|| None::<String>);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let request = form();
        if let Err(err) = request.validate() {
            error.set(Some(err.to_string()));
            return;
        }
        let Some(client) = connect(&config, toasts) else {
            return;
        };

        error.set(None);
        loading.set(true);
        spawn(async move {
            match client.forgot_password(&request).await {
                Ok(reply) => {
                    loading.set(false);
                    success.set(Some(
                        reply
                            .message
                            .unwrap_or_else(|| "Password updated.".to_string()),
                    ));
                    sleep(REDIRECT_AFTER).await;
                    nav.push(Route::Login {});
                }
                Err(err) => {
                    tracing::warn!("password reset failed: {err}");
                    error.set(Some(err.user_message(RESET_FAILED)));
                    loading.set(false);
                }
            }
        });
    };

    let busy = loading();

    rsx! {
        div { class: "min-h-screen bg-app-bg text-slate-100 flex items-center justify-center p-6",
            div { class: "reveal w-full max-w-md",
                div { class: "text-center mb-10",
                    span { class: "text-4xl", "🔑" }
                    h1 { class: "mt-4 text-3xl font-black italic tracking-tighter uppercase", "Reset Access" }
                    p { class: "{theme::page_subtitle()} mt-2", "Set a new password for your account" }
                }

                if let Some(message) = success() {
                    div { class: "{theme::panel()} text-center space-y-4",
                        div { class: "{theme::success_box()}", role: "status", "{message}" }
                        p { class: "text-xs text-slate-500", "Returning to sign in..." }
                    }
                } else {
                    form { class: "{theme::panel()} space-y-6", onsubmit: on_submit,
                        if let Some(message) = error() {
                            div { class: "{theme::error_box()}", role: "alert", "{message}" }
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
                            label { class: "{theme::label_class()}", "New Password" }
                            input {
                                class: "{theme::auth_input_class()}",
                                r#type: "password",
                                placeholder: "••••••••",
                                value: "{form().new_password}",
                                oninput: move |evt: FormEvent| form.with_mut(|f| f.new_password = evt.value()),
                            }
                        }
                        button { class: "{theme::btn_auth()}", r#type: "submit", disabled: busy,
                            if busy {
                                Spinner {}
                                "Updating..."
                            } else {
                                "Update Password"
                            }
                        }
                        p { class: "text-center text-xs text-slate-500",
                            Link { class: "text-brand-blue font-bold", to: Route::Login {}, "Back to sign in" }
                        }
                    }
                }
            }
        }
    }
}
