use dioxus::prelude::*;

use crate::{
    app::{connect, persist_session, Route},
    domain::{AppState, LoginForm},
    infra::config::ClientConfig,
    ui::{
        components::{toast::ToastMessage, Spinner},
        theme,
    },
};

const LOGIN_FAILED: &str = "Authentication failed.";

#[component]
pub fn LoginPage() -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let config = use_context::<ClientConfig>();
    let nav = use_navigator();

    let mut form = use_signal(LoginForm::default);
    let mut error = use_signal(|| None::<String>);
    let mut loading = use_signal(|| false);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let credentials = form();
        if let Err(err) = credentials.validate() {
            error.set(Some(err.to_string()));
            return;
        }
        let Some(client) = connect(&config, toasts) else {
            return;
        };

        error.set(None);
        loading.set(true);
        spawn(async move {
            match client.login(&credentials).await {
                Ok(session) => {
                    state.with_mut(|st| st.sign_in(session));
                    persist_session(&state);
                    nav.push(Route::Dashboard {});
                }
                Err(err) => {
                    tracing::warn!("login failed: {err}");
                    error.set(Some(err.user_message(LOGIN_FAILED)));
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
                    span { class: "text-4xl float inline-block", "✈️" }
                    h1 { class: "mt-4 text-3xl font-black italic tracking-tighter",
                        "WINDBREAKER"
                        span { class: "text-brand-blue", ".AI" }
                    }
                    p { class: "{theme::page_subtitle()} mt-2", "Operator Authentication" }
                }

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
                        div { class: "flex items-center justify-between",
                            label { class: "{theme::label_class()}", "Password" }
                            Link { class: "text-[10px] font-bold text-brand-blue mb-3", to: Route::ForgotPassword {}, "Forgot?" }
                        }
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
                            "Verifying..."
                        } else {
                            "Sign In"
                        }
                    }
                    p { class: "text-center text-xs text-slate-500",
                        "No account yet? "
                        Link { class: "text-brand-blue font-bold", to: Route::Register {}, "Register" }
                    }
                }
            }
        }
    }
}
