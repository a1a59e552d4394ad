use dioxus::prelude::*;

use crate::app::{guard_redirect, sign_out, Route};
use crate::domain::AppState;
use crate::ui::components::toast::{push_toast, ToastKind, ToastMessage};
use crate::ui::theme;
use crate::util::version::version_label;

/// Sidebar layout for the signed-in pages. Renders nothing and sends the
/// user to the login page when no session is stored.
#[component]
pub fn Shell(children: Element) -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let current_route = use_route::<Route>();
    let nav = use_navigator();

    let redirect = state.with(|st| guard_redirect(&current_route, &st.session));
    use_effect({
        let route = current_route.clone();
        move || {
            if let Some(target) = state.with(|st| guard_redirect(&route, &st.session)) {
                tracing::info!("no stored session for {route}, redirecting to {target}");
                nav.replace(target);
            }
        }
    });

    if redirect.is_some() {
        return rsx! {};
    }

    let user_name = state.with(|st| st.session.display_name("Operator").to_string());
    let backend = state.with(|st| st.backend.clone());
    let (status_icon, status_text) = match backend {
        Some(ref status) if status.online && status.is_supported() => ("🛡️", "Network Secured"),
        Some(ref status) if status.online => ("⚠️", "Backend Version Mismatch"),
        Some(_) => ("⛔", "Backend Offline"),
        None => ("⏳", "Connecting"),
    };

    let on_logout = move |_| {
        sign_out(&mut state);
        push_toast(toasts, ToastKind::Info, "Session terminated.");
        nav.push(Route::Login {});
    };

    rsx! {
        div { class: "flex min-h-screen bg-app-bg text-slate-100 font-sans",
            aside { class: "w-64 border-r border-app-border flex flex-col p-6 fixed h-full bg-app-bg z-50",
                div { class: "flex items-center gap-2 mb-10 px-2 cursor-pointer",
                    onclick: move |_| { nav.push(Route::Landing {}); },
                    span { class: "text-2xl", "✈️" }
                    h1 { class: "text-xl font-black italic tracking-tighter",
                        "WINDBREAKER"
                        span { class: "text-brand-blue", ".AI" }
                    }
                }

                nav { class: "flex-1 space-y-2",
                    p { class: "px-4 text-[10px] font-bold uppercase tracking-[0.2em] text-slate-500 mb-4", "Core Modules" }
                    NavButton { active: matches!(current_route, Route::Dashboard {}), target: Route::Dashboard {}, icon: "🧭", label: "Overview Hub" }
                    NavButton { active: matches!(current_route, Route::DelayPredictor {}), target: Route::DelayPredictor {}, icon: "⏱️", label: "Delay Predictor" }
                    NavButton { active: matches!(current_route, Route::PriceOracle {}), target: Route::PriceOracle {}, icon: "💲", label: "Price Oracle" }
                }

                div { class: "border-t border-app-border pt-6 mt-6",
                    div { class: "flex items-center gap-3 px-2 mb-6",
                        div { class: "w-10 h-10 rounded-full bg-brand-blue/10 flex items-center justify-center border border-brand-blue/20", "👤" }
                        div { class: "overflow-hidden",
                            p { class: "text-[10px] font-black text-nav-fg uppercase tracking-widest leading-none mb-1", "Active User" }
                            p { class: "text-sm font-bold truncate", "{user_name}" }
                        }
                    }
                    button {
                        class: "w-full flex items-center gap-3 px-4 py-3 rounded-xl font-bold text-brand-danger hover:bg-brand-danger/10 transition-all",
                        onclick: on_logout,
                        span { "⏻" }
                        span { class: "text-sm", "Terminate" }
                    }
                    p { class: "mt-4 px-2 text-[10px] font-mono text-slate-600", "{version_label()}" }
                }
            }

            main { class: "ml-64 flex-1 flex flex-col overflow-hidden relative",
                header { class: "h-20 border-b border-app-border flex items-center justify-between px-8 bg-slate-900/20 backdrop-blur-sm z-10",
                    div { class: "flex items-center gap-3",
                        span { "{status_icon}" }
                        span { class: "text-xs font-mono text-slate-400 uppercase tracking-widest", "{status_text}" }
                    }
                    div { class: "text-right",
                        p { class: "text-[10px] font-bold uppercase tracking-[0.2em] text-slate-500", "Active Operator" }
                        p { class: "text-sm font-bold text-slate-200", "{user_name}" }
                    }
                }
                div { class: "flex-1 overflow-y-auto p-10 z-10",
                    {children}
                }
            }
        }
    }
}

#[component]
fn NavButton(active: bool, target: Route, icon: &'static str, label: &'static str) -> Element {
    let nav = use_navigator();
    rsx! {
        button {
            class: "{theme::nav_link(active)}",
            onclick: move |_| {
                nav.push(target.clone());
            },
            span { "{icon}" }
            span { "{label}" }
        }
    }
}
