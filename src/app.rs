use dioxus::{prelude::*, signals::Signal};

use crate::{
    domain::{AppState, Session},
    infra::{api::WindbreakerClient, config::ClientConfig},
    ui::{
        components::toast::{push_toast, Toast, ToastKind, ToastMessage},
        pages::{
            DashboardPage, DelayPredictorPage, ForgotPasswordPage, LandingPage, LoginPage,
            PriceOraclePage, RegisterPage,
        },
        shell::Shell,
    },
    util::{
        assets,
        persistence::{clear_persisted_state, load_persisted_state, save_persisted_state},
        version::BackendStatus,
    },
};

#[derive(Routable, Clone, PartialEq, Debug)]
pub enum Route {
    #[route("/")]
    Landing {},
    #[route("/login")]
    Login {},
    #[route("/register")]
    Register {},
    #[route("/forgot-password")]
    ForgotPassword {},
    #[route("/dashboard")]
    Dashboard {},
    #[route("/delay-predictor")]
    DelayPredictor {},
    #[redirect("/price-oracle", || Route::PriceOracle {})]
    #[route("/oracle")]
    PriceOracle {},
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

impl Route {
    /// Pages that need a stored session token.
    pub fn is_protected(&self) -> bool {
        matches!(
            self,
            Route::Dashboard {} | Route::DelayPredictor {} | Route::PriceOracle {}
        )
    }
}

/// Where to send the user instead of `route`, if anywhere.
pub fn guard_redirect(route: &Route, session: &Session) -> Option<Route> {
    if route.is_protected() && !session.is_authenticated() {
        Some(Route::Login {})
    } else {
        None
    }
}

#[component]
pub fn App() -> Element {
    let state = use_signal(AppState::default);
    use_hook({
        let mut state = state;
        move || {
            if let Some(saved) = load_persisted_state() {
                state.with_mut(|st| st.apply_persisted(saved));
            }
        }
    });
    use_context_provider(|| state);

    let toasts = use_signal(Vec::<ToastMessage>::new);
    use_context_provider(|| toasts);

    let config = use_hook(|| {
        ClientConfig::from_env().unwrap_or_else(|err| {
            tracing::warn!("invalid API configuration, using defaults: {err}");
            ClientConfig::default()
        })
    });
    use_context_provider(|| config.clone());

    let _health = use_resource(move || {
        let config = config.clone();
        async move { check_backend(state, &config).await }
    });

    rsx! {
        document::Link { rel: "icon", href: assets::favicon_data_uri() }
        document::Style { "{assets::main_css()}" }
        document::Style { "{assets::tailwind_css()}" }
        Router::<Route> {}
        Toast {}
    }
}

/// Builds a client for one request, raising a toast when that is impossible.
pub fn connect(config: &ClientConfig, toasts: Signal<Vec<ToastMessage>>) -> Option<WindbreakerClient> {
    match WindbreakerClient::new(config) {
        Ok(client) => Some(client),
        Err(err) => {
            push_toast(
                toasts,
                ToastKind::Error,
                format!("Failed to initialise API client: {err}"),
            );
            None
        }
    }
}

pub fn persist_session(state: &Signal<AppState>) {
    let snapshot = state.with(|st| st.to_persisted());
    if let Err(err) = save_persisted_state(&snapshot) {
        tracing::warn!("failed to persist session: {err}");
    }
}

pub fn sign_out(state: &mut Signal<AppState>) {
    state.with_mut(|st| st.sign_out());
    if let Err(err) = clear_persisted_state() {
        tracing::warn!("failed to clear stored session: {err}");
    }
    tracing::info!("session terminated");
}

async fn check_backend(mut state: Signal<AppState>, config: &ClientConfig) -> BackendStatus {
    let status = match WindbreakerClient::new(config) {
        Ok(client) => match client.health().await {
            Ok(status) => status,
            Err(err) => {
                tracing::warn!(url = %client.base_url(), "health check failed: {err}");
                BackendStatus::offline()
            }
        },
        Err(err) => {
            tracing::warn!("cannot build API client: {err}");
            BackendStatus::offline()
        }
    };
    tracing::info!("backend status: {status}");
    state.with_mut(|st| st.backend = Some(status.clone()));
    status
}

#[component]
pub fn Landing() -> Element {
    rsx! { LandingPage {} }
}

#[component]
pub fn Login() -> Element {
    rsx! { LoginPage {} }
}

#[component]
pub fn Register() -> Element {
    rsx! { RegisterPage {} }
}

#[component]
pub fn ForgotPassword() -> Element {
    rsx! { ForgotPasswordPage {} }
}

#[component]
pub fn Dashboard() -> Element {
    rsx! { Shell { DashboardPage {} } }
}

#[component]
pub fn DelayPredictor() -> Element {
    rsx! { Shell { DelayPredictorPage {} } }
}

#[component]
pub fn PriceOracle() -> Element {
    rsx! { Shell { PriceOraclePage {} } }
}

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    tracing::debug!("no page at /{}, returning to landing", segments.join("/"));
    let nav = use_navigator();
    use_effect(move || {
        nav.replace(Route::Landing {});
    });
    rsx! {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn protected_routes_redirect_without_session() {
        let anonymous = Session::default();
        for route in [
            Route::Dashboard {},
            Route::DelayPredictor {},
            Route::PriceOracle {},
        ] {
            assert_eq!(guard_redirect(&route, &anonymous), Some(Route::Login {}));
        }
    }

    #[test]
    fn public_routes_never_redirect() {
        let anonymous = Session::default();
        for route in [
            Route::Landing {},
            Route::Login {},
            Route::Register {},
            Route::ForgotPassword {},
        ] {
            assert_eq!(guard_redirect(&route, &anonymous), None);
        }
    }

    #[test]
    fn stored_token_opens_protected_routes() {
        let session = Session::new("tok", "Ana");
        assert_eq!(guard_redirect(&Route::Dashboard {}, &session), None);
    }

    #[test]
    fn route_paths() {
        assert_eq!(Route::Dashboard {}.to_string(), "/dashboard");
        assert_eq!(Route::PriceOracle {}.to_string(), "/oracle");
        assert_eq!("/oracle".parse::<Route>().ok(), Some(Route::PriceOracle {}));
        assert_eq!(
            "/price-oracle".parse::<Route>().ok(),
            Some(Route::PriceOracle {})
        );
        assert_eq!(
            "/delay-predictor".parse::<Route>().ok(),
            Some(Route::DelayPredictor {})
        );
    }
}
