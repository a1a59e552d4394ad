//! Thin asynchronous client for the Windbreaker prediction service.
//!
//! - Option listings, delay and fare predictions, and the account endpoints.
//! - Non-2xx responses are turned into [`ApiError::Rejected`] carrying the
//!   backend's `detail` message when it sent one.

use reqwest::{Client, RequestBuilder, Response, Url};
use serde::{de::DeserializeOwned, Deserialize};
use serde_json::Value;
use thiserror::Error;

use crate::domain::{
    DelayForm, DelayPrediction, FlightOptions, LoginForm, OptionsSource, PriceEstimate, PriceForm,
    RegisterForm, ResetForm, Session,
};
use crate::infra::config::ClientConfig;
use crate::util::version::BackendStatus;

const USER_AGENT: &str = concat!("windbreaker/", env!("CARGO_PKG_VERSION"));

/// Shown whenever the backend could not be reached at all.
pub const CONNECTION_FAILED: &str = "Server connection failed.";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("http request error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("request rejected with status {status}: {}", .detail.as_deref().unwrap_or("no detail"))]
    Rejected { status: u16, detail: Option<String> },
    #[error("no active session")]
    MissingToken,
}

impl ApiError {
    pub fn detail(&self) -> Option<&str> {
        match self {
            ApiError::Rejected { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }

    /// One line for the user: the backend's own explanation when present,
    /// a connection notice for transport failures, otherwise `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        if let Some(detail) = self.detail() {
            return detail.to_string();
        }
        match self {
            ApiError::Http(err) if !err.is_decode() => CONNECTION_FAILED.to_string(),
            _ => fallback.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
    #[serde(default)]
    pub user_name: Option<String>,
}

impl From<LoginResponse> for Session {
    fn from(value: LoginResponse) -> Self {
        Session {
            token: Some(value.access_token),
            user_name: value.user_name,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct PriceResponse {
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    estimated_price: Option<f64>,
    #[serde(default)]
    detail: Option<String>,
}

#[derive(Debug, Deserialize)]
struct HealthResponse {
    status: String,
    #[serde(default)]
    system: Option<String>,
    #[serde(default)]
    version: Option<String>,
}

#[derive(Clone, Debug)]
pub struct WindbreakerClient {
    http: Client,
    base_url: Url,
}

impl WindbreakerClient {
    pub fn new(config: &ClientConfig) -> Result<Self, ApiError> {
        let builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.user_agent(USER_AGENT).timeout(config.timeout);
        let http = builder.build()?;
        Ok(Self {
            http,
            base_url: config.base_url.clone(),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub async fn get_options(&self, source: OptionsSource) -> Result<FlightOptions, ApiError> {
        let url = self.url(source.path())?;
        tracing::debug!(%url, "requesting option lists");
        let options: FlightOptions = self.send(self.http.get(url)).await?;
        tracing::info!(
            airlines = options.airlines.len(),
            cities = options.cities.len(),
            "loaded {:?} options",
            source
        );
        Ok(options)
    }

    pub async fn predict_delay(
        &self,
        session: &Session,
        form: &DelayForm,
    ) -> Result<DelayPrediction, ApiError> {
        let token = session.bearer_token().ok_or(ApiError::MissingToken)?;
        let url = self.url("api/predict-delay")?;
        tracing::info!(airline = %form.airline, origin = %form.origin, destination = %form.destination, "requesting delay prediction");
        self.send(self.http.post(url).bearer_auth(token).json(form))
            .await
    }

    pub async fn predict_price(
        &self,
        session: &Session,
        form: &PriceForm,
    ) -> Result<PriceEstimate, ApiError> {
        let token = session.bearer_token().ok_or(ApiError::MissingToken)?;
        let url = self.url("api/predict-price")?;
        tracing::info!(airline = %form.airline, duration = form.duration_mins, "requesting fare estimate");
        let response: PriceResponse = self
            .send(self.http.post(url).bearer_auth(token).json(form))
            .await?;

        match response.estimated_price {
            Some(estimated_price) => Ok(PriceEstimate { estimated_price }),
            None => Err(ApiError::Rejected {
                status: 200,
                detail: response.detail.or(response.status),
            }),
        }
    }

    pub async fn login(&self, form: &LoginForm) -> Result<Session, ApiError> {
        let url = self.url("api/login")?;
        let fields = [
            ("username", form.email.trim()),
            ("password", form.password.as_str()),
        ];
        let response: LoginResponse = self.send(self.http.post(url).form(&fields)).await?;
        tracing::info!("signed in");
        Ok(response.into())
    }

    pub async fn register(&self, form: &RegisterForm) -> Result<MessageResponse, ApiError> {
        let url = self.url("api/register")?;
        self.send(self.http.post(url).json(form)).await
    }

    pub async fn forgot_password(&self, form: &ResetForm) -> Result<MessageResponse, ApiError> {
        let url = self.url("api/forgot-password")?;
        self.send(self.http.post(url).json(form)).await
    }

    pub async fn health(&self) -> Result<BackendStatus, ApiError> {
        let url = self.url("")?;
        let health: HealthResponse = self.send(self.http.get(url)).await?;
        Ok(BackendStatus::from_health(
            &health.status,
            health.system,
            health.version.as_deref(),
        ))
    }

    async fn send<T>(&self, builder: RequestBuilder) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        let response = builder.send().await?;
        if !response.status().is_success() {
            let error = read_rejection(response).await;
            tracing::warn!("backend rejected request: {error}");
            return Err(error);
        }
        Ok(response.json::<T>().await?)
    }

    fn url(&self, path: &str) -> Result<Url, url::ParseError> {
        self.base_url.join(path)
    }
}

async fn read_rejection(response: Response) -> ApiError {
    let status = response.status().as_u16();
    let detail = response
        .json::<Value>()
        .await
        .ok()
        .and_then(|body| extract_detail(&body));
    ApiError::Rejected { status, detail }
}

/// `detail` is a plain string for handled errors and a list of
/// `{loc, msg, type}` objects for request validation failures.
fn extract_detail(body: &Value) -> Option<String> {
    match body.get("detail")? {
        Value::String(detail) => Some(detail.clone()),
        Value::Array(items) => items
            .iter()
            .find_map(|item| item.get("msg").and_then(Value::as_str))
            .map(str::to_string),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use wiremock::matchers::{body_json, body_string_contains, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn client_for(server: &MockServer) -> WindbreakerClient {
        let config = ClientConfig::with_base_url(&server.uri()).unwrap();
        WindbreakerClient::new(&config).unwrap()
    }

    fn delay_form() -> DelayForm {
        DelayForm {
            airline: "DL".into(),
            origin: "Atlanta, GA".into(),
            destination: "Los Angeles, CA".into(),
            ..DelayForm::default()
        }
    }

    #[tokio::test]
    async fn delay_prediction_posts_form_once_with_bearer() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/predict-delay"))
            .and(header("authorization", "Bearer tok-1"))
            .and(body_json(json!({
                "airline": "DL",
                "origin": "Atlanta, GA",
                "destination": "Los Angeles, CA",
                "date": "2026-05-20",
                "time": "14:00",
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "prediction": "DELAYED",
                "probability": 0.7312,
                "risk_score": 73,
            })))
            .expect(1)
            .mount(&server)
            .await;

        let session = Session::new("tok-1", "Ana");
        let prediction = client_for(&server)
            .predict_delay(&session, &delay_form())
            .await
            .unwrap();

        assert_eq!(prediction.prediction, "DELAYED");
        assert_eq!(prediction.risk_score, 73.0);
    }

    #[tokio::test]
    async fn prediction_without_session_never_hits_network() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let result = client_for(&server)
            .predict_delay(&Session::default(), &delay_form())
            .await;
        assert!(matches!(result, Err(ApiError::MissingToken)));
    }

    #[tokio::test]
    async fn options_come_from_selected_listing() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/price-options"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "airlines": ["Garuda Indonesia", "Lion Air"],
                "cities": ["Denpasar", "Jakarta"],
            })))
            .mount(&server)
            .await;

        let options = client_for(&server)
            .get_options(OptionsSource::Price)
            .await
            .unwrap();
        assert_eq!(options.default_airline(), Some("Garuda Indonesia"));
        assert_eq!(options.cities.len(), 2);
    }

    #[tokio::test]
    async fn price_estimate_and_status_detail_payloads() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/predict-price"))
            .and(body_json(json!({
                "airline": "Lion Air",
                "origin": "Jakarta",
                "destination": "Denpasar",
                "duration_mins": 110,
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": "success",
                "estimated_price": 1234.5,
            })))
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/api/predict-price"))
            .and(body_string_contains("\"duration_mins\":5"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": "error",
                "detail": "Unknown route",
            })))
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/api/predict-price"))
            .and(body_string_contains("\"duration_mins\":7"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": "Model not loaded",
            })))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let session = Session::new("tok", "Ana");
        let mut form = PriceForm {
            airline: "Lion Air".into(),
            origin: "Jakarta".into(),
            destination: "Denpasar".into(),
            duration_mins: 110,
        };

        let estimate = client.predict_price(&session, &form).await.unwrap();
        assert_eq!(estimate.display(), "1,234.5");

        form.duration_mins = 5;
        let err = client.predict_price(&session, &form).await.unwrap_err();
        assert_eq!(err.detail(), Some("Unknown route"));

        form.duration_mins = 7;
        let err = client.predict_price(&session, &form).await.unwrap_err();
        assert!(matches!(err, ApiError::Rejected { status: 200, .. }));
        assert_eq!(err.user_message("fallback"), "Model not loaded");
    }

    #[tokio::test]
    async fn login_sends_form_encoded_credentials() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/login"))
            .and(header("content-type", "application/x-www-form-urlencoded"))
            .and(body_string_contains("username=pilot%40windbreaker.ai"))
            .and(body_string_contains("password=secret"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "access_token": "jwt-token",
                "token_type": "bearer",
                "user_name": "Captain John Doe",
            })))
            .expect(1)
            .mount(&server)
            .await;

        let form = LoginForm {
            email: " pilot@windbreaker.ai ".into(),
            password: "secret".into(),
        };
        let session = client_for(&server).login(&form).await.unwrap();
        assert_eq!(session.bearer_token(), Some("jwt-token"));
        assert_eq!(session.display_name("Operator"), "Captain John Doe");
    }

    #[tokio::test]
    async fn rejection_surfaces_backend_detail() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/login"))
            .respond_with(
                ResponseTemplate::new(401).set_body_json(json!({"detail": "Wrong email or password"})),
            )
            .mount(&server)
            .await;

        let err = client_for(&server)
            .login(&LoginForm {
                email: "a@b.c".into(),
                password: "x".into(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Rejected { status: 401, .. }));
        assert_eq!(err.user_message("Authentication failed."), "Wrong email or password");
    }

    #[tokio::test]
    async fn validation_errors_use_first_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/register"))
            .respond_with(ResponseTemplate::new(422).set_body_json(json!({
                "detail": [
                    {"loc": ["body", "email"], "msg": "value is not a valid email address", "type": "value_error"}
                ]
            })))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .register(&RegisterForm::default())
            .await
            .unwrap_err();
        assert_eq!(err.detail(), Some("value is not a valid email address"));
    }

    #[tokio::test]
    async fn missing_detail_uses_fallback() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/forgot-password"))
            .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .forgot_password(&ResetForm::default())
            .await
            .unwrap_err();
        assert_eq!(err.user_message("Reset failed."), "Reset failed.");
    }

    #[tokio::test]
    async fn unreachable_backend_reports_connection_failure() {
        let config = ClientConfig::with_base_url("http://127.0.0.1:1").unwrap();
        let client = WindbreakerClient::new(&config).unwrap();
        let err = client.get_options(OptionsSource::Delay).await.unwrap_err();
        assert!(matches!(err, ApiError::Http(_)));
        assert_eq!(err.user_message("whatever"), CONNECTION_FAILED);
    }

    #[tokio::test]
    async fn health_reports_backend_version() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": "online",
                "system": "WINDBREAKER.AI",
                "version": "2.0.0",
            })))
            .mount(&server)
            .await;

        let status = client_for(&server).health().await.unwrap();
        assert!(status.online);
        assert!(status.is_supported());
    }
}
