pub mod dashboard;
pub mod delay_predictor;
pub mod forgot_password;
pub mod landing;
pub mod login;
pub mod price_oracle;
pub mod register;

pub use dashboard::DashboardPage;
pub use delay_predictor::DelayPredictorPage;
pub use forgot_password::ForgotPasswordPage;
pub use landing::LandingPage;
pub use login::LoginPage;
pub use price_oracle::PriceOraclePage;
pub use register::RegisterPage;

use crate::{
    domain::{FlightOptions, OptionsSource},
    infra::{api::WindbreakerClient, config::ClientConfig},
};

/// Loads the dropdown lists for a prediction page, falling back to the
/// dataset-wide listing when the model listing is empty. Failures leave the
/// lists empty so the form still renders.
pub(crate) async fn fetch_options(config: &ClientConfig, source: OptionsSource) -> FlightOptions {
    let client = match WindbreakerClient::new(config) {
        Ok(client) => client,
        Err(err) => {
            tracing::error!("cannot build API client: {err}");
            return FlightOptions::default();
        }
    };
    match client.get_options(source).await {
        Ok(options) if !options.is_empty() || source == OptionsSource::General => options,
        Ok(_) => {
            tracing::warn!("{source:?} option listing is empty, using the general listing");
            fetch_general(&client).await
        }
        Err(err) => {
            tracing::error!("failed to load {source:?} options: {err}");
            FlightOptions::default()
        }
    }
}

async fn fetch_general(client: &WindbreakerClient) -> FlightOptions {
    client
        .get_options(OptionsSource::General)
        .await
        .unwrap_or_else(|err| {
            tracing::error!("failed to load general options: {err}");
            FlightOptions::default()
        })
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn config_for(server: &MockServer) -> ClientConfig {
        ClientConfig::with_base_url(&server.uri()).unwrap()
    }

    #[tokio::test]
    async fn empty_model_listing_falls_back_to_general() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/delay-options"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({ "airlines": [], "cities": [] })),
            )
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/options"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({ "airlines": ["AA"], "cities": ["X"] })),
            )
            .expect(1)
            .mount(&server)
            .await;

        let options = fetch_options(&config_for(&server), OptionsSource::Delay).await;
        assert_eq!(options.airlines, vec!["AA".to_string()]);
        assert_eq!(options.cities, vec!["X".to_string()]);
    }

    #[tokio::test]
    async fn failed_listing_leaves_lists_empty() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/price-options"))
            .respond_with(ResponseTemplate::new(500).set_body_json(json!({ "detail": "boom" })))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/options"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "airlines": ["AA"] })))
            .expect(0)
            .mount(&server)
            .await;

        let options = fetch_options(&config_for(&server), OptionsSource::Price).await;
        assert!(options.is_empty());
    }
}
