//! Plain data and rules behind the pages; nothing here touches the network.

pub mod app_state;
pub mod forms;
pub mod options;
pub mod prediction;
pub mod session;

pub use app_state::{AppState, PersistedState};
pub use forms::{DelayForm, LoginForm, PriceForm, RegisterForm, ResetForm};
pub use options::{FlightOptions, OptionsSource};
pub use prediction::{DelayPrediction, FareQuote, PriceEstimate, ResultSlot, RiskLevel};
pub use session::Session;
