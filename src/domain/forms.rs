//! Form state for the prediction and account pages.
//!
//! The prediction forms serialize directly into the request bodies the
//! backend expects, so field names follow the wire format.

use serde::Serialize;
use thiserror::Error;
use time::{macros::format_description, Date, Time};

use super::options::FlightOptions;

pub const DEFAULT_FLIGHT_DATE: &str = "2026-05-20";
pub const DEFAULT_FLIGHT_TIME: &str = "14:00";
pub const DEFAULT_DURATION_MINS: u32 = 120;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("{0} is required")]
    Missing(&'static str),
    #[error("invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),
    #[error("invalid time '{0}', expected HH:MM")]
    InvalidTime(String),
    #[error("duration must be greater than zero")]
    ZeroDuration,
    #[error("'{0}' is not a valid email address")]
    InvalidEmail(String),
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DelayForm {
    pub airline: String,
    pub origin: String,
    pub destination: String,
    pub date: String,
    pub time: String,
}

impl Default for DelayForm {
    fn default() -> Self {
        Self {
            airline: String::new(),
            origin: String::new(),
            destination: String::new(),
            date: DEFAULT_FLIGHT_DATE.to_string(),
            time: DEFAULT_FLIGHT_TIME.to_string(),
        }
    }
}

impl DelayForm {
    /// Preselects the first airline once options arrive, keeping any choice
    /// the user already made.
    pub fn apply_options(&mut self, options: &FlightOptions) {
        if self.airline.is_empty() {
            if let Some(first) = options.default_airline() {
                self.airline = first.to_string();
            }
        }
    }

    pub fn validate(&self) -> Result<(), FormError> {
        require("airline", &self.airline)?;
        require("origin", &self.origin)?;
        require("destination", &self.destination)?;
        parse_flight_date(&self.date)?;
        parse_flight_time(&self.time)?;
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PriceForm {
    pub airline: String,
    pub origin: String,
    pub destination: String,
    pub duration_mins: u32,
}

impl Default for PriceForm {
    fn default() -> Self {
        Self {
            airline: String::new(),
            origin: String::new(),
            destination: String::new(),
            duration_mins: DEFAULT_DURATION_MINS,
        }
    }
}

impl PriceForm {
    pub fn apply_options(&mut self, options: &FlightOptions) {
        if self.airline.is_empty() {
            if let Some(first) = options.default_airline() {
                self.airline = first.to_string();
            }
        }
    }

    pub fn set_duration(&mut self, raw: &str) {
        self.duration_mins = parse_duration(raw);
    }

    pub fn validate(&self) -> Result<(), FormError> {
        require("airline", &self.airline)?;
        require("origin", &self.origin)?;
        require("destination", &self.destination)?;
        if self.duration_mins == 0 {
            return Err(FormError::ZeroDuration);
        }
        Ok(())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn validate(&self) -> Result<(), FormError> {
        require_email(&self.email)?;
        require("password", &self.password)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl RegisterForm {
    pub fn validate(&self) -> Result<(), FormError> {
        require("name", &self.name)?;
        require_email(&self.email)?;
        require("password", &self.password)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ResetForm {
    pub email: String,
    pub new_password: String,
}

impl ResetForm {
    pub fn validate(&self) -> Result<(), FormError> {
        require_email(&self.email)?;
        require("new password", &self.new_password)
    }
}

pub fn parse_flight_date(raw: &str) -> Result<Date, FormError> {
    Date::parse(raw.trim(), format_description!("[year]-[month]-[day]"))
        .map_err(|_| FormError::InvalidDate(raw.to_string()))
}

pub fn parse_flight_time(raw: &str) -> Result<Time, FormError> {
    Time::parse(raw.trim(), format_description!("[hour]:[minute]"))
        .map_err(|_| FormError::InvalidTime(raw.to_string()))
}

/// Numeric inputs that do not parse count as zero.
pub fn parse_duration(raw: &str) -> u32 {
    raw.trim().parse().unwrap_or(0)
}

fn require(field: &'static str, value: &str) -> Result<(), FormError> {
    if value.trim().is_empty() {
        Err(FormError::Missing(field))
    } else {
        Ok(())
    }
}

fn require_email(value: &str) -> Result<(), FormError> {
    require("email", value)?;
    let trimmed = value.trim();
    match trimmed.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() && !domain.contains('@') => {
            Ok(())
        }
        _ => Err(FormError::InvalidEmail(trimmed.to_string())),
    }
}
