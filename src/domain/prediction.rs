use std::fmt;

use serde::Deserialize;

use super::forms::PriceForm;
use crate::util::format_thousands;

/// Score above which the result panel switches to the danger accent.
pub const DANGER_ACCENT_THRESHOLD: f64 = 40.0;

const LOW_RISK_CEILING: f64 = 30.0;
const MODERATE_RISK_CEILING: f64 = 60.0;

/// Response of `POST /api/predict-delay`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct DelayPrediction {
    pub prediction: String,
    pub probability: f64,
    pub risk_score: f64,
}

impl DelayPrediction {
    pub fn risk_level(&self) -> RiskLevel {
        RiskLevel::classify(self.risk_score)
    }

    pub fn is_danger(&self) -> bool {
        self.risk_score > DANGER_ACCENT_THRESHOLD
    }

    /// Risk score as a whole percentage, clamped to 0..=100.
    pub fn score_percent(&self) -> u64 {
        if self.risk_score.is_finite() {
            self.risk_score.clamp(0.0, 100.0).round() as u64
        } else {
            0
        }
    }
}

/// A fare returned by `POST /api/predict-price`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PriceEstimate {
    pub estimated_price: f64,
}

impl PriceEstimate {
    pub fn display(&self) -> String {
        format_price(self.estimated_price)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
}

impl RiskLevel {
    pub fn classify(score: f64) -> Self {
        if score < LOW_RISK_CEILING {
            RiskLevel::Low
        } else if score < MODERATE_RISK_CEILING {
            RiskLevel::Moderate
        } else {
            RiskLevel::High
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Low => "LOW",
            RiskLevel::Moderate => "MODERATE",
            RiskLevel::High => "HIGH",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A fare together with the form it was computed from.
#[derive(Clone, Debug, PartialEq)]
pub struct FareQuote {
    pub form: PriceForm,
    pub estimate: PriceEstimate,
}

impl FareQuote {
    pub fn route_caption(&self) -> String {
        format!(
            "{} · {} → {}",
            self.form.airline, self.form.origin, self.form.destination
        )
    }
}

/// Answer shown by a result panel. Starting a new request drops the previous
/// answer, so a failed retry leaves the panel empty.
#[derive(Clone, Debug, PartialEq)]
pub struct ResultSlot<T> {
    latest: Option<T>,
    pending: bool,
}

impl<T> Default for ResultSlot<T> {
    fn default() -> Self {
        Self {
            latest: None,
            pending: false,
        }
    }
}

impl<T> ResultSlot<T> {
    pub fn begin(&mut self) {
        self.latest = None;
        self.pending = true;
    }

    /// Ends the request; `None` means it failed.
    pub fn settle(&mut self, answer: Option<T>) {
        self.latest = answer;
        self.pending = false;
    }

    pub fn latest(&self) -> Option<&T> {
        self.latest.as_ref()
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }
}

/// Formats a dollar amount with thousands separators and at most two decimals.
pub fn format_price(value: f64) -> String {
    if !value.is_finite() {
        return "n/a".to_string();
    }

    let cents = (value.abs() * 100.0).round() as u64;
    let whole = format_thousands(cents / 100);
    let fraction = cents % 100;
    let sign = if value < 0.0 && cents > 0 { "-" } else { "" };

    if fraction == 0 {
        format!("{sign}{whole}")
    } else {
        let digits = format!("{fraction:02}");
        format!("{sign}{whole}.{}", digits.trim_end_matches('0'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn risk_buckets_respect_boundaries() {
        assert_eq!(RiskLevel::classify(0.0), RiskLevel::Low);
        assert_eq!(RiskLevel::classify(29.9), RiskLevel::Low);
        assert_eq!(RiskLevel::classify(30.0), RiskLevel::Moderate);
        assert_eq!(RiskLevel::classify(59.99), RiskLevel::Moderate);
        assert_eq!(RiskLevel::classify(60.0), RiskLevel::High);
        assert_eq!(RiskLevel::classify(100.0), RiskLevel::High);
    }

    #[test]
    fn risk_labels_are_uppercase() {
        assert_eq!(RiskLevel::Moderate.to_string(), "MODERATE");
    }

    #[test]
    fn danger_accent_starts_above_forty() {
        let mut prediction = DelayPrediction {
            prediction: "ON TIME".into(),
            probability: 0.4,
            risk_score: 40.0,
        };
        assert!(!prediction.is_danger());
        prediction.risk_score = 41.0;
        assert!(prediction.is_danger());
    }

    #[test]
    fn decodes_integer_risk_score() {
        let prediction: DelayPrediction = serde_json::from_str(
            r#"{"prediction":"DELAYED","probability":0.7312,"risk_score":73}"#,
        )
        .unwrap();
        assert_eq!(prediction.risk_score, 73.0);
        assert_eq!(prediction.risk_level(), RiskLevel::High);
        assert_eq!(prediction.score_percent(), 73);
    }

    #[test]
    fn prices_get_separators_and_trimmed_decimals() {
        assert_eq!(format_price(0.0), "0");
        assert_eq!(format_price(999.0), "999");
        assert_eq!(format_price(1234.5), "1,234.5");
        assert_eq!(format_price(1234567.891), "1,234,567.89");
        assert_eq!(format_price(-250.05), "-250.05");
        assert_eq!(format_price(f64::NAN), "n/a");
    }

    #[test]
    fn new_request_clears_previous_answer() {
        let mut slot = ResultSlot::default();
        slot.begin();
        slot.settle(Some(RiskLevel::High));
        assert_eq!(slot.latest(), Some(&RiskLevel::High));

        slot.begin();
        assert!(slot.is_pending());
        assert_eq!(slot.latest(), None);

        slot.settle(None);
        assert!(!slot.is_pending());
        assert_eq!(slot.latest(), None);
    }

    #[test]
    fn fare_caption_follows_submitted_form() {
        let quote = FareQuote {
            form: PriceForm {
                airline: "Lion Air".into(),
                origin: "Jakarta".into(),
                destination: "Denpasar".into(),
                duration_mins: 110,
            },
            estimate: PriceEstimate {
                estimated_price: 80.0,
            },
        };
        assert_eq!(quote.route_caption(), "Lion Air · Jakarta → Denpasar");
    }
}
