use serde::Deserialize;

/// Selectable values for the prediction forms.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct FlightOptions {
    #[serde(default)]
    pub airlines: Vec<String>,
    #[serde(default)]
    pub cities: Vec<String>,
}

impl FlightOptions {
    pub fn default_airline(&self) -> Option<&str> {
        self.airlines.first().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.airlines.is_empty() && self.cities.is_empty()
    }
}

/// Which option listing a page reads from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OptionsSource {
    /// Listing derived from the raw flight dataset.
    General,
    /// Classes known to the delay model encoders.
    Delay,
    /// Classes known to the price model encoders.
    Price,
}

impl OptionsSource {
    pub fn path(&self) -> &'static str {
        match self {
            OptionsSource::General => "api/options",
            OptionsSource::Delay => "api/delay-options",
            OptionsSource::Price => "api/price-options",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_lists_decode_as_empty() {
        let options: FlightOptions = serde_json::from_str(r#"{"airlines":["AA"]}"#).unwrap();
        assert_eq!(options.airlines, vec!["AA"]);
        assert!(options.cities.is_empty());
        assert_eq!(options.default_airline(), Some("AA"));
    }

    #[test]
    fn no_default_airline_without_airlines() {
        let options = FlightOptions::default();
        assert!(options.is_empty());
        assert_eq!(options.default_airline(), None);
    }
}
