use std::fmt;

use semver::Version;
use thiserror::Error;

pub const APP_NAME: &str = "Windbreaker.AI";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const GIT_TAG: Option<&str> = option_env!("GIT_TAG");

/// Backend major version this client speaks.
pub const SUPPORTED_BACKEND_MAJOR: u64 = 2;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VersionError {
    #[error("invalid version format: {0}")]
    InvalidVersion(String),
}

/// What the startup health check learned about the prediction service.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BackendStatus {
    pub online: bool,
    pub system: Option<String>,
    pub version: Option<Version>,
}

impl BackendStatus {
    pub fn from_health(status: &str, system: Option<String>, version: Option<&str>) -> Self {
        Self {
            online: status.eq_ignore_ascii_case("online"),
            system,
            version: version.and_then(|raw| parse_version_str(raw).ok()),
        }
    }

    pub fn offline() -> Self {
        Self {
            online: false,
            system: None,
            version: None,
        }
    }

    /// Older single-file backends do not report a version; treat them as compatible.
    pub fn is_supported(&self) -> bool {
        self.version
            .as_ref()
            .map(|version| version.major == SUPPORTED_BACKEND_MAJOR)
            .unwrap_or(true)
    }

    pub fn headline(&self) -> &'static str {
        match (self.online, self.is_supported()) {
            (true, true) => "ONLINE",
            (true, false) => "DEGRADED",
            (false, _) => "OFFLINE",
        }
    }
}

impl fmt::Display for BackendStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let system = self.system.as_deref().unwrap_or("prediction service");
        match (&self.version, self.online) {
            (_, false) => write!(f, "{system} unreachable"),
            (Some(version), true) if !self.is_supported() => write!(
                f,
                "{system} v{version} is not supported (expected v{SUPPORTED_BACKEND_MAJOR}.x)"
            ),
            (Some(version), true) => write!(f, "{system} v{version}"),
            (None, true) => write!(f, "{system} (version unknown)"),
        }
    }
}

fn parse_version_str(input: &str) -> Result<Version, VersionError> {
    let trimmed = input.trim().trim_start_matches(|ch| ch == 'v' || ch == 'V');
    Version::parse(trimmed).map_err(|err| VersionError::InvalidVersion(err.to_string()))
}

pub fn current_version() -> Result<Version, VersionError> {
    if let Some(tag) = GIT_TAG {
        return parse_version_str(tag);
    }

    parse_version_str(APP_VERSION)
}

pub fn version_label() -> String {
    if let Some(tag) = GIT_TAG {
        tag.to_string()
    } else {
        format!("v{}", APP_VERSION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modular_backend_is_supported() {
        let status = BackendStatus::from_health("online", Some("WINDBREAKER.AI".into()), Some("2.0.0"));
        assert!(status.online);
        assert!(status.is_supported());
        assert_eq!(status.headline(), "ONLINE");
        assert_eq!(status.to_string(), "WINDBREAKER.AI v2.0.0");
    }

    #[test]
    fn unknown_version_counts_as_supported() {
        let status = BackendStatus::from_health("online", None, None);
        assert!(status.is_supported());
        assert_eq!(status.to_string(), "prediction service (version unknown)");
    }

    #[test]
    fn other_major_is_degraded() {
        let status = BackendStatus::from_health("ONLINE", None, Some("v3.1.0"));
        assert_eq!(status.headline(), "DEGRADED");
        assert!(status.to_string().contains("not supported"));
    }

    #[test]
    fn offline_backend() {
        assert_eq!(BackendStatus::offline().headline(), "OFFLINE");
        assert_eq!(
            BackendStatus::from_health("maintenance", None, Some("2.0.0")).headline(),
            "OFFLINE"
        );
    }

    #[test]
    fn own_version_parses() {
        assert!(current_version().is_ok());
        assert!(version_label().starts_with('v') || GIT_TAG.is_some());
    }
}
