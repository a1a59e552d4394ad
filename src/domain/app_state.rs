use serde::{Deserialize, Serialize};

use super::session::Session;
use crate::util::version::BackendStatus;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AppState {
    pub session: Session,
    /// Result of the startup health check; `None` until it completes.
    pub backend: Option<BackendStatus>,
    /// Successful predictions since launch.
    pub predictions_run: u32,
}

impl AppState {
    pub fn apply_persisted(&mut self, persisted: PersistedState) {
        self.session = persisted.session;
    }

    pub fn to_persisted(&self) -> PersistedState {
        PersistedState {
            session: self.session.clone(),
        }
    }

    pub fn sign_in(&mut self, session: Session) {
        self.session = session;
    }

    pub fn sign_out(&mut self) {
        self.session.clear();
        self.predictions_run = 0;
    }

    pub fn record_prediction(&mut self) {
        self.predictions_run = self.predictions_run.saturating_add(1);
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PersistedState {
    #[serde(default)]
    pub session: Session,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sign_out_resets_session_counters() {
        let mut state = AppState::default();
        state.sign_in(Session::new("tok", "Ana"));
        state.record_prediction();
        state.record_prediction();
        assert_eq!(state.predictions_run, 2);

        state.sign_out();
        assert!(!state.session.is_authenticated());
        assert_eq!(state.predictions_run, 0);
    }

    #[test]
    fn persisted_roundtrip_keeps_only_session() {
        let mut state = AppState::default();
        state.sign_in(Session::new("tok", "Ana"));
        state.record_prediction();

        let mut restored = AppState::default();
        restored.apply_persisted(state.to_persisted());
        assert_eq!(restored.session, state.session);
        assert_eq!(restored.predictions_run, 0);
    }
}
