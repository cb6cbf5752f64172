//! Single owner of the map state and the current request token.

use std::sync::Mutex;

use uuid::Uuid;

use crate::domain::map::{MapState, MapStyle};

/// Owns the map state the rendering layer consumes and the token of the
/// most recently issued search.
///
/// Each search publishes a fresh token before contacting the geocoding
/// collaborator; a response is applied only if its token is still the
/// current one, so a late response to a superseded search is discarded
/// instead of overwriting newer state.
#[derive(Debug)]
pub struct SearchSession {
    current_token: Mutex<Option<Uuid>>,
    state: Mutex<MapState>,
}

impl SearchSession {
    /// Creates a session with an empty map in the given style.
    #[must_use]
    pub fn new(style: MapStyle) -> Self {
        Self {
            current_token: Mutex::new(None),
            state: Mutex::new(MapState::new(style)),
        }
    }

    /// Issues a fresh request token and publishes it as the current one,
    /// superseding any in-flight search.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub(crate) fn begin(&self) -> Uuid {
        let token = Uuid::new_v4();
        *self.current_token.lock().unwrap() = Some(token);
        token
    }

    /// Runs `mutate` against the map state.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub(crate) fn update_state(&self, mutate: impl FnOnce(&mut MapState)) {
        mutate(&mut self.state.lock().unwrap());
    }

    /// Runs `mutate` against the map state only if `token` is still the
    /// current one. Returns whether the mutation was applied. The token
    /// lock is held across the mutation so a concurrent `begin` cannot
    /// slip between the check and the update.
    ///
    /// # Panics
    ///
    /// Panics if an internal mutex is poisoned.
    pub(crate) fn update_state_if_current(
        &self,
        token: Uuid,
        mutate: impl FnOnce(&mut MapState),
    ) -> bool {
        let current = self.current_token.lock().unwrap();
        if *current != Some(token) {
            return false;
        }
        mutate(&mut self.state.lock().unwrap());
        true
    }

    /// Returns a snapshot of the map state.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn state_snapshot(&self) -> MapState {
        self.state.lock().unwrap().clone()
    }
}
