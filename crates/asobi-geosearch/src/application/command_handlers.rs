//! Command handlers for the map search context.
//!
//! `handle_search` is the whole search-to-annotation pipeline: apply the
//! requested style, geocode once, select the first candidate, and apply
//! pin + viewport unless a newer search has superseded this one.

use asobi_core::clock::Clock;
use asobi_core::command::Command;
use asobi_core::geocode::{GeocodeError, Geocoder};
use uuid::Uuid;

use crate::domain::map::{MapStyle, Pin, Viewport};
use crate::domain::resolution::{self, ResolvedLocation};

use super::session::SearchSession;

/// Command issued whenever the query text or the map style changes. No
/// debouncing and no de-duplication: every change triggers a fresh search.
#[derive(Debug)]
pub struct Search {
    /// Free-text query, passed to the collaborator unmodified.
    pub query: String,
    /// Rendering style to apply.
    pub style: MapStyle,
    /// Correlation ID to trace this command through the system.
    pub correlation_id: Uuid,
}

impl Command for Search {
    fn command_type(&self) -> &'static str {
        "geosearch.search"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

/// How a search that did not fail ended.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    /// Pin and viewport were applied to the map state.
    Applied(ResolvedLocation),
    /// The first candidate had no coordinate. A silent no-op, not an
    /// error (observed behavior, kept; see DESIGN notes).
    MissingCoordinate,
    /// A newer search was issued while this one was in flight; the
    /// response was discarded.
    Superseded,
}

/// Handles the `Search` command.
///
/// The requested style is applied immediately; the geocode await is the
/// only suspension point. On success the pin (titled with the query) and
/// a 500 m viewport are applied, unless a newer search superseded this
/// one. There is no retry, no timeout, and no cancellation of the
/// in-flight collaborator call.
///
/// # Errors
///
/// Returns [`GeocodeError::Service`] if the collaborator fails and
/// [`GeocodeError::NoMatch`] if it returns zero candidates. Pins and
/// viewport are left untouched on either error.
pub async fn handle_search(
    command: &Search,
    session: &SearchSession,
    geocoder: &dyn Geocoder,
    clock: &dyn Clock,
) -> Result<SearchOutcome, GeocodeError> {
    let token = session.begin();
    tracing::debug!(
        command = command.command_type(),
        correlation_id = %command.correlation_id,
        query = %command.query,
        "search requested"
    );

    session.update_state(|state| state.set_style(command.style));

    let placemarks = match geocoder.geocode(&command.query).await {
        Ok(placemarks) => placemarks,
        Err(err) => {
            tracing::warn!(
                correlation_id = %command.correlation_id,
                error = %err,
                "geocoding failed"
            );
            return Err(err);
        }
    };
    if placemarks.is_empty() {
        tracing::warn!(
            correlation_id = %command.correlation_id,
            "geocoding returned no candidates"
        );
        return Err(GeocodeError::NoMatch);
    }

    let Some(coordinate) = resolution::first_coordinate(&placemarks) else {
        tracing::debug!(
            correlation_id = %command.correlation_id,
            "first candidate has no coordinate"
        );
        return Ok(SearchOutcome::MissingCoordinate);
    };

    let resolved = ResolvedLocation {
        coordinate,
        label: command.query.clone(),
        resolved_at: clock.now(),
    };

    let applied = session.update_state_if_current(token, |state| {
        state.add_pin(Pin {
            coordinate,
            title: resolved.label.clone(),
        });
        state.set_viewport(Viewport::around(coordinate));
    });
    if !applied {
        tracing::debug!(
            correlation_id = %command.correlation_id,
            "stale geocode response discarded"
        );
        return Ok(SearchOutcome::Superseded);
    }

    tracing::info!(
        correlation_id = %command.correlation_id,
        latitude = coordinate.latitude,
        longitude = coordinate.longitude,
        "pin placed"
    );
    Ok(SearchOutcome::Applied(resolved))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use asobi_core::geocode::{Coordinate, Placemark};
    use asobi_test_support::{FailingGeocoder, FixedClock, GatedGeocoder, StaticGeocoder};
    use chrono::{TimeZone, Utc};

    use super::*;

    const HANEDA: Coordinate = Coordinate {
        latitude: 35.5494,
        longitude: 139.7798,
    };

    fn fixed_clock() -> FixedClock {
        FixedClock(Utc.with_ymd_and_hms(2026, 1, 15, 10, 0, 0).unwrap())
    }

    fn search(query: &str, style: MapStyle) -> Search {
        Search {
            query: query.to_owned(),
            style,
            correlation_id: Uuid::new_v4(),
        }
    }

    fn placemark(name: &str, coordinate: Option<Coordinate>) -> Placemark {
        Placemark {
            name: Some(name.to_owned()),
            coordinate,
        }
    }

    #[tokio::test]
    async fn test_handle_search_applies_pin_and_viewport() {
        let session = SearchSession::new(MapStyle::Standard);
        let geocoder = StaticGeocoder::new(vec![placemark("Haneda Airport", Some(HANEDA))]);
        let clock = fixed_clock();

        let outcome = handle_search(
            &search("Haneda Airport", MapStyle::Standard),
            &session,
            &geocoder,
            &clock,
        )
        .await
        .unwrap();

        let SearchOutcome::Applied(resolved) = outcome else {
            panic!("expected Applied, got {outcome:?}");
        };
        assert_eq!(resolved.coordinate, HANEDA);
        assert_eq!(resolved.label, "Haneda Airport");
        assert_eq!(resolved.resolved_at, clock.0);

        let state = session.state_snapshot();
        assert_eq!(state.pins().len(), 1);
        assert_eq!(state.pins()[0].coordinate, HANEDA);
        assert_eq!(state.pins()[0].title, "Haneda Airport");

        let viewport = state.viewport().unwrap();
        assert_eq!(viewport.center, HANEDA);
        assert!((viewport.latitudinal_meters - 500.0).abs() < f64::EPSILON);
        assert!((viewport.longitudinal_meters - 500.0).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn test_handle_search_applies_the_requested_style() {
        let session = SearchSession::new(MapStyle::Standard);
        let geocoder = StaticGeocoder::new(vec![placemark("Haneda Airport", Some(HANEDA))]);

        handle_search(
            &search("Haneda Airport", MapStyle::Hybrid),
            &session,
            &geocoder,
            &fixed_clock(),
        )
        .await
        .unwrap();

        assert_eq!(session.state_snapshot().style(), MapStyle::Hybrid);
    }

    #[tokio::test]
    async fn test_handle_search_surfaces_collaborator_failure_and_leaves_map_untouched() {
        let session = SearchSession::new(MapStyle::Standard);

        let result = handle_search(
            &search("nowhere", MapStyle::Standard),
            &session,
            &FailingGeocoder,
            &fixed_clock(),
        )
        .await;

        assert!(matches!(result, Err(GeocodeError::Service(_))));
        let state = session.state_snapshot();
        assert!(state.pins().is_empty());
        assert!(state.viewport().is_none());
    }

    #[tokio::test]
    async fn test_handle_search_treats_zero_candidates_as_no_match() {
        let session = SearchSession::new(MapStyle::Standard);
        let geocoder = StaticGeocoder::new(Vec::new());

        let result = handle_search(
            &search("nowhere", MapStyle::Standard),
            &session,
            &geocoder,
            &fixed_clock(),
        )
        .await;

        assert!(matches!(result, Err(GeocodeError::NoMatch)));
        let state = session.state_snapshot();
        assert!(state.pins().is_empty());
        assert!(state.viewport().is_none());
    }

    #[tokio::test]
    async fn test_handle_search_with_unlocatable_candidate_is_a_silent_no_op() {
        let session = SearchSession::new(MapStyle::Standard);
        let geocoder = StaticGeocoder::new(vec![placemark("unlocatable", None)]);

        let outcome = handle_search(
            &search("unlocatable", MapStyle::Standard),
            &session,
            &geocoder,
            &fixed_clock(),
        )
        .await
        .unwrap();

        assert_eq!(outcome, SearchOutcome::MissingCoordinate);
        let state = session.state_snapshot();
        assert!(state.pins().is_empty());
        assert!(state.viewport().is_none());
    }

    #[tokio::test]
    async fn test_handle_search_keeps_earlier_pins() {
        let session = SearchSession::new(MapStyle::Standard);
        let clock = fixed_clock();

        let first = StaticGeocoder::new(vec![placemark("Haneda Airport", Some(HANEDA))]);
        handle_search(
            &search("Haneda Airport", MapStyle::Standard),
            &session,
            &first,
            &clock,
        )
        .await
        .unwrap();

        let narita = Coordinate {
            latitude: 35.7719,
            longitude: 140.3928,
        };
        let second = StaticGeocoder::new(vec![placemark("Narita Airport", Some(narita))]);
        handle_search(
            &search("Narita Airport", MapStyle::Standard),
            &session,
            &second,
            &clock,
        )
        .await
        .unwrap();

        let state = session.state_snapshot();
        assert_eq!(state.pins().len(), 2);
        assert_eq!(state.pins()[0].title, "Haneda Airport");
        assert_eq!(state.pins()[1].title, "Narita Airport");
        assert_eq!(state.viewport().unwrap().center, narita);
    }

    #[tokio::test]
    async fn test_late_response_to_a_superseded_search_is_discarded() {
        let session = Arc::new(SearchSession::new(MapStyle::Standard));
        let gated = Arc::new(GatedGeocoder::new(vec![placemark(
            "Haneda Airport",
            Some(HANEDA),
        )]));
        let clock = fixed_clock();

        // Search A: its response is held back by the gated geocoder.
        let task_a = tokio::spawn({
            let session = Arc::clone(&session);
            let gated = Arc::clone(&gated);
            async move {
                handle_search(
                    &search("Haneda Airport", MapStyle::Standard),
                    &session,
                    gated.as_ref(),
                    &clock,
                )
                .await
            }
        });
        gated.entered().await;

        // Search B: issued while A is in flight, completes immediately.
        let narita = Coordinate {
            latitude: 35.7719,
            longitude: 140.3928,
        };
        let geocoder_b = StaticGeocoder::new(vec![placemark("Narita Airport", Some(narita))]);
        let outcome_b = handle_search(
            &search("Narita Airport", MapStyle::Standard),
            &session,
            &geocoder_b,
            &clock,
        )
        .await
        .unwrap();
        assert!(matches!(outcome_b, SearchOutcome::Applied(_)));

        // A's response arrives last but must be discarded, not applied.
        gated.release();
        let outcome_a = task_a.await.unwrap().unwrap();
        assert_eq!(outcome_a, SearchOutcome::Superseded);

        let state = session.state_snapshot();
        assert_eq!(state.pins().len(), 1);
        assert_eq!(state.pins()[0].title, "Narita Airport");
        assert_eq!(state.viewport().unwrap().center, narita);
    }
}
