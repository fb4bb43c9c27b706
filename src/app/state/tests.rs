use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use reqwest::StatusCode;

use super::{AppMode, AppState, CURRENT_LOCATION_LABEL};
use crate::{
    app::{
        config::{AppConfig, StartTarget},
        effects::Effect,
        events::{AppEvent, RequestId},
    },
    data::{LocationError, Provider, WeatherError},
    domain::weather::{Location, Units},
    test_support::{lisbon, porto, sample_bundle},
};

fn state_with(start: StartTarget) -> AppState {
    AppState::new(&AppConfig {
        start,
        ..AppConfig::default()
    })
}

fn key(code: KeyCode) -> AppEvent {
    AppEvent::Input(Event::Key(KeyEvent::new(code, KeyModifiers::NONE)))
}

fn type_text(state: &mut AppState, text: &str) -> Vec<Effect> {
    text.chars()
        .flat_map(|ch| state.update(key(KeyCode::Char(ch))))
        .collect()
}

fn forecast_id(effects: &[Effect]) -> RequestId {
    effects
        .iter()
        .find_map(|effect| match effect {
            Effect::FetchForecast { id, .. } => Some(*id),
            _ => None,
        })
        .expect("forecast effect")
}

fn search_id(effects: &[Effect]) -> RequestId {
    effects
        .iter()
        .rev()
        .find_map(|effect| match effect {
            Effect::ScheduleSearch { id, .. } => Some(*id),
            _ => None,
        })
        .expect("search effect")
}

fn loaded(state: &mut AppState, location: Location) -> RequestId {
    let effects = state.update(AppEvent::Bootstrap);
    let id = forecast_id(&effects);
    state.update(AppEvent::ForecastLoaded {
        id,
        result: Ok(sample_bundle(location, state.units)),
    });
    id
}

fn bad_request() -> WeatherError {
    WeatherError::status(Provider::Weather, StatusCode::BAD_REQUEST)
}

#[test]
fn bootstrap_locates_device_by_default() {
    let mut state = state_with(StartTarget::DevicePosition);
    let effects = state.update(AppEvent::Bootstrap);
    assert!(matches!(effects.as_slice(), [Effect::LocateDevice { .. }]));
    assert!(state.locating);
    assert_eq!(state.mode, AppMode::Loading);
}

#[test]
fn resolved_position_fetches_with_the_same_request_id() {
    let mut state = state_with(StartTarget::DevicePosition);
    let Effect::LocateDevice { id } = state.update(AppEvent::Bootstrap)[0].clone() else {
        panic!("expected locate effect");
    };
    let effects = state.update(AppEvent::PositionResolved {
        id,
        result: Ok(lisbon()),
    });
    assert_eq!(forecast_id(&effects), id);
    assert!(!state.locating);

    state.update(AppEvent::ForecastLoaded {
        id,
        result: Ok(sample_bundle(lisbon(), Units::Celsius)),
    });
    assert_eq!(state.mode, AppMode::Ready);
    assert_eq!(state.location_label, CURRENT_LOCATION_LABEL);
}

#[test]
fn position_error_replaces_the_view() {
    let mut state = state_with(StartTarget::DevicePosition);
    let Effect::LocateDevice { id } = state.update(AppEvent::Bootstrap)[0].clone() else {
        panic!("expected locate effect");
    };
    state.update(AppEvent::PositionResolved {
        id,
        result: Err(LocationError::Timeout),
    });
    assert_eq!(state.mode, AppMode::Error);
    assert_eq!(
        state.last_error.as_deref(),
        Some("Geolocation error: timed out")
    );
    assert!(!state.is_fetching());
}

#[test]
fn city_start_takes_the_first_candidate() {
    let mut state = state_with(StartTarget::City("Lisbon".to_string()));
    let effects = state.update(AppEvent::Bootstrap);
    let Effect::ResolveCity { id, query } = effects[0].clone() else {
        panic!("expected city lookup");
    };
    assert_eq!(query, "Lisbon");

    let effects = state.update(AppEvent::CityResolved {
        id,
        query,
        result: Ok(vec![lisbon(), porto()]),
    });
    let Effect::FetchForecast { location, .. } = &effects[0] else {
        panic!("expected forecast fetch");
    };
    assert_eq!(location.name, "Lisbon");

    state.update(AppEvent::ForecastLoaded {
        id,
        result: Ok(sample_bundle(lisbon(), Units::Celsius)),
    });
    assert_eq!(state.location_label, "Lisbon, Portugal");
}

#[test]
fn city_without_candidates_is_an_error() {
    let mut state = state_with(StartTarget::City("Atlantis".to_string()));
    let Effect::ResolveCity { id, query } = state.update(AppEvent::Bootstrap)[0].clone() else {
        panic!("expected city lookup");
    };
    state.update(AppEvent::CityResolved {
        id,
        query,
        result: Ok(Vec::new()),
    });
    assert_eq!(state.mode, AppMode::Error);
    assert!(
        state
            .last_error
            .as_deref()
            .is_some_and(|msg| msg.contains("Atlantis"))
    );
}

#[test]
fn stale_forecast_is_dropped() {
    let mut state = state_with(StartTarget::Coordinates(lisbon()));
    let first = loaded(&mut state, lisbon());

    let refresh = forecast_id(&state.update(key(KeyCode::Char('r'))));
    assert!(refresh > first);

    // A late answer to an older request must not overwrite anything.
    state.update(AppEvent::ForecastLoaded {
        id: first,
        result: Ok(sample_bundle(porto(), Units::Celsius)),
    });
    assert!(state.is_fetching());
    assert_eq!(
        state.weather.as_ref().map(|w| w.location.name.as_str()),
        Some("Lisbon")
    );

    state.update(AppEvent::ForecastLoaded {
        id: refresh,
        result: Ok(sample_bundle(lisbon(), Units::Celsius)),
    });
    assert!(!state.is_fetching());
    assert_eq!(state.mode, AppMode::Ready);
}

#[test]
fn stale_error_does_not_replace_the_view() {
    let mut state = state_with(StartTarget::Coordinates(lisbon()));
    let first = loaded(&mut state, lisbon());
    state.update(key(KeyCode::Char('r')));
    state.update(AppEvent::ForecastLoaded {
        id: first,
        result: Err(bad_request()),
    });
    assert_eq!(state.mode, AppMode::Loading);
    assert!(state.last_error.is_none());
}

#[test]
fn forecast_error_message_names_the_provider() {
    let mut state = state_with(StartTarget::Coordinates(lisbon()));
    let id = forecast_id(&state.update(AppEvent::Bootstrap));
    state.update(AppEvent::ForecastLoaded {
        id,
        result: Err(bad_request()),
    });
    assert_eq!(state.mode, AppMode::Error);
    assert_eq!(
        state.last_error.as_deref(),
        Some("Weather API error: Bad Request")
    );
}

#[test]
fn unit_toggle_refetches_current_coordinates() {
    let mut state = state_with(StartTarget::Coordinates(lisbon()));
    loaded(&mut state, lisbon());

    let effects = state.update(key(KeyCode::Char('u')));
    assert!(matches!(
        effects.as_slice(),
        [Effect::FetchForecast {
            units: Units::Fahrenheit,
            ..
        }]
    ));
    let Effect::FetchForecast { location, .. } = &effects[0] else {
        panic!("expected a refetch, got {effects:?}");
    };
    assert_eq!(location.name, "Lisbon");
    assert_eq!(state.units, Units::Fahrenheit);
}

#[test]
fn unit_toggle_while_locating_waits_for_the_position() {
    let mut state = state_with(StartTarget::DevicePosition);
    let Effect::LocateDevice { id } = state.update(AppEvent::Bootstrap)[0].clone() else {
        panic!("expected locate effect");
    };
    assert!(state.update(key(KeyCode::Char('u'))).is_empty());

    let effects = state.update(AppEvent::PositionResolved {
        id,
        result: Ok(lisbon()),
    });
    assert!(matches!(
        effects.as_slice(),
        [Effect::FetchForecast {
            units: Units::Fahrenheit,
            ..
        }]
    ));
}

#[test]
fn unit_toggle_during_fetch_reissues_the_pending_location() {
    let mut state = state_with(StartTarget::Coordinates(lisbon()));
    let first = forecast_id(&state.update(AppEvent::Bootstrap));
    let second = forecast_id(&state.update(key(KeyCode::Char('u'))));
    assert!(second > first);

    state.update(AppEvent::ForecastLoaded {
        id: first,
        result: Ok(sample_bundle(lisbon(), Units::Celsius)),
    });
    assert!(state.weather.is_none());
}

#[test]
fn short_query_cancels_instead_of_searching() {
    let mut state = state_with(StartTarget::Coordinates(lisbon()));
    loaded(&mut state, lisbon());
    state.update(key(KeyCode::Char('/')));
    assert!(state.search.open);

    let effects = type_text(&mut state, "L");
    assert_eq!(effects, vec![Effect::CancelSearch]);
    assert!(!state.search.loading);
}

#[test]
fn each_keystroke_schedules_a_newer_search() {
    let mut state = state_with(StartTarget::Coordinates(lisbon()));
    loaded(&mut state, lisbon());
    state.update(key(KeyCode::Char('/')));

    let effects = type_text(&mut state, "Por");
    let ids: Vec<RequestId> = effects
        .iter()
        .filter_map(|effect| match effect {
            Effect::ScheduleSearch { id, .. } => Some(*id),
            _ => None,
        })
        .collect();
    assert_eq!(ids.len(), 2);
    assert!(ids[1] > ids[0]);
    assert!(state.search.loading);
}

#[test]
fn stale_search_results_are_ignored() {
    let mut state = state_with(StartTarget::Coordinates(lisbon()));
    loaded(&mut state, lisbon());
    state.update(key(KeyCode::Char('/')));
    let older = search_id(&type_text(&mut state, "Po"));
    let newer = search_id(&type_text(&mut state, "r"));

    state.update(AppEvent::SearchCompleted {
        id: older,
        result: Ok(vec![lisbon()]),
    });
    assert!(state.search.suggestions.is_empty());

    state.update(AppEvent::SearchCompleted {
        id: newer,
        result: Ok(vec![porto()]),
    });
    assert_eq!(state.search.suggestions, vec![porto()]);
    assert!(!state.search.loading);
}

#[test]
fn search_failure_leaves_suggestions_empty() {
    let mut state = state_with(StartTarget::Coordinates(lisbon()));
    loaded(&mut state, lisbon());
    state.update(key(KeyCode::Char('/')));
    let id = search_id(&type_text(&mut state, "Porto"));
    state.update(AppEvent::SearchCompleted {
        id,
        result: Err(WeatherError::status(
            Provider::Geocoding,
            StatusCode::INTERNAL_SERVER_ERROR,
        )),
    });
    assert!(state.search.suggestions.is_empty());
    assert_eq!(state.mode, AppMode::Ready);
}

#[test]
fn closing_search_cancels_and_ignores_late_results() {
    let mut state = state_with(StartTarget::Coordinates(lisbon()));
    loaded(&mut state, lisbon());
    state.update(key(KeyCode::Char('/')));
    let id = search_id(&type_text(&mut state, "Porto"));

    assert_eq!(state.update(key(KeyCode::Esc)), vec![Effect::CancelSearch]);
    assert!(state.running);
    state.update(AppEvent::SearchCompleted {
        id,
        result: Ok(vec![porto()]),
    });
    assert!(state.search.suggestions.is_empty());
}

#[test]
fn picking_a_suggestion_fetches_it() {
    let mut state = state_with(StartTarget::Coordinates(lisbon()));
    loaded(&mut state, lisbon());
    state.update(key(KeyCode::Char('/')));
    let id = search_id(&type_text(&mut state, "Port"));
    state.update(AppEvent::SearchCompleted {
        id,
        result: Ok(vec![lisbon(), porto()]),
    });

    state.update(key(KeyCode::Down));
    state.update(key(KeyCode::Down));
    assert_eq!(state.search.selected, 1);

    let effects = state.update(key(KeyCode::Enter));
    assert_eq!(effects[0], Effect::CancelSearch);
    let fetch = forecast_id(&effects);
    assert!(!state.search.open);
    assert_eq!(state.search.query, "Porto, Portugal");

    state.update(AppEvent::ForecastLoaded {
        id: fetch,
        result: Ok(sample_bundle(porto(), Units::Celsius)),
    });
    assert_eq!(state.location_label, "Porto, Portugal");
}

#[test]
fn use_current_location_recovers_from_error() {
    let mut state = state_with(StartTarget::Coordinates(lisbon()));
    let id = forecast_id(&state.update(AppEvent::Bootstrap));
    state.update(AppEvent::ForecastLoaded {
        id,
        result: Err(bad_request()),
    });

    let effects = state.update(key(KeyCode::Char('l')));
    assert!(effects.contains(&Effect::CancelSearch));
    assert!(
        effects
            .iter()
            .any(|effect| matches!(effect, Effect::LocateDevice { .. }))
    );
    assert_eq!(state.mode, AppMode::Loading);
    assert!(state.last_error.is_none());
}

#[test]
fn refresh_without_weather_does_nothing() {
    let mut state = state_with(StartTarget::DevicePosition);
    assert!(state.update(key(KeyCode::Char('r'))).is_empty());
}

#[test]
fn quit_stops_the_loop() {
    let mut state = state_with(StartTarget::DevicePosition);
    state.update(key(KeyCode::Char('q')));
    assert!(!state.running);
    assert_eq!(state.mode, AppMode::Quit);
}

#[test]
fn extras_toggle_flips() {
    let mut state = state_with(StartTarget::DevicePosition);
    assert!(state.show_extras);
    state.update(key(KeyCode::Char('e')));
    assert!(!state.show_extras);
    state.update(key(KeyCode::Char('e')));
    assert!(state.show_extras);
}
