use crossterm::event::Event;
use tracing::{debug, info, warn};

use crate::{
    app::{
        config::{AppConfig, StartTarget},
        effects::Effect,
        events::{AppEvent, RequestId},
        input::{Command, command_for},
    },
    data::{MIN_QUERY_CHARS, WeatherError},
    domain::weather::{ForecastBundle, Location, Units},
};

pub const CURRENT_LOCATION_LABEL: &str = "Current Location";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Loading,
    Ready,
    Error,
    Quit,
}

#[derive(Debug, Default)]
pub struct SearchState {
    pub open: bool,
    pub query: String,
    pub suggestions: Vec<Location>,
    pub selected: usize,
    pub loading: bool,
}

/// The forecast request whose response the dashboard is waiting for.
#[derive(Debug, Clone)]
struct PendingForecast {
    id: RequestId,
    label: String,
    /// `None` while the position or city is still being resolved.
    location: Option<Location>,
}

#[derive(Debug)]
pub struct AppState {
    pub mode: AppMode,
    pub running: bool,
    pub units: Units,
    pub weather: Option<ForecastBundle>,
    pub location_label: String,
    pub loading_message: String,
    pub last_error: Option<String>,
    pub locating: bool,
    pub show_extras: bool,
    pub search: SearchState,
    start: StartTarget,
    next_request_id: RequestId,
    pending_forecast: Option<PendingForecast>,
    pending_search: Option<RequestId>,
}

impl AppState {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            mode: AppMode::Loading,
            running: true,
            units: config.units,
            weather: None,
            location_label: CURRENT_LOCATION_LABEL.to_string(),
            loading_message: "Initializing...".to_string(),
            last_error: None,
            locating: false,
            show_extras: true,
            search: SearchState::default(),
            start: config.start.clone(),
            next_request_id: 0,
            pending_forecast: None,
            pending_search: None,
        }
    }

    /// Applies one event and returns the effects it asks for. Never performs
    /// I/O itself.
    pub fn update(&mut self, event: AppEvent) -> Vec<Effect> {
        match event {
            AppEvent::Bootstrap => self.bootstrap(),
            AppEvent::Input(Event::Key(key)) => command_for(key, self.search.open)
                .map(|command| self.apply(command))
                .unwrap_or_default(),
            AppEvent::Input(_) => Vec::new(),
            AppEvent::PositionResolved { id, result } => {
                if !self.is_current_forecast(id) {
                    debug!(id, "dropping stale position");
                    return Vec::new();
                }
                self.locating = false;
                match result {
                    Ok(location) => self.fetch_resolved(location),
                    Err(err) => self.fail(err.to_string()),
                }
            }
            AppEvent::CityResolved { id, query, result } => {
                if !self.is_current_forecast(id) {
                    debug!(id, "dropping stale city lookup");
                    return Vec::new();
                }
                match result {
                    Ok(candidates) => match candidates.into_iter().next() {
                        Some(location) => {
                            if let Some(pending) = self.pending_forecast.as_mut() {
                                pending.label = location.display_name();
                            }
                            self.fetch_resolved(location)
                        }
                        None => self.fail(format!("No location found for \"{query}\"")),
                    },
                    Err(err) => self.fail(err.to_string()),
                }
            }
            AppEvent::ForecastLoaded { id, result } => self.apply_forecast(id, result),
            AppEvent::SearchCompleted { id, result } => {
                self.apply_search(id, result);
                Vec::new()
            }
            AppEvent::Quit => self.apply(Command::Quit),
        }
    }

    /// True while a forecast request is outstanding.
    #[must_use]
    pub fn is_fetching(&self) -> bool {
        self.pending_forecast.is_some()
    }

    #[must_use]
    pub fn selected_suggestion(&self) -> Option<&Location> {
        self.search.suggestions.get(self.search.selected)
    }

    fn bootstrap(&mut self) -> Vec<Effect> {
        match self.start.clone() {
            StartTarget::DevicePosition => self.use_current_location(),
            StartTarget::Coordinates(location) => {
                let label = location.display_name();
                self.request_forecast(location, label)
            }
            StartTarget::City(query) => {
                let id = self.issue_request_id();
                self.pending_forecast = Some(PendingForecast {
                    id,
                    label: query.clone(),
                    location: None,
                });
                self.begin_loading(format!("Searching {query}..."));
                vec![Effect::ResolveCity { id, query }]
            }
        }
    }

    fn apply(&mut self, command: Command) -> Vec<Effect> {
        match command {
            Command::Quit => {
                self.running = false;
                self.mode = AppMode::Quit;
                vec![Effect::CancelSearch]
            }
            Command::Refresh => match &self.weather {
                Some(bundle) => {
                    let target = bundle.refresh_target();
                    let label = self.location_label.clone();
                    self.request_forecast(target, label)
                }
                None => Vec::new(),
            },
            Command::ToggleUnits => self.toggle_units(),
            Command::UseCurrentLocation => {
                self.search.query.clear();
                self.search.suggestions.clear();
                let mut effects = self.close_search();
                effects.extend(self.use_current_location());
                effects
            }
            Command::ToggleExtras => {
                self.show_extras = !self.show_extras;
                Vec::new()
            }
            Command::OpenSearch => {
                self.search.open = true;
                self.search.selected = 0;
                Vec::new()
            }
            Command::CloseSearch => self.close_search(),
            Command::SearchInput(ch) => {
                self.search.query.push(ch);
                self.query_changed()
            }
            Command::SearchBackspace => {
                if self.search.query.pop().is_some() {
                    self.query_changed()
                } else {
                    Vec::new()
                }
            }
            Command::SelectPrevious => {
                self.search.selected = self.search.selected.saturating_sub(1);
                Vec::new()
            }
            Command::SelectNext => {
                let last = self.search.suggestions.len().saturating_sub(1);
                self.search.selected = (self.search.selected + 1).min(last);
                Vec::new()
            }
            Command::PickSelected => self.pick_selected(),
        }
    }

    fn toggle_units(&mut self) -> Vec<Effect> {
        self.units = self.units.toggled();
        info!(units = self.units.api_value(), "units toggled");

        // A request still resolving its location will use the new units once
        // it gets there; one already fetching must be re-issued.
        if let Some(pending) = &self.pending_forecast {
            return match pending.location.clone() {
                Some(location) => {
                    let label = pending.label.clone();
                    self.request_forecast(location, label)
                }
                None => Vec::new(),
            };
        }
        match &self.weather {
            Some(bundle) => {
                let target = bundle.refresh_target();
                let label = self.location_label.clone();
                self.request_forecast(target, label)
            }
            None => Vec::new(),
        }
    }

    fn use_current_location(&mut self) -> Vec<Effect> {
        let id = self.issue_request_id();
        self.pending_forecast = Some(PendingForecast {
            id,
            label: CURRENT_LOCATION_LABEL.to_string(),
            location: None,
        });
        self.locating = true;
        self.begin_loading("Detecting location...".to_string());
        vec![Effect::LocateDevice { id }]
    }

    fn query_changed(&mut self) -> Vec<Effect> {
        self.search.selected = 0;
        if self.search.query.chars().count() < MIN_QUERY_CHARS {
            self.search.suggestions.clear();
            self.search.loading = false;
            self.pending_search = None;
            return vec![Effect::CancelSearch];
        }
        let id = self.issue_request_id();
        self.pending_search = Some(id);
        self.search.loading = true;
        vec![Effect::ScheduleSearch {
            id,
            query: self.search.query.clone(),
        }]
    }

    fn close_search(&mut self) -> Vec<Effect> {
        self.search.open = false;
        self.search.loading = false;
        self.pending_search = None;
        vec![Effect::CancelSearch]
    }

    fn pick_selected(&mut self) -> Vec<Effect> {
        let Some(location) = self.selected_suggestion().cloned() else {
            return Vec::new();
        };
        let label = location.display_name();
        self.search.query.clone_from(&label);
        self.search.suggestions.clear();
        let mut effects = self.close_search();
        effects.extend(self.request_forecast(location, label));
        effects
    }

    fn apply_search(&mut self, id: RequestId, result: Result<Vec<Location>, WeatherError>) {
        if self.pending_search != Some(id) {
            debug!(id, "dropping stale search response");
            return;
        }
        self.pending_search = None;
        self.search.loading = false;
        self.search.selected = 0;
        match result {
            Ok(suggestions) => {
                debug!(id, count = suggestions.len(), "search results applied");
                self.search.suggestions = suggestions;
            }
            Err(err) => {
                warn!(error = %err, "location search failed");
                self.search.suggestions.clear();
            }
        }
    }

    fn apply_forecast(
        &mut self,
        id: RequestId,
        result: Result<ForecastBundle, WeatherError>,
    ) -> Vec<Effect> {
        if !self.is_current_forecast(id) {
            debug!(id, "dropping stale forecast response");
            return Vec::new();
        }
        match result {
            Ok(bundle) => {
                if let Some(pending) = self.pending_forecast.take() {
                    self.location_label = pending.label;
                }
                info!(id, location = %self.location_label, "forecast applied");
                self.weather = Some(bundle);
                self.mode = AppMode::Ready;
                self.last_error = None;
                Vec::new()
            }
            Err(err) => self.fail(err.to_string()),
        }
    }

    fn fetch_resolved(&mut self, location: Location) -> Vec<Effect> {
        let Some(pending) = self.pending_forecast.as_mut() else {
            return Vec::new();
        };
        pending.location = Some(location.clone());
        let id = pending.id;
        self.loading_message = "Fetching weather...".to_string();
        vec![Effect::FetchForecast {
            id,
            location,
            units: self.units,
        }]
    }

    fn request_forecast(&mut self, location: Location, label: String) -> Vec<Effect> {
        let id = self.issue_request_id();
        debug!(id, location = %label, "forecast requested");
        self.pending_forecast = Some(PendingForecast {
            id,
            label: label.clone(),
            location: Some(location.clone()),
        });
        self.locating = false;
        self.begin_loading(format!("Fetching weather for {label}..."));
        vec![Effect::FetchForecast {
            id,
            location,
            units: self.units,
        }]
    }

    fn begin_loading(&mut self, message: String) {
        self.mode = AppMode::Loading;
        self.last_error = None;
        self.loading_message = message;
    }

    fn fail(&mut self, message: String) -> Vec<Effect> {
        warn!(error = %message, "dashboard request failed");
        self.pending_forecast = None;
        self.locating = false;
        self.mode = AppMode::Error;
        self.last_error = Some(message);
        Vec::new()
    }

    fn is_current_forecast(&self, id: RequestId) -> bool {
        self.pending_forecast
            .as_ref()
            .is_some_and(|pending| pending.id == id)
    }

    fn issue_request_id(&mut self) -> RequestId {
        self.next_request_id += 1;
        self.next_request_id
    }
}

#[cfg(test)]
mod tests;
