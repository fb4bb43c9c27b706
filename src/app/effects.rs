use std::{future::Future, sync::Arc, time::Duration};

use tokio::{sync::mpsc, task::JoinHandle, time::sleep};
use tracing::debug;

use crate::{
    app::events::{AppEvent, RequestId},
    data::WeatherClient,
    domain::weather::{Location, Units},
};

/// Side effects requested by [`AppState::update`](crate::app::state::AppState::update).
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    LocateDevice {
        id: RequestId,
    },
    ResolveCity {
        id: RequestId,
        query: String,
    },
    FetchForecast {
        id: RequestId,
        location: Location,
        units: Units,
    },
    ScheduleSearch {
        id: RequestId,
        query: String,
    },
    CancelSearch,
}

/// Runs effects on tokio tasks and reports results back as [`AppEvent`]s.
pub struct EffectRunner {
    client: Arc<WeatherClient>,
    tx: mpsc::Sender<AppEvent>,
    debouncer: SearchDebouncer,
}

impl EffectRunner {
    pub fn new(client: Arc<WeatherClient>, tx: mpsc::Sender<AppEvent>, debounce: Duration) -> Self {
        Self {
            client,
            tx,
            debouncer: SearchDebouncer::new(debounce),
        }
    }

    pub fn run(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            self.dispatch(effect);
        }
    }

    fn dispatch(&mut self, effect: Effect) {
        match effect {
            Effect::LocateDevice { id } => {
                let client = Arc::clone(&self.client);
                self.spawn(async move {
                    let result = client.current_device_position().await;
                    AppEvent::PositionResolved { id, result }
                });
            }
            Effect::ResolveCity { id, query } => {
                let client = Arc::clone(&self.client);
                self.spawn(async move {
                    let result = client.search_locations(&query).await;
                    AppEvent::CityResolved { id, query, result }
                });
            }
            Effect::FetchForecast {
                id,
                location,
                units,
            } => {
                let client = Arc::clone(&self.client);
                self.spawn(async move {
                    let result = client.fetch_current_and_forecast(location, units).await;
                    AppEvent::ForecastLoaded { id, result }
                });
            }
            Effect::ScheduleSearch { id, query } => {
                let client = Arc::clone(&self.client);
                let tx = self.tx.clone();
                self.debouncer.schedule(async move {
                    let result = client.search_locations(&query).await;
                    let _ = tx.send(AppEvent::SearchCompleted { id, result }).await;
                });
            }
            Effect::CancelSearch => self.debouncer.cancel(),
        }
    }

    fn spawn<F>(&self, task: F)
    where
        F: Future<Output = AppEvent> + Send + 'static,
    {
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let event = task.await;
            if tx.send(event).await.is_err() {
                debug!("event loop gone; dropping result");
            }
        });
    }
}

/// Holds at most one pending search. Scheduling a new one aborts the previous
/// timer (and its request if it already started); dropping the debouncer
/// aborts whatever is pending.
#[derive(Debug)]
pub struct SearchDebouncer {
    delay: Duration,
    pending: Option<JoinHandle<()>>,
}

impl SearchDebouncer {
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    pub fn schedule<F>(&mut self, task: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        self.cancel();
        let delay = self.delay;
        self.pending = Some(tokio::spawn(async move {
            sleep(delay).await;
            task.await;
        }));
    }

    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }
}

impl Drop for SearchDebouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}
