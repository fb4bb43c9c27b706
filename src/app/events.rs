use crossterm::event::{Event, EventStream};
use futures::StreamExt;

use crate::data::{LocationError, WeatherError};
use crate::domain::weather::{ForecastBundle, Location};

/// Tag attached to every forecast and search request. Ids only grow, so the
/// state can tell the latest request from a stale one.
pub type RequestId = u64;

#[derive(Debug)]
pub enum AppEvent {
    Bootstrap,
    Input(Event),
    PositionResolved {
        id: RequestId,
        result: Result<Location, LocationError>,
    },
    CityResolved {
        id: RequestId,
        query: String,
        result: Result<Vec<Location>, WeatherError>,
    },
    ForecastLoaded {
        id: RequestId,
        result: Result<ForecastBundle, WeatherError>,
    },
    SearchCompleted {
        id: RequestId,
        result: Result<Vec<Location>, WeatherError>,
    },
    Quit,
}

pub fn spawn_input_task() -> impl futures::Stream<Item = Event> {
    EventStream::new().filter_map(|event| async move { event.ok() })
}
