use chrono::NaiveDateTime;

use super::{DailyForecast, Units, fahrenheit_to_celsius, format::round_half_up};

const FORECAST_HORIZON_DAYS: usize = 7;

// Upper bounds (inclusive) of each tier but the last. The two tables are
// tuned separately and are not conversions of each other.
const CELSIUS_OUTFIT_BOUNDS: [f32; 5] = [3.0, 9.0, 15.0, 21.0, 27.0];
const FAHRENHEIT_OUTFIT_BOUNDS: [f32; 5] = [37.0, 48.0, 59.0, 70.0, 80.0];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutfitTier {
    WarmLayers,
    JacketAndLayers,
    LightJacket,
    TShirtAndJeans,
    TShirtAndShorts,
    TankTop,
}

impl OutfitTier {
    const ORDERED: [Self; 6] = [
        Self::WarmLayers,
        Self::JacketAndLayers,
        Self::LightJacket,
        Self::TShirtAndJeans,
        Self::TShirtAndShorts,
        Self::TankTop,
    ];

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::WarmLayers => "Coat, scarf, warm layers",
            Self::JacketAndLayers => "Jacket + layers",
            Self::LightJacket => "Light jacket + pants",
            Self::TShirtAndJeans => "T-shirt + jeans",
            Self::TShirtAndShorts => "T-shirt + shorts",
            Self::TankTop => "Tank top + shorts",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutfitNote {
    Windbreaker,
    Umbrella,
    ChanceOfShowers,
    Sunscreen,
}

impl OutfitNote {
    #[must_use]
    pub fn text(self) -> &'static str {
        match self {
            Self::Windbreaker => "Windy: add a windbreaker",
            Self::Umbrella => "Bring an umbrella",
            Self::ChanceOfShowers => "Chance of showers",
            Self::Sunscreen => "High UV: sunscreen + hat",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutfitSuggestion {
    pub tier: OutfitTier,
    pub notes: Vec<OutfitNote>,
}

/// Clothing suggestion from the feels-like temperature (in `units`), current
/// wind in km/h, today's precipitation probability and today's UV maximum.
#[must_use]
pub fn outfit_suggestion(
    apparent: f32,
    wind_kmh: f32,
    precipitation_probability: f32,
    uv_index: f32,
    units: Units,
) -> OutfitSuggestion {
    let bounds = match units {
        Units::Celsius => &CELSIUS_OUTFIT_BOUNDS,
        Units::Fahrenheit => &FAHRENHEIT_OUTFIT_BOUNDS,
    };
    let tier_idx = bounds
        .iter()
        .position(|bound| apparent <= *bound)
        .unwrap_or(bounds.len());

    let mut notes = Vec::new();
    if wind_kmh >= 25.0 {
        notes.push(OutfitNote::Windbreaker);
    }
    if precipitation_probability >= 50.0 {
        notes.push(OutfitNote::Umbrella);
    } else if precipitation_probability >= 25.0 {
        notes.push(OutfitNote::ChanceOfShowers);
    }
    if uv_index >= 6.0 {
        notes.push(OutfitNote::Sunscreen);
    }

    OutfitSuggestion {
        tier: OutfitTier::ORDERED[tier_idx],
        notes,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HumidityComfort {
    Dry,
    Comfortable,
    Muggy,
    Humid,
}

impl HumidityComfort {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Dry => "Dry",
            Self::Comfortable => "Comfortable",
            Self::Muggy => "Muggy",
            Self::Humid => "Humid",
        }
    }
}

#[must_use]
pub fn humidity_comfort(relative_humidity: f32) -> HumidityComfort {
    if relative_humidity < 30.0 {
        HumidityComfort::Dry
    } else if relative_humidity <= 60.0 {
        HumidityComfort::Comfortable
    } else if relative_humidity <= 75.0 {
        HumidityComfort::Muggy
    } else {
        HumidityComfort::Humid
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityLabel {
    Poor,
    Okay,
    Good,
    Great,
}

impl ActivityLabel {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Poor => "Poor",
            Self::Okay => "Okay",
            Self::Good => "Good",
            Self::Great => "Great",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivityScore {
    pub score: u8,
    pub label: ActivityLabel,
}

/// Outdoor score in `0..=100`. Temperature penalties are judged in Celsius
/// whatever the display units; wind is compared after rounding to whole km/h.
#[must_use]
pub fn activity_score(
    apparent: f32,
    units: Units,
    wind_kmh: f32,
    cloud_cover: f32,
    precipitation_probability: f32,
) -> ActivityScore {
    let feels_c = match units {
        Units::Celsius => apparent,
        Units::Fahrenheit => fahrenheit_to_celsius(apparent),
    };
    let wind = round_half_up(wind_kmh);

    let mut score: i32 = 100;
    score -= if feels_c < 0.0 {
        25
    } else if feels_c < 5.0 {
        15
    } else if feels_c > 32.0 {
        25
    } else if feels_c > 27.0 {
        15
    } else {
        0
    };
    score -= if wind > 30 {
        10
    } else if wind > 20 {
        5
    } else {
        0
    };
    if cloud_cover > 90.0 {
        score -= 5;
    }
    score -= if precipitation_probability > 60.0 {
        30
    } else if precipitation_probability > 30.0 {
        10
    } else {
        0
    };

    let score = score.clamp(0, 100) as u8;
    let label = match score {
        0..=29 => ActivityLabel::Poor,
        30..=59 => ActivityLabel::Okay,
        60..=79 => ActivityLabel::Good,
        _ => ActivityLabel::Great,
    };
    ActivityScore { score, label }
}

/// Percentage of daylight with direct sunshine, clamped to `0..=100`.
#[must_use]
pub fn sunshine_share(sunshine_s: f32, daylight_s: f32) -> u8 {
    if daylight_s <= 0.0 {
        return 0;
    }
    let pct = (f64::from(sunshine_s) / f64::from(daylight_s) * 100.0).round();
    pct.clamp(0.0, 100.0) as u8
}

/// Index of the first day reaching the highest maximum within the 7-day
/// horizon. Missing values are skipped.
#[must_use]
pub fn hottest_day_index(highs: &[Option<f32>]) -> Option<usize> {
    first_extreme(highs, |candidate, best| candidate > best)
}

/// Index of the first day reaching the lowest minimum within the 7-day
/// horizon. Missing values are skipped.
#[must_use]
pub fn coldest_day_index(lows: &[Option<f32>]) -> Option<usize> {
    first_extreme(lows, |candidate, best| candidate < best)
}

fn first_extreme(values: &[Option<f32>], beats: impl Fn(f32, f32) -> bool) -> Option<usize> {
    let mut best: Option<(usize, f32)> = None;
    let days = values.iter().take(FORECAST_HORIZON_DAYS).enumerate();
    for (idx, value) in days.filter_map(|(idx, value)| value.map(|v| (idx, v))) {
        if best.is_none_or(|(_, best_value)| beats(value, best_value)) {
            best = Some((idx, value));
        }
    }
    best.map(|(idx, _)| idx)
}

#[must_use]
pub fn uv_tip(uv_index: f32) -> &'static str {
    if uv_index >= 6.0 {
        "Wear sunscreen and seek shade at midday."
    } else if uv_index >= 3.0 {
        "Consider SPF and sunglasses."
    } else {
        "Low risk today."
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RainOutlook {
    Likely,
    Possible,
    Unlikely,
}

impl RainOutlook {
    #[must_use]
    pub fn text(self) -> &'static str {
        match self {
            Self::Likely => "High chance of rain, bring an umbrella.",
            Self::Possible => "Possible showers later.",
            Self::Unlikely => "Unlikely to rain.",
        }
    }
}

#[must_use]
pub fn rain_outlook(precipitation_probability: f32) -> RainOutlook {
    if precipitation_probability >= 60.0 {
        RainOutlook::Likely
    } else if precipitation_probability >= 30.0 {
        RainOutlook::Possible
    } else {
        RainOutlook::Unlikely
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SunEventKind {
    Sunrise,
    Sunset,
}

impl SunEventKind {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Sunrise => "Sunrise",
            Self::Sunset => "Sunset",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SunEvent {
    pub kind: SunEventKind,
    pub at: NaiveDateTime,
}

/// During the day the next event is today's sunset, at night today's sunrise.
#[must_use]
pub fn next_sun_event(is_day: bool, today: &DailyForecast) -> Option<SunEvent> {
    if is_day {
        today.sunset.map(|at| SunEvent {
            kind: SunEventKind::Sunset,
            at,
        })
    } else {
        today.sunrise.map(|at| SunEvent {
            kind: SunEventKind::Sunrise,
            at,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeekSummary {
    pub average_high: Option<f32>,
    pub average_low: Option<f32>,
    pub total_precipitation_mm: f32,
    pub max_uv_index: Option<f32>,
}

#[must_use]
pub fn week_summary(daily: &[DailyForecast]) -> WeekSummary {
    let week = &daily[..daily.len().min(FORECAST_HORIZON_DAYS)];
    let highs: Vec<f32> = week.iter().filter_map(|d| d.temperature_max).collect();
    let lows: Vec<f32> = week.iter().filter_map(|d| d.temperature_min).collect();
    WeekSummary {
        average_high: mean(&highs),
        average_low: mean(&lows),
        total_precipitation_mm: week.iter().filter_map(|d| d.precipitation_sum_mm).sum(),
        max_uv_index: week.iter().filter_map(|d| d.uv_index_max).reduce(f32::max),
    }
}

#[allow(clippy::cast_precision_loss)]
fn mean(values: &[f32]) -> Option<f32> {
    if values.is_empty() {
        None
    } else {
        Some(values.iter().sum::<f32>() / values.len() as f32)
    }
}
