use std::borrow::Cow;

/// Icon keys the front ends know how to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconKey {
    Sun,
    Moon,
    Cloud,
    CloudRain,
    CloudSnow,
    Zap,
    EyeOff,
}

impl IconKey {
    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Sun => "☀",
            Self::Moon => "☾",
            Self::Cloud => "☁",
            Self::CloudRain => "☂",
            Self::CloudSnow => "❄",
            Self::Zap => "⚡",
            Self::EyeOff => "░",
        }
    }

    #[must_use]
    pub fn ascii(self) -> &'static str {
        match self {
            Self::Sun => "SUN",
            Self::Moon => "MON",
            Self::Cloud => "CLD",
            Self::CloudRain => "RAN",
            Self::CloudSnow => "SNW",
            Self::Zap => "THN",
            Self::EyeOff => "FOG",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Three-stop background gradient, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Backdrop {
    pub from: Rgb,
    pub via: Rgb,
    pub to: Rgb,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextTone {
    Light,
    Dark,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConditionInfo {
    pub code: i32,
    pub description: Cow<'static, str>,
    pub icon: IconKey,
    pub backdrop: Backdrop,
    pub text_tone: TextTone,
}

struct ConditionEntry {
    code: i32,
    description: &'static str,
    icon: IconKey,
    backdrop: Backdrop,
    text_tone: TextTone,
}

impl ConditionEntry {
    fn info(&self) -> ConditionInfo {
        ConditionInfo {
            code: self.code,
            description: Cow::Borrowed(self.description),
            icon: self.icon,
            backdrop: self.backdrop,
            text_tone: self.text_tone,
        }
    }
}

const BLUE_200: Rgb = Rgb(191, 219, 254);
const BLUE_300: Rgb = Rgb(147, 197, 253);
const BLUE_400: Rgb = Rgb(96, 165, 250);
const BLUE_500: Rgb = Rgb(59, 130, 246);
const BLUE_600: Rgb = Rgb(37, 99, 235);
const BLUE_700: Rgb = Rgb(29, 78, 216);
const BLUE_800: Rgb = Rgb(30, 64, 175);
const GRAY_300: Rgb = Rgb(209, 213, 219);
const GRAY_400: Rgb = Rgb(156, 163, 175);
const GRAY_500: Rgb = Rgb(107, 114, 128);
const GRAY_600: Rgb = Rgb(75, 85, 99);
const GRAY_700: Rgb = Rgb(55, 65, 81);
const GRAY_800: Rgb = Rgb(31, 41, 55);
const GRAY_900: Rgb = Rgb(17, 24, 39);
const PURPLE_400: Rgb = Rgb(192, 132, 252);
const PURPLE_800: Rgb = Rgb(107, 33, 168);
const PURPLE_900: Rgb = Rgb(88, 28, 135);
const ORANGE_300: Rgb = Rgb(253, 186, 116);
const YELLOW_600: Rgb = Rgb(202, 138, 4);
const YELLOW_700: Rgb = Rgb(161, 98, 7);
const INDIGO_900: Rgb = Rgb(49, 46, 129);
const PINK_800: Rgb = Rgb(157, 23, 77);

const fn gradient(from: Rgb, via: Rgb, to: Rgb) -> Backdrop {
    Backdrop { from, via, to }
}

const fn entry(
    code: i32,
    description: &'static str,
    icon: IconKey,
    backdrop: Backdrop,
    text_tone: TextTone,
) -> ConditionEntry {
    ConditionEntry {
        code,
        description,
        icon,
        backdrop,
        text_tone,
    }
}

const NIGHT_BACKDROP: Backdrop = gradient(INDIGO_900, PURPLE_900, PINK_800);
const CLEAR: Backdrop = gradient(BLUE_400, PURPLE_400, ORANGE_300);
const MOSTLY_CLEAR: Backdrop = gradient(BLUE_400, BLUE_500, BLUE_600);
const PARTLY_CLOUDY: Backdrop = gradient(GRAY_400, GRAY_500, BLUE_500);
const OVERCAST: Backdrop = gradient(GRAY_500, GRAY_600, GRAY_700);
const FOG: Backdrop = gradient(GRAY_300, GRAY_400, GRAY_500);
const DRIZZLE_LIGHT: Backdrop = gradient(GRAY_400, BLUE_400, BLUE_500);
const DRIZZLE: Backdrop = gradient(GRAY_500, BLUE_500, BLUE_600);
const DRIZZLE_DENSE: Backdrop = gradient(GRAY_600, BLUE_600, BLUE_700);
const ICE_LIGHT: Backdrop = gradient(GRAY_400, BLUE_300, BLUE_500);
const ICE_DENSE: Backdrop = gradient(GRAY_600, BLUE_500, BLUE_700);
const RAIN_LIGHT: Backdrop = gradient(BLUE_500, BLUE_600, GRAY_600);
const RAIN: Backdrop = gradient(BLUE_600, GRAY_600, GRAY_700);
const RAIN_HEAVY: Backdrop = gradient(GRAY_700, GRAY_800, BLUE_800);
const ICE_RAIN: Backdrop = gradient(BLUE_400, BLUE_600, GRAY_600);
const ICE_RAIN_HEAVY: Backdrop = gradient(GRAY_700, BLUE_700, BLUE_800);
const SNOW_LIGHT: Backdrop = gradient(BLUE_200, BLUE_300, GRAY_400);
const SNOW: Backdrop = gradient(BLUE_300, GRAY_300, GRAY_500);
const SNOW_HEAVY: Backdrop = gradient(GRAY_400, GRAY_500, GRAY_600);
const STORM: Backdrop = gradient(GRAY_800, PURPLE_800, YELLOW_600);
const HAIL: Backdrop = gradient(GRAY_900, PURPLE_900, YELLOW_700);

use IconKey::{Cloud, CloudRain, CloudSnow, EyeOff, Sun, Zap};
use TextTone::{Dark, Light};

// First entry is the fallback for codes missing from the table.
static CONDITIONS: &[ConditionEntry] = &[
    entry(0, "Clear sky", Sun, CLEAR, Light),
    entry(1, "Mainly clear", Sun, MOSTLY_CLEAR, Light),
    entry(2, "Partly cloudy", Cloud, PARTLY_CLOUDY, Light),
    entry(3, "Overcast", Cloud, OVERCAST, Light),
    entry(45, "Fog", EyeOff, FOG, Light),
    entry(48, "Depositing rime fog", EyeOff, FOG, Light),
    entry(51, "Light drizzle", CloudRain, DRIZZLE_LIGHT, Light),
    entry(53, "Moderate drizzle", CloudRain, DRIZZLE, Light),
    entry(55, "Dense drizzle", CloudRain, DRIZZLE_DENSE, Light),
    entry(56, "Light freezing drizzle", CloudRain, ICE_LIGHT, Light),
    entry(57, "Dense freezing drizzle", CloudRain, ICE_DENSE, Light),
    entry(61, "Slight rain", CloudRain, RAIN_LIGHT, Light),
    entry(63, "Moderate rain", CloudRain, RAIN, Light),
    entry(65, "Heavy rain", CloudRain, RAIN_HEAVY, Light),
    entry(66, "Light freezing rain", CloudRain, ICE_RAIN, Light),
    entry(67, "Heavy freezing rain", CloudRain, ICE_RAIN_HEAVY, Light),
    entry(71, "Slight snow", CloudSnow, SNOW_LIGHT, Dark),
    entry(73, "Moderate snow", CloudSnow, SNOW, Light),
    entry(75, "Heavy snow", CloudSnow, SNOW_HEAVY, Light),
    entry(77, "Snow grains", CloudSnow, SNOW, Light),
    entry(80, "Slight rain showers", CloudRain, RAIN_LIGHT, Light),
    entry(81, "Moderate rain showers", CloudRain, RAIN, Light),
    entry(82, "Violent rain showers", CloudRain, RAIN_HEAVY, Light),
    entry(85, "Slight snow showers", CloudSnow, SNOW_LIGHT, Dark),
    entry(86, "Heavy snow showers", CloudSnow, SNOW_HEAVY, Light),
    entry(95, "Thunderstorm", Zap, STORM, Light),
    entry(96, "Thunderstorm with hail", Zap, HAIL, Light),
    entry(99, "Thunderstorm with heavy hail", Zap, HAIL, Light),
];

/// Condition for a weather code. Codes missing from the table resolve to the
/// "Clear sky" entry. `is_day == Some(false)` turns codes 0 and 1 into their
/// night variants.
#[must_use]
pub fn condition_for(code: i32, is_day: Option<bool>) -> ConditionInfo {
    let mut info = lookup(code).unwrap_or(&CONDITIONS[0]).info();
    if is_day == Some(false) && matches!(code, 0 | 1) {
        info.icon = IconKey::Moon;
        info.backdrop = NIGHT_BACKDROP;
        info.description = Cow::Owned(night_description(&info.description));
    }
    info
}

/// Codes with a dedicated table entry.
pub fn known_condition_codes() -> impl Iterator<Item = i32> {
    CONDITIONS.iter().map(|entry| entry.code)
}

fn lookup(code: i32) -> Option<&'static ConditionEntry> {
    CONDITIONS.iter().find(|entry| entry.code == code)
}

fn night_description(day: &str) -> String {
    if day.contains("Clear") {
        day.replacen("Clear", "Clear night", 1)
    } else {
        format!("{day} night")
    }
}
