#![allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]

use ratatui::style::Color;

use crate::domain::weather::{Backdrop, ConditionInfo, Rgb, Severity, TextTone};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorCapability {
    TrueColor,
    Xterm256,
    Basic16,
}

/// Colors for one render, derived from the current condition's backdrop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub background: Color,
    pub surface: Color,
    pub popup_surface: Color,
    pub text: Color,
    pub muted_text: Color,
    pub accent: Color,
    pub border: Color,
    pub success: Color,
    pub warning: Color,
    pub caution: Color,
    pub danger: Color,
    pub info: Color,
    pub extreme: Color,
}

pub fn detect_color_capability() -> ColorCapability {
    if std::env::var_os("NO_COLOR").is_some() {
        return ColorCapability::Basic16;
    }

    let colorterm = std::env::var("COLORTERM")
        .unwrap_or_default()
        .to_lowercase();
    if colorterm.contains("truecolor") || colorterm.contains("24bit") {
        return ColorCapability::TrueColor;
    }

    let term = std::env::var("TERM").unwrap_or_default().to_lowercase();
    if term.contains("256color") {
        ColorCapability::Xterm256
    } else {
        ColorCapability::Basic16
    }
}

/// Dashboard theme for a condition. The backdrop's first two stops become the
/// background and panel surface; its last stop seeds the accent.
#[must_use]
pub fn theme_for(condition: &ConditionInfo, capability: ColorCapability) -> Theme {
    theme_from_backdrop(condition.backdrop, condition.text_tone, capability)
}

#[must_use]
pub fn theme_from_backdrop(
    backdrop: Backdrop,
    tone: TextTone,
    capability: ColorCapability,
) -> Theme {
    let background = darken_for_terminal(backdrop.from, tone);
    let surface = mix(darken_for_terminal(backdrop.via, tone), background, 0.35);
    let popup_surface = mix(surface, Rgb(15, 23, 42), 0.45);
    let panels = [background, surface, popup_surface];

    let text_seed = match tone {
        TextTone::Light => Rgb(248, 250, 252),
        TextTone::Dark => Rgb(17, 24, 39),
    };
    let muted_seed = match tone {
        TextTone::Light => Rgb(203, 213, 225),
        TextTone::Dark => Rgb(55, 65, 81),
    };

    let border_seed = mix(backdrop.to, text_seed, 0.4);
    let paint = |rgb: Rgb| quantize(to_color(rgb), capability);
    Theme {
        background: paint(background),
        surface: paint(surface),
        popup_surface: paint(popup_surface),
        text: paint(ensure_contrast(text_seed, &panels, 4.5)),
        muted_text: paint(ensure_contrast(muted_seed, &panels, 3.0)),
        accent: paint(ensure_contrast(backdrop.to, &panels, 3.0)),
        border: paint(ensure_contrast(border_seed, &panels, 2.2)),
        success: paint(ensure_contrast(Rgb(74, 222, 128), &panels, 3.0)),
        warning: paint(ensure_contrast(Rgb(253, 224, 71), &panels, 3.0)),
        caution: paint(ensure_contrast(Rgb(251, 146, 60), &panels, 3.0)),
        danger: paint(ensure_contrast(Rgb(248, 113, 113), &panels, 3.0)),
        info: paint(ensure_contrast(Rgb(147, 197, 253), &panels, 3.0)),
        extreme: paint(ensure_contrast(Rgb(216, 180, 254), &panels, 3.0)),
    }
}

/// Color for a UV severity tag.
#[must_use]
pub fn severity_color(theme: &Theme, severity: Severity) -> Color {
    match severity {
        Severity::Green => theme.success,
        Severity::Yellow => theme.warning,
        Severity::Orange => theme.caution,
        Severity::Red => theme.danger,
        Severity::Purple => theme.extreme,
    }
}

// Web gradients are tuned for large bright areas; terminal panels need a
// darker base under light text.
fn darken_for_terminal(rgb: Rgb, tone: TextTone) -> Rgb {
    match tone {
        TextTone::Light => mix(rgb, Rgb(2, 6, 23), 0.55),
        TextTone::Dark => mix(rgb, Rgb(241, 245, 249), 0.25),
    }
}

fn to_color(Rgb(r, g, b): Rgb) -> Color {
    Color::Rgb(r, g, b)
}

fn mix(a: Rgb, b: Rgb, t: f32) -> Rgb {
    let t = t.clamp(0.0, 1.0);
    let channel = |x: u8, y: u8| -> u8 {
        (f32::from(x) + (f32::from(y) - f32::from(x)) * t)
            .round()
            .clamp(0.0, 255.0) as u8
    };
    Rgb(channel(a.0, b.0), channel(a.1, b.1), channel(a.2, b.2))
}

/// Nudges `fg` toward black or white until it reaches `min_ratio` against
/// every background, or as close as 24 steps get.
fn ensure_contrast(fg: Rgb, backgrounds: &[Rgb], min_ratio: f32) -> Rgb {
    let worst = |color: Rgb| {
        backgrounds
            .iter()
            .map(|bg| contrast_ratio(color, *bg))
            .fold(f32::INFINITY, f32::min)
    };
    if backgrounds.is_empty() || worst(fg) >= min_ratio {
        return fg;
    }

    let white = Rgb(255, 255, 255);
    let black = Rgb(0, 0, 0);
    let target = if worst(white) >= worst(black) {
        white
    } else {
        black
    };

    let mut best = (fg, worst(fg));
    for step in 1..=24_u8 {
        let candidate = mix(fg, target, f32::from(step) / 24.0);
        let ratio = worst(candidate);
        if ratio >= min_ratio {
            return candidate;
        }
        if ratio > best.1 {
            best = (candidate, ratio);
        }
    }
    best.0
}

fn contrast_ratio(a: Rgb, b: Rgb) -> f32 {
    let (la, lb) = (relative_luminance(a), relative_luminance(b));
    let (hi, lo) = if la >= lb { (la, lb) } else { (lb, la) };
    (hi + 0.05) / (lo + 0.05)
}

fn relative_luminance(Rgb(r, g, b): Rgb) -> f32 {
    let linear = |v: u8| {
        let s = f32::from(v) / 255.0;
        if s <= 0.040_45 {
            s / 12.92
        } else {
            ((s + 0.055) / 1.055).powf(2.4)
        }
    };
    0.2126 * linear(r) + 0.7152 * linear(g) + 0.0722 * linear(b)
}

pub fn quantize(color: Color, capability: ColorCapability) -> Color {
    match (capability, color) {
        (ColorCapability::Xterm256, Color::Rgb(r, g, b)) => {
            let cube = |v: u8| -> u8 { ((f32::from(v) / 255.0) * 5.0).round() as u8 };
            Color::Indexed(16 + 36 * cube(r) + 6 * cube(g) + cube(b))
        }
        (ColorCapability::Basic16, Color::Rgb(r, g, b)) => basic16(r, g, b),
        (_, c) => c,
    }
}

fn basic16(r: u8, g: u8, b: u8) -> Color {
    let (rf, gf, bf) = (
        f32::from(r) / 255.0,
        f32::from(g) / 255.0,
        f32::from(b) / 255.0,
    );
    let max = rf.max(gf).max(bf);
    let min = rf.min(gf).min(bf);
    let delta = max - min;
    let light = (max + min) / 2.0;

    if delta < 0.08 {
        return match light {
            l if l < 0.20 => Color::Black,
            l if l < 0.40 => Color::DarkGray,
            l if l < 0.72 => Color::Gray,
            _ => Color::White,
        };
    }

    let hue = if (max - rf).abs() < f32::EPSILON {
        60.0 * ((gf - bf) / delta).rem_euclid(6.0)
    } else if (max - gf).abs() < f32::EPSILON {
        60.0 * (((bf - rf) / delta) + 2.0)
    } else {
        60.0 * (((rf - gf) / delta) + 4.0)
    };

    let (dim, bright) = match hue {
        h if !(30.0..330.0).contains(&h) => (Color::Red, Color::LightRed),
        h if h < 90.0 => (Color::Yellow, Color::LightYellow),
        h if h < 150.0 => (Color::Green, Color::LightGreen),
        h if h < 210.0 => (Color::Cyan, Color::LightCyan),
        h if h < 270.0 => (Color::Blue, Color::LightBlue),
        _ => (Color::Magenta, Color::LightMagenta),
    };
    if light >= 0.55 { bright } else { dim }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::weather::{condition_for, known_condition_codes};

    fn rgb(color: Color) -> Rgb {
        match color {
            Color::Rgb(r, g, b) => Rgb(r, g, b),
            other => panic!("expected rgb, got {other:?}"),
        }
    }

    #[test]
    fn text_stays_readable_on_every_backdrop() {
        for code in known_condition_codes() {
            for is_day in [Some(true), Some(false)] {
                let theme = theme_for(&condition_for(code, is_day), ColorCapability::TrueColor);
                let ratio = contrast_ratio(rgb(theme.text), rgb(theme.surface));
                assert!(ratio >= 4.4, "code {code} ratio {ratio}");
            }
        }
    }

    #[test]
    fn dark_tone_uses_dark_text() {
        let theme = theme_for(&condition_for(71, Some(true)), ColorCapability::TrueColor);
        let light = theme_for(&condition_for(73, Some(true)), ColorCapability::TrueColor);
        let dark_text = relative_luminance(rgb(theme.text));
        assert!(dark_text < relative_luminance(rgb(light.text)));
    }

    #[test]
    fn quantize_respects_capability() {
        let color = Color::Rgb(255, 0, 0);
        assert_eq!(quantize(color, ColorCapability::TrueColor), color);
        assert_eq!(
            quantize(color, ColorCapability::Xterm256),
            Color::Indexed(196)
        );
        assert_eq!(quantize(color, ColorCapability::Basic16), Color::Red);
    }

    #[test]
    fn severity_maps_to_distinct_roles() {
        let theme = theme_for(&condition_for(0, Some(true)), ColorCapability::TrueColor);
        assert_eq!(severity_color(&theme, Severity::Green), theme.success);
        assert_eq!(severity_color(&theme, Severity::Purple), theme.extreme);
    }
}
