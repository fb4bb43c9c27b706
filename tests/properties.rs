use proptest::prelude::*;
use weatherflow::domain::weather::{
    Units, activity_score, coldest_day_index, condition_for, format_wind_direction,
    hottest_day_index, known_condition_codes, sunshine_share, uv_index_level,
};

proptest! {
    #[test]
    fn wind_direction_repeats_every_full_turn(degrees in -720.0f32..720.0, turns in -3i32..3) {
        let shifted = degrees + 360.0 * turns as f32;
        // Exact sector boundaries can flip under float error; stay clear of them.
        let offset = (degrees.rem_euclid(22.5) - 11.25).abs();
        prop_assume!(offset > 0.01);
        prop_assert_eq!(format_wind_direction(degrees), format_wind_direction(shifted));
    }

    #[test]
    fn activity_score_stays_in_range(
        apparent in -60.0f32..60.0,
        wind in 0.0f32..200.0,
        cloud in 0.0f32..100.0,
        rain in 0.0f32..100.0,
        fahrenheit in any::<bool>(),
    ) {
        let units = if fahrenheit { Units::Fahrenheit } else { Units::Celsius };
        let activity = activity_score(apparent, units, wind, cloud, rain);
        prop_assert!(activity.score <= 100);
        prop_assert!(activity.score >= 30);
    }

    #[test]
    fn sunshine_share_is_a_percentage(sunshine in 0.0f32..100_000.0, daylight in -10.0f32..100_000.0) {
        let share = sunshine_share(sunshine, daylight);
        prop_assert!(share <= 100);
        if daylight <= 0.0 {
            prop_assert_eq!(share, 0);
        }
    }

    #[test]
    fn unknown_codes_fall_back_to_clear_sky(code in -1000i32..1000) {
        prop_assume!(known_condition_codes().all(|known| known != code));
        let info = condition_for(code, Some(true));
        prop_assert_eq!(info.description.as_ref(), "Clear sky");
    }

    #[test]
    fn hottest_and_coldest_pick_extremes(values in prop::collection::vec(prop::option::of(-40.0f32..50.0), 0..10)) {
        let week: Vec<Option<f32>> = values.iter().take(7).copied().collect();
        let present: Vec<f32> = week.iter().flatten().copied().collect();
        match hottest_day_index(&values) {
            Some(idx) => {
                let max = present.iter().copied().fold(f32::NEG_INFINITY, f32::max);
                prop_assert!(idx < 7);
                prop_assert_eq!(values[idx], Some(max));
                prop_assert!(week[..idx].iter().flatten().all(|v| *v < max));
            }
            None => prop_assert!(present.is_empty()),
        }
        match coldest_day_index(&values) {
            Some(idx) => {
                let min = present.iter().copied().fold(f32::INFINITY, f32::min);
                prop_assert_eq!(values[idx], Some(min));
                prop_assert!(week[..idx].iter().flatten().all(|v| *v > min));
            }
            None => prop_assert!(present.is_empty()),
        }
    }

    #[test]
    fn uv_levels_never_decrease(a in 0.0f32..15.0, b in 0.0f32..15.0) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(uv_index_level(low) as u8 <= uv_index_level(high) as u8);
    }
}

#[test]
fn sunshine_share_edge_cases() {
    assert_eq!(sunshine_share(0.0, 0.0), 0);
    assert_eq!(sunshine_share(3600.0, 0.0), 0);
    assert_eq!(sunshine_share(50_000.0, 40_000.0), 100);
    assert_eq!(sunshine_share(20_000.0, 40_000.0), 50);
}
