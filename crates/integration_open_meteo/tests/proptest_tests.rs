//! Property-based tests for query construction and series decoding

use integration_open_meteo::{DailyParameter, ForecastRequest, HourlyParameter, OpenMeteoClient};
use proptest::prelude::*;

const DAILY: [DailyParameter; 4] = [
    DailyParameter::Temperature2mMax,
    DailyParameter::Temperature2mMin,
    DailyParameter::PrecipitationSum,
    DailyParameter::WeatherCode,
];

const HOURLY: [HourlyParameter; 4] = [
    HourlyParameter::Temperature2m,
    HourlyParameter::CloudCover,
    HourlyParameter::WindSpeed10m,
    HourlyParameter::PressureMsl,
];

fn value<'a>(pairs: &'a [(&'static str, String)], key: &str) -> &'a str {
    pairs
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, v)| v.as_str())
        .unwrap_or_default()
}

proptest! {
    #[test]
    fn coordinates_round_trip_through_query(
        latitude in -90.0f64..=90.0,
        longitude in -180.0f64..=180.0,
        past_days in 0u8..=92,
    ) {
        let pairs = ForecastRequest::new(latitude, longitude)
            .with_past_days(past_days)
            .query_pairs();

        prop_assert_eq!(pairs.len(), 12);
        prop_assert_eq!(value(&pairs, "latitude").parse::<f64>().unwrap(), latitude);
        prop_assert_eq!(value(&pairs, "longitude").parse::<f64>().unwrap(), longitude);
        prop_assert_eq!(value(&pairs, "past_days").parse::<u8>().unwrap(), past_days);
    }

    #[test]
    fn variable_lists_keep_order_and_length(
        daily in proptest::sample::subsequence(DAILY.to_vec(), 0..=DAILY.len()),
        hourly in proptest::sample::subsequence(HOURLY.to_vec(), 0..=HOURLY.len()),
    ) {
        let pairs = ForecastRequest::new(0.0, 0.0)
            .with_daily(daily.clone())
            .with_hourly(hourly.clone())
            .query_pairs();

        let sent_daily: Vec<&str> = value(&pairs, "daily")
            .split(',')
            .filter(|s| !s.is_empty())
            .collect();
        let expected_daily: Vec<&str> = daily.iter().map(DailyParameter::as_str).collect();
        prop_assert_eq!(sent_daily, expected_daily);

        let sent_hourly: Vec<&str> = value(&pairs, "hourly")
            .split(',')
            .filter(|s| !s.is_empty())
            .collect();
        let expected_hourly: Vec<&str> = hourly.iter().map(HourlyParameter::as_str).collect();
        prop_assert_eq!(sent_hourly, expected_hourly);
    }

    #[test]
    fn daily_columns_transpose_to_rows(
        maxima in proptest::collection::vec(
            proptest::option::of((-600i32..600).prop_map(|tenths| f64::from(tenths) / 10.0)),
            0..16,
        ),
    ) {
        let times: Vec<String> = (0..maxima.len())
            .map(|i| format!("2024-01-{:02}", i + 1))
            .collect();
        let body = serde_json::json!({
            "daily": { "time": times, "temperature_2m_max": maxima }
        })
        .to_string();

        let forecast = OpenMeteoClient::decode(&body).unwrap();
        prop_assert_eq!(forecast.daily.len(), maxima.len());
        for (row, expected) in forecast.daily.iter().zip(&maxima) {
            prop_assert_eq!(row.temperature_2m_max, *expected);
            prop_assert!(row.temperature_2m_min.is_none());
        }
    }
}
