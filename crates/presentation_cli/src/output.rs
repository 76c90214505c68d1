//! Plain-text rendering of forecasts and zones

use std::fmt::Write;

use domain::{Zone, ZoneId};
use integration_open_meteo::Forecast;

/// Days shown by `fetch`
const DAYS_SHOWN: usize = 7;

fn with_unit(value: f64, unit: Option<&str>) -> String {
    unit.map_or_else(|| format!("{value}"), |unit| format!("{value} {unit}"))
}

/// One-line description of the current conditions
pub fn summary_line(forecast: &Forecast) -> String {
    let Some(current) = forecast.current.as_ref() else {
        return "no current conditions".to_string();
    };

    let mut parts = Vec::new();
    if let Some(temperature) = current.get_f64("temperature_2m") {
        parts.push(with_unit(
            temperature,
            forecast.current_unit("temperature_2m").or(Some("°C")),
        ));
    }
    if let Some(condition) = current.condition() {
        parts.push(condition.to_string());
    }
    if let Some(wind) = current.get_f64("wind_speed_10m") {
        let unit = forecast.current_unit("wind_speed_10m").unwrap_or("km/h");
        parts.push(format!("wind {wind} {unit}"));
    }

    if parts.is_empty() {
        format!("{} current values", current.len())
    } else {
        parts.join(", ")
    }
}

/// Multi-line forecast report for `fetch`
pub fn render_forecast(zone_id: &ZoneId, forecast: &Forecast) -> String {
    let mut out = String::new();
    let _ = write!(out, "Forecast for {zone_id}");
    if let Some(timezone) = &forecast.timezone {
        let _ = write!(out, " ({timezone})");
    }
    out.push('\n');

    match &forecast.current {
        Some(current) => {
            out.push_str("\nCurrent:\n");
            for (key, value) in current.iter() {
                let unit = forecast
                    .current_unit(key)
                    .map(|u| format!(" {u}"))
                    .unwrap_or_default();
                let _ = writeln!(out, "  {key:<22} {value}{unit}");
            }
        },
        None => out.push_str("\nCurrent: not reported\n"),
    }

    if !forecast.daily.is_empty() {
        out.push_str("\nDaily:\n");
        for day in forecast.next_days(DAYS_SHOWN) {
            let range = match (day.temperature_2m_min, day.temperature_2m_max) {
                (Some(min), Some(max)) => format!("{min:.1}..{max:.1} °C"),
                _ => "-".to_string(),
            };
            let precipitation = day
                .precipitation_sum
                .map_or_else(|| "-".to_string(), |p| format!("{p:.1} mm"));
            let condition = day
                .condition()
                .map(|c| c.to_string())
                .unwrap_or_default();
            let _ = writeln!(
                out,
                "  {:<12} {range:<16} {precipitation:<10} {condition}",
                day.time.to_string()
            );
        }
    }

    let _ = write!(out, "\nHourly records: {}", forecast.hourly.len());
    out
}

/// Table of configured zones for `zones`
pub fn render_zones(zones: &[Zone], tracked: &[ZoneId]) -> String {
    if zones.is_empty() {
        return "No zones configured".to_string();
    }

    let mut out = String::new();
    for zone in zones {
        let marker = if tracked.contains(&zone.id) { '*' } else { ' ' };
        let _ = writeln!(
            out,
            "{marker} {:<20} {:<16} {:>9.4} {:>10.4} {:>7.0} m",
            zone.id.as_str(),
            zone.name,
            zone.latitude(),
            zone.longitude(),
            zone.radius_meters
        );
    }
    out.push_str("\n* tracked");
    out
}
