//! Japanese report sentence for a forecast.

use crate::types::ForecastResult;

/// Printed in place of a temperature the provider did not report.
pub const ABSENT_TEMPERATURE: &str = "--";

fn celsius(value: Option<f64>) -> String {
    value.map_or_else(|| ABSENT_TEMPERATURE.to_string(), |v| v.to_string())
}

/// Build the sentence inserted into the note.
///
/// With a weather description:
/// `<label>の天気は<weather>です。最高気温は<max>度です。最低気温は<min>度です。`
///
/// Without one:
/// `<label>の最高気温は<max>度、最低気温は<min>度です。`
pub fn format_report(result: &ForecastResult, label: &str) -> String {
    let max = celsius(result.max_temperature_celsius);
    let min = celsius(result.min_temperature_celsius);

    match result.weather_description.as_deref() {
        Some(weather) => format!(
            "{label}の天気は{weather}です。最高気温は{max}度です。最低気温は{min}度です。"
        ),
        None => format!("{label}の最高気温は{max}度、最低気温は{min}度です。"),
    }
}
