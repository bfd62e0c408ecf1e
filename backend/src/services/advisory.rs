//! Rule-based agricultural advisory engine
//!
//! Maps a weather snapshot to four categorical recommendations: irrigation,
//! crop protection, soil handling, and fertilizer timing. Each category is
//! an ordered chain of mutually exclusive conditions; the first matching
//! rule wins and a default message covers quiet weather. The chains are
//! evaluated independently, so the same snapshot can trigger rules in some
//! categories and none in others.
//!
//! The engine is a pure function: no state, no I/O, no randomness. Missing
//! input fields fall back to defaults; only present fields with the wrong
//! type are rejected.

use serde_json::{Map, Value};

use crate::error::{AppError, AppResult};
use shared::{
    AdvisoryRecord, WeatherReading, DEFAULT_HUMIDITY_PERCENT, DEFAULT_TEMPERATURE_CELSIUS,
    DEFAULT_WIND_SPEED_KMH,
};

// Irrigation messages
pub const IRRIGATION_RAIN: &str =
    "Suspend irrigation. Rain is expected, so conserve water and avoid waterlogging.";
pub const IRRIGATION_HEAT: &str =
    "Irrigate frequently during early morning or evening to reduce heat stress on crops.";
pub const IRRIGATION_DRY: &str =
    "Apply light, frequent irrigation to compensate for rapid evaporation.";
pub const IRRIGATION_DEFAULT: &str = "Maintain standard irrigation schedule.";

// Crop protection messages
pub const PROTECTION_WIND: &str =
    "Avoid pesticide spraying in strong wind and provide support for tall crops.";
pub const PROTECTION_RAIN: &str =
    "Monitor crops for fungal diseases such as blight and mildew during wet weather.";
pub const PROTECTION_COLD: &str =
    "Protect seedlings from cold stress and cover nursery beds against frost.";
pub const PROTECTION_FUNGAL: &str =
    "High fungal disease risk. Consider a preventive fungicide application.";
pub const PROTECTION_DEFAULT: &str = "Routine pest monitoring suggested.";

// Soil handling messages
pub const SOIL_RAIN: &str = "Avoid heavy machinery on wet soil to prevent compaction.";
pub const SOIL_HEAT: &str = "Apply mulch to conserve soil moisture in extreme heat.";
pub const SOIL_DEFAULT: &str = "Soil conditions are stable.";

// Fertilizer timing messages
pub const FERTILIZER_WIND: &str =
    "Hold off foliar fertilizer application; wind will carry the spray off target.";
pub const FERTILIZER_RAIN: &str =
    "Delay fertilizer application until after the rain to prevent runoff and leaching.";
pub const FERTILIZER_DRY_HEAT: &str =
    "Avoid chemical fertilizer in hot, dry conditions to prevent leaf burn.";
pub const FERTILIZER_DEFAULT: &str = "Conditions are suitable for application.";

/// One entry in a category's rule chain
struct Rule {
    applies: fn(&WeatherReading) -> bool,
    advice: &'static str,
}

fn rain_expected(w: &WeatherReading) -> bool {
    w.rain_expected()
}

fn rain_now(w: &WeatherReading) -> bool {
    w.rain_now
}

fn extreme_heat(w: &WeatherReading) -> bool {
    w.temperature_celsius > 35.0
}

fn scorching_heat(w: &WeatherReading) -> bool {
    w.temperature_celsius > 40.0
}

fn very_dry(w: &WeatherReading) -> bool {
    w.humidity_percent < 30.0
}

fn strong_wind(w: &WeatherReading) -> bool {
    w.wind_speed_kmh > 15.0
}

fn cold_snap(w: &WeatherReading) -> bool {
    w.temperature_celsius < 10.0
}

// Single conjunction: humid AND warm together, not two separate thresholds
fn fungal_weather(w: &WeatherReading) -> bool {
    w.humidity_percent > 85.0 && (20.0..=30.0).contains(&w.temperature_celsius)
}

fn dry_heat(w: &WeatherReading) -> bool {
    w.humidity_percent < 40.0 && w.temperature_celsius > 30.0
}

// Rule order encodes which risk dominates when conditions overlap;
// reordering entries changes which message surfaces.
const IRRIGATION_RULES: &[Rule] = &[
    Rule { applies: rain_expected, advice: IRRIGATION_RAIN },
    Rule { applies: extreme_heat, advice: IRRIGATION_HEAT },
    Rule { applies: very_dry, advice: IRRIGATION_DRY },
];

const PROTECTION_RULES: &[Rule] = &[
    Rule { applies: strong_wind, advice: PROTECTION_WIND },
    Rule { applies: rain_now, advice: PROTECTION_RAIN },
    Rule { applies: cold_snap, advice: PROTECTION_COLD },
    Rule { applies: fungal_weather, advice: PROTECTION_FUNGAL },
];

const SOIL_RULES: &[Rule] = &[
    Rule { applies: rain_expected, advice: SOIL_RAIN },
    Rule { applies: scorching_heat, advice: SOIL_HEAT },
];

const FERTILIZER_RULES: &[Rule] = &[
    Rule { applies: strong_wind, advice: FERTILIZER_WIND },
    Rule { applies: rain_expected, advice: FERTILIZER_RAIN },
    Rule { applies: dry_heat, advice: FERTILIZER_DRY_HEAT },
];

fn first_match(rules: &[Rule], reading: &WeatherReading, default: &'static str) -> String {
    rules
        .iter()
        .find(|rule| (rule.applies)(reading))
        .map(|rule| rule.advice)
        .unwrap_or(default)
        .to_string()
}

/// The advisory engine.
///
/// Stateless; safe to call from any number of concurrent request handlers.
pub struct AdvisoryEngine;

impl AdvisoryEngine {
    /// Evaluate a raw weather snapshot into an advisory record.
    ///
    /// The snapshot is a JSON object with optional `current` and `forecast`
    /// members. Missing fields use defaults; a present field with the wrong
    /// type fails with the offending field's name.
    pub fn evaluate(weather: &Value) -> AppResult<AdvisoryRecord> {
        let reading = Self::normalize(weather)?;
        Ok(Self::evaluate_reading(&reading))
    }

    /// Evaluate an already-normalized reading. Never fails.
    pub fn evaluate_reading(reading: &WeatherReading) -> AdvisoryRecord {
        AdvisoryRecord {
            irrigation: first_match(IRRIGATION_RULES, reading, IRRIGATION_DEFAULT),
            protection: first_match(PROTECTION_RULES, reading, PROTECTION_DEFAULT),
            soil: first_match(SOIL_RULES, reading, SOIL_DEFAULT),
            fertilizer: first_match(FERTILIZER_RULES, reading, FERTILIZER_DEFAULT),
        }
    }

    /// Coerce a raw snapshot into a [`WeatherReading`], applying defaults
    /// for absent fields.
    pub fn normalize(weather: &Value) -> AppResult<WeatherReading> {
        let snapshot = as_object(weather, "weather")?;

        let current = match snapshot.get("current") {
            None | Some(Value::Null) => None,
            Some(value) => Some(as_object(value, "current")?),
        };

        let temperature_celsius =
            number_field(current, "temperature", DEFAULT_TEMPERATURE_CELSIUS)?;
        let humidity_percent = number_field(current, "humidity", DEFAULT_HUMIDITY_PERCENT)?;
        let wind_speed_kmh = number_field(current, "windSpeed", DEFAULT_WIND_SPEED_KMH)?;
        let condition = string_field(current, "condition")?;

        let rain_ahead = match snapshot.get("forecast") {
            None | Some(Value::Null) => false,
            Some(Value::Array(days)) => {
                let mut rain = false;
                for day in days {
                    let entry = as_object(day, "forecast")?;
                    let label = string_field(Some(entry), "condition")
                        .map_err(|_| AppError::InvalidInput {
                            field: "forecast.condition".to_string(),
                        })?;
                    rain = rain || mentions_rain(&label);
                }
                rain
            }
            Some(_) => {
                return Err(AppError::InvalidInput {
                    field: "forecast".to_string(),
                })
            }
        };

        Ok(WeatherReading {
            temperature_celsius,
            humidity_percent,
            wind_speed_kmh,
            rain_now: mentions_rain(&condition),
            rain_ahead,
        })
    }
}

/// Case-insensitive check for a rain-indicating condition label
fn mentions_rain(condition: &str) -> bool {
    condition.to_lowercase().contains("rain")
}

fn as_object<'a>(value: &'a Value, field: &str) -> AppResult<&'a Map<String, Value>> {
    value.as_object().ok_or_else(|| AppError::InvalidInput {
        field: field.to_string(),
    })
}

fn number_field(
    object: Option<&Map<String, Value>>,
    field: &str,
    default: f64,
) -> AppResult<f64> {
    match object.and_then(|o| o.get(field)) {
        None | Some(Value::Null) => Ok(default),
        Some(value) => value.as_f64().ok_or_else(|| AppError::InvalidInput {
            field: field.to_string(),
        }),
    }
}

fn string_field(object: Option<&Map<String, Value>>, field: &str) -> AppResult<String> {
    match object.and_then(|o| o.get(field)) {
        None | Some(Value::Null) => Ok(String::new()),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(_) => Err(AppError::InvalidInput {
            field: field.to_string(),
        }),
    }
}
