//! Weather data models

use serde::{Deserialize, Serialize};

/// Fallback temperature in degrees Celsius when a reading is absent
pub const DEFAULT_TEMPERATURE_CELSIUS: f64 = 25.0;

/// Fallback relative humidity percentage when a reading is absent
pub const DEFAULT_HUMIDITY_PERCENT: f64 = 50.0;

/// Fallback wind speed in km/h when a reading is absent
pub const DEFAULT_WIND_SPEED_KMH: f64 = 5.0;

/// A normalized weather reading used for advisory evaluation.
///
/// Every field is concrete: absent inputs have already been replaced by
/// defaults, and the free-text condition labels have been reduced to the
/// two rain flags the rule chains depend on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReading {
    /// Current air temperature in degrees Celsius
    pub temperature_celsius: f64,
    /// Current relative humidity, 0-100
    pub humidity_percent: f64,
    /// Current wind speed in km/h
    pub wind_speed_kmh: f64,
    /// Whether the current condition label mentions rain
    pub rain_now: bool,
    /// Whether any forecast day's condition label mentions rain
    pub rain_ahead: bool,
}

impl Default for WeatherReading {
    fn default() -> Self {
        Self {
            temperature_celsius: DEFAULT_TEMPERATURE_CELSIUS,
            humidity_percent: DEFAULT_HUMIDITY_PERCENT,
            wind_speed_kmh: DEFAULT_WIND_SPEED_KMH,
            rain_now: false,
            rain_ahead: false,
        }
    }
}

impl WeatherReading {
    /// True if rain is either falling now or expected in the forecast
    pub fn rain_expected(&self) -> bool {
        self.rain_now || self.rain_ahead
    }
}

/// Categorical farming recommendations derived from one weather reading.
///
/// Every field is always populated; each category has a quiet-weather
/// default message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdvisoryRecord {
    pub irrigation: String,
    pub protection: String,
    pub soil: String,
    pub fertilizer: String,
}
