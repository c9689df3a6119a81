//! Defines the `WeatherCode` enum, mapping the WMO weather interpretation codes
//! returned by Open-Meteo to descriptive variants.

use serde::{Deserialize, Serialize};

/// The subset of WMO weather codes the advisory distinguishes.
///
/// Open-Meteo reports a numeric `weather_code` per hour. Codes that carry no
/// specific advice here collapse into [`WeatherCode::Variable`].
///
/// # Examples
///
/// ```rust
/// use massif_forecast::WeatherCode;
///
/// assert_eq!(WeatherCode::from_i64(45), WeatherCode::Fog);
/// assert_eq!(WeatherCode::from_i64(45).description(), "Fog");
/// assert_eq!(WeatherCode::from_i64(80), WeatherCode::Variable);
/// ```
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum WeatherCode {
    /// Code 0: Clear sky.
    Clear,
    /// Code 1: Mainly clear.
    MainlyClear,
    /// Code 2: Partly cloudy.
    PartlyCloudy,
    /// Code 3: Overcast.
    Overcast,
    /// Code 45: Fog.
    Fog,
    /// Code 48: Depositing rime fog.
    RimeFog,
    /// Code 51: Light drizzle.
    LightDrizzle,
    /// Code 61: Slight rain.
    LightRain,
    /// Code 71: Slight snowfall.
    LightSnow,
    /// Code 95: Thunderstorm.
    Thunderstorm,
    /// Any other code.
    Variable,
}

impl WeatherCode {
    pub fn from_i64(value: i64) -> Self {
        match value {
            0 => WeatherCode::Clear,
            1 => WeatherCode::MainlyClear,
            2 => WeatherCode::PartlyCloudy,
            3 => WeatherCode::Overcast,
            45 => WeatherCode::Fog,
            48 => WeatherCode::RimeFog,
            51 => WeatherCode::LightDrizzle,
            61 => WeatherCode::LightRain,
            71 => WeatherCode::LightSnow,
            95 => WeatherCode::Thunderstorm,
            _ => WeatherCode::Variable,
        }
    }

    /// Short human readable description, used as the factor value and in the
    /// overall summary line.
    pub fn description(&self) -> &'static str {
        match self {
            WeatherCode::Clear => "Clear",
            WeatherCode::MainlyClear => "Mainly clear",
            WeatherCode::PartlyCloudy => "Partly cloudy",
            WeatherCode::Overcast => "Overcast",
            WeatherCode::Fog => "Fog",
            WeatherCode::RimeFog => "Depositing rime fog",
            WeatherCode::LightDrizzle => "Light drizzle",
            WeatherCode::LightRain => "Light rain",
            WeatherCode::LightSnow => "Light snow",
            WeatherCode::Thunderstorm => "Thunderstorm",
            WeatherCode::Variable => "Variable",
        }
    }
}
