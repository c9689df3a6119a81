//! Per-factor thresholds and remarks.
//!
//! Every function here is pure and operates on the rounded values of a
//! [`DailySummary`]. Thresholds:
//!
//! | Factor | yellow | red |
//! |---|---|---|
//! | windchill (°C) | ≤ -15 | ≤ -25 |
//! | wind speed (km/h) | ≥ 30 | > 50 |
//! | wind gusts (km/h) | > 50 | > 70 |
//! | precipitation max/h (mm) | ≥ 2 | > 5 |
//! | precipitation probability (%) | > 40 | > 70 |
//! | visibility (m) | < 5000 | < 1000 |
//! | UV index | ≥ 4 | ≥ 8 |
//! | humidity (%) | > 90 | - |
//! | snow depth (cm) | > 100 | - |
//! | weather code | 3, 45, 61, 71 | 48, 95 |

use crate::risk::tier::Tier;
use crate::types::summary::{DailySummary, VisibilitySnapshots};
use crate::types::weather_code::WeatherCode;
use serde::{Deserialize, Serialize};

/// Visibility assumed when the summary has none, in meters.
const FALLBACK_VISIBILITY: i32 = 24_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FactorId {
    Windchill,
    Wind,
    Gusts,
    Precipitation,
    PrecipitationProbability,
    Visibility,
    Uv,
    Humidity,
    SnowDepth,
    WeatherCode,
}

impl FactorId {
    /// All factors in reporting order.
    pub const ALL: [FactorId; 10] = [
        FactorId::Windchill,
        FactorId::Wind,
        FactorId::Gusts,
        FactorId::Precipitation,
        FactorId::PrecipitationProbability,
        FactorId::Visibility,
        FactorId::Uv,
        FactorId::Humidity,
        FactorId::SnowDepth,
        FactorId::WeatherCode,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FactorId::Windchill => "Windchill (08-20)",
            FactorId::Wind => "Wind (08-20)",
            FactorId::Gusts => "Wind gusts (08-20)",
            FactorId::Precipitation => "Precipitation (max/h 08-20)",
            FactorId::PrecipitationProbability => "Precipitation probability",
            FactorId::Visibility => "Visibility (08-20)",
            FactorId::Uv => "UV index",
            FactorId::Humidity => "Humidity (08-20)",
            FactorId::SnowDepth => "Snow depth",
            FactorId::WeatherCode => "Condition",
        }
    }

    /// Name used in the one-line summary of hazards.
    pub fn short_name(&self) -> &'static str {
        match self {
            FactorId::Windchill => "Cold",
            FactorId::Wind => "Wind",
            FactorId::Gusts => "Gusts",
            FactorId::Precipitation | FactorId::PrecipitationProbability => "Precipitation",
            FactorId::Visibility => "Fog",
            FactorId::Uv => "Strong sun",
            FactorId::Humidity => "Humidity",
            FactorId::SnowDepth => "Snow",
            FactorId::WeatherCode => "Bad weather",
        }
    }
}

/// One classified metric of the daily summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskFactor {
    pub id: FactorId,
    pub label: String,
    /// The metric the tier was computed from.
    pub value: f64,
    /// The metric formatted for display, with its unit.
    pub display_value: String,
    pub tier: Tier,
    pub remark: String,
}

impl RiskFactor {
    /// Text representing this factor in the hazard summary.
    pub fn summary_name(&self) -> &str {
        match self.id {
            FactorId::WeatherCode => &self.display_value,
            other => other.short_name(),
        }
    }
}

pub fn windchill_tier(celsius: i32) -> Tier {
    if celsius <= -25 {
        Tier::Red
    } else if celsius <= -15 {
        Tier::Yellow
    } else {
        Tier::Green
    }
}

pub fn windchill_remark(celsius: i32) -> &'static str {
    match windchill_tier(celsius) {
        Tier::Red => "Critical frostbite risk within minutes. Avoid exposure.",
        Tier::Yellow => "Requires technical winter gear and face protection.",
        Tier::Green => "Acceptable felt temperature.",
    }
}

pub fn wind_tier(kmh: i32) -> Tier {
    if kmh > 50 {
        Tier::Red
    } else if kmh >= 30 {
        Tier::Yellow
    } else {
        Tier::Green
    }
}

pub fn wind_remark(kmh: i32) -> &'static str {
    match wind_tier(kmh) {
        Tier::Red => "Makes hiking on ridges extremely dangerous.",
        Tier::Yellow => "Strong wind, requires balance and a windstopper.",
        Tier::Green => "Light wind, does not affect mobility.",
    }
}

pub fn gusts_tier(kmh: i32) -> Tier {
    if kmh > 70 {
        Tier::Red
    } else if kmh > 50 {
        Tier::Yellow
    } else {
        Tier::Green
    }
}

pub fn gusts_remark(kmh: i32) -> &'static str {
    match gusts_tier(kmh) {
        Tier::Red => "Dangerous gusts. Major risk of losing balance.",
        Tier::Yellow => "Strong gusts. Take care in exposed areas.",
        Tier::Green => "Moderate gusts, no particular danger.",
    }
}

pub fn precipitation_tier(mm_per_hour: f64) -> Tier {
    if mm_per_hour > 5.0 {
        Tier::Red
    } else if mm_per_hour >= 2.0 {
        Tier::Yellow
    } else {
        Tier::Green
    }
}

pub fn precipitation_remark(mm_per_hour: f64) -> &'static str {
    match precipitation_tier(mm_per_hour) {
        Tier::Red => "Near-zero visibility, major risk of getting lost.",
        Tier::Yellow => "Moderate rain or snow, waterproof clothing required.",
        Tier::Green => "No significant precipitation.",
    }
}

pub fn precipitation_probability_tier(percent: i32) -> Tier {
    if percent > 70 {
        Tier::Red
    } else if percent > 40 {
        Tier::Yellow
    } else {
        Tier::Green
    }
}

pub fn precipitation_probability_remark(percent: i32) -> &'static str {
    match precipitation_probability_tier(percent) {
        Tier::Red => "Precipitation almost certain. Pack waterproof gear.",
        Tier::Yellow => "Moderate chance of precipitation. Stay alert.",
        Tier::Green => "Low chance of precipitation.",
    }
}

pub fn visibility_tier(meters: i32) -> Tier {
    if meters < 1000 {
        Tier::Red
    } else if meters < 5000 {
        Tier::Yellow
    } else {
        Tier::Green
    }
}

/// Formats a visibility distance: meters below 1 km, whole kilometers above.
pub fn format_visibility(meters: i32) -> String {
    if meters < 1000 {
        format!("{}m", meters)
    } else {
        format!("{}km", crate::utils::round_to_int(f64::from(meters) / 1000.0))
    }
}

/// Describes how visibility evolves over the day.
pub fn visibility_remark(snapshots: &VisibilitySnapshots) -> String {
    format!(
        "Evolution: {} at 08:00, {} at 12:00, {} at 16:00.",
        format_visibility(snapshots.h08),
        format_visibility(snapshots.h12),
        format_visibility(snapshots.h16)
    )
}

pub fn uv_tier(index: i32) -> Tier {
    if index >= 8 {
        Tier::Red
    } else if index >= 4 {
        Tier::Yellow
    } else {
        Tier::Green
    }
}

pub fn uv_remark(index: i32) -> &'static str {
    match uv_tier(index) {
        Tier::Red => "Extreme sunburn risk. Maximum sun protection required.",
        Tier::Yellow => "Moderate UV index, sunscreen recommended.",
        Tier::Green => "Low UV index.",
    }
}

pub fn humidity_tier(percent: i32) -> Tier {
    if percent > 90 {
        Tier::Yellow
    } else {
        Tier::Green
    }
}

pub fn humidity_remark(percent: i32) -> &'static str {
    match humidity_tier(percent) {
        Tier::Green => "Humidity within normal range.",
        _ => "Extreme humidity, high risk of condensation and fog.",
    }
}

pub fn snow_depth_tier(cm: i32) -> Tier {
    if cm > 100 {
        Tier::Yellow
    } else {
        Tier::Green
    }
}

pub fn snow_depth_remark(cm: i32) -> &'static str {
    if cm > 100 {
        "Deep snow cover, snowshoes or skis required."
    } else if cm > 20 {
        "Thin but present snow cover. Watch for icy patches."
    } else {
        "Minimal snow cover."
    }
}

pub fn weather_code_tier(code: i64) -> Tier {
    match code {
        95 | 48 => Tier::Red,
        45 | 71 | 61 | 3 => Tier::Yellow,
        _ => Tier::Green,
    }
}

pub fn weather_code_remark(code: i64) -> &'static str {
    match code {
        95 => "Thunderstorm imminent. Do NOT set out.",
        45 | 48 => "Dense fog, visibility reduced to a few meters.",
        61 | 71 => "Active precipitation. Reduced visibility and comfort.",
        _ => "Generally good weather conditions.",
    }
}

/// Classifies every monitored metric of `summary`, in [`FactorId::ALL`] order.
pub fn classify(summary: &DailySummary) -> Vec<RiskFactor> {
    FactorId::ALL
        .iter()
        .map(|id| classify_factor(*id, summary))
        .collect()
}

fn classify_factor(id: FactorId, summary: &DailySummary) -> RiskFactor {
    let (value, display_value, tier, remark) = match id {
        FactorId::Windchill => {
            let celsius = summary.min_apparent_temperature.unwrap_or(0);
            (
                f64::from(celsius),
                format!("{}°C", celsius),
                windchill_tier(celsius),
                windchill_remark(celsius).to_string(),
            )
        }
        FactorId::Wind => {
            let kmh = summary.max_wind_speed;
            (
                f64::from(kmh),
                format!("{} km/h", kmh),
                wind_tier(kmh),
                wind_remark(kmh).to_string(),
            )
        }
        FactorId::Gusts => {
            let kmh = summary.max_wind_gusts;
            (
                f64::from(kmh),
                format!("{} km/h", kmh),
                gusts_tier(kmh),
                gusts_remark(kmh).to_string(),
            )
        }
        FactorId::Precipitation => {
            let mm = summary.max_hourly_precipitation;
            (
                mm,
                format!("{} mm/h", mm),
                precipitation_tier(mm),
                precipitation_remark(mm).to_string(),
            )
        }
        FactorId::PrecipitationProbability => {
            let percent = summary.max_precipitation_probability;
            (
                f64::from(percent),
                format!("{}%", percent),
                precipitation_probability_tier(percent),
                precipitation_probability_remark(percent).to_string(),
            )
        }
        FactorId::Visibility => {
            let display = match summary.min_visibility {
                Some(m) if m < 1000 => format!("{} m", m),
                Some(m) => format!("{} km", crate::utils::round_to_int(f64::from(m) / 1000.0)),
                None => "N/A".to_string(),
            };
            let meters = summary.min_visibility.unwrap_or(FALLBACK_VISIBILITY);
            (
                f64::from(meters),
                display,
                visibility_tier(meters),
                visibility_remark(&summary.visibility_snapshots),
            )
        }
        FactorId::Uv => {
            let index = summary.max_uv_index;
            (
                f64::from(index),
                index.to_string(),
                uv_tier(index),
                uv_remark(index).to_string(),
            )
        }
        FactorId::Humidity => {
            let percent = summary.average_humidity;
            (
                f64::from(percent),
                format!("{}%", percent),
                humidity_tier(percent),
                humidity_remark(percent).to_string(),
            )
        }
        FactorId::SnowDepth => {
            let cm = summary.max_snow_depth_cm;
            (
                f64::from(cm),
                format!("{} cm", cm),
                snow_depth_tier(cm),
                snow_depth_remark(cm).to_string(),
            )
        }
        FactorId::WeatherCode => {
            let code = summary.midday_weather_code;
            (
                code as f64,
                WeatherCode::from_i64(code).description().to_string(),
                weather_code_tier(code),
                weather_code_remark(code).to_string(),
            )
        }
    };
    RiskFactor {
        id,
        label: id.label().to_string(),
        value,
        display_value,
        tier,
        remark,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wind_tiers_are_monotonic() {
        assert_eq!(wind_tier(29), Tier::Green);
        assert_eq!(wind_tier(30), Tier::Yellow);
        assert_eq!(wind_tier(50), Tier::Yellow);
        assert_eq!(wind_tier(51), Tier::Red);
        let tiers: Vec<Tier> = (0..=120).map(wind_tier).collect();
        assert!(tiers.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_threshold_boundaries() {
        assert_eq!(windchill_tier(-14), Tier::Green);
        assert_eq!(windchill_tier(-15), Tier::Yellow);
        assert_eq!(windchill_tier(-24), Tier::Yellow);
        assert_eq!(windchill_tier(-25), Tier::Red);

        assert_eq!(gusts_tier(50), Tier::Green);
        assert_eq!(gusts_tier(51), Tier::Yellow);
        assert_eq!(gusts_tier(70), Tier::Yellow);
        assert_eq!(gusts_tier(71), Tier::Red);

        assert_eq!(precipitation_tier(1.9), Tier::Green);
        assert_eq!(precipitation_tier(2.0), Tier::Yellow);
        assert_eq!(precipitation_tier(5.0), Tier::Yellow);
        assert_eq!(precipitation_tier(5.1), Tier::Red);

        assert_eq!(precipitation_probability_tier(40), Tier::Green);
        assert_eq!(precipitation_probability_tier(41), Tier::Yellow);
        assert_eq!(precipitation_probability_tier(71), Tier::Red);

        assert_eq!(visibility_tier(5000), Tier::Green);
        assert_eq!(visibility_tier(4999), Tier::Yellow);
        assert_eq!(visibility_tier(999), Tier::Red);

        assert_eq!(uv_tier(3), Tier::Green);
        assert_eq!(uv_tier(4), Tier::Yellow);
        assert_eq!(uv_tier(8), Tier::Red);

        assert_eq!(humidity_tier(90), Tier::Green);
        assert_eq!(humidity_tier(100), Tier::Yellow);
        assert_eq!(snow_depth_tier(100), Tier::Green);
        assert_eq!(snow_depth_tier(400), Tier::Yellow);
    }

    #[test]
    fn test_decreasing_severity_never_raises_tier() {
        // Walk each metric from dangerous towards safe.
        let windchill: Vec<Tier> = (-40..=10).map(windchill_tier).collect();
        assert!(windchill.windows(2).all(|w| w[0] >= w[1]));
        let visibility: Vec<Tier> = (0..=30).map(|k| visibility_tier(k * 500)).collect();
        assert!(visibility.windows(2).all(|w| w[0] >= w[1]));
        let gusts: Vec<Tier> = (0..=120).rev().map(gusts_tier).collect();
        assert!(gusts.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn test_weather_code_tiers() {
        for code in [95, 48] {
            assert_eq!(weather_code_tier(code), Tier::Red);
        }
        for code in [45, 71, 61, 3] {
            assert_eq!(weather_code_tier(code), Tier::Yellow);
        }
        for code in [0, 1, 2, 51, 80] {
            assert_eq!(weather_code_tier(code), Tier::Green);
        }
        assert_eq!(weather_code_remark(48), weather_code_remark(45));
    }

    #[test]
    fn test_visibility_remark_formats_snapshots() {
        let remark = visibility_remark(&VisibilitySnapshots {
            h08: 800,
            h12: 4_600,
            h16: 24_000,
        });
        assert_eq!(remark, "Evolution: 800m at 08:00, 5km at 12:00, 24km at 16:00.");
    }

    #[test]
    fn test_snow_depth_remark_has_intermediate_text() {
        assert_eq!(snow_depth_tier(50), Tier::Green);
        assert_ne!(snow_depth_remark(50), snow_depth_remark(10));
    }

    #[test]
    fn test_classify_keeps_table_order() {
        let summary = DailySummary {
            max_temperature: Some(-8),
            max_wind_speed: 31,
            max_wind_gusts: 45,
            total_precipitation: 0.0,
            max_hourly_precipitation: 0.0,
            total_snowfall: 0.0,
            max_snow_depth_cm: 120,
            min_apparent_temperature: Some(-27),
            midday_weather_code: 45,
            max_precipitation_probability: 10,
            max_uv_index: 2,
            min_visibility: Some(600),
            visibility_snapshots: VisibilitySnapshots {
                h08: 600,
                h12: 2_000,
                h16: 9_000,
            },
            average_humidity: 95,
        };
        let factors = classify(&summary);
        let ids: Vec<FactorId> = factors.iter().map(|f| f.id).collect();
        assert_eq!(ids, FactorId::ALL.to_vec());

        let windchill = &factors[0];
        assert_eq!(windchill.tier, Tier::Red);
        assert_eq!(windchill.display_value, "-27°C");
        assert_eq!(windchill.remark, windchill_remark(-27));

        let visibility = factors.iter().find(|f| f.id == FactorId::Visibility).unwrap();
        assert_eq!(visibility.display_value, "600 m");
        assert_eq!(visibility.tier, Tier::Red);

        let code = factors.iter().find(|f| f.id == FactorId::WeatherCode).unwrap();
        assert_eq!(code.display_value, "Fog");
        assert_eq!(code.summary_name(), "Fog");
        assert_eq!(code.tier, Tier::Yellow);
    }

    #[test]
    fn test_missing_values_use_safe_defaults() {
        let summary = DailySummary {
            max_temperature: None,
            max_wind_speed: 0,
            max_wind_gusts: 0,
            total_precipitation: 0.0,
            max_hourly_precipitation: 0.0,
            total_snowfall: 0.0,
            max_snow_depth_cm: 0,
            min_apparent_temperature: None,
            midday_weather_code: 0,
            max_precipitation_probability: 0,
            max_uv_index: 0,
            min_visibility: None,
            visibility_snapshots: VisibilitySnapshots::default(),
            average_humidity: 50,
        };
        let factors = classify(&summary);
        assert!(factors.iter().all(|f| f.tier == Tier::Green));
        let visibility = factors.iter().find(|f| f.id == FactorId::Visibility).unwrap();
        assert_eq!(visibility.display_value, "N/A");
        assert_eq!(visibility.value, 24_000.0);
    }
}
