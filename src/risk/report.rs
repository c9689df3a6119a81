//! Combines factor tiers and the avalanche outlook into a single verdict.

use crate::risk::avalanche::AvalancheOutlook;
use crate::risk::factors::{classify, RiskFactor};
use crate::risk::tier::Tier;
use crate::types::massif::MassifProfile;
use crate::types::summary::Forecast;
use serde::{Deserialize, Serialize};

pub const STATUS_GOOD: &str = "Good conditions";
pub const STATUS_DIFFICULT: &str = "Difficult conditions";
pub const STATUS_DANGEROUS: &str = "Dangerous conditions";
pub const SUMMARY_NOTHING_HAZARDOUS: &str = "No hazardous phenomena";
pub const SUMMARY_CHECK_AVALANCHE: &str = "Check the avalanche risk!";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverallAssessment {
    pub tier: Tier,
    pub status_text: String,
    /// Distinct hazard names joined with `" + "`, or a fallback sentence.
    pub summary: String,
}

/// Classified view of a [`Forecast`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskReport {
    pub factors: Vec<RiskFactor>,
    pub avalanche: Option<AvalancheOutlook>,
    pub overall: OverallAssessment,
}

impl RiskReport {
    /// Classifies `forecast` for the massif described by `profile`.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use massif_forecast::{
    ///     Condition, DailySummary, Forecast, LatLon, ReferenceData, RiskReport, Tier,
    ///     VisibilitySnapshots,
    /// };
    ///
    /// let summary = DailySummary {
    ///     max_temperature: Some(12),
    ///     max_wind_speed: 35,
    ///     max_wind_gusts: 40,
    ///     total_precipitation: 0.0,
    ///     max_hourly_precipitation: 0.0,
    ///     total_snowfall: 0.0,
    ///     max_snow_depth_cm: 0,
    ///     min_apparent_temperature: Some(5),
    ///     midday_weather_code: 1,
    ///     max_precipitation_probability: 10,
    ///     max_uv_index: 3,
    ///     min_visibility: Some(24_000),
    ///     visibility_snapshots: VisibilitySnapshots { h08: 24_000, h12: 24_000, h16: 24_000 },
    ///     average_humidity: 60,
    /// };
    /// let forecast = Forecast {
    ///     massif_id: "ceahlau".to_string(),
    ///     date: NaiveDate::from_ymd_opt(2026, 7, 1).unwrap(),
    ///     altitude: 1900,
    ///     station: LatLon(46.978, 25.945),
    ///     high_regime: true,
    ///     summary,
    ///     condition: Condition::ClearCloudy,
    ///     avalanche_risk: None,
    /// };
    /// let reference = ReferenceData::carpathians();
    /// let report = RiskReport::assess(&forecast, reference.massif("ceahlau").unwrap());
    /// assert_eq!(report.overall.tier, Tier::Yellow);
    /// assert_eq!(report.overall.summary, "Wind");
    /// ```
    pub fn assess(forecast: &Forecast, profile: &MassifProfile) -> Self {
        let factors = classify(&forecast.summary);
        let avalanche = AvalancheOutlook::evaluate(forecast.avalanche_risk.as_ref(), profile);
        let overall = overall_assessment(&factors, avalanche.as_ref());
        Self {
            factors,
            avalanche,
            overall,
        }
    }

    /// Factors rated yellow or red, in reporting order.
    pub fn urgent_factors(&self) -> impl Iterator<Item = &RiskFactor> {
        self.factors.iter().filter(|f| f.tier.is_urgent())
    }
}

/// Derives the overall verdict.
///
/// Red when the avalanche risk is unknown on serious terrain, the bulletin
/// level is 4 or more, or any factor is red. Yellow when the bulletin level is
/// exactly 3 or any factor is yellow. Green otherwise.
pub fn overall_assessment(
    factors: &[RiskFactor],
    avalanche: Option<&AvalancheOutlook>,
) -> OverallAssessment {
    let unknown_high_risk = avalanche.is_some_and(AvalancheOutlook::is_unknown_high_risk);
    let avalanche_level = avalanche.and_then(AvalancheOutlook::level).unwrap_or(0);
    let worst_factor = factors.iter().map(|f| f.tier).max().unwrap_or(Tier::Green);

    let (tier, status_text) =
        if unknown_high_risk || avalanche_level >= 4 || worst_factor == Tier::Red {
            (Tier::Red, STATUS_DANGEROUS)
        } else if avalanche_level == 3 || worst_factor == Tier::Yellow {
            (Tier::Yellow, STATUS_DIFFICULT)
        } else {
            (Tier::Green, STATUS_GOOD)
        };

    let mut names: Vec<&str> = Vec::new();
    for factor in factors.iter().filter(|f| f.tier.is_urgent()) {
        let name = factor.summary_name();
        if !names.contains(&name) {
            names.push(name);
        }
    }
    let summary = if !names.is_empty() {
        names.join(" + ")
    } else if unknown_high_risk {
        SUMMARY_CHECK_AVALANCHE.to_string()
    } else {
        SUMMARY_NOTHING_HAZARDOUS.to_string()
    };

    OverallAssessment {
        tier,
        status_text: status_text.to_string(),
        summary,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::risk::factors::FactorId;
    use crate::stations::reference_data::ReferenceData;
    use crate::test_utils::date;
    use crate::types::massif::LatLon;
    use crate::types::summary::{AvalancheAssessment, Condition, DailySummary, VisibilitySnapshots};

    fn calm_summary() -> DailySummary {
        DailySummary {
            max_temperature: Some(14),
            max_wind_speed: 10,
            max_wind_gusts: 20,
            total_precipitation: 0.0,
            max_hourly_precipitation: 0.0,
            total_snowfall: 0.0,
            max_snow_depth_cm: 0,
            min_apparent_temperature: Some(8),
            midday_weather_code: 1,
            max_precipitation_probability: 5,
            max_uv_index: 2,
            min_visibility: Some(24_000),
            visibility_snapshots: VisibilitySnapshots {
                h08: 24_000,
                h12: 24_000,
                h16: 24_000,
            },
            average_humidity: 55,
        }
    }

    fn forecast(massif: &str, summary: DailySummary, risk: Option<u8>) -> Forecast {
        Forecast {
            massif_id: massif.to_string(),
            date: date(2026, 2, 1),
            altitude: 2000,
            station: LatLon(45.4, 25.457),
            high_regime: true,
            summary,
            condition: Condition::ClearCloudy,
            avalanche_risk: risk.map(|level| AvalancheAssessment {
                level,
                text: "moderat".to_string(),
                message: None,
            }),
        }
    }

    fn assess(massif: &str, summary: DailySummary, risk: Option<u8>) -> RiskReport {
        let reference = ReferenceData::carpathians();
        let profile = reference.massif(massif).unwrap();
        RiskReport::assess(&forecast(massif, summary, risk), profile)
    }

    #[test]
    fn test_all_green() {
        let report = assess("ceahlau", calm_summary(), None);
        assert_eq!(report.overall.tier, Tier::Green);
        assert_eq!(report.overall.status_text, STATUS_GOOD);
        assert_eq!(report.overall.summary, SUMMARY_NOTHING_HAZARDOUS);
        assert!(report.avalanche.is_none());
        assert_eq!(report.urgent_factors().count(), 0);
    }

    #[test]
    fn test_bucegi_frostbite_is_red() {
        let summary = DailySummary {
            min_apparent_temperature: Some(-27),
            ..calm_summary()
        };
        let report = assess("bucegi", summary, Some(1));
        let windchill = &report.factors[0];
        assert_eq!(windchill.id, FactorId::Windchill);
        assert_eq!(windchill.tier, Tier::Red);
        assert_eq!(
            windchill.remark,
            "Critical frostbite risk within minutes. Avoid exposure."
        );
        assert_eq!(report.overall.tier, Tier::Red);
        assert_eq!(report.overall.summary, "Cold");
    }

    #[test]
    fn test_unknown_high_risk_alone() {
        let report = assess("maramuresului", calm_summary(), None);
        assert!(report.avalanche.as_ref().unwrap().is_unknown_high_risk());
        assert_eq!(report.overall.tier, Tier::Red);
        assert_eq!(report.overall.status_text, STATUS_DANGEROUS);
        assert_eq!(report.overall.summary, SUMMARY_CHECK_AVALANCHE);
    }

    #[test]
    fn test_avalanche_levels_drive_overall() {
        assert_eq!(assess("bucegi", calm_summary(), Some(4)).overall.tier, Tier::Red);
        assert_eq!(assess("bucegi", calm_summary(), Some(3)).overall.tier, Tier::Yellow);
        // Level 2 is a yellow avalanche reading but does not raise the verdict.
        let report = assess("bucegi", calm_summary(), Some(2));
        assert_eq!(report.avalanche.as_ref().unwrap().tier(), Tier::Yellow);
        assert_eq!(report.overall.tier, Tier::Green);
        assert_eq!(report.overall.summary, SUMMARY_NOTHING_HAZARDOUS);
    }

    #[test]
    fn test_summary_dedupes_in_table_order() {
        let summary = DailySummary {
            max_wind_speed: 35,
            max_hourly_precipitation: 3.0,
            max_precipitation_probability: 80,
            min_visibility: Some(3_000),
            midday_weather_code: 95,
            ..calm_summary()
        };
        let report = assess("ceahlau", summary, None);
        assert_eq!(report.overall.tier, Tier::Red);
        assert_eq!(
            report.overall.summary,
            "Wind + Precipitation + Fog + Thunderstorm"
        );
    }
}
