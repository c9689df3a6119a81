//! Defines the reference data structures describing a mountain massif and the
//! weather stations used to query forecasts for it.

use serde::{Deserialize, Serialize};

/// Represents a geographical coordinate using latitude and longitude.
///
/// Latitude is the first element (index 0), and longitude is the second (index 1).
///
/// # Examples
///
/// ```
/// use massif_forecast::LatLon;
///
/// let omu_peak = LatLon(45.445, 25.457);
/// assert_eq!(omu_peak.0, 45.445); // Latitude
/// assert_eq!(omu_peak.1, 25.457); // Longitude
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLon(pub f64, pub f64);

/// Static description of a mountain massif.
///
/// Profiles are loaded once (see [`crate::ReferenceData`]) and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MassifProfile {
    /// Stable identifier, e.g. `"bucegi"`.
    pub id: String,
    /// Display name, e.g. `"Făgăraș"`.
    pub name: String,
    /// Highest summit of the massif in meters.
    pub max_altitude: u32,
    /// Altitude in meters above which the high-altitude station is used.
    pub threshold_altitude: u32,
    /// Summer difficulty (1-5) above the threshold altitude.
    pub difficulty_summer_above: u8,
    /// Winter difficulty (1-5) above the threshold altitude.
    pub difficulty_winter_above: u8,
    /// Summer difficulty (1-5) below the threshold altitude.
    pub difficulty_summer_below: u8,
    /// Whether the massif has avalanche-prone terrain.
    pub avalanches: bool,
}

impl MassifProfile {
    /// Returns `true` when `altitude` falls in the high station regime.
    ///
    /// The comparison is strict: an altitude equal to the threshold is still
    /// considered low.
    pub fn is_high_regime(&self, altitude: u32) -> bool {
        altitude > self.threshold_altitude
    }
}

/// The pair of reference stations used for a massif.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StationCoordinates {
    pub lat: f64,
    pub lon: f64,
    pub lat_high: f64,
    pub lon_high: f64,
}

impl StationCoordinates {
    pub fn low(&self) -> LatLon {
        LatLon(self.lat, self.lon)
    }

    pub fn high(&self) -> LatLon {
        LatLon(self.lat_high, self.lon_high)
    }
}
