//! Immutable lookup tables describing the supported massifs.
//!
//! A [`ReferenceData`] value is built once at startup, either from the built-in
//! Carpathian table or from a JSON file, and then shared read-only (usually
//! behind an `Arc`) by the resolver and the aggregator.

use crate::stations::error::ReferenceDataError;
use crate::types::massif::{MassifProfile, StationCoordinates};
use log::info;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::path::Path;

/// Massif list, station coordinates and bulletin keys.
///
/// # Examples
///
/// ```
/// use massif_forecast::ReferenceData;
///
/// let data = ReferenceData::carpathians();
/// let bucegi = data.massif("bucegi").unwrap();
/// assert_eq!(bucegi.threshold_altitude, 1800);
/// assert_eq!(data.bulletin_key("parang_sureanu"), Some("parang"));
/// assert_eq!(data.bulletin_key("cozia"), None);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferenceData {
    massifs: Vec<MassifProfile>,
    stations: HashMap<String, StationCoordinates>,
    /// Massif id to key in the avalanche bulletin. Not every massif has one.
    #[serde(default)]
    bulletin_keys: HashMap<String, String>,
}

impl ReferenceData {
    /// Builds a table from its parts, rejecting duplicate massifs and entries
    /// that point to massifs which are not listed.
    pub fn new(
        massifs: Vec<MassifProfile>,
        stations: HashMap<String, StationCoordinates>,
        bulletin_keys: HashMap<String, String>,
    ) -> Result<Self, ReferenceDataError> {
        let data = Self {
            massifs,
            stations,
            bulletin_keys,
        };
        data.validate()?;
        Ok(data)
    }

    /// Parses a table from JSON shaped as
    /// `{ "massifs": [...], "stations": {...}, "bulletinKeys": {...} }`.
    pub fn from_json_str(json: &str) -> Result<Self, ReferenceDataError> {
        let data: ReferenceData = serde_json::from_str(json)?;
        data.validate()?;
        Ok(data)
    }

    /// Loads a table from a JSON file.
    pub async fn load(path: &Path) -> Result<Self, ReferenceDataError> {
        let json = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| ReferenceDataError::FileRead(path.to_path_buf(), e))?;
        let data = Self::from_json_str(&json)?;
        info!(
            "Loaded {} massifs from reference file {}",
            data.massifs.len(),
            path.display()
        );
        Ok(data)
    }

    fn validate(&self) -> Result<(), ReferenceDataError> {
        let mut seen = HashSet::new();
        for massif in &self.massifs {
            if !seen.insert(massif.id.as_str()) {
                return Err(ReferenceDataError::DuplicateMassif(massif.id.clone()));
            }
        }
        if let Some(id) = self.stations.keys().find(|id| !seen.contains(id.as_str())) {
            return Err(ReferenceDataError::OrphanStation(id.clone()));
        }
        if let Some(id) = self
            .bulletin_keys
            .keys()
            .find(|id| !seen.contains(id.as_str()))
        {
            return Err(ReferenceDataError::OrphanBulletinKey(id.clone()));
        }
        Ok(())
    }

    /// All massifs in display order.
    pub fn massifs(&self) -> &[MassifProfile] {
        &self.massifs
    }

    pub fn massif(&self, id: &str) -> Option<&MassifProfile> {
        self.massifs.iter().find(|m| m.id == id)
    }

    pub fn stations(&self, id: &str) -> Option<&StationCoordinates> {
        self.stations.get(id)
    }

    pub fn bulletin_key(&self, id: &str) -> Option<&str> {
        self.bulletin_keys.get(id).map(String::as_str)
    }

    /// The Romanian Carpathian massifs covered by the Meteoromania
    /// avalanche bulletin.
    pub fn carpathians() -> Self {
        let massifs = vec![
            profile("bucegi", "Bucegi", 2505, 1800, 3, 5, 2, true),
            profile("fagaras", "Făgăraș", 2544, 1600, 4, 5, 2, true),
            profile("rodnei", "Rodnei", 2303, 1800, 3, 5, 2, true),
            profile("retezat", "Retezat", 2509, 1600, 4, 5, 2, true),
            profile("piatra_craiului", "Piatra Craiului", 2238, 1400, 5, 5, 3, true),
            profile("bistritei", "Bistriței", 1859, 1700, 2, 4, 2, false),
            profile("ceahlau", "Ceahlău", 1907, 1800, 2, 3, 2, false),
            profile("calimani", "Călimani", 2100, 1800, 3, 5, 2, true),
            profile("hasmas", "Hășmaș", 1792, 1700, 2, 2, 2, false),
            profile("maramuresului", "Maramureșului", 1957, 1800, 3, 4, 2, true),
            profile("parang_sureanu", "Parâng, Șureanu", 2519, 2000, 3, 5, 2, true),
            profile("ciucas_piatra_mare", "Ciucaș, Piatra Mare", 1954, 1600, 2, 3, 2, false),
            profile("tarcu_godeanu", "Țarcu, Godeanu", 2190, 1800, 3, 4, 2, true),
            profile("buila", "Buila-Vânturărița", 1885, 1400, 2, 5, 2, true),
            profile("cozia", "Cozia", 1668, 1668, 2, 2, 2, false),
            profile("iezer", "Iezer-Păpușa", 2391, 1700, 3, 4, 2, true),
            profile("baiului", "Baiului", 1799, 1700, 2, 3, 2, false),
            profile("cindrel", "Cindrel", 2244, 1800, 2, 3, 2, false),
            profile("mehedinti_cernei", "Mehedinți, Cernei", 1466, 1800, 2, 2, 2, false),
            profile("apuseni", "Apuseni", 1849, 1500, 2, 3, 1, false),
        ];

        let stations = [
            ("bucegi", 45.467, 25.500, 45.400, 25.457),
            ("fagaras", 45.653, 24.787, 45.596, 24.635),
            ("rodnei", 47.613, 24.856, 47.590, 24.630),
            ("retezat", 45.372, 23.064, 45.350, 22.880),
            ("piatra_craiului", 45.506, 25.265, 45.520, 25.215),
            ("bistritei", 47.111, 25.247, 47.111, 25.247),
            ("ceahlau", 46.988, 25.958, 46.978, 25.945),
            ("calimani", 47.111, 25.247, 47.096, 25.233),
            ("hasmas", 46.685, 25.826, 46.685, 25.826),
            ("maramuresului", 47.930, 24.550, 47.930, 24.550),
            ("parang_sureanu", 45.387, 23.482, 45.345, 23.530),
            ("ciucas_piatra_mare", 45.522, 25.926, 45.522, 25.926),
            ("tarcu_godeanu", 45.290, 22.530, 45.290, 22.530),
            ("buila", 45.238, 24.132, 45.238, 24.132),
            ("cozia", 45.302, 24.341, 45.302, 24.341),
            ("iezer", 45.464, 25.088, 45.440, 25.010),
            ("baiului", 45.412, 25.667, 45.412, 25.667),
            ("cindrel", 45.623, 23.892, 45.623, 23.892),
            ("mehedinti_cernei", 45.163, 22.699, 45.163, 22.699),
            ("apuseni", 46.544, 22.854, 46.682, 22.711),
        ]
        .into_iter()
        .map(|(id, lat, lon, lat_high, lon_high)| {
            (
                id.to_string(),
                StationCoordinates {
                    lat,
                    lon,
                    lat_high,
                    lon_high,
                },
            )
        })
        .collect();

        let bulletin_keys = [
            ("bucegi", "bucegi"),
            ("fagaras", "fagaras"),
            ("rodnei", "rodnei"),
            ("retezat", "retezat"),
            ("piatra_craiului", "piatra_craiului"),
            ("bistritei", "bistritei"),
            ("ceahlau", "ceahlau"),
            ("calimani", "calimani"),
            ("hasmas", "hasmas"),
            ("parang_sureanu", "parang"),
            ("tarcu_godeanu", "tarcu"),
            ("apuseni", "apuseni"),
            ("iezer", "iezer_papusa"),
            ("baiului", "baiului"),
            ("ciucas_piatra_mare", "ciucas"),
        ]
        .into_iter()
        .map(|(id, key)| (id.to_string(), key.to_string()))
        .collect();

        Self {
            massifs,
            stations,
            bulletin_keys,
        }
    }
}

impl Default for ReferenceData {
    fn default() -> Self {
        Self::carpathians()
    }
}

#[allow(clippy::too_many_arguments)]
fn profile(
    id: &str,
    name: &str,
    max_altitude: u32,
    threshold_altitude: u32,
    difficulty_summer_above: u8,
    difficulty_winter_above: u8,
    difficulty_summer_below: u8,
    avalanches: bool,
) -> MassifProfile {
    MassifProfile {
        id: id.to_string(),
        name: name.to_string(),
        max_altitude,
        threshold_altitude,
        difficulty_summer_above,
        difficulty_winter_above,
        difficulty_summer_below,
        avalanches,
    }
}
