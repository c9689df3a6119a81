//! The avalanche bulletin document and the lookup of a massif's danger level.
//!
//! The bulletin is a single JSON document shared by all massifs:
//!
//! ```json
//! { "date": { "bucegi": { "peste_1800": { "nivel": 3, "text": "însemnat" },
//!                         "sub_1800":   { "nivel": 2, "text": "moderat" },
//!                         "mesaj": "..." } } }
//! ```

use crate::types::summary::AvalancheAssessment;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Altitude splitting the two bulletin bands. Unrelated to the per-massif
/// station threshold.
pub const BAND_BOUNDARY_ALTITUDE: u32 = 1800;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BulletinDocument {
    /// Bulletin entries keyed by bulletin key (see [`crate::ReferenceData::bulletin_key`]).
    #[serde(rename = "date", default)]
    pub massifs: HashMap<String, MassifBulletin>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MassifBulletin {
    #[serde(rename = "peste_1800")]
    pub above: Option<BandRisk>,
    #[serde(rename = "sub_1800")]
    pub below: Option<BandRisk>,
    #[serde(rename = "mesaj")]
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BandRisk {
    #[serde(rename = "nivel")]
    pub level: u8,
    #[serde(default)]
    pub text: String,
}

/// Which half of the bulletin applies to an altitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AltitudeBand {
    Below,
    AtOrAbove,
}

impl AltitudeBand {
    pub fn for_altitude(altitude: u32) -> Self {
        if altitude >= BAND_BOUNDARY_ALTITUDE {
            AltitudeBand::AtOrAbove
        } else {
            AltitudeBand::Below
        }
    }
}

impl fmt::Display for AltitudeBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AltitudeBand::Below => write!(f, "<{}m", BAND_BOUNDARY_ALTITUDE),
            AltitudeBand::AtOrAbove => write!(f, "≥{}m", BAND_BOUNDARY_ALTITUDE),
        }
    }
}

impl MassifBulletin {
    pub fn band(&self, band: AltitudeBand) -> Option<&BandRisk> {
        match band {
            AltitudeBand::Below => self.below.as_ref(),
            AltitudeBand::AtOrAbove => self.above.as_ref(),
        }
    }
}

impl BulletinDocument {
    /// The assessment for `bulletin_key` at `altitude`, if the bulletin has a
    /// record for that massif and band.
    pub fn assessment(&self, bulletin_key: &str, altitude: u32) -> Option<AvalancheAssessment> {
        let massif = self.massifs.get(bulletin_key)?;
        let risk = massif.band(AltitudeBand::for_altitude(altitude))?;
        Some(AvalancheAssessment {
            level: risk.level,
            text: risk.text.clone(),
            message: massif.message.clone(),
        })
    }
}
