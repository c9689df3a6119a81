use crate::stations::error::ResolveStationError;
use crate::stations::reference_data::ReferenceData;
use crate::types::massif::{LatLon, MassifProfile};
use std::sync::Arc;

/// The station picked for a massif and target altitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedStation {
    pub location: LatLon,
    pub high_regime: bool,
}

/// Picks the low- or high-altitude station of a massif.
#[derive(Debug, Clone)]
pub struct StationResolver {
    reference: Arc<ReferenceData>,
}

impl StationResolver {
    pub fn new(reference: Arc<ReferenceData>) -> Self {
        Self { reference }
    }

    pub fn reference(&self) -> &ReferenceData {
        &self.reference
    }

    pub fn profile(&self, massif_id: &str) -> Result<&MassifProfile, ResolveStationError> {
        self.reference
            .massif(massif_id)
            .ok_or_else(|| ResolveStationError::UnknownMassif(massif_id.to_string()))
    }

    /// Resolves the coordinates to query for `massif_id` at `altitude` meters.
    ///
    /// Altitudes strictly above the massif threshold use the high station.
    /// Altitudes beyond the massif's maximum are accepted as-is.
    pub fn resolve(
        &self,
        massif_id: &str,
        altitude: u32,
    ) -> Result<ResolvedStation, ResolveStationError> {
        let profile = self.profile(massif_id)?;
        let coordinates = self
            .reference
            .stations(massif_id)
            .ok_or_else(|| ResolveStationError::MissingCoordinates(massif_id.to_string()))?;

        let high_regime = profile.is_high_regime(altitude);
        let location = if high_regime {
            coordinates.high()
        } else {
            coordinates.low()
        };
        Ok(ResolvedStation {
            location,
            high_regime,
        })
    }
}
