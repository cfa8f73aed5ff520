//! In-memory region provider (fallback when the REST service is unavailable).
//!
//! Holds fixed copies of the reference data, for tests and for running
//! against a cached download of the two REST documents.

use std::convert::Infallible;

use crate::geometry::Region;
use crate::traits::RegionProvider;

#[derive(Debug, Clone)]
pub struct StaticRegions {
    pub no_fly_zones: Vec<Region>,
    pub central_area: Region,
}

impl StaticRegions {
    pub fn new(no_fly_zones: Vec<Region>, central_area: Region) -> Self {
        Self {
            no_fly_zones,
            central_area,
        }
    }

    /// Builds a provider from the `noFlyZones` and `centralArea` JSON bodies.
    pub fn from_json(no_fly_zones: &str, central_area: &str) -> Result<Self, serde_json::Error> {
        Ok(Self {
            no_fly_zones: serde_json::from_str(no_fly_zones)?,
            central_area: serde_json::from_str(central_area)?,
        })
    }
}

impl RegionProvider for StaticRegions {
    type Error = Infallible;

    fn no_fly_zones(&self) -> Result<Vec<Region>, Self::Error> {
        Ok(self.no_fly_zones.clone())
    }

    fn central_area(&self) -> Result<Region, Self::Error> {
        Ok(self.central_area.clone())
    }
}
