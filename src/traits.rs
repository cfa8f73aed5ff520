//! Interfaces to the reference data a flight is planned against.

use crate::geometry::Region;

/// Supplies the no-fly zones and the central area.
///
/// Both are fetched once per planning call and treated as read-only.
pub trait RegionProvider {
    type Error;

    fn no_fly_zones(&self) -> Result<Vec<Region>, Self::Error>;

    fn central_area(&self) -> Result<Region, Self::Error>;
}
