//! Edinburgh reference data for realistic test fixtures.
//!
//! Coordinates are copies of the ILP REST service documents for the
//! central area, the no-fly zones and the restaurants.

#![allow(dead_code)]

use drone_planner::geo::LngLat;
use drone_planner::geometry::Region;

/// A named location with coordinates.
#[derive(Debug, Clone)]
pub struct Location {
    pub name: &'static str,
    pub lng: f64,
    pub lat: f64,
}

impl Location {
    pub const fn new(name: &'static str, lng: f64, lat: f64) -> Self {
        Self { name, lng, lat }
    }

    pub fn position(&self) -> LngLat {
        LngLat::new(self.lng, self.lat)
    }
}

// ============================================================================
// Restaurants
// ============================================================================

pub const RESTAURANTS: &[Location] = &[
    Location::new("Civerinos Slice", -3.1912869215011597, 55.945535152517735),
    Location::new("Sora Lella Vegan Restaurant", -3.202541470527649, 55.943284737579376),
    Location::new("Domino's Pizza - Edinburgh - Southside", -3.1838572025299072, 55.94449876875712),
    Location::new("Sodeberg Pavillion", -3.1940174102783203, 55.94390696616939),
    Location::new("La Trattoria", -3.1810810679852035, 55.938910643735845),
];

// ============================================================================
// Regions
// ============================================================================

fn ring(points: &[(f64, f64)]) -> Vec<LngLat> {
    points.iter().map(|&(lng, lat)| LngLat::new(lng, lat)).collect()
}

pub fn central_area() -> Region {
    Region::new(
        "central",
        ring(&[
            (-3.192473, 55.946233),
            (-3.192473, 55.942617),
            (-3.184319, 55.942617),
            (-3.184319, 55.946233),
            (-3.192473, 55.946233),
        ]),
    )
}

pub fn george_square() -> Region {
    Region::new(
        "George Square Area",
        ring(&[
            (-3.190578818321228, 55.94402412577528),
            (-3.1899887323379517, 55.94284650540911),
            (-3.187097311019897, 55.94328811724263),
            (-3.187682032585144, 55.944477740393744),
            (-3.190578818321228, 55.94402412577528),
        ]),
    )
}

pub fn no_fly_zones() -> Vec<Region> {
    vec![
        george_square(),
        Region::new(
            "Dr Elsie Inglis Quadrangle",
            ring(&[
                (-3.1907182931900024, 55.94519570234043),
                (-3.1906163692474365, 55.94498241796357),
                (-3.1900262832641597, 55.94507185151027),
                (-3.190133571624756, 55.945276529145245),
                (-3.1907182931900024, 55.94519570234043),
            ]),
        ),
        Region::new(
            "Bristo Square Open Area",
            ring(&[
                (-3.189543485641479, 55.94552313663306),
                (-3.189382553100586, 55.94553214854692),
                (-3.189259171485901, 55.94544803726933),
                (-3.1892001628875732, 55.94533688994374),
                (-3.189194798469543, 55.94519570234043),
                (-3.189135789871216, 55.94511759833873),
                (-3.188138008117676, 55.9452738255664),
                (-3.1885510683059692, 55.946105902745614),
                (-3.1895381212234497, 55.94555918427592),
                (-3.189543485641479, 55.94552313663306),
            ]),
        ),
        Region::new(
            "Bayes Central Area",
            ring(&[
                (-3.1876927614212036, 55.94520696732767),
                (-3.187555968761444, 55.9449621408666),
                (-3.186981976032257, 55.94505676722831),
                (-3.1872327625751495, 55.94536993377657),
                (-3.1874270629882812, 55.94547047150891),
                (-3.1876927614212036, 55.94520696732767),
            ]),
        ),
    ]
}

/// Diamond-shaped zone of radius 0.001 centred on (-3.189, 55.944).
pub fn diamond() -> Region {
    Region::new(
        "diamond",
        ring(&[
            (-3.190, 55.944),
            (-3.189, 55.945),
            (-3.188, 55.944),
            (-3.189, 55.943),
            (-3.190, 55.944),
        ]),
    )
}
