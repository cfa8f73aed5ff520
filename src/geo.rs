//! Positions and single-step drone movement.
//!
//! Distances are plain Euclidean distances in degree space. Over the few
//! kilometres a delivery flight covers this is close enough, and it keeps
//! the step length a constant in the same unit as the coordinates.

use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// Distance covered by one drone move, in degrees.
pub const DRONE_MOVE_DISTANCE: f64 = 0.00015;

/// Two positions closer than this are considered the same place.
pub const DRONE_IS_CLOSE_DISTANCE: f64 = 0.00015;

/// Angle that means "stay where you are" for one move.
pub const HOVER_ANGLE: f64 = 999.0;

/// The sixteen headings a drone may fly, in degrees.
///
/// 0° points along increasing longitude (east), 90° along increasing
/// latitude (north).
pub const COMPASS_HEADINGS: [f64; 16] = [
    0.0, 22.5, 45.0, 67.5, 90.0, 112.5, 135.0, 157.5, 180.0, 202.5, 225.0, 247.5, 270.0, 292.5,
    315.0, 337.5,
];

/// Delivery base every order is flown to.
pub const APPLETON_TOWER: LngLat = LngLat::new(-3.186874, 55.944494);

/// A point given by longitude and latitude.
///
/// Equality is exact: two positions are equal only if both coordinates
/// compare equal. Use [`LngLat::is_close_to`] for tolerance checks.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LngLat {
    pub lng: f64,
    pub lat: f64,
}

impl LngLat {
    pub const fn new(lng: f64, lat: f64) -> Self {
        Self { lng, lat }
    }

    /// Euclidean distance to `other`.
    pub fn distance_to(&self, other: &LngLat) -> f64 {
        (self.lng - other.lng).hypot(self.lat - other.lat)
    }

    /// True if `other` is strictly closer than `tolerance`.
    pub fn is_close_to(&self, other: &LngLat, tolerance: f64) -> bool {
        self.distance_to(other) < tolerance
    }

    /// Position after moving `distance` along `angle` degrees.
    pub fn next_position(&self, angle: f64, distance: f64) -> LngLat {
        let radians = angle.to_radians();
        LngLat {
            lng: self.lng + distance * radians.cos(),
            lat: self.lat + distance * radians.sin(),
        }
    }

    /// True if both coordinates are finite and inside the global bounds.
    pub fn is_valid(&self) -> bool {
        self.lng.is_finite()
            && self.lat.is_finite()
            && (-180.0..=180.0).contains(&self.lng)
            && (-90.0..=90.0).contains(&self.lat)
    }
}

impl PartialEq for LngLat {
    fn eq(&self, other: &Self) -> bool {
        self.lng == other.lng && self.lat == other.lat
    }
}

// Coordinates are finite by invariant, so `==` is reflexive.
impl Eq for LngLat {}

impl Hash for LngLat {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Adding 0.0 folds -0.0 into 0.0 so hashing agrees with `==`.
        (self.lng + 0.0).to_bits().hash(state);
        (self.lat + 0.0).to_bits().hash(state);
    }
}
