//! Flight path representation and GeoJSON rendering.
//!
//! The planner hands back plain positions; this type is what leaves the
//! crate. Rendering happens here so callers never touch the coordinate
//! order of the output format.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::geo::LngLat;

/// An ordered sequence of drone positions, start first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightPath {
    points: Vec<LngLat>,
}

impl FlightPath {
    pub fn new(points: Vec<LngLat>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[LngLat] {
        &self.points
    }

    pub fn into_points(self) -> Vec<LngLat> {
        self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first(&self) -> Option<&LngLat> {
        self.points.first()
    }

    pub fn last(&self) -> Option<&LngLat> {
        self.points.last()
    }

    /// Drops hover steps, i.e. points equal to the point before them.
    pub fn without_hovering(&self) -> FlightPath {
        let mut points = self.points.clone();
        points.dedup();
        FlightPath { points }
    }

    /// Renders the path as a GeoJSON `FeatureCollection` with a single
    /// `LineString` feature.
    pub fn to_geojson(&self) -> Value {
        let coordinates: Vec<[f64; 2]> = self.points.iter().map(|p| [p.lng, p.lat]).collect();
        json!({
            "type": "FeatureCollection",
            "features": [{
                "type": "Feature",
                "geometry": {
                    "type": "LineString",
                    "coordinates": coordinates,
                },
                "properties": {},
            }],
        })
    }
}
