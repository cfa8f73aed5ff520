//! Point-in-polygon geometry shared by the planner and request validation.
//!
//! Polygons are vertex rings where the last vertex repeats the first.
//! Points lying exactly on an edge count as inside: a no-fly zone's
//! boundary is blocked and the central area's boundary is contained.

use serde::{Deserialize, Serialize};

use crate::geo::LngLat;

/// Cross-product magnitude below which a point is treated as collinear.
const COLLINEAR_EPSILON: f64 = 1e-12;

/// A named polygon, as served for no-fly zones and the central area.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub name: String,
    pub vertices: Vec<LngLat>,
}

impl Region {
    pub fn new(name: impl Into<String>, vertices: Vec<LngLat>) -> Self {
        Self {
            name: name.into(),
            vertices,
        }
    }

    pub fn is_closed(&self) -> bool {
        is_closed_polygon(&self.vertices)
    }

    /// True if `point` is inside the region or on its boundary.
    pub fn contains(&self, point: &LngLat) -> bool {
        is_point_in_polygon(point, &self.vertices)
    }
}

/// A ring is closed when it has at least three vertices and its first and
/// last vertices are exactly equal.
pub fn is_closed_polygon(vertices: &[LngLat]) -> bool {
    if vertices.len() < 3 {
        return false;
    }
    let first = vertices[0];
    let last = vertices[vertices.len() - 1];
    first.lng == last.lng && first.lat == last.lat
}

/// True if `point` lies on the segment from `a` to `b`.
///
/// A zero-length segment contains nothing.
pub fn is_point_on_segment(point: &LngLat, a: &LngLat, b: &LngLat) -> bool {
    if a == b {
        return false;
    }

    let cross = (point.lat - a.lat) * (b.lng - a.lng) - (point.lng - a.lng) * (b.lat - a.lat);
    if cross.abs() > COLLINEAR_EPSILON {
        return false;
    }

    let dot = (point.lng - a.lng) * (b.lng - a.lng) + (point.lat - a.lat) * (b.lat - a.lat);
    if dot < 0.0 {
        return false;
    }

    let squared_length = (b.lng - a.lng).powi(2) + (b.lat - a.lat).powi(2);
    dot <= squared_length
}

/// Ray-casting containment test, inclusive of the boundary.
///
/// The vertex list is not validated; an empty list contains nothing.
pub fn is_point_in_polygon(point: &LngLat, vertices: &[LngLat]) -> bool {
    let n = vertices.len();
    if n == 0 {
        return false;
    }

    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let v1 = &vertices[i];
        let v2 = &vertices[j];
        j = i;

        if is_point_on_segment(point, v1, v2) {
            return true;
        }

        if (v1.lat > point.lat) != (v2.lat > point.lat) {
            let intersect_lng =
                (v2.lng - v1.lng) * (point.lat - v1.lat) / (v2.lat - v1.lat) + v1.lng;
            if point.lng < intersect_lng {
                inside = !inside;
            }
        }
    }

    inside
}

#[cfg(test)]
mod tests {
    use super::*;

    fn central_area() -> Vec<LngLat> {
        vec![
            LngLat::new(-3.192473, 55.946233),
            LngLat::new(-3.192473, 55.942617),
            LngLat::new(-3.184319, 55.942617),
            LngLat::new(-3.184319, 55.946233),
            LngLat::new(-3.192473, 55.946233),
        ]
    }

    fn diamond() -> Vec<LngLat> {
        vec![
            LngLat::new(-3.190, 55.944),
            LngLat::new(-3.189, 55.945),
            LngLat::new(-3.188, 55.944),
            LngLat::new(-3.189, 55.943),
            LngLat::new(-3.190, 55.944),
        ]
    }

    #[test]
    fn test_closed_needs_three_vertices() {
        let a = LngLat::new(0.0, 0.0);
        assert!(!is_closed_polygon(&[]));
        assert!(!is_closed_polygon(&[a, a]));
    }

    #[test]
    fn test_closed_needs_matching_ends() {
        let open = vec![
            LngLat::new(0.0, 0.0),
            LngLat::new(1.0, 0.0),
            LngLat::new(1.0, 1.0),
            LngLat::new(0.0, 1.0),
        ];
        assert!(!is_closed_polygon(&open));
        assert!(is_closed_polygon(&central_area()));
    }

    #[test]
    fn test_closed_has_no_tolerance() {
        let mut ring = central_area();
        ring[4].lng += 1e-12;
        assert!(!is_closed_polygon(&ring));
    }

    #[test]
    fn test_segment_interior_and_ends() {
        let a = LngLat::new(0.0, 0.0);
        let b = LngLat::new(2.0, 2.0);
        assert!(is_point_on_segment(&LngLat::new(1.0, 1.0), &a, &b));
        assert!(is_point_on_segment(&a, &a, &b));
        assert!(is_point_on_segment(&b, &a, &b));
    }

    #[test]
    fn test_segment_rejects_off_line_and_beyond_ends() {
        let a = LngLat::new(0.0, 0.0);
        let b = LngLat::new(2.0, 2.0);
        assert!(!is_point_on_segment(&LngLat::new(1.0, 1.1), &a, &b));
        assert!(!is_point_on_segment(&LngLat::new(-1.0, -1.0), &a, &b));
        assert!(!is_point_on_segment(&LngLat::new(3.0, 3.0), &a, &b));
    }

    #[test]
    fn test_degenerate_segment_contains_nothing() {
        let a = LngLat::new(1.0, 1.0);
        assert!(!is_point_on_segment(&a, &a, &a));
    }

    #[test]
    fn test_point_inside_and_outside() {
        let area = central_area();
        assert!(is_point_in_polygon(&LngLat::new(-3.188, 55.944), &area));
        assert!(!is_point_in_polygon(&LngLat::new(-3.195, 55.948), &area));
    }

    #[test]
    fn test_vertices_are_inside() {
        for polygon in [central_area(), diamond()] {
            for vertex in &polygon {
                assert!(
                    is_point_in_polygon(vertex, &polygon),
                    "vertex {:?} should be inside",
                    vertex
                );
            }
        }
    }

    #[test]
    fn test_edge_midpoints_are_inside() {
        for polygon in [central_area(), diamond()] {
            for edge in polygon.windows(2) {
                let mid = LngLat::new(
                    (edge[0].lng + edge[1].lng) / 2.0,
                    (edge[0].lat + edge[1].lat) / 2.0,
                );
                assert!(
                    is_point_in_polygon(&mid, &polygon),
                    "midpoint {:?} should be inside",
                    mid
                );
            }
        }
    }

    #[test]
    fn test_concave_polygon() {
        // U shape opening upwards; the notch is outside.
        let u = vec![
            LngLat::new(0.0, 0.0),
            LngLat::new(3.0, 0.0),
            LngLat::new(3.0, 3.0),
            LngLat::new(2.0, 3.0),
            LngLat::new(2.0, 1.0),
            LngLat::new(1.0, 1.0),
            LngLat::new(1.0, 3.0),
            LngLat::new(0.0, 3.0),
            LngLat::new(0.0, 0.0),
        ];
        assert!(is_point_in_polygon(&LngLat::new(0.5, 2.0), &u));
        assert!(is_point_in_polygon(&LngLat::new(2.5, 2.0), &u));
        assert!(!is_point_in_polygon(&LngLat::new(1.5, 2.0), &u));
    }

    #[test]
    fn test_empty_polygon_contains_nothing() {
        assert!(!is_point_in_polygon(&LngLat::new(0.0, 0.0), &[]));
    }

    #[test]
    fn test_region_deserializes_wire_format() {
        let json = r#"{"name":"central","vertices":[
            {"lng":-3.192473,"lat":55.946233},
            {"lng":-3.192473,"lat":55.942617},
            {"lng":-3.184319,"lat":55.942617},
            {"lng":-3.184319,"lat":55.946233},
            {"lng":-3.192473,"lat":55.946233}]}"#;
        let region: Region = serde_json::from_str(json).unwrap();
        assert_eq!(region.name, "central");
        assert!(region.is_closed());
        assert!(region.contains(&LngLat::new(-3.19, 55.944)));
    }
}
