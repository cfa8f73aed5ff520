//! Request validation in front of the planner.
//!
//! The planner trusts its inputs. Everything a caller hands in from outside
//! (coordinates, regions, angles) is checked here first, using the same
//! geometry the planner flies by.

use std::fmt;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::flightpath::FlightPath;
use crate::geo::{DRONE_IS_CLOSE_DISTANCE, DRONE_MOVE_DISTANCE, HOVER_ANGLE, LngLat};
use crate::geometry::Region;
use crate::planner::{NoPathFound, PlanOptions, search};
use crate::traits::RegionProvider;

#[derive(Debug, Clone, PartialEq)]
pub enum RequestError {
    /// Not finite, or outside the global longitude/latitude bounds.
    InvalidCoordinate(LngLat),
    /// Region with fewer than three vertices or differing first and last vertex.
    OpenRegion(String),
    /// Angle outside [0, 360] that is not the hover angle.
    InvalidAngle(f64),
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestError::InvalidCoordinate(p) => {
                write!(f, "invalid coordinate (lng {}, lat {})", p.lng, p.lat)
            }
            RequestError::OpenRegion(name) => write!(f, "region '{}' is not closed", name),
            RequestError::InvalidAngle(angle) => write!(f, "invalid angle {}", angle),
        }
    }
}

impl std::error::Error for RequestError {}

#[derive(Debug, Clone, PartialEq)]
pub enum PlanError {
    Invalid(RequestError),
    NoPath(NoPathFound),
}

impl From<RequestError> for PlanError {
    fn from(err: RequestError) -> Self {
        PlanError::Invalid(err)
    }
}

impl From<NoPathFound> for PlanError {
    fn from(err: NoPathFound) -> Self {
        PlanError::NoPath(err)
    }
}

impl fmt::Display for PlanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlanError::Invalid(err) => write!(f, "invalid plan request: {}", err),
            PlanError::NoPath(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for PlanError {}

/// Failure of [`plan_with_provider`]: either the reference data could not
/// be fetched or planning itself failed.
#[derive(Debug)]
pub enum ProviderPlanError<E> {
    Regions(E),
    Plan(PlanError),
}

impl<E> From<PlanError> for ProviderPlanError<E> {
    fn from(err: PlanError) -> Self {
        ProviderPlanError::Plan(err)
    }
}

impl<E: fmt::Display> fmt::Display for ProviderPlanError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderPlanError::Regions(err) => write!(f, "could not load regions: {}", err),
            ProviderPlanError::Plan(err) => write!(f, "{}", err),
        }
    }
}

impl<E: fmt::Debug + fmt::Display> std::error::Error for ProviderPlanError<E> {}

/// Everything needed to plan one flight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanRequest {
    pub start: LngLat,
    pub goal: LngLat,
    #[serde(default)]
    pub no_fly_zones: Vec<Region>,
    pub central_area: Region,
}

impl PlanRequest {
    pub fn new(
        start: LngLat,
        goal: LngLat,
        no_fly_zones: Vec<Region>,
        central_area: Region,
    ) -> Self {
        Self {
            start,
            goal,
            no_fly_zones,
            central_area,
        }
    }

    pub fn validate(&self) -> Result<(), RequestError> {
        validate_coordinate(&self.start)?;
        validate_coordinate(&self.goal)?;
        validate_region(&self.central_area)?;
        for zone in &self.no_fly_zones {
            validate_region(zone)?;
        }
        Ok(())
    }

    /// Validates the request and searches for a path.
    pub fn plan(&self, options: &PlanOptions) -> Result<FlightPath, PlanError> {
        self.validate()?;
        let planned = search(
            self.start,
            self.goal,
            &self.no_fly_zones,
            &self.central_area,
            options,
        )?;
        Ok(FlightPath::new(planned.path))
    }
}

/// Plans independent requests in parallel. Results keep the input order.
pub fn plan_batch(
    requests: &[PlanRequest],
    options: &PlanOptions,
) -> Vec<Result<FlightPath, PlanError>> {
    debug!(requests = requests.len(), "planning batch");
    requests
        .par_iter()
        .map(|request| request.plan(options))
        .collect()
}

/// Fetches the regions once from `provider`, then plans `start` to `goal`.
pub fn plan_with_provider<P: RegionProvider>(
    provider: &P,
    start: LngLat,
    goal: LngLat,
    options: &PlanOptions,
) -> Result<FlightPath, ProviderPlanError<P::Error>> {
    let no_fly_zones = provider.no_fly_zones().map_err(ProviderPlanError::Regions)?;
    let central_area = provider.central_area().map_err(ProviderPlanError::Regions)?;
    let request = PlanRequest::new(start, goal, no_fly_zones, central_area);
    Ok(request.plan(options)?)
}

pub fn validate_coordinate(position: &LngLat) -> Result<(), RequestError> {
    if position.is_valid() {
        Ok(())
    } else {
        Err(RequestError::InvalidCoordinate(*position))
    }
}

pub fn validate_region(region: &Region) -> Result<(), RequestError> {
    if region.is_closed() {
        Ok(())
    } else {
        Err(RequestError::OpenRegion(region.name.clone()))
    }
}

pub fn distance_between(a: &LngLat, b: &LngLat) -> Result<f64, RequestError> {
    validate_coordinate(a)?;
    validate_coordinate(b)?;
    Ok(a.distance_to(b))
}

/// True if the two positions are within one drone move of each other.
pub fn is_close(a: &LngLat, b: &LngLat) -> Result<bool, RequestError> {
    Ok(distance_between(a, b)? < DRONE_IS_CLOSE_DISTANCE)
}

/// Position after one drone move from `start` along `angle` degrees.
///
/// The hover angle leaves the drone where it is.
pub fn next_position(start: &LngLat, angle: f64) -> Result<LngLat, RequestError> {
    if angle == HOVER_ANGLE {
        return Ok(*start);
    }
    if !(0.0..=360.0).contains(&angle) {
        return Err(RequestError::InvalidAngle(angle));
    }
    Ok(start.next_position(angle, DRONE_MOVE_DISTANCE))
}

/// Boundary-inclusive containment check for a caller-supplied region.
pub fn is_in_region(position: &LngLat, region: &Region) -> Result<bool, RequestError> {
    validate_region(region)?;
    Ok(region.contains(position))
}
