//! Great-circle distance computation
//!
//! Capture thresholds are specified in real-world meters, so deltas between
//! fixes use the haversine formula on a spherical Earth rather than flat
//! degree subtraction (a degree of longitude shrinks with latitude).

use crate::core::constants::EARTH_RADIUS_M;
use crate::core::types::GpsFix;

/// Great-circle distance in meters between two fixes.
///
/// Identical positions return exactly zero, with no floating-point drift.
pub fn distance_m(a: &GpsFix, b: &GpsFix) -> f64 {
    distance_between_m(a.latitude, a.longitude, b.latitude, b.longitude)
}

/// Great-circle distance in meters from a fix to an arbitrary point,
/// used for the halo geofence test
pub fn distance_to_point_m(fix: &GpsFix, latitude: f64, longitude: f64) -> f64 {
    distance_between_m(fix.latitude, fix.longitude, latitude, longitude)
}

/// Haversine distance between two points given in decimal degrees
pub fn distance_between_m(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    if lat1 == lat2 && lon1 == lon2 {
        return 0.0;
    }

    let phi1 = lat1.to_radians();
    let phi2 = lat2.to_radians();
    let d_phi = (lat2 - lat1).to_radians();
    let d_lambda = (lon2 - lon1).to_radians();

    let a = (d_phi / 2.0).sin().powi(2)
        + phi1.cos() * phi2.cos() * (d_lambda / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_M * c
}
