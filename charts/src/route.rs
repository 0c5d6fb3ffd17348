//! Maximum terrain altitude along the straight line between two waypoints.

use crate::{altitude::AltitudeIndex, angle::Dms, coord::Waypoint};

/// Longitude sampling step along the route, in decimal degrees.
const SAMPLE_STEP: f64 = 0.1;

/// Slope used when the route's longitude span is not positive, so the
/// sampler never divides by zero. The constant and its trigger condition
/// are part of the lookup contract; downstream numbers depend on them.
const FALLBACK_SLOPE: f64 = 10_000.0;

/// The highest altitude the index knows along the line from `wp1` to `wp2`.
///
/// Longitude is swept in fixed 0.1-degree steps starting at `wp1` with the
/// far end excluded, the latitude of each sample following the route's
/// slope in decimal-degree space; both endpoints are probed as well.
/// Altitudes of zero or below count as "no data", so the answer is `None`
/// when nothing above zero is found along the way.
pub fn max_altitude_between(index: &AltitudeIndex, wp1: Waypoint, wp2: Waypoint) -> Option<i32> {
    let (lat1, long1) = (wp1.lat().to_decimal(), wp1.long().to_decimal());
    let (lat2, long2) = (wp2.lat().to_decimal(), wp2.long().to_decimal());

    let delta_lat = lat1 - lat2;
    let delta_long = long1 - long2;
    let slope = if delta_long > 0.0 {
        delta_lat / delta_long
    } else {
        FALLBACK_SLOPE
    };

    let mut highest = 0;
    let mut probe = |lat: Dms, long: Dms| {
        if let Some(altitude) = index.altitude_at(lat, long) {
            if altitude > highest {
                highest = altitude;
            }
        }
    };

    probe(wp1.lat(), wp1.long());
    probe(wp2.lat(), wp2.long());

    let span = (long2 - long1) / SAMPLE_STEP;
    let steps = if span > 0.0 { span.ceil() as i64 } else { 0 };
    for step in 0..steps {
        let long_sample = long1 + SAMPLE_STEP * step as f64;
        let lat_sample = lat1 + long_sample * slope;
        probe(Dms::from_decimal(lat_sample), Dms::from_decimal(long_sample));
    }

    if highest > 0 {
        Some(highest)
    } else {
        None
    }
}
