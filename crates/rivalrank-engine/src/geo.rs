//! Great-circle distance over possibly-missing coordinates.

use rivalrank_core::Coordinate;

const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Haversine distance in meters between two coordinates.
///
/// Total over malformed provider data: returns `0.0` when either coordinate
/// is absent or contains a non-finite component, so a bad record can never
/// take down a ranking computation.
#[must_use]
pub fn distance_meters(a: Option<Coordinate>, b: Option<Coordinate>) -> f64 {
    let (Some(a), Some(b)) = (a, b) else {
        return 0.0;
    };
    if !(a.lat.is_finite() && a.lng.is_finite() && b.lat.is_finite() && b.lng.is_finite()) {
        return 0.0;
    }

    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lng = (b.lng - a.lng).to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lng / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_M * h.sqrt().atan2((1.0 - h).sqrt())
}
