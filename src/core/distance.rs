//! Great-circle distance between two coordinates.

use crate::domain::model::Coordinate;
use crate::utils::error::Result;
use crate::utils::validation::validate_coordinate;

/// Mean Earth radius in kilometers
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine distance in kilometers. Non-finite coordinates are rejected
/// instead of producing NaN.
pub fn haversine_km(a: &Coordinate, b: &Coordinate) -> Result<f64> {
    validate_coordinate(a)?;
    validate_coordinate(b)?;

    let d_lat = (b.latitude - a.latitude).to_radians();
    let d_lon = (b.longitude - a.longitude).to_radians();

    let h = ((d_lat / 2.0).sin().powi(2)
        + a.latitude.to_radians().cos()
            * b.latitude.to_radians().cos()
            * (d_lon / 2.0).sin().powi(2))
    .clamp(0.0, 1.0);

    Ok(2.0 * EARTH_RADIUS_KM * h.sqrt().atan2((1.0 - h).sqrt()))
}
