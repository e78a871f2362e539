//! Conversion between the French Lambert conformal conic projections
//! (Lambert I, II, III, IV, 93 and II extended) and geographic
//! longitude/latitude on the Clarke 1880 (French) ellipsoid.
//!
//! ```
//! use lambertconv::{geo_to_lambert, lambert_to_geo, lambert_type::LAMBERT_II_EXTENDED};
//!
//! let (x, y) = geo_to_lambert(2.294481, 48.858370, LAMBERT_II_EXTENDED).unwrap();
//! let (lon, lat) = lambert_to_geo(x, y, LAMBERT_II_EXTENDED).unwrap();
//!
//! assert!((lon - 2.294481).abs() < 1e-9);
//! assert!((lat - 48.858370).abs() < 1e-9);
//! ```
//!
//! No datum shift is performed.

#![warn(clippy::pedantic)]
#![allow(
    clippy::must_use_candidate,
    clippy::return_self_not_must_use
)]

use thiserror::Error;

pub mod lambert;
pub mod latlon;
pub mod utility;
pub mod zone;

pub use lambert::Lambert;
pub use latlon::LatLon;
pub use projections::lambert_conformal_conic::LambertConformalConic;
pub use utility::{isometric_latitude, latitude_from_isometric, try_latitude_from_isometric};
pub use zone::{lambert_type, LambertZone, ProjectionParameters};

pub(crate) mod projections {
    pub mod lambert_conformal_conic;
}

pub(crate) mod constants;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Lambert zone {0} is not valid, expected a code in [0, 5]")]
    InvalidZone(i32),
    #[error("Lambert zone name is invalid: {0}")]
    InvalidZoneName(String),
    #[error("Coordinate parameters are not valid: {0}")]
    InvalidCoord(String),
    #[error("Latitude did not converge after {iterations} iterations (last step {residual:e} rad)")]
    NonConvergence {
        iterations: usize,
        residual: f64,
    },
}

/// Projects a longitude/latitude pair in decimal degrees to `(X, Y)` in the
/// Lambert zone designated by `lambert_type`, one of the [`lambert_type`]
/// constants.
///
/// The input is not range checked: the poles give non-finite output.
///
/// # Errors
///
/// Returns [`Error::InvalidZone`] if `lambert_type` is outside `[0, 5]`.
///
/// # Usage
///
/// ```
/// use lambertconv::{geo_to_lambert, lambert_type};
///
/// let (x, y) = geo_to_lambert(2.337229167, 0.0, lambert_type::LAMBERT_93).unwrap();
///
/// assert!((x - 700_000.0).abs() < 1e-3);
/// assert!((y - (12_655_612.050 - 11_754_255.426)).abs() < 1e-3);
///
/// assert!(geo_to_lambert(2.0, 46.0, 6).is_err());
/// ```
pub fn geo_to_lambert(longitude: f64, latitude: f64, lambert_type: i32) -> Result<(f64, f64), Error> {
    let zone = LambertZone::try_from(lambert_type)?;

    Ok(LambertConformalConic::new(zone).from_geographic(longitude.to_radians(), latitude.to_radians()))
}

/// Converts `(X, Y)` in the Lambert zone designated by `lambert_type` to a
/// `(longitude, latitude)` pair in decimal degrees.
///
/// If the latitude iteration does not converge the last iterate is returned;
/// see [`Lambert::try_to_latlon`] for a strict variant.
///
/// # Errors
///
/// Returns [`Error::InvalidZone`] if `lambert_type` is outside `[0, 5]`.
///
/// # Usage
///
/// ```
/// use lambertconv::{lambert_to_geo, lambert_type};
///
/// let (lon, lat) = lambert_to_geo(600_000.0, 2_200_000.0, lambert_type::LAMBERT_II_EXTENDED).unwrap();
///
/// assert!((lon - 2.337229167).abs() < 1e-6);
/// assert!((lat - 46.8).abs() < 1e-3);
///
/// assert!(lambert_to_geo(600_000.0, 2_200_000.0, -1).is_err());
/// ```
pub fn lambert_to_geo(x: f64, y: f64, lambert_type: i32) -> Result<(f64, f64), Error> {
    let zone = LambertZone::try_from(lambert_type)?;
    let (lambda, phi) = LambertConformalConic::new(zone).to_geographic(x, y);

    Ok((lambda.to_degrees(), phi.to_degrees()))
}
