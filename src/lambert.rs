use std::fmt::Display;

use crate::{
    latlon::LatLon,
    projections::lambert_conformal_conic::LambertConformalConic,
    zone::LambertZone,
    Error,
};

/// Point in one of the French Lambert projected systems, in meters.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Lambert {
    pub(crate) zone: LambertZone,
    pub(crate) x: f64,
    pub(crate) y: f64,
}

impl Lambert {
    /// Internal-only constructor that doesn't check the coordinate
    pub(crate) fn new(zone: LambertZone, x: f64, y: f64) -> Lambert {
        Self { zone, x, y }
    }

    /// Tries to create a Lambert point from its zone and coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCoord`] if either coordinate is not finite.
    ///
    /// # Usage
    ///
    /// ```
    /// use lambertconv::{Lambert, LambertZone};
    ///
    /// let coord = Lambert::create(LambertZone::LambertIIExtended, 596_936.2, 2_429_571.9);
    /// assert!(coord.is_ok());
    ///
    /// let coord = coord.unwrap();
    /// assert_eq!(coord.zone(), LambertZone::LambertIIExtended);
    /// assert_eq!(coord.x(), 596_936.2);
    /// assert_eq!(coord.y(), 2_429_571.9);
    ///
    /// assert!(Lambert::create(LambertZone::Lambert93, f64::NAN, 0.0).is_err());
    /// ```
    pub fn create(zone: LambertZone, x: f64, y: f64) -> Result<Lambert, Error> {
        if !x.is_finite() {
            Err(Error::InvalidCoord(format!("X {x} is not a finite value.")))
        } else if !y.is_finite() {
            Err(Error::InvalidCoord(format!("Y {y} is not a finite value.")))
        } else {
            Ok(Lambert::new(zone, x, y))
        }
    }

    pub fn zone(&self) -> LambertZone {
        self.zone
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn from_latlon(value: &LatLon, zone: LambertZone) -> Lambert {
        let (x, y) = LambertConformalConic::new(zone)
            .from_geographic(value.longitude.to_radians(), value.latitude.to_radians());

        Lambert::new(zone, x, y)
    }

    /// Converts to geographic coordinates. If the latitude iteration does
    /// not converge the last iterate is used.
    pub fn to_latlon(&self) -> LatLon {
        let (lon, lat) = LambertConformalConic::new(self.zone).to_geographic(self.x, self.y);

        LatLon::new(lat.to_degrees(), lon.to_degrees())
    }

    /// Converts to geographic coordinates, failing if the latitude iteration
    /// does not converge.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NonConvergence`] if the iteration cap is reached.
    pub fn try_to_latlon(&self) -> Result<LatLon, Error> {
        let (lon, lat) = LambertConformalConic::new(self.zone).try_to_geographic(self.x, self.y)?;

        Ok(LatLon::new(lat.to_degrees(), lon.to_degrees()))
    }

    /// Re-projects the point into another Lambert zone, going through
    /// geographic coordinates.
    ///
    /// # Usage
    ///
    /// ```
    /// use lambertconv::{Lambert, LambertZone};
    ///
    /// let coord = Lambert::create(LambertZone::LambertII, 596_936.2, 429_571.9).unwrap();
    /// let extended = coord.convert_to(LambertZone::LambertIIExtended);
    ///
    /// assert!((extended.x() - coord.x()).abs() < 1e-4);
    /// assert!((extended.y() - coord.y() - 2_000_000.0).abs() < 1e-4);
    /// ```
    pub fn convert_to(&self, zone: LambertZone) -> Lambert {
        if zone == self.zone {
            *self
        } else {
            Lambert::from_latlon(&self.to_latlon(), zone)
        }
    }
}

impl Display for Lambert {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut buf = ryu::Buffer::new();
        let x = buf.format(self.x);
        let mut buf = ryu::Buffer::new();
        let y = buf.format(self.y);
        write!(f, "{} {x} {y}", self.zone)
    }
}
