use std::fmt::Display;

use crate::{lambert::Lambert, zone::LambertZone, Error};

/// Geographic longitude/latitude point in decimal degrees. Can be converted
/// to/from [`Lambert`].
///
/// The projection constants are those of the French Lambert systems, so no
/// datum shift is applied when converting.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LatLon {
    #[cfg_attr(feature = "serde", serde(alias = "lat"))]
    pub(crate) latitude: f64,
    #[cfg_attr(feature = "serde", serde(alias = "lon"))]
    pub(crate) longitude: f64,
}

impl LatLon {
    /// Internal-only constructor that doesn't check the bounds of lat/lon
    pub(crate) fn new(lat: f64, lon: f64) -> LatLon {
        Self {
            latitude: lat,
            longitude: lon,
        }
    }

    /// Tries to create a latitude/longitude point from a lat/lon pair. First
    /// checks if the values are valid:
    /// * Latitude must be in range (-90,90), the poles cannot be projected
    /// * Longitude must be in range [-180,180]
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCoord`] if either latitude or longitude are invalid.
    ///
    /// # Usage
    ///
    /// ```
    /// use lambertconv::LatLon;
    ///
    /// let coord = LatLon::create(48.858370, 2.294481);
    ///
    /// assert!(coord.is_ok());
    ///
    /// let coord = coord.unwrap();
    ///
    /// assert_eq!(coord.latitude(), 48.858370);
    /// assert_eq!(coord.longitude(), 2.294481);
    ///
    /// assert!(LatLon::create(90.0, 0.0).is_err());
    /// assert!(LatLon::create(0.0, -200.0).is_err());
    /// assert!(LatLon::create(f64::NAN, 0.0).is_err());
    /// ```
    pub fn create(lat: f64, lon: f64) -> Result<LatLon, Error> {
        if !(lat > -90.0 && lat < 90.0) {
            Err(Error::InvalidCoord(format!("Latitude {lat} outside of valid range (-90, 90).")))
        } else if !(-180_f64..=180_f64).contains(&lon) {
            Err(Error::InvalidCoord(format!("Longitude {lon} outside of valid range [-180, 180].")))
        } else {
            Ok(LatLon::new(lat, lon))
        }
    }

    /// Returns the latitude value.
    #[inline]
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Returns the longitude value.
    #[inline]
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Converts from [`Lambert`] to [`LatLon`]. Same as [`Lambert::to_latlon`].
    pub fn from_lambert(value: &Lambert) -> LatLon {
        value.to_latlon()
    }

    /// Projects the point into the given Lambert zone.
    ///
    /// # Usage
    ///
    /// ```
    /// use lambertconv::{LatLon, LambertZone};
    ///
    /// let coord = LatLon::create(48.858370, 2.294481).unwrap();
    /// let projected = coord.to_lambert(LambertZone::LambertIIExtended);
    ///
    /// assert_eq!(projected.zone(), LambertZone::LambertIIExtended);
    ///
    /// let back = projected.to_latlon();
    /// assert!((back.latitude() - coord.latitude()).abs() < 1e-9);
    /// assert!((back.longitude() - coord.longitude()).abs() < 1e-9);
    /// ```
    pub fn to_lambert(&self, zone: LambertZone) -> Lambert {
        Lambert::from_latlon(self, zone)
    }
}

impl Display for LatLon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut buf = ryu::Buffer::new();
        let lat = buf.format(self.latitude);
        let mut buf = ryu::Buffer::new();
        let lon = buf.format(self.longitude);
        write!(
            f,
            "{lat} {lon}",
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_out_of_range() {
        for (lat, lon) in [
            (-90.0, 0.0),
            (90.0, 0.0),
            (91.0, 0.0),
            (0.0, 180.5),
            (0.0, f64::INFINITY),
            (f64::NAN, 0.0),
        ] {
            assert!(
                matches!(LatLon::create(lat, lon), Err(Error::InvalidCoord(_))),
                "({lat}, {lon}) accepted"
            );
        }
    }

    #[test]
    fn accepts_antimeridian() {
        assert!(LatLon::create(10.0, 180.0).is_ok());
        assert!(LatLon::create(10.0, -180.0).is_ok());
    }

    #[test]
    fn display_is_shortest_round_trip() {
        let coord = LatLon::create(48.85837, 2.294481).unwrap();
        assert_eq!(coord.to_string(), "48.85837 2.294481");
    }
}
