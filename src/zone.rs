use std::{fmt::Display, str::FromStr};

use lazy_static::lazy_static;

use crate::{constants::{C, N, XS, YS, YS_II_EXTENDED}, Error};

/// Integer codes of the Lambert zones, as taken by
/// [`geo_to_lambert`](crate::geo_to_lambert) and
/// [`lambert_to_geo`](crate::lambert_to_geo).
pub mod lambert_type {
    pub const LAMBERT_I: i32 = 0;
    pub const LAMBERT_II: i32 = 1;
    pub const LAMBERT_III: i32 = 2;
    pub const LAMBERT_IV: i32 = 3;
    pub const LAMBERT_93: i32 = 4;
    pub const LAMBERT_II_EXTENDED: i32 = 5;
}

/// Constants of one Lambert zone. The ellipsoid and the central meridian are
/// shared by every zone and are not part of this record.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProjectionParameters {
    /// Exponent of the projection
    pub n: f64,
    /// Projection constant, in meters
    pub c: f64,
    /// Projected X of the pole, in meters
    pub xs: f64,
    /// Projected Y of the pole, in meters
    pub ys: f64,
}

lazy_static! {
    static ref PARAMETERS: [ProjectionParameters; 6] = {
        let zone = |i: usize| ProjectionParameters {
            n: N[i],
            c: C[i],
            xs: XS[i],
            ys: YS[i],
        };

        [
            zone(0),
            zone(1),
            zone(2),
            zone(3),
            zone(4),
            ProjectionParameters {
                ys: YS_II_EXTENDED,
                ..zone(1)
            },
        ]
    };
}

/// One of the six French Lambert coordinate systems. They all share the
/// Clarke 1880 ellipsoid and differ only by their [`ProjectionParameters`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LambertZone {
    LambertI,
    LambertII,
    LambertIII,
    LambertIV,
    Lambert93,
    LambertIIExtended,
}

impl LambertZone {
    pub const ALL: [LambertZone; 6] = [
        LambertZone::LambertI,
        LambertZone::LambertII,
        LambertZone::LambertIII,
        LambertZone::LambertIV,
        LambertZone::Lambert93,
        LambertZone::LambertIIExtended,
    ];

    /// Returns the integer code of the zone, one of the [`lambert_type`]
    /// constants.
    ///
    /// # Example
    /// ```
    /// use lambertconv::{LambertZone, lambert_type};
    ///
    /// assert_eq!(LambertZone::Lambert93.code(), lambert_type::LAMBERT_93);
    /// ```
    pub fn code(self) -> i32 {
        match self {
            LambertZone::LambertI => lambert_type::LAMBERT_I,
            LambertZone::LambertII => lambert_type::LAMBERT_II,
            LambertZone::LambertIII => lambert_type::LAMBERT_III,
            LambertZone::LambertIV => lambert_type::LAMBERT_IV,
            LambertZone::Lambert93 => lambert_type::LAMBERT_93,
            LambertZone::LambertIIExtended => lambert_type::LAMBERT_II_EXTENDED,
        }
    }

    /// Returns the projection constants of the zone.
    ///
    /// # Example
    /// ```
    /// use lambertconv::LambertZone;
    ///
    /// let params = LambertZone::LambertIIExtended.parameters();
    /// assert_eq!(params.xs, 600_000.0);
    /// assert_eq!(params.ys, 8_199_695.768);
    /// ```
    #[allow(clippy::cast_sign_loss)]
    pub fn parameters(self) -> ProjectionParameters {
        PARAMETERS[self.code() as usize]
    }
}

impl TryFrom<i32> for LambertZone {
    type Error = Error;

    /// Maps a [`lambert_type`] code to its zone.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidZone`] if `value` is outside `[0, 5]`.
    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            lambert_type::LAMBERT_I => Ok(LambertZone::LambertI),
            lambert_type::LAMBERT_II => Ok(LambertZone::LambertII),
            lambert_type::LAMBERT_III => Ok(LambertZone::LambertIII),
            lambert_type::LAMBERT_IV => Ok(LambertZone::LambertIV),
            lambert_type::LAMBERT_93 => Ok(LambertZone::Lambert93),
            lambert_type::LAMBERT_II_EXTENDED => Ok(LambertZone::LambertIIExtended),
            _ => Err(Error::InvalidZone(value)),
        }
    }
}

impl From<LambertZone> for i32 {
    fn from(value: LambertZone) -> Self {
        value.code()
    }
}

impl FromStr for LambertZone {
    type Err = Error;

    /// Parses a zone name such as `"II"`, `"Lambert 93"` or `"lambert-IIe"`.
    /// Case, spaces, dashes and underscores are ignored, as is an optional
    /// leading `"Lambert"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .collect::<String>()
            .to_ascii_uppercase();
        let name = name.strip_prefix("LAMBERT").unwrap_or(&name);

        match name {
            "I" | "1" => Ok(LambertZone::LambertI),
            "II" | "2" => Ok(LambertZone::LambertII),
            "III" | "3" => Ok(LambertZone::LambertIII),
            "IV" | "4" => Ok(LambertZone::LambertIV),
            "93" => Ok(LambertZone::Lambert93),
            "IIE" | "IIEXTENDED" | "IIETENDU" | "2E" => Ok(LambertZone::LambertIIExtended),
            _ => Err(Error::InvalidZoneName(s.to_string())),
        }
    }
}

impl Display for LambertZone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            LambertZone::LambertI => "Lambert I",
            LambertZone::LambertII => "Lambert II",
            LambertZone::LambertIII => "Lambert III",
            LambertZone::LambertIV => "Lambert IV",
            LambertZone::Lambert93 => "Lambert 93",
            LambertZone::LambertIIExtended => "Lambert II extended",
        };
        write!(f, "{name}")
    }
}
