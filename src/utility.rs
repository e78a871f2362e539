use num::{traits::FloatConst, Float};
use tracing::{debug, trace};

use crate::{constants::MAX_ITERATIONS, Error};

/// State of the latitude iteration when it stopped.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Iteration<F> {
    pub(crate) latitude: F,
    pub(crate) iterations: usize,
    pub(crate) residual: F,
    pub(crate) converged: bool,
}

impl<F: Float> Iteration<F> {
    pub(crate) fn into_result(self) -> Result<F, Error> {
        if self.converged {
            Ok(self.latitude)
        } else {
            Err(Error::NonConvergence {
                iterations: self.iterations,
                residual: self.residual.to_f64().unwrap_or(f64::NAN),
            })
        }
    }
}

/// Isometric latitude of a point at latitude `phi` (radians) on an ellipsoid
/// of first eccentricity `e`.
///
/// `L = ln(tan(π/4 + φ/2) · ((1 − e·sinφ) / (1 + e·sinφ))^(e/2))`
///
/// Defined on `(−π/2, π/2)`. The poles are not guarded and give `±inf`.
///
/// # Usage
///
/// ```
/// use lambertconv::isometric_latitude;
///
/// assert!(isometric_latitude(0.0_f64, 0.08248325676).abs() < 1e-15);
/// assert!(isometric_latitude(0.8_f64, 0.08248325676) > 0.0);
/// ```
pub fn isometric_latitude<F: Float + FloatConst>(phi: F, e: F) -> F {
    let one = F::one();
    let two = one + one;
    let esin = e * phi.sin();

    ((F::FRAC_PI_4() + phi / two).tan() * ((one - esin) / (one + esin)).powf(e / two)).ln()
}

/// Latitude (radians) from isometric latitude `l_iso`.
///
/// Fixed-point iteration started from the spherical solution, stopping once
/// two successive iterates differ by less than `tol`. If that does not happen
/// within 5000 iterations the last iterate is returned anyway; use
/// [`try_latitude_from_isometric`] to be told about it.
///
/// # Usage
///
/// ```
/// use lambertconv::{isometric_latitude, latitude_from_isometric};
///
/// let e = 0.08248325676_f64;
/// let l = isometric_latitude(0.85, e);
///
/// assert!((latitude_from_isometric(l, e, 1e-11) - 0.85).abs() < 1e-10);
/// ```
pub fn latitude_from_isometric<F: Float + FloatConst>(l_iso: F, e: F, tol: F) -> F {
    iterate_latitude(l_iso, e, tol, MAX_ITERATIONS).latitude
}

/// Same as [`latitude_from_isometric`] but fails when the iteration cap is
/// reached without meeting `tol`.
///
/// # Errors
///
/// Returns [`Error::NonConvergence`] with the final step size. A `NaN` input
/// never converges.
///
/// # Usage
///
/// ```
/// use lambertconv::try_latitude_from_isometric;
///
/// let e = 0.08248325676_f64;
///
/// assert!(try_latitude_from_isometric(1.2, e, 1e-11).is_ok());
/// assert!(try_latitude_from_isometric(f64::NAN, e, 1e-11).is_err());
/// ```
pub fn try_latitude_from_isometric<F: Float + FloatConst>(
    l_iso: F,
    e: F,
    tol: F,
) -> Result<F, Error> {
    iterate_latitude(l_iso, e, tol, MAX_ITERATIONS).into_result()
}

pub(crate) fn iterate_latitude<F: Float + FloatConst>(
    l_iso: F,
    e: F,
    tol: F,
    max_iterations: usize,
) -> Iteration<F> {
    let one = F::one();
    let two = one + one;
    let exp_l = l_iso.exp();

    let mut phi = two * exp_l.atan() - F::FRAC_PI_2();
    let mut residual = F::infinity();

    for i in 1..=max_iterations {
        let esin = e * phi.sin();
        let next = two * (((one + esin) / (one - esin)).powf(e / two) * exp_l).atan()
            - F::FRAC_PI_2();

        residual = (next - phi).abs();
        phi = next;

        if residual < tol {
            trace!(iterations = i, "isometric latitude inverted");
            return Iteration {
                latitude: phi,
                iterations: i,
                residual,
                converged: true,
            };
        }
    }

    debug!(
        iterations = max_iterations,
        residual = residual.to_f64(),
        "isometric latitude inversion reached iteration cap"
    );

    Iteration {
        latitude: phi,
        iterations: max_iterations,
        residual,
        converged: false,
    }
}
