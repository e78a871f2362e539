use crate::{
    constants::{CLARKE_1880_E, MAX_ITERATIONS, PARIS_LAMC, TOLERANCE},
    utility::{isometric_latitude, iterate_latitude, Iteration},
    zone::{LambertZone, ProjectionParameters},
    Error,
};

/// Lambert conformal conic projection on the Clarke 1880 (French) ellipsoid.
///
/// Angles are in radians, projected coordinates in meters.
///
/// # Usage
///
/// ```
/// use lambertconv::{LambertConformalConic, LambertZone};
///
/// let proj = LambertConformalConic::new(LambertZone::LambertIIExtended);
/// let (x, y) = proj.from_geographic(2.35_f64.to_radians(), 48.85_f64.to_radians());
/// let (lon, lat) = proj.to_geographic(x, y);
///
/// assert!((lon.to_degrees() - 2.35).abs() < 1e-9);
/// assert!((lat.to_degrees() - 48.85).abs() < 1e-9);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LambertConformalConic {
    n: f64,
    c: f64,
    xs: f64,
    ys: f64,
    e: f64,
    lamc: f64,
    tol: f64,
    max_iterations: usize,
}

impl LambertConformalConic {
    pub fn new(zone: LambertZone) -> LambertConformalConic {
        Self::from_parameters(zone.parameters())
    }

    /// Projection with custom zone constants, on the shared ellipsoid and
    /// central meridian.
    pub fn from_parameters(params: ProjectionParameters) -> LambertConformalConic {
        Self {
            n: params.n,
            c: params.c,
            xs: params.xs,
            ys: params.ys,
            e: CLARKE_1880_E,
            lamc: PARIS_LAMC,
            tol: TOLERANCE,
            max_iterations: MAX_ITERATIONS,
        }
    }

    /// Overrides the convergence tolerance of the inverse projection.
    pub fn with_tolerance(mut self, tol: f64) -> LambertConformalConic {
        self.tol = tol;
        self
    }

    /// Overrides the iteration cap of the inverse projection.
    pub fn with_max_iterations(mut self, max_iterations: usize) -> LambertConformalConic {
        self.max_iterations = max_iterations;
        self
    }

    pub fn eccentricity(&self) -> f64 {
        self.e
    }

    pub fn central_meridian(&self) -> f64 {
        self.lamc
    }

    pub fn tolerance(&self) -> f64 {
        self.tol
    }

    pub fn parameters(&self) -> ProjectionParameters {
        ProjectionParameters {
            n: self.n,
            c: self.c,
            xs: self.xs,
            ys: self.ys,
        }
    }

    /// Projects longitude `lambda` and latitude `phi` to `(x, y)`.
    pub fn from_geographic(&self, lambda: f64, phi: f64) -> (f64, f64) {
        let l_iso = isometric_latitude(phi, self.e);
        let r = self.c * (-self.n * l_iso).exp();
        let (sin, cos) = (self.n * (lambda - self.lamc)).sin_cos();

        (self.xs + r * sin, self.ys - r * cos)
    }

    /// Inverse of [`from_geographic`](Self::from_geographic), returning
    /// `(lambda, phi)`. When the latitude iteration does not converge the
    /// last iterate is returned.
    pub fn to_geographic(&self, x: f64, y: f64) -> (f64, f64) {
        let (lambda, it) = self.invert(x, y);
        (lambda, it.latitude)
    }

    /// Same as [`to_geographic`](Self::to_geographic) but fails when the
    /// latitude iteration does not converge.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NonConvergence`] if the iteration cap is reached
    /// before the tolerance is met.
    pub fn try_to_geographic(&self, x: f64, y: f64) -> Result<(f64, f64), Error> {
        let (lambda, it) = self.invert(x, y);
        Ok((lambda, it.into_result()?))
    }

    fn invert(&self, x: f64, y: f64) -> (f64, Iteration<f64>) {
        let dx = x - self.xs;
        let dy = self.ys - y;

        let r = dx.hypot(dy);
        let gamma = dx.atan2(dy);
        let lambda = self.lamc + gamma / self.n;

        let l_iso = -1.0 / self.n * (r / self.c).abs().ln();

        (lambda, iterate_latitude(l_iso, self.e, self.tol, self.max_iterations))
    }
}
