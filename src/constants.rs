// First eccentricity of the Clarke 1880 (French) ellipsoid
#[allow(clippy::unreadable_literal)]
pub(crate) const CLARKE_1880_E: f64 = 0.08248325676;
// Longitude of the Paris meridian east of Greenwich (2°20'14.025"), in radians
#[allow(clippy::unreadable_literal)]
pub(crate) const PARIS_LAMC: f64 = 0.04079234433;

// Convergence tolerance of the latitude iteration, in radians
pub(crate) const TOLERANCE: f64 = 1e-11;
// Hard cap on the latitude iteration
pub(crate) const MAX_ITERATIONS: usize = 5000;

// Projection exponent n, per zone (I, II, III, IV, 93)
#[allow(clippy::unreadable_literal)]
pub(crate) const N: [f64; 5] = [
    0.7604059656, 0.7289686274, 0.6959127966, 0.6712679322, 0.7256077650,
];

// Projection constant c (m)
#[allow(clippy::unreadable_literal)]
pub(crate) const C: [f64; 5] = [
    11_603_796.98, 11_745_793.39, 11_947_992.52, 12_136_281.99, 11_754_255.426,
];

// Projected coordinates of the pole (m)
pub(crate) const XS: [f64; 5] = [600_000.0, 600_000.0, 600_000.0, 234.358, 700_000.0];
pub(crate) const YS: [f64; 5] = [
    5_657_616.674, 6_199_695.768, 6_791_905.085, 7_239_161.542, 12_655_612.050,
];

// Lambert II extended is Lambert II shifted north by this Ys
pub(crate) const YS_II_EXTENDED: f64 = 8_199_695.768;
