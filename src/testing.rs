use rand::distr::StandardUniform;
use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

use crate::BoundingRegion;

/// Fixed random seed to support repeatable testing
const SEED: [u8; 32] = [
    0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 15, 14, 13, 12, 11, 10, 9, 8, 7, 6,
    5, 4, 3, 2, 1,
];

/// Get a random number generator with a const seed for repeatable testing
pub fn rng_fixed_seed() -> StdRng {
    StdRng::from_seed(SEED)
}

/// Generate `n` random numbers using provided generator
pub fn randn<T>(rng: &mut StdRng, n: usize) -> Vec<T>
where
    StandardUniform: rand::distr::Distribution<T>,
{
    std::iter::repeat_with(|| rng.random::<T>())
        .take(n)
        .collect()
}

/// Generate `n` points uniformly distributed inside `region`
pub fn uniform_points(rng: &mut StdRng, region: &BoundingRegion<f64>, n: usize) -> Vec<[f64; 3]> {
    let (lo, sizes) = (region.low(), region.sizes());
    let u = randn::<f64>(rng, 3 * n);
    u.chunks_exact(3)
        .map(|ui| [
            lo[0] + ui[0] * sizes[0],
            lo[1] + ui[1] * sizes[1],
            lo[2] + ui[2] * sizes[2],
        ])
        .collect()
}

/// Linear in x, quadratic in y, cubic in z
pub fn non_sum(p: &[f64; 3]) -> f64 {
    p[0] + p[1] * p[1] + p[2] * p[2] * p[2]
}

/// Smooth away from z = 0, where it has a kink
pub fn smooth_composite(p: &[f64; 3]) -> f64 {
    1.0 + p[0] + p[1].sin() + (p[2].abs() + 1.0).ln()
}

/// Periodic over a 3 x 4 x 5 box on every axis
pub fn periodic_field(p: &[f64; 3]) -> f64 {
    use core::f64::consts::TAU;
    (TAU * p[0] / 3.0).sin() + (TAU * p[1] / 4.0).cos() + 0.5 * (TAU * p[2] / 5.0).sin()
}
