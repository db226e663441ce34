//! Convenience methods for laying out lattice nodes in a way that echoes,
//! but does not exactly match, methods common in scripting languages.
use itertools::iproduct;
use num_traits::{Float, NumCast};

use crate::BoundingRegion;

/// Generates evenly spaced values from start to stop,
/// including the endpoint.
///
/// # Errors
/// * If `n < 2`
/// * If `n` is not representable in `T`
pub fn linspace<T>(start: T, stop: T, n: usize) -> Result<Vec<T>, &'static str>
where
    T: Float,
{
    if n < 2 {
        return Err("Need at least two points to include both endpoints");
    }
    let ncells = <T as NumCast>::from(n - 1).ok_or("Unrepresentable number")?;
    let dx: T = (stop - start) / ncells;

    let mut out = Vec::with_capacity(n);
    for i in 0..n - 1 {
        let fi = <T as NumCast>::from(i).ok_or("Unrepresentable number")?;
        out.push(start + fi * dx);
    }
    out.push(stop);

    Ok(out)
}

/// Physical coordinates of the nodes along each axis of a lattice with
/// `dims` samples spanning `region`.
///
/// # Errors
/// * If any axis has fewer than two samples
pub fn node_axes<T>(region: &BoundingRegion<T>, dims: [usize; 3]) -> Result<[Vec<T>; 3], &'static str>
where
    T: Float,
{
    let (lo, hi) = (region.low(), region.high());
    Ok([
        linspace(lo[0], hi[0], dims[0])?,
        linspace(lo[1], hi[1], dims[1])?,
        linspace(lo[2], hi[2], dims[2])?,
    ])
}

/// Generates every point of the tensor product of `x`, `y`, and `z`
/// in C ordering ((x0, y0, z0), (x0, y0, z1), ..., (x0, yn, zn), (x1, y0, z0), ...),
/// matching the storage order of [`crate::Lattice`].
pub fn meshgrid<T>(x: &[T], y: &[T], z: &[T]) -> Vec<[T; 3]>
where
    T: Float,
{
    iproduct!(x.iter(), y.iter(), z.iter())
        .map(|(&xi, &yi, &zi)| [xi, yi, zi])
        .collect()
}
