//! Trilinear interpolation on a regular 3D lattice.
//!
//! The point is located in lattice index space, the eight corners of the
//! enclosing cell are read through an [`AccessStrategy`], and the corner
//! values are combined with the usual product-of-offsets weights. The
//! boundary condition lives entirely in the strategy, which is chosen by type
//! parameter.
//!
//! Operation Complexity
//! * O(1) per observation point: 6 index mappings and 8 reads.
//!
//! Memory Complexity
//! * No allocation during evaluation; a few `[T; 3]` on the stack.
//!
//! ```rust
//! use latterp::{trilerp, BoundingRegion, Lattice};
//!
//! // Unit cube with one value on the z = -0.5 face and another on z = 0.5
//! let region = BoundingRegion::cube(1.0_f64).unwrap();
//! let lattice = Lattice::from_fn([2, 2, 2], |_, _, k| if k == 0 { 1.0 } else { -1.0 }).unwrap();
//!
//! // Observation points to interpolate
//! let xobs = [0.0_f64, 0.25];
//! let yobs = [0.0_f64, 0.25];
//! let zobs = [0.0_f64, 0.25];
//! let obs = [&xobs[..], &yobs[..], &zobs[..]];
//!
//! // Storage for output
//! let mut out = [0.0; 2];
//!
//! // Do interpolation
//! trilerp(region, &lattice, &obs, &mut out).unwrap();
//! assert!(out[0].abs() < 1e-12);
//! assert!((out[1] + 0.5).abs() < 1e-12);
//! ```
//!
//! References
//! * https://en.wikipedia.org/wiki/Trilinear_interpolation
use core::marker::PhantomData;

use num_traits::{Float, NumCast};

use crate::{AccessStrategy, BoundingRegion, Clamped, Lattice};

/// A trilinear interpolator over a lattice spanning a [`BoundingRegion`],
/// reading samples through the access strategy `A`.
///
/// Holds no mutable state, so a single instance can be queried from many
/// threads at once. It borrows the lattice, which therefore cannot be
/// modified while the interpolator is alive.
///
/// No domain check is made during evaluation. With [`Clamped`] access, points
/// outside the region give face values held constant, which is rarely what
/// the field would have been; filter with [`BoundingRegion::inside`] or
/// [`check_bounds`] first if that matters.
pub struct Interpolator<'a, T: Float, A: AccessStrategy<'a, T> = Clamped<'a, T>> {
    /// Physical extent of the lattice
    region: BoundingRegion<T>,

    /// Spacing between samples along each axis
    steps: [T; 3],

    /// Boundary-aware reads of the lattice
    access: A,

    _lattice: PhantomData<&'a Lattice<T>>,
}

impl<'a, T: Float, A: AccessStrategy<'a, T>> Interpolator<'a, T, A> {
    /// Bind `lattice` to the physical extent `region`.
    ///
    /// The first and last sample along each axis are placed on the region's
    /// faces.
    ///
    /// # Errors
    /// * If any axis has fewer than two samples, since spacing is undefined there
    pub fn new(region: BoundingRegion<T>, lattice: &'a Lattice<T>) -> Result<Self, &'static str> {
        let steps = region.steps(lattice.dims())?;

        Ok(Self {
            region,
            steps,
            access: A::new(lattice),
            _lattice: PhantomData,
        })
    }

    /// Physical extent of the lattice.
    #[inline]
    pub fn region(&self) -> &BoundingRegion<T> {
        &self.region
    }

    /// Spacing between samples along each axis.
    #[inline]
    pub fn steps(&self) -> [T; 3] {
        self.steps
    }

    /// The access strategy reading the lattice.
    #[inline]
    pub fn access(&self) -> &A {
        &self.access
    }

    /// Interpolate the value at `(x, y, z)`.
    #[inline(always)]
    pub fn compute(&self, x: T, y: T, z: T) -> T {
        self.compute_point(&[x, y, z])
    }

    /// Interpolate the value at a point.
    ///
    /// At a lattice node this returns the stored sample. A coordinate that
    /// cannot be placed on the lattice at all (NaN, infinite, or too far away
    /// to index) gives NaN.
    #[inline(always)]
    pub fn compute_point(&self, point: &[T; 3]) -> T {
        // Continuous lattice coordinate of the point
        let c = self.region.fractional_index(point, &self.steps);

        // Lower corner of the enclosing cell, and offset within it
        let origin = &mut [0_isize; 3];
        let t = &mut [T::zero(); 3];
        for j in 0..3 {
            let floc = c[j].floor();
            match <isize as NumCast>::from(floc) {
                Some(iloc) => origin[j] = iloc,
                None => return T::nan(),
            }
            t[j] = c[j] - floc;
        }

        // Storage index of the low and high side of the cell on each axis
        let idx = &mut [[0_usize; 2]; 3];
        for j in 0..3 {
            idx[j][0] = self.access.map_index(origin[j], j);
            idx[j][1] = self.access.map_index(origin[j].saturating_add(1), j);
        }

        // Traverse vertices, summing weighted contributions.
        // Bit j of the vertex number selects the high side along axis j.
        let mut interped = T::zero();
        for i in 0..8 {
            let mut weight = T::one();
            let ijk = &mut [0_usize; 3];
            for j in 0..3 {
                let high = (i >> j) & 1;
                ijk[j] = idx[j][high];
                weight = weight * if high == 0 { T::one() - t[j] } else { t[j] };
            }

            // Zero-weight corners are skipped; a non-finite sample there
            // must not turn the result into NaN
            if weight == T::zero() {
                continue;
            }

            interped = interped + weight * self.access.get_value(ijk[0], ijk[1], ijk[2]);
        }

        interped
    }

    /// Interpolate on a contiguous list of observation points.
    ///
    /// `obs` holds the x, y, and z coordinates as three slices, each the same
    /// length as `out`.
    ///
    /// # Errors
    ///   * If `obs` does not hold exactly three coordinate slices
    ///   * If any coordinate slice differs in length from `out`
    #[inline]
    pub fn interp(&self, obs: &[&[T]], out: &mut [T]) -> Result<(), &'static str> {
        if obs.len() != 3 {
            return Err("Dimension mismatch");
        }
        let size_matches = obs.iter().all(|&x| x.len() == out.len());
        if !size_matches {
            return Err("Dimension mismatch");
        }

        for i in 0..out.len() {
            out[i] = self.compute(obs[0][i], obs[1][i], obs[2][i]);
        }

        Ok(())
    }

    /// Interpolate on a contiguous list of observation points, allocating
    /// for the output values for convenience.
    ///
    /// # Errors
    ///   * If `obs` does not hold exactly three coordinate slices
    ///   * If the coordinate slices differ in length
    #[cfg(feature = "std")]
    pub fn interp_alloc(&self, obs: &[&[T]]) -> Result<Vec<T>, &'static str> {
        let n = obs.first().map_or(0, |x| x.len());
        let mut out = vec![T::zero(); n];
        self.interp(obs, &mut out)?;
        Ok(out)
    }
}

/// Evaluate trilinear interpolation with clamped access at each observation point.
/// Assumes C-style ordering of the lattice (see [`Lattice`]).
///
/// This is a convenience function. Building the interpolator is a handful of
/// divisions, so this is cheap even for a single point, but an
/// [`Interpolator`] kept around avoids it entirely and allows other
/// boundary conditions.
///
/// # Errors
///   * If any lattice axis has fewer than two samples
///   * If `obs` does not hold three slices of `out.len()` coordinates
#[inline]
pub fn trilerp<T: Float>(
    region: BoundingRegion<T>,
    lattice: &Lattice<T>,
    obs: &[&[T]],
    out: &mut [T],
) -> Result<(), &'static str> {
    Interpolator::<'_, T, Clamped<'_, T>>::new(region, lattice)?.interp(obs, out)
}

/// Check whether a list of observation points are inside the region within some absolute tolerance.
///
/// Output entry `i` is set to `false` if no points on that axis are out of bounds,
/// and set to `true` if there is a bounds violation on that axis. NaN coordinates
/// count as violations.
///
/// # Errors
/// * If `obs` does not hold exactly three coordinate slices
pub fn check_bounds<T: Float>(
    region: &BoundingRegion<T>,
    obs: &[&[T]],
    atol: T,
    out: &mut [bool; 3],
) -> Result<(), &'static str> {
    if obs.len() != 3 {
        return Err("Dimension mismatch");
    }

    let (lo, hi) = (region.low(), region.high());
    for i in 0..3 {
        out[i] = obs[i]
            .iter()
            .any(|&x| !((x - lo[i]) > -atol && (x - hi[i]) < atol));
    }

    Ok(())
}
