//! Dense storage for samples on a regular 3D lattice.
use alloc::vec;
use alloc::vec::Vec;
use core::ops::{Index, IndexMut};

use num_traits::Float;

/// A fixed-size 3D array of samples owning a single contiguous buffer.
///
/// Assumes C-style ordering of vals (v(0, 0, 0), v(0, 0, 1), ..., v(0, 0, n2 - 1), v(0, 1, 0), ...),
/// so the last axis is contiguous.
///
/// Element access does no boundary handling of its own; an index past the end
/// of an axis is a caller error and panics through the slice bounds check.
/// Boundary conditions belong to [`crate::AccessStrategy`] implementations.
#[derive(Clone, Debug, PartialEq)]
pub struct Lattice<T: Float> {
    /// Number of samples along each axis
    dims: [usize; 3],

    /// Stride of each axis in `vals`
    dimprod: [usize; 3],

    /// Samples, size prod(dims)
    vals: Vec<T>,
}

impl<T: Float> Lattice<T> {
    /// Build a zero-filled lattice with `n0 x n1 x n2` samples.
    ///
    /// # Errors
    /// * If any axis count is zero
    pub fn new(n0: usize, n1: usize, n2: usize) -> Result<Self, &'static str> {
        let dims = [n0, n1, n2];
        let n = Self::checked_len(dims)?;
        Self::from_vec(dims, vec![T::zero(); n])
    }

    /// Take ownership of samples already laid out in C order.
    ///
    /// # Errors
    /// * If any axis count is zero
    /// * If `vals.len()` does not match the product of `dims`
    pub fn from_vec(dims: [usize; 3], vals: Vec<T>) -> Result<Self, &'static str> {
        let n = Self::checked_len(dims)?;
        if vals.len() != n {
            return Err("Dimension mismatch");
        }

        // Each entry is the cumulative product of the size of axes
        // after this one, which is the stride along that axis.
        let dimprod = [dims[1] * dims[2], dims[2], 1];

        Ok(Self {
            dims,
            dimprod,
            vals,
        })
    }

    /// Sample `f(i, j, k)` at every node.
    ///
    /// # Errors
    /// * If any axis count is zero
    pub fn from_fn<F>(dims: [usize; 3], mut f: F) -> Result<Self, &'static str>
    where
        F: FnMut(usize, usize, usize) -> T,
    {
        let n = Self::checked_len(dims)?;
        let mut vals = Vec::with_capacity(n);
        for i in 0..dims[0] {
            for j in 0..dims[1] {
                for k in 0..dims[2] {
                    vals.push(f(i, j, k));
                }
            }
        }
        Self::from_vec(dims, vals)
    }

    fn checked_len(dims: [usize; 3]) -> Result<usize, &'static str> {
        if dims.iter().any(|&n| n == 0) {
            return Err("All axes must have at least one sample");
        }
        dims.iter()
            .try_fold(1_usize, |acc, &n| acc.checked_mul(n))
            .ok_or("Lattice size overflows usize")
    }

    /// Number of samples along `axis`.
    ///
    /// # Panics
    /// * If `axis > 2`
    #[inline(always)]
    pub fn size(&self, axis: usize) -> usize {
        self.dims[axis]
    }

    /// Number of samples along each axis.
    #[inline]
    pub fn dims(&self) -> [usize; 3] {
        self.dims
    }

    /// Total number of samples.
    #[inline]
    pub fn len(&self) -> usize {
        self.vals.len()
    }

    /// Always false, since every axis holds at least one sample.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vals.is_empty()
    }

    /// Position of `(i, j, k)` in the flat buffer.
    /// Does not check that each index is within its own axis.
    #[inline(always)]
    pub fn offset(&self, i: usize, j: usize, k: usize) -> usize {
        i * self.dimprod[0] + j * self.dimprod[1] + k
    }

    /// Sample at `(i, j, k)`.
    ///
    /// # Panics
    /// * If the flat offset is past the end of the buffer
    #[inline(always)]
    pub fn get(&self, i: usize, j: usize, k: usize) -> T {
        self.vals[self.offset(i, j, k)]
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.vals
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.vals
    }

    /// Set every sample to `v`.
    pub fn fill(&mut self, v: T) {
        self.vals.iter_mut().for_each(|x| *x = v);
    }

    /// Give up the buffer, in C order.
    pub fn into_vec(self) -> Vec<T> {
        self.vals
    }
}

impl<T: Float> Index<(usize, usize, usize)> for Lattice<T> {
    type Output = T;

    #[inline(always)]
    fn index(&self, (i, j, k): (usize, usize, usize)) -> &T {
        &self.vals[self.offset(i, j, k)]
    }
}

impl<T: Float> IndexMut<(usize, usize, usize)> for Lattice<T> {
    #[inline(always)]
    fn index_mut(&mut self, (i, j, k): (usize, usize, usize)) -> &mut T {
        let loc = self.offset(i, j, k);
        &mut self.vals[loc]
    }
}
