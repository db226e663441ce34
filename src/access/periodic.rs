//! Periodic access for domains that tile.
//!
//! The lattice is expected to store both endpoints of each period, so along an
//! axis with `n` samples the period is `n - 1` cells and sample `n - 1` holds
//! the same value as sample `0`.
use num_traits::Float;

use super::AccessStrategy;
use crate::Lattice;

/// Wraps indices that fall off the lattice back into one period.
///
/// Points any whole number of periods away from the region evaluate the same
/// as their counterpart inside it.
#[derive(Clone, Copy, Debug)]
pub struct Periodic<'a, T: Float> {
    lattice: &'a Lattice<T>,
}

impl<'a, T: Float> AccessStrategy<'a, T> for Periodic<'a, T> {
    #[inline]
    fn new(lattice: &'a Lattice<T>) -> Self {
        Self { lattice }
    }

    #[inline]
    fn lattice(&self) -> &'a Lattice<T> {
        self.lattice
    }

    /// Indices on the lattice, `0..=n-1`, are returned unchanged so that the
    /// stored upper endpoint is read back exactly. Anything else is reduced
    /// modulo the period `n - 1`, with negative remainders shifted up by one
    /// period, landing in `0..=n-2`.
    #[inline(always)]
    fn map_index(&self, raw: isize, axis: usize) -> usize {
        let n = self.lattice.size(axis) as isize;
        if (0..n).contains(&raw) {
            return raw as usize;
        }

        let period = n - 1;
        if period < 1 {
            return 0;
        }
        let mut i = raw % period;
        if i < 0 {
            i += period;
        }
        i as usize
    }

    /// Any index at or past its axis count reads as zero instead of faulting.
    ///
    /// Indices from `map_index` are always on the lattice, so this only
    /// applies to indices handed in directly. Such a request lands on the
    /// duplicated upper endpoint or beyond, and the zero keeps it from
    /// counting that endpoint twice.
    #[inline(always)]
    fn get_value(&self, i: usize, j: usize, k: usize) -> T {
        let dims = self.lattice.dims();
        if i >= dims[0] || j >= dims[1] || k >= dims[2] {
            return T::zero();
        }
        self.lattice.get(i, j, k)
    }
}
