//! Direct access for points inside the region.
use num_traits::Float;

use super::AccessStrategy;
use crate::Lattice;

/// The default strategy, meant for observation points inside the region.
///
/// Indices on the lattice are read as-is. A cell hanging off an edge only
/// happens for a point exactly on the upper face (where the extra corner has
/// zero weight) or for a point outside the region; either way the index is
/// saturated to the nearest face rather than read out of bounds, so
/// out-of-region points see the face value held constant.
#[derive(Clone, Copy, Debug)]
pub struct Clamped<'a, T: Float> {
    lattice: &'a Lattice<T>,
}

impl<'a, T: Float> AccessStrategy<'a, T> for Clamped<'a, T> {
    #[inline]
    fn new(lattice: &'a Lattice<T>) -> Self {
        Self { lattice }
    }

    #[inline]
    fn lattice(&self) -> &'a Lattice<T> {
        self.lattice
    }

    #[inline(always)]
    fn map_index(&self, raw: isize, axis: usize) -> usize {
        let imax = self.lattice.size(axis).saturating_sub(1);
        (raw.max(0) as usize).min(imax)
    }

    #[inline(always)]
    fn get_value(&self, i: usize, j: usize, k: usize) -> T {
        self.lattice.get(i, j, k)
    }
}
