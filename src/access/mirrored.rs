//! Reflective access, for fields symmetric about the region faces.
use num_traits::Float;

use super::AccessStrategy;
use crate::Lattice;

/// Reflects indices that fall off the lattice back across the nearest face,
/// so that `-1` reads sample `1` and `n` reads sample `n - 2`.
///
/// The reflection repeats with period `2 * (n - 1)`, so arbitrarily distant
/// indices resolve too.
#[derive(Clone, Copy, Debug)]
pub struct Mirrored<'a, T: Float> {
    lattice: &'a Lattice<T>,
}

impl<'a, T: Float> AccessStrategy<'a, T> for Mirrored<'a, T> {
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
        let imax = self.lattice.size(axis) as isize - 1;
        if imax < 1 {
            return 0;
        }
        if (0..=imax).contains(&raw) {
            return raw as usize;
        }

        let i = raw.rem_euclid(2 * imax);
        if i > imax {
            (2 * imax - i) as usize
        } else {
            i as usize
        }
    }

    #[inline(always)]
    fn get_value(&self, i: usize, j: usize, k: usize) -> T {
        self.lattice.get(i, j, k)
    }
}
