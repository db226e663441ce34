//! Boundary conditions for lattice reads.
//!
//! The interpolator only ever asks for the samples at the eight corners of the
//! cell containing a point, and that cell may hang off the edge of the lattice
//! (a point on the upper face, or outside the region entirely). An access
//! strategy turns each raw corner index into something it can read, and
//! decides what the read produces.
//!
//! | Strategy     | Index on the lattice | Index off the lattice             |
//! |--------------|----------------------|-----------------------------------|
//! | [`Clamped`]  | unchanged            | clamped to the nearest face       |
//! | [`Periodic`] | unchanged            | wrapped with period `n - 1`       |
//! | [`Mirrored`] | unchanged            | reflected about the nearest face  |
use num_traits::Float;

use crate::Lattice;

pub mod clamped;
pub mod mirrored;
pub mod periodic;

pub use clamped::Clamped;
pub use mirrored::Mirrored;
pub use periodic::Periodic;

/// Read access to a lattice under some boundary condition.
///
/// Implementations borrow the lattice and never modify it, so any number of
/// strategies (and interpolators built on them) can share one lattice.
pub trait AccessStrategy<'a, T: Float> {
    /// Borrow `lattice` for reading.
    fn new(lattice: &'a Lattice<T>) -> Self;

    /// The lattice being read.
    fn lattice(&self) -> &'a Lattice<T>;

    /// Resolve a possibly negative or past-the-end index along `axis`
    /// into a storage index.
    ///
    /// It is highly recommended to inline implementations of this function.
    fn map_index(&self, raw: isize, axis: usize) -> usize;

    /// Read, or substitute for, the sample at mapped indices `(i, j, k)`.
    ///
    /// It is highly recommended to inline implementations of this function.
    fn get_value(&self, i: usize, j: usize, k: usize) -> T;

    /// Map a raw index triple and read the result.
    #[inline(always)]
    fn sample(&self, raw: [isize; 3]) -> T {
        self.get_value(
            self.map_index(raw[0], 0),
            self.map_index(raw[1], 1),
            self.map_index(raw[2], 2),
        )
    }
}
