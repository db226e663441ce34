//! Physical extent of a lattice and the mapping from world coordinates
//! to continuous lattice coordinates.
//!
//! ```rust
//! use latterp::BoundingRegion;
//!
//! // Centered cuboid, [-1.5, 1.5] x [-2, 2] x [-2.5, 2.5]
//! let region = BoundingRegion::cuboid([3.0_f64, 4.0, 5.0]).unwrap();
//! assert_eq!(region.size_y(), 4.0);
//! assert!(region.inside(&[1.5, 0.0, -2.5]));
//! assert!(!region.inside(&[1.6, 0.0, 0.0]));
//!
//! // Spacing for a 5x5x6 lattice spanning the region
//! let steps = region.steps([5, 5, 6]).unwrap();
//! assert_eq!(steps, [0.75, 1.0, 1.0]);
//! ```
use num_traits::{Float, NumCast};

/// An axis-aligned box `[low, high]` describing the physical domain a lattice covers.
///
/// The first and last sample along each axis sit on the faces of the box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingRegion<T: Float> {
    /// Lower corner
    low: [T; 3],

    /// Upper corner
    high: [T; 3],
}

impl<T: Float> BoundingRegion<T> {
    /// Build a region from explicit corners.
    ///
    /// # Errors
    /// * If `low[axis] < high[axis]` does not hold on every axis (this includes NaN corners)
    pub fn new(low: [T; 3], high: [T; 3]) -> Result<Self, &'static str> {
        let ordered = (0..3).all(|i| low[i] < high[i]);
        if !ordered {
            return Err("Lower corner must be strictly below upper corner on every axis");
        }

        Ok(Self { low, high })
    }

    /// A cube of the given side length centered on the origin.
    ///
    /// # Errors
    /// * If the side length is not positive
    pub fn cube(side: T) -> Result<Self, &'static str> {
        Self::cuboid([side; 3])
    }

    /// A cuboid with the given per-axis side lengths centered on the origin.
    ///
    /// # Errors
    /// * If any side length is not positive
    pub fn cuboid(sides: [T; 3]) -> Result<Self, &'static str> {
        let two = T::one() + T::one();
        let high = sides.map(|s| s / two);
        let low = high.map(|h| -h);
        Self::new(low, high)
    }

    /// Lower corner.
    #[inline]
    pub fn low(&self) -> [T; 3] {
        self.low
    }

    /// Upper corner.
    #[inline]
    pub fn high(&self) -> [T; 3] {
        self.high
    }

    /// Side length along `axis`.
    ///
    /// # Panics
    /// * If `axis > 2`
    #[inline]
    pub fn size(&self, axis: usize) -> T {
        self.high[axis] - self.low[axis]
    }

    #[inline]
    pub fn size_x(&self) -> T {
        self.size(0)
    }

    #[inline]
    pub fn size_y(&self) -> T {
        self.size(1)
    }

    #[inline]
    pub fn size_z(&self) -> T {
        self.size(2)
    }

    /// Side lengths along all three axes.
    #[inline]
    pub fn sizes(&self) -> [T; 3] {
        [self.size(0), self.size(1), self.size(2)]
    }

    /// Whether `point` lies in the closed box, faces included.
    ///
    /// Interpolation never checks this; callers that need in-domain
    /// guarantees should filter with it first.
    #[inline]
    pub fn inside(&self, point: &[T; 3]) -> bool {
        (0..3).all(|i| point[i] >= self.low[i] && point[i] <= self.high[i])
    }

    /// Spacing between adjacent samples of a lattice with `dims` samples
    /// per axis spanning this region.
    ///
    /// # Errors
    /// * If any axis has fewer than two samples, since spacing is undefined there
    /// * If a sample count is not representable in `T`
    pub fn steps(&self, dims: [usize; 3]) -> Result<[T; 3], &'static str> {
        let mut steps = [T::zero(); 3];
        for i in 0..3 {
            if dims[i] < 2 {
                return Err("All axes must have at least two samples");
            }
            let ncells = <T as NumCast>::from(dims[i] - 1).ok_or("Unrepresentable number")?;
            steps[i] = self.size(i) / ncells;
        }

        Ok(steps)
    }

    /// Continuous lattice coordinate of `point`, `(point - low) / steps`.
    ///
    /// Integer values land on lattice nodes. Points outside the region
    /// produce values below zero or above `n - 1`.
    #[inline(always)]
    pub fn fractional_index(&self, point: &[T; 3], steps: &[T; 3]) -> [T; 3] {
        let mut c = [T::zero(); 3];
        for i in 0..3 {
            c[i] = (point[i] - self.low[i]) / steps[i];
        }
        c
    }

    /// Physical location of lattice node `idx` for a lattice with `dims`
    /// samples per axis spanning this region.
    ///
    /// Nodes are placed at `low + idx * steps`, which is how field
    /// producers are expected to sample before handing a lattice to an
    /// interpolator.
    ///
    /// # Errors
    /// * If any axis has fewer than two samples
    /// * If an index is not representable in `T`
    pub fn node(&self, dims: [usize; 3], idx: [usize; 3]) -> Result<[T; 3], &'static str> {
        let steps = self.steps(dims)?;
        let mut p = [T::zero(); 3];
        for i in 0..3 {
            let fi = <T as NumCast>::from(idx[i]).ok_or("Unrepresentable number")?;
            p[i] = self.low[i] + fi * steps[i];
        }

        Ok(p)
    }
}
