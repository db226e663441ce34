//! Trilinear interpolation of scalar fields sampled on regular 3D lattices,
//! no-std compatible (with `alloc`) and allocation-free during evaluation.
//!
//! The pieces, leaves first:
//! * [`BoundingRegion`] maps a physical box onto lattice index space
//! * [`Lattice`] owns the dense, C-ordered samples
//! * [`AccessStrategy`] decides what a lattice index past the edge means
//!   ([`Clamped`], [`Periodic`], [`Mirrored`])
//! * [`Interpolator`] runs the trilinear weighting through a strategy
//!
//! Every node of the lattice is reproduced exactly, and the boundary condition
//! is chosen by type parameter, so the interpolation itself is written once.
//!
//! # Example: Clamped and Periodic
//! ```rust
//! use latterp::{BoundingRegion, Interpolator, Lattice, Periodic};
//!
//! // Region and lattice, 3 samples per axis over [-1, 1]^3
//! let region = BoundingRegion::cube(2.0_f64).unwrap();
//! let dims = [3, 3, 3];
//! let lattice = Lattice::from_fn(dims, |i, j, k| {
//!     let p = region.node(dims, [i, j, k]).unwrap();
//!     p[0] + 2.0 * p[1] - p[2]
//! })
//! .unwrap();
//!
//! // Default boundary handling is clamped
//! let interpolator: Interpolator<'_, f64> = Interpolator::new(region, &lattice).unwrap();
//! let v = interpolator.compute(0.25, -0.5, 0.75);
//! assert!((v - (0.25 - 1.0 - 0.75)).abs() < 1e-12);
//!
//! // Periodic domain over the same samples
//! let periodic: Interpolator<'_, f64, Periodic<'_, f64>> =
//!     Interpolator::new(region, &lattice).unwrap();
//! let _ = periodic.compute(3.5, 0.0, 0.0);
//!
//! // Many points at once
//! let xobs = [0.0_f64, 0.5];
//! let yobs = [0.0_f64, 0.5];
//! let zobs = [0.0_f64, 0.5];
//! let mut out = [0.0; 2];
//! interpolator.interp(&[&xobs[..], &yobs[..], &zobs[..]], &mut out).unwrap();
//! assert!((out[1] - 1.0).abs() < 1e-12);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
// These "needless" range loops are a significant speedup
#![allow(clippy::needless_range_loop)]

extern crate alloc;

pub mod access;
pub use access::{AccessStrategy, Clamped, Mirrored, Periodic};

pub mod lattice;
pub use lattice::Lattice;

pub mod region;
pub use region::BoundingRegion;

pub mod trilinear;
pub use trilinear::{check_bounds, trilerp, Interpolator};

#[cfg(feature = "std")]
pub mod utils;

#[cfg(all(test, feature = "std"))]
pub(crate) mod testing;
