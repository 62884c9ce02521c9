//! Shared traits for the curvelet-view ecosystem.
//!
//! This crate holds the contract between coefficient views and the operator
//! that produced the coefficients:
//!
//! - [`OffsetResolver`]: translates `(scale, angle, row, col)` coordinates into
//!   offsets of the flat coefficient buffer and reports wedge shapes
//! - [`Coefficient`] and [`CastCoefficient`]: element bounds and element type
//!   conversion used when a view is copied into a new element type
//!
//! FDCT operator crates can depend on `curvelet-traits` alone to implement
//! [`OffsetResolver`] for their own operator types without orphan rule
//! violations.

pub mod coefficient;
pub mod resolver;

pub use coefficient::{CastCoefficient, Coefficient};
pub use resolver::{Extent, OffsetResolver, ResolveError, WedgeShape};
