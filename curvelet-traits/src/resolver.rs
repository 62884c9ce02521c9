//! The offset resolver contract.
//!
//! A curvelet decomposition is stored as one flat buffer. The operator that
//! produced it knows the layout: where every scale, wedge, wedge row, and
//! single coefficient lives. Views ask it through [`OffsetResolver`] and never
//! compute layout on their own.
//!
//! All offsets are absolute, i.e. relative to the start of the full buffer.
//! Views over a sub-range (a single scale) are responsible for rebasing.

use std::ops::Range;
use std::sync::Arc;

/// Declared `[rows, cols]` shape of one wedge.
pub type WedgeShape = [usize; 2];

/// Errors reported by an [`OffsetResolver`] for coordinates it cannot place.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    /// Scale index past the last scale.
    #[error("scale {scale} out of range for {num_scales} scales")]
    ScaleOutOfRange { scale: usize, num_scales: usize },

    /// Angle index past the last wedge of the scale.
    #[error("angle {angle} out of range for {num_angles} angles at scale {scale}")]
    AngleOutOfRange {
        scale: usize,
        angle: usize,
        num_angles: usize,
    },

    /// Row index past the last row of the wedge.
    #[error("row {row} out of range for {rows} rows in wedge ({scale}, {angle})")]
    RowOutOfRange {
        scale: usize,
        angle: usize,
        row: usize,
        rows: usize,
    },

    /// Column index past the last column of the wedge.
    #[error("column {col} out of range for {cols} columns in wedge ({scale}, {angle})")]
    ColumnOutOfRange {
        scale: usize,
        angle: usize,
        col: usize,
        cols: usize,
    },

    /// Coordinate with no components or more than four.
    #[error("cannot resolve a coordinate with {0} components (expected 1 to 4)")]
    UnsupportedArity(usize),
}

/// Answer to an arity-polymorphic [`OffsetResolver::index`] lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Extent {
    /// Half-open absolute offset range, for coordinates of 1 to 3 components.
    Range(Range<usize>),
    /// Single absolute offset, for a fully specified coordinate.
    Offset(usize),
}

/// Translates hierarchical curvelet coordinates into flat buffer offsets.
///
/// Implemented by the FDCT operator that owns the coefficient layout. Every
/// method answers in the absolute offset space of the full buffer and reports
/// out-of-range coordinates as [`ResolveError`].
pub trait OffsetResolver {
    /// Number of scales in the decomposition.
    fn num_scales(&self) -> usize;

    /// Number of angles (wedges) at `scale`.
    fn num_angles(&self, scale: usize) -> Result<usize, ResolveError>;

    /// Offsets covered by every wedge of `scale`.
    fn scale_range(&self, scale: usize) -> Result<Range<usize>, ResolveError>;

    /// Offsets covered by wedge `(scale, angle)`.
    fn wedge_range(&self, scale: usize, angle: usize) -> Result<Range<usize>, ResolveError>;

    /// Offsets covered by one row of wedge `(scale, angle)`.
    fn row_range(
        &self,
        scale: usize,
        angle: usize,
        row: usize,
    ) -> Result<Range<usize>, ResolveError>;

    /// Offset of the single coefficient `(scale, angle, row, col)`.
    fn offset(
        &self,
        scale: usize,
        angle: usize,
        row: usize,
        col: usize,
    ) -> Result<usize, ResolveError>;

    /// Declared two-dimensional shape of wedge `(scale, angle)`.
    fn wedge_shape(&self, scale: usize, angle: usize) -> Result<WedgeShape, ResolveError>;

    /// Resolve a coordinate of 1 to 4 components.
    ///
    /// Partial coordinates resolve to a [`Extent::Range`], a full coordinate to
    /// an [`Extent::Offset`].
    fn index(&self, coord: &[usize]) -> Result<Extent, ResolveError> {
        match *coord {
            [s] => self.scale_range(s).map(Extent::Range),
            [s, a] => self.wedge_range(s, a).map(Extent::Range),
            [s, a, r] => self.row_range(s, a, r).map(Extent::Range),
            [s, a, r, c] => self.offset(s, a, r, c).map(Extent::Offset),
            _ => Err(ResolveError::UnsupportedArity(coord.len())),
        }
    }
}

macro_rules! forward_resolver {
    () => {
        fn num_scales(&self) -> usize {
            (**self).num_scales()
        }

        fn num_angles(&self, scale: usize) -> Result<usize, ResolveError> {
            (**self).num_angles(scale)
        }

        fn scale_range(&self, scale: usize) -> Result<Range<usize>, ResolveError> {
            (**self).scale_range(scale)
        }

        fn wedge_range(&self, scale: usize, angle: usize) -> Result<Range<usize>, ResolveError> {
            (**self).wedge_range(scale, angle)
        }

        fn row_range(
            &self,
            scale: usize,
            angle: usize,
            row: usize,
        ) -> Result<Range<usize>, ResolveError> {
            (**self).row_range(scale, angle, row)
        }

        fn offset(
            &self,
            scale: usize,
            angle: usize,
            row: usize,
            col: usize,
        ) -> Result<usize, ResolveError> {
            (**self).offset(scale, angle, row, col)
        }

        fn wedge_shape(&self, scale: usize, angle: usize) -> Result<WedgeShape, ResolveError> {
            (**self).wedge_shape(scale, angle)
        }

        fn index(&self, coord: &[usize]) -> Result<Extent, ResolveError> {
            (**self).index(coord)
        }
    };
}

impl<R: OffsetResolver + ?Sized> OffsetResolver for &R {
    forward_resolver!();
}

impl<R: OffsetResolver + ?Sized> OffsetResolver for Arc<R> {
    forward_resolver!();
}

impl<R: OffsetResolver + ?Sized> OffsetResolver for Box<R> {
    forward_resolver!();
}
