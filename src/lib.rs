//! Hierarchical views over flat curvelet coefficient buffers.
//!
//! A fast discrete curvelet transform stores one decomposition as a single
//! flat buffer. This crate addresses that buffer by `(scale, angle, row, col)`
//! without knowing the layout itself: every lookup goes through an
//! [`OffsetResolver`], normally the FDCT operator that produced the buffer.
//!
//! # Core Types
//!
//! - [`TransformView`]: the whole buffer, addressed by up to four coordinate
//!   components in absolute offsets
//! - [`ScaleView`]: one scale's sub-range, addressed by `(angle, row, col)`
//!   with offsets rebased to where the scale starts
//! - [`Wedge`]: an owned, row-major copy of one wedge
//! - [`Selection`]: the result of call-style indexing with [`TransformView::at`]
//!   or [`ScaleView::at`]
//! - [`WedgeLayout`]: a reference resolver built from a `sizes[scale][angle]`
//!   table
//!
//! # Copy semantics
//!
//! Whole-transform and single-scale views borrow or own their storage as the
//! caller chooses and never copy on their own. Wedge and row lookups always
//! return copies; single coefficient lookups read in place.
//!
//! # Example
//!
//! ```rust
//! use curvelet_view::{TransformView, WedgeLayout};
//!
//! // One scale with two 4x5 wedges, followed by a second scale.
//! let layout = WedgeLayout::new(vec![vec![[4, 5], [4, 5]], vec![[6, 10]]]);
//! let coeffs: Vec<i64> = (0..100).collect();
//! let view = TransformView::new(coeffs.as_slice(), &layout);
//!
//! let wedge = view.wedge(0, 0).unwrap();
//! assert_eq!(wedge.shape(), [4, 5]);
//! assert_eq!(wedge[[1, 0]], 5);
//!
//! // Going through the scale view rebases offsets to the scale's origin.
//! let scale = view.scale(0).unwrap();
//! assert_eq!(scale.wedge(0).unwrap(), wedge);
//! assert_eq!(scale.coefficient(1, 2, 3).unwrap(), 33);
//! ```

mod buffer;
mod layout;
mod scale;
mod select;
mod transform;
mod wedge;

// ============================================================================
// Resolver contract
// ============================================================================
pub use curvelet_traits::{
    CastCoefficient, Coefficient, Extent, OffsetResolver, ResolveError, WedgeShape,
};

// ============================================================================
// Views
// ============================================================================
pub use scale::ScaleView;
pub use select::Selection;
pub use transform::TransformView;
pub use wedge::Wedge;

// ============================================================================
// Storage, options, and layout
// ============================================================================
pub use buffer::{Coefficients, CoefficientsMut, ViewOptions};
pub use layout::WedgeLayout;

// ============================================================================
// Error types
// ============================================================================

/// Errors that can occur while addressing a coefficient buffer.
#[derive(Debug, thiserror::Error)]
pub enum ViewError {
    /// The resolver rejected the coordinate.
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    /// Call-style indexing with too many coordinate components.
    #[error("unsupported coordinate arity {arity}: expected 0 to {max} components")]
    UnsupportedArity { arity: usize, max: usize },

    /// The view was indexed before a resolver was bound to it.
    #[error("no offset resolver bound to this view")]
    NoResolver,

    /// The resolver answered with offsets outside the view's storage.
    #[error("offsets {start}..{end} do not fit a buffer of length {len}")]
    OutOfBuffer { start: usize, end: usize, len: usize },

    /// An absolute offset lies before the start of the scale view.
    #[error("offset {offset} precedes the start {base} of scale {scale}")]
    OutsideScale {
        scale: usize,
        offset: usize,
        base: usize,
    },

    /// Coefficients cannot be reshaped to the declared wedge shape.
    #[error("cannot reshape {len} coefficients to shape {shape:?}")]
    ShapeMismatch { len: usize, shape: WedgeShape },

    /// A wedge size table describes more coefficients than `usize` can address.
    #[error("wedge ({scale}, {angle}) ends past the addressable offset range")]
    LayoutOverflow { scale: usize, angle: usize },

    /// A coefficient is not representable in the requested element type.
    #[error("coefficient at offset {offset} is not representable in the target type")]
    Cast { offset: usize },
}

/// Result type for coefficient view operations.
pub type Result<T> = std::result::Result<T, ViewError>;
