//! Results of call-style indexing.

use crate::{ScaleView, TransformView, Wedge};

/// What a coordinate of a given arity selects.
///
/// Returned by [`TransformView::at`] and [`ScaleView::at`]. Views borrow from
/// the indexed view; wedges and rows are independent copies.
#[derive(Debug)]
pub enum Selection<'a, T, R> {
    /// No components on a [`TransformView`]: the view itself.
    Transform(TransformView<&'a [T], &'a R>),
    /// One component on a [`TransformView`], or none on a [`ScaleView`].
    Scale(ScaleView<&'a [T], &'a R>),
    /// A wedge copied out and reshaped to its declared shape.
    Wedge(Wedge<T>),
    /// One wedge row copied out flat.
    Row(Vec<T>),
    /// A single coefficient.
    Coefficient(T),
}

impl<'a, T, R> Selection<'a, T, R> {
    pub fn into_transform(self) -> Option<TransformView<&'a [T], &'a R>> {
        match self {
            Selection::Transform(v) => Some(v),
            _ => None,
        }
    }

    pub fn into_scale(self) -> Option<ScaleView<&'a [T], &'a R>> {
        match self {
            Selection::Scale(v) => Some(v),
            _ => None,
        }
    }

    pub fn into_wedge(self) -> Option<Wedge<T>> {
        match self {
            Selection::Wedge(w) => Some(w),
            _ => None,
        }
    }

    pub fn into_row(self) -> Option<Vec<T>> {
        match self {
            Selection::Row(r) => Some(r),
            _ => None,
        }
    }

    pub fn into_coefficient(self) -> Option<T> {
        match self {
            Selection::Coefficient(c) => Some(c),
            _ => None,
        }
    }
}
