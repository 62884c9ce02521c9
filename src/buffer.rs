//! Storage handles for coefficient buffers.
//!
//! Views are generic over where their coefficients live. Borrowed storage
//! (`&[T]`, `&mut [T]`) gives non-copying views that alias the caller's
//! buffer; owned storage (`Vec<T>`, `Box<[T]>`) gives independent copies.

use std::borrow::Cow;
use std::ops::Range;
use std::sync::Arc;

use crate::{Result, ViewError};

/// Read access to a flat coefficient buffer.
pub trait Coefficients {
    type Elem;

    fn as_coefficients(&self) -> &[Self::Elem];
}

/// Write access to a flat coefficient buffer.
pub trait CoefficientsMut: Coefficients {
    fn as_coefficients_mut(&mut self) -> &mut [Self::Elem];
}

impl<T> Coefficients for Vec<T> {
    type Elem = T;

    #[inline]
    fn as_coefficients(&self) -> &[T] {
        self
    }
}

impl<T> CoefficientsMut for Vec<T> {
    #[inline]
    fn as_coefficients_mut(&mut self) -> &mut [T] {
        self
    }
}

impl<T> Coefficients for Box<[T]> {
    type Elem = T;

    #[inline]
    fn as_coefficients(&self) -> &[T] {
        self
    }
}

impl<T> CoefficientsMut for Box<[T]> {
    #[inline]
    fn as_coefficients_mut(&mut self) -> &mut [T] {
        self
    }
}

impl<T> Coefficients for &[T] {
    type Elem = T;

    #[inline]
    fn as_coefficients(&self) -> &[T] {
        self
    }
}

impl<T> Coefficients for &mut [T] {
    type Elem = T;

    #[inline]
    fn as_coefficients(&self) -> &[T] {
        self
    }
}

impl<T> CoefficientsMut for &mut [T] {
    #[inline]
    fn as_coefficients_mut(&mut self) -> &mut [T] {
        self
    }
}

impl<T> Coefficients for Arc<[T]> {
    type Elem = T;

    #[inline]
    fn as_coefficients(&self) -> &[T] {
        self
    }
}

impl<T: Clone> Coefficients for Cow<'_, [T]> {
    type Elem = T;

    #[inline]
    fn as_coefficients(&self) -> &[T] {
        self
    }
}

/// Options for building a view over an existing buffer.
///
/// The element type of the result is chosen separately, through
/// [`TransformView::cast`](crate::TransformView::cast).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ViewOptions {
    /// Copy the coefficients instead of borrowing them.
    pub copy: bool,
}

impl ViewOptions {
    /// Borrow the caller's buffer (the default).
    pub fn borrowed() -> Self {
        Self { copy: false }
    }

    /// Take a private copy of the caller's buffer.
    pub fn copied() -> Self {
        Self { copy: true }
    }
}

/// Slice `data` to an absolute `range`, reporting ranges that do not fit.
pub(crate) fn checked_slice<T>(data: &[T], range: Range<usize>) -> Result<&[T]> {
    let len = data.len();
    match data.get(range.clone()) {
        Some(s) => Ok(s),
        None => Err(ViewError::OutOfBuffer {
            start: range.start,
            end: range.end,
            len,
        }),
    }
}

pub(crate) fn checked_slice_mut<T>(data: &mut [T], range: Range<usize>) -> Result<&mut [T]> {
    let len = data.len();
    match data.get_mut(range.clone()) {
        Some(s) => Ok(s),
        None => Err(ViewError::OutOfBuffer {
            start: range.start,
            end: range.end,
            len,
        }),
    }
}

pub(crate) fn checked_elem<T>(data: &[T], offset: usize) -> Result<&T> {
    data.get(offset).ok_or(ViewError::OutOfBuffer {
        start: offset,
        end: offset.saturating_add(1),
        len: data.len(),
    })
}

pub(crate) fn checked_elem_mut<T>(data: &mut [T], offset: usize) -> Result<&mut T> {
    let len = data.len();
    data.get_mut(offset).ok_or(ViewError::OutOfBuffer {
        start: offset,
        end: offset.saturating_add(1),
        len,
    })
}
