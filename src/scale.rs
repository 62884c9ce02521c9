//! Single-scale coefficient views.
//!
//! A [`ScaleView`] holds only the coefficients of one scale, but the resolver
//! still answers in the absolute offset space of the full buffer. Every offset
//! it returns is rebased by subtracting the scale's base offset (the absolute
//! offset at which the view's storage begins) before the storage is indexed.

use std::ops::Range;

use curvelet_traits::OffsetResolver;
use tracing::trace;

use crate::buffer::{checked_elem, checked_elem_mut, checked_slice, Coefficients, CoefficientsMut};
use crate::{Result, Selection, ViewError, Wedge};

/// View over the coefficients of one scale.
///
/// Usually obtained from [`TransformView::scale`](crate::TransformView::scale)
/// or [`TransformView::scale_mut`](crate::TransformView::scale_mut).
#[derive(Clone)]
pub struct ScaleView<S, R> {
    data: S,
    resolver: R,
    scale: usize,
    base: usize,
}

impl<S: Coefficients, R> std::fmt::Debug for ScaleView<S, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScaleView")
            .field("scale", &self.scale)
            .field("base", &self.base)
            .field("len", &self.data.as_coefficients().len())
            .finish()
    }
}

impl<S, R: OffsetResolver> ScaleView<S, R> {
    /// Wrap the coefficients of `scale` held outside any full buffer.
    ///
    /// `data` must start at the first coefficient of the scale; the base
    /// offset is taken from the resolver's range for `scale`.
    pub fn new(data: S, resolver: R, scale: usize) -> Result<Self> {
        let base = resolver.scale_range(scale)?.start;
        Ok(Self::from_parts(data, resolver, scale, base))
    }
}

impl<S, R> ScaleView<S, R> {
    pub(crate) fn from_parts(data: S, resolver: R, scale: usize, base: usize) -> Self {
        Self {
            data,
            resolver,
            scale,
            base,
        }
    }

    /// Index of the scale this view covers.
    #[inline]
    pub fn scale(&self) -> usize {
        self.scale
    }

    /// Absolute offset of the first coefficient of the scale.
    #[inline]
    pub fn base(&self) -> usize {
        self.base
    }

    #[inline]
    pub fn resolver(&self) -> &R {
        &self.resolver
    }

    pub fn into_inner(self) -> (S, R) {
        (self.data, self.resolver)
    }

    fn rebase_offset(&self, offset: usize) -> Result<usize> {
        offset
            .checked_sub(self.base)
            .ok_or(ViewError::OutsideScale {
                scale: self.scale,
                offset,
                base: self.base,
            })
    }

    fn rebase(&self, range: Range<usize>) -> Result<Range<usize>> {
        Ok(self.rebase_offset(range.start)?..self.rebase_offset(range.end)?)
    }
}

impl<S: Coefficients, R> ScaleView<S, R> {
    #[inline]
    pub fn as_slice(&self) -> &[S::Elem] {
        self.data.as_coefficients()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }

    /// Reborrow as a view over `&[T]`.
    pub fn view(&self) -> ScaleView<&[S::Elem], &R> {
        ScaleView {
            data: self.data.as_coefficients(),
            resolver: &self.resolver,
            scale: self.scale,
            base: self.base,
        }
    }
}

impl<S, R> ScaleView<S, R>
where
    S: Coefficients,
    S::Elem: Copy,
    R: OffsetResolver,
{
    /// Number of angles at this scale.
    pub fn num_angles(&self) -> Result<usize> {
        Ok(self.resolver.num_angles(self.scale)?)
    }

    /// Copy out wedge `angle`, reshaped to its declared shape.
    pub fn wedge(&self, angle: usize) -> Result<Wedge<S::Elem>> {
        let absolute = self.resolver.wedge_range(self.scale, angle)?;
        let shape = self.resolver.wedge_shape(self.scale, angle)?;
        let range = self.rebase(absolute)?;
        trace!(
            scale = self.scale,
            angle,
            base = self.base,
            start = range.start,
            end = range.end,
            "rebased wedge"
        );
        Wedge::from_vec(checked_slice(self.as_slice(), range)?.to_vec(), shape)
    }

    /// Copy out one row of wedge `angle`.
    pub fn row(&self, angle: usize, row: usize) -> Result<Vec<S::Elem>> {
        let absolute = self.resolver.row_range(self.scale, angle, row)?;
        let range = self.rebase(absolute)?;
        trace!(
            scale = self.scale,
            angle,
            row,
            base = self.base,
            start = range.start,
            end = range.end,
            "rebased row"
        );
        Ok(checked_slice(self.as_slice(), range)?.to_vec())
    }

    /// Read the coefficient at `(angle, row, col)`.
    pub fn coefficient(&self, angle: usize, row: usize, col: usize) -> Result<S::Elem> {
        let offset = self.local_offset(angle, row, col)?;
        checked_elem(self.as_slice(), offset).copied()
    }

    /// Index by a coordinate of 0 to 3 components, scale implied.
    ///
    /// | components | result |
    /// |---|---|
    /// | none | [`Selection::Scale`], this view |
    /// | `angle` | [`Selection::Wedge`], see [`wedge`](Self::wedge) |
    /// | `angle, row` | [`Selection::Row`], see [`row`](Self::row) |
    /// | `angle, row, col` | [`Selection::Coefficient`] |
    pub fn at(&self, coord: &[usize]) -> Result<Selection<'_, S::Elem, R>> {
        match *coord {
            [] => Ok(Selection::Scale(self.view())),
            [a] => self.wedge(a).map(Selection::Wedge),
            [a, r] => self.row(a, r).map(Selection::Row),
            [a, r, c] => self.coefficient(a, r, c).map(Selection::Coefficient),
            _ => Err(ViewError::UnsupportedArity {
                arity: coord.len(),
                max: 3,
            }),
        }
    }

    /// Every wedge of the scale, in angle order.
    pub fn wedges(&self) -> Result<impl Iterator<Item = Result<Wedge<S::Elem>>> + '_> {
        let n = self.num_angles()?;
        Ok((0..n).map(move |a| self.wedge(a)))
    }
}

impl<S, R: OffsetResolver> ScaleView<S, R> {
    fn local_offset(&self, angle: usize, row: usize, col: usize) -> Result<usize> {
        let absolute = self.resolver.offset(self.scale, angle, row, col)?;
        let offset = self.rebase_offset(absolute)?;
        trace!(
            scale = self.scale,
            angle,
            row,
            col,
            base = self.base,
            offset,
            "rebased coefficient"
        );
        Ok(offset)
    }
}

impl<S, R> ScaleView<S, R>
where
    S: CoefficientsMut,
    R: OffsetResolver,
{
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [S::Elem] {
        self.data.as_coefficients_mut()
    }

    /// Reborrow as a view over `&mut [T]`.
    pub fn view_mut(&mut self) -> ScaleView<&mut [S::Elem], &R> {
        ScaleView {
            data: self.data.as_coefficients_mut(),
            resolver: &self.resolver,
            scale: self.scale,
            base: self.base,
        }
    }

    /// Mutable reference to the coefficient at `(angle, row, col)`.
    pub fn coefficient_mut(
        &mut self,
        angle: usize,
        row: usize,
        col: usize,
    ) -> Result<&mut S::Elem> {
        let offset = self.local_offset(angle, row, col)?;
        checked_elem_mut(self.data.as_coefficients_mut(), offset)
    }

    /// Overwrite the coefficient at `(angle, row, col)`.
    pub fn set(&mut self, angle: usize, row: usize, col: usize, value: S::Elem) -> Result<()> {
        *self.coefficient_mut(angle, row, col)? = value;
        Ok(())
    }
}
