//! Whole-transform coefficient views.
//!
//! A [`TransformView`] addresses the full coefficient buffer of one curvelet
//! decomposition. Offsets come from the bound [`OffsetResolver`] and are
//! absolute, so lookups index the storage directly. Narrowing to one scale
//! produces a [`ScaleView`] over that scale's sub-range, which rebases
//! everything it asks the resolver.

use std::borrow::Cow;

use curvelet_traits::{CastCoefficient, OffsetResolver};
use tracing::{debug, trace};

use crate::buffer::{
    checked_elem, checked_elem_mut, checked_slice, checked_slice_mut, Coefficients,
    CoefficientsMut, ViewOptions,
};
use crate::{Result, ScaleView, Selection, ViewError, Wedge};

/// View over a full coefficient buffer.
///
/// # Type Parameters
/// - `S`: storage handle; `&[T]` or `&mut [T]` for views that alias the
///   caller's buffer, `Vec<T>` for owned copies
/// - `R`: the offset resolver, usually `&Operator` or `Arc<Operator>`
#[derive(Clone)]
pub struct TransformView<S, R> {
    data: S,
    resolver: Option<R>,
}

impl<S: Coefficients, R> std::fmt::Debug for TransformView<S, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TransformView")
            .field("len", &self.data.as_coefficients().len())
            .field("bound", &self.resolver.is_some())
            .finish()
    }
}

impl<S, R> TransformView<S, R> {
    /// Wrap `data` without copying, bound to `resolver`.
    pub fn new(data: S, resolver: R) -> Self {
        Self {
            data,
            resolver: Some(resolver),
        }
    }

    /// Wrap `data` with no resolver; every indexing call except the empty
    /// coordinate fails with [`ViewError::NoResolver`] until one is bound.
    pub fn unbound(data: S) -> Self {
        Self {
            data,
            resolver: None,
        }
    }

    /// Replace the resolver binding.
    pub fn bind<R2>(self, resolver: R2) -> TransformView<S, R2> {
        TransformView {
            data: self.data,
            resolver: Some(resolver),
        }
    }

    #[inline]
    pub fn is_bound(&self) -> bool {
        self.resolver.is_some()
    }

    /// The bound resolver.
    pub fn resolver(&self) -> Result<&R> {
        self.resolver.as_ref().ok_or(ViewError::NoResolver)
    }

    /// Give back the storage handle and resolver.
    pub fn into_inner(self) -> (S, Option<R>) {
        (self.data, self.resolver)
    }
}

impl<T, R> TransformView<Vec<T>, R> {
    /// Collect coefficients from any iterator into an owned view.
    pub fn from_elements<I: IntoIterator<Item = T>>(elements: I, resolver: R) -> Self {
        Self::new(elements.into_iter().collect(), resolver)
    }
}

impl<'a, T: Clone, R> TransformView<Cow<'a, [T]>, R> {
    /// Borrow `data`, or copy it when `options.copy` is set.
    pub fn with_options(data: &'a [T], resolver: R, options: ViewOptions) -> Self {
        let data = if options.copy {
            debug!(len = data.len(), "copying coefficient buffer");
            Cow::Owned(data.to_vec())
        } else {
            Cow::Borrowed(data)
        };
        Self::new(data, resolver)
    }
}

impl<S: Coefficients, R> TransformView<S, R> {
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
    pub fn view(&self) -> TransformView<&[S::Elem], &R> {
        TransformView {
            data: self.data.as_coefficients(),
            resolver: self.resolver.as_ref(),
        }
    }
}

impl<S, R> TransformView<S, R>
where
    S: Coefficients,
    S::Elem: Copy,
    R: Clone,
{
    /// Copy into a freshly allocated buffer of the same element type.
    pub fn to_owned_view(&self) -> TransformView<Vec<S::Elem>, R> {
        debug!(len = self.len(), "copying coefficient buffer");
        TransformView {
            data: self.as_slice().to_vec(),
            resolver: self.resolver.clone(),
        }
    }

    /// Copy into a freshly allocated buffer of element type `U`.
    ///
    /// Fails on the first coefficient that `U` cannot represent.
    pub fn cast<U>(&self) -> Result<TransformView<Vec<U>, R>>
    where
        S::Elem: CastCoefficient<U>,
    {
        debug!(
            len = self.len(),
            from = std::any::type_name::<S::Elem>(),
            to = std::any::type_name::<U>(),
            "casting coefficient buffer"
        );
        let data = self
            .as_slice()
            .iter()
            .enumerate()
            .map(|(offset, &x)| x.cast_coefficient().ok_or(ViewError::Cast { offset }))
            .collect::<Result<Vec<U>>>()?;
        Ok(TransformView {
            data,
            resolver: self.resolver.clone(),
        })
    }
}

impl<S, R> TransformView<S, R>
where
    S: Coefficients,
    S::Elem: Copy,
    R: OffsetResolver,
{
    pub fn num_scales(&self) -> Result<usize> {
        Ok(self.resolver()?.num_scales())
    }

    /// Narrow to one scale without copying.
    ///
    /// The returned view covers the scale's offset range and is bound to the
    /// same resolver; its base offset is where that range starts.
    pub fn scale(&self, scale: usize) -> Result<ScaleView<&[S::Elem], &R>> {
        let resolver = self.resolver()?;
        let range = resolver.scale_range(scale)?;
        trace!(scale, start = range.start, end = range.end, "resolved scale");
        let base = range.start;
        let data = checked_slice(self.as_slice(), range)?;
        Ok(ScaleView::from_parts(data, resolver, scale, base))
    }

    /// Copy out wedge `(scale, angle)`, reshaped to its declared shape.
    pub fn wedge(&self, scale: usize, angle: usize) -> Result<Wedge<S::Elem>> {
        let resolver = self.resolver()?;
        let range = resolver.wedge_range(scale, angle)?;
        let shape = resolver.wedge_shape(scale, angle)?;
        trace!(
            scale,
            angle,
            start = range.start,
            end = range.end,
            "resolved wedge"
        );
        Wedge::from_vec(checked_slice(self.as_slice(), range)?.to_vec(), shape)
    }

    /// Copy out one row of wedge `(scale, angle)`.
    pub fn row(&self, scale: usize, angle: usize, row: usize) -> Result<Vec<S::Elem>> {
        let range = self.resolver()?.row_range(scale, angle, row)?;
        trace!(
            scale,
            angle,
            row,
            start = range.start,
            end = range.end,
            "resolved row"
        );
        Ok(checked_slice(self.as_slice(), range)?.to_vec())
    }

    /// Read the coefficient at `(scale, angle, row, col)`.
    pub fn coefficient(
        &self,
        scale: usize,
        angle: usize,
        row: usize,
        col: usize,
    ) -> Result<S::Elem> {
        let offset = self.resolver()?.offset(scale, angle, row, col)?;
        trace!(scale, angle, row, col, offset, "resolved coefficient");
        checked_elem(self.as_slice(), offset).copied()
    }

    /// Index by a coordinate of 0 to 4 components.
    ///
    /// | components | result |
    /// |---|---|
    /// | none | [`Selection::Transform`], this view |
    /// | `scale` | [`Selection::Scale`], see [`scale`](Self::scale) |
    /// | `scale, angle` | [`Selection::Wedge`], see [`wedge`](Self::wedge) |
    /// | `scale, angle, row` | [`Selection::Row`], see [`row`](Self::row) |
    /// | `scale, angle, row, col` | [`Selection::Coefficient`] |
    pub fn at(&self, coord: &[usize]) -> Result<Selection<'_, S::Elem, R>> {
        match *coord {
            [] => Ok(Selection::Transform(self.view())),
            [s] => self.scale(s).map(Selection::Scale),
            [s, a] => self.wedge(s, a).map(Selection::Wedge),
            [s, a, r] => self.row(s, a, r).map(Selection::Row),
            [s, a, r, c] => self.coefficient(s, a, r, c).map(Selection::Coefficient),
            _ => Err(ViewError::UnsupportedArity {
                arity: coord.len(),
                max: 4,
            }),
        }
    }

    /// Scale views for every scale, in order.
    pub fn scales(&self) -> Result<impl Iterator<Item = Result<ScaleView<&[S::Elem], &R>>> + '_> {
        let n = self.num_scales()?;
        Ok((0..n).map(move |s| self.scale(s)))
    }
}

impl<S, R> TransformView<S, R>
where
    S: CoefficientsMut,
    R: OffsetResolver,
{
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [S::Elem] {
        self.data.as_coefficients_mut()
    }

    /// Reborrow as a view over `&mut [T]`.
    pub fn view_mut(&mut self) -> TransformView<&mut [S::Elem], &R> {
        TransformView {
            data: self.data.as_coefficients_mut(),
            resolver: self.resolver.as_ref(),
        }
    }

    /// Narrow to one scale without copying; writes land in this buffer.
    pub fn scale_mut(&mut self, scale: usize) -> Result<ScaleView<&mut [S::Elem], &R>> {
        let resolver = self.resolver.as_ref().ok_or(ViewError::NoResolver)?;
        let range = resolver.scale_range(scale)?;
        trace!(scale, start = range.start, end = range.end, "resolved scale");
        let base = range.start;
        let data = checked_slice_mut(self.data.as_coefficients_mut(), range)?;
        Ok(ScaleView::from_parts(data, resolver, scale, base))
    }

    /// Mutable reference to the coefficient at `(scale, angle, row, col)`.
    pub fn coefficient_mut(
        &mut self,
        scale: usize,
        angle: usize,
        row: usize,
        col: usize,
    ) -> Result<&mut S::Elem> {
        let resolver = self.resolver.as_ref().ok_or(ViewError::NoResolver)?;
        let offset = resolver.offset(scale, angle, row, col)?;
        trace!(scale, angle, row, col, offset, "resolved coefficient");
        checked_elem_mut(self.data.as_coefficients_mut(), offset)
    }

    /// Overwrite the coefficient at `(scale, angle, row, col)`.
    pub fn set(
        &mut self,
        scale: usize,
        angle: usize,
        row: usize,
        col: usize,
        value: S::Elem,
    ) -> Result<()> {
        *self.coefficient_mut(scale, angle, row, col)? = value;
        Ok(())
    }
}
