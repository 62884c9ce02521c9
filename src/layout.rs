//! Reference offset resolver built from a wedge size table.
//!
//! [`WedgeLayout`] stores wedges back to back: scales in order, angles in
//! order within a scale, each wedge row-major. Knowing only
//! `sizes[scale][angle]` is then enough to place every coefficient.

use std::convert::Infallible;
use std::ops::Range;

use curvelet_traits::{OffsetResolver, ResolveError, WedgeShape};

use crate::ViewError;

/// Contiguous scale-major, angle-minor, row-major coefficient layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WedgeLayout {
    sizes: Vec<Vec<WedgeShape>>,
    /// `starts[s][a]` is the first offset of wedge `(s, a)`.
    starts: Vec<Vec<usize>>,
    /// `scale_starts[s]` is the first offset of scale `s`; one extra entry
    /// holds the total length.
    scale_starts: Vec<usize>,
}

impl WedgeLayout {
    /// Lay out wedges with the given `sizes[scale][angle]` shapes.
    ///
    /// Offsets saturate at `usize::MAX`; use [`try_new`](Self::try_new) when
    /// the table could describe more coefficients than that.
    pub fn new(sizes: Vec<Vec<WedgeShape>>) -> Self {
        let layout = Self::build(sizes, |next, [rows, cols], _, _| {
            Ok::<_, Infallible>(next.saturating_add(rows.saturating_mul(cols)))
        });
        match layout {
            Ok(layout) => layout,
            Err(never) => match never {},
        }
    }

    /// Like [`new`](Self::new), but fails with [`ViewError::LayoutOverflow`]
    /// on the first wedge whose end offset does not fit in `usize`.
    pub fn try_new(sizes: Vec<Vec<WedgeShape>>) -> crate::Result<Self> {
        Self::build(sizes, |next, [rows, cols], scale, angle| {
            rows.checked_mul(cols)
                .and_then(|n| next.checked_add(n))
                .ok_or(ViewError::LayoutOverflow { scale, angle })
        })
    }

    /// Prefix-sum the wedge sizes; `step(next, shape, scale, angle)` returns
    /// the end offset of the wedge starting at `next`.
    fn build<E, F>(sizes: Vec<Vec<WedgeShape>>, mut step: F) -> Result<Self, E>
    where
        F: FnMut(usize, WedgeShape, usize, usize) -> Result<usize, E>,
    {
        let mut starts = Vec::with_capacity(sizes.len());
        let mut scale_starts = Vec::with_capacity(sizes.len() + 1);
        let mut next = 0usize;
        for (s, scale) in sizes.iter().enumerate() {
            scale_starts.push(next);
            let mut wedge_starts = Vec::with_capacity(scale.len());
            for (a, &shape) in scale.iter().enumerate() {
                wedge_starts.push(next);
                next = step(next, shape, s, a)?;
            }
            starts.push(wedge_starts);
        }
        scale_starts.push(next);
        Ok(Self {
            sizes,
            starts,
            scale_starts,
        })
    }

    /// The `sizes[scale][angle]` table this layout was built from.
    pub fn sizes(&self) -> &[Vec<WedgeShape>] {
        &self.sizes
    }

    /// Total number of coefficients in a buffer with this layout.
    pub fn len(&self) -> usize {
        self.scale_starts.last().copied().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn check_scale(&self, scale: usize) -> Result<(), ResolveError> {
        if scale >= self.sizes.len() {
            return Err(ResolveError::ScaleOutOfRange {
                scale,
                num_scales: self.sizes.len(),
            });
        }
        Ok(())
    }

    /// Start offset and shape of wedge `(scale, angle)`.
    fn wedge(&self, scale: usize, angle: usize) -> Result<(usize, WedgeShape), ResolveError> {
        self.check_scale(scale)?;
        let num_angles = self.sizes[scale].len();
        if angle >= num_angles {
            return Err(ResolveError::AngleOutOfRange {
                scale,
                angle,
                num_angles,
            });
        }
        Ok((self.starts[scale][angle], self.sizes[scale][angle]))
    }
}

impl OffsetResolver for WedgeLayout {
    fn num_scales(&self) -> usize {
        self.sizes.len()
    }

    fn num_angles(&self, scale: usize) -> Result<usize, ResolveError> {
        self.check_scale(scale)?;
        Ok(self.sizes[scale].len())
    }

    fn scale_range(&self, scale: usize) -> Result<Range<usize>, ResolveError> {
        self.check_scale(scale)?;
        Ok(self.scale_starts[scale]..self.scale_starts[scale + 1])
    }

    fn wedge_range(&self, scale: usize, angle: usize) -> Result<Range<usize>, ResolveError> {
        let (start, [rows, cols]) = self.wedge(scale, angle)?;
        Ok(start..start.saturating_add(rows.saturating_mul(cols)))
    }

    fn row_range(
        &self,
        scale: usize,
        angle: usize,
        row: usize,
    ) -> Result<Range<usize>, ResolveError> {
        let (start, [rows, cols]) = self.wedge(scale, angle)?;
        if row >= rows {
            return Err(ResolveError::RowOutOfRange {
                scale,
                angle,
                row,
                rows,
            });
        }
        let first = start.saturating_add(row.saturating_mul(cols));
        Ok(first..first.saturating_add(cols))
    }

    fn offset(
        &self,
        scale: usize,
        angle: usize,
        row: usize,
        col: usize,
    ) -> Result<usize, ResolveError> {
        let (start, [rows, cols]) = self.wedge(scale, angle)?;
        if row >= rows {
            return Err(ResolveError::RowOutOfRange {
                scale,
                angle,
                row,
                rows,
            });
        }
        if col >= cols {
            return Err(ResolveError::ColumnOutOfRange {
                scale,
                angle,
                col,
                cols,
            });
        }
        Ok(start.saturating_add(row.saturating_mul(cols)).saturating_add(col))
    }

    fn wedge_shape(&self, scale: usize, angle: usize) -> Result<WedgeShape, ResolveError> {
        self.wedge(scale, angle).map(|(_, shape)| shape)
    }
}

impl FromIterator<Vec<WedgeShape>> for WedgeLayout {
    fn from_iter<I: IntoIterator<Item = Vec<WedgeShape>>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
