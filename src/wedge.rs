//! Owned two-dimensional wedge arrays.
//!
//! A wedge lookup copies the wedge's coefficients out of the flat buffer and
//! reshapes them to the wedge's declared `[rows, cols]` shape. Rows are
//! contiguous (row-major), matching the order in which the resolver lays out
//! rows within a wedge.

use std::ops::{Index, IndexMut};

use curvelet_traits::WedgeShape;

use crate::{Result, ViewError};

/// Owned row-major 2-D array holding one wedge.
#[derive(Debug, Clone, PartialEq)]
pub struct Wedge<T> {
    data: Vec<T>,
    shape: WedgeShape,
}

impl<T> Wedge<T> {
    /// Reshape flat coefficients to `shape`.
    ///
    /// Fails unless `rows * cols` equals the number of coefficients.
    pub fn from_vec(data: Vec<T>, shape: WedgeShape) -> Result<Self> {
        if shape[0].checked_mul(shape[1]) != Some(data.len()) {
            return Err(ViewError::ShapeMismatch {
                len: data.len(),
                shape,
            });
        }
        Ok(Self { data, shape })
    }

    #[inline]
    pub fn shape(&self) -> WedgeShape {
        self.shape
    }

    #[inline]
    pub fn nrows(&self) -> usize {
        self.shape[0]
    }

    #[inline]
    pub fn ncols(&self) -> usize {
        self.shape[1]
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Coefficients in row-major order.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Flatten back into row-major coefficients.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// One row, or `None` past the last row.
    pub fn row(&self, row: usize) -> Option<&[T]> {
        if row >= self.shape[0] {
            return None;
        }
        let cols = self.shape[1];
        Some(&self.data[row * cols..(row + 1) * cols])
    }

    /// Iterate over rows in order.
    pub fn rows(&self) -> impl Iterator<Item = &[T]> + '_ {
        let cols = self.shape[1];
        (0..self.shape[0]).map(move |r| &self.data[r * cols..(r + 1) * cols])
    }

    /// Iterate over all coefficients in row-major order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    #[inline]
    fn flat(&self, row: usize, col: usize) -> Option<usize> {
        (row < self.shape[0] && col < self.shape[1]).then(|| row * self.shape[1] + col)
    }
}

impl<T: Copy> Wedge<T> {
    /// Element at `(row, col)`, or `None` when out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<T> {
        self.flat(row, col).map(|i| self.data[i])
    }

    /// Overwrite the element at `(row, col)`.
    ///
    /// Returns `false` and leaves the wedge untouched when out of bounds.
    pub fn set(&mut self, row: usize, col: usize, value: T) -> bool {
        match self.flat(row, col) {
            Some(i) => {
                self.data[i] = value;
                true
            }
            None => false,
        }
    }
}

impl<T> Index<[usize; 2]> for Wedge<T> {
    type Output = T;

    fn index(&self, [row, col]: [usize; 2]) -> &T {
        assert!(
            row < self.shape[0] && col < self.shape[1],
            "index ({row}, {col}) out of bounds for wedge of shape {:?}",
            self.shape
        );
        &self.data[row * self.shape[1] + col]
    }
}

impl<T> IndexMut<[usize; 2]> for Wedge<T> {
    fn index_mut(&mut self, [row, col]: [usize; 2]) -> &mut T {
        assert!(
            row < self.shape[0] && col < self.shape[1],
            "index ({row}, {col}) out of bounds for wedge of shape {:?}",
            self.shape
        );
        let cols = self.shape[1];
        &mut self.data[row * cols + col]
    }
}
