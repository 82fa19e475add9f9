// Copyright 2025 the Specshelf Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Flattens a per-row strip into a per-cell strip.
//!
//! Cards are stored as one flat list but scrolled by row. [`RowMajorCells`]
//! wraps a row model and answers [`StripModel`] queries per cell: every cell
//! shares the offset and extent of its row, and an offset resolves to the first
//! cell of the row under it. A visible window over this model therefore always
//! covers whole rows, except that the last row stops at the last item.

use core::num::NonZeroUsize;

use crate::{CellAddress, ResizableStripModel, Scalar, StripModel};

/// Row-major cell view over a row [`StripModel`].
#[derive(Debug, Clone)]
pub struct RowMajorCells<M: ResizableStripModel> {
    rows: M,
    columns: NonZeroUsize,
    len: usize,
}

impl<M: ResizableStripModel> RowMajorCells<M> {
    /// Wraps `rows` so that it holds `len` cells laid out `columns` per row.
    ///
    /// The row model is resized to `ceil(len / columns)` rows.
    #[must_use]
    pub fn new(rows: M, columns: NonZeroUsize, len: usize) -> Self {
        let mut this = Self { rows, columns, len };
        this.sync_rows();
        this
    }

    /// The wrapped row model.
    #[must_use]
    pub fn rows(&self) -> &M {
        &self.rows
    }

    /// Mutable access to the wrapped row model.
    pub fn rows_mut(&mut self) -> &mut M {
        &mut self.rows
    }

    /// Cells per row.
    #[must_use]
    pub const fn columns(&self) -> usize {
        self.columns.get()
    }

    /// Changes the number of cells per row and resizes the row model to match.
    pub fn set_columns(&mut self, columns: NonZeroUsize) {
        self.columns = columns;
        self.sync_rows();
    }

    /// Total number of cells.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` when there are no cells.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Changes the number of cells and resizes the row model to match.
    pub fn set_len(&mut self, len: usize) {
        self.len = len;
        self.sync_rows();
    }

    /// `ceil(len / columns)`.
    #[must_use]
    pub const fn row_count(&self) -> usize {
        self.len.div_ceil(self.columns.get())
    }

    /// Row and column of the cell holding item `index`.
    #[must_use]
    pub const fn address_of(&self, index: usize) -> CellAddress {
        CellAddress::of(index, self.columns)
    }

    fn sync_rows(&mut self) {
        let rows = self.row_count();
        self.rows.set_len(rows);
    }

    fn row_of_clamped(&self, index: usize) -> usize {
        let row = index.min(self.len.saturating_sub(1)) / self.columns.get();
        debug_assert!(
            row < self.rows.len(),
            "RowMajorCells row out of range: row={row}, rows={}",
            self.rows.len()
        );
        row
    }
}

impl<M: ResizableStripModel> StripModel for RowMajorCells<M> {
    type Scalar = M::Scalar;

    fn len(&self) -> usize {
        self.len
    }

    fn total_extent(&mut self) -> Self::Scalar {
        self.rows.total_extent()
    }

    fn extent_of(&mut self, index: usize) -> Self::Scalar {
        if self.len == 0 {
            return <Self::Scalar as Scalar>::zero();
        }
        let row = self.row_of_clamped(index);
        self.rows.extent_of(row)
    }

    fn offset_of(&mut self, index: usize) -> Self::Scalar {
        if self.len == 0 {
            return <Self::Scalar as Scalar>::zero();
        }
        let row = self.row_of_clamped(index);
        self.rows.offset_of(row)
    }

    fn index_at_offset(&mut self, offset: Self::Scalar) -> usize {
        if self.len == 0 {
            return 0;
        }
        self.rows
            .index_at_offset(offset)
            .saturating_mul(self.columns.get())
            .min(self.len - 1)
    }
}
