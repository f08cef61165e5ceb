use std::fmt;

use crate::cell::Site;
use crate::coord::{Coord, Extent};
use crate::neighbourhood::Neighbours;

/// Which of the lattice's two buffers a cell was built into.
/// The label never changes; only the present/past roles move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Slot {
    A,
    B,
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Slot::A => f.write_str("A"),
            Slot::B => f.write_str("B"),
        }
    }
}

/// One generation of cells, stored flat in row-major order.
/// Membership and order are fixed once the lattice has filled it.
///
/// Buffers only come out of a [`crate::Lattice`], always full:
///
/// ```compile_fail
/// use lattice::{Buffer, Extent, Slot};
///
/// let empty: Buffer<u8, 2> = Buffer::new(Slot::A, Extent::new([2, 2]).unwrap());
/// ```
pub struct Buffer<C, const D: usize> {
    slot: Slot,
    extent: Extent<D>,
    cells: Vec<C>,
}

impl<C, const D: usize> Buffer<C, D> {
    pub(crate) fn new(slot: Slot, extent: Extent<D>) -> Self {
        Self {
            slot,
            extent,
            cells: Vec::with_capacity(extent.cover_size()),
        }
    }

    /// Push in construction order. The caller appends in ascending flat index.
    pub(crate) fn append(&mut self, cell: C) {
        self.cells.push(cell);
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [C] {
        &mut self.cells
    }

    #[inline]
    pub fn slot(&self) -> Slot {
        self.slot
    }

    #[inline]
    pub fn extent(&self) -> &Extent<D> {
        &self.extent
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    pub fn cells(&self) -> &[C] {
        &self.cells
    }

    /// Flat index of `pos` after toroidal wrapping.
    #[inline]
    pub fn index_of(&self, pos: Coord<D>) -> usize {
        self.extent.flatten(self.extent.wrap(pos))
    }

    /// The cell at `pos`, wrapping around every edge.
    #[inline]
    pub fn resolve(&self, pos: Coord<D>) -> &C {
        &self.cells[self.index_of(pos)]
    }

    /// The cell at `pos + offset`, wrapped. Total for every `i32` input.
    #[inline]
    pub fn resolve_offset(&self, pos: Coord<D>, offset: Coord<D>) -> &C {
        &self.cells[self.extent.flatten(self.extent.wrap_offset(pos, offset))]
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&C> {
        self.cells.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, C> {
        self.cells.iter()
    }

    pub fn site(&self, pos: Coord<D>) -> Site<'_, C, D> {
        let index = self.index_of(pos);
        Site::new(self, self.extent.unflatten(index), index)
    }

    #[inline]
    pub fn site_at(&self, index: usize) -> Site<'_, C, D> {
        Site::new(self, self.extent.unflatten(index), index)
    }

    /// Every cell paired with its coordinate, in flat order.
    pub fn sites(&self) -> impl ExactSizeIterator<Item = Site<'_, C, D>> {
        (0..self.cells.len()).map(move |i| self.site_at(i))
    }

    /// Lazily resolve `pos + offset` for each offset, in table order.
    pub fn neighbours<'a>(
        &'a self,
        pos: Coord<D>,
        offsets: &'a [Coord<D>],
    ) -> Neighbours<'a, C, D> {
        Neighbours::new(self, pos, offsets)
    }
}

impl<'a, C, const D: usize> IntoIterator for &'a Buffer<C, D> {
    type Item = &'a C;
    type IntoIter = std::slice::Iter<'a, C>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}

impl<C, const D: usize> fmt::Debug for Buffer<C, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Buffer")
            .field("slot", &self.slot)
            .field("extent", &self.extent)
            .field("len", &self.cells.len())
            .finish()
    }
}
