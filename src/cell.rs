//! The cell contract and the read-only view a cell gets of its generation.

use std::ops::Deref;

use crate::buffer::{Buffer, Slot};
use crate::coord::Coord;
use crate::neighbourhood::{
    CORNER_3D, DIAGONAL_2D, EDGE_3D, MOORE_2D, MOORE_3D, Neighbours, VON_NEUMANN_2D,
    VON_NEUMANN_3D,
};

/// State living at one site of a `D`-dimensional lattice.
///
/// A lattice holds two values per coordinate, one per buffer, built by the
/// factory handed to [`crate::Lattice::new`]. Each generation, the present
/// value is rewritten from the past value at the same coordinate.
pub trait Cell<const D: usize>: Sized {
    /// Called once per cell after every cell of both buffers exists.
    /// The cell is exclusively borrowed here, so it cannot read its neighbours.
    fn init(&mut self, pos: Coord<D>);

    /// Compute this generation from `past`, the same-coordinate cell of the
    /// previous generation. Only the previous generation is reachable.
    fn step(&mut self, past: Site<'_, Self, D>);

    /// Called by [`crate::Lattice::draw`] on the most recently completed
    /// generation. Does nothing unless overridden.
    fn draw(&self, _site: Site<'_, Self, D>) {}
}

/// A cell together with its identity: the buffer it lives in and its
/// wrapped coordinate. Dereferences to the cell.
pub struct Site<'a, C, const D: usize> {
    buffer: &'a Buffer<C, D>,
    pos: Coord<D>,
    index: usize,
}

impl<C, const D: usize> Clone for Site<'_, C, D> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C, const D: usize> Copy for Site<'_, C, D> {}

impl<'a, C, const D: usize> Site<'a, C, D> {
    #[inline]
    pub(crate) fn new(buffer: &'a Buffer<C, D>, pos: Coord<D>, index: usize) -> Self {
        Self { buffer, pos, index }
    }

    #[inline]
    pub fn cell(&self) -> &'a C {
        &self.buffer.cells()[self.index]
    }

    #[inline]
    pub fn pos(&self) -> Coord<D> {
        self.pos
    }

    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    #[inline]
    pub fn slot(&self) -> Slot {
        self.buffer.slot()
    }

    #[inline]
    pub fn buffer(&self) -> &'a Buffer<C, D> {
        self.buffer
    }

    /// The cell at `offset` from this one in the same buffer, wrapped.
    #[inline]
    pub fn neighbour(&self, offset: Coord<D>) -> &'a C {
        self.buffer.resolve_offset(self.pos, offset)
    }

    pub fn neighbour_site(&self, offset: Coord<D>) -> Site<'a, C, D> {
        let extent = self.buffer.extent();
        let pos = extent.wrap_offset(self.pos, offset);
        Site::new(self.buffer, pos, extent.flatten(pos))
    }

    pub fn neighbours(&self, offsets: &'a [Coord<D>]) -> Neighbours<'a, C, D> {
        self.buffer.neighbours(self.pos, offsets)
    }
}

impl<C, const D: usize> Deref for Site<'_, C, D> {
    type Target = C;

    fn deref(&self) -> &C {
        self.cell()
    }
}

impl<'a, C> Site<'a, C, 2> {
    #[inline]
    pub fn x(&self) -> i32 {
        self.pos.x()
    }

    #[inline]
    pub fn y(&self) -> i32 {
        self.pos.y()
    }

    #[inline]
    pub fn at(&self, dx: i32, dy: i32) -> &'a C {
        self.neighbour(Coord::new([dx, dy]))
    }

    pub fn von_neumann(&self) -> Neighbours<'a, C, 2> {
        self.neighbours(&VON_NEUMANN_2D)
    }

    pub fn moore(&self) -> Neighbours<'a, C, 2> {
        self.neighbours(&MOORE_2D)
    }

    /// Walks the full Moore neighbourhood, not only the corner cells.
    /// Existing rules depend on this; use [`Site::corners`] for the four
    /// diagonal cells.
    pub fn diagonal(&self) -> Neighbours<'a, C, 2> {
        self.neighbours(&MOORE_2D)
    }

    pub fn corners(&self) -> Neighbours<'a, C, 2> {
        self.neighbours(&DIAGONAL_2D)
    }
}

impl<'a, C> Site<'a, C, 3> {
    #[inline]
    pub fn x(&self) -> i32 {
        self.pos.x()
    }

    #[inline]
    pub fn y(&self) -> i32 {
        self.pos.y()
    }

    #[inline]
    pub fn z(&self) -> i32 {
        self.pos.z()
    }

    #[inline]
    pub fn at(&self, dx: i32, dy: i32, dz: i32) -> &'a C {
        self.neighbour(Coord::new([dx, dy, dz]))
    }

    pub fn von_neumann(&self) -> Neighbours<'a, C, 3> {
        self.neighbours(&VON_NEUMANN_3D)
    }

    pub fn moore(&self) -> Neighbours<'a, C, 3> {
        self.neighbours(&MOORE_3D)
    }

    pub fn edges(&self) -> Neighbours<'a, C, 3> {
        self.neighbours(&EDGE_3D)
    }

    pub fn corners(&self) -> Neighbours<'a, C, 3> {
        self.neighbours(&CORNER_3D)
    }
}
