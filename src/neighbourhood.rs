//! Neighbour offset tables and the lazy sequence that resolves them.
//!
//! Tables list offsets left to right, top to bottom (and, in 3D, from the
//! `z = -1` layer to the `z = 1` layer), so entries can be paired with the
//! weights of a convolution kernel.

use std::iter::FusedIterator;

use tracing::warn;

use crate::buffer::Buffer;
use crate::coord::Coord;
use crate::error::{LatticeError, Result};

const fn c2(x: i32, y: i32) -> Coord<2> {
    Coord::new([x, y])
}

const fn c3(x: i32, y: i32, z: i32) -> Coord<3> {
    Coord::new([x, y, z])
}

/// Cells sharing an edge: N, W, E, S.
#[rustfmt::skip]
pub const VON_NEUMANN_2D: [Coord<2>; 4] = [
                c2(0, -1),
    c2(-1, 0),             c2(1, 0),
                c2(0, 1),
];

/// All eight touching cells.
#[rustfmt::skip]
pub const MOORE_2D: [Coord<2>; 8] = [
    c2(-1, -1), c2(0, -1), c2(1, -1),
    c2(-1, 0),             c2(1, 0),
    c2(-1, 1),  c2(0, 1),  c2(1, 1),
];

/// Cells touching only at a corner.
#[rustfmt::skip]
pub const DIAGONAL_2D: [Coord<2>; 4] = [
    c2(-1, -1), c2(1, -1),
    c2(-1, 1),  c2(1, 1),
];

/// Cells sharing a face.
#[rustfmt::skip]
pub const VON_NEUMANN_3D: [Coord<3>; 6] = [
    c3(0, 0, -1),

    c3(0, -1, 0),
    c3(-1, 0, 0), c3(1, 0, 0),
    c3(0, 1, 0),

    c3(0, 0, 1),
];

/// All 26 touching cells.
#[rustfmt::skip]
pub const MOORE_3D: [Coord<3>; 26] = [
    c3(-1, -1, -1), c3(0, -1, -1), c3(1, -1, -1),
    c3(-1, 0, -1),  c3(0, 0, -1),  c3(1, 0, -1),
    c3(-1, 1, -1),  c3(0, 1, -1),  c3(1, 1, -1),

    c3(-1, -1, 0),  c3(0, -1, 0),  c3(1, -1, 0),
    c3(-1, 0, 0),                  c3(1, 0, 0),
    c3(-1, 1, 0),   c3(0, 1, 0),   c3(1, 1, 0),

    c3(-1, -1, 1),  c3(0, -1, 1),  c3(1, -1, 1),
    c3(-1, 0, 1),   c3(0, 0, 1),   c3(1, 0, 1),
    c3(-1, 1, 1),   c3(0, 1, 1),   c3(1, 1, 1),
];

/// Cells sharing an edge but not a face.
#[rustfmt::skip]
pub const EDGE_3D: [Coord<3>; 12] = [
                   c3(0, -1, -1),
    c3(-1, 0, -1),                 c3(1, 0, -1),
                   c3(0, 1, -1),

    c3(-1, -1, 0),                 c3(1, -1, 0),
    c3(-1, 1, 0),                  c3(1, 1, 0),

                   c3(0, -1, 1),
    c3(-1, 0, 1),                  c3(1, 0, 1),
                   c3(0, 1, 1),
];

/// Cells sharing only a vertex.
#[rustfmt::skip]
pub const CORNER_3D: [Coord<3>; 8] = [
    c3(-1, -1, -1), c3(1, -1, -1),
    c3(-1, 1, -1),  c3(1, 1, -1),

    c3(-1, -1, 1),  c3(1, -1, 1),
    c3(-1, 1, 1),   c3(1, 1, 1),
];

/// Single-pass walk over the cells at `pos + offset` for each offset.
///
/// Nothing is resolved ahead of time: each call to `next` wraps and looks up
/// one cell in the buffer. The walk cannot be restarted; ask the buffer or
/// the site for a new one instead.
pub struct Neighbours<'a, C, const D: usize> {
    buffer: &'a Buffer<C, D>,
    pos: Coord<D>,
    offsets: &'a [Coord<D>],
    next: usize,
}

impl<'a, C, const D: usize> Neighbours<'a, C, D> {
    pub(crate) fn new(buffer: &'a Buffer<C, D>, pos: Coord<D>, offsets: &'a [Coord<D>]) -> Self {
        Self {
            buffer,
            pos,
            offsets,
            next: 0,
        }
    }

    /// Cells are never removed from a lattice: that would break the
    /// coordinate to flat index correspondence. Always an error.
    pub fn remove(&mut self) -> Result<()> {
        warn!(pos = %self.pos, "attempted to remove a cell through a neighbourhood");
        Err(LatticeError::UnsupportedIteratorMutation)
    }

    /// Positions still to be visited, wrapped.
    pub fn positions(&self) -> impl Iterator<Item = Coord<D>> + '_ {
        let extent = *self.buffer.extent();
        self.offsets[self.next..]
            .iter()
            .map(move |&off| extent.wrap_offset(self.pos, off))
    }
}

impl<'a, C, const D: usize> Iterator for Neighbours<'a, C, D> {
    type Item = &'a C;

    #[inline]
    fn next(&mut self) -> Option<&'a C> {
        let off = *self.offsets.get(self.next)?;
        self.next += 1;
        Some(self.buffer.resolve_offset(self.pos, off))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.offsets.len() - self.next;
        (n, Some(n))
    }
}

impl<C, const D: usize> ExactSizeIterator for Neighbours<'_, C, D> {}

impl<C, const D: usize> FusedIterator for Neighbours<'_, C, D> {}
