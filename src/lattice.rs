use std::convert::Infallible;
use std::fmt;

use rayon::prelude::*;
use tracing::{debug, trace};

use crate::buffer::{Buffer, Slot};
use crate::cell::Cell;
use crate::coord::{Coord, Extent};
use crate::error::{LatticeError, Result};

/// Double-buffered lattice of cells on a D-dimensional torus.
///
/// Two buffers of identical extent hold the present and past generations.
/// [`Lattice::step`] rewrites every present cell from the past buffer, then
/// swaps the two roles. Buffers are moved, never copied, and every cell keeps
/// its coordinate and buffer for the life of the lattice.
pub struct Lattice<C, const D: usize> {
    present: Buffer<C, D>,
    past: Buffer<C, D>,
    generation: u64,
}

pub type Lattice2D<C> = Lattice<C, 2>;
pub type Lattice3D<C> = Lattice<C, 3>;

impl<C: Cell<D>, const D: usize> Lattice<C, D> {
    /// Build both buffers with `factory`, then run `init` on every cell.
    ///
    /// The factory is called once per coordinate and buffer, in ascending flat
    /// order, alternating `Slot::A` and `Slot::B` at each coordinate. Its first
    /// error aborts construction.
    pub fn new<F, E>(extent: Extent<D>, factory: F) -> Result<Self>
    where
        F: FnMut(Slot, Coord<D>) -> std::result::Result<C, E>,
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        Self::build(extent, factory).map_err(|(slot, pos, e)| LatticeError::CellConstruction {
            slot,
            pos: pos.to_string(),
            source: e.into(),
        })
    }

    /// Like [`Lattice::new`] for factories that cannot fail.
    pub fn from_fn<F>(extent: Extent<D>, mut f: F) -> Self
    where
        F: FnMut(Slot, Coord<D>) -> C,
    {
        match Self::build(extent, |slot, pos| Ok::<C, Infallible>(f(slot, pos))) {
            Ok(lattice) => lattice,
            Err((_, _, never)) => match never {},
        }
    }

    fn build<F, E>(
        extent: Extent<D>,
        mut factory: F,
    ) -> std::result::Result<Self, (Slot, Coord<D>, E)>
    where
        F: FnMut(Slot, Coord<D>) -> std::result::Result<C, E>,
    {
        let mut a = Buffer::new(Slot::A, extent);
        let mut b = Buffer::new(Slot::B, extent);

        for n in 0..extent.cover_size() {
            let pos = extent.unflatten(n);
            for buffer in [&mut a, &mut b] {
                let slot = buffer.slot();
                let cell = factory(slot, pos).map_err(|e| (slot, pos, e))?;
                buffer.append(cell);
            }
        }

        // only now can every cell see fully constructed neighbours
        init_all(&mut a);
        init_all(&mut b);

        debug!(%extent, cells = extent.cover_size(), "lattice built");
        Ok(Self {
            present: a,
            past: b,
            generation: 0,
        })
    }

    /// Advance one generation, then swap present and past.
    pub fn step(&mut self) {
        let past = &self.past;
        for (i, cell) in self.present.cells_mut().iter_mut().enumerate() {
            cell.step(past.site_at(i));
        }
        self.swap();
    }

    /// Call `draw` on every cell of the past buffer, the most recently
    /// completed generation.
    pub fn draw(&self) {
        for site in self.past.sites() {
            site.cell().draw(site);
        }
    }
}

impl<C, const D: usize> Lattice<C, D>
where
    C: Cell<D> + Send + Sync,
{
    /// [`Lattice::step`] with the per-cell pass spread over rayon's pool.
    /// Cells only read the past buffer, so the result is the same.
    pub fn par_step(&mut self) {
        let past = &self.past;
        self.present
            .cells_mut()
            .par_iter_mut()
            .enumerate()
            .for_each(|(i, cell)| cell.step(past.site_at(i)));
        self.swap();
    }
}

impl<C, const D: usize> Lattice<C, D> {
    fn swap(&mut self) {
        std::mem::swap(&mut self.present, &mut self.past);
        self.generation += 1;
        trace!(
            generation = self.generation,
            past = %self.past.slot(),
            "generation complete"
        );
    }

    #[inline]
    pub fn present(&self) -> &Buffer<C, D> {
        &self.present
    }

    #[inline]
    pub fn past(&self) -> &Buffer<C, D> {
        &self.past
    }

    pub fn all_present_cells(&self) -> std::slice::Iter<'_, C> {
        self.present.iter()
    }

    pub fn all_past_cells(&self) -> std::slice::Iter<'_, C> {
        self.past.iter()
    }

    #[inline]
    pub fn extent(&self) -> &Extent<D> {
        self.present.extent()
    }

    #[inline]
    pub fn cell_count(&self) -> usize {
        self.present.len()
    }

    /// Number of completed `step` calls.
    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

impl<C: Cell<2>> Lattice<C, 2> {
    pub fn new_2d<F, E>(width: i32, height: i32, factory: F) -> Result<Self>
    where
        F: FnMut(Slot, Coord<2>) -> std::result::Result<C, E>,
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        Self::new(Extent::new([width, height])?, factory)
    }
}

impl<C: Cell<3>> Lattice<C, 3> {
    pub fn new_3d<F, E>(width: i32, height: i32, depth: i32, factory: F) -> Result<Self>
    where
        F: FnMut(Slot, Coord<3>) -> std::result::Result<C, E>,
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        Self::new(Extent::new([width, height, depth])?, factory)
    }
}

fn init_all<C: Cell<D>, const D: usize>(buffer: &mut Buffer<C, D>) {
    let extent = *buffer.extent();
    for (i, cell) in buffer.cells_mut().iter_mut().enumerate() {
        cell.init(extent.unflatten(i));
    }
}

impl<C, const D: usize> fmt::Debug for Lattice<C, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Lattice")
            .field("extent", self.extent())
            .field("present", &self.present.slot())
            .field("generation", &self.generation)
            .finish()
    }
}
