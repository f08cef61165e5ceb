//! Double-buffered cellular automata on N-dimensional toroidal lattices.

pub mod buffer;
pub mod cell;
pub mod config;
pub mod coord;
pub mod error;
pub mod lattice;
pub mod life;
pub mod neighbourhood;
pub mod rng;

pub use buffer::{Buffer, Slot};
pub use cell::{Cell, Site};
pub use coord::{Coord, Coord2, Coord3, Extent, wrap_val};
pub use error::{LatticeError, Result};
pub use lattice::{Lattice, Lattice2D, Lattice3D};
pub use neighbourhood::Neighbours;
