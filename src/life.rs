//! Life-like automata (birth/survival on the Moore neighbourhood) built on
//! the generic lattice.

use std::convert::Infallible;

use crate::buffer::Buffer;
use crate::cell::{Cell, Site};
use crate::config::Params;
use crate::coord::{Coord, Extent};
use crate::error::Result;
use crate::lattice::Lattice;
use crate::rng::{hash_coord, seed_u32, threshold};

const SALT_SOUP: u64 = 0x5EED_50FF_1A77_0001;

/// Birth and survival tables indexed by live neighbour count.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rule {
    birth: [bool; 9],
    survive: [bool; 9],
}

impl Rule {
    /// Counts above 8 can never occur and are ignored.
    pub fn new(birth: &[u8], survive: &[u8]) -> Self {
        let mut rule = Self {
            birth: [false; 9],
            survive: [false; 9],
        };
        for &n in birth.iter().filter(|&&n| n <= 8) {
            rule.birth[n as usize] = true;
        }
        for &n in survive.iter().filter(|&&n| n <= 8) {
            rule.survive[n as usize] = true;
        }
        rule
    }

    /// B3/S23.
    pub fn conway() -> Self {
        Self::new(&[3], &[2, 3])
    }

    /// Next state of a cell. Counts above 8 match no table entry and give a
    /// dead cell.
    #[inline]
    pub fn next(&self, alive: bool, neighbours: usize) -> bool {
        let table = if alive { &self.survive } else { &self.birth };
        table.get(neighbours).copied().unwrap_or(false)
    }
}

impl Default for Rule {
    fn default() -> Self {
        Self::conway()
    }
}

#[derive(Clone, Copy, Debug)]
pub struct LifeCell {
    pub alive: bool,
    /// Generations the cell has been continuously alive.
    pub age: u32,
    rule: Rule,
}

impl LifeCell {
    pub fn new(alive: bool, rule: Rule) -> Self {
        Self {
            alive,
            age: 0,
            rule,
        }
    }
}

impl Cell<2> for LifeCell {
    fn init(&mut self, _pos: Coord<2>) {
        self.age = u32::from(self.alive);
    }

    fn step(&mut self, past: Site<'_, Self, 2>) {
        let live = past.moore().filter(|c| c.alive).count();
        self.rule = past.rule;
        self.alive = self.rule.next(past.alive, live);
        self.age = match (past.alive, self.alive) {
            (_, false) => 0,
            (false, true) => 1,
            (true, true) => past.age.saturating_add(1),
        };
    }
}

/// Random soup seeded from `params`. Seeding hashes the coordinate, so both
/// buffers start identical.
pub fn soup(params: &Params) -> Result<Lattice<LifeCell, 2>> {
    let rule = Rule::new(&params.birth, &params.survive);
    let noise_seed = seed_u32(params.seed, SALT_SOUP);
    let cutoff = threshold(params.density);
    Lattice::new_2d(params.width, params.height, |_, pos| {
        let alive = hash_coord(pos, noise_seed) < cutoff;
        Ok::<_, Infallible>(LifeCell::new(alive, rule))
    })
}

/// Lattice with exactly the cells in `live` alive. Positions wrap.
pub fn from_pattern(
    width: i32,
    height: i32,
    rule: Rule,
    live: &[Coord<2>],
) -> Result<Lattice<LifeCell, 2>> {
    let extent = Extent::new([width, height])?;
    let live: Vec<Coord<2>> = live.iter().map(|&p| extent.wrap(p)).collect();
    Lattice::new(extent, |_, pos| {
        Ok::<_, Infallible>(LifeCell::new(live.contains(&pos), rule))
    })
}

pub fn population(buffer: &Buffer<LifeCell, 2>) -> usize {
    buffer.iter().filter(|c| c.alive).count()
}

/// Wrapped coordinates of every live cell, in flat order.
pub fn live_cells(buffer: &Buffer<LifeCell, 2>) -> Vec<Coord<2>> {
    buffer
        .sites()
        .filter(|s| s.alive)
        .map(|s| s.pos())
        .collect()
}
