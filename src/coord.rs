use std::fmt;
use std::ops::{Add, Neg, Sub};

use crate::error::{LatticeError, Result};

/// A position or relative offset on a D-dimensional lattice.
/// Components may be negative or past the extent until wrapped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Coord<const D: usize>(pub [i32; D]);

pub type Coord2 = Coord<2>;
pub type Coord3 = Coord<3>;

impl<const D: usize> Coord<D> {
    #[inline]
    pub const fn new(components: [i32; D]) -> Self {
        Self(components)
    }

    #[inline]
    pub const fn origin() -> Self {
        Self([0; D])
    }

    #[inline]
    pub fn components(&self) -> [i32; D] {
        self.0
    }

    /// Component by axis number, independent of what the axes are called.
    pub fn get(&self, index: usize) -> Result<i32> {
        self.0
            .get(index)
            .copied()
            .ok_or(LatticeError::InvalidCoordinateIndex { index, dims: D })
    }

    /// Component-wise sum, left unwrapped.
    #[inline]
    pub fn add(self, other: Self) -> Self {
        self + other
    }
}

impl Coord<2> {
    #[inline]
    pub fn x(&self) -> i32 {
        self.0[0]
    }

    #[inline]
    pub fn y(&self) -> i32 {
        self.0[1]
    }
}

impl Coord<3> {
    #[inline]
    pub fn x(&self) -> i32 {
        self.0[0]
    }

    #[inline]
    pub fn y(&self) -> i32 {
        self.0[1]
    }

    #[inline]
    pub fn z(&self) -> i32 {
        self.0[2]
    }
}

impl<const D: usize> From<[i32; D]> for Coord<D> {
    fn from(components: [i32; D]) -> Self {
        Self(components)
    }
}

impl<const D: usize> Add for Coord<D> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(std::array::from_fn(|k| self.0[k] + rhs.0[k]))
    }
}

impl<const D: usize> Sub for Coord<D> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self(std::array::from_fn(|k| self.0[k] - rhs.0[k]))
    }
}

impl<const D: usize> Neg for Coord<D> {
    type Output = Self;

    fn neg(self) -> Self {
        Self(self.0.map(|v| -v))
    }
}

impl<const D: usize> fmt::Display for Coord<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (k, v) in self.0.iter().enumerate() {
            if k > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{v}")?;
        }
        write!(f, ")")
    }
}

/// Size of a lattice along each axis. Every component is at least 1 and the
/// product fits in `usize`, so an `Extent` that exists is always valid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Extent<const D: usize> {
    dims: [i32; D],
    cover: usize,
}

impl<const D: usize> Extent<D> {
    pub fn new(dims: [i32; D]) -> Result<Self> {
        let mut cover: usize = 1;
        for (axis, &value) in dims.iter().enumerate() {
            if value < 1 {
                return Err(LatticeError::InvalidSize { axis, value });
            }
            cover = cover
                .checked_mul(value as usize)
                .ok_or_else(|| LatticeError::SizeOverflow {
                    extent: format_dims(&dims),
                })?;
        }
        Ok(Self { dims, cover })
    }

    #[inline]
    pub fn dims(&self) -> [i32; D] {
        self.dims
    }

    pub fn get(&self, index: usize) -> Result<i32> {
        self.dims
            .get(index)
            .copied()
            .ok_or(LatticeError::InvalidCoordinateIndex { index, dims: D })
    }

    /// Number of cells needed to cover the extent.
    #[inline]
    pub fn cover_size(&self) -> usize {
        self.cover
    }

    #[inline]
    pub fn contains(&self, pos: Coord<D>) -> bool {
        pos.0.iter().zip(&self.dims).all(|(&v, &m)| 0 <= v && v < m)
    }

    /// Row-major flat index, component 0 varying fastest.
    /// `pos` must already be in range; see [`Extent::wrap`].
    #[inline]
    pub fn flatten(&self, pos: Coord<D>) -> usize {
        debug_assert!(self.contains(pos), "{pos} outside {self}");
        let mut index = 0;
        let mut stride = 1;
        for k in 0..D {
            index += pos.0[k] as usize * stride;
            stride *= self.dims[k] as usize;
        }
        index
    }

    /// Inverse of [`Extent::flatten`].
    #[inline]
    pub fn unflatten(&self, index: usize) -> Coord<D> {
        debug_assert!(index < self.cover, "index {index} outside {self}");
        let mut rest = index;
        Coord(std::array::from_fn(|k| {
            let m = self.dims[k] as usize;
            let v = rest % m;
            rest /= m;
            v as i32
        }))
    }

    /// Toroidal wrap of every component into `[0, extent)`.
    #[inline]
    pub fn wrap(&self, pos: Coord<D>) -> Coord<D> {
        Coord(std::array::from_fn(|k| wrap_val(pos.0[k], self.dims[k])))
    }

    /// `wrap(pos + offset)` without overflow for any pair of `i32` components.
    #[inline]
    pub fn wrap_offset(&self, pos: Coord<D>, offset: Coord<D>) -> Coord<D> {
        Coord(std::array::from_fn(|k| {
            (pos.0[k] as i64 + offset.0[k] as i64).rem_euclid(self.dims[k] as i64) as i32
        }))
    }
}

impl Extent<2> {
    #[inline]
    pub fn width(&self) -> i32 {
        self.dims[0]
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.dims[1]
    }
}

impl Extent<3> {
    #[inline]
    pub fn width(&self) -> i32 {
        self.dims[0]
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.dims[1]
    }

    #[inline]
    pub fn depth(&self) -> i32 {
        self.dims[2]
    }
}

impl<const D: usize> fmt::Display for Extent<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_dims(&self.dims))
    }
}

fn format_dims(dims: &[i32]) -> String {
    dims.iter()
        .map(|d| d.to_string())
        .collect::<Vec<_>>()
        .join("x")
}

/// Wrap `v` into `[0, m)`, making the axis a ring. `m` must be at least 1.
#[inline]
pub fn wrap_val(v: i32, m: i32) -> i32 {
    debug_assert!(m >= 1);
    v.rem_euclid(m)
}
