//! Coordinate hashing for reproducible initial states. A cell's starting
//! value depends only on its coordinate and the run seed, never on build
//! order, so both buffers and every rerun agree.

use crate::coord::Coord;

#[inline]
pub fn splitmix64(mut x: u64) -> u64 {
    x = x.wrapping_add(0x9E3779B97F4A7C15);
    let mut z = x;
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58476D1CE4E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D049BB133111EB);
    z ^ (z >> 31)
}

#[inline]
pub fn splitmix32(mut x: u32) -> u32 {
    x = x.wrapping_add(0x9E3779B9);
    let mut z = x;
    z = (z ^ (z >> 16)).wrapping_mul(0x7FEB352D);
    z = (z ^ (z >> 15)).wrapping_mul(0x846CA68B);
    z ^ (z >> 16)
}

#[inline]
pub fn seed_u32(seed: u64, salt: u64) -> u32 {
    splitmix64(seed ^ salt) as u32
}

/// Per-axis multipliers; axes past the table reuse it with a rotation.
const AXIS_MIX: [u32; 4] = [0x85EBCA6B, 0xC2B2AE35, 0x27D4EB2F, 0x165667B1];

/// Hash a lattice coordinate of any dimension. Every component is folded in
/// with its own multiplier, so component order matters.
#[inline]
pub fn hash_coord<const D: usize>(pos: Coord<D>, seed: u32) -> u32 {
    pos.components()
        .into_iter()
        .enumerate()
        .fold(seed ^ 0x9E3779B9, |h, (axis, c)| {
            let mix = AXIS_MIX[axis % AXIS_MIX.len()].rotate_left((axis / AXIS_MIX.len()) as u32);
            splitmix32(h ^ (c as u32).wrapping_mul(mix))
        })
}

/// Map `density` in `[0, 1]` to a `u32` cutoff for [`hash_coord`] output.
#[inline]
pub fn threshold(density: f32) -> u32 {
    (density.clamp(0.0, 1.0) as f64 * u32::MAX as f64) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coordinate_hash_is_deterministic() {
        let p = Coord::new([3, -7]);
        assert_eq!(hash_coord(p, 11), hash_coord(p, 11));
        assert_ne!(hash_coord(p, 11), hash_coord(Coord::new([-7, 3]), 11));
        assert_ne!(hash_coord(p, 11), hash_coord(p, 12));
        assert_ne!(seed_u32(1, 0xA), seed_u32(2, 0xA));
    }

    #[test]
    fn coordinate_hash_sees_every_axis() {
        let base = hash_coord(Coord::new([1, 2, 3, 4, 5]), 7);
        for axis in 0..5 {
            let mut c = [1, 2, 3, 4, 5];
            c[axis] += 1;
            assert_ne!(hash_coord(Coord::new(c), 7), base, "axis {axis}");
        }
        assert_ne!(hash_coord(Coord::new([0, 0, 1]), 7), hash_coord(Coord::new([0, 0]), 7));
    }

    #[test]
    fn threshold_bounds() {
        assert_eq!(threshold(0.0), 0);
        assert_eq!(threshold(-1.0), 0);
        assert_eq!(threshold(1.0), u32::MAX);
        assert_eq!(threshold(2.0), u32::MAX);
    }
}
