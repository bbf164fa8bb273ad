//! Random convex polygons with rational vertices in the unit square.
//!
//! Purpose
//! - Deterministic inputs for property tests and benchmarks of the checks.
//!
//! Model
//! - Draw `k` grid points `(i/den, j/den)` with `0 <= i, j <= den`, take the
//!   exact convex hull, and retry a few times if it degenerates. The result
//!   is strictly convex and CCW, so its open source polyline passes every
//!   check under both crossing rules.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.
//!
//! Code cross-refs: `geom::convex_hull`, `validate::Solution`

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::geom::{convex_hull, Polygon, Vertex};
use crate::rational::Rational;
use crate::validate::Solution;

const MAX_ATTEMPTS: usize = 16;

/// Sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct SamplerCfg {
    /// Grid points drawn per attempt (before taking the hull). Clamped to >= 3.
    pub points: usize,
    /// Grid denominator. Clamped to >= 1.
    pub den: i64,
}

impl Default for SamplerCfg {
    fn default() -> Self {
        Self { points: 24, den: 64 }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw a strictly convex CCW polygon inside the unit square.
///
/// `None` only if every attempt collapsed to a segment (e.g. `den == 1` with
/// unlucky draws).
pub fn draw_convex_polygon(cfg: SamplerCfg, tok: ReplayToken) -> Option<Polygon> {
    let mut rng = tok.to_std_rng();
    let k = cfg.points.max(3);
    let den = cfg.den.max(1);
    for _ in 0..MAX_ATTEMPTS {
        let pts: Vec<Vertex> = (0..k)
            .map(|_| {
                let i = rng.gen_range(0..=den);
                let j = rng.gen_range(0..=den);
                Vertex::new(grid(i, den), grid(j, den))
            })
            .collect();
        if let Some(hull) = convex_hull(&pts) {
            return Some(hull);
        }
    }
    None
}

/// Solution whose source is a random convex polygon, with one facet covering
/// it and the source repeated as destination.
pub fn draw_solution(cfg: SamplerCfg, tok: ReplayToken) -> Option<Solution> {
    let poly = draw_convex_polygon(cfg, tok)?;
    let source = poly.vertices.clone();
    Some(Solution::new(source.clone(), vec![poly], source))
}

// Zero is pinned to 0/1 so that grid points compare structurally.
fn grid(i: i64, den: i64) -> Rational {
    if i == 0 {
        Rational::zero()
    } else {
        Rational::new(i, den)
    }
}
