#![allow(dead_code)]

use std::sync::OnceLock;

use pocket_solver::pocket::moves;
use pocket_solver::{BuildReport, CubeKey, StateTable, TableBuilder, Turn, SOLVED_KEY};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub const SOLVED_FACELETS: &str = "oooo gggg wwww bbbb yyyy rrrr";

/// Known number of states at each distance from solved, quarter-turn metric.
pub const DEPTH_HISTOGRAM: [usize; 15] = [
    1, 6, 27, 120, 534, 2_256, 8_969, 33_058, 114_149, 360_508, 930_588, 1_350_852, 782_536,
    90_280, 276,
];

/// The full table, built once per test binary.
pub fn built() -> &'static (StateTable, BuildReport) {
    static BUILT: OnceLock<(StateTable, BuildReport)> = OnceLock::new();
    BUILT.get_or_init(|| TableBuilder::default().build().expect("table builds"))
}

pub fn table() -> &'static StateTable {
    &built().0
}

pub fn rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

pub fn random_turns(rng: &mut StdRng, len: usize) -> Vec<Turn> {
    (0..len).map(|_| Turn::ALL[rng.gen_range(0..6)]).collect()
}

/// A reachable key obtained by scrambling the solved cube.
pub fn scrambled(rng: &mut StdRng, len: usize) -> CubeKey {
    moves::apply_all(SOLVED_KEY, random_turns(rng, len))
}

/// Any key of the domain, reachable or not.
pub fn any_key(rng: &mut StdRng) -> CubeKey {
    CubeKey::new(rng.gen_range(0..pocket_solver::pocket::KEY_SPACE as u64)).expect("in range")
}
