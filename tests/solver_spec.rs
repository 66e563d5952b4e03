mod common;

use std::sync::Arc;
use std::thread;

use common::{built, random_turns, rng, scrambled, table, DEPTH_HISTOGRAM};
use pocket_solver::pocket::moves;
use pocket_solver::pocket::{MAX_SOLUTION_LENGTH, TABLE_ENTRIES};
use pocket_solver::{
    build_table, solve, solve_with, verify_table, BuildOptions, CubeKey, Facelets, PocketError,
    SolveOptions, Solver, StateTable, TableBuilder, Turn, SOLVED_KEY,
};

#[test]
fn build_discovers_every_reachable_state() {
    let (table, report) = built();
    assert_eq!(table.len(), 3_674_159);
    assert_eq!(report.entries, TABLE_ENTRIES);
    assert!(table.is_complete());
    assert_eq!(report.max_depth, 14);
    assert_eq!(report.depth_histogram, DEPTH_HISTOGRAM.to_vec());
    assert_eq!(report.depth_histogram.iter().sum::<usize>(), TABLE_ENTRIES + 1);
}

#[test]
fn table_is_sorted_and_excludes_solved() {
    let table = table();
    assert!(table.entries().windows(2).all(|pair| pair[0].key < pair[1].key));
    assert!(!table.contains(SOLVED_KEY));
    assert_eq!(table.lookup(SOLVED_KEY), None);
}

#[test]
fn recovery_moves_lead_one_step_closer() {
    let table = table();
    let mut rng = rng(53);
    for _ in 0..2_000 {
        let key = scrambled(&mut rng, 30);
        if key.is_solved() {
            continue;
        }
        let length = solve(key, table).unwrap().len();
        let recovery = table.lookup(key).unwrap();
        let closer = solve(recovery.apply(key), table).unwrap().len();
        assert_eq!(closer + 1, length);
        // No neighbor is more than one step closer.
        for (_, next) in moves::neighbors(key) {
            assert!(solve(next, table).unwrap().len() + 1 >= length);
        }
    }
}

#[test]
fn solved_cube_needs_no_moves() {
    assert!(solve(SOLVED_KEY, table()).unwrap().is_empty());
    assert!(solve(SOLVED_KEY, &StateTable::new()).unwrap().is_empty());
}

#[test]
fn one_turn_is_undone_by_its_inverse() {
    let table = table();
    for turn in Turn::ALL {
        let turns = solve(turn.apply(SOLVED_KEY), table).unwrap();
        assert_eq!(turns, vec![turn.inverse()]);
    }
    let turns = solve(Turn::FrontCw.apply(SOLVED_KEY), table).unwrap();
    assert_eq!(turns[0].code(), 1);
    assert_eq!(turns[0].label(), "FCC");
}

#[test]
fn scrambles_solve_back_to_solved() {
    let table = table();
    let mut rng = rng(59);
    for len in 0..=30 {
        for _ in 0..100 {
            let scramble = random_turns(&mut rng, len);
            let key = moves::apply_all(SOLVED_KEY, scramble.iter().copied());
            let turns = solve(key, table).unwrap();
            assert!(turns.len() <= len.min(MAX_SOLUTION_LENGTH));
            assert_eq!(moves::apply_all(key, turns), SOLVED_KEY);
        }
    }
}

#[test]
fn facelets_solve_through_the_solver() {
    let solver = Solver::new(Arc::new(table().clone()));
    let cube: Facelets = "oogg grgr wwww obob yyyy bbrr".parse().unwrap();
    assert_eq!(solver.solve_facelets(&cube).unwrap(), vec![Turn::FrontCcw]);

    let cube: Facelets = "yygo owrr obgw yrob ggyb wbwr".parse().unwrap();
    let turns = solver.solve_facelets(&cube).unwrap();
    assert_eq!(turns.len(), 3);
    assert_eq!(moves::apply_all(cube.to_key().unwrap(), turns), SOLVED_KEY);
}

#[test]
fn twisted_corner_is_unreachable() {
    let cube: Facelets = "oogo gwgg owww bbbb yyyy rrrr".parse().unwrap();
    let key = cube.to_key().unwrap();
    assert!(matches!(
        solve(key, table()),
        Err(PocketError::Unreachable(k)) if k == key
    ));
}

#[test]
fn missing_entry_mid_path_names_the_missing_state() {
    let one = Turn::FrontCw.apply(SOLVED_KEY);
    let two = Turn::FrontCw.apply(one);
    let mut partial = StateTable::new();
    partial.insert_if_absent(two, Turn::FrontCcw);
    assert!(matches!(
        solve(two, &partial),
        Err(PocketError::Unreachable(k)) if k == one
    ));
}

#[test]
fn cycling_table_hits_the_move_bound() {
    let a = Turn::LeftCw.apply(SOLVED_KEY);
    let b = Turn::FrontCw.apply(a);
    let mut corrupt = StateTable::new();
    corrupt.insert_if_absent(a, Turn::FrontCw);
    corrupt.insert_if_absent(b, Turn::FrontCcw);

    assert!(matches!(
        solve(a, &corrupt),
        Err(PocketError::SolveBoundExceeded { key, bound: 14 }) if key == a
    ));
    let options = SolveOptions { max_moves: 20 };
    assert!(matches!(
        solve_with(a, &corrupt, options),
        Err(PocketError::SolveBoundExceeded { bound: 20, .. })
    ));
}

#[test]
fn move_bound_never_drops_below_fourteen() {
    let table = table();
    let deepest = table
        .iter()
        .map(|entry| entry.key)
        .find(|&key| solve(key, table).map(|t| t.len()).unwrap_or(0) == 14)
        .expect("some state is 14 moves out");
    let options = SolveOptions { max_moves: 1 };
    assert_eq!(solve_with(deepest, table, options).unwrap().len(), 14);
}

#[test]
fn every_entry_solves_within_fourteen_moves() {
    assert_eq!(verify_table(table()).unwrap(), MAX_SOLUTION_LENGTH);
}

#[test]
fn verification_rejects_incomplete_tables() {
    let mut partial = StateTable::new();
    partial.insert_if_absent(Turn::FrontCw.apply(SOLVED_KEY), Turn::FrontCcw);
    assert!(matches!(
        verify_table(&partial),
        Err(PocketError::CountMismatch { found: 1, .. })
    ));
}

#[test]
fn rebuild_is_deterministic() {
    assert_eq!(&build_table().unwrap(), table());
}

#[test]
fn undersized_queue_fails_the_build() {
    let options = BuildOptions {
        queue_capacity: 10,
        ..BuildOptions::default()
    };
    assert!(matches!(
        TableBuilder::new(options).build(),
        Err(PocketError::BuildIntegrityFailure(_))
    ));
}

#[test]
fn full_table_survives_disk() {
    let path =
        std::env::temp_dir().join(format!("pocket-solver-{}-full.bin", std::process::id()));
    table().save(&path).unwrap();
    assert_eq!(std::fs::metadata(&path).unwrap().len(), 3_674_159 * 5);

    let loaded = StateTable::load_complete(&path).unwrap();
    assert_eq!(&loaded, table());
    std::fs::remove_file(&path).unwrap();
}

#[test]
fn shared_solver_answers_from_many_threads() {
    let solver = Solver::new(Arc::new(table().clone()));
    let handles: Vec<_> = (0..4u64)
        .map(|seed| {
            let solver = solver.clone();
            thread::spawn(move || {
                let mut rng = rng(100 + seed);
                for _ in 0..500 {
                    let key = scrambled(&mut rng, 25);
                    let turns = solver.solve(key).unwrap();
                    assert_eq!(moves::apply_all(key, turns), SOLVED_KEY);
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }
}

#[test]
fn keys_outside_any_table_report_unreachable() {
    let key = CubeKey::new(0).unwrap();
    assert!(matches!(solve(key, table()), Err(PocketError::Unreachable(_))));
}
