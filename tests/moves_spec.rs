mod common;

use common::{any_key, random_turns, rng, scrambled};
use pocket_solver::pocket::codec::{self, SlotColors};
use pocket_solver::pocket::moves;
use pocket_solver::{CubeKey, Facelets, PocketError, Turn, SOLVED_KEY};

/// Sticker-level model of a quarter turn: slots visited by the turned face in
/// clockwise order, and the two color axes the turn exchanges.
fn geometry(turn: Turn) -> ([usize; 4], (usize, usize), bool) {
    match turn {
        Turn::FrontCw => ([0, 2, 3, 1], (0, 2), true),
        Turn::FrontCcw => ([0, 2, 3, 1], (0, 2), false),
        Turn::LeftCw => ([4, 0, 1, 5], (0, 1), true),
        Turn::LeftCcw => ([4, 0, 1, 5], (0, 1), false),
        Turn::TopCw => ([4, 6, 2, 0], (1, 2), true),
        Turn::TopCcw => ([4, 6, 2, 0], (1, 2), false),
    }
}

fn turn_stickers(slots: [SlotColors; 7], turn: Turn) -> [SlotColors; 7] {
    let (cycle, (a, b), clockwise) = geometry(turn);
    let mut turned = slots;
    for i in 0..4 {
        let (from, to) = if clockwise {
            (cycle[i], cycle[(i + 1) % 4])
        } else {
            (cycle[(i + 1) % 4], cycle[i])
        };
        let mut colors = slots[from];
        colors.swap(a, b);
        turned[to] = colors;
    }
    turned
}

fn facelets_of(key: CubeKey) -> String {
    Facelets::from_key(key).expect("reachable key").to_string()
}

#[test]
fn single_turns_from_solved() {
    let front = Turn::FrontCw.apply(SOLVED_KEY);
    assert_eq!(front.raw(), 1_607_621_429);
    assert_eq!(facelets_of(front), "oogg grgr wwww obob yyyy bbrr");

    let front_back = Turn::FrontCcw.apply(SOLVED_KEY);
    assert_eq!(front_back.raw(), 1_607_654_689);
    assert_eq!(facelets_of(front_back), "oobb gogo wwww rbrb yyyy ggrr");
}

#[test]
fn sequences_apply_left_to_right() {
    let turns = Turn::parse_sequence("FC LC TC").unwrap();
    assert_eq!(turns, vec![Turn::FrontCw, Turn::LeftCw, Turn::TopCw]);

    let key = moves::apply_all(SOLVED_KEY, turns.iter().copied());
    assert_eq!(key.raw(), 684_929_512);
    assert_eq!(facelets_of(key), "yygo owrr obgw yrob ggyb wbwr");

    let by_hand = Turn::TopCw.apply(Turn::LeftCw.apply(Turn::FrontCw.apply(SOLVED_KEY)));
    assert_eq!(key, by_hand);
}

#[test]
fn turns_match_the_sticker_model() {
    let mut rng = rng(5);
    for _ in 0..2_000 {
        let key = scrambled(&mut rng, 20);
        let before = codec::slot_colors(key).expect("reachable key");
        for turn in Turn::ALL {
            let after = codec::slot_colors(turn.apply(key)).expect("reachable key");
            assert_eq!(after, turn_stickers(before, turn), "{} from {}", turn, key);
        }
    }
}

#[test]
fn inverse_undoes_every_turn_on_any_key() {
    let mut rng = rng(17);
    for _ in 0..50_000 {
        let key = any_key(&mut rng);
        for turn in Turn::ALL {
            assert_eq!(turn.inverse().apply(turn.apply(key)), key);
        }
    }
}

#[test]
fn four_quarter_turns_are_the_identity() {
    let mut rng = rng(23);
    for _ in 0..10_000 {
        let key = any_key(&mut rng);
        for turn in Turn::ALL {
            assert_eq!(moves::apply_all(key, [turn; 4]), key);
            assert_eq!(
                moves::apply_all(key, [turn; 2]),
                moves::apply_all(key, [turn.inverse(); 2])
            );
        }
    }
}

#[test]
fn reversed_inverse_sequence_returns_to_start() {
    let mut rng = rng(29);
    for len in [1, 5, 14, 40] {
        let turns = random_turns(&mut rng, len);
        let key = moves::apply_all(SOLVED_KEY, turns.iter().copied());
        let back = moves::apply_all(key, turns.iter().rev().map(|t| t.inverse()));
        assert_eq!(back, SOLVED_KEY);
    }
}

#[test]
fn turns_stay_in_the_key_domain() {
    let last = CubeKey::new(pocket_solver::pocket::KEY_SPACE as u64 - 1).unwrap();
    let first = CubeKey::new(0).unwrap();
    for key in [first, last] {
        for (turn, next) in moves::neighbors(key) {
            assert!(CubeKey::try_from(next.raw()).is_ok(), "{} from {}", turn, key);
        }
    }
}

#[test]
fn neighbors_follow_generator_order() {
    let neighbors = moves::neighbors(SOLVED_KEY);
    for (i, (turn, next)) in neighbors.iter().enumerate() {
        assert_eq!(*turn, Turn::ALL[i]);
        assert_eq!(*next, turn.apply(SOLVED_KEY));
        assert_ne!(*next, SOLVED_KEY);
    }
}

#[test]
fn transition_rows_are_sound() {
    assert!(moves::transitions_are_permutations());
    assert!(moves::inverses_are_consistent());
    for turn in Turn::ALL {
        // A face turn carries four slots, three states each.
        let row = turn.transitions();
        let moved = (0..21u8).filter(|&s| row[s as usize] != s).count();
        assert_eq!(moved, 12, "{}", turn);
    }
}

#[test]
fn codes_and_labels_round_trip() {
    let codes: Vec<u8> = Turn::ALL.iter().map(|t| t.code()).collect();
    assert_eq!(codes, vec![2, 1, 4, 3, 6, 5]);
    for turn in Turn::ALL {
        assert_eq!(Turn::try_from(turn.code()).unwrap(), turn);
        assert_eq!(turn.label().parse::<Turn>().unwrap(), turn);
        assert_eq!(turn.to_string(), turn.label());
        assert_eq!(turn.inverse().inverse(), turn);
    }
    assert_eq!("fcc".parse::<Turn>().unwrap(), Turn::FrontCcw);
}

#[test]
fn unknown_codes_and_labels_are_rejected() {
    for code in [0u8, 7, 255] {
        assert!(matches!(Turn::try_from(code), Err(PocketError::UnknownTurnCode(c)) if c == code));
    }
    assert!(matches!(
        Turn::parse_sequence("FC XX"),
        Err(PocketError::UnknownTurn(ref s)) if s == "XX"
    ));
    assert!(Turn::parse_sequence("").unwrap().is_empty());
}
