//! End-to-end ladder tests against the embedded dictionary

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use std::collections::VecDeque;
use word_ladder::core::is_one_character_off;
use word_ladder::dictionary::Dictionary;
use word_ladder::search::{LadderError, LadderSolver};

fn solver() -> LadderSolver<'static> {
    LadderSolver::new(Dictionary::embedded())
}

/// Shortest step count by plain BFS over the whole word list
fn reference_distance(dictionary: &Dictionary, start: &str, end: &str) -> Option<usize> {
    let words: Vec<&str> = dictionary
        .of_length(start.len())
        .map(|w| w.key())
        .collect();
    let start_index = words.iter().position(|w| *w == start)?;

    let mut distance = vec![None; words.len()];
    distance[start_index] = Some(0);
    let mut queue = VecDeque::from([start_index]);

    while let Some(current) = queue.pop_front() {
        let d = distance[current]?;
        if words[current] == end {
            return Some(d);
        }
        for (i, candidate) in words.iter().enumerate() {
            if distance[i].is_none() && is_one_character_off(words[current], candidate) {
                distance[i] = Some(d + 1);
                queue.push_back(i);
            }
        }
    }
    None
}

fn assert_valid_ladder(ladder: &[String], start: &str, end: &str) {
    let solver = solver();
    assert!(ladder[0].eq_ignore_ascii_case(start.trim()));
    assert!(ladder[ladder.len() - 1].eq_ignore_ascii_case(end.trim()));
    for word in ladder {
        assert!(solver.is_valid(word), "{word} is not in the dictionary");
    }
    for pair in ladder.windows(2) {
        assert!(
            is_one_character_off(&pair[0], &pair[1]),
            "{} -> {} is not a single letter change",
            pair[0],
            pair[1]
        );
    }
}

#[test]
fn same_word_is_a_one_rung_ladder() {
    assert_eq!(solver().transform("pixel", "pixel"), vec!["pixel"]);
    assert_eq!(solver().transform("PIXEL", "pixel"), vec!["PIXEL"]);
}

#[test]
fn one_step_ladder() {
    assert_eq!(solver().transform("SMART", "START"), vec!["SMART", "START"]);
}

#[test]
fn two_step_ladder() {
    assert_eq!(
        solver().transform("SMART", "STARK"),
        vec!["SMART", "START", "STARK"]
    );
}

#[test]
fn three_step_ladder() {
    assert_eq!(
        solver().transform("SMART", "STACK"),
        vec!["SMART", "START", "STARK", "STACK"]
    );
}

#[test]
fn long_ladder_follows_dictionary_order() {
    let ladder = solver().transform("SMART", "BRAIN");
    assert_eq!(
        ladder,
        vec!["SMART", "SPART", "SPAIT", "SPAIN", "SLAIN", "BLAIN", "BRAIN"]
    );
    assert_valid_ladder(&ladder, "SMART", "BRAIN");
}

#[test]
fn first_rung_keeps_input_spelling() {
    assert_eq!(solver().transform("smart", "start"), vec!["smart", "START"]);
    assert_eq!(solver().transform("  smart ", "START"), vec!["smart", "START"]);
}

#[test]
fn mixed_lengths_in_one_dictionary() {
    assert_eq!(
        solver().transform("COLD", "WARM"),
        vec!["COLD", "CORD", "CARD", "WARD", "WARM"]
    );
    assert_eq!(solver().transform("cat", "dog"), vec!["cat", "COT", "COG", "DOG"]);
}

#[test]
fn invalid_input_yields_empty_ladder() {
    let solver = solver();
    assert!(solver.transform("", "START").is_empty());
    assert!(solver.transform("SMART", "").is_empty());
    assert!(solver.transform("   ", "   ").is_empty());
    assert!(solver.transform("eleven", "START").is_empty());
    assert!(solver.transform("test", "tester").is_empty());
}

#[test]
fn unreachable_target_yields_empty_ladder() {
    assert!(solver().transform("HEAD", "COLD").is_empty());
    assert!(solver().transform("ABUSE", "SMART").is_empty());
    assert!(solver().transform("CAT", "COLD").is_empty());
}

#[test]
fn errors_name_the_failure() {
    let solver = solver();
    assert!(matches!(
        solver.try_transform("eleven", "START"),
        Err(LadderError::InvalidInput { .. })
    ));
    assert!(matches!(
        solver.try_transform("COLD", "SMART"),
        Err(LadderError::LengthMismatch { .. })
    ));
    assert!(matches!(
        solver.try_transform("HEAD", "COLD"),
        Err(LadderError::NoPathFound { .. })
    ));
}

#[test]
fn neighbours_of_a_word() {
    let solver = solver();
    let about: Vec<&str> = solver
        .candidates_one_off("about")
        .into_iter()
        .map(|w| w.text())
        .collect();
    assert_eq!(about, vec!["ABORT"]);

    let smart: Vec<&str> = solver
        .candidates_one_off("smart")
        .into_iter()
        .map(|w| w.text())
        .collect();
    assert_eq!(smart, vec!["START", "SPART"]);
}

#[test]
fn adjacency_examples() {
    let solver = solver();
    assert!(solver.is_one_character_off("piles", "piled"));
    assert!(!solver.is_one_character_off("piles", "piles"));
    assert!(!solver.is_one_character_off("test", "tester"));
}

#[test]
fn random_ladders_match_reference_distance() {
    let dictionary = Dictionary::embedded();
    let solver = LadderSolver::new(dictionary);
    let five: Vec<&str> = dictionary.of_length(5).map(|w| w.key()).collect();
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..25 {
        let (Some(start), Some(end)) = (five.choose(&mut rng), five.choose(&mut rng)) else {
            panic!("embedded dictionary has no five-letter words");
        };

        let ladder = solver.transform(start, end);
        match reference_distance(dictionary, start, end) {
            Some(distance) => {
                assert_eq!(ladder.len(), distance + 1, "{start} -> {end}");
                assert_valid_ladder(&ladder, start, end);
            }
            None => assert!(ladder.is_empty(), "{start} -> {end}"),
        }
    }
}
