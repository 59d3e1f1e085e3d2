//! Differential oracle for the phrase matcher: with `max_dist == k`, a
//! document matches exactly when the k stemmed tokens occur contiguously and
//! in order.

use proptest::prelude::*;

use talpa::{analyze, phrase_search};

use crate::common;

// Two-letter words bypass the stemmer, so positions and terms stay literal.
const VOCAB: [&str; 4] = ["ab", "cd", "ef", "gh"];

fn word() -> impl Strategy<Value = &'static str> {
    prop::sample::select(VOCAB.to_vec())
}

fn bodies() -> impl Strategy<Value = Vec<String>> {
    let body = prop::collection::vec(word(), 3..10).prop_map(|words| words.join(" "));
    prop::collection::vec(body, 1..6)
}

/// Does `tokens` contain `phrase` as a contiguous subsequence?
fn contains_contiguous(tokens: &[String], phrase: &[String]) -> bool {
    tokens.windows(phrase.len()).any(|window| window == phrase)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn exact_window_matches_contiguous_scan(
        bodies in bodies(),
        phrase in prop::collection::vec(word(), 1..4),
    ) {
        let records: Vec<(String, String, String)> = bodies
            .iter()
            .enumerate()
            .map(|(i, body)| (format!("u{i}"), format!("T{i}"), body.clone()))
            .collect();
        let record_refs: Vec<(&str, &str, &str)> = records
            .iter()
            .map(|(url, title, body)| (url.as_str(), title.as_str(), body.as_str()))
            .collect();
        let (_dir, index) = common::build_corpus(&record_refs);

        let phrase: Vec<String> = phrase.iter().map(|w| (*w).to_owned()).collect();
        let expected: Vec<u32> = bodies
            .iter()
            .enumerate()
            .filter(|(_, body)| contains_contiguous(&analyze(body), &phrase))
            .map(|(i, _)| i as u32)
            .collect();

        let got = phrase_search(&index, &phrase, phrase.len() as u32).unwrap();
        prop_assert_eq!(got, expected);
    }

    /// Widening the window never loses a match.
    #[test]
    fn wider_windows_are_monotone(
        bodies in bodies(),
        phrase in prop::collection::vec(word(), 2..4),
    ) {
        let records: Vec<(String, String, String)> = bodies
            .iter()
            .enumerate()
            .map(|(i, body)| (format!("u{i}"), format!("T{i}"), body.clone()))
            .collect();
        let record_refs: Vec<(&str, &str, &str)> = records
            .iter()
            .map(|(url, title, body)| (url.as_str(), title.as_str(), body.as_str()))
            .collect();
        let (_dir, index) = common::build_corpus(&record_refs);

        let phrase: Vec<String> = phrase.iter().map(|w| (*w).to_owned()).collect();
        let k = phrase.len() as u32;
        let exact = phrase_search(&index, &phrase, k).unwrap();
        let windowed = phrase_search(&index, &phrase, k + 3).unwrap();
        for id in exact {
            prop_assert!(windowed.contains(&id));
        }
    }
}
