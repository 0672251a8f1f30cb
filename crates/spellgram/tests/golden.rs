//! Golden tests: corrections and suggestion lists over the bundled word
//! list, checked against recorded expectations.
//!
//! Run: cargo test -p spellgram --test golden

use std::path::PathBuf;

use serde::Deserialize;
use spellgram::{Dictionary, Matcher, MatcherOptions, SpellChecker, Suggestion};

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct Golden {
    dictionary_size: usize,
    corrections: Vec<CorrectionCase>,
    suggestions: Vec<SuggestionCase>,
}

#[derive(Debug, Deserialize)]
struct CorrectionCase {
    input: String,
    gram_size: usize,
    expected: String,
}

#[derive(Debug, Deserialize)]
struct SuggestionCase {
    input: String,
    gram_size: usize,
    top_n: usize,
    expected: Vec<Suggestion>,
}

fn data_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../data")
        .join(name)
}

fn load_dictionary() -> Dictionary {
    let path = data_path("words.txt");
    Dictionary::load(&path)
        .unwrap_or_else(|e| panic!("failed to load {}: {}", path.display(), e))
}

fn load_checker() -> SpellChecker {
    let path = data_path("words.txt");
    SpellChecker::from_path(&path, MatcherOptions::default())
        .unwrap_or_else(|e| panic!("failed to load {}: {}", path.display(), e))
}

fn load_golden() -> Golden {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/golden/words_golden.json");
    let contents = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read golden file {}: {}", path.display(), e));
    serde_json::from_str(&contents)
        .unwrap_or_else(|e| panic!("failed to parse golden file {}: {}", path.display(), e))
}

fn load_eval_cases() -> Vec<(String, String)> {
    std::fs::read_to_string(data_path("eval_cases.tsv"))
        .expect("failed to read eval_cases.tsv")
        .lines()
        .filter(|l| !l.is_empty() && !l.starts_with('#'))
        .filter_map(|l| l.split_once('\t'))
        .map(|(a, b)| (a.to_string(), b.to_string()))
        .collect()
}

fn assert_same_suggestions(actual: &[Suggestion], expected: &[Suggestion], context: &str) {
    let actual_words: Vec<&str> = actual.iter().map(|s| s.word.as_str()).collect();
    let expected_words: Vec<&str> = expected.iter().map(|s| s.word.as_str()).collect();
    assert_eq!(actual_words, expected_words, "{context}");
    for (a, e) in actual.iter().zip(expected) {
        assert!(
            (a.score - e.score).abs() < 1e-12,
            "{context}: {} scored {} (expected {})",
            a.word,
            a.score,
            e.score
        );
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[test]
fn dictionary_size_matches() {
    assert_eq!(load_dictionary().len(), load_golden().dictionary_size);
}

#[test]
fn corrections_match_golden() {
    let dict = load_dictionary();
    let golden = load_golden();
    let mut mismatches = Vec::new();
    for case in &golden.corrections {
        let actual = spellgram::correct(&case.input, &dict, case.gram_size).unwrap();
        if actual != case.expected {
            mismatches.push(format!(
                "  {} (k={}): expected {:?}, got {:?}",
                case.input, case.gram_size, case.expected, actual
            ));
        }
    }
    assert!(
        mismatches.is_empty(),
        "{} correction mismatches:\n{}",
        mismatches.len(),
        mismatches.join("\n")
    );
}

#[test]
fn suggestions_match_golden() {
    let dict = load_dictionary();
    for case in &load_golden().suggestions {
        let actual = spellgram::suggest(&case.input, &dict, case.gram_size, case.top_n).unwrap();
        let context = format!("{} (k={})", case.input, case.gram_size);
        assert_same_suggestions(&actual, &case.expected, &context);
    }
}

#[test]
fn indexed_checker_matches_golden() {
    let golden = load_golden();
    for case in &golden.suggestions {
        let options = MatcherOptions {
            max_suggestions: case.top_n,
            ..MatcherOptions::new(case.gram_size).unwrap()
        };
        let checker = SpellChecker::new(load_dictionary(), options);
        let context = format!("indexed {} (k={})", case.input, case.gram_size);
        assert_same_suggestions(&checker.suggest(&case.input), &case.expected, &context);
    }
}

#[test]
fn eval_cases_classify_as_recorded() {
    let dict = load_dictionary();
    let matcher = Matcher::new(&dict, MatcherOptions::default());
    let mut fixed = 0;
    let mut in_top_five = Vec::new();
    let mut broken = Vec::new();
    for (input, expected) in load_eval_cases() {
        if matcher.correct(&input) == expected {
            fixed += 1;
        } else if matcher.suggest(&input).iter().any(|s| s.word == expected) {
            in_top_five.push(input);
        } else {
            broken.push(input);
        }
    }
    assert_eq!(fixed, 16);
    assert_eq!(in_top_five, ["gld", "cleen", "streem"]);
    // "light" shares a single bigram with "lite"; "bite" shares two.
    assert_eq!(broken, ["lite"]);
}

#[test]
fn multi_word_correction_over_word_list() {
    let checker = load_checker();
    assert_eq!(checker.correct_text("narow  Trvel\tfamly"), "narrow travel family");
}

#[test]
fn threshold_suggestions_over_word_list() {
    let checker = load_checker();
    let result = checker.suggestions("gld narow");
    assert_eq!(result.len(), 2);
    for entry in &result {
        assert!(entry.suggestions.len() <= 5);
        assert!(entry.suggestions.iter().all(|s| s.score >= 0.3));
    }
    assert_eq!(result[1].best().map(|s| s.word.as_str()), Some("narrow"));
}
