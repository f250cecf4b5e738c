use std::io::Write;
use std::thread;
use std::time::Duration;
use wordbag::core::LetterMultiset;
use wordbag::dictionary::MemorySource;
use wordbag::{EngineConfig, EngineError, WordEngine};

fn engine_with(words: &[&str]) -> WordEngine {
    WordEngine::with_source(
        MemorySource::new(words.iter().copied()),
        EngineConfig::default(),
    )
}

fn fits(letters: &str, words: &[String]) -> bool {
    let bag = LetterMultiset::from_str(letters);
    let used = words
        .iter()
        .fold(LetterMultiset::new(), |acc, w| acc.union(&LetterMultiset::from_str(w)));
    bag.can_form(&used)
}

#[test]
fn formable_words_from_mixed_case_query() {
    let engine = engine_with(&["heat", "star", "mind", "fire", "at", "he"]);
    let words = engine
        .find_formable_words("HEATSTARMINDFIRE", 1_000_000)
        .unwrap();

    for expected in ["heat", "star", "mind", "fire"] {
        assert!(words.iter().any(|w| w == expected), "missing {expected}");
    }
    assert!(!words.iter().any(|w| w == "zoo"));
    assert!(words.iter().all(|w| fits("HEATSTARMINDFIRE", std::slice::from_ref(w))));
}

#[test]
fn empty_and_non_alphabetic_queries() {
    let engine = engine_with(&["a", "at"]);
    assert!(engine.find_formable_words("", 10).unwrap().is_empty());
    assert!(engine.find_formable_words("123", 10).unwrap().is_empty());
    assert!(engine.find_combinations("", 10).unwrap().is_empty());
    assert!(engine.find_combinations("123", 10).unwrap().is_empty());
}

#[test]
fn single_entry_not_duplicated() {
    let engine = engine_with(&["a"]);
    assert_eq!(engine.find_formable_words("AA", 10).unwrap(), vec!["a"]);
}

#[test]
fn heat_combinations() {
    let engine = engine_with(&["heat", "eat", "he", "at"]);
    let combinations = engine.find_combinations("HEAT", 5).unwrap();

    assert!(!combinations.is_empty());
    assert!(combinations.len() <= 5);
    assert!(combinations.iter().all(|c| fits("HEAT", c)));
    assert!(combinations.contains(&vec!["at".to_string(), "he".to_string()]));
}

#[test]
fn results_are_sorted_and_deterministic() {
    let engine = WordEngine::embedded();
    let first = engine.find_formable_words("thunderstorm", 1_000_000).unwrap();
    let second = engine.find_formable_words("thunderstorm", 1_000_000).unwrap();

    assert_eq!(first, second);
    for pair in first.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        assert!(a.len() > b.len() || (a.len() == b.len() && a <= b), "{a} before {b}");
    }
}

#[test]
fn stats_agree_with_result() {
    let engine = WordEngine::embedded();
    let words = engine.find_formable_words("wintergardens", 1_000_000).unwrap();
    let stats = engine.word_stats("wintergardens", 1_000_000).unwrap();

    assert_eq!(stats.total_words, words.len());
    assert_eq!(stats.longest_word.as_ref(), words.first());
    let mean = words.iter().map(String::len).sum::<usize>() as f64 / words.len() as f64;
    assert!((stats.average_length - mean).abs() <= 0.005);
    assert_eq!(
        stats.length_histogram.values().sum::<usize>(),
        stats.total_words
    );
}

#[test]
fn file_dictionary_and_reload() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "Heat\n  STAR \nx-ray\n\nabcdefghijklmnopq").unwrap();

    let engine = WordEngine::new(
        EngineConfig::default()
            .with_dictionary_path(file.path())
            .with_cache_ttl(Duration::ZERO),
    );
    assert_eq!(engine.word_count().unwrap(), 2);
    assert!(engine.is_known_word("star").unwrap());

    // Expired every call, so edits are picked up
    writeln!(file, "mind").unwrap();
    assert_eq!(engine.word_count().unwrap(), 3);
}

#[test]
fn latin1_line_does_not_spoil_file_dictionary() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"heat\ncaf\xe9\nstar\n").unwrap();

    let engine = WordEngine::new(EngineConfig::default().with_dictionary_path(file.path()));
    assert_eq!(
        engine.find_formable_words("heatstar", 100).unwrap(),
        vec!["heat", "star"]
    );
}

#[test]
fn missing_file_then_recovery() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("words.txt");
    let engine = WordEngine::new(EngineConfig::default().with_dictionary_path(&path));

    assert!(matches!(
        engine.find_formable_words("heat", 10),
        Err(EngineError::DataUnavailable { .. })
    ));

    std::fs::write(&path, "heat\n").unwrap();
    assert_eq!(engine.find_formable_words("heat", 10).unwrap(), vec!["heat"]);
}

#[test]
fn concurrent_queries_share_one_index() {
    let engine = WordEngine::embedded();

    thread::scope(|scope| {
        for letters in ["heat", "stream", "garden", "window"] {
            let engine = &engine;
            scope.spawn(move || {
                let words = engine.find_formable_words(letters, 1_000_000).unwrap();
                assert!(words.iter().all(|w| fits(letters, std::slice::from_ref(w))));
            });
        }
    });

    let index = engine.index().unwrap();
    assert!(std::sync::Arc::ptr_eq(&index, &engine.index().unwrap()));
}
