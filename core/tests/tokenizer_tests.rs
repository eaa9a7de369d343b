use std::collections::HashSet;
use termcloud::tokenizer::{is_stopword, tokenize};

#[test]
fn it_lowercases_and_strips_punctuation() {
    let words = tokenize("Hello, WORLD! (Rust) is fun; async/await rocks.");
    assert_eq!(words, vec!["hello", "world", "rust", "fun", "asyncawait", "rocks"]);
}

#[test]
fn it_keeps_hyphens_and_drops_non_ascii() {
    let words = tokenize("Zero-cost abstractions — café naïve");
    // the em-dash is stripped, accented letters vanish
    assert_eq!(words, vec!["zero-cost", "abstractions", "caf", "nave"]);
}

#[test]
fn it_filters_stopwords() {
    let words = tokenize("The quick brown fox and the lazy dog");
    assert!(!words.contains(&"the".to_string()));
    assert!(!words.contains(&"and".to_string()));
    assert_eq!(words, vec!["quick", "brown", "fox", "lazy", "dog"]);
}

#[test]
fn it_filters_domain_stopwords() {
    for w in ["first", "third", "using", "made", "also", "like"] {
        assert!(is_stopword(w), "{w} should be a stopword");
    }
    assert_eq!(tokenize("First we used three things, then got it made"), vec!["things"]);
}

#[test]
fn it_keeps_hyphen_only_tokens() {
    assert_eq!(tokenize("a --- b -- c-d"), vec!["---", "c-d"]);
    assert_eq!(tokenize("well--known"), vec!["well--known"]);
}

#[test]
fn it_drops_pure_numbers_but_keeps_mixed() {
    assert_eq!(tokenize("2024 v2 x86 100ms 0042"), vec!["x86", "100ms"]);
}

#[test]
fn it_is_idempotent_on_its_own_output() {
    let text = "Parsing JSON with serde: zero-copy deserialization, borrowed strings & lifetimes.";
    let once = tokenize(text);
    let twice = tokenize(&once.join(" "));
    assert_eq!(once, twice);
    let set: HashSet<_> = once.iter().collect();
    assert_eq!(set.len(), once.len());
}
