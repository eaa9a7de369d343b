use std::collections::HashSet;
use termcloud::scorer::{aggregate, idf, tokenize_corpus};
use termcloud::tokenizer::tokenize;
use termcloud::{score, Document, ScoreConfig};

const EPS: f64 = 1e-12;

fn corpus(texts: &[&str]) -> Vec<Document> {
    texts.iter().enumerate().map(|(i, t)| Document::new(format!("doc-{i}"), *t)).collect()
}

#[test]
fn cat_dog_bird_fish_scores_exactly() {
    let docs = vec![Document::new("a", "cat dog cat bird"), Document::new("b", "dog bird bird fish")];
    let ranked = score(&docs, &ScoreConfig::default().with_top_k(10)).unwrap();

    let ln2 = (1.0f64 + 2.0 / 2.0).ln();
    let ln3 = (1.0f64 + 2.0 / 1.0).ln();
    let expected = [
        ("cat", 2.0 / 4.0 * ln3),
        ("bird", 1.0 / 4.0 * ln2 + 2.0 / 4.0 * ln2),
        ("dog", 1.0 / 4.0 * ln2 + 1.0 / 4.0 * ln2),
        ("fish", 1.0 / 4.0 * ln3),
    ];
    assert_eq!(ranked.len(), 4);
    for (term, (text, raw)) in ranked.iter().zip(expected) {
        assert_eq!(term.text, text);
        assert!((term.raw_score - raw).abs() < EPS, "{text}: {} != {raw}", term.raw_score);
    }
    assert_eq!(ranked[0].display_size, 60.0);
    assert_eq!(ranked[3].display_size, 14.0);
    assert!(ranked[1].display_size > ranked[2].display_size);
}

#[test]
fn empty_inputs_are_not_errors() {
    let cfg = ScoreConfig::default();
    assert!(score(&[], &cfg).unwrap().is_empty());
    assert!(score(&corpus(&["", "   \n "]), &cfg).unwrap().is_empty());
    assert!(score(&corpus(&["the of and to", "a an is"]), &cfg).unwrap().is_empty());
}

#[test]
fn single_qualifying_term_gets_max_size() {
    let cfg = ScoreConfig::default().with_output_range(10.0, 42.0);
    let ranked = score(&corpus(&["the kestrel"]), &cfg).unwrap();
    assert_eq!(ranked.len(), 1);
    assert_eq!(ranked[0].text, "kestrel");
    assert_eq!(ranked[0].display_size, 42.0);
}

#[test]
fn idf_ordering_follows_document_spread() {
    let two = aggregate(&tokenize_corpus(&corpus(&["the quick fox", "fox runs fast"]), 3));
    let one = aggregate(&tokenize_corpus(&corpus(&["the quick fox"]), 3));
    let apart = aggregate(&tokenize_corpus(&corpus(&["the quick fox", "hen runs fast"]), 3));

    // ln(1 + 2/2) == ln(1 + 1/1)
    assert_eq!(two.idf("fox"), Some(idf(2, 2)));
    assert_eq!(one.idf("fox"), Some(idf(1, 1)));
    assert!((two.idf("fox").unwrap() - one.idf("fox").unwrap()).abs() < EPS);
    // narrower distribution in a larger corpus weighs more
    assert!(apart.idf("fox").unwrap() > two.idf("fox").unwrap());

    // same idf, but summing over two documents beats one
    assert!(two.score("fox").unwrap() > one.score("fox").unwrap());
    assert!((two.score("fox").unwrap() - (0.5 + 1.0 / 3.0) * idf(2, 2)).abs() < EPS);
}

#[test]
fn output_terms_come_from_documents() {
    let docs = corpus(&[
        "Ownership and borrowing make Rust memory safe without a garbage collector.",
        "The borrow checker enforces ownership rules at compile time.",
        "Async Rust uses futures; executors poll futures to completion.",
    ]);
    let vocab: HashSet<String> = docs.iter().flat_map(|d| tokenize(&d.text)).collect();
    let ranked = score(&docs, &ScoreConfig::default()).unwrap();
    assert!(!ranked.is_empty());
    assert!(ranked.iter().all(|t| vocab.contains(&t.text)));
}

#[test]
fn top_k_truncates_after_sorting() {
    let docs = corpus(&["alpha alpha alpha beta beta gamma", "delta"]);
    let ranked = score(&docs, &ScoreConfig::default().with_top_k(2)).unwrap();
    let words: Vec<_> = ranked.iter().map(|t| t.text.as_str()).collect();
    // delta fills its own document, so it outranks alpha
    assert_eq!(words, vec!["delta", "alpha"]);
    assert_eq!(ranked[0].display_size, 60.0);
    assert_eq!(ranked[1].display_size, 14.0);
}

#[test]
fn vocabulary_round_trips_through_the_filter() {
    let docs = corpus(&["Tokio runtime schedules tasks; tasks yield at await points.", "Rayon splits work across threads."]);
    let ranked = score(&docs, &ScoreConfig::default()).unwrap();
    let vocab: Vec<&str> = ranked.iter().map(|t| t.text.as_str()).collect();
    let again: HashSet<String> = tokenize(&vocab.join(" ")).into_iter().collect();
    let expected: HashSet<String> = vocab.iter().map(|s| s.to_string()).collect();
    assert_eq!(again, expected);
}

#[test]
fn serializes_for_the_renderer() {
    let ranked = score(&corpus(&["kestrel"]), &ScoreConfig::default()).unwrap();
    let json = serde_json::to_value(&ranked).unwrap();
    assert_eq!(json[0]["text"], "kestrel");
    assert_eq!(json[0]["size"], 60.0);
    assert!(json[0]["score"].is_f64());
}
