//! Corpus-wide TF-IDF scoring.
//!
//! Per-document work (tokenize, count) runs in parallel; the reduction that
//! needs every document (dictionary, df, aggregate scores) is a single fold.

use crate::config::ScoreConfig;
use crate::document::{Document, TokenizedDocument};
use crate::error::Result;
use crate::scale::SqrtScale;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub type TermId = u32;

/// A ranked term ready for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredTerm {
    pub text: String,
    #[serde(rename = "score")]
    pub raw_score: f64,
    #[serde(rename = "size")]
    pub display_size: f64,
}

/// Smoothed inverse document frequency, `ln(1 + N/df)`. A `df` of zero is
/// treated as one.
pub fn idf(num_docs: usize, df: u32) -> f64 {
    let df = df.max(1);
    (1.0 + num_docs as f64 / df as f64).ln()
}

/// Aggregated statistics for every distinct term of a corpus, in first-seen order.
#[derive(Debug, Clone, Default)]
pub struct CorpusScores {
    pub num_docs: usize,
    dictionary: HashMap<String, TermId>,
    terms: Vec<String>,
    df: Vec<u32>,
    scores: Vec<f64>,
}

impl CorpusScores {
    pub fn num_terms(&self) -> usize { self.terms.len() }

    pub fn df(&self, term: &str) -> Option<u32> {
        self.dictionary.get(term).map(|&id| self.df[id as usize])
    }

    pub fn idf(&self, term: &str) -> Option<f64> {
        self.df(term).map(|df| idf(self.num_docs, df))
    }

    pub fn score(&self, term: &str) -> Option<f64> {
        self.dictionary.get(term).map(|&id| self.scores[id as usize])
    }

    /// `(term, score)` pairs in dictionary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.terms.iter().map(String::as_str).zip(self.scores.iter().copied())
    }
}

/// Tokenize and count every document. Output order matches input order.
pub fn tokenize_corpus(documents: &[Document], min_term_length: usize) -> Vec<TokenizedDocument> {
    documents
        .par_iter()
        .map(|d| TokenizedDocument::from_document(d, min_term_length))
        .collect()
}

/// Sum `tf * idf` for every term over the documents that contain it.
///
/// Scores are summed rather than averaged: a term with moderate frequency in
/// many documents outranks one that is dense in a single document.
pub fn aggregate(docs: &[TokenizedDocument]) -> CorpusScores {
    let mut dictionary: HashMap<String, TermId> = HashMap::new();
    let mut terms: Vec<String> = Vec::new();
    let mut df: Vec<u32> = Vec::new();

    for doc in docs {
        // term_counts keys are unique, so each hit is one document
        for (term, _) in doc.term_counts.iter() {
            let tid = match dictionary.get(term) {
                Some(&tid) => tid,
                None => {
                    let tid = terms.len() as TermId;
                    dictionary.insert(term.to_string(), tid);
                    terms.push(term.to_string());
                    df.push(0);
                    tid
                }
            };
            df[tid as usize] += 1;
        }
    }

    let num_docs = docs.len();
    let idfs: Vec<f64> = df.iter().map(|&d| idf(num_docs, d)).collect();
    let mut scores = vec![0.0f64; terms.len()];
    for doc in docs {
        for (term, _) in doc.term_counts.iter() {
            let tid = dictionary[term] as usize;
            scores[tid] += doc.tf(term) * idfs[tid];
        }
    }

    CorpusScores { num_docs, dictionary, terms, df, scores }
}

/// Sort descending by score, keep the top `config.top_k`, and size each term.
///
/// The sort is stable, so equal scores keep dictionary order.
pub fn rank(corpus: &CorpusScores, config: &ScoreConfig) -> Vec<ScoredTerm> {
    let mut ranked: Vec<(&str, f64)> = corpus.iter().collect();
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
    ranked.truncate(config.top_k);

    let range = config.output_range;
    match ranked.as_slice() {
        [] => Vec::new(),
        [(text, score)] => vec![ScoredTerm { text: text.to_string(), raw_score: *score, display_size: range.max }],
        [(_, max), .., (_, min)] => {
            let scale = SqrtScale::new((*min, *max), range);
            ranked
                .iter()
                .map(|(text, score)| ScoredTerm {
                    text: text.to_string(),
                    raw_score: *score,
                    display_size: scale.apply(*score),
                })
                .collect()
        }
    }
}

/// Score a corpus into a ranked, sized vocabulary.
pub fn score(documents: &[Document], config: &ScoreConfig) -> Result<Vec<ScoredTerm>> {
    config.validate()?;
    let tokenized = tokenize_corpus(documents, config.min_term_length);
    let corpus = aggregate(&tokenized);
    tracing::debug!(num_docs = corpus.num_docs, num_terms = corpus.num_terms(), "aggregated corpus");
    let ranked = rank(&corpus, config);
    tracing::debug!(kept = ranked.len(), top_k = config.top_k, "ranked terms");
    Ok(ranked)
}
