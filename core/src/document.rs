use crate::error::{Result, ScoreError};
use crate::tokenizer::tokenize_with_min_len;
use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;

/// One input document. Decode with [`Document::from_value`] or [`parse_documents`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Document {
    pub id: String,
    pub text: String,
}

impl Document {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self { id: id.into(), text: text.into() }
    }

    /// Decode a single JSON object, rejecting missing or non-string fields.
    /// Blog index feeds name the identifier `link`; `id` wins when both are set.
    /// `index` is the document's position in the corpus, used for reporting.
    pub fn from_value(index: usize, value: &Value) -> Result<Self> {
        let obj = value
            .as_object()
            .ok_or_else(|| ScoreError::invalid_document(index, "expected a JSON object"))?;
        let id = match obj.get("id").or_else(|| obj.get("link")) {
            Some(Value::String(s)) => s.clone(),
            Some(_) => return Err(ScoreError::invalid_document(index, "identifier must be a string")),
            None => return Err(ScoreError::invalid_document(index, "missing identifier (`id` or `link`)")),
        };
        let text = match obj.get("text") {
            Some(Value::String(s)) => s.clone(),
            Some(_) => return Err(ScoreError::invalid_document(index, format!("text of `{id}` must be a string"))),
            None => return Err(ScoreError::invalid_document(index, format!("missing `text` for `{id}`"))),
        };
        Ok(Self { id, text })
    }
}

/// Decode a corpus: either an array of documents or a single document object.
pub fn parse_documents(value: &Value) -> Result<Vec<Document>> {
    match value {
        Value::Array(arr) => arr.iter().enumerate().map(|(i, v)| Document::from_value(i, v)).collect(),
        Value::Object(_) => Ok(vec![Document::from_value(0, value)?]),
        _ => Err(ScoreError::invalid_document(0, "expected an array of documents or a document object")),
    }
}

/// Term counts in first-occurrence order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TermCounts {
    index: HashMap<String, usize>,
    entries: Vec<(String, u32)>,
}

impl TermCounts {
    pub fn new() -> Self { Self::default() }

    pub fn add(&mut self, term: &str) {
        match self.index.get(term) {
            Some(&i) => self.entries[i].1 += 1,
            None => {
                self.index.insert(term.to_string(), self.entries.len());
                self.entries.push((term.to_string(), 1));
            }
        }
    }

    pub fn get(&self, term: &str) -> Option<u32> {
        self.index.get(term).map(|&i| self.entries[i].1)
    }

    pub fn contains(&self, term: &str) -> bool { self.index.contains_key(term) }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> + '_ {
        self.entries.iter().map(|(t, c)| (t.as_str(), *c))
    }

    /// Number of distinct terms.
    pub fn len(&self) -> usize { self.entries.len() }

    pub fn is_empty(&self) -> bool { self.entries.is_empty() }
}

/// Count surviving tokens. `total` is the filtered token count, not the raw one.
pub fn count<I, S>(tokens: I) -> (TermCounts, usize)
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut counts = TermCounts::new();
    let mut total = 0usize;
    for t in tokens {
        counts.add(t.as_ref());
        total += 1;
    }
    (counts, total)
}

#[derive(Debug, Clone)]
pub struct TokenizedDocument {
    pub id: String,
    pub term_counts: TermCounts,
    pub total: usize,
}

impl TokenizedDocument {
    pub fn from_document(doc: &Document, min_term_length: usize) -> Self {
        let (term_counts, total) = count(tokenize_with_min_len(&doc.text, min_term_length));
        Self { id: doc.id.clone(), term_counts, total }
    }

    /// Term frequency of `term` in this document.
    ///
    /// A term is only present when `total > 0`, so the division is always safe;
    /// absent terms have a frequency of zero.
    pub fn tf(&self, term: &str) -> f64 {
        match self.term_counts.get(term) {
            Some(c) => c as f64 / self.total as f64,
            None => 0.0,
        }
    }
}
