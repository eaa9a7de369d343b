use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashSet;

/// Tokens shorter than this are dropped unless a caller asks otherwise.
pub const DEFAULT_MIN_TERM_LENGTH: usize = 3;

lazy_static! {
    // Allow-list: anything outside lowercase ascii, digits, whitespace and '-' is stripped.
    static ref STRIP: Regex = Regex::new(r"[^a-z0-9\s-]").expect("valid regex");
    static ref STOPWORDS: HashSet<&'static str> = {
        let words: &[&str] = &[
            "a","about","above","after","again","against","all","am","an","and","any","are","as","at",
            "be","because","been","before","being","below","between","both","but","by",
            "can","did","do","does","doing","don","down","during",
            "each","few","for","from","further",
            "had","has","have","having","he","her","here","hers","herself","him","himself","his","how",
            "i","if","in","into","is","it","its","itself",
            "just","me","more","most","my","myself",
            "no","nor","not","now","of","off","on","once","only","or","other","our","ours","ourselves","out","over","own",
            "s","same","she","should","so","some","such",
            "t","than","that","the","their","theirs","them","themselves","then","there","these","they","this","those","through","to","too",
            "under","until","up","very",
            "was","we","were","what","when","where","which","while","who","whom","why","will","with","would",
            "you","your","yours","yourself","yourselves",
            // ordinals and filler verbs that dominate technical prose
            "one","two","three","four","five","first","second","third",
            "also","like","use","using","used","get","got","make","made",
        ];
        words.iter().copied().collect()
    };
}

pub fn is_stopword(token: &str) -> bool { STOPWORDS.contains(token) }

fn is_numeric(token: &str) -> bool { token.bytes().all(|b| b.is_ascii_digit()) }

/// Tokenize text with the default minimum term length.
pub fn tokenize(text: &str) -> Vec<String> {
    tokenize_with_min_len(text, DEFAULT_MIN_TERM_LENGTH)
}

/// Lowercase, strip punctuation, split on whitespace, then drop short tokens,
/// stopwords and pure numbers. Tokens come back in order of appearance.
pub fn tokenize_with_min_len(text: &str, min_len: usize) -> Vec<String> {
    let lowered = text.to_lowercase();
    let stripped = STRIP.replace_all(&lowered, "");
    stripped
        .split_whitespace()
        .filter(|t| t.len() >= min_len && !is_stopword(t) && !is_numeric(t))
        .map(str::to_string)
        .collect()
}
