use crate::document::{parse_documents, Document};
use crate::error::{Result, ScoreError};
use serde_json::Value;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

fn is_corpus_file(p: &Path) -> bool {
    matches!(p.extension().and_then(|s| s.to_str()), Some("json" | "jsonl"))
}

/// Load documents from a `.json`/`.jsonl` file or a directory of them.
/// Directory entries are read in path order.
pub fn load_documents<P: AsRef<Path>>(path: P) -> Result<Vec<Document>> {
    let path = path.as_ref();
    let mut files: Vec<PathBuf> = Vec::new();
    if path.is_dir() {
        for entry in WalkDir::new(path).sort_by_file_name().into_iter().filter_map(|e| e.ok()) {
            let p = entry.path();
            if p.is_file() && is_corpus_file(p) {
                files.push(p.to_path_buf());
            }
        }
    } else {
        files.push(path.to_path_buf());
    }

    let mut docs = Vec::new();
    for file in files {
        let loaded = if file.extension().and_then(|s| s.to_str()) == Some("jsonl") {
            load_jsonl(&file, docs.len())?
        } else {
            load_json(&file, docs.len())?
        };
        tracing::debug!(file = %file.display(), docs = loaded.len(), "loaded corpus file");
        docs.extend(loaded);
    }
    Ok(docs)
}

fn open(file: &Path) -> Result<File> {
    File::open(file).map_err(|source| ScoreError::Io { path: file.to_path_buf(), source })
}

/// `offset` shifts reported document positions so they index the whole corpus.
fn load_json(file: &Path, offset: usize) -> Result<Vec<Document>> {
    let reader = BufReader::new(open(file)?);
    let json: Value = serde_json::from_reader(reader)
        .map_err(|source| ScoreError::Json { path: file.to_path_buf(), line: None, source })?;
    parse_documents(&json).map_err(|e| shift_index(e, offset))
}

fn load_jsonl(file: &Path, offset: usize) -> Result<Vec<Document>> {
    let reader = BufReader::new(open(file)?);
    let mut docs = Vec::new();
    for (lineno, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| ScoreError::Io { path: file.to_path_buf(), source })?;
        if line.trim().is_empty() { continue; }
        let value: Value = serde_json::from_str(&line)
            .map_err(|source| ScoreError::Json { path: file.to_path_buf(), line: Some(lineno + 1), source })?;
        docs.push(Document::from_value(offset + docs.len(), &value)?);
    }
    Ok(docs)
}

fn shift_index(err: ScoreError, offset: usize) -> ScoreError {
    match err {
        ScoreError::InvalidDocument { index, reason } => ScoreError::InvalidDocument { index: index + offset, reason },
        other => other,
    }
}
