//! Line-oriented lookup loaders shipped next to the engine: article titles,
//! reverse titles, and precomputed betweenness scores.
//!
//! All three share the engine's load conventions: read at most `file_length`
//! lines, skip blank lines (they still consume budget), and report malformed
//! lines in the returned [`LoadReport`] instead of aborting.

use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use ahash::AHashMap;

use crate::errors::{LinkGraphError, LoadReport};

/// Loads `id,title` lines into an ID-to-title map. The title is everything
/// after the first comma, verbatim.
pub fn load_titles<R: BufRead>(
    reader: R,
    file_length: usize,
) -> Result<(AHashMap<i64, String>, LoadReport), LinkGraphError> {
    let mut titles = AHashMap::new();
    let mut report = LoadReport::default();
    for (idx, line) in reader.lines().take(file_length).enumerate() {
        let line = line.map_err(|e| LinkGraphError::io(e.to_string()))?;
        report.lines_read += 1;
        let line = line.trim_end_matches('\r');
        if line.is_empty() {
            continue;
        }
        let Some((id, title)) = split_id_line(line, idx, &mut report) else {
            continue;
        };
        titles.insert(id, title.to_string());
    }
    Ok((titles, report))
}

/// Loads `id,"title"` lines into a title-to-ID map. One surrounding quote
/// pair is stripped when present; otherwise the field is kept verbatim.
pub fn load_titles_reverse<R: BufRead>(
    reader: R,
    file_length: usize,
) -> Result<(AHashMap<String, i64>, LoadReport), LinkGraphError> {
    let mut ids = AHashMap::new();
    let mut report = LoadReport::default();
    for (idx, line) in reader.lines().take(file_length).enumerate() {
        let line = line.map_err(|e| LinkGraphError::io(e.to_string()))?;
        report.lines_read += 1;
        let line = line.trim_end_matches('\r');
        if line.is_empty() {
            continue;
        }
        let Some((id, raw)) = split_id_line(line, idx, &mut report) else {
            continue;
        };
        ids.insert(strip_quotes(raw).to_string(), id);
    }
    Ok((ids, report))
}

/// Loads `id,score` lines into an ID-to-score map; `score` is an f64 literal.
/// A bad score is reported the same way as a bad ID.
pub fn load_betweenness<R: BufRead>(
    reader: R,
    file_length: usize,
) -> Result<(AHashMap<i64, f64>, LoadReport), LinkGraphError> {
    let mut scores = AHashMap::new();
    let mut report = LoadReport::default();
    for (idx, line) in reader.lines().take(file_length).enumerate() {
        let line = line.map_err(|e| LinkGraphError::io(e.to_string()))?;
        report.lines_read += 1;
        let line = line.trim_end_matches('\r');
        if line.is_empty() {
            continue;
        }
        let Some((id, raw)) = split_id_line(line, idx, &mut report) else {
            continue;
        };
        match raw.trim().parse::<f64>() {
            Ok(score) => {
                scores.insert(id, score);
            }
            Err(_) => report.record(idx + 1, line),
        }
    }
    Ok((scores, report))
}

pub fn load_titles_file<P: AsRef<Path>>(
    path: P,
    file_length: usize,
) -> Result<(AHashMap<i64, String>, LoadReport), LinkGraphError> {
    load_titles(open(path)?, file_length)
}

pub fn load_titles_reverse_file<P: AsRef<Path>>(
    path: P,
    file_length: usize,
) -> Result<(AHashMap<String, i64>, LoadReport), LinkGraphError> {
    load_titles_reverse(open(path)?, file_length)
}

pub fn load_betweenness_file<P: AsRef<Path>>(
    path: P,
    file_length: usize,
) -> Result<(AHashMap<i64, f64>, LoadReport), LinkGraphError> {
    load_betweenness(open(path)?, file_length)
}

fn open<P: AsRef<Path>>(path: P) -> Result<BufReader<File>, LinkGraphError> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|e| LinkGraphError::io(e.to_string()))
}

fn split_id_line<'a>(
    line: &'a str,
    idx: usize,
    report: &mut LoadReport,
) -> Option<(i64, &'a str)> {
    let (head, rest) = line.split_once(',').unwrap_or((line, ""));
    match head.trim().parse::<i64>() {
        Ok(id) => Some((id, rest)),
        Err(_) => {
            report.record(idx + 1, line);
            None
        }
    }
}

fn strip_quotes(field: &str) -> &str {
    field
        .strip_prefix('"')
        .and_then(|inner| inner.strip_suffix('"'))
        .unwrap_or(field)
}
