// Output formatting for root frequency tables.

use std::io;

use serde::Serialize;

use crate::error::Result;
use crate::types::*;

/// Render forms as `form (n)` joined by commas.
///
/// ```text
/// membaca (2), membacakan (1)
/// ```
pub fn forms_with_frequencies(entry: &RootEntry) -> String {
    entry
        .forms
        .iter()
        .map(|f| format!("{} ({})", f.form, f.frequency))
        .collect::<Vec<_>>()
        .join(", ")
}

const WORDLIST_HEADER: [&str; 4] = [
    "Root",
    "Root Frequency",
    "Number of Forms",
    "Derivative Forms with Frequencies",
];
const STATISTICS_HEADER: [&str; 2] = ["Parameter", "Value"];

#[derive(Serialize)]
struct WordlistRow<'a> {
    root: &'a str,
    frequency: u64,
    forms: usize,
    derivatives: String,
}

#[derive(Serialize)]
struct StatisticsRow {
    parameter: &'static str,
    value: String,
}

fn tsv_writer() -> csv::Writer<Vec<u8>> {
    csv::WriterBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .from_writer(Vec::new())
}

fn finish(writer: csv::Writer<Vec<u8>>) -> Result<String> {
    let bytes = writer.into_inner().map_err(|e| e.into_error())?;
    String::from_utf8(bytes).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e).into())
}

/// Tab-separated word list, one root per line.
pub fn to_wordlist_tsv(entries: &[RootEntry]) -> Result<String> {
    let mut writer = tsv_writer();
    writer.write_record(WORDLIST_HEADER)?;
    for e in entries {
        writer.serialize(WordlistRow {
            root: &e.root,
            frequency: e.frequency,
            forms: e.forms.len(),
            derivatives: forms_with_frequencies(e),
        })?;
    }
    finish(writer)
}

/// Tab-separated corpus statistics.
pub fn to_statistics_tsv(stats: &Statistics) -> Result<String> {
    let rows = [
        ("Total words in the text", stats.total_words.to_string()),
        ("Number of unique word forms", stats.unique_forms.to_string()),
        ("Number of unique roots", stats.unique_roots.to_string()),
        ("Average forms per root", format!("{:.2}", stats.average_forms_per_root)),
    ];

    let mut writer = tsv_writer();
    writer.write_record(STATISTICS_HEADER)?;
    for (parameter, value) in rows {
        writer.serialize(StatisticsRow { parameter, value })?;
    }
    finish(writer)
}

/// Plain list of roots with their frequencies.
pub fn to_roots_only(entries: &[RootEntry]) -> String {
    let mut out = String::from("# List of root words with frequencies\n\n# Format: root [frequency]\n\n");
    for e in entries {
        out.push_str(&format!("{} [{}]\n", e.root, e.frequency));
    }
    out
}

#[derive(Serialize)]
struct Report<'a> {
    statistics: &'a Statistics,
    roots: &'a [RootEntry],
}

/// Entries and statistics as a single JSON document.
pub fn to_json(
    entries: &[RootEntry],
    stats: &Statistics,
    pretty: bool,
) -> serde_json::Result<String> {
    let report = Report {
        statistics: stats,
        roots: entries,
    };
    if pretty {
        serde_json::to_string_pretty(&report)
    } else {
        serde_json::to_string(&report)
    }
}
