use std::fmt::Write as _;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use chrono::prelude::*;
use clap::ValueEnum;
use csv::WriterBuilder;
use serde::Serialize;

use crate::registry::WordRecord;
use crate::stats::AnalysisSnapshot;

/// How many toxic words the text report lists.
pub const REPORT_TOXIC_LIMIT: usize = 10;
/// How many frequent words the text report lists.
pub const REPORT_TOP_WORDS: usize = 20;

const RULE: &str = "=============================================";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ExportFormat {
    #[default]
    Txt,
    Csv,
    Tsv,
    Json,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Txt => "txt",
            ExportFormat::Csv => "csv",
            ExportFormat::Tsv => "tsv",
            ExportFormat::Json => "json",
        }
    }
}

/// Requested list lengths shown in the text report headers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportLimits {
    pub top_words: usize,
    pub top_toxic: usize,
}

impl Default for ReportLimits {
    fn default() -> Self {
        Self {
            top_words: REPORT_TOP_WORDS,
            top_toxic: REPORT_TOXIC_LIMIT,
        }
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    statistics: &'a AnalysisSnapshot,
    top_words: &'a [&'a WordRecord],
    top_toxic: &'a [&'a WordRecord],
}

///Renders the fixed-format text report.
///Every field of the snapshot is printed; `frequent` and `toxic` are listed as given.
pub fn render_report(
    snapshot: &AnalysisSnapshot,
    frequent: &[&WordRecord],
    toxic: &[&WordRecord],
    limits: ReportLimits,
) -> String {
    let mut out = String::new();
    write_report(&mut out, snapshot, frequent, toxic, limits)
        .expect("format report into a String");
    out
}

fn write_report(
    out: &mut String,
    s: &AnalysisSnapshot,
    frequent: &[&WordRecord],
    toxic: &[&WordRecord],
    limits: ReportLimits,
) -> std::fmt::Result {
    writeln!(out, "{RULE}")?;
    writeln!(out, "          TEXT ANALYSIS REPORT")?;
    writeln!(out, "{RULE}\n")?;

    writeln!(out, "------------- GENERAL STATISTICS ------------")?;
    writeln!(out, "Total tokens: {}", s.total_tokens)?;
    writeln!(out, "Unique words: {}", s.unique_words)?;
    writeln!(out, "Lexical diversity: {:.3}", s.lexical_diversity)?;
    writeln!(out, "Sentences detected: {}", s.total_sentences)?;
    writeln!(out, "Alphabetic characters: {}", s.total_characters)?;
    writeln!(out, "Average sentence length: {:.2} words", s.average_sentence_length)?;
    writeln!(out, "Average word length: {:.2} characters\n", s.average_word_length)?;

    writeln!(out, "------------- TOXICITY ANALYSIS -------------")?;
    writeln!(out, "Unique toxic words: {}", s.toxic_unique_count)?;
    writeln!(out, "Total toxic occurrences: {}", s.toxic_total_occurrences)?;
    writeln!(out, "Highest severity level: {}\n", s.max_toxicity_severity)?;

    writeln!(out, "Top {} toxic words:", limits.top_toxic)?;
    for r in toxic {
        writeln!(out, "{:<15} {} (severity {})", r.word, r.count, r.severity)?;
    }
    writeln!(out)?;

    writeln!(out, "------------ TOP {} MOST FREQUENT WORDS -----------", limits.top_words)?;
    if frequent.is_empty() {
        writeln!(out, "No words processed.")?;
    }
    for r in frequent {
        writeln!(out, "{:<20} {}", r.word, r.count)?;
    }

    writeln!(out, "\n{RULE}")?;
    writeln!(out, "End of Report")?;
    writeln!(out, "{RULE}")
}

fn render_table(records: &[&WordRecord], delimiter: u8) -> io::Result<String> {
    let mut wtr = WriterBuilder::new().delimiter(delimiter).from_writer(Vec::new());
    wtr.write_record(["word", "count", "severity"])?;
    for r in records {
        wtr.write_record([r.word.clone(), r.count.to_string(), r.severity.to_string()])?;
    }
    let bytes = wtr.into_inner().map_err(|e| e.into_error())?;
    String::from_utf8(bytes).map_err(io::Error::other)
}

/// Renders the analysis in `format`. Csv/Tsv hold the `frequent` table only.
pub fn render_export(
    format: ExportFormat,
    snapshot: &AnalysisSnapshot,
    frequent: &[&WordRecord],
    toxic: &[&WordRecord],
    limits: ReportLimits,
) -> io::Result<String> {
    match format {
        ExportFormat::Txt => Ok(render_report(snapshot, frequent, toxic, limits)),
        ExportFormat::Csv => render_table(frequent, b','),
        ExportFormat::Tsv => render_table(frequent, b'\t'),
        ExportFormat::Json => {
            let report = JsonReport {
                statistics: snapshot,
                top_words: frequent,
                top_toxic: toxic,
            };
            Ok(serde_json::to_string_pretty(&report)?)
        }
    }
}

///save report to a timestamped file in `dir`. Return the path written.
pub fn save_report(contents: &str, dir: &Path, format: ExportFormat) -> io::Result<PathBuf> {
    let local: DateTime<Local> = Local::now();
    let filename = local
        .format(&format!("%Y%m%d_%H%M%S_analysis_report.{}", format.extension()))
        .to_string();
    let path = dir.join(filename);

    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&path)?;

    file.write_all(contents.as_bytes())?;

    Ok(path)
}
