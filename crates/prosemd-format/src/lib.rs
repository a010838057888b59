//! # prosemd-format
//!
//! **Tier 3 (Formatting)**
//!
//! This crate handles the rendering and serialization of `prosemd` records.
//! It supports Markdown, TSV, and JSON receipt output.
//!
//! ## What belongs here
//! * Reading-time and percentage display helpers
//! * Markdown/TSV table rendering
//! * Receipt serialization and output file writing
//!
//! ## What does NOT belong here
//! * Metrics computation
//! * Receipt stamping (that lives in `prosemd-core`)

use std::fs::File;
use std::io::Write;
use std::path::Path;

use anyhow::Result;

use prosemd_math::round_f64;
use prosemd_types::{PairReceipt, PairReport, SampleMetrics, SampleReceipt, TableFormat};

/// Shown in place of an empty repeated-words list.
const NONE_PLACEHOLDER: &str = "(none)";

// -----------------------
// Scalar display helpers
// -----------------------

/// Render an estimated reading time for display.
///
/// Zero minutes is the sentinel `"under 1 min"`. Anything below one
/// minute renders as whole seconds, rounded and floored at `1 sec`.
/// Everything else renders as one-decimal minutes.
#[must_use]
pub fn format_minutes(minutes: f64) -> String {
    if minutes == 0.0 {
        "under 1 min".to_string()
    } else if minutes < 1.0 {
        let seconds = (minutes * 60.0).round() as i64;
        format!("{} sec", seconds.max(1))
    } else {
        format!("{:.1} min", round_f64(minutes, 1))
    }
}

/// Render a `0..=1` ratio as a one-decimal percentage.
#[must_use]
pub fn format_percent(ratio: f64) -> String {
    format!("{:.1}%", round_f64(ratio * 100.0, 1))
}

fn format_avg(value: f64) -> String {
    format!("{:.1}", round_f64(value, 1))
}

fn format_word_list(words: &[String]) -> String {
    if words.is_empty() {
        NONE_PLACEHOLDER.to_string()
    } else {
        words.join(", ")
    }
}

// -----------------------
// Sample report rendering
// -----------------------

#[must_use]
pub fn render_sample_md(metrics: &SampleMetrics) -> String {
    let mut s = String::new();
    s.push_str("|Metric|Value|\n");
    s.push_str("|---|---:|\n");
    s.push_str(&format!("|Characters|{}|\n", metrics.characters));
    s.push_str(&format!("|Words|{}|\n", metrics.words));
    s.push_str(&format!("|Sentences|{}|\n", metrics.sentences));
    s.push_str(&format!("|Paragraphs|{}|\n", metrics.paragraphs));
    s.push_str(&format!(
        "|Avg word length|{}|\n",
        format_avg(metrics.avg_word_length)
    ));
    s.push_str(&format!(
        "|Reading time|{}|\n",
        format_minutes(metrics.reading_time_minutes)
    ));
    s.push_str(&format!(
        "|Repeated words|{}|\n",
        format_word_list(&metrics.repeated_words)
    ));
    s
}

#[must_use]
pub fn render_sample_tsv(metrics: &SampleMetrics) -> String {
    let mut s = String::new();
    s.push_str("Metric\tValue\n");
    s.push_str(&format!("Characters\t{}\n", metrics.characters));
    s.push_str(&format!("Words\t{}\n", metrics.words));
    s.push_str(&format!("Sentences\t{}\n", metrics.sentences));
    s.push_str(&format!("Paragraphs\t{}\n", metrics.paragraphs));
    s.push_str(&format!(
        "Avg word length\t{}\n",
        format_avg(metrics.avg_word_length)
    ));
    s.push_str(&format!(
        "Reading time\t{}\n",
        format_minutes(metrics.reading_time_minutes)
    ));
    s.push_str(&format!(
        "Repeated words\t{}\n",
        format_word_list(&metrics.repeated_words)
    ));
    s
}

// ---------------------
// Pair report rendering
// ---------------------

#[must_use]
pub fn render_pair_md(report: &PairReport) -> String {
    let mut s = String::new();
    s.push_str("|Metric|Primary|Secondary|\n");
    s.push_str("|---|---:|---:|\n");
    s.push_str(&format!(
        "|Characters|{}|{}|\n",
        report.primary.characters, report.secondary.characters
    ));
    s.push_str(&format!(
        "|Words|{}|{}|\n",
        report.primary.words, report.secondary.words
    ));
    s.push_str(&format!(
        "|Sentences|{}|{}|\n",
        report.primary.sentences, report.secondary.sentences
    ));
    s.push_str(&format!(
        "|Paragraphs|{}|{}|\n",
        report.primary.paragraphs, report.secondary.paragraphs
    ));
    s.push_str(&format!(
        "|Avg word length|{}|{}|\n",
        format_avg(report.primary.avg_word_length),
        format_avg(report.secondary.avg_word_length)
    ));
    s.push_str(&format!(
        "|Reading time|{}|{}|\n",
        format_minutes(report.primary.reading_time_minutes),
        format_minutes(report.secondary.reading_time_minutes)
    ));
    s.push_str(&format!(
        "|Repeated words|{}|{}|\n",
        format_word_list(&report.primary.repeated_words),
        format_word_list(&report.secondary.repeated_words)
    ));
    s.push('\n');
    s.push_str("|Comparison|Value|\n");
    s.push_str("|---|---:|\n");
    s.push_str(&format!("|Word delta|{}|\n", report.comparison.word_delta));
    s.push_str(&format!(
        "|Character delta|{}|\n",
        report.comparison.character_delta
    ));
    s.push_str(&format!(
        "|Overlap similarity|{}|\n",
        format_percent(report.comparison.similarity)
    ));
    s
}

#[must_use]
pub fn render_pair_tsv(report: &PairReport) -> String {
    let mut s = String::new();
    s.push_str("Metric\tPrimary\tSecondary\n");
    s.push_str(&format!(
        "Characters\t{}\t{}\n",
        report.primary.characters, report.secondary.characters
    ));
    s.push_str(&format!(
        "Words\t{}\t{}\n",
        report.primary.words, report.secondary.words
    ));
    s.push_str(&format!(
        "Sentences\t{}\t{}\n",
        report.primary.sentences, report.secondary.sentences
    ));
    s.push_str(&format!(
        "Paragraphs\t{}\t{}\n",
        report.primary.paragraphs, report.secondary.paragraphs
    ));
    s.push_str(&format!(
        "Avg word length\t{}\t{}\n",
        format_avg(report.primary.avg_word_length),
        format_avg(report.secondary.avg_word_length)
    ));
    s.push_str(&format!(
        "Reading time\t{}\t{}\n",
        format_minutes(report.primary.reading_time_minutes),
        format_minutes(report.secondary.reading_time_minutes)
    ));
    s.push_str(&format!(
        "Repeated words\t{}\t{}\n",
        format_word_list(&report.primary.repeated_words),
        format_word_list(&report.secondary.repeated_words)
    ));
    s.push('\n');
    s.push_str("Comparison\tValue\n");
    s.push_str(&format!("Word delta\t{}\n", report.comparison.word_delta));
    s.push_str(&format!(
        "Character delta\t{}\n",
        report.comparison.character_delta
    ));
    s.push_str(&format!(
        "Overlap similarity\t{}\n",
        format_percent(report.comparison.similarity)
    ));
    s
}

// ---------------
// Receipt writing
// ---------------

/// Write a sample receipt to any sink in the requested table format.
///
/// Markdown and TSV render only the metrics record; JSON serializes the
/// full receipt envelope on a single line.
pub fn write_sample_report_to<W: Write>(
    out: &mut W,
    receipt: &SampleReceipt,
    format: TableFormat,
) -> Result<()> {
    match format {
        TableFormat::Md => write!(out, "{}", render_sample_md(&receipt.metrics))?,
        TableFormat::Tsv => write!(out, "{}", render_sample_tsv(&receipt.metrics))?,
        TableFormat::Json => writeln!(out, "{}", serde_json::to_string(receipt)?)?,
    }
    Ok(())
}

/// Write a pair receipt to any sink in the requested table format.
pub fn write_pair_report_to<W: Write>(
    out: &mut W,
    receipt: &PairReceipt,
    format: TableFormat,
) -> Result<()> {
    match format {
        TableFormat::Md => write!(out, "{}", render_pair_md(&receipt.report))?,
        TableFormat::Tsv => write!(out, "{}", render_pair_tsv(&receipt.report))?,
        TableFormat::Json => writeln!(out, "{}", serde_json::to_string(receipt)?)?,
    }
    Ok(())
}

/// Write a sample receipt as JSON to a file path.
pub fn write_sample_json_to_file(path: &Path, receipt: &SampleReceipt) -> Result<()> {
    let file = File::create(path)?;
    serde_json::to_writer(file, receipt)?;
    Ok(())
}

/// Write a pair receipt as JSON to a file path.
pub fn write_pair_json_to_file(path: &Path, receipt: &PairReceipt) -> Result<()> {
    let file = File::create(path)?;
    serde_json::to_writer(file, receipt)?;
    Ok(())
}
