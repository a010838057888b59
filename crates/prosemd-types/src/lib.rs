//! # prosemd-types
//!
//! **Tier 0 (Core Types)**
//!
//! This crate defines the core data structures and contracts for `prosemd`.
//! It contains only data types, Serde definitions, and `SCHEMA_VERSION`.
//!
//! ## Stability Policy
//!
//! **JSON-first stability**: The primary contract is the JSON schema, not Rust struct literals.
//!
//! - **JSON consumers**: Stable. New fields have sensible defaults; removed/renamed fields
//!   bump `SCHEMA_VERSION`.
//! - **Rust library consumers**: Semi-stable. New fields may be added in minor versions,
//!   which can break struct literal construction. Use `Default` + field mutation or
//!   `..Default::default()` patterns for forward compatibility.
//!
//! ## What belongs here
//! * Pure data structs (metrics records, comparison records, receipts)
//! * Serialization/Deserialization logic
//! * Stability markers (`SCHEMA_VERSION`)
//!
//! ## What does NOT belong here
//! * Segmentation or counting logic
//! * File I/O
//! * Rendering

use serde::{Deserialize, Serialize};

/// The current schema version for all receipt types.
pub const SCHEMA_VERSION: u32 = 1;

/// Output table style for rendered reports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TableFormat {
    #[default]
    Md,
    Tsv,
    Json,
}

/// Descriptive metrics for a single text sample.
///
/// Recomputed in full on every evaluation; `Default` is the record for
/// an empty (or whitespace-only) sample.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SampleMetrics {
    /// Character count of the trimmed sample.
    pub characters: usize,
    /// Count of whitespace-delimited words in the trimmed sample.
    pub words: usize,
    /// Count of non-blank segments between runs of `.`, `!`, `?`.
    pub sentences: usize,
    /// Count of non-blank segments between blank lines.
    pub paragraphs: usize,
    /// Mean raw word length in characters, `0` when there are no words.
    pub avg_word_length: f64,
    /// Word count divided by a fixed 200 words-per-minute pace.
    pub reading_time_minutes: f64,
    /// Up to five normalized words that occur more than once, most
    /// frequent first; ties keep first-encounter order.
    pub repeated_words: Vec<String>,
}

/// Pairwise comparison between a primary and a secondary sample.
///
/// Deltas are signed `secondary - primary`. The similarity score is the
/// Dice-style overlap coefficient over distinct normalized tokens. It is
/// often mislabeled Jaccard; the denominator is the combined word count
/// of both samples, not the size of the token union.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ComparisonMetrics {
    pub word_delta: i64,
    pub character_delta: i64,
    pub similarity: f64,
}

/// Both per-sample records plus their comparison, as rendered together
/// by a caller after each edit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PairReport {
    pub primary: SampleMetrics,
    pub secondary: SampleMetrics,
    pub comparison: ComparisonMetrics,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolInfo {
    pub name: String,
    pub version: String,
}

impl ToolInfo {
    pub fn current() -> Self {
        Self {
            name: "prosemd".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// Receipt wrapping a single-sample metrics record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SampleReceipt {
    pub schema_version: u32,
    pub generated_at_ms: u128,
    pub tool: ToolInfo,
    pub mode: String, // "sample"
    #[serde(flatten)]
    pub metrics: SampleMetrics,
}

/// Receipt wrapping a pair evaluation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PairReceipt {
    pub schema_version: u32,
    pub generated_at_ms: u128,
    pub tool: ToolInfo,
    pub mode: String, // "pair"
    #[serde(flatten)]
    pub report: PairReport,
}
