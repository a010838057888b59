//! # prosemd-core
//!
//! This crate is the **primary library interface** for `prosemd`.
//! It coordinates segmentation, metrics, and comparison to produce prose
//! analysis receipts.
//!
//! If you are embedding `prosemd` into another Rust application, depend on
//! this crate and `prosemd-types`. Avoid depending on `prosemd-model` or
//! `prosemd-compare` directly unless necessary.
//!
//! ## Example
//!
//! ```rust
//! use prosemd_core::{analyze_sample, evaluate_pair};
//!
//! let metrics = analyze_sample("Hello world. Hello again!");
//! assert_eq!(metrics.words, 4);
//! assert_eq!(metrics.sentences, 2);
//! assert_eq!(metrics.repeated_words, vec!["hello".to_string()]);
//!
//! let report = evaluate_pair("cat dog", "dog bird");
//! assert_eq!(report.comparison.word_delta, 0);
//! assert!((report.comparison.similarity - 0.5).abs() < f64::EPSILON);
//! ```

use std::time::{SystemTime, UNIX_EPOCH};

// Re-export types for convenience
pub use prosemd_types as types;

pub use prosemd_compare::compare_samples;
pub use prosemd_model::analyze_sample;

use prosemd_types::{PairReceipt, PairReport, SampleReceipt, ToolInfo};

/// Runs the complete pair workflow: Analyze both samples -> Compare.
///
/// This is the high-level entry point for evaluating a primary sample
/// against a secondary one. Evaluation is synchronous and stateless;
/// callers re-invoke it whenever either input changes and render the
/// returned records.
#[must_use]
pub fn evaluate_pair(primary: &str, secondary: &str) -> PairReport {
    prosemd_compare::compare_pair(primary, secondary)
}

/// Analyze a single sample and stamp the receipt envelope around it.
#[must_use]
pub fn sample_receipt(text: &str) -> SampleReceipt {
    SampleReceipt {
        schema_version: prosemd_types::SCHEMA_VERSION,
        generated_at_ms: now_ms(),
        tool: ToolInfo::current(),
        mode: "sample".to_string(),
        metrics: analyze_sample(text),
    }
}

/// Evaluate a pair and stamp the receipt envelope around the report.
#[must_use]
pub fn pair_receipt(primary: &str, secondary: &str) -> PairReceipt {
    PairReceipt {
        schema_version: prosemd_types::SCHEMA_VERSION,
        generated_at_ms: now_ms(),
        tool: ToolInfo::current(),
        mode: "pair".to_string(),
        report: evaluate_pair(primary, secondary),
    }
}

fn now_ms() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis()
}
