//! Integration-level snapshot tests for every public format renderer.
//!
//! Each test exercises the public render/write API and pins the output
//! with an insta snapshot so regressions are caught at review time.

use prosemd_format::{render_pair_md, render_sample_md, write_pair_report_to, write_sample_report_to};
use prosemd_types::{
    ComparisonMetrics, PairReceipt, PairReport, SampleMetrics, SampleReceipt, TableFormat, ToolInfo,
};

// ---------------------------------------------------------------------------
// Shared fixtures
// ---------------------------------------------------------------------------

fn sample_metrics() -> SampleMetrics {
    SampleMetrics {
        characters: 25,
        words: 4,
        sentences: 2,
        paragraphs: 1,
        avg_word_length: 5.5,
        reading_time_minutes: 0.02,
        repeated_words: vec!["hello".to_string()],
    }
}

fn rich_metrics() -> SampleMetrics {
    SampleMetrics {
        characters: 124,
        words: 26,
        sentences: 3,
        paragraphs: 2,
        avg_word_length: 4.25,
        reading_time_minutes: 0.13,
        repeated_words: vec!["the".to_string(), "and".to_string(), "to".to_string()],
    }
}

fn pair_report() -> PairReport {
    PairReport {
        primary: sample_metrics(),
        secondary: SampleMetrics {
            characters: 8,
            words: 2,
            sentences: 1,
            paragraphs: 2,
            avg_word_length: 3.5,
            reading_time_minutes: 0.01,
            repeated_words: vec![],
        },
        comparison: ComparisonMetrics {
            word_delta: -2,
            character_delta: -17,
            similarity: 1.0 / 3.0,
        },
    }
}

fn tool() -> ToolInfo {
    ToolInfo {
        name: "prosemd".to_string(),
        version: "0.0.0".to_string(),
    }
}

// ---------------------------------------------------------------------------
// Sample tables
// ---------------------------------------------------------------------------

#[test]
fn sample_md_snapshot() {
    insta::assert_snapshot!(render_sample_md(&sample_metrics()), @r"
|Metric|Value|
|---|---:|
|Characters|25|
|Words|4|
|Sentences|2|
|Paragraphs|1|
|Avg word length|5.5|
|Reading time|1 sec|
|Repeated words|hello|
");
}

#[test]
fn sample_md_snapshot_with_word_list() {
    insta::assert_snapshot!(render_sample_md(&rich_metrics()), @r"
|Metric|Value|
|---|---:|
|Characters|124|
|Words|26|
|Sentences|3|
|Paragraphs|2|
|Avg word length|4.3|
|Reading time|8 sec|
|Repeated words|the, and, to|
");
}

#[test]
fn sample_md_snapshot_empty() {
    insta::assert_snapshot!(render_sample_md(&SampleMetrics::default()), @r"
|Metric|Value|
|---|---:|
|Characters|0|
|Words|0|
|Sentences|0|
|Paragraphs|0|
|Avg word length|0.0|
|Reading time|under 1 min|
|Repeated words|(none)|
");
}

// ---------------------------------------------------------------------------
// Pair tables
// ---------------------------------------------------------------------------

#[test]
fn pair_md_snapshot() {
    insta::assert_snapshot!(render_pair_md(&pair_report()), @r"
|Metric|Primary|Secondary|
|---|---:|---:|
|Characters|25|8|
|Words|4|2|
|Sentences|2|1|
|Paragraphs|1|2|
|Avg word length|5.5|3.5|
|Reading time|1 sec|1 sec|
|Repeated words|hello|(none)|

|Comparison|Value|
|---|---:|
|Word delta|-2|
|Character delta|-17|
|Overlap similarity|33.3%|
");
}

// ---------------------------------------------------------------------------
// JSON receipts
// ---------------------------------------------------------------------------

#[test]
fn sample_json_snapshot() {
    let receipt = SampleReceipt {
        schema_version: 1,
        generated_at_ms: 0,
        tool: tool(),
        mode: "sample".to_string(),
        metrics: sample_metrics(),
    };
    let mut buf = Vec::new();
    write_sample_report_to(&mut buf, &receipt, TableFormat::Json).unwrap();
    let output = String::from_utf8(buf).unwrap();
    let v: serde_json::Value = serde_json::from_str(&output).unwrap();
    let pretty = serde_json::to_string_pretty(&v).unwrap();
    insta::assert_snapshot!(pretty, @r#"
{
  "avg_word_length": 5.5,
  "characters": 25,
  "generated_at_ms": 0,
  "mode": "sample",
  "paragraphs": 1,
  "reading_time_minutes": 0.02,
  "repeated_words": [
    "hello"
  ],
  "schema_version": 1,
  "sentences": 2,
  "tool": {
    "name": "prosemd",
    "version": "0.0.0"
  },
  "words": 4
}
"#);
}

#[test]
fn pair_json_snapshot() {
    let receipt = PairReceipt {
        schema_version: 1,
        generated_at_ms: 0,
        tool: tool(),
        mode: "pair".to_string(),
        report: pair_report(),
    };
    let mut buf = Vec::new();
    write_pair_report_to(&mut buf, &receipt, TableFormat::Json).unwrap();
    let output = String::from_utf8(buf).unwrap();
    let v: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(v["mode"], "pair");
    assert_eq!(v["schema_version"], 1);
    assert_eq!(v["comparison"]["word_delta"], -2);
    assert_eq!(v["comparison"]["character_delta"], -17);
    assert_eq!(v["primary"]["words"], 4);
    assert_eq!(v["secondary"]["words"], 2);
}
