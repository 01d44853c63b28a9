#![no_main]
// SPDX-License-Identifier: MIT OR Apache-2.0
//! libFuzzer target for report generation
//!
//! Tests:
//! - No panics on arbitrary document pairs
//! - Self-reports are empty unless the document is too deep
//! - The report is empty exactly when the documents compare equal

use deepassert_core::Node;
use deepassert_diff::{DiffOptions, REPORT_UNAVAILABLE, generate_diff_report};
use libfuzzer_sys::fuzz_target;

fn parse(bytes: &[u8]) -> Option<Node> {
    serde_json::from_slice::<serde_json::Value>(bytes)
        .ok()
        .map(Node::from)
}

fuzz_target!(|data: &[u8]| {
    if data.len() > 50_000 || data.len() < 2 {
        return;
    }

    let mid = data.len() / 2;
    let Some(left) = parse(&data[..mid]) else {
        return;
    };
    let Some(right) = parse(&data[mid..]) else {
        return;
    };

    let options = DiffOptions::default();
    let self_report = generate_diff_report(&left, &left, &options);
    assert!(
        self_report.is_empty() || self_report == REPORT_UNAVAILABLE,
        "self-report not empty: {self_report}"
    );

    let report = generate_diff_report(&left, &right, &options);
    if report != REPORT_UNAVAILABLE {
        assert_eq!(report.is_empty(), left == right, "report: {report}");
    }

    let _ = generate_diff_report(&left, &right, &options.with_ignore_order(true));
});
