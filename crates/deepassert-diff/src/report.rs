// SPDX-License-Identifier: MIT OR Apache-2.0
use deepassert_core::Node;

use crate::engine::{DeepDiff, DiffOptions};
use crate::error::DiffError;
use crate::model::Diff;
use crate::operator::MarkerOperator;

/// Text returned by [`generate_diff_report`] when the diff could not be computed
pub const REPORT_UNAVAILABLE: &str = "Failed to generate diff report";

/// Compare `expected` against `actual` with every available marker kind recognized.
///
/// # Errors
///
/// Returns the engine's [`DiffError`] unchanged.
pub fn try_generate_diff_report(
    expected: &Node,
    actual: &Node,
    options: &DiffOptions,
) -> Result<Diff, DiffError> {
    DeepDiff::new(expected, actual)
        .with_options(options.clone())
        .with_operator(MarkerOperator::detect())
        .compute()
}

/// Explain how `actual` differs from `expected`.
///
/// Returns an empty string when they are equal and [`REPORT_UNAVAILABLE`]
/// when the diff cannot be computed. Never panics, so it is safe to call
/// while building an assertion failure message.
#[must_use]
pub fn generate_diff_report(expected: &Node, actual: &Node, options: &DiffOptions) -> String {
    match try_generate_diff_report(expected, actual, options) {
        Ok(diff) => diff.pretty(),
        Err(err) => {
            tracing::debug!(error = %err, "Failed to generate diff report");
            REPORT_UNAVAILABLE.to_owned()
        }
    }
}

/// Line-oriented form of [`generate_diff_report`].
///
/// Returns an empty list when the trees are equal and `None` when the diff
/// cannot be computed.
#[must_use]
pub fn generate_diff_report_lines(
    expected: &Node,
    actual: &Node,
    options: &DiffOptions,
) -> Option<Vec<String>> {
    match try_generate_diff_report(expected, actual, options) {
        Ok(diff) => Some(diff.lines()),
        Err(err) => {
            tracing::debug!(error = %err, "Failed to generate diff report lines");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::{self, Write};
    use std::sync::{Arc, Mutex};

    use super::*;
    use deepassert_core::{ANY, ANY_BUT_NONE, ANY_DICT, pattern};

    fn nested(depth: usize) -> Node {
        let mut node = pattern!({"leaf": ANY});
        for _ in 0..depth {
            node = pattern!({"child": node});
        }
        node
    }

    #[test]
    fn test_generate_diff_report_no_diff() {
        let doc = pattern!({
            "a": 1,
            "b": 2,
            "c": null,
            "d": "d-value1",
            "e": {"e-nested-value": "e-nested-value1"},
        });
        assert_eq!(generate_diff_report(&doc, &doc, &DiffOptions::default()), "");
        assert_eq!(
            generate_diff_report_lines(&doc, &doc, &DiffOptions::default()),
            Some(Vec::new())
        );
    }

    #[test]
    fn test_generate_diff_report_with_markers() {
        let expected = pattern!({
            "a": 1,
            "b": ANY_BUT_NONE,
            "c": ANY_DICT,
            "d": "d-value2",
            "e": "e-value2",
        });
        let actual = pattern!({
            "a": 1,
            "b": 2,
            "c": null,
            "d": "d-value1",
            "e": "e-value1",
        });
        assert_eq!(
            generate_diff_report(&expected, &actual, &DiffOptions::default()),
            [
                "Value of root['c'] does not match ANY_DICT (got null).",
                r#"Value of root['d'] changed from "d-value2" to "d-value1"."#,
                r#"Value of root['e'] changed from "e-value2" to "e-value1"."#,
            ]
            .join("\n")
        );
    }

    #[test]
    fn test_generate_diff_report_lines() {
        let lines =
            generate_diff_report_lines(&pattern!({"a": 1}), &pattern!({"a": 2}), &DiffOptions::default());
        assert_eq!(lines, Some(vec!["Value of root['a'] changed from 1 to 2.".to_owned()]));
    }

    #[test]
    fn test_engine_failure_is_swallowed() {
        let deep = nested(16);
        let options = DiffOptions::default().with_max_depth(8);
        assert_eq!(generate_diff_report(&deep, &deep, &options), REPORT_UNAVAILABLE);
        assert_eq!(generate_diff_report_lines(&deep, &deep, &options), None);
        assert!(try_generate_diff_report(&deep, &deep, &options).is_err());
    }

    #[test]
    fn test_default_depth_limit_is_reported_not_raised() {
        let deep = nested(crate::DEFAULT_MAX_DEPTH + 1);
        assert_eq!(
            generate_diff_report(&deep, &deep, &DiffOptions::default()),
            REPORT_UNAVAILABLE
        );
    }

    /// Shared buffer the test subscriber writes formatted events into
    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl CapturedLogs {
        fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    fn with_captured_logs(f: impl FnOnce()) -> String {
        let logs = CapturedLogs::default();
        let sink = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .with_writer(move || sink.clone())
            .finish();
        tracing::subscriber::with_default(subscriber, f);
        logs.contents()
    }

    #[test]
    fn test_failure_is_logged_at_debug() {
        let deep = nested(4);
        let options = DiffOptions::default().with_max_depth(1);
        let logs = with_captured_logs(|| {
            assert_eq!(generate_diff_report(&deep, &deep, &options), REPORT_UNAVAILABLE);
        });
        assert!(logs.contains("DEBUG"), "{logs}");
        assert!(logs.contains("Failed to generate diff report"), "{logs}");
        assert!(logs.contains("depth limit"), "{logs}");
    }

    #[test]
    fn test_lines_failure_is_logged_at_debug() {
        let deep = nested(4);
        let options = DiffOptions::default().with_max_depth(1);
        let logs = with_captured_logs(|| {
            assert_eq!(generate_diff_report_lines(&deep, &deep, &options), None);
        });
        assert!(logs.contains("DEBUG"), "{logs}");
        assert!(logs.contains("Failed to generate diff report lines"), "{logs}");
    }

    #[test]
    fn test_success_logs_nothing() {
        let doc = nested(2);
        let logs = with_captured_logs(|| {
            assert_eq!(generate_diff_report(&doc, &doc, &DiffOptions::default()), "");
        });
        assert!(logs.is_empty(), "{logs}");
    }
}
