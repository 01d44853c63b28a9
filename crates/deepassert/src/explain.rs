// SPDX-License-Identifier: MIT OR Apache-2.0
use std::fmt;

use deepassert_core::Node;
use deepassert_diff::{DiffOptions, generate_diff_report_lines};

/// First line of every [`explain`] result
pub const EXPLAIN_HEADER: &str = "deepassert: expected == actual failed";

/// Line-by-line explanation of a failed `expected == actual`.
///
/// Returns `None` when there is nothing to explain: the values are equal or
/// the report could not be produced. Callers then fall back to their own
/// rendering.
#[must_use]
pub fn explain(expected: &Node, actual: &Node) -> Option<Vec<String>> {
    let lines = generate_diff_report_lines(expected, actual, &DiffOptions::default())?;
    if lines.is_empty() {
        return None;
    }
    let mut explanation = Vec::with_capacity(lines.len() + 2);
    explanation.push(EXPLAIN_HEADER.to_owned());
    explanation.push("Details:".to_owned());
    explanation.extend(lines.into_iter().map(|line| format!("  {line}")));
    Some(explanation)
}

/// Failure path of [`assert_deep_eq!`](crate::assert_deep_eq).
///
/// # Panics
///
/// Always.
#[doc(hidden)]
#[track_caller]
pub fn assert_deep_eq_failed(
    expected: &Node,
    actual: &Node,
    message: Option<fmt::Arguments<'_>>,
) -> ! {
    let body = explain(expected, actual).map_or_else(
        || {
            format!("assertion `expected == actual` failed\n  expected: {expected}\n    actual: {actual}")
        },
        |lines| lines.join("\n"),
    );
    match message {
        Some(message) => panic!("{message}\n{body}"),
        None => panic!("{body}"),
    }
}

/// Assert that two values are equal, treating markers as wildcards.
///
/// Both arguments are converted with `Into<Node>`. On failure the panic
/// message lists every differing path:
///
/// ```should_panic
/// use deepassert::{ANY_STRING, assert_deep_eq, pattern};
///
/// assert_deep_eq!(
///     pattern!({"name": ANY_STRING, "age": 36}),
///     pattern!({"name": "ada", "age": 37}),
///     "user record",
/// );
/// ```
#[macro_export]
macro_rules! assert_deep_eq {
    ($expected:expr, $actual:expr $(,)?) => {{
        let expected: $crate::Node = ::core::convert::Into::into($expected);
        let actual: $crate::Node = ::core::convert::Into::into($actual);
        if expected != actual {
            $crate::__assert_deep_eq_failed(&expected, &actual, ::core::option::Option::None);
        }
    }};
    ($expected:expr, $actual:expr, $($arg:tt)+) => {{
        let expected: $crate::Node = ::core::convert::Into::into($expected);
        let actual: $crate::Node = ::core::convert::Into::into($actual);
        if expected != actual {
            $crate::__assert_deep_eq_failed(
                &expected,
                &actual,
                ::core::option::Option::Some(::core::format_args!($($arg)+)),
            );
        }
    }};
}

#[cfg(test)]
mod tests {
    use super::*;
    use deepassert_core::{ANY_LIST, pattern};

    #[test]
    fn test_explain_lists_differences() {
        let lines = explain(&pattern!({"a": 1, "b": ANY_LIST}), &pattern!({"a": 2, "b": "x"})).unwrap();
        assert_eq!(
            lines,
            [
                EXPLAIN_HEADER,
                "Details:",
                "  Value of root['a'] changed from 1 to 2.",
                r#"  Value of root['b'] does not match ANY_LIST (got "x")."#,
            ]
        );
    }

    #[test]
    fn test_explain_equal_values() {
        assert_eq!(explain(&pattern!([1, 2]), &pattern!([1, 2])), None);
    }

    #[test]
    fn test_macro_passes() {
        assert_deep_eq!(pattern!({"xs": ANY_LIST}), pattern!({"xs": [1, 2]}));
        assert_deep_eq!(pattern!([1]), pattern!([1.0]), "numbers compare by value");
    }

    #[test]
    #[should_panic(expected = "Value of root['xs'] does not match ANY_LIST")]
    fn test_macro_panics_with_explanation() {
        assert_deep_eq!(pattern!({"xs": ANY_LIST}), pattern!({"xs": "12"}));
    }

    #[test]
    #[should_panic(expected = "context 7\ndeepassert: expected == actual failed")]
    fn test_macro_custom_message() {
        assert_deep_eq!(pattern!(1), pattern!(2), "context {}", 7);
    }
}
