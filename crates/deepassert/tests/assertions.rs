// SPDX-License-Identifier: MIT OR Apache-2.0
//! End-to-end behaviour of the assertion helpers and report generator.

use deepassert::{
    ANY, ANY_BUT_NONE, ANY_DICT, ANY_LIST, ANY_STRING, AssertionFailure, DiffOptions, Node,
    REPORT_UNAVAILABLE, assert_equal, assert_mappings_equal, check_equal, check_mappings_equal,
    generate_diff_report, generate_diff_report_lines, pattern,
};
use serde::Serialize;
use serde_json::json;

#[test]
fn test_equal_with_markers_succeeds() {
    assert_equal(
        pattern!({"a": 1, "b": ANY_BUT_NONE, "c": ANY_DICT}),
        pattern!({"a": 1, "b": 2, "c": {}}),
    );
}

#[test]
#[should_panic(expected = "Details:\nValue of root['a'] changed from 1 to 2.")]
fn test_equal_failure_embeds_report() {
    assert_equal(pattern!({"a": 1}), pattern!({"a": 2}));
}

#[test]
fn test_failure_report_is_not_empty() {
    let Err(AssertionFailure::Mismatch { report }) =
        check_equal(pattern!({"a": 1}), pattern!({"a": 2}))
    else {
        panic!("expected a mismatch");
    };
    assert!(report.contains("root['a']"));
    assert!(report.contains('1') && report.contains('2'));
}

#[test]
fn test_every_marker_decides_regardless_of_side() {
    let cases = [
        (ANY, Node::Null, true),
        (ANY_BUT_NONE, Node::Null, false),
        (ANY_BUT_NONE, Node::from(0), true),
        (ANY_DICT, pattern!({}), true),
        (ANY_DICT, pattern!([]), false),
        (ANY_LIST, pattern!([]), true),
        (ANY_LIST, pattern!("abc"), false),
        (ANY_STRING, pattern!(""), true),
        (ANY_STRING, pattern!(1), false),
    ];
    for (marker, actual, expected) in cases {
        let wrapped_marker = pattern!({"k": [marker.clone()]});
        let wrapped_actual = pattern!({"k": [actual.clone()]});
        assert_eq!(
            check_equal(&wrapped_marker, &wrapped_actual).is_ok(),
            expected,
            "{marker} vs {actual}"
        );
        assert_eq!(
            check_equal(&wrapped_actual, &wrapped_marker).is_ok(),
            expected,
            "{actual} vs {marker}"
        );
    }
}

#[test]
fn test_mappings_equal_ignoring_keys() {
    assert_mappings_equal(pattern!({"a": 1, "b": 2}), pattern!({"a": 1, "b": 99}), &["b"]);
    assert_mappings_equal(pattern!({"a": 1}), pattern!({"a": 1}), &["missing"]);
}

#[test]
#[should_panic(expected = "Details:")]
fn test_mappings_equal_without_ignored_keys_panics() {
    assert_mappings_equal(pattern!({"a": 1}), pattern!({"a": 2}), &[]);
}

#[test]
fn test_mappings_only_ignore_top_level_keys() {
    let result = check_mappings_equal(
        pattern!({"outer": {"b": 1}}),
        pattern!({"outer": {"b": 2}}),
        &["b"],
    );
    assert_eq!(
        result,
        Err(AssertionFailure::Mismatch {
            report: "Value of root['outer']['b'] changed from 1 to 2.".to_owned(),
        })
    );
}

#[test]
fn test_mapping_report_lists_every_path() {
    let d1 = pattern!({
        "a": 1,
        "b": 2,
        "c": null,
        "d": "d-value1",
        "e": "e-value1",
    });
    let d2 = pattern!({
        "a": 1,
        "b": ANY_BUT_NONE,
        "c": ANY_DICT,
        "d": "d-value2",
        "e": "e-value2",
    });
    let failure = check_mappings_equal(&d1, &d2, &[]).unwrap_err();
    assert_eq!(
        failure.to_string(),
        [
            "Details:",
            "Value of root['c'] does not match ANY_DICT (got null).",
            r#"Value of root['d'] changed from "d-value1" to "d-value2"."#,
            r#"Value of root['e'] changed from "e-value1" to "e-value2"."#,
        ]
        .join("\n")
    );
}

#[test]
fn test_actual_from_serde_types() {
    #[derive(Serialize)]
    struct Order {
        id: u64,
        items: Vec<&'static str>,
        note: Option<String>,
    }

    let actual = Node::from_serialize(&Order {
        id: 42,
        items: vec!["tea"],
        note: None,
    })
    .unwrap();
    assert_equal(pattern!({"id": ANY_BUT_NONE, "items": ANY_LIST, "note": ANY}), actual);
    assert_equal(json!({"x": [1, 2]}), pattern!({"x": [1, 2.0]}));
}

#[test]
fn test_report_no_diff_is_empty() {
    let doc = pattern!({"a": [1, {"b": null}], "c": "s"});
    assert_eq!(generate_diff_report(&doc, &doc, &DiffOptions::default()), "");
    assert_eq!(
        generate_diff_report_lines(&doc, &doc, &DiffOptions::default()),
        Some(Vec::new())
    );
}

#[test]
fn test_report_generation_never_panics_on_pathological_input() {
    let mut deep = Node::Null;
    for _ in 0..300 {
        deep = Node::List(vec![deep]);
    }
    // the root types differ, so the engine never descends
    assert!(
        generate_diff_report(&deep, &Node::Null, &DiffOptions::default())
            .starts_with("Type of root changed from list to null")
    );
    assert_eq!(
        generate_diff_report(&deep, &deep, &DiffOptions::default()),
        REPORT_UNAVAILABLE
    );
    assert_eq!(generate_diff_report_lines(&deep, &deep, &DiffOptions::default()), None);
}

#[cfg(feature = "approx")]
#[test]
fn test_approx_composes_with_wildcards() {
    use deepassert::approx;

    assert_equal(
        pattern!({"total": approx(0.3), "currency": ANY_STRING}),
        pattern!({"total": 0.1 + 0.2, "currency": "EUR"}),
    );
    let failure = check_equal(pattern!({"total": approx(1.0)}), pattern!({"total": 1.1})).unwrap_err();
    assert_eq!(
        failure.to_string(),
        "Details:\nValue of root['total'] does not match 1 ± 1e-6 (got 1.1)."
    );
}
