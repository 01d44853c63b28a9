// SPDX-License-Identifier: MIT OR Apache-2.0
//! Print the report for two mappings that differ in a few places.
//!
//! Run with: `cargo run -p deepassert --example mapping_report`

use deepassert::{ANY_BUT_NONE, ANY_DICT, check_mappings_equal, explain, pattern};

fn main() {
    let d1 = pattern!({
        "a": 1,
        "b": 2,
        "c": null,
        "d": "d-value1",
        "e": {"e-nested-value": "e-nested-value1"},
    });
    let d2 = pattern!({
        "a": 1,
        "b": ANY_BUT_NONE,
        "c": ANY_DICT,
        "d": "d-value2",
        "e": {"e-nested-value": "e-nested-value2"},
    });

    match check_mappings_equal(&d1, &d2, &[]) {
        Ok(()) => println!("mappings are equal"),
        Err(failure) => println!("{failure}"),
    }

    println!();
    if let Some(lines) = explain(&d1, &d2) {
        for line in lines {
            println!("{line}");
        }
    }

    match check_mappings_equal(&d1, &d2, &["c", "d", "e"]) {
        Ok(()) => println!("\nequal once c, d and e are ignored"),
        Err(failure) => println!("\n{failure}"),
    }
}
