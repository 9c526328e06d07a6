//! JSON kwargs Example
//!
//! Expected values loaded from a JSON document, matched against a JSON
//! payload.
//!
//! Run with: cargo run --example json_kwargs --features serde

use comparators::prelude::*;
use std::collections::BTreeMap;

fn main() {
    println!("=== JSON kwargs Example ===\n");

    let expectations = r#"{
        "status_within": [200, 299],
        "tags_contains": "stable",
        "name_startswith": "comp"
    }"#;
    let payload = r#"{"status": 204, "tags": ["stable", "fast"], "name": "comparators"}"#;

    let kwargs: BTreeMap<String, Value> =
        serde_json::from_str(expectations).expect("valid expectations");
    let target: Value = serde_json::from_str(payload).expect("valid payload");

    match kwargs2cmp(kwargs) {
        Ok(pairs) => {
            for (field, c) in &pairs {
                println!("{} must satisfy {}", field, c);
            }
            println!("\nmatches: {:?}", all_attrs(&target, &pairs).map_err(|e| e.to_string()));
        }
        Err(e) => println!("bad expectations: {}", e),
    }
}
