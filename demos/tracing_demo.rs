//! Demonstrates the tracing output of registration and evaluation
//!
//! Run with: cargo run --example tracing_demo --features tracing

use comparators::prelude::*;

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    tracing::info!("Registering a custom comparator");
    let result = comparator(ComparatorDef::new(
        "even",
        Arity::Exact(0),
        |candidate, _| Ok(candidate.as_i64().is_some_and(|n| n % 2 == 0)),
    ));
    if let Err(e) = result {
        tracing::error!("Registration failed: {}", e);
    }

    tracing::info!("Parsing kwargs");
    match kwargs2cmp([("count_lt", Expected::from(10)), ("count_gt", Expected::from(0))]) {
        Ok(pairs) => {
            for (field, c) in &pairs {
                tracing::info!("{} must satisfy {}", field, c);
            }
        }
        Err(e) => tracing::error!("Parsing failed: {}", e),
    }

    tracing::info!("Evaluating a comparator against the wrong kind of value");
    if let Err(e) = contains("x").equals(&Value::from(42)) {
        tracing::warn!("Evaluation failed: {}", e);
    }
}
