//! Comparator Search Example
//!
//! Comparators drop into any code that searches or filters by equality.
//!
//! Run with: cargo run --example search

use comparators::prelude::*;

fn main() {
    println!("=== Comparator Search Example ===\n");

    let words = ["one", "two", "three", "four"];
    let first_t = words.iter().position(|w| *w == startswith("t"));
    println!("first word starting with 't': {:?}", first_t);

    let short: Vec<_> = words.iter().filter(|w| **w == shorter_than(4)).collect();
    println!("words shorter than 4 chars: {:?}", short);

    let statuses = [200, 201, 301, 404, 500];
    let client_or_server_errors = match_any([within(400, 499).expect("valid range"), ge(500)]);
    let failures: Vec<_> = statuses
        .iter()
        .filter(|s| **s == client_or_server_errors)
        .collect();
    println!("{} -> {:?}", client_or_server_errors, failures);

    println!("[5, 5, 6] == all_eq(5): {}", [5, 5, 6] == all_eq(5));
    println!("[5; 10] == all_eq(5): {}", [5; 10] == all_eq(5));
}
