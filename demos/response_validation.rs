//! Response Validation Example
//!
//! A validator that only knows attribute equality gains ranges, thresholds
//! and prefix checks through comparators and the kwargs DSL.
//!
//! Run with: cargo run --example response_validation

use comparators::impl_attributes;
use comparators::prelude::*;

#[derive(Debug)]
struct Response {
    status: u16,
    body: String,
    body_len: usize,
}

impl_attributes!(Response { status, body, body_len });

fn validate(response: &Response, kwargs: Vec<(&str, Expected)>) -> Result<(), String> {
    match all_attrs(response, kwargs2compr(kwargs.clone())) {
        Ok(true) => Ok(()),
        Ok(false) => Err(format!("{:?} does not match {:?}", response, kwargs)),
        Err(e) => Err(e.to_string()),
    }
}

fn main() {
    println!("=== Response Validation Example ===\n");

    let response = Response {
        status: 200,
        body: "asdf".to_string(),
        body_len: 350,
    };

    // Plain equality, the way the validator was written
    let result = validate(&response, vec![("status", 200.into()), ("body", "asdf".into())]);
    println!("status=200, body='asdf': {:?}", result);

    // Comparators passed as expected values
    let result = validate(
        &response,
        vec![
            ("status", lt(206).into()),
            ("body_len", within(300, 400).expect("valid range").into()),
        ],
    );
    println!("status=lt(206), body_len=within(300, 400): {:?}", result);

    // The same check through key suffixes
    let result = validate(
        &response,
        vec![("status_lt", 206.into()), ("body_len_within", vec![300, 400].into())],
    );
    println!("status_lt=206, body_len_within=[300, 400]: {:?}", result);

    // A failing check
    let result = validate(&response, vec![("body_startswith", "qw".into())]);
    println!("body_startswith='qw': {:?}", result);

    // A field the response does not have
    let result = validate(&response, vec![("headers_contains", "etag".into())]);
    println!("headers_contains='etag': {:?}", result);

    // A bad range is caught before any comparison runs
    let result = validate(&response, vec![("body_len_within", vec![400, 300].into())]);
    println!("body_len_within=[400, 300]: {:?}", result);
}
