//! Flattening a typed DynamoDB item and inspecting the result.
//!
//! Run with: cargo run --example flatten_item

use ddb_flatten::{from_str, to_string_pretty, PlainValue};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let item = r#"{
        "id":       {"S": "order-1042"},
        "total":    {"N": "129.95"},
        "paid":     {"BOOL": "t"},
        "placed":   {"S": "2024-01-15T10:30:00Z"},
        "coupon":   {"NULL": "true"},
        "note":     {"N": "not a number"},
        "customer": {"M": {"name": {"S": "  Alice  "}, "vip": {"BOOL": "1"}}},
        "skus":     {"L": [{"S": "A-1"}, {"S": ""}, {"N": "7"}]}
    }"#;

    let doc = from_str(item)?;
    println!("Flattened:\n{}\n", to_string_pretty(&doc)?);

    if let Some(placed) = doc.get("placed").and_then(|v| v.as_i64()) {
        println!("Placed at epoch second {}", placed);
    }

    if let Some(PlainValue::Object(customer)) = doc.get("customer") {
        println!("Customer has {} fields", customer.len());
    }

    println!("'note' dropped: {}", !doc.contains_key("note"));

    Ok(())
}
