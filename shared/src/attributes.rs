//! Conversion between schema-less JSON records and DynamoDB items.

use std::collections::HashMap;

use aws_sdk_dynamodb::primitives::Blob;
use aws_sdk_dynamodb::types::AttributeValue;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde_json::{Number, Value};

use crate::Record;

pub fn record_to_item(record: Record) -> HashMap<String, AttributeValue> {
    record
        .into_iter()
        .map(|(k, v)| (k, value_to_attribute(v)))
        .collect()
}

pub fn item_to_record(item: &HashMap<String, AttributeValue>) -> Record {
    item.iter()
        .map(|(k, v)| (k.clone(), attribute_to_value(v)))
        .collect()
}

pub fn value_to_attribute(value: Value) -> AttributeValue {
    match value {
        Value::Null => AttributeValue::Null(true),
        Value::Bool(b) => AttributeValue::Bool(b),
        Value::Number(n) => AttributeValue::N(n.to_string()),
        Value::String(s) => AttributeValue::S(s),
        Value::Array(items) => {
            AttributeValue::L(items.into_iter().map(value_to_attribute).collect())
        }
        Value::Object(map) => AttributeValue::M(record_to_item(map)),
    }
}

pub fn attribute_to_value(attr: &AttributeValue) -> Value {
    match attr {
        AttributeValue::S(s) => Value::String(s.clone()),
        AttributeValue::N(n) => number_value(n),
        AttributeValue::Bool(b) => Value::Bool(*b),
        AttributeValue::Null(_) => Value::Null,
        AttributeValue::L(items) => Value::Array(items.iter().map(attribute_to_value).collect()),
        AttributeValue::M(map) => Value::Object(item_to_record(map)),
        AttributeValue::Ss(items) => {
            Value::Array(items.iter().cloned().map(Value::String).collect())
        }
        AttributeValue::Ns(items) => Value::Array(items.iter().map(|n| number_value(n)).collect()),
        AttributeValue::B(blob) => Value::String(encode_blob(blob)),
        AttributeValue::Bs(blobs) => {
            Value::Array(blobs.iter().map(|b| Value::String(encode_blob(b))).collect())
        }
        _ => Value::Null,
    }
}

// DynamoDB numbers are decimal strings; anything serde_json can't hold stays a string.
fn number_value(n: &str) -> Value {
    serde_json::from_str::<Number>(n)
        .map(Value::Number)
        .unwrap_or_else(|_| Value::String(n.to_string()))
}

fn encode_blob(blob: &Blob) -> String {
    STANDARD.encode(blob.as_ref())
}
