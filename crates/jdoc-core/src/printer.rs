//! Human-readable re-serialization of the document tree.
//!
//! [`pretty`] renders a value as indented, multi-line JSON with two-space
//! indentation and one key or element per line. The output has no trailing
//! newline and re-parses to a structurally equal tree; the compact
//! single-line form lives on `Value`'s `Display` impl instead.

use crate::value::{escape_into, JsonArray, JsonObject, Value};

const INDENT: &str = "  ";

/// Render a value as indented, multi-line JSON.
pub fn pretty(value: &Value) -> String {
    let mut out = String::new();
    write_value(value, 0, &mut out);
    out
}

fn write_value(value: &Value, depth: usize, out: &mut String) {
    match value {
        Value::Object(obj) => write_object(obj, depth, out),
        Value::Array(arr) => write_array(arr, depth, out),
        leaf => out.push_str(&leaf.to_string()),
    }
}

fn write_object(obj: &JsonObject, depth: usize, out: &mut String) {
    if obj.is_empty() {
        out.push_str("{}");
        return;
    }
    out.push_str("{\n");
    let inner = INDENT.repeat(depth + 1);
    for (i, (key, value)) in obj.iter().enumerate() {
        if i > 0 {
            out.push_str(",\n");
        }
        out.push_str(&inner);
        out.push('"');
        escape_into(key, out);
        out.push_str("\": ");
        write_value(value, depth + 1, out);
    }
    out.push('\n');
    out.push_str(&INDENT.repeat(depth));
    out.push('}');
}

fn write_array(arr: &JsonArray, depth: usize, out: &mut String) {
    if arr.is_empty() {
        out.push_str("[]");
        return;
    }
    out.push_str("[\n");
    let inner = INDENT.repeat(depth + 1);
    for (i, item) in arr.iter().enumerate() {
        if i > 0 {
            out.push_str(",\n");
        }
        out.push_str(&inner);
        write_value(item, depth + 1, out);
    }
    out.push('\n');
    out.push_str(&INDENT.repeat(depth));
    out.push(']');
}
