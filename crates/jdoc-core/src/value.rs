//! The document model: a mutable JSON value tree.
//!
//! [`Value`] is a tagged union over everything a JSON document can hold.
//! Numeric width is preserved from the source text: literals that fit in
//! 32 bits parse as [`Value::Int`], wider integers as [`Value::Long`], and
//! anything written with a fraction or exponent as [`Value::Double`].
//!
//! Containers own their children outright; the tree is built append-only by
//! the parser and is plain mutable data afterwards. [`JsonObject`] keeps its
//! keys in insertion order.

use std::fmt;

/// A parsed JSON value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i32),
    Long(i64),
    Double(f64),
    String(String),
    Array(JsonArray),
    Object(JsonObject),
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    pub fn is_number(&self) -> bool {
        matches!(self, Value::Int(_) | Value::Long(_) | Value::Double(_))
    }

    pub fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    pub fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    pub fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_i32(&self) -> Option<i32> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// The value as a 64-bit integer; `Int` widens losslessly.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(i64::from(*n)),
            Value::Long(n) => Some(*n),
            _ => None,
        }
    }

    /// The value as a float; both integer widths widen.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(n) => Some(f64::from(*n)),
            Value::Long(n) => Some(*n as f64),
            Value::Double(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&JsonArray> {
        match self {
            Value::Array(a) => Some(a),
            _ => None,
        }
    }

    pub fn as_array_mut(&mut self) -> Option<&mut JsonArray> {
        match self {
            Value::Array(a) => Some(a),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&JsonObject> {
        match self {
            Value::Object(o) => Some(o),
            _ => None,
        }
    }

    pub fn as_object_mut(&mut self) -> Option<&mut JsonObject> {
        match self {
            Value::Object(o) => Some(o),
            _ => None,
        }
    }
}

impl Default for Value {
    fn default() -> Self {
        Value::Null
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Long(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Double(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<JsonArray> for Value {
    fn from(v: JsonArray) -> Self {
        Value::Array(v)
    }
}

impl From<JsonObject> for Value {
    fn from(v: JsonObject) -> Self {
        Value::Object(v)
    }
}

/// An ordered string-to-value mapping.
///
/// Iteration order is insertion order. Inserting an existing key overwrites
/// the value in place, keeping the key's original position.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JsonObject {
    entries: Vec<(String, Value)>,
}

impl JsonObject {
    pub fn new() -> Self {
        JsonObject::default()
    }

    /// Insert a key-value pair, overwriting in place if the key exists.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.entries
            .iter_mut()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    /// Shorthand for looking up a key that holds an object.
    pub fn get_object(&self, key: &str) -> Option<&JsonObject> {
        self.get(key).and_then(Value::as_object)
    }

    /// Shorthand for looking up a key that holds an array.
    pub fn get_array(&self, key: &str) -> Option<&JsonArray> {
        self.get(key).and_then(Value::as_array)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

/// An ordered, zero-indexed sequence of values. Duplicates and nulls are
/// permitted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JsonArray {
    items: Vec<Value>,
}

impl JsonArray {
    pub fn new() -> Self {
        JsonArray::default()
    }

    pub fn push(&mut self, value: impl Into<Value>) {
        self.items.push(value.into());
    }

    pub fn get(&self, index: usize) -> Option<&Value> {
        self.items.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Value> {
        self.items.get_mut(index)
    }

    /// Shorthand for indexing an element that holds an object.
    pub fn get_object(&self, index: usize) -> Option<&JsonObject> {
        self.get(index).and_then(Value::as_object)
    }

    /// Shorthand for indexing an element that holds an array.
    pub fn get_array(&self, index: usize) -> Option<&JsonArray> {
        self.get(index).and_then(Value::as_array)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.items.iter()
    }
}

/// Escape a string's contents for a JSON string literal, without the
/// surrounding quotes.
pub(crate) fn escape_into(src: &str, out: &mut String) {
    for c in src.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\u{0008}' => out.push_str("\\b"),
            '\u{000C}' => out.push_str("\\f"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if (c as u32) < 0x20 => {
                out.push_str(&format!("\\u{:04X}", c as u32));
            }
            c => out.push(c),
        }
    }
}

/// Render a float so that re-parsing restores the `Double` variant: whole
/// numbers gain a trailing `.0` to keep the fraction marker in the text.
/// Values produced by the parser are always finite.
pub(crate) fn format_double(n: f64) -> String {
    let mut s = n.to_string();
    if !s.contains(['.', 'e', 'E']) {
        s.push_str(".0");
    }
    s
}

/// Compact JSON rendering: no interstitial whitespace, keys in insertion
/// order. Feeding the output back to the parser reconstructs an equal tree.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Bool(b) => f.write_str(if *b { "true" } else { "false" }),
            Value::Int(n) => write!(f, "{n}"),
            Value::Long(n) => write!(f, "{n}"),
            Value::Double(n) => f.write_str(&format_double(*n)),
            Value::String(s) => {
                let mut escaped = String::with_capacity(s.len());
                escape_into(s, &mut escaped);
                write!(f, "\"{escaped}\"")
            }
            Value::Array(arr) => {
                f.write_str("[")?;
                for (i, item) in arr.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            Value::Object(obj) => {
                f.write_str("{")?;
                for (i, (key, value)) in obj.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    let mut escaped = String::with_capacity(key.len());
                    escape_into(key, &mut escaped);
                    write!(f, "\"{escaped}\":{value}")?;
                }
                f.write_str("}")
            }
        }
    }
}
