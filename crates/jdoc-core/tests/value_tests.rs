use jdoc_core::{parse, pretty, JsonArray, JsonObject, Value};

// ============================================================================
// JsonObject
// ============================================================================

#[test]
fn insert_and_get() {
    let mut obj = JsonObject::new();
    obj.insert("a", 1);
    obj.insert("b", "two");
    assert_eq!(obj.len(), 2);
    assert_eq!(obj.get("a"), Some(&Value::Int(1)));
    assert_eq!(obj.get("b").and_then(Value::as_str), Some("two"));
    assert_eq!(obj.get("missing"), None);
}

#[test]
fn insert_overwrites_in_place() {
    let mut obj = JsonObject::new();
    obj.insert("a", 1);
    obj.insert("b", 2);
    obj.insert("a", 99);
    assert_eq!(obj.len(), 2);
    assert_eq!(obj.get("a"), Some(&Value::Int(99)));
    let keys: Vec<&str> = obj.keys().collect();
    assert_eq!(keys, ["a", "b"], "overwritten key keeps its position");
}

#[test]
fn iteration_follows_insertion_order() {
    let mut obj = JsonObject::new();
    for key in ["z", "a", "m"] {
        obj.insert(key, Value::Null);
    }
    let keys: Vec<&str> = obj.iter().map(|(k, _)| k).collect();
    assert_eq!(keys, ["z", "a", "m"]);
}

#[test]
fn container_shortcuts() {
    let mut inner = JsonObject::new();
    inner.insert("x", 1);
    let mut items = JsonArray::new();
    items.push(10);
    let mut obj = JsonObject::new();
    obj.insert("o", inner);
    obj.insert("a", items);
    obj.insert("s", "text");

    assert_eq!(obj.get_object("o").and_then(|o| o.get("x")), Some(&Value::Int(1)));
    assert_eq!(obj.get_array("a").map(JsonArray::len), Some(1));
    assert!(obj.get_object("s").is_none());
    assert!(obj.get_array("o").is_none());
}

#[test]
fn get_mut_allows_editing_the_tree() {
    let mut obj = JsonObject::new();
    obj.insert("n", 1);
    if let Some(v) = obj.get_mut("n") {
        *v = Value::Int(2);
    }
    assert_eq!(obj.get("n"), Some(&Value::Int(2)));
}

// ============================================================================
// JsonArray
// ============================================================================

#[test]
fn push_and_index() {
    let mut arr = JsonArray::new();
    arr.push(1);
    arr.push("two");
    arr.push(Value::Null);
    assert_eq!(arr.len(), 3);
    assert_eq!(arr.get(0), Some(&Value::Int(1)));
    assert_eq!(arr.get(1).and_then(Value::as_str), Some("two"));
    assert_eq!(arr.get(2), Some(&Value::Null));
    assert_eq!(arr.get(3), None);
}

#[test]
fn nested_container_shortcuts() {
    let mut inner = JsonArray::new();
    inner.push(5);
    let mut arr = JsonArray::new();
    arr.push(inner);
    arr.push(JsonObject::new());

    assert_eq!(arr.get_array(0).and_then(|a| a.get(0)), Some(&Value::Int(5)));
    assert!(arr.get_object(1).is_some_and(JsonObject::is_empty));
    assert!(arr.get_object(0).is_none());
}

// ============================================================================
// Typed accessors
// ============================================================================

#[test]
fn accessors_narrow_by_type() {
    assert_eq!(Value::Bool(true).as_bool(), Some(true));
    assert_eq!(Value::Int(7).as_i32(), Some(7));
    assert_eq!(Value::from("s").as_str(), Some("s"));
    assert!(Value::Null.is_null());

    assert_eq!(Value::Int(7).as_bool(), None);
    assert_eq!(Value::Bool(true).as_i32(), None);
    assert_eq!(Value::Null.as_str(), None);
}

#[test]
fn integer_accessors_widen() {
    assert_eq!(Value::Int(7).as_i64(), Some(7));
    assert_eq!(Value::Long(1 << 40).as_i64(), Some(1 << 40));
    assert_eq!(Value::Double(0.5).as_i64(), None);

    assert_eq!(Value::Int(2).as_f64(), Some(2.0));
    assert_eq!(Value::Long(3).as_f64(), Some(3.0));
    assert_eq!(Value::Double(0.5).as_f64(), Some(0.5));
    assert_eq!(Value::from("x").as_f64(), None);
}

#[test]
fn predicates_match_one_variant_each() {
    let values = [
        Value::Null,
        Value::Bool(true),
        Value::Int(1),
        Value::from("s"),
        Value::Array(JsonArray::new()),
        Value::Object(JsonObject::new()),
    ];
    let hits: Vec<usize> = values
        .iter()
        .map(|v| {
            [
                v.is_null(),
                v.is_bool(),
                v.is_number(),
                v.is_string(),
                v.is_array(),
                v.is_object(),
            ]
            .iter()
            .filter(|hit| **hit)
            .count()
        })
        .collect();
    assert_eq!(hits, [1, 1, 1, 1, 1, 1]);
    assert!(values[4].is_array());
    assert!(values[5].is_object());
}

#[test]
fn number_variants_are_distinct() {
    assert!(Value::Int(1).is_number());
    assert!(Value::Long(1).is_number());
    assert!(Value::Double(1.0).is_number());
    assert_ne!(Value::Int(1), Value::Long(1));
    assert_ne!(Value::Long(1), Value::Double(1.0));
}

// ============================================================================
// Compact rendering (Display)
// ============================================================================

#[test]
fn display_is_compact() {
    let doc = parse(r#"{ "a" : 1 , "b" : [ true , null ] }"#).unwrap();
    assert_eq!(doc.to_string(), r#"{"a":1,"b":[true,null]}"#);
}

#[test]
fn display_escapes_strings() {
    let mut obj = JsonObject::new();
    obj.insert("k\"ey", "a\\b\nc\t\u{0001}");
    assert_eq!(
        Value::Object(obj).to_string(),
        r#"{"k\"ey":"a\\b\nc\t\u0001"}"#
    );
}

#[test]
fn display_keeps_double_markers() {
    assert_eq!(Value::Double(10.0).to_string(), "10.0");
    assert_eq!(Value::Double(0.1).to_string(), "0.1");
    assert_eq!(Value::Double(-2.0).to_string(), "-2.0");
    assert_eq!(Value::Long(10).to_string(), "10");
    assert_eq!(Value::Int(10).to_string(), "10");
}

#[test]
fn display_roundtrip_preserves_number_variants() {
    let doc = parse(r#"[1, 9999999999, 1.0]"#).unwrap();
    let text = doc.to_string();
    assert_eq!(text, "[1,9999999999,1.0]");
    assert_eq!(parse(&text).unwrap(), doc);
}

// ============================================================================
// Pretty rendering
// ============================================================================

#[test]
fn pretty_indents_two_spaces() {
    let doc = parse(r#"{"a":1,"b":[1,2],"c":{},"d":{"e":null}}"#).unwrap();
    let expected = "\
{
  \"a\": 1,
  \"b\": [
    1,
    2
  ],
  \"c\": {},
  \"d\": {
    \"e\": null
  }
}";
    assert_eq!(pretty(&doc), expected);
}

#[test]
fn pretty_of_empty_containers() {
    assert_eq!(pretty(&Value::Object(JsonObject::new())), "{}");
    assert_eq!(pretty(&Value::Array(JsonArray::new())), "[]");
}

#[test]
fn pretty_has_no_trailing_newline() {
    let doc = parse(r#"{"a":1}"#).unwrap();
    assert!(!pretty(&doc).ends_with('\n'));
}
