//! JSON dump module
//!
//! Renders a decoded JSON object as indented key/value lines for the
//! diagnostic log: one line per leaf, one tab per nesting level, nested
//! objects wrapped in `{ "key":` / `}` markers.

use serde_json::{Map, Value};

/// Render a decoded JSON object as a multi-line dump.
pub fn render_object(object: &Map<String, Value>) -> String {
    let mut lines = Vec::new();
    dump_object(object, 0, &mut lines);
    lines.join("\n")
}

fn dump_object(object: &Map<String, Value>, depth: usize, lines: &mut Vec<String>) {
    let indent = "\t".repeat(depth);
    for (key, value) in object {
        match value {
            Value::Object(nested) => {
                lines.push(format!("{indent}{{ \"{key}\":"));
                dump_object(nested, depth + 1, lines);
                lines.push(format!("{indent}}}"));
            }
            leaf => lines.push(format!("{indent}{key} : {}", render_leaf(leaf))),
        }
    }
}

/// Strings render unquoted; every other leaf keeps its JSON notation.
fn render_leaf(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(body: &str) -> Map<String, Value> {
        serde_json::from_str(body).unwrap()
    }

    #[test]
    fn test_flat_object() {
        let rendered = render_object(&parse(r#"{"a":1}"#));
        assert_eq!(rendered, "a : 1");
    }

    #[test]
    fn test_nested_object_opens_block() {
        let rendered = render_object(&parse(r#"{"x":{"y":2}}"#));
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines, vec!["{ \"x\":", "\ty : 2", "}"]);
    }

    #[test]
    fn test_two_levels_of_nesting() {
        let rendered = render_object(&parse(r#"{"a":{"b":{"c":3}}}"#));
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(
            lines,
            vec!["{ \"a\":", "\t{ \"b\":", "\t\tc : 3", "\t}", "}"]
        );
    }

    #[test]
    fn test_string_leaf_renders_unquoted() {
        let rendered = render_object(&parse(r#"{"s":"hello"}"#));
        assert_eq!(rendered, "s : hello");
    }

    #[test]
    fn test_array_bool_and_null_are_leaves() {
        let rendered = render_object(&parse(r#"{"a":[1,2,3],"b":true,"n":null}"#));
        let lines: Vec<&str> = rendered.lines().collect();
        assert!(lines.contains(&"a : [1,2,3]"));
        assert!(lines.contains(&"b : true"));
        assert!(lines.contains(&"n : null"));
    }

    #[test]
    fn test_empty_object_renders_nothing() {
        assert_eq!(render_object(&Map::new()), "");
    }
}
