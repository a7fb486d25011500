// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Deep reads along a field path, flattening through arrays.
//!
//! A path like `["author", "tags"]` walks `document.author.tags`. Whenever the
//! walk meets an array it fans out over every element with the same remaining
//! path, so `{"books": [{"title": "a"}, {"title": "b"}]}` read at
//! `books.title` gives both titles. Results come back in depth-first order.
//!
//! Missing data is not an error. A `null` or absent property anywhere on a
//! branch simply ends that branch.
//!
//! # Leaf handling
//!
//! | Leaf               | Collected as                      |
//! |--------------------|-----------------------------------|
//! | string             | the string                        |
//! | number / boolean   | its JSON text (`5`, `2.5`, `true`)|
//! | array              | each element, recursively         |
//! | object             | the object itself (not indexable) |
//! | null / missing     | nothing                           |

use crate::config::KEY_PATH_DELIMITER;
use serde_json::Value;

/// What a path resolved to.
#[derive(Debug, Clone, PartialEq)]
pub enum Extracted {
    /// The path never crossed an array and hit exactly one value.
    Single(Value),
    /// The path crossed at least one array. May be empty.
    Many(Vec<Value>),
}

impl Extracted {
    /// Number of collected values.
    pub fn len(&self) -> usize {
        match self {
            Extracted::Single(_) => 1,
            Extracted::Many(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Collected values, in traversal order.
    pub fn into_values(self) -> Vec<Value> {
        match self {
            Extracted::Single(value) => vec![value],
            Extracted::Many(values) => values,
        }
    }
}

/// Read the value(s) at `path` inside `document`.
///
/// An empty path returns the document itself.
///
/// # Example
///
/// ```
/// use fieldsift::extract::{get, Extracted};
/// use serde_json::json;
///
/// let doc = json!({"tags": ["a", ["b", "c"]]});
/// assert_eq!(
///     get(&doc, &["tags"]),
///     Some(Extracted::Many(vec![json!("a"), json!("b"), json!("c")]))
/// );
/// assert_eq!(get(&doc, &["missing"]), None);
/// ```
pub fn get<S: AsRef<str>>(document: &Value, path: &[S]) -> Option<Extracted> {
    let mut collector = Collector::default();
    collector.descend(document, path);
    collector.finish()
}

/// Like [`get`], with a dotted path string (`"author.name"`).
pub fn get_str(document: &Value, path: &str) -> Option<Extracted> {
    let segments: Vec<&str> = if path.is_empty() {
        Vec::new()
    } else {
        path.split(KEY_PATH_DELIMITER).collect()
    };
    get(document, &segments)
}

/// Text form of a primitive JSON value. `None` for null, arrays and objects.
pub fn stringify(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

#[derive(Default)]
struct Collector {
    values: Vec<Value>,
    crossed_array: bool,
}

impl Collector {
    fn descend<S: AsRef<str>>(&mut self, node: &Value, path: &[S]) {
        let Some((segment, rest)) = path.split_first() else {
            self.collect(node);
            return;
        };

        match node {
            Value::Null => {}
            Value::Array(items) => {
                self.crossed_array = true;
                for item in items {
                    self.descend(item, path);
                }
            }
            Value::Object(map) => {
                let Some(child) = map.get(segment.as_ref()) else {
                    return;
                };
                if rest.is_empty() {
                    self.collect(child);
                } else {
                    self.descend(child, rest);
                }
            }
            // Path continues below a primitive: nothing there.
            Value::String(_) | Value::Number(_) | Value::Bool(_) => {}
        }
    }

    fn collect(&mut self, node: &Value) {
        match node {
            Value::Null => {}
            Value::Array(items) => {
                self.crossed_array = true;
                for item in items {
                    self.collect(item);
                }
            }
            Value::Object(_) => self.values.push(node.clone()),
            primitive => {
                if let Some(text) = stringify(primitive) {
                    self.values.push(Value::String(text));
                }
            }
        }
    }

    fn finish(self) -> Option<Extracted> {
        if self.crossed_array {
            return Some(Extracted::Many(self.values));
        }
        self.values.into_iter().next().map(Extracted::Single)
    }
}
