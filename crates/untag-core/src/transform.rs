//! Recursive tagged-JSON → plain-JSON transformation.
//!
//! The walk is top-down and pure:
//!
//! ```text
//! document ─► transform_map ─► transform_value ─┬─► scalar rule
//!                   ▲                            ├─► transform_list ─► transform_value …
//!                   └────────────── "M" ─────────┘
//! ```
//!
//! Failures are values. A rule that rejects its input returns
//! [`InvalidValue`]; the enclosing map entry or list element is then dropped
//! and the walk continues. Only a document that is not a JSON object fails
//! as a whole.
//!
//! Asymmetry worth knowing about: a `NULL` node inside a map keeps its key
//! with a `null` value, while the same node inside a list is dropped.

use serde_json::{Map, Value};

use crate::error::{InvalidValue, Result, TransformError};
use crate::scalar::{transform_bool, transform_null, transform_number, transform_string};
use crate::tag::{Dispatch, TaggedNode};
use crate::types::NativeValue;

/// Options for a transformation pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TransformOptions {
    /// How node objects are matched against discriminators.
    pub dispatch: Dispatch,
    /// Pretty-print the serialized output.
    pub pretty: bool,
}

impl TransformOptions {
    pub fn strict() -> Self {
        Self {
            dispatch: Dispatch::Strict,
            ..Self::default()
        }
    }
}

/// Transform a tagged JSON document into compact plain JSON.
///
/// # Errors
///
/// Returns an error if the input is not valid JSON or its top level is not
/// an object. Invalid values inside the document never cause an error; they
/// are left out of the output.
///
/// # Examples
///
/// ```
/// let tagged = r#"{"name":{"S":" Alice "},"age":{"N":"30"},"gone":{"N":"x"}}"#;
/// assert_eq!(untag_core::transform(tagged).unwrap(), r#"{"name":"Alice","age":30}"#);
/// ```
pub fn transform(json: &str) -> Result<String> {
    transform_with(json, &TransformOptions::default())
}

/// [`transform`] with explicit options.
pub fn transform_with(json: &str, opts: &TransformOptions) -> Result<String> {
    let value: Value = serde_json::from_str(json)?;
    let native = transform_document(&value, opts)?;
    let out = if opts.pretty {
        serde_json::to_string_pretty(&native)?
    } else {
        serde_json::to_string(&native)?
    };
    Ok(out)
}

/// Byte-oriented entry point: raw JSON in, raw JSON out.
pub fn transform_slice(bytes: &[u8]) -> Result<Vec<u8>> {
    let value: Value = serde_json::from_slice(bytes)?;
    let native = transform_document(&value, &TransformOptions::default())?;
    Ok(serde_json::to_vec(&native)?)
}

/// Transform an already-parsed document. The top level must be an object.
pub fn transform_document(doc: &Value, opts: &TransformOptions) -> Result<NativeValue> {
    match doc {
        Value::Object(map) => Ok(NativeValue::Map(transform_map(map, opts))),
        other => Err(TransformError::NotAnObject(json_type_name(other))),
    }
}

/// Transform every entry of a map whose values are tagged nodes.
///
/// Entries are dropped when the key is empty, the value is not a node object,
/// the node is inert, or the node's rule rejects its payload. A `null` result
/// is kept.
pub fn transform_map(
    map: &Map<String, Value>,
    opts: &TransformOptions,
) -> Vec<(String, NativeValue)> {
    let mut out = Vec::with_capacity(map.len());
    for (key, value) in map {
        if key.is_empty() {
            tracing::debug!("dropping entry with empty key");
            continue;
        }
        let Some(node) = TaggedNode::decode_value(value, opts.dispatch) else {
            tracing::debug!(key = %key, "dropping malformed node");
            continue;
        };
        match transform_value(node, opts) {
            Ok(native) => out.push((key.clone(), native)),
            Err(err) => tracing::debug!(key = %key, reason = %err, "dropping invalid value"),
        }
    }
    out
}

/// Transform a list of tagged nodes.
///
/// Elements are dropped when they are not node objects, are inert, fail
/// their rule, or produce `null`. Order of the survivors is preserved.
pub fn transform_list(items: &[Value], opts: &TransformOptions) -> Vec<NativeValue> {
    let mut out = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        let Some(node) = TaggedNode::decode_value(item, opts.dispatch) else {
            tracing::debug!(index, "dropping malformed list element");
            continue;
        };
        match transform_value(node, opts) {
            Ok(NativeValue::Null) => tracing::debug!(index, "dropping null list element"),
            Ok(native) => out.push(native),
            Err(err) => tracing::debug!(index, reason = %err, "dropping invalid list element"),
        }
    }
    out
}

/// Dispatch a decoded node to its rule.
pub fn transform_value(
    node: TaggedNode<'_>,
    opts: &TransformOptions,
) -> std::result::Result<NativeValue, InvalidValue> {
    tracing::trace!(tag = %node.tag(), "transforming node");
    match node {
        TaggedNode::String(s) => transform_string(s),
        TaggedNode::Number(s) => transform_number(s),
        TaggedNode::Bool(s) => transform_bool(s),
        TaggedNode::Null(s) => transform_null(s),
        TaggedNode::List(items) => Ok(NativeValue::List(transform_list(items, opts))),
        TaggedNode::Map(map) => Ok(NativeValue::Map(transform_map(map, opts))),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
