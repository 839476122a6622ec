//! Discriminators and tagged-node decoding.
//!
//! A tagged node is a JSON object such as `{"S": "hello"}` or
//! `{"L": [{"N": "1"}]}`. Decoding turns it into a [`TaggedNode`], a closed
//! sum over the six supported discriminators that borrows its payload from
//! the input tree. An object that does not decode is *inert* and is dropped
//! by whichever collection holds it.

use serde_json::{Map, Value};

/// The six supported type discriminators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    /// `"S"`
    String,
    /// `"N"`
    Number,
    /// `"BOOL"`
    Bool,
    /// `"NULL"`
    Null,
    /// `"L"`
    List,
    /// `"M"`
    Map,
}

impl Tag {
    pub const ALL: [Tag; 6] = [
        Tag::String,
        Tag::Number,
        Tag::Bool,
        Tag::Null,
        Tag::List,
        Tag::Map,
    ];

    /// Parse a discriminator key. Matching is exact and case-sensitive.
    pub fn from_key(key: &str) -> Option<Tag> {
        match key {
            "S" => Some(Tag::String),
            "N" => Some(Tag::Number),
            "BOOL" => Some(Tag::Bool),
            "NULL" => Some(Tag::Null),
            "L" => Some(Tag::List),
            "M" => Some(Tag::Map),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Tag::String => "S",
            Tag::Number => "N",
            Tag::Bool => "BOOL",
            Tag::Null => "NULL",
            Tag::List => "L",
            Tag::Map => "M",
        }
    }
}

impl std::fmt::Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a node object is matched against the discriminators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Dispatch {
    /// Use the first entry, in document order, whose key is a known
    /// discriminator and whose payload has the right shape. Other entries
    /// are ignored.
    #[default]
    FirstMatch,
    /// The object must hold exactly one entry, and that entry must be a
    /// known discriminator with a payload of the right shape.
    Strict,
}

/// A decoded tagged node, borrowing its payload from the input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TaggedNode<'a> {
    String(&'a str),
    Number(&'a str),
    Bool(&'a str),
    Null(&'a str),
    List(&'a [Value]),
    Map(&'a Map<String, Value>),
}

impl<'a> TaggedNode<'a> {
    /// Decode a node object under the given dispatch policy.
    ///
    /// Returns `None` when the object is inert: no usable discriminator, or
    /// (under [`Dispatch::Strict`]) anything other than a single well-formed
    /// entry.
    pub fn decode(node: &'a Map<String, Value>, dispatch: Dispatch) -> Option<Self> {
        match dispatch {
            Dispatch::FirstMatch => node.iter().find_map(|(key, payload)| Self::entry(key, payload)),
            Dispatch::Strict => {
                if node.len() != 1 {
                    return None;
                }
                let (key, payload) = node.iter().next()?;
                Self::entry(key, payload)
            }
        }
    }

    /// Decode a value that should be a node object. Non-objects are inert.
    pub fn decode_value(value: &'a Value, dispatch: Dispatch) -> Option<Self> {
        value.as_object().and_then(|node| Self::decode(node, dispatch))
    }

    /// Match one `key: payload` entry, checking the payload shape the
    /// discriminator requires.
    fn entry(key: &str, payload: &'a Value) -> Option<Self> {
        let node = match (Tag::from_key(key)?, payload) {
            (Tag::String, Value::String(s)) => TaggedNode::String(s),
            (Tag::Number, Value::String(s)) => TaggedNode::Number(s),
            (Tag::Bool, Value::String(s)) => TaggedNode::Bool(s),
            (Tag::Null, Value::String(s)) => TaggedNode::Null(s),
            (Tag::List, Value::Array(items)) => TaggedNode::List(items),
            (Tag::Map, Value::Object(map)) => TaggedNode::Map(map),
            (tag, _) => {
                tracing::trace!(tag = %tag, "payload shape does not match discriminator");
                return None;
            }
        };
        Some(node)
    }

    pub fn tag(&self) -> Tag {
        match self {
            TaggedNode::String(_) => Tag::String,
            TaggedNode::Number(_) => Tag::Number,
            TaggedNode::Bool(_) => Tag::Bool,
            TaggedNode::Null(_) => Tag::Null,
            TaggedNode::List(_) => Tag::List,
            TaggedNode::Map(_) => Tag::Map,
        }
    }
}
