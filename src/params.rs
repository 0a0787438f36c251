//! Ordered request parameters and query-string serialization

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Characters left intact when encoding a query value: `A-Z a-z 0-9 - _ . ! ~ * ' ( )`.
/// Matches what the Smartling dashboard itself sends for parameter values.
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// A single request parameter value.
///
/// Nested maps serialize with dot notation: `{"smartling": {"variants_enabled": true}}`
/// becomes `smartling.variants_enabled=true`.
#[derive(Clone, Debug, PartialEq)]
pub enum ParamValue {
    /// A string scalar
    String(String),
    /// A boolean scalar, stringified as `true`/`false`
    Bool(bool),
    /// An integer scalar
    Int(i64),
    /// A nested parameter map
    Nested(Params),
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<u32> for ParamValue {
    fn from(value: u32) -> Self {
        Self::Int(value as i64)
    }
}

impl From<Params> for ParamValue {
    fn from(value: Params) -> Self {
        Self::Nested(value)
    }
}

/// An insertion-ordered parameter map.
///
/// Keys keep the order they were first inserted in; no sorting is applied, so
/// callers must not depend on parameter order. Duplicate keys are allowed via
/// [`Params::append`] (the service reads list parameters such as `fileTypes`
/// as repeated query keys).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Params(Vec<(String, ParamValue)>);

impl Params {
    /// Create an empty parameter map
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `key` to `value`, replacing an existing entry in place or
    /// appending a new one.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<ParamValue>) {
        let key = key.into();
        let value = value.into();
        match self.0.iter().position(|(k, _)| *k == key) {
            Some(i) => self.0[i].1 = value,
            None => self.0.push((key, value)),
        }
    }

    /// Append `key=value` unconditionally, even if the key already exists
    pub fn append(&mut self, key: impl Into<String>, value: impl Into<ParamValue>) {
        self.0.push((key.into(), value.into()));
    }

    /// Overlay `other` on top of this map. Colliding keys are overwritten in
    /// place (keeping their original position); new keys are appended in
    /// `other`'s order.
    pub fn extend(&mut self, other: Params) {
        let base_len = self.0.len();
        for (key, value) in other.0 {
            // Only collide against the pre-existing entries so that repeated
            // keys carried by `other` survive the merge.
            match self.0[..base_len].iter().position(|(k, _)| *k == key) {
                Some(i) => self.0[i].1 = value,
                None => self.0.push((key, value)),
            }
        }
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the map has no entries
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &(String, ParamValue)> {
        self.0.iter()
    }

    /// Serialize to a query string.
    ///
    /// Scalar values are percent-encoded; nested maps recurse with their key
    /// as a dot-separated prefix. Keys are emitted verbatim: a literal `=`,
    /// `&`, or `.` inside a key produces ambiguous output, which some parser
    /// directive names depend on, so it is not escaped here.
    pub fn to_query_string(&self) -> String {
        let mut pairs = Vec::new();
        self.collect_pairs("", &mut pairs);
        pairs.join("&")
    }

    fn collect_pairs(&self, prefix: &str, out: &mut Vec<String>) {
        for (key, value) in &self.0 {
            let scalar = match value {
                ParamValue::Nested(inner) => {
                    inner.collect_pairs(&format!("{prefix}{key}."), out);
                    continue;
                }
                ParamValue::String(s) => s.clone(),
                ParamValue::Bool(b) => b.to_string(),
                ParamValue::Int(n) => n.to_string(),
            };
            out.push(format!(
                "{prefix}{key}={}",
                utf8_percent_encode(&scalar, QUERY_VALUE)
            ));
        }
    }
}
