//! The value model for template variables.
//! Every context variable holds one of a fixed set of shapes: a scalar,
//! a flat sequence, a once-nested sequence, or image references. Format
//! specs pattern-match on the variant and fail closed on anything else.

use serde::Deserialize;
use std::fmt;

/// A single scalar value: string, integer, boolean or null.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Null,
    Bool(bool),
    Int(i64),
    Str(String),
}

impl Scalar {
    /// Truthiness: null, empty string, 0 and false are falsy.
    pub fn truthy(&self) -> bool {
        match self {
            Scalar::Null => false,
            Scalar::Bool(b) => *b,
            Scalar::Int(n) => *n != 0,
            Scalar::Str(s) => !s.is_empty(),
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Null => Ok(()),
            Scalar::Bool(b) => write!(f, "{}", b),
            Scalar::Int(n) => write!(f, "{}", n),
            Scalar::Str(s) => f.write_str(s),
        }
    }
}

impl From<&str> for Scalar {
    fn from(s: &str) -> Self {
        Scalar::Str(s.to_string())
    }
}

impl From<String> for Scalar {
    fn from(s: String) -> Self {
        Scalar::Str(s)
    }
}

/// A preview image: the page it links to and the thumbnail source.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ImageRef {
    pub url: String,
    pub src: String,
}

/// A template variable's value.
///
/// Sequences nest exactly one level deep: `Nested` holds groups of
/// scalars (e.g. the multi-line description of each video track) and
/// there is no deeper shape.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Scalar(Scalar),
    Image(ImageRef),
    Sequence(Vec<Scalar>),
    Images(Vec<ImageRef>),
    Nested(Vec<Vec<Scalar>>),
}

impl Value {
    /// Truthiness as used by boolean specs and conditional blocks:
    /// falsy scalars and empty sequences are false, everything else true.
    pub fn truthy(&self) -> bool {
        match self {
            Value::Scalar(s) => s.truthy(),
            Value::Image(_) => true,
            Value::Sequence(items) => !items.is_empty(),
            Value::Images(items) => !items.is_empty(),
            Value::Nested(groups) => !groups.is_empty(),
        }
    }

    /// Variant name used in type mismatch errors.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Scalar(Scalar::Null) => "null",
            Value::Scalar(Scalar::Bool(_)) => "a boolean",
            Value::Scalar(Scalar::Int(_)) => "an integer",
            Value::Scalar(Scalar::Str(_)) => "a string",
            Value::Image(_) => "an image reference",
            Value::Sequence(_) => "a sequence",
            Value::Images(_) => "an image sequence",
            Value::Nested(_) => "a nested sequence",
        }
    }
}

impl From<Scalar> for Value {
    fn from(s: Scalar) -> Self {
        Value::Scalar(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Scalar(Scalar::from(s))
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Scalar(Scalar::from(s))
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Scalar(Scalar::Int(n))
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Scalar(Scalar::Bool(b))
    }
}
