use serde::{Deserialize, Serialize};

/// Meta value object recording where a value was read from
///
/// Line numbers are 1-based and refer to the source document the
/// surrounding parser consumed. The licence model never interprets them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Meta {
    line_start: usize,
    line_end: usize,
}

impl Meta {
    pub fn new(line_start: usize, line_end: usize) -> Self {
        Self {
            line_start,
            line_end,
        }
    }

    /// Metadata for a value spanning a single line
    pub fn line(line: usize) -> Self {
        Self::new(line, line)
    }

    pub fn line_start(&self) -> usize {
        self.line_start
    }

    pub fn line_end(&self) -> usize {
        self.line_end
    }
}

/// Value port: a string value with attached provenance
pub trait Value {
    /// The string value exactly as stored
    fn v(&self) -> &str;

    /// Metadata attached to the value, if any
    fn m(&self) -> Option<&Meta>;
}

/// ValueStr - a string carrying its provenance metadata
///
/// Equality and hashing consider the string only, so two values read from
/// different places of a document compare equal when their text does.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "ValueStrRepr", into = "ValueStrRepr")]
pub struct ValueStr {
    val: String,
    meta: Option<Meta>,
}

impl ValueStr {
    pub fn new(val: impl Into<String>, meta: Option<Meta>) -> Self {
        Self {
            val: val.into(),
            meta,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.val.is_empty()
    }
}

impl Value for ValueStr {
    fn v(&self) -> &str {
        &self.val
    }

    fn m(&self) -> Option<&Meta> {
        self.meta.as_ref()
    }
}

impl PartialEq for ValueStr {
    fn eq(&self, other: &Self) -> bool {
        self.val == other.val
    }
}

impl Eq for ValueStr {}

impl std::hash::Hash for ValueStr {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.val.hash(state);
    }
}

impl std::fmt::Display for ValueStr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.val)
    }
}

impl From<&str> for ValueStr {
    fn from(val: &str) -> Self {
        Self::new(val, None)
    }
}

impl From<String> for ValueStr {
    fn from(val: String) -> Self {
        Self::new(val, None)
    }
}

/// Wire form: a bare string, or an object when metadata is attached
#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum ValueStrRepr {
    Plain(String),
    WithMeta {
        value: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        meta: Option<Meta>,
    },
}

impl From<ValueStrRepr> for ValueStr {
    fn from(repr: ValueStrRepr) -> Self {
        match repr {
            ValueStrRepr::Plain(val) => Self::new(val, None),
            ValueStrRepr::WithMeta { value, meta } => Self::new(value, meta),
        }
    }
}

impl From<ValueStr> for ValueStrRepr {
    fn from(value: ValueStr) -> Self {
        match value.meta {
            None => ValueStrRepr::Plain(value.val),
            Some(meta) => ValueStrRepr::WithMeta {
                value: value.val,
                meta: Some(meta),
            },
        }
    }
}
