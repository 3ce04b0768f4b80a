use std::fmt;

use crate::value::core::Value;

/// The kind tag of a [`Value`].
///
/// Tags are rendered in lowercase (`null`, `number`, `bigint`, ...) except
/// for [`Kind::Other`], which renders the class name it carries.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Kind {
    /// The absent value.
    Null,
    /// `true` or `false`.
    Boolean,
    /// A double precision float.
    Number,
    /// An arbitrary-precision integer.
    BigInt,
    /// A string.
    String,
    /// A unique symbol.
    Symbol,
    /// A plain object.
    Object,
    /// A callable.
    Function,
    /// An array.
    Array,
    /// Any other class, identified by name (for example `Date`).
    Other(String),
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            Self::Null => "null",
            Self::Boolean => "boolean",
            Self::Number => "number",
            Self::BigInt => "bigint",
            Self::String => "string",
            Self::Symbol => "symbol",
            Self::Object => "object",
            Self::Function => "function",
            Self::Array => "array",
            Self::Other(name) => name,
        };
        write!(f, "{tag}")
    }
}

impl Value {
    /// Classifies the value.
    ///
    /// # Example
    /// ```
    /// use strictnum::value::{core::Value, kind::Kind};
    ///
    /// assert_eq!(Value::from(1.5).kind(), Kind::Number);
    /// assert_eq!(Value::from("12").kind(), Kind::String);
    /// assert_eq!(Value::Null.kind().to_string(), "null");
    /// assert_eq!(Value::Other("Date".into()).kind().to_string(), "Date");
    /// ```
    #[must_use]
    pub fn kind(&self) -> Kind {
        match self {
            Self::Null => Kind::Null,
            Self::Boolean(_) => Kind::Boolean,
            Self::Number(_) => Kind::Number,
            Self::BigInt(_) => Kind::BigInt,
            Self::String(_) => Kind::String,
            Self::Symbol(_) => Kind::Symbol,
            Self::Object => Kind::Object,
            Self::Function => Kind::Function,
            Self::Array(_) => Kind::Array,
            // An empty class name carries no information.
            Self::Other(name) if name.is_empty() => Kind::Object,
            Self::Other(name) => Kind::Other(name.clone()),
        }
    }
}
