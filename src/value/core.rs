use std::fmt;

use num_bigint::BigInt;

use crate::util::num::render_f64;

/// Represents a loosely-typed input handed to a coercer.
///
/// Only [`Value::Number`], [`Value::BigInt`] and [`Value::String`] can be
/// coerced. The remaining variants model everything else a caller might pass
/// so that rejection is explicit and reports what was actually found.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// The absent value. Coercers reject it as a missing argument.
    Null,
    /// A boolean.
    Boolean(bool),
    /// A double precision float.
    Number(f64),
    /// An arbitrary-precision integer.
    BigInt(BigInt),
    /// A string, parsed strictly as base-10.
    String(String),
    /// A symbol with its description.
    Symbol(String),
    /// A plain object.
    Object,
    /// A callable.
    Function,
    /// An array of values.
    Array(Vec<Self>),
    /// An instance of some other named class.
    Other(String),
}

macro_rules! number_from {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(v: $t) -> Self {
                    Self::Number(f64::from(v))
                }
            }
        )*
    };
}

number_from!(i8, u8, i16, u16, i32, u32, f32, f64);

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::BigInt(BigInt::from(v))
    }
}

impl From<u64> for Value {
    fn from(v: u64) -> Self {
        Self::BigInt(BigInt::from(v))
    }
}

impl From<i128> for Value {
    fn from(v: i128) -> Self {
        Self::BigInt(BigInt::from(v))
    }
}

impl From<BigInt> for Value {
    fn from(v: BigInt) -> Self {
        Self::BigInt(v)
    }
}

impl From<&BigInt> for Value {
    fn from(v: &BigInt) -> Self {
        Self::BigInt(v.clone())
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Boolean(v)
    }
}

impl From<Vec<Self>> for Value {
    fn from(v: Vec<Self>) -> Self {
        Self::Array(v)
    }
}

impl From<&Self> for Value {
    fn from(v: &Self) -> Self {
        v.clone()
    }
}

impl<T> From<Option<T>> for Value where T: Into<Self>
{
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Null, Into::into)
    }
}

impl Value {
    /// Builds a [`Value::BigInt`] from anything convertible to `BigInt`.
    ///
    /// `From<i64>` already produces a bigint; this is for the narrower
    /// integer types, which otherwise become numbers.
    ///
    /// # Example
    /// ```
    /// use num_bigint::BigInt;
    /// use strictnum::value::core::Value;
    ///
    /// assert_eq!(Value::bigint(7u32), Value::BigInt(BigInt::from(7)));
    /// assert_eq!(Value::from(7u32), Value::Number(7.0));
    /// ```
    pub fn bigint(v: impl Into<BigInt>) -> Self {
        Self::BigInt(v.into())
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => write!(f, "null"),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::Number(n) => write!(f, "{}", render_f64(*n)),
            Self::BigInt(n) => write!(f, "{n}n"),
            Self::String(s) => write!(f, "{s:?}"),
            Self::Symbol(description) => write!(f, "Symbol({description})"),
            Self::Object => write!(f, "[object Object]"),
            Self::Function => write!(f, "[function]"),
            Self::Array(values) => {
                write!(f, "[")?;
                for (i, v) in values.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{v}")?;
                }
                write!(f, "]")
            },
            Self::Other(name) => write!(f, "[object {name}]"),
        }
    }
}
