use std::fmt;

/// Identifies a fixed-width integer representation.
///
/// `IntWidth` is the boundary table of the crate: every range check looks up
/// the inclusive `[min, max]` pair of its target width here. Bounds are
/// returned as `i128`, which holds both `i64::MIN` and `u64::MAX` exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntWidth {
    /// 8-bit signed.
    I8,
    /// 8-bit unsigned.
    U8,
    /// 16-bit signed.
    I16,
    /// 16-bit unsigned.
    U16,
    /// 32-bit signed.
    I32,
    /// 32-bit unsigned.
    U32,
    /// 64-bit signed.
    I64,
    /// 64-bit unsigned.
    U64,
}

impl IntWidth {
    /// Number of bits in the representation.
    #[must_use]
    pub const fn bits(self) -> u32 {
        match self {
            Self::I8 | Self::U8 => 8,
            Self::I16 | Self::U16 => 16,
            Self::I32 | Self::U32 => 32,
            Self::I64 | Self::U64 => 64,
        }
    }

    /// Whether the representation is two's-complement signed.
    #[must_use]
    pub const fn is_signed(self) -> bool {
        matches!(self, Self::I8 | Self::I16 | Self::I32 | Self::I64)
    }

    /// Smallest representable value (inclusive).
    ///
    /// # Example
    /// ```
    /// use strictnum::width::IntWidth;
    ///
    /// assert_eq!(IntWidth::I32.min(), -2_147_483_648);
    /// assert_eq!(IntWidth::U64.min(), 0);
    /// ```
    #[must_use]
    pub const fn min(self) -> i128 {
        if self.is_signed() {
            -(1i128 << (self.bits() - 1))
        } else {
            0
        }
    }

    /// Largest representable value (inclusive).
    ///
    /// # Example
    /// ```
    /// use strictnum::width::IntWidth;
    ///
    /// assert_eq!(IntWidth::I64.max(), i128::from(i64::MAX));
    /// assert_eq!(IntWidth::U64.max(), i128::from(u64::MAX));
    /// ```
    #[must_use]
    pub const fn max(self) -> i128 {
        if self.is_signed() {
            (1i128 << (self.bits() - 1)) - 1
        } else {
            (1i128 << self.bits()) - 1
        }
    }

    /// Decimal rendering of [`IntWidth::min`], for string fast paths.
    #[must_use]
    pub const fn min_str(self) -> &'static str {
        match self {
            Self::I8 => "-128",
            Self::I16 => "-32768",
            Self::I32 => "-2147483648",
            Self::I64 => "-9223372036854775808",
            Self::U8 | Self::U16 | Self::U32 | Self::U64 => "0",
        }
    }

    /// Decimal rendering of [`IntWidth::max`].
    #[must_use]
    pub const fn max_str(self) -> &'static str {
        match self {
            Self::I8 => "127",
            Self::U8 => "255",
            Self::I16 => "32767",
            Self::U16 => "65535",
            Self::I32 => "2147483647",
            Self::U32 => "4294967295",
            Self::I64 => "9223372036854775807",
            Self::U64 => "18446744073709551615",
        }
    }

    /// Human readable description used in range error messages, such as
    /// `32-bit signed integer`.
    #[must_use]
    pub const fn describe(self) -> &'static str {
        match self {
            Self::I8 => "8-bit signed integer",
            Self::U8 => "8-bit unsigned integer",
            Self::I16 => "16-bit signed integer",
            Self::U16 => "16-bit unsigned integer",
            Self::I32 => "32-bit signed integer",
            Self::U32 => "32-bit unsigned integer",
            Self::I64 => "64-bit signed integer",
            Self::U64 => "64-bit unsigned integer",
        }
    }
}

impl fmt::Display for IntWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::I8 => "i8",
            Self::U8 => "u8",
            Self::I16 => "i16",
            Self::U16 => "u16",
            Self::I32 => "i32",
            Self::U32 => "u32",
            Self::I64 => "i64",
            Self::U64 => "u64",
        };
        write!(f, "{name}")
    }
}

/// The representation a coercer produces.
///
/// Displays as the name of the coercer that targets it (`coerce_i32()`), which
/// prefixes every coercion error message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    /// A fixed-width integer.
    Int(IntWidth),
    /// A double precision float.
    F64,
}

impl Target {
    /// Description of the accepted integer range, used in range errors.
    #[must_use]
    pub const fn describe(self) -> &'static str {
        match self {
            Self::Int(width) => width.describe(),
            Self::F64 => "64-bit float safe-integer range",
        }
    }
}

impl From<IntWidth> for Target {
    fn from(width: IntWidth) -> Self {
        Self::Int(width)
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(width) => write!(f, "coerce_{width}()"),
            Self::F64 => write!(f, "coerce_f64()"),
        }
    }
}

/// Names one end of an integer range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    /// The inclusive lower bound was undercut.
    Min,
    /// The inclusive upper bound was exceeded.
    Max,
}

impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Min => write!(f, "minimum"),
            Self::Max => write!(f, "maximum"),
        }
    }
}
