use std::fmt;

/// An infix operator of the 64-bit engine.
///
/// Every operator maps onto one [`I64`](crate::engine::ops::I64) operation,
/// and every result is wrapped to 64 bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`, truncating toward zero.
    Div,
    /// `%`, remainder with the sign of the dividend.
    Rem,
    /// `%%`, modulo with the sign of the divisor.
    Mod,
    /// `**`
    Pow,
    /// `&`
    And,
    /// `|`
    Or,
    /// `^`
    Xor,
    /// `<<`
    Shl,
    /// `>>`, sign-preserving.
    Shr,
    /// `>>>`, zero-filling.
    ShrUnsigned,
}

/// A prefix operator of the 64-bit engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOperator {
    /// `-`
    Negate,
    /// `+`, which only wraps its operand.
    Plus,
    /// `~`
    Not,
}

/// A comparison operator.
///
/// `===` and `!==` behave exactly like `==` and `!=`; operands are always
/// compared as 64-bit integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComparisonOperator {
    /// `<`
    Less,
    /// `>`
    Greater,
    /// `<=`
    LessEqual,
    /// `>=`
    GreaterEqual,
    /// `==`
    Equal,
    /// `!=`
    NotEqual,
    /// `===`
    StrictEqual,
    /// `!==`
    StrictNotEqual,
}

/// An operator read in infix position, before it is known which evaluator
/// can handle it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InfixOperator {
    /// An arithmetic, bitwise or shift operator.
    Arithmetic(BinaryOperator),
    /// A comparison operator.
    Comparison(ComparisonOperator),
}

/// A parsed operator template.
///
/// Operands are kept as the literal text, already stripped of `_`
/// separators. They are coerced only when the template is evaluated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Template {
    /// A bare operand, such as `"42"`.
    Literal(String),
    /// `<op><operand>` or `<op> <operand>`.
    Unary {
        /// The prefix operator.
        operator: UnaryOperator,
        /// The operand text.
        operand:  String,
    },
    /// `<lhs> <op> <rhs>` with an arithmetic or bitwise operator.
    Binary {
        /// The left operand text.
        lhs:      String,
        /// The infix operator.
        operator: BinaryOperator,
        /// The right operand text.
        rhs:      String,
    },
    /// `<lhs> <cmp> <rhs>` with a comparison operator.
    Comparison {
        /// The left operand text.
        lhs:      String,
        /// The comparison operator.
        operator: ComparisonOperator,
        /// The right operand text.
        rhs:      String,
    },
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Rem => "%",
            Self::Mod => "%%",
            Self::Pow => "**",
            Self::And => "&",
            Self::Or => "|",
            Self::Xor => "^",
            Self::Shl => "<<",
            Self::Shr => ">>",
            Self::ShrUnsigned => ">>>",
        };
        write!(f, "{symbol}")
    }
}

impl fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Negate => write!(f, "-"),
            Self::Plus => write!(f, "+"),
            Self::Not => write!(f, "~"),
        }
    }
}

impl fmt::Display for ComparisonOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Self::Less => "<",
            Self::Greater => ">",
            Self::LessEqual => "<=",
            Self::GreaterEqual => ">=",
            Self::Equal => "==",
            Self::NotEqual => "!=",
            Self::StrictEqual => "===",
            Self::StrictNotEqual => "!==",
        };
        write!(f, "{symbol}")
    }
}

impl fmt::Display for InfixOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Arithmetic(op) => write!(f, "{op}"),
            Self::Comparison(op) => write!(f, "{op}"),
        }
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(operand) => write!(f, "{operand}"),
            Self::Unary { operator, operand } => write!(f, "{operator}{operand}"),
            Self::Binary { lhs, operator, rhs } => write!(f, "{lhs} {operator} {rhs}"),
            Self::Comparison { lhs, operator, rhs } => write!(f, "{lhs} {operator} {rhs}"),
        }
    }
}
