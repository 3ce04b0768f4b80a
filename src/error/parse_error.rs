use thiserror::Error;

/// Represents all errors that can occur while reading an operator template.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Operands with no operator between them, or an empty operator.
    #[error("missing operator in {template:?}")]
    MissingOperator {
        /// The template as written.
        template: String,
    },
    /// A token in operator position that is not an operator.
    #[error("unknown operator {token:?} in {template:?}")]
    UnknownOperator {
        /// The offending token.
        token:    String,
        /// The template as written.
        template: String,
    },
    /// The template does not have the shape of an expression.
    #[error("invalid template {template:?}: {reason}")]
    InvalidTemplate {
        /// The template as written.
        template: String,
        /// What is wrong with it.
        reason:   String,
    },
    /// A comparison was given where an arithmetic expression was expected.
    #[error("{operator:?} is a comparison; use test() to evaluate it")]
    ExpectedArithmetic {
        /// The comparison operator.
        operator: String,
    },
    /// An arithmetic expression was given where a comparison was expected.
    #[error("expected a comparison operator but found {operator:?}")]
    ExpectedComparison {
        /// The operator found instead, empty for a bare operand.
        operator: String,
    },
}
