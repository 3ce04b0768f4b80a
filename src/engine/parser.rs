use std::str::FromStr;

use crate::{
    ast::{InfixOperator, Template, UnaryOperator},
    engine::lexer::{Token, lex},
    error::ParseError,
};

/// Lexes a whitespace-free word that must be exactly one token.
fn single_token(word: &str) -> Option<Token> {
    let mut tokens = lex(word)?;
    if tokens.len() == 1 { tokens.pop().map(|(token, _)| token) } else { None }
}

fn invalid(template: &str, reason: impl Into<String>) -> ParseError {
    ParseError::InvalidTemplate { template: template.to_string(),
                                  reason:   reason.into(), }
}

fn missing(template: &str) -> ParseError {
    ParseError::MissingOperator { template: template.to_string() }
}

fn unknown(word: &str, template: &str) -> ParseError {
    ParseError::UnknownOperator { token:    word.to_string(),
                                  template: template.to_string(), }
}

/// Lexes an operator word, failing with `MissingOperator` if it is empty or
/// an operand.
fn operator_token(word: &str, template: &str) -> Result<Option<Token>, ParseError> {
    let token = single_token(word);
    if word.is_empty() || token.as_ref().and_then(Token::literal).is_some() {
        return Err(missing(template));
    }
    Ok(token)
}

/// Reads an operand word.
fn parse_operand(word: &str, template: &str) -> Result<String, ParseError> {
    match single_token(word) {
        Some(Token::Literal(text)) => Ok(text),
        _ => Err(invalid(template, format!("expected an operand but found {word:?}"))),
    }
}

/// Reads an operator in infix position.
///
/// # Parameters
/// - `word`: The operator text, without surrounding whitespace.
/// - `template`: The whole template, for error messages.
///
/// # Returns
/// - `Ok(InfixOperator)`: An arithmetic or comparison operator.
/// - `Err(ParseError::MissingOperator)`: If `word` is empty or an operand.
/// - `Err(ParseError::UnknownOperator)`: Otherwise.
pub fn parse_infix_operator(word: &str, template: &str) -> Result<InfixOperator, ParseError> {
    operator_token(word, template)?.as_ref()
                                   .and_then(Token::infix)
                                   .ok_or_else(|| unknown(word, template))
}

/// Reads an operator in prefix position.
///
/// Fails like [`parse_infix_operator`], with only `-`, `+` and `~` accepted.
pub fn parse_prefix_operator(word: &str, template: &str) -> Result<UnaryOperator, ParseError> {
    operator_token(word, template)?.as_ref()
                                   .and_then(Token::prefix)
                                   .ok_or_else(|| unknown(word, template))
}

/// Reads a template made of a single word: an operand, or a prefix operator
/// glued to its operand (`~5`).
fn parse_word(word: &str, template: &str) -> Result<Template, ParseError> {
    let Some(tokens) = lex(word) else {
        return Err(invalid(template, format!("cannot read {word:?}")));
    };

    match tokens.as_slice() {
        [(Token::Literal(text), _)] => Ok(Template::Literal(text.clone())),
        [(Token::Literal(_), _), (Token::Literal(_), _)] => {
            Err(invalid(template, format!("{word:?} holds two operands without a separator")))
        },
        [(op, span), (Token::Literal(text), _)] => {
            let operator = op.prefix().ok_or_else(|| unknown(&word[span.clone()], template))?;
            Ok(Template::Unary { operator,
                                 operand: text.clone() })
        },
        [(token, _)] if token.prefix().is_some() || token.infix().is_some() => {
            Err(invalid(template, "operator without an operand"))
        },
        _ => Err(invalid(template, format!("cannot read {word:?}"))),
    }
}

/// Parses an operator template.
///
/// The source is trimmed and `_` digit separators are removed. Tokens are
/// separated by spaces or tabs; any other whitespace is rejected. Accepted
/// shapes are `<a>`, `<op><a>`, `<op> <a>`, `<a> <op> <b>` and
/// `<a> <cmp> <b>`.
///
/// # Parameters
/// - `source`: The template text, such as `"1_000 + 24"`.
///
/// # Returns
/// - `Ok(Template)`: The parsed template with its operand texts.
/// - `Err(ParseError)`: `MissingOperator` for adjacent operands,
///   `UnknownOperator` for anything in operator position that is not an
///   operator, `InvalidTemplate` for every other shape.
///
/// # Example
/// ```
/// use strictnum::{
///     ast::{BinaryOperator, Template},
///     engine::parser::parse_template,
///     error::ParseError,
/// };
///
/// let template = parse_template(" 1_000\t<< 2 ").unwrap();
/// assert_eq!(template,
///            Template::Binary { lhs:      "1000".into(),
///                               operator: BinaryOperator::Shl,
///                               rhs:      "2".into(), });
///
/// assert!(matches!(parse_template("1 2"), Err(ParseError::MissingOperator { .. })));
/// assert!(matches!(parse_template("1 ? 2"), Err(ParseError::UnknownOperator { .. })));
/// ```
pub fn parse_template(source: &str) -> Result<Template, ParseError> {
    let template = source.trim();

    if template.is_empty() {
        return Err(invalid(template, "the template is empty"));
    }
    if template.chars().any(|c| c.is_whitespace() && c != ' ' && c != '\t') {
        return Err(invalid(template, "only spaces and tabs may separate tokens"));
    }

    let cleaned = template.replace('_', "");
    let words: Vec<&str> = cleaned.split([' ', '\t']).filter(|w| !w.is_empty()).collect();

    match words.as_slice() {
        [] => Err(invalid(template, "the template is empty")),
        [word] => parse_word(word, template),
        [op, operand] => {
            if single_token(op).as_ref().and_then(Token::literal).is_some() {
                return match single_token(operand) {
                    Some(Token::Literal(_)) => Err(missing(template)),
                    _ => Err(invalid(template, "an operator must precede its operand")),
                };
            }
            let operator = parse_prefix_operator(op, template)?;
            let operand = parse_operand(operand, template)?;
            Ok(Template::Unary { operator, operand })
        },
        [lhs, op, rhs] => {
            let lhs = parse_operand(lhs, template)?;
            let operator = parse_infix_operator(op, template)?;
            let rhs = parse_operand(rhs, template)?;
            Ok(match operator {
                   InfixOperator::Arithmetic(operator) => Template::Binary { lhs, operator, rhs },
                   InfixOperator::Comparison(operator) => Template::Comparison { lhs, operator, rhs },
               })
        },
        _ => Err(invalid(template, format!("expected 1 to 3 tokens but found {}", words.len()))),
    }
}

impl FromStr for Template {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_template(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{BinaryOperator, ComparisonOperator};

    #[test]
    fn literal_and_unary_shapes() {
        assert_eq!(parse_template("42"), Ok(Template::Literal("42".into())));
        assert_eq!(parse_template("-42"), Ok(Template::Literal("-42".into())));
        assert_eq!(parse_template("~5"),
                   Ok(Template::Unary { operator: UnaryOperator::Not,
                                        operand:  "5".into(), }));
        assert_eq!(parse_template("- 5"),
                   Ok(Template::Unary { operator: UnaryOperator::Negate,
                                        operand:  "5".into(), }));
        assert_eq!(parse_template("+5"),
                   Ok(Template::Unary { operator: UnaryOperator::Plus,
                                        operand:  "5".into(), }));
    }

    #[test]
    fn separators_are_stripped_before_splitting() {
        assert_eq!(parse_template("1_000_000 + 2_000_000"),
                   Ok(Template::Binary { lhs:      "1000000".into(),
                                         operator: BinaryOperator::Add,
                                         rhs:      "2000000".into(), }));
    }

    #[test]
    fn comparisons_parse_separately() {
        assert_eq!(parse_template("1 !== 2"),
                   Ok(Template::Comparison { lhs:      "1".into(),
                                             operator: ComparisonOperator::StrictNotEqual,
                                             rhs:      "2".into(), }));
    }

    #[test]
    fn malformed_templates() {
        assert!(matches!(parse_template(""), Err(ParseError::InvalidTemplate { .. })));
        assert!(matches!(parse_template("   "), Err(ParseError::InvalidTemplate { .. })));
        assert!(matches!(parse_template("1\n+ 2"), Err(ParseError::InvalidTemplate { .. })));
        assert!(matches!(parse_template("1 + 2 + 3"), Err(ParseError::InvalidTemplate { .. })));
        assert!(matches!(parse_template("~"), Err(ParseError::InvalidTemplate { .. })));
        assert!(matches!(parse_template("5 ~"), Err(ParseError::InvalidTemplate { .. })));
        assert!(matches!(parse_template("1 + +"), Err(ParseError::InvalidTemplate { .. })));
        assert!(matches!(parse_template("5-3"), Err(ParseError::InvalidTemplate { .. })));
        assert!(matches!(parse_template("0x1-1"), Err(ParseError::InvalidTemplate { .. })));
        assert!(matches!(parse_template("1 2"), Err(ParseError::MissingOperator { .. })));
        assert!(matches!(parse_template("1 2 3"), Err(ParseError::MissingOperator { .. })));
        assert!(matches!(parse_template("* 5"), Err(ParseError::UnknownOperator { .. })));
        assert!(matches!(parse_template("*5"), Err(ParseError::UnknownOperator { .. })));
        assert!(matches!(parse_template("1 ~ 2"), Err(ParseError::UnknownOperator { .. })));
    }

    #[test]
    fn operator_words() {
        assert_eq!(parse_infix_operator(">>>", ""),
                   Ok(InfixOperator::Arithmetic(BinaryOperator::ShrUnsigned)));
        assert!(matches!(parse_infix_operator("", ""), Err(ParseError::MissingOperator { .. })));
        assert!(matches!(parse_prefix_operator("**", ""), Err(ParseError::UnknownOperator { .. })));
    }
}
