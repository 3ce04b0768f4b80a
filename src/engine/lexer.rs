use std::ops::Range;

use logos::Logos;

use crate::ast::{BinaryOperator, ComparisonOperator, InfixOperator, UnaryOperator};

/// Represents a lexical token of an operator template.
///
/// Operands are lexed loosely, as any run of letters, digits and dots with an
/// optional leading `-`, and validated later by the strict `i64` coercer.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
pub enum Token {
    /// Operand tokens, such as `42`, `-7` or `0x10` (the last is rejected on
    /// coercion).
    #[regex(r"-?[0-9A-Za-z.]+", |lex| lex.slice().to_string())]
    Literal(String),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `**`
    #[token("**")]
    StarStar,
    /// `/`
    #[token("/")]
    Slash,
    /// `%`
    #[token("%")]
    Percent,
    /// `%%`
    #[token("%%")]
    PercentPercent,
    /// `&`
    #[token("&")]
    Ampersand,
    /// `|`
    #[token("|")]
    Pipe,
    /// `^`
    #[token("^")]
    Caret,
    /// `~`
    #[token("~")]
    Tilde,
    /// `<<`
    #[token("<<")]
    LessLess,
    /// `>>`
    #[token(">>")]
    GreaterGreater,
    /// `>>>`
    #[token(">>>")]
    GreaterGreaterGreater,
    /// `<`
    #[token("<")]
    Less,
    /// `>`
    #[token(">")]
    Greater,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `===`
    #[token("===")]
    EqualEqualEqual,
    /// `!==`
    #[token("!==")]
    BangEqualEqual,
    /// Spaces and tabs.
    #[regex(r"[ \t]+", logos::skip)]
    Ignored,
}

impl Token {
    /// The operand text, if this is an operand.
    #[must_use]
    pub fn literal(&self) -> Option<&str> {
        match self {
            Self::Literal(text) => Some(text.as_str()),
            _ => None,
        }
    }

    /// The prefix operator this token denotes, if any.
    #[must_use]
    pub const fn prefix(&self) -> Option<UnaryOperator> {
        match self {
            Self::Minus => Some(UnaryOperator::Negate),
            Self::Plus => Some(UnaryOperator::Plus),
            Self::Tilde => Some(UnaryOperator::Not),
            _ => None,
        }
    }

    /// The infix operator this token denotes, if any.
    #[must_use]
    pub const fn infix(&self) -> Option<InfixOperator> {
        use BinaryOperator as B;
        use ComparisonOperator as C;
        use InfixOperator::{Arithmetic, Comparison};

        let op = match self {
            Self::Plus => Arithmetic(B::Add),
            Self::Minus => Arithmetic(B::Sub),
            Self::Star => Arithmetic(B::Mul),
            Self::StarStar => Arithmetic(B::Pow),
            Self::Slash => Arithmetic(B::Div),
            Self::Percent => Arithmetic(B::Rem),
            Self::PercentPercent => Arithmetic(B::Mod),
            Self::Ampersand => Arithmetic(B::And),
            Self::Pipe => Arithmetic(B::Or),
            Self::Caret => Arithmetic(B::Xor),
            Self::LessLess => Arithmetic(B::Shl),
            Self::GreaterGreater => Arithmetic(B::Shr),
            Self::GreaterGreaterGreater => Arithmetic(B::ShrUnsigned),
            Self::Less => Comparison(C::Less),
            Self::Greater => Comparison(C::Greater),
            Self::LessEqual => Comparison(C::LessEqual),
            Self::GreaterEqual => Comparison(C::GreaterEqual),
            Self::EqualEqual => Comparison(C::Equal),
            Self::BangEqual => Comparison(C::NotEqual),
            Self::EqualEqualEqual => Comparison(C::StrictEqual),
            Self::BangEqualEqual => Comparison(C::StrictNotEqual),
            Self::Literal(_) | Self::Tilde | Self::Ignored => return None,
        };
        Some(op)
    }
}

/// Splits `source` into tokens with their byte spans.
///
/// # Returns
/// - `Some(tokens)`: Every character belongs to a token or is a space or tab.
/// - `None`: Some character could not be lexed.
///
/// # Example
/// ```
/// use strictnum::engine::lexer::{Token, lex};
///
/// let tokens = lex("~-5").unwrap();
/// assert_eq!(tokens[0].0, Token::Tilde);
/// assert_eq!(tokens[1].0, Token::Literal("-5".into()));
/// assert!(lex("1 $ 2").is_none());
/// ```
#[must_use]
pub fn lex(source: &str) -> Option<Vec<(Token, Range<usize>)>> {
    Token::lexer(source).spanned()
                        .map(|(token, span)| token.ok().map(|t| (t, span)))
                        .collect()
}
