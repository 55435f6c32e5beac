
use super::operator::BinaryOp;

use std::fmt::{self, Display, Formatter};

/// Atomic lexical unit produced from raw expression text. Tokens are
/// immutable once produced.
///
/// A numeric literal keeps its original text; conversion to `f64`
/// only happens at evaluation time, where an unparsable literal
/// degrades to `NaN` rather than failing.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Token {
  /// A numeric literal: digits and at most one decimal point,
  /// optionally preceded by a lexically unary minus sign.
  Number(String),
  /// A binary operator.
  Operator(BinaryOp),
  /// An open parenthesis.
  LeftParen,
  /// A close parenthesis.
  RightParen,
}

impl Token {
  /// Convenience constructor for a [`Token::Number`].
  pub fn number(text: impl Into<String>) -> Token {
    Token::Number(text.into())
  }
}

impl From<BinaryOp> for Token {
  fn from(op: BinaryOp) -> Token {
    Token::Operator(op)
  }
}

impl Display for Token {
  fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), fmt::Error> {
    match self {
      Token::Number(text) => write!(f, "{text}"),
      Token::Operator(op) => write!(f, "{op}"),
      Token::LeftParen => write!(f, "("),
      Token::RightParen => write!(f, ")"),
    }
  }
}
