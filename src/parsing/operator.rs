
use std::fmt::{self, Display, Formatter};

/// The binding priority of a binary operator. Higher priorities bind
/// tighter during infix-to-postfix conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Priority(u8);

impl Priority {
  /// Priority of the additive operators `+` and `-`.
  pub const LOW: Priority = Priority(1);
  /// Priority of the multiplicative operators `×` and `÷`.
  pub const HIGH: Priority = Priority(2);
}

/// One of the four binary arithmetic operators understood by the
/// expression grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
  Add,
  Sub,
  Mul,
  Div,
}

impl BinaryOp {
  /// Recognizes an operator character. The ASCII spellings `*` and
  /// `/` are accepted as aliases for `×` and `÷` and map to the same
  /// operator.
  pub fn from_char(ch: char) -> Option<BinaryOp> {
    match ch {
      '+' => Some(BinaryOp::Add),
      '-' => Some(BinaryOp::Sub),
      '×' | '*' => Some(BinaryOp::Mul),
      '÷' | '/' => Some(BinaryOp::Div),
      _ => None,
    }
  }

  /// The character used when displaying the operator.
  pub fn symbol(self) -> char {
    match self {
      BinaryOp::Add => '+',
      BinaryOp::Sub => '-',
      BinaryOp::Mul => '×',
      BinaryOp::Div => '÷',
    }
  }

  /// `×` and `÷` bind tighter than `+` and `-`. Operators of equal
  /// priority pop left-to-right during conversion, which gives the
  /// whole grammar left associativity.
  pub fn priority(self) -> Priority {
    match self {
      BinaryOp::Add | BinaryOp::Sub => Priority::LOW,
      BinaryOp::Mul | BinaryOp::Div => Priority::HIGH,
    }
  }
}

impl Display for BinaryOp {
  fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), fmt::Error> {
    write!(f, "{}", self.symbol())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_from_char() {
    assert_eq!(BinaryOp::from_char('+'), Some(BinaryOp::Add));
    assert_eq!(BinaryOp::from_char('-'), Some(BinaryOp::Sub));
    assert_eq!(BinaryOp::from_char('×'), Some(BinaryOp::Mul));
    assert_eq!(BinaryOp::from_char('÷'), Some(BinaryOp::Div));
    assert_eq!(BinaryOp::from_char('('), None);
    assert_eq!(BinaryOp::from_char('2'), None);
    assert_eq!(BinaryOp::from_char('^'), None);
  }

  #[test]
  fn test_from_char_ascii_aliases() {
    assert_eq!(BinaryOp::from_char('*'), Some(BinaryOp::Mul));
    assert_eq!(BinaryOp::from_char('/'), Some(BinaryOp::Div));
  }

  #[test]
  fn test_priority_ordering() {
    assert!(Priority::HIGH > Priority::LOW);
    assert!(BinaryOp::Mul.priority() > BinaryOp::Add.priority());
    assert_eq!(BinaryOp::Add.priority(), BinaryOp::Sub.priority());
    assert_eq!(BinaryOp::Mul.priority(), BinaryOp::Div.priority());
  }

  #[test]
  fn test_display() {
    assert_eq!(BinaryOp::Add.to_string(), "+");
    assert_eq!(BinaryOp::Div.to_string(), "÷");
  }
}
