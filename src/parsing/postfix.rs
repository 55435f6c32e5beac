
//! Infix-to-postfix conversion via the shunting-yard algorithm.

use super::token::Token;
use super::tokenizer::tokenize;
use crate::stack::Stack;

use itertools::Itertools;
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use std::fmt::{self, Display, Formatter};

/// Structural problems detected while converting an infix expression
/// to postfix form. These surface through the session as a boolean
/// validity flag, never as a panic.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ParseError {
  #[error("forbidden character {0:?} in expression")]
  ForbiddenCharacter(char),
  #[error("unmatched parenthesis")]
  UnmatchedParenthesis,
  #[error("expression is empty")]
  EmptyExpression,
}

/// A token sequence in Reverse Polish order, as produced by
/// [`to_postfix`].
///
/// A value of this type contains only number and operator tokens;
/// parentheses never survive conversion. Degenerate operator
/// placement that the converter deliberately lets through (a trailing
/// operator, for instance) degrades to `NaN` or a typed error at
/// evaluation time instead of corrupting the value stack.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PostfixSequence {
  tokens: Vec<Token>,
}

impl PostfixSequence {
  /// Iterates over the tokens in evaluation order.
  pub fn iter(&self) -> impl Iterator<Item = &Token> {
    self.tokens.iter()
  }

  pub fn len(&self) -> usize {
    self.tokens.len()
  }

  pub fn is_empty(&self) -> bool {
    self.tokens.is_empty()
  }
}

impl From<Vec<Token>> for PostfixSequence {
  fn from(tokens: Vec<Token>) -> Self {
    Self { tokens }
  }
}

/// Renders the sequence as a space-delimited RPN string, e.g.
/// `"2 3 4 × +"`.
impl Display for PostfixSequence {
  fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), fmt::Error> {
    write!(f, "{}", self.tokens.iter().map(Token::to_string).join(" "))
  }
}

/// Matches any character outside the accepted expression alphabet:
/// digits, `.`, the four operators (with their ASCII spellings),
/// parentheses, and whitespace.
static FORBIDDEN: Lazy<Regex> = Lazy::new(|| {
  Regex::new(r"[^0-9.+\-×÷*/()\s]").unwrap()
});

/// Converts an infix expression string to a [`PostfixSequence`] using
/// an operator-priority stack.
///
/// Single pass and O(n) in token count; the stack depth is bounded by
/// the parenthesis nesting depth plus the number of pending
/// operators. Rejects expressions containing characters outside the
/// accepted alphabet, expressions with unmatched parentheses, and
/// expressions whose output would be empty (blank input, bare
/// parentheses).
pub fn to_postfix(expression: &str) -> Result<PostfixSequence, ParseError> {
  if let Some(m) = FORBIDDEN.find(expression) {
    // unwrap: the regex never produces an empty match.
    let ch = m.as_str().chars().next().unwrap();
    return Err(ParseError::ForbiddenCharacter(ch));
  }

  let mut output: Vec<Token> = Vec::new();
  let mut stack: Stack<Token> = Stack::new();

  for token in tokenize(expression) {
    match token {
      Token::Number(_) => output.push(token),
      Token::Operator(op) => {
        // Pop operators of greater or equal priority before pushing
        // this one; ties go to the earlier operator, which is what
        // makes the grammar left-associative. An open parenthesis on
        // the stack acts as a barrier.
        while let Ok(top) = stack.pop() {
          match top {
            Token::Operator(stack_op) if stack_op.priority() >= op.priority() => {
              output.push(Token::Operator(stack_op));
            }
            _ => {
              stack.push(top);
              break;
            }
          }
        }
        stack.push(Token::Operator(op));
      }
      Token::LeftParen => stack.push(token),
      Token::RightParen => loop {
        match stack.pop() {
          Ok(Token::LeftParen) => break,
          Ok(token) => output.push(token),
          Err(_) => return Err(ParseError::UnmatchedParenthesis),
        }
      },
    }
  }

  while let Ok(token) = stack.pop() {
    if token == Token::LeftParen {
      return Err(ParseError::UnmatchedParenthesis);
    }
    output.push(token);
  }

  // The tokenizer's final flush leaves an empty literal at the end of
  // the output when the expression ended on a close parenthesis or
  // was blank. Trim it here so it never reaches the evaluator.
  while matches!(output.last(), Some(Token::Number(text)) if text.is_empty()) {
    output.pop();
  }

  if output.is_empty() {
    return Err(ParseError::EmptyExpression);
  }

  Ok(PostfixSequence { tokens: output })
}
