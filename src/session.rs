
//! Stateful facade over the tokenize → convert → evaluate pipeline.

use crate::error::Error;
use crate::eval::evaluate;
use crate::parsing::postfix::{to_postfix, ParseError, PostfixSequence};

use tracing::warn;

/// Holds an input expression together with its last parsed postfix
/// form, so unchanged input is never parsed twice.
///
/// Each session is an independently constructible value; there is no
/// shared global parser instance. A session is confined to one
/// logical owner at a time, and a host that shares sessions across
/// threads provides its own synchronization.
///
/// The session is effectively a two-state machine. It is *fresh* when
/// the stored postfix form corresponds to the current input (a failed
/// parse is a valid resting state), and *stale* after
/// [`set_expression`](ExpressionSession::set_expression) changes the
/// input. [`calc`](ExpressionSession::calc) repairs staleness by
/// re-parsing before it evaluates.
#[derive(Clone, Debug)]
pub struct ExpressionSession {
  input: String,
  last_parsed: Option<String>,
  parsed: Result<PostfixSequence, ParseError>,
}

impl ExpressionSession {

  /// A session with a blank input expression.
  pub fn new() -> Self {
    Self::with_expression("")
  }

  /// A session with the given initial expression. The expression is
  /// not parsed until [`parse`](ExpressionSession::parse) or
  /// [`calc`](ExpressionSession::calc) is called.
  pub fn with_expression(text: impl Into<String>) -> Self {
    Self {
      input: text.into(),
      last_parsed: None,
      parsed: Err(ParseError::EmptyExpression),
    }
  }

  /// The current input text.
  pub fn expression(&self) -> &str {
    &self.input
  }

  /// Replaces the input text without parsing it. The stored postfix
  /// form and validity flag keep describing the previously parsed
  /// text until the next [`parse`](ExpressionSession::parse) or
  /// [`calc`](ExpressionSession::calc).
  pub fn set_expression(&mut self, text: impl Into<String>) {
    self.input = text.into();
  }

  /// Parses the current input, records it as the last-parsed text,
  /// and returns the validity flag. Parsing unchanged text twice
  /// yields the same postfix form and validity with no other
  /// observable effect.
  pub fn parse(&mut self) -> bool {
    self.parsed = to_postfix(&self.input);
    self.last_parsed = Some(self.input.clone());
    if let Err(err) = &self.parsed {
      warn!("failed to parse expression {:?}: {err}", self.input);
    }
    self.parsed.is_ok()
  }

  /// Whether the most recent parse succeeded, without re-parsing.
  /// Before the first parse this is `false`.
  pub fn is_valid(&self) -> bool {
    self.parsed.is_ok()
  }

  /// Evaluates the current expression to an `f64`.
  ///
  /// If the input changed since the last parse (or was never parsed),
  /// the session re-parses first. When the parse failed, the stored
  /// [`ParseError`] is returned; callers that checked
  /// [`is_valid`](ExpressionSession::is_valid) after a parse never
  /// see it.
  pub fn calc(&mut self) -> Result<f64, Error> {
    if self.last_parsed.as_deref() != Some(self.input.as_str()) {
      self.parse();
    }
    match &self.parsed {
      Ok(postfix) => Ok(evaluate(postfix)?),
      Err(err) => Err(err.clone().into()),
    }
  }
}

impl Default for ExpressionSession {
  fn default() -> Self {
    Self::new()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::eval::EvalError;

  use approx::assert_abs_diff_eq;

  #[test]
  fn test_calc_auto_repairs_staleness() {
    let mut session = ExpressionSession::new();
    session.set_expression("1+1");
    // No explicit parse() call.
    assert_abs_diff_eq!(session.calc().unwrap(), 2.0);
    assert!(session.is_valid());
  }

  #[test]
  fn test_with_expression_initial_text() {
    let mut session = ExpressionSession::with_expression("2 + 3 × 4");
    assert_eq!(session.expression(), "2 + 3 × 4");
    assert_abs_diff_eq!(session.calc().unwrap(), 14.0);
  }

  #[test]
  fn test_parse_is_idempotent() {
    let mut session = ExpressionSession::with_expression("(2 + 3) × 4");
    assert!(session.parse());
    let first = session.parsed.clone();
    assert!(session.parse());
    assert_eq!(session.parsed, first);
    assert_abs_diff_eq!(session.calc().unwrap(), 20.0);
  }

  #[test]
  fn test_fresh_invalid_is_a_resting_state() {
    let mut session = ExpressionSession::with_expression("2 + a");
    assert!(!session.parse());
    assert!(!session.is_valid());
    assert_eq!(
      session.calc(),
      Err(Error::Parse(ParseError::ForbiddenCharacter('a'))),
    );
  }

  #[test]
  fn test_set_expression_does_not_reparse() {
    let mut session = ExpressionSession::with_expression("1+1");
    assert!(session.parse());
    session.set_expression("2 + a");
    // Validity still describes the previously parsed text.
    assert!(session.is_valid());
    // The next calc() detects the stale input and re-parses.
    assert!(session.calc().is_err());
    assert!(!session.is_valid());
  }

  #[test]
  fn test_recovery_after_invalid_input() {
    let mut session = ExpressionSession::with_expression("2 + a");
    assert!(!session.parse());
    session.set_expression("2 + 2");
    assert_abs_diff_eq!(session.calc().unwrap(), 4.0);
    assert!(session.is_valid());
  }

  #[test]
  fn test_calc_is_deterministic() {
    let mut session = ExpressionSession::with_expression("9 ÷ (1 + 2)");
    let first = session.calc().unwrap();
    let second = session.calc().unwrap();
    assert_abs_diff_eq!(first, second);
    assert_abs_diff_eq!(first, 3.0);
  }

  #[test]
  fn test_calc_surfaces_division_by_zero() {
    let mut session = ExpressionSession::with_expression("5 ÷ 0");
    assert!(session.parse());
    assert_eq!(session.calc(), Err(Error::Eval(EvalError::DivisionByZero)));
  }

  #[test]
  fn test_empty_session_is_invalid() {
    let mut session = ExpressionSession::new();
    assert!(!session.parse());
    assert_eq!(
      session.calc(),
      Err(Error::Parse(ParseError::EmptyExpression)),
    );
  }

  #[test]
  fn test_sessions_are_independent() {
    let mut first = ExpressionSession::with_expression("1+1");
    let mut second = ExpressionSession::with_expression("2 + a");
    assert_abs_diff_eq!(first.calc().unwrap(), 2.0);
    assert!(!second.parse());
    assert!(first.is_valid());
    assert!(!second.is_valid());
  }
}
