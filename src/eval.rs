
//! Postfix evaluation over a numeric value stack.

use crate::parsing::operator::BinaryOp;
use crate::parsing::postfix::PostfixSequence;
use crate::parsing::token::Token;
use crate::stack::{Stack, StackError};

use thiserror::Error;
use tracing::warn;

/// Runtime problems encountered while evaluating a postfix sequence.
/// Any of these aborts the whole evaluation; the value stack is never
/// left desynchronized for later operators.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum EvalError {
  #[error("division by zero")]
  DivisionByZero,
  #[error("unexpected token {0:?} in postfix sequence")]
  UnexpectedToken(Token),
  #[error("{0}")]
  StackError(#[from] StackError),
}

/// Evaluates a postfix token sequence to a single `f64`.
///
/// Numeric anomalies short of division by zero follow ordinary
/// floating-point semantics: an unparsable or empty literal becomes
/// `NaN` and propagates through the arithmetic. Division whose
/// divisor is zero aborts the evaluation with
/// [`EvalError::DivisionByZero`], and an operator that cannot find
/// two operands aborts with a [`StackError`].
pub fn evaluate(postfix: &PostfixSequence) -> Result<f64, EvalError> {
  let mut stack: Stack<f64> = Stack::new();

  for token in postfix.iter() {
    match token {
      Token::Number(text) => {
        stack.push(text.parse().unwrap_or(f64::NAN));
      }
      Token::Operator(op) => {
        let operands = stack.pop_several(2)?;
        // Operands apply in their original left-to-right order, even
        // though the right-hand one was pushed last.
        stack.push(apply(*op, operands[0], operands[1])?);
      }
      token => {
        // Parentheses never survive conversion, so seeing one here
        // means the sequence did not come from the converter.
        return Err(EvalError::UnexpectedToken(token.clone()));
      }
    }
  }

  Ok(stack.pop()?)
}

/// Applies a binary operator to its operands, left operand first.
///
/// The zero check targets the true mathematical divisor, the
/// right-hand operand. A `NaN` divisor is not zero and falls through
/// to ordinary `f64` division.
fn apply(op: BinaryOp, x: f64, y: f64) -> Result<f64, EvalError> {
  if op == BinaryOp::Div && y == 0.0 {
    warn!("refusing to divide {x} by zero");
    return Err(EvalError::DivisionByZero);
  }
  Ok(match op {
    BinaryOp::Add => x + y,
    BinaryOp::Sub => x - y,
    BinaryOp::Mul => x * y,
    BinaryOp::Div => x / y,
  })
}
