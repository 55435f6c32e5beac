
use crate::eval::EvalError;
use crate::parsing::postfix::ParseError;

use thiserror::Error;

/// Top-level error type, unifying the two stages at which an
/// expression can fail: structurally at conversion time, numerically
/// at evaluation time.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum Error {
  #[error("{0}")]
  Parse(#[from] ParseError),
  #[error("{0}")]
  Eval(#[from] EvalError),
}
