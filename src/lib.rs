
//! Small arithmetic-expression engine. Raw infix text is tokenized,
//! converted to postfix (Reverse Polish) form with a shunting-yard
//! pass, and evaluated to an `f64` over a value stack.
//!
//! [`session::ExpressionSession`] is the intended entry point for
//! callers that hold an editable expression; the stage functions
//! [`parsing::tokenizer::tokenize`], [`parsing::postfix::to_postfix`]
//! and [`eval::evaluate`] are usable on their own.

pub mod error;
pub mod eval;
pub mod parsing;
pub mod session;
pub mod stack;
