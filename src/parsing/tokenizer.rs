
use super::operator::BinaryOp;
use super::token::Token;

/// Splits a raw expression string into a token sequence.
///
/// The scan walks the string left to right while maintaining a
/// pending numeric-literal buffer. This is a pure, total function: it
/// never fails, and characters outside the expression alphabet are
/// silently dropped. Whole-string validation is the job of
/// [`to_postfix`](super::postfix::to_postfix), which runs before
/// tokenization.
pub fn tokenize(expression: &str) -> Vec<Token> {
  let mut tokens: Vec<Token> = Vec::new();
  let mut buffer = String::new();

  for ch in expression.chars() {
    if ch.is_ascii_digit() || ch == '.' {
      buffer.push(ch);
    } else if ch == '(' || ch == ')' || BinaryOp::from_char(ch).is_some() {
      if ch == '-' && buffer.is_empty() && tokens.last() != Some(&Token::RightParen) {
        // Unary minus: fold the sign into the upcoming numeric
        // literal. Covers a leading negative and a negative right
        // after another operator or an open parenthesis. A minus
        // after a close parenthesis stays binary.
        buffer.push(ch);
      } else {
        if !buffer.is_empty() {
          tokens.push(Token::Number(std::mem::take(&mut buffer)));
        }
        let token = match ch {
          '(' => Token::LeftParen,
          ')' => Token::RightParen,
          // unwrap: every other character in this branch was
          // recognized by BinaryOp::from_char above.
          op => Token::Operator(BinaryOp::from_char(op).unwrap()),
        };
        tokens.push(token);
      }
    }
    // Anything else, whitespace included, is dropped from the scan.
  }

  // The trailing literal is flushed even when empty: an expression
  // ending on an operator produces an empty literal here, which
  // degrades to NaN at evaluation time. The converter trims the
  // harmless case of an empty literal at the very end of its output.
  tokens.push(Token::Number(buffer));

  tokens
}
