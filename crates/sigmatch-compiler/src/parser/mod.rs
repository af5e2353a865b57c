//! Pattern parser.
//!
//! Grammar (one token of lookahead, no backtracking):
//!
//! ```text
//! expression := term ( term | '|' term )*
//! term       := primary ( '*' | '+' | '?' )?
//! primary    := ALNUM | '(' expression ')'
//! ```
//!
//! Rules build NFA fragments directly; there is no syntax tree. Alternation takes
//! the fragment accumulated so far as its left operand, so `ab|cd` reads as
//! `((ab)|c)d`. Whitespace is trivia. Every error is fatal to the compile.
//!
//! Nesting depth is bounded by the recursion limit (one level per group).

mod core;
mod grammar;
mod lexer;

#[cfg(test)]
mod parser_tests;

pub use self::core::Parser;
pub use lexer::{Token, TokenKind, lex, token_text};

use crate::Result;
use crate::nfa::{Fragment, NfaBuilder};

/// Default bound on group nesting.
pub const DEFAULT_RECURSION_LIMIT: u32 = 256;

/// Parses `source` into a fragment allocated in `nfa`.
pub fn parse_pattern(source: &str, nfa: &mut NfaBuilder, recursion_limit: u32) -> Result<Fragment> {
    Parser::new(source, lex(source), nfa)
        .with_recursion_limit(recursion_limit)
        .parse()
}
