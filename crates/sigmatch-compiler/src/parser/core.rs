//! Parser cursor and low-level operations.

use rowan::{TextRange, TextSize};

use super::DEFAULT_RECURSION_LIMIT;
use super::lexer::{Token, TokenKind};
use crate::diagnostics::{DiagnosticKind, Diagnostics};
use crate::nfa::{Fragment, NfaBuilder};
use crate::{Error, Result};

/// Recursive-descent parser sharing one cursor across all grammar rules.
pub struct Parser<'src, 'n> {
    pub(super) source: &'src str,
    tokens: Vec<Token>,
    pos: usize,
    depth: u32,
    recursion_limit: u32,
    pub(super) nfa: &'n mut NfaBuilder,
    pub(super) diagnostics: Diagnostics,
}

impl<'src, 'n> Parser<'src, 'n> {
    pub fn new(source: &'src str, tokens: Vec<Token>, nfa: &'n mut NfaBuilder) -> Self {
        Self {
            source,
            tokens,
            pos: 0,
            depth: 0,
            recursion_limit: DEFAULT_RECURSION_LIMIT,
            nfa,
            diagnostics: Diagnostics::new(),
        }
    }

    pub fn with_recursion_limit(mut self, limit: u32) -> Self {
        self.recursion_limit = limit;
        self
    }

    /// Parses the whole input. Fails unless the cursor reaches end of input.
    pub fn parse(mut self) -> Result<Fragment> {
        if self.current().is_none() {
            let all = TextRange::up_to(self.eof_offset());
            self.diagnostics.report(DiagnosticKind::EmptyPattern, all).emit();
            return Err(self.error());
        }

        let fragment = self.parse_expression()?;

        match self.current() {
            None => Ok(fragment),
            Some(TokenKind::ParenClose) => {
                let span = self.current_span();
                self.diagnostics
                    .report(DiagnosticKind::UnmatchedCloseParen, span)
                    .emit();
                Err(self.error())
            }
            Some(_) => {
                let span = self.current_span();
                self.diagnostics
                    .report(DiagnosticKind::TrailingInput, span)
                    .emit();
                Err(self.error())
            }
        }
    }

    /// Kind of the next non-trivia token, `None` at end of input.
    pub(super) fn current(&mut self) -> Option<TokenKind> {
        self.skip_trivia();
        self.tokens.get(self.pos).map(|t| t.kind)
    }

    pub(super) fn current_span(&mut self) -> TextRange {
        self.skip_trivia();
        self.tokens
            .get(self.pos)
            .map_or_else(|| TextRange::empty(self.eof_offset()), |t| t.span)
    }

    pub(super) fn current_text(&mut self) -> &'src str {
        let span = self.current_span();
        &self.source[std::ops::Range::<usize>::from(span)]
    }

    pub(super) fn bump(&mut self) {
        self.skip_trivia();
        debug_assert!(self.pos < self.tokens.len(), "bump past end of input");
        self.pos += 1;
    }

    fn skip_trivia(&mut self) {
        while self.pos < self.tokens.len() && self.tokens[self.pos].kind.is_trivia() {
            self.pos += 1;
        }
    }

    fn eof_offset(&self) -> TextSize {
        TextSize::from(self.source.len() as u32)
    }

    pub(super) fn enter_group(&mut self) -> Result<()> {
        self.depth += 1;
        if self.depth > self.recursion_limit {
            return Err(Error::RecursionLimitExceeded);
        }
        Ok(())
    }

    pub(super) fn exit_group(&mut self) {
        self.depth -= 1;
    }

    /// Wraps the collected diagnostics into a parse error.
    pub(super) fn error(&mut self) -> Error {
        Error::Parse(std::mem::take(&mut self.diagnostics))
    }
}
