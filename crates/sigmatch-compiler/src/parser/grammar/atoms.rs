use crate::Result;
use crate::diagnostics::DiagnosticKind;
use crate::nfa::Fragment;
use crate::parser::core::Parser;
use crate::parser::lexer::TokenKind;

impl Parser<'_, '_> {
    /// `ALNUM | '(' expression ')'`
    pub(crate) fn parse_primary(&mut self) -> Result<Fragment> {
        let span = self.current_span();
        match self.current() {
            Some(TokenKind::Symbol) => {
                let symbol = self.source.as_bytes()[usize::from(span.start())];
                self.bump();
                self.nfa.atomic(symbol)
            }
            Some(TokenKind::ParenOpen) => self.parse_group(),
            Some(TokenKind::Garbage) => {
                let text = self.current_text();
                self.diagnostics
                    .report(DiagnosticKind::UnexpectedCharacter, span)
                    .message(format!("unexpected `{text}`"))
                    .emit();
                Err(self.error())
            }
            Some(kind) if kind.is_postfix() => {
                let op = self.current_text();
                self.diagnostics
                    .report(DiagnosticKind::ExpectedPrimary, span)
                    .message(format!("`{op}` has nothing to repeat"))
                    .hint("put a symbol or a group before the operator")
                    .emit();
                Err(self.error())
            }
            Some(_) => {
                let found = self.current_text();
                self.diagnostics
                    .report(DiagnosticKind::ExpectedPrimary, span)
                    .message(format!("expected a symbol or `(`, found `{found}`"))
                    .emit();
                Err(self.error())
            }
            None => {
                self.diagnostics
                    .report(DiagnosticKind::ExpectedPrimary, span)
                    .message("expected a symbol or `(`, found end of pattern")
                    .emit();
                Err(self.error())
            }
        }
    }

    /// `'(' expression ')'`. The group adds no states of its own.
    fn parse_group(&mut self) -> Result<Fragment> {
        let open = self.current_span();
        self.bump();
        self.enter_group()?;

        if self.current() == Some(TokenKind::ParenClose) {
            let close = self.current_span();
            self.diagnostics
                .report(DiagnosticKind::EmptyGroup, open.cover(close))
                .emit();
            return Err(self.error());
        }

        let inner = self.parse_expression()?;

        if self.current() != Some(TokenKind::ParenClose) {
            self.diagnostics
                .report(DiagnosticKind::UnclosedGroup, open)
                .message("group opened here is never closed")
                .emit();
            return Err(self.error());
        }
        self.bump();
        self.exit_group();

        Ok(inner)
    }
}
