use crate::Result;
use crate::diagnostics::DiagnosticKind;
use crate::nfa::Fragment;
use crate::parser::core::Parser;
use crate::parser::lexer::TokenKind;

impl Parser<'_, '_> {
    /// `term ( term | '|' term )*`, folded left.
    pub(crate) fn parse_expression(&mut self) -> Result<Fragment> {
        let mut acc = self.parse_term()?;
        loop {
            match self.current() {
                Some(TokenKind::Pipe) => {
                    self.bump();
                    let rhs = self.parse_term()?;
                    acc = self.nfa.alternate(acc, rhs)?;
                }
                Some(kind) if kind.starts_term() => {
                    let rhs = self.parse_term()?;
                    acc = self.nfa.concat(acc, rhs)?;
                }
                _ => return Ok(acc),
            }
        }
    }

    /// `primary ( '*' | '+' | '?' )?`
    pub(crate) fn parse_term(&mut self) -> Result<Fragment> {
        let operand = self.parse_primary()?;

        let fragment = match self.current() {
            Some(TokenKind::Star) => {
                self.bump();
                self.nfa.kleene(operand)?
            }
            Some(TokenKind::Plus) => {
                self.bump();
                self.nfa.positive(operand)?
            }
            Some(TokenKind::Question) => {
                self.bump();
                self.nfa.optional(operand)?
            }
            _ => return Ok(operand),
        };

        if self.current().is_some_and(TokenKind::is_postfix) {
            let span = self.current_span();
            let op = self.current_text();
            self.diagnostics
                .report(DiagnosticKind::RepeatedOperator, span)
                .message(format!("`{op}` cannot follow another postfix operator"))
                .emit();
            return Err(self.error());
        }

        Ok(fragment)
    }
}
