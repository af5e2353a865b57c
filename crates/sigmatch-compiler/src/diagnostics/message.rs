use std::fmt;

use rowan::TextRange;

/// Diagnostic kinds ordered by priority (highest first).
///
/// Unbalanced parentheses come first: they explain most of what follows them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DiagnosticKind {
    UnclosedGroup,
    UnmatchedCloseParen,

    // Something required is missing
    EmptyPattern,
    ExpectedPrimary,
    EmptyGroup,

    // Something present does not belong
    RepeatedOperator,
    UnexpectedCharacter,
    TrailingInput,
}

impl DiagnosticKind {
    pub fn fallback_message(&self) -> &'static str {
        match self {
            Self::UnclosedGroup => "missing closing `)`",
            Self::UnmatchedCloseParen => "unmatched `)`",
            Self::EmptyPattern => "pattern is empty",
            Self::ExpectedPrimary => "expected a symbol or `(`",
            Self::EmptyGroup => "empty `()` is not allowed",
            Self::RepeatedOperator => "repeated postfix operator",
            Self::UnexpectedCharacter => "unexpected character",
            Self::TrailingInput => "unexpected input after pattern",
        }
    }

    pub fn default_hint(&self) -> Option<&'static str> {
        match self {
            Self::UnexpectedCharacter => {
                Some("patterns use ASCII letters, digits, `|`, `*`, `+`, `?` and parentheses")
            }
            Self::RepeatedOperator => Some("wrap the operand in `(...)` to stack operators"),
            Self::EmptyGroup => Some("remove the group or put a symbol inside"),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticMessage {
    pub kind: DiagnosticKind,
    pub range: TextRange,
    pub message: String,
    pub hints: Vec<String>,
}

impl DiagnosticMessage {
    pub(crate) fn with_default_message(kind: DiagnosticKind, range: TextRange) -> Self {
        Self {
            kind,
            range,
            message: kind.fallback_message().to_string(),
            hints: kind
                .default_hint()
                .map(|h| vec![h.to_string()])
                .unwrap_or_default(),
        }
    }
}

impl fmt::Display for DiagnosticMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "error at {}..{}: {}",
            u32::from(self.range.start()),
            u32::from(self.range.end()),
            self.message
        )?;
        for hint in &self.hints {
            write!(f, "\n  help: {hint}")?;
        }
        Ok(())
    }
}
