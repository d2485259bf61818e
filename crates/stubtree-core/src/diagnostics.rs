//! Diagnostics reported while building stub trees.
//!
//! Stub building never fails. Problems with individual nodes are collected
//! here so a host can inspect them after the build.

use std::fmt;

use stubtree_syntax::SyntaxKind;
use text_size::TextRange;

/// Severity level of a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DiagnosticSeverity {
    /// Error - the host tree and registry disagree.
    Error,
    /// Warning - part of the tree was not indexed.
    Warning,
}

/// A diagnostic code identifying the type of diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticCode {
    /// A stub was requested for an element that cannot hold one.
    ConsistencyViolation,
    /// Traversal stopped at the configured depth limit.
    DepthLimitExceeded,
}

impl DiagnosticCode {
    /// Returns the code string (e.g., "S001").
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::ConsistencyViolation => "S001",
            Self::DepthLimitExceeded => "S101",
        }
    }

    /// Severity every diagnostic with this code carries.
    #[must_use]
    pub fn severity(&self) -> DiagnosticSeverity {
        match self {
            Self::ConsistencyViolation => DiagnosticSeverity::Error,
            Self::DepthLimitExceeded => DiagnosticSeverity::Warning,
        }
    }
}

/// A problem found while building a stub tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StubDiagnostic {
    /// The diagnostic code.
    pub code: DiagnosticCode,
    /// The severity level.
    pub severity: DiagnosticSeverity,
    /// The diagnostic message.
    pub message: String,
    /// Element type of the offending element.
    pub kind: Option<SyntaxKind>,
    /// Source range of the offending element, when known.
    pub range: Option<TextRange>,
}

impl StubDiagnostic {
    /// Creates a diagnostic; the severity follows the code.
    pub fn new(
        code: DiagnosticCode,
        message: impl Into<String>,
        kind: Option<SyntaxKind>,
        range: Option<TextRange>,
    ) -> Self {
        Self {
            code,
            severity: code.severity(),
            message: message.into(),
            kind,
            range,
        }
    }

    /// Returns `true` if this is an error.
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.severity == DiagnosticSeverity::Error
    }
}

impl fmt::Display for StubDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let severity = match self.severity {
            DiagnosticSeverity::Error => "error",
            DiagnosticSeverity::Warning => "warning",
        };
        write!(f, "{severity}[{}]: {}", self.code.code(), self.message)?;
        if let Some(range) = self.range {
            write!(
                f,
                " at {}..{}",
                u32::from(range.start()),
                u32::from(range.end())
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let diagnostic = StubDiagnostic::new(
            DiagnosticCode::ConsistencyViolation,
            "VarBlock requests a stub",
            Some(SyntaxKind::VarBlock),
            Some(TextRange::new(4.into(), 10.into())),
        );
        assert!(diagnostic.is_error());
        assert_eq!(
            diagnostic.to_string(),
            "error[S001]: VarBlock requests a stub at 4..10"
        );

        let warning = StubDiagnostic::new(
            DiagnosticCode::DepthLimitExceeded,
            "depth limit reached",
            None,
            None,
        );
        assert_eq!(warning.severity, DiagnosticSeverity::Warning);
        assert_eq!(warning.to_string(), "warning[S101]: depth limit reached");
    }
}
