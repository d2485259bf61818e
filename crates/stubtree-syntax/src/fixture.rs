//! Indented text notation for syntax trees.
//!
//! One element per line, two spaces of indentation per level. Nodes are
//! written as their kind name, tokens as their kind name followed by the
//! quoted token text:
//!
//! ```text
//! SourceFile
//!   Program
//!     KwProgram "PROGRAM"
//!     Whitespace " "
//!     Name
//!       Ident "Main"
//! ```
//!
//! Blank lines and lines starting with `#` are ignored. Token text accepts
//! the escapes `\"`, `\\`, `\n`, `\r` and `\t`.

use rowan::WalkEvent;
use thiserror::Error;

use crate::syntax::{SyntaxKind, SyntaxNode, SyntaxTreeBuilder};

/// Errors from [`parse_fixture`].
// Field docs would only restate the variant messages.
#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FixtureError {
    /// The fixture holds no elements.
    #[error("fixture is empty")]
    Empty,

    /// Kind name not found in `SyntaxKind`.
    #[error("line {line}: unknown syntax kind `{name}`")]
    UnknownKind { line: usize, name: String },

    /// Indentation is not a multiple of two spaces.
    #[error("line {line}: indentation must be a multiple of two spaces")]
    OddIndent { line: usize },

    /// An element skips a level of indentation.
    #[error("line {line}: element is indented deeper than its parent allows")]
    TooDeep { line: usize },

    /// A second element at the root level.
    #[error("line {line}: a fixture has exactly one root")]
    MultipleRoots { line: usize },

    /// The root element is a token.
    #[error("line {line}: the root must be a node, found token `{kind}`")]
    TokenRoot { line: usize, kind: SyntaxKind },

    /// A token kind without quoted text.
    #[error("line {line}: token `{kind}` needs quoted text")]
    MissingText { line: usize, kind: SyntaxKind },

    /// A node kind followed by text.
    #[error("line {line}: node `{kind}` cannot have text")]
    UnexpectedText { line: usize, kind: SyntaxKind },

    /// An element indented below a token.
    #[error("line {line}: tokens cannot have children")]
    TokenWithChildren { line: usize },

    /// Quoted text without a closing quote.
    #[error("line {line}: unterminated string")]
    UnterminatedString { line: usize },

    /// Unknown escape sequence in quoted text.
    #[error("line {line}: invalid escape `\\{escape}`")]
    InvalidEscape { line: usize, escape: char },

    /// Input after the closing quote.
    #[error("line {line}: unexpected input after token text")]
    TrailingInput { line: usize },
}

/// Parses the fixture notation into a syntax tree.
///
/// # Errors
///
/// Returns a [`FixtureError`] describing the first malformed line.
pub fn parse_fixture(text: &str) -> Result<SyntaxNode, FixtureError> {
    let mut builder = SyntaxTreeBuilder::new();
    let mut open_nodes = 0usize;
    let mut last_token_level: Option<usize> = None;
    let mut seen_root = false;

    for (index, raw_line) in text.lines().enumerate() {
        let line = index + 1;
        let content = raw_line.trim_start_matches(' ');
        if content.trim().is_empty() || content.starts_with('#') {
            continue;
        }

        let indent = raw_line.len() - content.len();
        if indent % 2 != 0 {
            return Err(FixtureError::OddIndent { line });
        }
        let level = indent / 2;

        if seen_root && level == 0 {
            return Err(FixtureError::MultipleRoots { line });
        }
        if level > open_nodes {
            if last_token_level.is_some_and(|token_level| token_level + 1 == level) {
                return Err(FixtureError::TokenWithChildren { line });
            }
            return Err(FixtureError::TooDeep { line });
        }
        while open_nodes > level {
            builder.finish_node();
            open_nodes -= 1;
        }

        let content = content.trim_end();
        let (name, rest) = match content.find(char::is_whitespace) {
            Some(split) => (&content[..split], content[split..].trim_start()),
            None => (content, ""),
        };
        let kind = SyntaxKind::from_name(name).ok_or_else(|| FixtureError::UnknownKind {
            line,
            name: name.to_string(),
        })?;

        if kind.is_token() {
            if level == 0 {
                return Err(FixtureError::TokenRoot { line, kind });
            }
            if rest.is_empty() {
                return Err(FixtureError::MissingText { line, kind });
            }
            let token_text = unquote(rest, line)?;
            builder.token(kind.into(), &token_text);
            last_token_level = Some(level);
        } else {
            if !rest.is_empty() {
                return Err(FixtureError::UnexpectedText { line, kind });
            }
            builder.start_node(kind.into());
            open_nodes += 1;
            last_token_level = None;
        }
        seen_root = true;
    }

    if !seen_root {
        return Err(FixtureError::Empty);
    }
    while open_nodes > 0 {
        builder.finish_node();
        open_nodes -= 1;
    }
    Ok(SyntaxNode::new_root(builder.finish()))
}

fn unquote(input: &str, line: usize) -> Result<String, FixtureError> {
    let Some(body) = input.strip_prefix('"') else {
        return Err(FixtureError::UnterminatedString { line });
    };
    let mut text = String::new();
    let mut chars = body.chars();
    loop {
        match chars.next() {
            None => return Err(FixtureError::UnterminatedString { line }),
            Some('"') => break,
            Some('\\') => match chars.next() {
                Some('"') => text.push('"'),
                Some('\\') => text.push('\\'),
                Some('n') => text.push('\n'),
                Some('r') => text.push('\r'),
                Some('t') => text.push('\t'),
                Some(escape) => return Err(FixtureError::InvalidEscape { line, escape }),
                None => return Err(FixtureError::UnterminatedString { line }),
            },
            Some(ch) => text.push(ch),
        }
    }
    if chars.as_str().trim().is_empty() {
        Ok(text)
    } else {
        Err(FixtureError::TrailingInput { line })
    }
}

fn quote(text: &str, out: &mut String) {
    out.push('"');
    for ch in text.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(ch),
        }
    }
    out.push('"');
}

/// Writes a syntax tree in the fixture notation, trivia included.
#[must_use]
pub fn render_fixture(root: &SyntaxNode) -> String {
    let mut out = String::new();
    let mut depth = 0usize;
    for event in root.preorder_with_tokens() {
        match event {
            WalkEvent::Enter(element) => {
                out.push_str(&"  ".repeat(depth));
                out.push_str(element.kind().name());
                match element {
                    rowan::NodeOrToken::Node(_) => depth += 1,
                    rowan::NodeOrToken::Token(token) => {
                        out.push(' ');
                        quote(token.text(), &mut out);
                    }
                }
                out.push('\n');
            }
            WalkEvent::Leave(rowan::NodeOrToken::Node(_)) => depth -= 1,
            WalkEvent::Leave(rowan::NodeOrToken::Token(_)) => {}
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const PROGRAM: &str = r#"
# a program with a comment token
SourceFile
  Program
    KwProgram "PROGRAM"
    Whitespace " "
    Name
      Ident "Main"
    LineComment "// says \"hi\"\n"
"#;

    #[test]
    fn test_parse_builds_lossless_tree() {
        let root = parse_fixture(PROGRAM).unwrap();
        assert_eq!(root.kind(), SyntaxKind::SourceFile);
        assert_eq!(root.text().to_string(), "PROGRAM Main// says \"hi\"\n");
        let program = root.first_child().unwrap();
        assert_eq!(program.kind(), SyntaxKind::Program);
        assert_eq!(program.children().count(), 1);
    }

    #[test]
    fn test_render_matches_input() {
        let root = parse_fixture(PROGRAM).unwrap();
        insta::assert_snapshot!(render_fixture(&root), @r#"
        SourceFile
          Program
            KwProgram "PROGRAM"
            Whitespace " "
            Name
              Ident "Main"
            LineComment "// says \"hi\"\n"
        "#);
    }

    #[test]
    fn test_errors_name_the_line() {
        let cases = [
            ("", FixtureError::Empty),
            ("# only a comment\n", FixtureError::Empty),
            (
                "Sourcefile",
                FixtureError::UnknownKind {
                    line: 1,
                    name: "Sourcefile".to_string(),
                },
            ),
            ("SourceFile\n Program", FixtureError::OddIndent { line: 2 }),
            ("SourceFile\n    Program", FixtureError::TooDeep { line: 2 }),
            ("SourceFile\nSourceFile", FixtureError::MultipleRoots { line: 2 }),
            (
                "Ident \"x\"",
                FixtureError::TokenRoot {
                    line: 1,
                    kind: SyntaxKind::Ident,
                },
            ),
            (
                "SourceFile\n  Ident",
                FixtureError::MissingText {
                    line: 2,
                    kind: SyntaxKind::Ident,
                },
            ),
            (
                "SourceFile \"x\"",
                FixtureError::UnexpectedText {
                    line: 1,
                    kind: SyntaxKind::SourceFile,
                },
            ),
            (
                "SourceFile\n  Ident \"x\"\n    Name",
                FixtureError::TokenWithChildren { line: 3 },
            ),
            (
                "SourceFile\n  Ident \"x",
                FixtureError::UnterminatedString { line: 2 },
            ),
            (
                "SourceFile\n  Ident \"\\q\"",
                FixtureError::InvalidEscape {
                    line: 2,
                    escape: 'q',
                },
            ),
            (
                "SourceFile\n  Ident \"x\" y",
                FixtureError::TrailingInput { line: 2 },
            ),
        ];
        for (input, expected) in cases {
            assert_eq!(parse_fixture(input).unwrap_err(), expected, "input: {input:?}");
        }
    }
}
