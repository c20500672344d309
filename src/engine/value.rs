use serde::Serialize;
use tree_sitter::Node;

use crate::engine::UnresolvedReason;

/// Source position diagnostics should reference. Lines and columns are
/// 1-based, matching compiler convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SourcePos {
    pub line: usize,
    pub column: usize,
}

impl SourcePos {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    /// Position of a node's first character.
    pub fn of(node: &Node) -> Self {
        let point = node.start_position();
        Self {
            line: point.row + 1,
            column: point.column + 1,
        }
    }
}

/// Outcome of resolving a name expression to its compile-time string.
///
/// `Unresolved` means "no opinion", not an error: callers must skip the
/// construct rather than diagnose it. An empty resolved string is a
/// legitimate value (invalid by the naming grammar) and is distinct from
/// not resolving at all, which is why this is an enum and not a struct
/// with a sentinel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameValue {
    Resolved { text: String, pos: SourcePos },
    Unresolved(UnresolvedReason),
}

impl NameValue {
    pub fn resolved(text: impl Into<String>, pos: SourcePos) -> Self {
        Self::Resolved {
            text: text.into(),
            pos,
        }
    }

    pub fn unresolved(reason: UnresolvedReason) -> Self {
        Self::Unresolved(reason)
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, Self::Resolved { .. })
    }

    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Resolved { text, .. } => Some(text),
            Self::Unresolved(_) => None,
        }
    }

    pub fn pos(&self) -> Option<SourcePos> {
        match self {
            Self::Resolved { pos, .. } => Some(*pos),
            Self::Unresolved(_) => None,
        }
    }

    /// Re-anchor a resolved value to a different position. Used when a
    /// constant or variable resolves through its declaration but the
    /// diagnostic should point at the use site.
    pub fn at(self, pos: SourcePos) -> Self {
        match self {
            Self::Resolved { text, .. } => Self::Resolved { text, pos },
            unresolved => unresolved,
        }
    }
}
