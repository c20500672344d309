#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnresolvedReason {
    IdentifierNotFound,
    AmbiguousAssignment,
    NotConstant,
    SelectorExpression,
    CycleDetected,
    Unsupported,
}

impl UnresolvedReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::IdentifierNotFound => "identifier_not_found",
            Self::AmbiguousAssignment => "ambiguous_assignment",
            Self::NotConstant => "not_constant",
            Self::SelectorExpression => "selector_expression",
            Self::CycleDetected => "cycle_detected",
            Self::Unsupported => "unsupported",
        }
    }
}

impl std::fmt::Display for UnresolvedReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
