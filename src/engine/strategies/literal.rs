use crate::engine::{Context, NameValue, SourcePos, Strategy};
use tree_sitter::Node;

/// Resolves Go string literals. The value carries the literal's own
/// position, so a diagnostic for a directly written name points at the
/// argument itself.
pub struct LiteralStrategy;

impl Default for LiteralStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl LiteralStrategy {
    pub fn new() -> Self {
        Self
    }
}

impl Strategy for LiteralStrategy {
    fn name(&self) -> &'static str {
        "literal"
    }

    fn can_handle<'a>(&self, node: &Node<'a>, _ctx: &Context<'a>) -> bool {
        matches!(
            node.kind(),
            "interpreted_string_literal" | "raw_string_literal"
        )
    }

    fn resolve<'a>(&self, node: &Node<'a>, ctx: &Context<'a>) -> NameValue {
        let text = ctx.node_text(node);
        NameValue::resolved(ctx.unquote_string(&text), SourcePos::of(node))
    }
}
