use crate::engine::{Context, NameValue, Resolver, SourcePos, Strategy, UnresolvedReason};
use tree_sitter::Node;

/// Folds string concatenation (`"a" + "b"`) when both operands resolve
/// to compile-time strings. Any non-constant operand declines the whole
/// expression; no partial folding.
pub struct ConcatStrategy;

impl Default for ConcatStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl ConcatStrategy {
    pub fn new() -> Self {
        Self
    }
}

impl Strategy for ConcatStrategy {
    fn name(&self) -> &'static str {
        "concat"
    }

    fn can_handle<'a>(&self, node: &Node<'a>, ctx: &Context<'a>) -> bool {
        if node.kind() != "binary_expression" {
            return false;
        }
        node.child_by_field_name("operator")
            .map(|op| ctx.node_text(&op) == "+")
            .unwrap_or(false)
    }

    fn resolve<'a>(&self, node: &Node<'a>, ctx: &Context<'a>) -> NameValue {
        let (left, right) = match (
            node.child_by_field_name("left"),
            node.child_by_field_name("right"),
        ) {
            (Some(left), Some(right)) => (left, right),
            _ => return NameValue::unresolved(UnresolvedReason::Unsupported),
        };

        let resolver = Resolver::new();
        let left_value = resolver.resolve(&left, ctx);
        let right_value = resolver.resolve(&right, ctx);

        match (left_value.text(), right_value.text()) {
            (Some(l), Some(r)) => {
                NameValue::resolved(format!("{l}{r}"), SourcePos::of(node))
            }
            _ => NameValue::unresolved(UnresolvedReason::NotConstant),
        }
    }
}
