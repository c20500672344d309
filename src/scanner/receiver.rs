use tree_sitter::Node;

use crate::engine::Context;

/// The closed set of recognized test-context receiver types. Matching
/// is by type identity, never structurally: a type that merely exposes
/// a `Run(string, func)` method must not match.
pub const TEST_CONTEXT_TYPES: [&str; 3] = ["*testing.T", "*testing.B", "*testing.F"];

/// Whether `receiver` is an identifier bound by an enclosing function's
/// parameter whose declared type is one of [`TEST_CONTEXT_TYPES`].
///
/// The walk goes innermost-first, so a closure parameter shadowing an
/// outer one decides the answer. A receiver declared any other way
/// (local variable, field, package name) is not a test context.
pub fn is_test_context<'a>(receiver: &Node<'a>, ctx: &Context<'a>) -> bool {
    if receiver.kind() != "identifier" {
        return false;
    }
    let name = ctx.node_text(receiver);

    let mut current = *receiver;
    while let Some(parent) = current.parent() {
        if matches!(
            parent.kind(),
            "function_declaration" | "method_declaration" | "func_literal"
        ) {
            if let Some(type_text) = parameter_type(&parent, &name, ctx) {
                let normalized: String =
                    type_text.chars().filter(|c| !c.is_whitespace()).collect();
                return TEST_CONTEXT_TYPES.contains(&normalized.as_str());
            }
        }
        current = parent;
    }
    false
}

/// The declared type of the parameter named `name` in a function-like
/// node, or `None` if no parameter binds that name.
fn parameter_type<'a>(func: &Node<'a>, name: &str, ctx: &Context<'a>) -> Option<String> {
    let params = func.child_by_field_name("parameters")?;

    let mut cursor = params.walk();
    for decl in params.children(&mut cursor) {
        if decl.kind() != "parameter_declaration" {
            continue;
        }

        let type_node = decl.child_by_field_name("type")?;
        let mut decl_cursor = decl.walk();
        for child in decl.children(&mut decl_cursor) {
            if child.kind() == "identifier" && ctx.node_text(&child) == name {
                return Some(ctx.node_text(&type_node));
            }
        }
    }
    None
}
