use crate::engine::{Context, NameValue, Resolver, SourcePos, Strategy, UnresolvedReason};
use tree_sitter::Node;

/// Resolves identifiers that name constants or single-assignment local
/// variables.
///
/// Every write to the name visible from the use site is collected:
/// file-level `const`/`var` specs plus `:=`, `var`, `const`, assignment
/// and `range` bindings anywhere in the enclosing function. Resolution
/// succeeds only when exactly one simple write exists; zero writes or
/// multiple writes decline. Guessing among competing writes risks
/// diagnosing the wrong value, so ambiguity is a hard stop.
pub struct IdentifierStrategy;

/// A candidate write to an identifier. `simple` is false for bindings
/// whose right-hand side is not the variable's value (`+=`, `range`).
/// File-scope declarations are order-independent in Go, so only
/// function-local writes must precede the use.
struct Write<'a> {
    rhs: Node<'a>,
    simple: bool,
    file_scope: bool,
}

/// Outcome of searching for an identifier's declaring assignment.
pub(crate) enum InitLookup<'a> {
    Single(Node<'a>),
    Missing,
    Ambiguous,
}

impl Default for IdentifierStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl IdentifierStrategy {
    pub fn new() -> Self {
        Self
    }
}

impl Strategy for IdentifierStrategy {
    fn name(&self) -> &'static str {
        "identifier"
    }

    fn can_handle<'a>(&self, node: &Node<'a>, _ctx: &Context<'a>) -> bool {
        node.kind() == "identifier"
    }

    fn resolve<'a>(&self, node: &Node<'a>, ctx: &Context<'a>) -> NameValue {
        let name = ctx.node_text(node);
        if name == "_" {
            return NameValue::unresolved(UnresolvedReason::IdentifierNotFound);
        }

        match lookup_initializer(&name, node, ctx) {
            InitLookup::Single(rhs) => {
                // Diagnostics should land at the use site, not at the
                // declaration, so the resolved value is re-anchored.
                Resolver::new().resolve(&rhs, ctx).at(SourcePos::of(node))
            }
            InitLookup::Missing => NameValue::unresolved(UnresolvedReason::IdentifierNotFound),
            InitLookup::Ambiguous => NameValue::unresolved(UnresolvedReason::AmbiguousAssignment),
        }
    }
}

/// Find the single simple write that initializes `name`, visible from
/// `use_node`. Declines (`Ambiguous`) when more than one write exists,
/// when the only write is compound (`+=`) or a `range` binding, or when
/// a function-local write does not precede the use. File-scope
/// declarations are visible regardless of order.
pub(crate) fn lookup_initializer<'a>(
    name: &str,
    use_node: &Node<'a>,
    ctx: &Context<'a>,
) -> InitLookup<'a> {
    let writes = collect_writes(name, use_node, ctx);

    match writes.as_slice() {
        [] => InitLookup::Missing,
        [write] => {
            let ordered = write.file_scope || write.rhs.start_byte() < use_node.start_byte();
            if write.simple && ordered {
                InitLookup::Single(write.rhs)
            } else {
                InitLookup::Ambiguous
            }
        }
        _ => InitLookup::Ambiguous,
    }
}

fn collect_writes<'a>(name: &str, use_node: &Node<'a>, ctx: &Context<'a>) -> Vec<Write<'a>> {
    let mut writes = Vec::new();

    // File-level const and var declarations are visible everywhere.
    let root = ctx.tree().root_node();
    let mut cursor = root.walk();
    for child in root.children(&mut cursor) {
        match child.kind() {
            "const_declaration" | "var_declaration" => {
                collect_spec_writes(&child, name, ctx, true, &mut writes);
            }
            _ => {}
        }
    }

    // Then everything written inside the enclosing function, nested
    // blocks and closures included. A shadowing redeclaration counts as
    // a second write on purpose.
    if let Some(func) = outermost_function(*use_node) {
        if let Some(body) = func.child_by_field_name("body") {
            collect_body_writes(&body, name, ctx, &mut writes);
        }
    }

    writes
}

fn outermost_function(node: Node) -> Option<Node> {
    let mut found = None;
    let mut current = node;
    while let Some(parent) = current.parent() {
        if matches!(
            parent.kind(),
            "function_declaration" | "method_declaration" | "func_literal"
        ) {
            found = Some(parent);
        }
        current = parent;
    }
    found
}

fn collect_body_writes<'a>(
    node: &Node<'a>,
    name: &str,
    ctx: &Context<'a>,
    writes: &mut Vec<Write<'a>>,
) {
    match node.kind() {
        "short_var_declaration" => {
            if let Some(rhs) = extract_pairwise(node, name, ctx) {
                writes.push(Write {
                    rhs,
                    simple: true,
                    file_scope: false,
                });
            }
            return;
        }
        "assignment_statement" => {
            if let Some(rhs) = extract_pairwise(node, name, ctx) {
                let simple = node
                    .child_by_field_name("operator")
                    .map(|op| ctx.node_text(&op) == "=")
                    .unwrap_or(true);
                writes.push(Write {
                    rhs,
                    simple,
                    file_scope: false,
                });
            }
            return;
        }
        "const_declaration" | "var_declaration" => {
            collect_spec_writes(node, name, ctx, false, writes);
            return;
        }
        "range_clause" => {
            if binds_name(node, name, ctx) {
                if let Some(rhs) = node.child_by_field_name("right") {
                    writes.push(Write {
                        rhs,
                        simple: false,
                        file_scope: false,
                    });
                }
            }
            return;
        }
        _ => {}
    }

    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if child.is_named() {
            collect_body_writes(&child, name, ctx, writes);
        }
    }
}

/// Match `name` against the left expression list of `x, y := a, b` or
/// `x, y = a, b` and return the positionally corresponding right-hand
/// expression.
fn extract_pairwise<'a>(node: &Node<'a>, name: &str, ctx: &Context<'a>) -> Option<Node<'a>> {
    let left = node.child_by_field_name("left")?;
    let right = node.child_by_field_name("right")?;

    let mut cursor = left.walk();
    let names: Vec<_> = left.children(&mut cursor).filter(|c| c.is_named()).collect();

    for (i, name_node) in names.iter().enumerate() {
        if name_node.kind() == "identifier" && ctx.node_text(name_node) == name {
            let mut value_cursor = right.walk();
            let values: Vec<_> = right
                .children(&mut value_cursor)
                .filter(|c| c.is_named())
                .collect();
            return values.get(i).copied();
        }
    }
    None
}

/// Match `name` against the specs of a `const` or `var` declaration and
/// record the positionally corresponding value expression.
fn collect_spec_writes<'a>(
    node: &Node<'a>,
    name: &str,
    ctx: &Context<'a>,
    file_scope: bool,
    writes: &mut Vec<Write<'a>>,
) {
    let mut cursor = node.walk();
    for spec in node.children(&mut cursor) {
        if !matches!(spec.kind(), "const_spec" | "var_spec") {
            continue;
        }

        let mut names: Vec<Node> = Vec::new();
        let mut spec_cursor = spec.walk();
        for child in spec.children(&mut spec_cursor) {
            if child.kind() == "identifier" {
                names.push(child);
            }
        }

        let mut values: Vec<Node> = Vec::new();
        if let Some(value_node) = spec.child_by_field_name("value") {
            let mut value_cursor = value_node.walk();
            for child in value_node.children(&mut value_cursor) {
                if child.is_named() {
                    values.push(child);
                }
            }
        }

        for (i, name_node) in names.iter().enumerate() {
            if ctx.node_text(name_node) == name {
                if let Some(&rhs) = values.get(i) {
                    writes.push(Write {
                        rhs,
                        simple: true,
                        file_scope,
                    });
                }
            }
        }
    }
}

fn binds_name(range_clause: &Node, name: &str, ctx: &Context) -> bool {
    let Some(left) = range_clause.child_by_field_name("left") else {
        return false;
    };
    let mut cursor = left.walk();
    let bound = left
        .children(&mut cursor)
        .any(|c| c.kind() == "identifier" && ctx.node_text(&c) == name);
    bound
}
