//! Table-driven extraction: when a sub-test name is `row.field` inside
//! a `for ... := range` loop over a collection literal, every row's
//! field value is a candidate name.

use tracing::trace;
use tree_sitter::Node;

use crate::engine::strategies::{lookup_initializer, InitLookup};
use crate::engine::{Context, NameValue, Resolver};

/// Resolve every row value for the selector `loop_var.field` used as
/// the name argument of `call`.
///
/// Returns one resolved value per row that carries the field, in
/// element order of the collection literal; each value's position is
/// the row's field-value expression. An empty result means the pattern
/// did not match (no owning range loop, or the collection is not a
/// literal) and the caller must skip the call entirely.
pub fn extract_rows<'a>(
    selector: &Node<'a>,
    call: &Node<'a>,
    resolver: &Resolver,
    ctx: &Context<'a>,
) -> Vec<NameValue> {
    let Some(operand) = selector.child_by_field_name("operand") else {
        return Vec::new();
    };
    let Some(field) = selector.child_by_field_name("field") else {
        return Vec::new();
    };
    if operand.kind() != "identifier" {
        return Vec::new();
    }

    let loop_var = ctx.node_text(&operand);
    let field_name = ctx.node_text(&field);

    let Some(collection) = find_range_collection(&loop_var, call, ctx) else {
        trace!(loop_var, "no enclosing range over a literal collection");
        return Vec::new();
    };

    resolve_field_values(&collection, &field_name, resolver, ctx)
}

/// Locate the innermost `range` statement that binds `loop_var` and
/// lexically contains `call`, then produce its collection literal:
/// either the inline composite literal or the one reachable through the
/// collection identifier's single declaring assignment.
fn find_range_collection<'a>(
    loop_var: &str,
    call: &Node<'a>,
    ctx: &Context<'a>,
) -> Option<Node<'a>> {
    let mut owner: Option<(Node<'a>, Node<'a>)> = None;
    find_owning_range(ctx.tree().root_node(), loop_var, call, ctx, &mut owner);
    let (_, range_expr) = owner?;

    match range_expr.kind() {
        "composite_literal" => Some(range_expr),
        "identifier" => {
            let name = ctx.node_text(&range_expr);
            match lookup_initializer(&name, &range_expr, ctx) {
                InitLookup::Single(rhs) if rhs.kind() == "composite_literal" => Some(rhs),
                _ => None,
            }
        }
        _ => None,
    }
}

/// Depth-first search for range statements. `owner` keeps the latest
/// match, which by pre-order is the innermost loop containing the call.
fn find_owning_range<'a>(
    node: Node<'a>,
    loop_var: &str,
    call: &Node<'a>,
    ctx: &Context<'a>,
    owner: &mut Option<(Node<'a>, Node<'a>)>,
) {
    if node.kind() == "for_statement" {
        if let Some((clause, right)) = range_binding(&node, loop_var, ctx) {
            let body_contains = node
                .child_by_field_name("body")
                .map(|body| {
                    call.start_byte() >= body.start_byte() && call.end_byte() <= body.end_byte()
                })
                .unwrap_or(false);
            if body_contains {
                *owner = Some((clause, right));
            }
        }
    }

    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        find_owning_range(child, loop_var, call, ctx, owner);
    }
}

/// If `for_stmt` iterates with `range` and its per-element binding
/// variable is `loop_var`, return the clause and its source expression.
fn range_binding<'a>(
    for_stmt: &Node<'a>,
    loop_var: &str,
    ctx: &Context<'a>,
) -> Option<(Node<'a>, Node<'a>)> {
    let mut cursor = for_stmt.walk();
    let clause = for_stmt
        .children(&mut cursor)
        .find(|c| c.kind() == "range_clause")?;

    let left = clause.child_by_field_name("left")?;
    let mut left_cursor = left.walk();
    let bindings: Vec<_> = left
        .children(&mut left_cursor)
        .filter(|c| c.is_named())
        .collect();

    // `for i, row := range xs` binds the element last; `for row :=
    // range xs` binds only the index, which is never a struct row.
    let element = match bindings.as_slice() {
        [_, element] => element,
        _ => return None,
    };
    if element.kind() != "identifier" || ctx.node_text(element) != loop_var {
        return None;
    }

    let right = clause.child_by_field_name("right")?;
    Some((clause, right))
}

/// Walk the collection literal's rows in element order, resolving the
/// keyed field value of each. Rows without the field, or whose value
/// does not resolve, contribute nothing.
fn resolve_field_values<'a>(
    collection: &Node<'a>,
    field_name: &str,
    resolver: &Resolver,
    ctx: &Context<'a>,
) -> Vec<NameValue> {
    let Some(body) = collection.child_by_field_name("body") else {
        return Vec::new();
    };

    let mut values = Vec::new();
    let mut cursor = body.walk();
    for element in body.children(&mut cursor) {
        if !element.is_named() {
            continue;
        }
        let Some(row) = unwrap_row(&element) else {
            continue;
        };

        if let Some(value_node) = keyed_value(&row, field_name, ctx) {
            let value = resolver.resolve(&value_node, ctx);
            if value.is_resolved() {
                values.push(value);
            }
        }
    }
    values
}

/// Rows arrive either as bare `literal_value` nodes or wrapped in a
/// `literal_element`.
fn unwrap_row<'a>(element: &Node<'a>) -> Option<Node<'a>> {
    let row = if element.kind() == "literal_element" {
        let mut cursor = element.walk();
        let inner = element.children(&mut cursor).find(|c| c.is_named());
        inner?
    } else {
        *element
    };
    (row.kind() == "literal_value").then_some(row)
}

/// The value expression of the keyed element whose key is `field_name`.
fn keyed_value<'a>(row: &Node<'a>, field_name: &str, ctx: &Context<'a>) -> Option<Node<'a>> {
    let mut cursor = row.walk();
    for child in row.children(&mut cursor) {
        if child.kind() != "keyed_element" {
            continue;
        }

        let key = child.child(0)?;
        if ctx.node_text(&key).trim() != field_name {
            continue;
        }

        let value = child.child(2)?;
        return unwrap_element(&value);
    }
    None
}

/// Go wraps element expressions in `literal_element`; unwrap to the
/// actual value node.
fn unwrap_element<'a>(node: &Node<'a>) -> Option<Node<'a>> {
    if node.kind() == "literal_element" {
        let mut cursor = node.walk();
        return node.children(&mut cursor).find(|c| c.is_named());
    }
    Some(*node)
}
