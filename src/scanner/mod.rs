mod receiver;
mod table;

pub use receiver::{is_test_context, TEST_CONTEXT_TYPES};

use std::path::Path;

use tracing::{debug, trace};
use tree_sitter::{Node, Tree};

use crate::engine::{Context, NameValue, Resolver};
use crate::error::{IoError, ParserError, Result};
use crate::naming::is_valid_snake_case;
use crate::output::Diagnostic;

/// Everything one file's scan produced. `errors` records non-fatal
/// problems (unreadable or unparseable files); a scan never aborts the
/// pass.
#[derive(Debug, Clone, Default)]
pub struct ScanResult {
    pub file_path: String,
    pub diagnostics: Vec<Diagnostic>,
    pub errors: Vec<String>,
}

impl ScanResult {
    pub fn new(file_path: String) -> Self {
        Self {
            file_path,
            diagnostics: Vec::new(),
            errors: Vec::new(),
        }
    }

    pub fn add_diagnostic(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub fn add_error(&mut self, error: String) {
        self.errors.push(error);
    }

    pub fn diagnostic_count(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Finds sub-test registration calls (`t.Run(name, body)` on a testing
/// context) and checks each compile-time-resolvable name against the
/// snake_case convention.
pub struct SubtestScanner {
    resolver: Resolver,
}

impl Default for SubtestScanner {
    fn default() -> Self {
        Self::new()
    }
}

impl SubtestScanner {
    pub fn new() -> Self {
        Self {
            resolver: Resolver::new(),
        }
    }

    pub fn with_resolver(resolver: Resolver) -> Self {
        Self { resolver }
    }

    /// Read, parse and scan one file. The caller decides which files
    /// qualify; this does not re-check the `_test.go` suffix.
    pub fn scan_file(&self, path: &Path) -> Result<ScanResult> {
        let source = std::fs::read(path).map_err(|e| IoError::read_failed(path, e))?;

        let mut parser = tree_sitter::Parser::new();
        parser
            .set_language(&tree_sitter_go::LANGUAGE.into())
            .map_err(|_| ParserError::language_setup_failed("go"))?;
        let tree = parser
            .parse(&source, None)
            .ok_or_else(|| ParserError::parse_failed(path))?;

        Ok(self.scan_tree(&tree, &source, &path.to_string_lossy()))
    }

    /// Scan an already-parsed tree. Diagnostics come out in document
    /// order of the call sites; table rows in element order.
    pub fn scan_tree<'a>(&self, tree: &'a Tree, source: &'a [u8], file_path: &str) -> ScanResult {
        trace!(file_path, "scanning tree");

        let ctx = Context::new(tree, source, file_path.to_string());
        let mut result = ScanResult::new(file_path.to_string());
        self.traverse(tree.root_node(), &ctx, &mut result);

        debug!(
            file_path,
            diagnostics = result.diagnostic_count(),
            "scan complete"
        );
        result
    }

    /// Deterministic pre-order walk. Traversal order is observable
    /// through diagnostic ordering, so this must stay single-threaded.
    fn traverse<'a>(&self, node: Node<'a>, ctx: &Context<'a>, result: &mut ScanResult) {
        if node.kind() == "call_expression" {
            self.check_call(&node, ctx, result);
        }

        let mut cursor = node.walk();
        for child in node.children(&mut cursor) {
            self.traverse(child, ctx, result);
        }
    }

    fn check_call<'a>(&self, call: &Node<'a>, ctx: &Context<'a>, result: &mut ScanResult) {
        let Some(callee) = call.child_by_field_name("function") else {
            return;
        };
        if callee.kind() != "selector_expression" {
            return;
        }

        let Some(method) = callee.child_by_field_name("field") else {
            return;
        };
        if ctx.node_text(&method) != "Run" {
            return;
        }

        let Some(recv) = callee.child_by_field_name("operand") else {
            return;
        };
        if !is_test_context(&recv, ctx) {
            return;
        }

        // The recognized shape takes a name and a body.
        let Some(args) = call.child_by_field_name("arguments") else {
            return;
        };
        if args.named_child_count() < 2 {
            return;
        }
        let Some(name_arg) = args.named_child(0) else {
            return;
        };

        let values = if name_arg.kind() == "selector_expression" {
            // Table-driven path. If it yields nothing the call is
            // skipped; a bare selector is never treated as a direct
            // value.
            table::extract_rows(&name_arg, call, &self.resolver, ctx)
        } else {
            match self.resolver.resolve(&name_arg, ctx) {
                value @ NameValue::Resolved { .. } => vec![value],
                NameValue::Unresolved(reason) => {
                    trace!(%reason, "name argument did not resolve, skipping");
                    Vec::new()
                }
            }
        };

        for value in values {
            if let NameValue::Resolved { text, pos } = value {
                if !is_valid_snake_case(&text) {
                    result.add_diagnostic(Diagnostic::new(ctx.file_path(), pos, &text));
                }
            }
        }
    }
}
