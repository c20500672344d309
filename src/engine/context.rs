//! Resolution context that carries state during AST traversal.
//!
//! This provides the resolver with access to:
//! - The source file being analyzed
//! - Cached resolution results
//! - Visited-node bookkeeping for cycle detection

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use tree_sitter::{Node, Tree};

use crate::engine::NameValue;

const MAX_CACHE_SIZE: usize = 10_000;

pub struct Context<'a> {
    /// The Tree-sitter parse tree
    tree: &'a Tree,

    /// Source code bytes
    source_code: &'a [u8],

    /// File path being analyzed
    file_path: String,

    /// Cache of resolved values, keyed by node id. Each identifier use
    /// is its own node, so shadowed names never share a cache entry.
    value_cache: RefCell<HashMap<usize, NameValue>>,

    /// Visited nodes (cycle detection)
    visited_nodes: RefCell<HashSet<usize>>,
}

impl<'a> Context<'a> {
    pub fn new(tree: &'a Tree, source_code: &'a [u8], file_path: String) -> Self {
        Self {
            tree,
            source_code,
            file_path,
            value_cache: RefCell::new(HashMap::new()),
            visited_nodes: RefCell::new(HashSet::new()),
        }
    }

    /// The lifetime is the tree's own borrow, not `&self`, so nodes
    /// derived from the root outlive short borrows of the context.
    pub fn tree(&self) -> &'a Tree {
        self.tree
    }

    pub fn source_code(&self) -> &[u8] {
        self.source_code
    }

    pub fn file_path(&self) -> &str {
        &self.file_path
    }

    /// Get the source code text for a node
    /// Uses lossy UTF-8 conversion to handle invalid sequences gracefully
    pub fn node_text(&self, node: &Node) -> String {
        let start = node.start_byte();
        let end = node.end_byte();
        String::from_utf8_lossy(&self.source_code[start..end]).to_string()
    }

    /// Strip the delimiters from a Go string literal and produce its
    /// value. Interpreted literals (double quotes) have their escape
    /// sequences decoded; raw literals (backticks) are taken verbatim.
    pub fn unquote_string(&self, s: &str) -> String {
        let s = s.trim();
        if s.len() >= 2 && s.starts_with('`') && s.ends_with('`') {
            return s[1..s.len() - 1].to_string();
        }
        if s.len() >= 2 && s.starts_with('"') && s.ends_with('"') {
            return decode_escapes(&s[1..s.len() - 1]);
        }
        s.to_string()
    }

    /// Check if we've already visited this node (cycle detection)
    pub fn has_visited(&self, node: &Node) -> bool {
        self.visited_nodes.borrow().contains(&node.id())
    }

    pub fn mark_visited(&self, node: &Node) {
        self.visited_nodes.borrow_mut().insert(node.id());
    }

    pub fn unmark_visited(&self, node: &Node) {
        self.visited_nodes.borrow_mut().remove(&node.id());
    }

    pub fn get_cached_value(&self, node: &Node) -> Option<NameValue> {
        self.value_cache.borrow().get(&node.id()).cloned()
    }

    pub fn cache_value(&self, node: &Node, value: NameValue) {
        let mut cache = self.value_cache.borrow_mut();
        if cache.len() >= MAX_CACHE_SIZE {
            let first_key = match cache.keys().next() {
                Some(&key) => key,
                None => return,
            };
            cache.remove(&first_key);
        }
        cache.insert(node.id(), value);
    }
}

/// Decode the Go escape sequences of an interpreted string literal.
/// Unknown or malformed escapes are kept as written rather than
/// dropped.
fn decode_escapes(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('a') => out.push('\x07'),
            Some('b') => out.push('\x08'),
            Some('f') => out.push('\x0c'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('t') => out.push('\t'),
            Some('v') => out.push('\x0b'),
            Some('\\') => out.push('\\'),
            Some('\'') => out.push('\''),
            Some('"') => out.push('"'),
            Some('x') => push_hex(&mut out, &mut chars, 2, 'x'),
            Some('u') => push_hex(&mut out, &mut chars, 4, 'u'),
            Some('U') => push_hex(&mut out, &mut chars, 8, 'U'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}

fn push_hex(out: &mut String, chars: &mut std::str::Chars, len: usize, marker: char) {
    let digits: String = chars.by_ref().take(len).collect();
    match u32::from_str_radix(&digits, 16).ok().and_then(char::from_u32) {
        Some(c) => out.push(c),
        None => {
            out.push('\\');
            out.push(marker);
            out.push_str(&digits);
        }
    }
}
