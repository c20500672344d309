pub mod context;
pub mod sources;
pub mod strategies;
pub mod value;

pub use context::Context;
pub use sources::UnresolvedReason;
pub use value::{NameValue, SourcePos};

use strategies::{ConcatStrategy, IdentifierStrategy, LiteralStrategy};
use tree_sitter::Node;

/// One way of turning an expression node into a compile-time string.
/// Strategies are tried in order; the first that can handle the node
/// decides the outcome, resolved or not.
pub trait Strategy: Send + Sync {
    fn name(&self) -> &'static str;
    fn can_handle<'a>(&self, node: &Node<'a>, ctx: &Context<'a>) -> bool;
    fn resolve<'a>(&self, node: &Node<'a>, ctx: &Context<'a>) -> NameValue;
}

pub struct Resolver {
    strategies: Vec<Box<dyn Strategy>>,
}

impl Resolver {
    pub fn new() -> Self {
        Self {
            strategies: Self::default_strategies(),
        }
    }

    /// Returns the default strategy chain in order of complexity.
    fn default_strategies() -> Vec<Box<dyn Strategy>> {
        vec![
            // Order matters: simpler strategies first
            Box::new(LiteralStrategy::new()),
            Box::new(ConcatStrategy::new()),
            Box::new(IdentifierStrategy::new()),
        ]
    }

    pub fn builder() -> ResolverBuilder {
        ResolverBuilder::new()
    }

    /// Resolve one expression node. Recursive resolution (identifier
    /// initializers, concat operands) goes back through here with the
    /// same context, so the visited set spans the whole chain and any
    /// cycle among initializers is caught.
    pub fn resolve<'a>(&self, node: &Node<'a>, ctx: &Context<'a>) -> NameValue {
        if let Some(cached) = ctx.get_cached_value(node) {
            return cached;
        }

        if ctx.has_visited(node) {
            return NameValue::unresolved(UnresolvedReason::CycleDetected);
        }
        ctx.mark_visited(node);

        let result = self.try_strategies(node, ctx);

        ctx.cache_value(node, result.clone());
        ctx.unmark_visited(node);
        result
    }

    fn try_strategies<'a>(&self, node: &Node<'a>, ctx: &Context<'a>) -> NameValue {
        for strategy in &self.strategies {
            if strategy.can_handle(node, ctx) {
                return strategy.resolve(node, ctx);
            }
        }

        // Selectors are the table-driven signal; the caller decides
        // whether to attempt that path, never this resolver.
        if node.kind() == "selector_expression" {
            return NameValue::unresolved(UnresolvedReason::SelectorExpression);
        }
        NameValue::unresolved(UnresolvedReason::Unsupported)
    }

    pub fn strategy_count(&self) -> usize {
        self.strategies.len()
    }

    pub fn strategy_names(&self) -> Vec<&'static str> {
        self.strategies.iter().map(|s| s.name()).collect()
    }
}

impl Default for Resolver {
    fn default() -> Self {
        Self::new()
    }
}

pub struct ResolverBuilder {
    strategies: Vec<Box<dyn Strategy>>,
    include_defaults: bool,
}

impl ResolverBuilder {
    pub fn new() -> Self {
        Self {
            strategies: Vec::new(),
            include_defaults: true,
        }
    }

    pub fn with_strategy<S: Strategy + 'static>(mut self, strategy: S) -> Self {
        self.strategies.push(Box::new(strategy));
        self
    }

    pub fn without_defaults(mut self) -> Self {
        self.include_defaults = false;
        self
    }

    pub fn build(mut self) -> Resolver {
        if self.include_defaults && self.strategies.is_empty() {
            self.strategies = Resolver::default_strategies();
        }

        Resolver {
            strategies: self.strategies,
        }
    }
}

impl Default for ResolverBuilder {
    fn default() -> Self {
        Self::new()
    }
}
