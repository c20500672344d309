mod concat;
mod identifier;
mod literal;

pub use concat::ConcatStrategy;
pub use identifier::IdentifierStrategy;
pub use literal::LiteralStrategy;

pub(crate) use identifier::{lookup_initializer, InitLookup};
