/// Subtest Lint
///
/// A linter for Go test files that finds sub-test registrations
/// (`t.Run(name, body)` on a `*testing.T`, `*testing.B` or `*testing.F`
/// receiver), resolves the compile-time value of the name argument and
/// checks it against the snake_case naming convention.
pub mod cli;
pub mod discovery;
pub mod engine;
pub mod error;
pub mod logging;
pub mod naming;
pub mod output;
pub mod scanner;

pub use engine::{Context, NameValue, Resolver, SourcePos};
pub use error::{Error, Result};
pub use naming::is_valid_snake_case;
pub use output::Diagnostic;
pub use scanner::{ScanResult, SubtestScanner};
