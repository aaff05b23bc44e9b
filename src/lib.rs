pub mod ast;
pub mod config;
pub mod error;
pub mod matcher;
pub mod parser;

pub use ast::{Pattern, PatternItem};
pub use error::CompileError;
pub use matcher::matches;

/// Compile `pattern` into its instruction sequence.
pub fn compile(pattern: &str) -> Result<Pattern, CompileError> {
    parser::Parser::new(pattern).parse()
}

/// Compile `pattern` and match it against `input`.
pub fn is_match(input: &[u8], pattern: &str) -> Result<bool, CompileError> {
    let pattern = compile(pattern)?;
    Ok(matcher::matches(input, &pattern))
}
