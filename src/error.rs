use thiserror::Error;

/// Errors raised while compiling a pattern. Matching itself never fails.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CompileError {
    #[error("unsupported escape sequence: \\{0}")]
    UnsupportedEscape(char),
    #[error("unclosed character class")]
    UnclosedCharacterClass,
}
