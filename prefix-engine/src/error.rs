//! Engine error types

use alloc::string::String;
use core::fmt;

use prefix_css::ParseError;

/// Engine error type.
///
/// The transform itself never fails; these surface only from engine
/// construction and strict compilation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Cache key is empty or not made of `[a-z-]`
    InvalidKey(String),
    /// Source rejected by strict compilation
    Parse(ParseError),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::InvalidKey(key) => write!(
                f,
                "Invalid cache key {:?}: keys may only contain lower case letters and '-'",
                key
            ),
            EngineError::Parse(e) => write!(f, "Parse error: {}", e),
        }
    }
}

impl From<ParseError> for EngineError {
    fn from(e: ParseError) -> Self {
        EngineError::Parse(e)
    }
}

/// Result type for engine operations
pub type Result<T> = core::result::Result<T, EngineError>;
