//! Error types
//!
//! The sugar layer adds no error taxonomy of its own to the widget calls;
//! the only fallible operations are context lifecycle and string conversion.

use thiserror::Error;

/// Result type for context operations
pub type SugarResult<T> = Result<T, SugarError>;

/// Errors that can occur while managing the Dear ImGui context
#[derive(Error, Debug)]
pub enum SugarError {
    /// Context creation failed
    #[error("failed to create Dear ImGui context: {reason}")]
    ContextCreation { reason: String },

    /// Context is already active
    #[error("a Dear ImGui context is already active")]
    ContextAlreadyActive,

    /// A string destined for the FFI boundary contained an interior NUL byte
    #[error("string contains an interior NUL byte")]
    InvalidString(#[from] std::ffi::NulError),
}
