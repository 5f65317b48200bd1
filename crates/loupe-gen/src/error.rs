//! Error types for entry-point generation.

use thiserror::Error;

/// Errors produced while serializing props or generating entry sources.
#[derive(Debug, Error)]
pub enum GenError {
    /// A boolean prop's stored text was neither "true" nor "false".
    #[error("Invalid boolean default for prop '{name}': {value:?}\n\nHint: boolean props must default to \"true\" or \"false\"")]
    InvalidBoolean {
        /// Prop name.
        name: String,
        /// The stored default text.
        value: String,
    },

    /// A number prop's stored text did not parse as a numeric literal.
    #[error("Invalid numeric default for prop '{name}': {value:?}\n\nHint: number props must default to a numeric literal like \"42\" or \"3.14\"")]
    InvalidNumber {
        /// Prop name.
        name: String,
        /// The stored default text.
        value: String,
    },

    /// A function prop was rejected by the active policy.
    #[error("Function default for prop '{name}' was rejected\n\nHint: function defaults are inlined verbatim as executable code; opt in with FunctionPropPolicy::Inline if the workspace is trusted")]
    FunctionRejected {
        /// Prop name.
        name: String,
    },

    /// A prop or component name is not a valid identifier.
    #[error("'{name}' is not a valid identifier")]
    InvalidIdentifier {
        /// The offending name.
        name: String,
    },
}

/// Result type alias using `GenError`.
pub type Result<T, E = GenError> = std::result::Result<T, E>;
