use thiserror::Error;

/// Failures reported by a [`ForeignRuntime`](crate::interpreter::foreign::ForeignRuntime).
///
/// The interpreter turns these into a
/// [`RuntimeError::ForeignExecution`](crate::error::RuntimeError::ForeignExecution)
/// tagged with the location of the `call`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ForeignError {
    /// No runtime for the language is linked in.
    #[error("no {language} runtime is available")]
    Unavailable {
        /// The requested language tag.
        language: String,
    },
    /// The runtime ran the code and it failed. Only embedder-supplied runtimes
    /// report this; [`NoForeignRuntime`](crate::interpreter::foreign::NoForeignRuntime)
    /// never runs anything.
    #[error("{language} code failed: {details}")]
    Failed {
        /// The requested language tag.
        language: String,
        /// What the runtime reported.
        details:  String,
    },
}
