use crate::error::ForeignError;

/// Language tags `call` accepts. Anything else is rejected before delegation.
pub const SUPPORTED_LANGUAGES: &[&str] = &["py", "lua"];

/// Returns `true` if `language` is on the allow-list.
///
/// # Example
/// ```
/// use sunum::interpreter::foreign::is_supported;
///
/// assert!(is_supported("py"));
/// assert!(is_supported("lua"));
/// assert!(!is_supported("ruby"));
/// assert!(!is_supported("PY"));
/// ```
#[must_use]
pub fn is_supported(language: &str) -> bool {
    SUPPORTED_LANGUAGES.contains(&language)
}

/// Runs code written in another language on behalf of `call`.
///
/// Only tags from [`SUPPORTED_LANGUAGES`] ever reach an implementation. The
/// code is passed through untouched; whatever the foreign code prints goes
/// wherever the runtime sends it, not through the interpreter's output.
pub trait ForeignRuntime {
    /// Executes `code` as `language`.
    ///
    /// # Errors
    /// Returns a [`ForeignError`] if no runtime is available for the language
    /// or the code fails.
    fn execute(&mut self, language: &str, code: &str) -> Result<(), ForeignError>;
}

/// The default runtime: every language is unavailable.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoForeignRuntime;

impl ForeignRuntime for NoForeignRuntime {
    fn execute(&mut self, language: &str, _code: &str) -> Result<(), ForeignError> {
        Err(ForeignError::Unavailable { language: language.to_string() })
    }
}
