/// Failure to build a GPU program.
///
/// There is no fallback pipeline, so callers treat this as fatal.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum BuildError {
    #[error("shader `{label}` failed to compile:\n{diagnostics}")]
    Shader { label: String, diagnostics: String },
}
