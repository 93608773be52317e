use thiserror::Error;

pub type CodegenResult<T> = Result<T, CodegenError>;

#[derive(Error, Debug)]
pub enum CodegenError {
    #[error(transparent)]
    Inspect(#[from] InspectError),
    #[error(transparent)]
    Emit(#[from] EmitError),
}

/// Inspection failures. Fatal: the generation request aborts with no
/// partial code emitted.
#[derive(Error, Debug)]
pub enum InspectError {
    #[error("struct not found: {0}")]
    StructNotFound(String),

    #[error("not a struct with named fields: {0}")]
    NotAStruct(String),

    /// The name resolves in more than one source. Listed labels make the
    /// conflict actionable instead of silently picking one.
    #[error("struct {name} is declared in more than one source: {sources:?}")]
    Ambiguous { name: String, sources: Vec<String> },

    #[error("invalid target (expected module::path::Type): {0}")]
    InvalidTarget(String),

    #[error(transparent)]
    Parse(#[from] syn::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Emission failures.
#[derive(Error, Debug)]
pub enum EmitError {
    /// The generated tree did not re-parse for formatting. Best-effort:
    /// the unformatted text has already been written to the sink.
    #[error("generated code failed to format: {source}")]
    Format { raw: String, source: syn::Error },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
