use thiserror::Error;

#[derive(Debug, Error)]
pub enum GedTreeError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Root '{id}' does not match any person or family in the input")]
    UnresolvedRoot { id: String },

    #[error("No input file specified")]
    MissingInput,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl GedTreeError {
    /// Process exit code for this error kind. Configuration problems exit 2
    /// (the same code clap uses for usage errors), an unresolved root exits 3,
    /// I/O failures exit 1.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            GedTreeError::Config(_) | GedTreeError::MissingInput => 2,
            GedTreeError::UnresolvedRoot { .. } => 3,
            GedTreeError::Io(_) => 1,
        }
    }
}
