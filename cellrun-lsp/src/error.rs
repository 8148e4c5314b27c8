use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LanguageServerError {
    #[error(transparent)]
    DocumentError(#[from] DocumentError),
    #[error(transparent)]
    CellError(#[from] CellError),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DocumentError {
    #[error("No document found at {:?}", path)]
    DocumentNotFound { path: String },
    #[error("Document is already stored at {:?}", path)]
    DocumentAlreadyStored { path: String },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CellError {
    #[error("Invalid cell marker pattern {:?}: {}", pattern, message)]
    InvalidMarkerPattern { pattern: String, message: String },
}

impl From<LanguageServerError> for tower_lsp::jsonrpc::Error {
    fn from(err: LanguageServerError) -> Self {
        let mut error = tower_lsp::jsonrpc::Error::internal_error();
        error.message = err.to_string().into();
        error
    }
}
