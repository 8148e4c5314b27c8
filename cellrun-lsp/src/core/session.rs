use crate::{
    capabilities::code_lens::CodeLensCache,
    core::document::TextDocument,
    error::DocumentError,
};
use dashmap::DashMap;
use lsp_types::{TextDocumentContentChangeEvent, Url};

pub type Documents = DashMap<String, TextDocument>;

/// All the state held for a single client connection: the open documents and
/// the memoized code lenses for them.
#[derive(Debug, Default)]
pub struct Session {
    pub documents: Documents,
    pub code_lens_cache: CodeLensCache,
}

impl Session {
    pub fn new() -> Self {
        Session::default()
    }

    pub fn store_document(&self, text_document: TextDocument) -> Result<(), DocumentError> {
        let uri = text_document.uri().clone();
        match self.documents.insert(uri.to_string(), text_document) {
            None => Ok(()),
            _ => Err(DocumentError::DocumentAlreadyStored {
                path: uri.path().to_string(),
            }),
        }
    }

    pub fn remove_document(&self, url: &Url) -> Result<TextDocument, DocumentError> {
        match self.documents.remove(url.as_str()) {
            Some((_, text_document)) => Ok(text_document),
            None => Err(DocumentError::DocumentNotFound {
                path: url.path().to_string(),
            }),
        }
    }

    pub fn get_text_document(&self, url: &Url) -> Result<TextDocument, DocumentError> {
        self.documents
            .get(url.as_str())
            .map(|document| document.clone())
            .ok_or_else(|| DocumentError::DocumentNotFound {
                path: url.path().to_string(),
            })
    }

    pub fn update_text_document(
        &self,
        url: &Url,
        version: i32,
        changes: Vec<TextDocumentContentChangeEvent>,
    ) -> Result<(), DocumentError> {
        let mut document =
            self.documents
                .get_mut(url.as_str())
                .ok_or_else(|| DocumentError::DocumentNotFound {
                    path: url.path().to_string(),
                })?;
        changes.iter().for_each(|change| {
            document.apply_change(change);
        });
        document.set_version(version);
        Ok(())
    }
}
