//! Code lens support: one "Run cell" lens per detected code cell, with the
//! results of the last request memoized per document.

use crate::{
    capabilities::runnable::{Runnable, RunnableCell},
    config::CellsConfig,
    core::{
        cells::{CellFinder, MarkerCellFinder},
        document::TextDocument,
        session::Session,
    },
    error::LanguageServerError,
};
use dashmap::{mapref::entry::Entry, DashMap};
use lsp_types::{CodeLens, Url};

/// Lenses stored for a single document, stamped with the version of the
/// content they were computed from.
#[derive(Debug, Clone)]
struct CachedLenses {
    version: i32,
    lenses: Vec<CodeLens>,
}

/// Per-document memo of the last supplied code lenses.
///
/// Entries are keyed by document URI and never expire on their own. A stored
/// entry is replaced once a request arrives for a newer document version and
/// removed when recomputation yields no cells or fails.
#[derive(Debug, Default)]
pub struct CodeLensCache {
    entries: DashMap<String, CachedLenses>,
}

impl CodeLensCache {
    /// Returns the code lenses for `document`, reusing the stored set when it
    /// was computed from the same document version.
    ///
    /// The map entry is held across the recomputation, so concurrent requests
    /// for the same document cannot interleave their cache updates.
    pub fn code_lens_for(
        &self,
        document: &TextDocument,
        finder: &dyn CellFinder,
    ) -> Result<Vec<CodeLens>, LanguageServerError> {
        match self.entries.entry(document.uri().to_string()) {
            Entry::Occupied(mut entry) => {
                if entry.get().version == document.version() {
                    return Ok(entry.get().lenses.clone());
                }
                // The stored lenses are stale. Recompute, and make sure the
                // stale entry is gone even if detection fails.
                let lenses = match build_lenses(document, finder) {
                    Ok(lenses) => lenses,
                    Err(err) => {
                        entry.remove();
                        return Err(err);
                    }
                };
                if lenses.is_empty() {
                    entry.remove();
                } else {
                    entry.insert(CachedLenses {
                        version: document.version(),
                        lenses: lenses.clone(),
                    });
                }
                Ok(lenses)
            }
            Entry::Vacant(entry) => {
                let lenses = build_lenses(document, finder)?;
                if !lenses.is_empty() {
                    entry.insert(CachedLenses {
                        version: document.version(),
                        lenses: lenses.clone(),
                    });
                }
                Ok(lenses)
            }
        }
    }

    /// Whether `document` currently contains at least one code cell.
    ///
    /// Goes through the same path as [`Self::code_lens_for`], so the answer
    /// benefits from the cache. Detection failures are logged and reported as
    /// `false` rather than surfaced to the caller.
    pub fn has_cells(&self, document: &TextDocument, finder: &dyn CellFinder) -> bool {
        match self.code_lens_for(document, finder) {
            Ok(lenses) => !lenses.is_empty(),
            Err(err) => {
                tracing::error!("Failed to detect code cells in {}: {err}", document.uri());
                false
            }
        }
    }
}

fn build_lenses(
    document: &TextDocument,
    finder: &dyn CellFinder,
) -> Result<Vec<CodeLens>, LanguageServerError> {
    let lenses = finder
        .find_cells(document)?
        .into_iter()
        .map(|cell| {
            let runnable = RunnableCell {
                uri: document.uri().clone(),
                range: cell.range,
            };
            CodeLens {
                range: *runnable.range(),
                command: Some(runnable.command()),
                data: None,
            }
        })
        .collect();
    Ok(lenses)
}

pub fn code_lens(
    session: &Session,
    url: &Url,
    config: &CellsConfig,
) -> Result<Vec<CodeLens>, LanguageServerError> {
    let document = session.get_text_document(url)?;
    let finder = MarkerCellFinder::new(config.marker_pattern.clone());
    session.code_lens_cache.code_lens_for(&document, &finder)
}

pub fn has_cells(session: &Session, url: &Url, config: &CellsConfig) -> bool {
    match session.get_text_document(url) {
        Ok(document) => {
            let finder = MarkerCellFinder::new(config.marker_pattern.clone());
            session.code_lens_cache.has_cells(&document, &finder)
        }
        Err(err) => {
            tracing::error!("{}", err.to_string());
            false
        }
    }
}
