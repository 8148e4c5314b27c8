//! cellrun extensions to the LSP.

use lsp_types::{request::Request, TextDocumentIdentifier};
use serde::{Deserialize, Serialize};

#[derive(Debug, Eq, PartialEq, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HasCellsParams {
    pub text_document: TextDocumentIdentifier,
}

pub enum HasCellsRequest {}

impl Request for HasCellsRequest {
    type Params = HasCellsParams;
    type Result = bool;
    const METHOD: &'static str = "cellrun/hasCells";
}
