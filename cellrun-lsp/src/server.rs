//! The `Backend` that tower-lsp drives: one session per client connection,
//! with handlers for the document lifecycle and the code lens surface.

use crate::{
    capabilities,
    config::Config,
    core::{document::TextDocument, session::Session},
    error::LanguageServerError,
    lsp_ext,
};
use cellrun_tracing::{tracing_subscriber, FmtSpan, TracingWriter};
use parking_lot::RwLock;
use std::sync::Arc;
use tower_lsp::lsp_types::*;
use tower_lsp::{jsonrpc, Client, LanguageServer};
use tracing::metadata::LevelFilter;

#[derive(Debug)]
pub struct Backend {
    pub client: Client,
    pub config: RwLock<Config>,
    session: Arc<Session>,
}

impl Backend {
    pub fn new(client: Client) -> Self {
        Backend {
            client,
            config: RwLock::new(Default::default()),
            session: Arc::new(Session::new()),
        }
    }

    /// Builds a backend with the cell marker pattern overridden from the
    /// command line. Options sent by the client during `initialize` still
    /// take precedence.
    pub fn with_marker_pattern(client: Client, marker_pattern: Option<String>) -> Self {
        let backend = Backend::new(client);
        if let Some(pattern) = marker_pattern {
            backend.config.write().cells.marker_pattern = pattern;
        }
        backend
    }
}

pub fn capabilities() -> ServerCapabilities {
    ServerCapabilities {
        text_document_sync: Some(TextDocumentSyncCapability::Kind(
            TextDocumentSyncKind::INCREMENTAL,
        )),
        code_lens_provider: Some(CodeLensOptions {
            resolve_provider: Some(false),
        }),
        ..ServerCapabilities::default()
    }
}

#[tower_lsp::async_trait]
impl LanguageServer for Backend {
    async fn initialize(&self, params: InitializeParams) -> jsonrpc::Result<InitializeResult> {
        if let Some(initialization_options) = &params.initialization_options {
            let mut config = self.config.write();
            *config = serde_json::from_value(initialization_options.clone())
                .ok()
                .unwrap_or_default();
        }

        // Initializing tracing library based on the user's config
        let level = self.config.read().logging.level;
        if level != LevelFilter::OFF {
            tracing_subscriber::fmt::Subscriber::builder()
                .with_ansi(false)
                .with_max_level(level)
                .with_span_events(FmtSpan::CLOSE)
                .with_writer(TracingWriter::Stderr)
                .init();
        }
        tracing::info!("Initializing the Cellrun Language Server");

        Ok(InitializeResult {
            server_info: None,
            capabilities: capabilities(),
            ..InitializeResult::default()
        })
    }

    // LSP-Server Lifecycle
    async fn initialized(&self, _: InitializedParams) {
        tracing::info!("Cellrun Language Server Initialized");
        self.client
            .log_message(MessageType::INFO, "Cellrun language server initialized")
            .await;
    }

    async fn shutdown(&self) -> jsonrpc::Result<()> {
        tracing::info!("Shutting Down the Cellrun Language Server");
        Ok(())
    }

    // Document Handlers
    async fn did_open(&self, params: DidOpenTextDocumentParams) {
        let TextDocumentItem {
            uri,
            language_id,
            version,
            text,
        } = params.text_document;
        let text_document = TextDocument::new(uri, language_id, version, &text);
        if let Err(err) = self.session.store_document(text_document) {
            tracing::error!("{}", err.to_string());
        }
    }

    async fn did_change(&self, params: DidChangeTextDocumentParams) {
        if let Err(err) = self.session.update_text_document(
            &params.text_document.uri,
            params.text_document.version,
            params.content_changes,
        ) {
            tracing::error!("{}", err.to_string());
        }
    }

    async fn did_close(&self, params: DidCloseTextDocumentParams) {
        if let Err(err) = self.session.remove_document(&params.text_document.uri) {
            tracing::error!("{}", err.to_string());
        }
    }

    async fn code_lens(&self, params: CodeLensParams) -> jsonrpc::Result<Option<Vec<CodeLens>>> {
        let config = self.config.read().cells.clone();
        match capabilities::code_lens::code_lens(&self.session, &params.text_document.uri, &config)
        {
            Ok(lenses) => Ok(Some(lenses)),
            Err(LanguageServerError::DocumentError(err)) => {
                tracing::error!("{}", err.to_string());
                Ok(None)
            }
            Err(err) => Err(err.into()),
        }
    }
}

// Custom LSP-Server Methods
impl Backend {
    /// Whether the document currently contains at least one code cell.
    ///
    /// Never fails; a missing document or a detection problem is logged and
    /// answered with `false`.
    pub async fn has_cells(&self, params: lsp_ext::HasCellsParams) -> jsonrpc::Result<bool> {
        let config = self.config.read().cells.clone();
        Ok(capabilities::code_lens::has_cells(
            &self.session,
            &params.text_document.uri,
            &config,
        ))
    }
}
