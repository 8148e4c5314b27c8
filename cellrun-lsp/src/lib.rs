use lsp_types::request::Request;
use tower_lsp::{LspService, Server};

mod capabilities;
pub mod config;
pub mod core;
pub mod error;
pub mod lsp_ext;
pub mod server;
use lsp_ext::HasCellsRequest;
use server::Backend;

pub async fn start(cell_marker: Option<String>) {
    let stdin = tokio::io::stdin();
    let stdout = tokio::io::stdout();

    let (service, socket) =
        LspService::build(move |client| Backend::with_marker_pattern(client, cell_marker))
            .custom_method(HasCellsRequest::METHOD, Backend::has_cells)
            .finish();
    Server::new(stdin, stdout, socket).serve(service).await;
}
