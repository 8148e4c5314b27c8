//! A small binary for starting the cellrun language server.
//!
//! Speaks the Language Server Protocol over stdin/stdout; editors start it as
//! a child process and talk JSON-RPC to it.

use clap::Parser;

#[derive(Debug, Parser)]
#[clap(
    name = "cellrun",
    about = "Language server supplying \"Run cell\" code lenses for notebook style code cells.",
    version
)]
pub struct App {
    /// Regular expression recognizing the lines that introduce a code cell,
    /// overriding the built-in notebook markers.
    #[clap(long)]
    pub cell_marker: Option<String>,
}

#[tokio::main]
async fn main() {
    let app = App::parse();
    cellrun_lsp::start(app.cell_marker).await
}
