pub(crate) mod lsp;
