//! Helpers shared by the cellrun-lsp integration tests.

use lsp_types::Url;
use std::{env, fs, io::Read, path::PathBuf};

/// Reads a fixture file and returns its `file://` URL along with its text.
pub fn load_fixture(src_path: PathBuf) -> (Url, String) {
    let mut file = fs::File::open(&src_path).unwrap();
    let mut text = String::new();
    file.read_to_string(&mut text).unwrap();

    let uri = Url::from_file_path(src_path).unwrap();
    (uri, text)
}

pub fn cellrun_workspace_dir() -> PathBuf {
    env::current_dir().unwrap().parent().unwrap().to_path_buf()
}

pub fn test_fixtures_dir() -> PathBuf {
    cellrun_workspace_dir().join("cellrun-lsp/tests/fixtures")
}
