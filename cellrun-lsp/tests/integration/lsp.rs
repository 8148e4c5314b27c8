//! This file contains the methods used for simulating LSP json-rpc notifications and requests.
//! The methods are used to build and send requests and notifications to the LSP service
//! and assert the expected responses.

use assert_json_diff::assert_json_eq;
use cellrun_lsp::server::{self, Backend};
use serde_json::json;
use std::borrow::Cow;
use tower::{Service, ServiceExt};
use tower_lsp::{
    jsonrpc::{ErrorCode, Id, Request, Response},
    lsp_types::*,
    ExitedError, LspService,
};

pub(crate) fn build_request_with_id(
    method: impl Into<Cow<'static, str>>,
    params: serde_json::Value,
    id: impl Into<Id>,
) -> Request {
    Request::build(method).params(params).id(id).finish()
}

pub(crate) async fn call_request(
    service: &mut LspService<Backend>,
    req: Request,
) -> Result<Option<Response>, ExitedError> {
    service.ready().await?.call(req).await
}

pub(crate) async fn initialize_request(service: &mut LspService<Backend>) -> Request {
    let params = json!({ "capabilities": server::capabilities() });
    let initialize = build_request_with_id("initialize", params, 1);
    let response = call_request(service, initialize.clone()).await;
    let expected = Response::from_ok(1.into(), json!({ "capabilities": server::capabilities() }));
    assert_json_eq!(expected, response.ok().unwrap());
    initialize
}

pub(crate) async fn initialize_request_with_options(
    service: &mut LspService<Backend>,
    options: serde_json::Value,
) -> Request {
    let params = json!({
        "capabilities": server::capabilities(),
        "initializationOptions": options,
    });
    let initialize = build_request_with_id("initialize", params, 1);
    let response = call_request(service, initialize.clone()).await;
    let expected = Response::from_ok(1.into(), json!({ "capabilities": server::capabilities() }));
    assert_json_eq!(expected, response.ok().unwrap());
    initialize
}

pub(crate) async fn initialized_notification(service: &mut LspService<Backend>) {
    let initialized = Request::build("initialized").finish();
    let response = call_request(service, initialized).await;
    assert_eq!(response, Ok(None));
}

pub(crate) async fn shutdown_request(service: &mut LspService<Backend>) -> Request {
    let shutdown = Request::build("shutdown").id(1).finish();
    let response = call_request(service, shutdown.clone()).await;
    let expected = Response::from_ok(1.into(), json!(null));
    assert_json_eq!(expected, response.ok().unwrap());
    shutdown
}

pub(crate) async fn exit_notification(service: &mut LspService<Backend>) {
    let exit = Request::build("exit").finish();
    let response = call_request(service, exit.clone()).await;
    assert_eq!(response, Ok(None));
}

pub(crate) async fn did_open_notification(
    service: &mut LspService<Backend>,
    uri: &Url,
    text: &str,
) {
    let params = json!({
        "textDocument": {
            "uri": uri,
            "languageId": "python",
            "version": 1,
            "text": text,
        },
    });

    let did_open = Request::build("textDocument/didOpen")
        .params(params)
        .finish();
    let response = call_request(service, did_open).await;
    assert_eq!(response, Ok(None));
}

pub(crate) async fn did_change_request(
    service: &mut LspService<Backend>,
    uri: &Url,
    version: i32,
    changes: serde_json::Value,
) -> Request {
    let params = json!({
        "textDocument": {
            "uri": uri,
            "version": version,
        },
        "contentChanges": changes,
    });
    let did_change = Request::build("textDocument/didChange")
        .params(params)
        .finish();
    let response = call_request(service, did_change.clone()).await;
    assert_eq!(response, Ok(None));
    did_change
}

pub(crate) async fn did_close_notification(service: &mut LspService<Backend>, uri: &Url) {
    let params = json!({
        "textDocument": {
            "uri": uri,
        },
    });
    let did_close = Request::build("textDocument/didClose")
        .params(params)
        .finish();
    let response = call_request(service, did_close).await;
    assert_eq!(response, Ok(None));
}

/// Sends a `textDocument/codeLens` request and asserts that the response
/// matches `expected` exactly, including the order of the lenses.
pub(crate) async fn code_lens_request(
    service: &mut LspService<Backend>,
    uri: &Url,
    id: i64,
    expected: serde_json::Value,
) -> Request {
    let params = json!({
        "textDocument": {
            "uri": uri,
        },
    });
    let code_lens = build_request_with_id("textDocument/codeLens", params, id);
    let response = call_request(service, code_lens.clone()).await;
    let expected = Response::from_ok(id.into(), expected);
    assert_json_eq!(expected, response.ok().unwrap());
    code_lens
}

pub(crate) async fn code_lens_error_request(service: &mut LspService<Backend>, uri: &Url, id: i64) {
    let params = json!({
        "textDocument": {
            "uri": uri,
        },
    });
    let code_lens = build_request_with_id("textDocument/codeLens", params, id);
    let response = call_request(service, code_lens).await;
    let (_, result) = response.ok().unwrap().unwrap().into_parts();
    let err = result.expect_err("expected code lens request to fail");
    assert_eq!(err.code, ErrorCode::InternalError);
    assert!(err.message.contains("Invalid cell marker pattern"));
}

pub(crate) async fn has_cells_request(
    service: &mut LspService<Backend>,
    uri: &Url,
    id: i64,
    expected: bool,
) -> Request {
    let params = json!({
        "textDocument": {
            "uri": uri,
        },
    });
    let has_cells = build_request_with_id("cellrun/hasCells", params, id);
    let response = call_request(service, has_cells.clone()).await;
    let expected = Response::from_ok(id.into(), json!(expected));
    assert_json_eq!(expected, response.ok().unwrap());
    has_cells
}
