use std::result::Result as StdResult;

use serde_json::Value as JsonValue;
use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum Error {
    #[error("failed to build http client:\n{0}")]
    BuildHttpClient(reqwest::Error),
    #[error("failed to execute http request:\n{0}")]
    HttpRequest(reqwest::Error),
    #[error("error: rpc response status is {0}. payload:\n{1:?}")]
    RpcResponseStatus(u16, Option<String>),
    #[error("failed to parse rpc response:\n{0}")]
    RpcResponseParse(reqwest::Error),
    #[error("invalid rpc response")]
    InvalidRpcResponse,
    #[error("rpc returned an error object:\n{0}")]
    Rpc(JsonValue),
    #[error("failed to parse rpc result:\n{0}")]
    RpcResultParse(serde_json::Error),
    #[error("failed to parse address:\n{0}")]
    ParseAddress(String),
    #[error("call returned {0} bytes, expected {1}")]
    InvalidCallOutput(usize, usize),
    #[error("call output word doesn't fit the expected integer range")]
    AnswerOutOfRange,
    #[error("no rpc endpoint configured")]
    NoEndpoints,
}

pub type Result<T> = StdResult<T, Error>;
