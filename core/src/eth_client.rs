use std::time::Duration;

use serde_json::Value as JsonValue;

use crate::config::HttpConfig;
use crate::error::{Error, Result};
use crate::eth_request::EthRequest;

/// Blocking json-rpc transport against a single endpoint.
///
/// A benchmark call unit constructs its own client so every call opens an
/// independent outbound connection.
pub struct EthClient {
    http_client: reqwest::blocking::Client,
    rpc_url: url::Url,
}

impl EthClient {
    pub fn new(rpc_url: url::Url, cfg: &HttpConfig) -> Result<EthClient> {
        let request_timeout = Duration::from_secs(cfg.request_timeout_secs.get());
        let connect_timeout = Duration::from_millis(cfg.connect_timeout_ms.get());

        let http_client = reqwest::blocking::ClientBuilder::new()
            .gzip(true)
            .timeout(request_timeout)
            .connect_timeout(connect_timeout)
            .build()
            .map_err(Error::BuildHttpClient)?;

        Ok(EthClient {
            http_client,
            rpc_url,
        })
    }

    pub fn send<R: EthRequest>(&self, req: &R) -> Result<R::Resp> {
        let resp = self
            .http_client
            .post(self.rpc_url.clone())
            .json(&req.to_body(1))
            .send()
            .map_err(Error::HttpRequest)?;

        let resp_status = resp.status();
        if !resp_status.is_success() {
            let body = resp.text().ok();
            return Err(Error::RpcResponseStatus(resp_status.as_u16(), body));
        }

        let rpc_result = resp.json().map_err(Error::RpcResponseParse)?;

        let mut rpc_result = match rpc_result {
            JsonValue::Object(rpc_result) => rpc_result,
            rpc_result => {
                let body = serde_json::to_string_pretty(&rpc_result).unwrap();
                log::error!("invalid rpc response, body was:\n{}", body);
                return Err(Error::InvalidRpcResponse);
            }
        };

        if let Some(err) = rpc_result.remove("error") {
            return Err(Error::Rpc(err));
        }

        let rpc_result = rpc_result
            .remove("result")
            .ok_or(Error::InvalidRpcResponse)?;

        let rpc_result = serde_json::from_value(rpc_result).map_err(Error::RpcResultParse)?;

        Ok(rpc_result)
    }
}
