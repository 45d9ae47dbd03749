use serde::de::DeserializeOwned;
use serde_json::Value as JsonValue;

use crate::deserialize::{Address, Bytes};

pub trait EthRequest {
    type Resp: DeserializeOwned;

    fn to_body(&self, id: usize) -> JsonValue;
}

/// Read-only contract call against the latest block.
#[derive(Debug, Clone)]
pub struct CallContract {
    pub to: Address,
    pub data: Bytes,
}

impl EthRequest for CallContract {
    type Resp = Bytes;

    fn to_body(&self, id: usize) -> JsonValue {
        serde_json::json!({
            "jsonrpc": "2.0",
            "method": "eth_call",
            "params": [
                {
                    "to": self.to.to_string(),
                    "data": self.data.to_string(),
                },
                "latest",
            ],
            "id": id,
        })
    }
}
