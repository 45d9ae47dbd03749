use std::time::{Duration, Instant};

use feed_bench_core::config::HttpConfig;
use feed_bench_core::deserialize::Address;
use feed_bench_core::eth_client::EthClient;
use feed_bench_core::feed::{latest_round_data_call, RoundData};
use feed_bench_core::Result;

pub struct CallOutcome {
    pub elapsed: Duration,
    pub data: RoundData,
}

/// One call unit: open a fresh connection, read the feed's latest round and
/// time the whole exchange. Owns nothing beyond its own stack.
pub fn call_feed(endpoint: &url::Url, contract: Address, http: &HttpConfig) -> Result<CallOutcome> {
    let start = Instant::now();

    let client = EthClient::new(endpoint.clone(), http)?;
    let output = client.send(&latest_round_data_call(contract))?;
    let data = RoundData::decode(&output)?;

    Ok(CallOutcome {
        elapsed: start.elapsed(),
        data,
    })
}
