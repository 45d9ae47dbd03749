use std::num::{NonZeroU64, NonZeroUsize};
use std::str::FromStr;

use feed_bench::{Bencher, Config};
use feed_bench_core::config::{BenchConfig, HttpConfig};
use feed_bench_core::deserialize::Address;

use common::{round_data_hex, unreachable_url, RpcFixture};

mod common;

fn test_config(
    batch: usize,
    iterations: usize,
    threads: usize,
    rpc: Vec<url::Url>,
) -> Config {
    Config {
        bench: BenchConfig {
            batch,
            iterations,
            threads: Some(NonZeroUsize::new(threads).unwrap()),
            rpc,
            contract: Address::from_str("0x83441C3A10F4D05de6e0f2E849A850Ccf27E6fa7").unwrap(),
        },
        http: HttpConfig {
            request_timeout_secs: NonZeroU64::new(5).unwrap(),
            connect_timeout_ms: NonZeroU64::new(1000).unwrap(),
        },
    }
}

#[test]
fn every_submission_completes() {
    let fixture = RpcFixture::launch(round_data_hex(250_000_000_000));

    let bencher = Bencher::new(test_config(6, 2, 3, vec![fixture.url()])).unwrap();
    bencher.run().unwrap();

    assert_eq!(fixture.hits(), 12);
}

#[test]
fn failing_endpoint_does_not_abort_the_run() {
    let fixture = RpcFixture::launch(round_data_hex(250_000_000_000));

    // Round-robin across one reachable and one unreachable endpoint: the
    // reachable one serves the even call indices, the rest error out.
    let cfg = test_config(4, 1, 2, vec![fixture.url(), unreachable_url()]);

    Bencher::new(cfg).unwrap().run().unwrap();

    assert_eq!(fixture.hits(), 2);
}

#[test]
fn malformed_result_is_isolated_per_call() {
    let fixture = RpcFixture::launch("0x1234".to_string());

    let bencher = Bencher::new(test_config(3, 1, 2, vec![fixture.url()])).unwrap();
    bencher.run().unwrap();

    assert_eq!(fixture.hits(), 3);
}

#[test]
fn single_worker_still_completes() {
    let fixture = RpcFixture::launch(round_data_hex(1));

    let bencher = Bencher::new(test_config(5, 1, 1, vec![fixture.url()])).unwrap();
    bencher.run().unwrap();

    assert_eq!(fixture.hits(), 5);
}
