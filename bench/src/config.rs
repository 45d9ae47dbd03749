use clap::Parser;
use feed_bench_core::config::{BenchConfig, HttpConfig};

#[derive(Clone, Debug, Parser)]
#[clap(author, version, about, long_about = None)]
pub struct Config {
    #[command(flatten)]
    pub bench: BenchConfig,

    #[command(flatten)]
    pub http: HttpConfig,
}

impl Config {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }
}
