use feed_bench::{Bencher, Config};

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn main() {
    env_logger::init();

    let config = Config::parse();

    let bencher = match Bencher::new(config) {
        Ok(bencher) => bencher,
        Err(e) => {
            log::error!("failed to create bencher:\n{}", e);
            return;
        }
    };

    if let Err(e) = bencher.run() {
        log::error!("failed to run benchmark:\n{}", e);
    }
}
