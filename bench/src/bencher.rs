use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, OnceLock};
use std::thread;
use std::time::{Duration, Instant};

use crossbeam_channel::Receiver;
use feed_bench_core::config::HttpConfig;
use feed_bench_core::deserialize::Address;

use crate::call;
use crate::config::Config;
use crate::error::{Error, Result};

const ROUND_PAUSE: Duration = Duration::from_secs(1);

struct CallJob {
    round: usize,
    index: usize,
    endpoint: url::Url,
}

pub struct Bencher {
    cfg: Config,
}

impl Bencher {
    pub fn new(cfg: Config) -> Result<Bencher> {
        cfg.bench.validate().map_err(Error::InvalidConfig)?;

        Ok(Bencher { cfg })
    }

    /// Drive all rounds to completion. Returns after every submitted call
    /// has finished; individual call failures never abort the run.
    pub fn run(&self) -> Result<()> {
        let iterations = self.cfg.bench.iterations;
        let batch = self.cfg.bench.batch;

        let tracker = Arc::new(RunTracker::new(iterations, batch));
        let (tx, rx) = crossbeam_channel::unbounded();

        let workers = (0..self.cfg.bench.threads())
            .map(|_| {
                let rx = rx.clone();
                let tracker = tracker.clone();
                let contract = self.cfg.bench.contract;
                let http = self.cfg.http;

                thread::spawn(move || run_worker(rx, contract, http, tracker))
            })
            .collect::<Vec<_>>();
        drop(rx);

        let start = Instant::now();

        for round in 0..iterations {
            log::info!("starting round {}", round);
            tracker.start_round(round);

            for index in 0..batch {
                let job = CallJob {
                    round,
                    index,
                    endpoint: self.cfg.bench.endpoint_for(index).clone(),
                };

                tx.send(job).map_err(|_| Error::WorkerPanic)?;
            }

            // Paces submissions only. The pause is not synchronized with pool
            // drain, so a slow round's calls overlap the next round.
            thread::sleep(ROUND_PAUSE);
        }

        drop(tx);
        for worker in workers {
            worker.join().map_err(|_| Error::WorkerPanic)?;
        }

        println!(
            "finished {} rounds / {} calls ({} failed) in {}ms",
            iterations,
            iterations * batch,
            tracker.failures(),
            start.elapsed().as_millis(),
        );

        Ok(())
    }
}

fn run_worker(
    rx: Receiver<CallJob>,
    contract: Address,
    http: HttpConfig,
    tracker: Arc<RunTracker>,
) {
    for job in rx {
        match call::call_feed(&job.endpoint, contract, &http) {
            Ok(outcome) => {
                println!(
                    "{}.{}:\t{}ms\t{} USD\tRPC: {}",
                    job.round,
                    job.index,
                    outcome.elapsed.as_millis(),
                    outcome.data.price(),
                    job.endpoint,
                );
                tracker.record(job.round, false);
            }
            Err(e) => {
                log::error!(
                    "{}.{}:\tRPC: {}\tError: {}",
                    job.round,
                    job.index,
                    job.endpoint,
                    e,
                );
                tracker.record(job.round, true);
            }
        }
    }
}

struct RoundState {
    started: OnceLock<Instant>,
    remaining: AtomicUsize,
}

struct RunTracker {
    rounds: Vec<RoundState>,
    failures: AtomicUsize,
}

impl RunTracker {
    fn new(iterations: usize, batch: usize) -> RunTracker {
        let rounds = (0..iterations)
            .map(|_| RoundState {
                started: OnceLock::new(),
                remaining: AtomicUsize::new(batch),
            })
            .collect();

        RunTracker {
            rounds,
            failures: AtomicUsize::new(0),
        }
    }

    fn start_round(&self, round: usize) {
        let _ = self.rounds[round].started.set(Instant::now());
    }

    /// Called by the worker that finished a call. The worker completing the
    /// round's last call prints the round summary.
    fn record(&self, round: usize, failed: bool) {
        if failed {
            self.failures.fetch_add(1, Ordering::Relaxed);
        }

        let remaining = self.rounds[round].remaining.fetch_sub(1, Ordering::AcqRel);
        if remaining == 1 {
            if let Some(started) = self.rounds[round].started.get() {
                println!("round {} took {}ms", round, started.elapsed().as_millis());
            }
        }
    }

    fn failures(&self) -> usize {
        self.failures.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tracker_counts_failures() {
        let tracker = RunTracker::new(1, 3);
        tracker.start_round(0);

        tracker.record(0, false);
        tracker.record(0, true);
        tracker.record(0, false);

        assert_eq!(tracker.failures(), 1);
        assert_eq!(tracker.rounds[0].remaining.load(Ordering::Relaxed), 0);
    }

    #[test]
    fn tracker_rounds_are_independent() {
        let tracker = RunTracker::new(2, 1);
        tracker.start_round(0);
        tracker.start_round(1);

        tracker.record(1, true);

        assert_eq!(tracker.failures(), 1);
        assert_eq!(tracker.rounds[0].remaining.load(Ordering::Relaxed), 1);
        assert_eq!(tracker.rounds[1].remaining.load(Ordering::Relaxed), 0);
    }
}
