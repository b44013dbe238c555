#![allow(unused_crate_dependencies, reason = "These are tests, not the main crate.")]

mod common;


use std::{array, thread};
use std::sync::{Arc, Barrier};

use oorandom::Rand32;

use anchored_log::{Logger, infof, set_shared_logger, use_default_logger};

use self::common::{RecordingLogger, lock_global_logger};


const NUM_LOGGING_THREADS: usize = 4;
const MESSAGES_PER_THREAD: usize = 2_000;
const NUM_SWAPS: usize = 500;

/// Loggers are swapped while other threads log; every message must land in exactly one of them.
#[test]
fn swapping_while_logging_loses_nothing() {
    let _guard = lock_global_logger();

    let recorders: [RecordingLogger; 3] = array::from_fn(|_| RecordingLogger::new());
    let shared: Vec<Arc<dyn Logger>> = recorders
        .iter()
        .map(|recorder| Arc::new(recorder.clone()) as Arc<dyn Logger>)
        .collect();
    drop(set_shared_logger(Arc::clone(&shared[0])));

    let barrier = Arc::new(Barrier::new(NUM_LOGGING_THREADS + 1));

    let loggers: Vec<_> = (0..NUM_LOGGING_THREADS)
        .map(|thread_idx| {
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                for msg_idx in 0..MESSAGES_PER_THREAD {
                    infof!("thread %d message %d", thread_idx, msg_idx);
                }
            })
        })
        .collect();

    let swapper = {
        let barrier = Arc::clone(&barrier);
        let shared = shared.clone();
        thread::spawn(move || {
            let mut rng = Rand32::new(0x5eed);
            barrier.wait();
            for _ in 0..NUM_SWAPS {
                let idx = rng.rand_range(0..3) as usize;
                drop(set_shared_logger(Arc::clone(&shared[idx])));
                thread::yield_now();
            }
        })
    };

    for handle in loggers {
        handle.join().unwrap();
    }
    swapper.join().unwrap();

    use_default_logger();

    let total: usize = recorders.iter().map(RecordingLogger::num_calls).sum();
    assert_eq!(total, NUM_LOGGING_THREADS * MESSAGES_PER_THREAD);
}
