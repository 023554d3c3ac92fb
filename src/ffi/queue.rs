//! Single-consumer bounded execution queue.
//!
//! Every mutating FFI call enqueues a boxed job and blocks on a per-call
//! reply channel; one dedicated worker thread drains the queue and runs jobs
//! strictly in FIFO order, so the wallet service and rate limiter never see
//! concurrent access. A job that panics is caught at the worker and turned
//! into an `ErrInternal` envelope instead of killing the worker thread.

use crate::config;
use crate::ffi::envelope::internal_error_json;
use std::panic::{self, AssertUnwindSafe};
use std::sync::mpsc::{self, sync_channel, SyncSender, TrySendError};
use std::sync::OnceLock;
use std::thread;

type Job = Box<dyn FnOnce() -> String + Send + 'static>;

struct Task {
    job: Job,
    reply: mpsc::Sender<String>,
}

/// Handle to the single worker thread and its submission queue.
pub struct Worker {
    sender: SyncSender<Task>,
}

impl Worker {
    fn spawn(capacity: usize) -> Self {
        let (sender, receiver) = sync_channel::<Task>(capacity);
        thread::Builder::new()
            .name("arcsign-ffi-worker".to_string())
            .spawn(move || {
                for task in receiver {
                    let outcome = panic::catch_unwind(AssertUnwindSafe(task.job))
                        .unwrap_or_else(|_| internal_error_json("the FFI worker caught a panic"));
                    let _ = task.reply.send(outcome);
                }
            })
            .expect("failed to spawn the FFI worker thread");
        Self { sender }
    }

    /// Enqueue `job`, blocking the caller until the worker finishes it, or
    /// return an `ErrQueueFull` envelope immediately if the queue is at
    /// capacity rather than blocking on submission.
    pub fn submit(&self, job: Job) -> String {
        let (reply, rx) = mpsc::channel();
        match self.sender.try_send(Task { job, reply }) {
            Ok(()) => rx
                .recv()
                .unwrap_or_else(|_| internal_error_json("the FFI worker disconnected before replying")),
            Err(TrySendError::Full(_)) => {
                crate::ffi::envelope::error_json(&crate::errors::WalletError::QueueFull)
            }
            Err(TrySendError::Disconnected(_)) => {
                internal_error_json("the FFI worker thread terminated")
            }
        }
    }
}

/// The process-wide worker, started lazily on first use.
pub fn worker() -> &'static Worker {
    static WORKER: OnceLock<Worker> = OnceLock::new();
    WORKER.get_or_init(|| Worker::spawn(config::ffi::QUEUE_CAPACITY))
}
