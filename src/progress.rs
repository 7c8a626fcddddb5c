// src/progress.rs
use crate::data::DeputyRecord;

/// Lightweight progress reporting for a scrape run.
/// Callbacks always run on the thread that called `scrape::run`.
pub trait Progress {
    /// Called once the reference list is known.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called for every record, in the order the records are collected.
    fn item_done(&mut self, _record: &DeputyRecord) {}

    /// Called at the end.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
