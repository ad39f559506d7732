// src/progress.rs
use std::path::Path;

/// Lightweight progress reporting for batch runs over input files.
/// Frontends (GUI/CLI) implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the total number of inputs.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// One input finished: how many player records it yielded
    /// (0 means the frame was rejected).
    fn item_done(&mut self, _input: &Path, _extracted: usize) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
