use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

/// `Breaker` is used for aborting a hashing run. `Walker` creates one instance
/// per run; clones of it can be handed to another thread and used to request an
/// interruption. The operation will be interrupted at the earliest possible
/// time, but not instantaneously: the state is checked between chunk reads and
/// between files.
///
/// Cloning: a cloned instance stays bound to the parent instance. `Breaker` is
/// safe to be shared between threads.
#[derive(Default, Debug, Clone)]
pub struct Breaker {
    state: Arc<AtomicBool>,
}

impl Breaker {
    /// Creates a new instance of `Breaker`.
    pub fn new() -> Self {
        Self {
            state: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Checks if an abort has been requested.
    ///
    /// # Returns
    ///
    /// - `true` if the operation has been aborted, `false` otherwise.
    pub fn is_aborted(&self) -> bool {
        self.state.load(Ordering::SeqCst)
    }

    /// Aborts the operation by setting the internal state to `true`. Aborting
    /// is one-way; to run again, create a new `Walker`.
    pub fn abort(&self) {
        self.state.store(true, Ordering::SeqCst)
    }
}
