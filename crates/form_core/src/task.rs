use std::future::Future;

use tokio::task::JoinHandle;

/// Spawned task that is aborted when its owner drops it.
pub(crate) struct ScopedTask {
    handle: JoinHandle<()>,
}

impl ScopedTask {
    pub(crate) fn spawn<F>(future: F) -> Self
    where
        F: Future<Output = ()> + Send + 'static,
    {
        Self {
            handle: tokio::spawn(future),
        }
    }
}

impl Drop for ScopedTask {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
