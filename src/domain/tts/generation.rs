use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Monotonic id of the most recent generation run.
///
/// Starting a run or abandoning the current one advances the counter, which
/// turns every outstanding ticket stale.
#[derive(Debug, Default)]
pub struct GenerationCounter {
    current: AtomicU64,
}

impl GenerationCounter {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn begin(self: &Arc<Self>) -> GenerationTicket {
        let id = self.advance();
        GenerationTicket {
            id,
            counter: Arc::clone(self),
        }
    }

    /// Invalidate the running generation without starting a new one.
    pub fn abandon(&self) -> u64 {
        self.advance()
    }

    pub fn current(&self) -> u64 {
        self.current.load(Ordering::SeqCst)
    }

    fn advance(&self) -> u64 {
        self.current.fetch_add(1, Ordering::SeqCst) + 1
    }
}

/// Identity of one run. Results of a stale ticket are discarded.
#[derive(Debug, Clone)]
pub struct GenerationTicket {
    id: u64,
    counter: Arc<GenerationCounter>,
}

impl GenerationTicket {
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn is_current(&self) -> bool {
        self.counter.current() == self.id
    }
}
