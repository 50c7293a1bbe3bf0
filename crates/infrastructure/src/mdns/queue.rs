use ferrous_mdns_domain::{DnsMessage, MdnsError};
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::{mpsc, Mutex};
use tokio_util::sync::CancellationToken;

/// A decoded query waiting for the responder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueueItem {
    pub message: DnsMessage,
    pub source: SocketAddr,
}

impl QueueItem {
    pub fn new(message: DnsMessage, source: SocketAddr) -> Self {
        Self { message, source }
    }
}

/// Unbounded FIFO between the listener (producer) and the responder
/// (consumer).
///
/// `push` never blocks. `pop` waits for an item or for the shutdown token,
/// whichever comes first, so the consumer can always be stopped even when
/// nothing is ever enqueued.
pub struct QueryQueue {
    tx: mpsc::UnboundedSender<QueueItem>,
    rx: Mutex<mpsc::UnboundedReceiver<QueueItem>>,
    pending: AtomicUsize,
}

impl QueryQueue {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            tx,
            rx: Mutex::new(rx),
            pending: AtomicUsize::new(0),
        }
    }

    pub fn push(&self, item: QueueItem) -> Result<(), MdnsError> {
        self.pending.fetch_add(1, Ordering::Relaxed);
        self.tx.send(item).map_err(|_| {
            self.pending.fetch_sub(1, Ordering::Relaxed);
            MdnsError::SocketClosed
        })
    }

    /// Next item in enqueue order, or `None` once `shutdown` is cancelled.
    ///
    /// Shutdown wins over pending items: after cancellation no further item
    /// is handed out.
    pub async fn pop(&self, shutdown: &CancellationToken) -> Option<QueueItem> {
        if shutdown.is_cancelled() {
            return None;
        }

        let mut rx = tokio::select! {
            biased;
            _ = shutdown.cancelled() => return None,
            guard = self.rx.lock() => guard,
        };

        let item = tokio::select! {
            biased;
            _ = shutdown.cancelled() => None,
            item = rx.recv() => item,
        };
        if item.is_some() {
            self.pending.fetch_sub(1, Ordering::Relaxed);
        }
        item
    }

    pub fn len(&self) -> usize {
        self.pending.load(Ordering::Relaxed)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for QueryQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for QueryQueue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QueryQueue")
            .field("pending", &self.len())
            .finish()
    }
}
