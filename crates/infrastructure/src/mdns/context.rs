use super::queue::QueryQueue;
use ferrous_mdns_application::ports::MdnsTransport;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

/// State shared by the listener and the responder for the life of the
/// process.
///
/// "Running" is the un-cancelled state of the shutdown token. Cancelling
/// is one-way, so the flag can only ever go from running to stopped.
pub struct SharedContext {
    shutdown: CancellationToken,
    transport: Arc<dyn MdnsTransport>,
    queue: QueryQueue,
}

impl SharedContext {
    pub fn new(transport: Arc<dyn MdnsTransport>) -> Self {
        Self::with_shutdown(transport, CancellationToken::new())
    }

    /// Shares an externally owned token, e.g. the one the signal handler
    /// cancels.
    pub fn with_shutdown(transport: Arc<dyn MdnsTransport>, shutdown: CancellationToken) -> Self {
        Self {
            shutdown,
            transport,
            queue: QueryQueue::new(),
        }
    }

    pub fn is_running(&self) -> bool {
        !self.shutdown.is_cancelled()
    }

    /// Stops both worker loops. Safe to call more than once and from any task.
    pub fn shutdown(&self) {
        self.shutdown.cancel();
    }

    pub fn shutdown_token(&self) -> &CancellationToken {
        &self.shutdown
    }

    pub fn transport(&self) -> &dyn MdnsTransport {
        self.transport.as_ref()
    }

    pub fn group_addr(&self) -> SocketAddr {
        self.transport.group_addr()
    }

    pub fn queue(&self) -> &QueryQueue {
        &self.queue
    }
}

impl std::fmt::Debug for SharedContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SharedContext")
            .field("running", &self.is_running())
            .field("group", &self.group_addr())
            .field("queue", &self.queue)
            .finish()
    }
}
