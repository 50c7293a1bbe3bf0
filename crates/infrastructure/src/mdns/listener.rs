use super::context::SharedContext;
use super::queue::QueueItem;
use super::wire;
use ferrous_mdns_application::use_cases::AnswerQueryUseCase;
use ferrous_mdns_domain::MdnsError;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{debug, error, info, trace};

/// What the listener did with one datagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListenerOutcome {
    Malformed,
    /// A response from another responder, logged and dropped.
    Observed,
    /// A query for names we are not authoritative for.
    Ignored,
    Enqueued,
}

/// Receive side of the pipeline: turns datagrams into queued queries for
/// configured aliases.
pub struct Listener {
    ctx: Arc<SharedContext>,
    matcher: Arc<AnswerQueryUseCase>,
    buffer_size: usize,
}

impl Listener {
    pub fn new(ctx: Arc<SharedContext>, matcher: Arc<AnswerQueryUseCase>) -> Self {
        Self {
            ctx,
            matcher,
            buffer_size: 9000,
        }
    }

    pub fn with_buffer_size(mut self, buffer_size: usize) -> Self {
        self.buffer_size = buffer_size;
        self
    }

    /// Runs until shutdown. A receive error after shutdown is the expected
    /// way out; one while still running is returned as `SocketFailure`.
    pub async fn run(self) -> Result<(), MdnsError> {
        info!(group = %self.ctx.group_addr(), "mDNS listener started");
        let mut buf = vec![0u8; self.buffer_size];
        let shutdown = self.ctx.shutdown_token().clone();

        loop {
            let received = tokio::select! {
                biased;
                _ = shutdown.cancelled() => break,
                received = self.ctx.transport().recv_from(&mut buf) => received,
            };

            match received {
                Ok((len, source)) => {
                    self.handle_datagram(&buf[..len], source);
                }
                Err(_) if !self.ctx.is_running() => break,
                Err(e) => {
                    error!(error = %e, "mDNS listener receive failed");
                    return Err(MdnsError::SocketFailure(e.to_string()));
                }
            }
        }

        info!("mDNS listener stopped");
        Ok(())
    }

    pub fn handle_datagram(&self, datagram: &[u8], source: SocketAddr) -> ListenerOutcome {
        let message = match wire::decode(datagram) {
            Ok(message) => message,
            Err(e) => {
                debug!(source = %source, len = datagram.len(), error = %e, "Dropping undecodable datagram");
                return ListenerOutcome::Malformed;
            }
        };

        if message.is_response() {
            debug!(
                id = message.id,
                source = %source,
                answers = ?message.answers.iter().map(|a| &*a.name).collect::<Vec<_>>(),
                "Observed mDNS response"
            );
            return ListenerOutcome::Observed;
        }

        if !self.matcher.is_relevant(&message) {
            trace!(id = message.id, source = %source, "Query for foreign names");
            return ListenerOutcome::Ignored;
        }

        debug!(
            id = message.id,
            source = %source,
            questions = message.questions.len(),
            "Queueing mDNS query"
        );
        match self.ctx.queue().push(QueueItem::new(message, source)) {
            Ok(()) => ListenerOutcome::Enqueued,
            Err(e) => {
                error!(source = %source, error = %e, "Failed to queue query");
                ListenerOutcome::Ignored
            }
        }
    }
}
