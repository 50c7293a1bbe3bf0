use super::context::SharedContext;
use super::listener::Listener;
use super::responder::Responder;
use ferrous_mdns_domain::MdnsError;
use std::sync::Arc;
use tokio::task::JoinSet;
use tracing::{error, info, warn};

/// Runs the listener and the responder as one unit.
///
/// Both loops start together and are joined together. Whichever ends first,
/// for any reason, cancels the shared token so the other follows. The first
/// error seen is the result.
pub struct MdnsService {
    ctx: Arc<SharedContext>,
    listener: Listener,
    responder: Responder,
}

impl MdnsService {
    pub fn new(ctx: Arc<SharedContext>, listener: Listener, responder: Responder) -> Self {
        Self {
            ctx,
            listener,
            responder,
        }
    }

    pub async fn run(self) -> Result<(), MdnsError> {
        let Self {
            ctx,
            listener,
            responder,
        } = self;

        let mut tasks = JoinSet::new();
        tasks.spawn(async move { ("listener", listener.run().await) });
        tasks.spawn(async move { ("responder", responder.run().await) });

        let mut first_error: Option<MdnsError> = None;
        while let Some(joined) = tasks.join_next().await {
            let outcome = match joined {
                Ok((name, result)) => {
                    if ctx.is_running() {
                        warn!(task = name, "mDNS worker exited while running");
                    }
                    result
                }
                Err(e) => {
                    error!(error = %e, "mDNS worker panicked");
                    Err(MdnsError::SocketFailure(format!("worker task failed: {e}")))
                }
            };

            ctx.shutdown();

            if let Err(e) = outcome {
                first_error.get_or_insert(e);
            }
        }

        match first_error {
            Some(e) => {
                error!(error = %e, "mDNS service stopped with error");
                Err(e)
            }
            None => {
                info!("mDNS service stopped");
                Ok(())
            }
        }
    }
}
