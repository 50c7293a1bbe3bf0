use ferrous_mdns_application::use_cases::ReloadAliasesUseCase;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Notify;
use tokio::time::{interval_at, Instant};
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

/// Re-reads the alias source periodically and whenever the trigger fires
/// (SIGHUP in the binary).
pub struct AliasReloadJob {
    reload: Arc<ReloadAliasesUseCase>,
    interval_secs: u64,
    trigger: Arc<Notify>,
    shutdown: CancellationToken,
}

impl AliasReloadJob {
    pub fn new(reload: Arc<ReloadAliasesUseCase>) -> Self {
        Self {
            reload,
            interval_secs: 0,
            trigger: Arc::new(Notify::new()),
            shutdown: CancellationToken::new(),
        }
    }

    /// 0 disables the periodic reload; the trigger still works.
    pub fn with_interval(mut self, secs: u64) -> Self {
        self.interval_secs = secs;
        self
    }

    pub fn with_trigger(mut self, trigger: Arc<Notify>) -> Self {
        self.trigger = trigger;
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    pub fn trigger(&self) -> Arc<Notify> {
        Arc::clone(&self.trigger)
    }

    pub async fn start(self: Arc<Self>) {
        info!(
            interval_secs = self.interval_secs,
            "Starting alias reload job"
        );

        // The table is loaded before the job starts, so the first periodic
        // reload happens one full period later.
        let period = Duration::from_secs(self.interval_secs.max(1));
        let mut interval = interval_at(Instant::now() + period, period);

        loop {
            tokio::select! {
                _ = self.shutdown.cancelled() => {
                    info!("AliasReloadJob: shutting down");
                    break;
                }
                _ = self.trigger.notified() => {
                    info!("Alias reload requested");
                    self.run_once().await;
                }
                _ = interval.tick(), if self.interval_secs > 0 => {
                    self.run_once().await;
                }
            }
        }
    }

    async fn run_once(&self) {
        if let Err(e) = self.reload.execute().await {
            error!(error = %e, "Alias reload failed, keeping current table");
        }
    }
}
