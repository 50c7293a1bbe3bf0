use crate::ports::{AliasRepository, AliasSource};
use ferrous_mdns_domain::MdnsError;
use std::sync::Arc;
use tracing::info;

pub struct ReloadAliasesUseCase {
    source: Arc<dyn AliasSource>,
    repository: Arc<dyn AliasRepository>,
}

impl ReloadAliasesUseCase {
    pub fn new(source: Arc<dyn AliasSource>, repository: Arc<dyn AliasRepository>) -> Self {
        Self { source, repository }
    }

    /// Loads the alias source and swaps the table. On error the current
    /// table is left untouched.
    pub async fn execute(&self) -> Result<usize, MdnsError> {
        let aliases = self.source.load().await?;
        let previous = self.repository.len();

        self.repository.reload(aliases);

        let current = self.repository.len();
        info!(previous, current, "Alias table reloaded");
        Ok(current)
    }
}
