use async_trait::async_trait;
use ferrous_mdns_domain::{Alias, MdnsError};

#[async_trait]
pub trait AliasSource: Send + Sync {
    async fn load(&self) -> Result<Vec<Alias>, MdnsError>;
}
