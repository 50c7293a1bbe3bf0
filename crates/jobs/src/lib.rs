pub mod alias_reload;
pub mod runner;

pub use alias_reload::AliasReloadJob;
pub use runner::JobRunner;
