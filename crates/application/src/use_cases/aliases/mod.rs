mod reload_aliases;

pub use reload_aliases::ReloadAliasesUseCase;
