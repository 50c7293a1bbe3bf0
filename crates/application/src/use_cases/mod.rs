pub mod aliases;
pub mod mdns;

pub use aliases::ReloadAliasesUseCase;
pub use mdns::{AnnounceAliasesUseCase, AnswerQueryUseCase, MdnsReply, ReplyDestination};
