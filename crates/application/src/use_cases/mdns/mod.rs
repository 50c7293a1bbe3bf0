mod announce_aliases;
mod answer_query;

pub use announce_aliases::AnnounceAliasesUseCase;
pub use answer_query::{AnswerQueryUseCase, MdnsReply, ReplyDestination};
