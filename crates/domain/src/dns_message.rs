pub mod flags;
pub mod question;
pub mod record;
pub mod record_type;

pub use flags::MessageFlags;
pub use question::Question;
pub use record::ResourceRecord;
pub use record_type::RecordType;

/// A DNS message as carried on the mDNS wire.
///
/// Section counts are never stored: the encoder derives them from the
/// section lengths and the decoder fills the sections from the declared
/// counts, so the two always agree.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DnsMessage {
    pub id: u16,
    pub flags: MessageFlags,
    pub questions: Vec<Question>,
    pub answers: Vec<ResourceRecord>,
    pub authorities: Vec<ResourceRecord>,
    pub additionals: Vec<ResourceRecord>,
}

impl DnsMessage {
    pub fn query(id: u16, questions: Vec<Question>) -> Self {
        Self {
            id,
            flags: MessageFlags::default(),
            questions,
            ..Self::default()
        }
    }

    /// Authoritative response to `query`: same id, questions echoed.
    pub fn authoritative_response(query: &DnsMessage, answers: Vec<ResourceRecord>) -> Self {
        Self {
            id: query.id,
            flags: MessageFlags::authoritative_response(),
            questions: query.questions.clone(),
            answers,
            ..Self::default()
        }
    }

    /// Unsolicited announcement (id 0, no questions).
    pub fn announcement(answers: Vec<ResourceRecord>) -> Self {
        Self {
            id: 0,
            flags: MessageFlags::authoritative_response(),
            answers,
            ..Self::default()
        }
    }

    pub fn is_response(&self) -> bool {
        self.flags.qr
    }

    pub fn is_query(&self) -> bool {
        !self.flags.qr
    }

    pub fn record_count(&self) -> usize {
        self.answers.len() + self.authorities.len() + self.additionals.len()
    }
}
