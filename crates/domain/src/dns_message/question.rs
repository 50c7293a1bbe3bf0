use super::RecordType;
use crate::mdns::{CLASS_IN, UNICAST_RESPONSE_BIT};
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub name: Arc<str>,
    pub qtype: u16,
    /// Class without the unicast-response bit.
    pub qclass: u16,
    pub unicast_response: bool,
}

impl Question {
    pub fn new(name: impl Into<Arc<str>>, record_type: RecordType) -> Self {
        Self {
            name: name.into(),
            qtype: record_type.to_u16(),
            qclass: CLASS_IN,
            unicast_response: false,
        }
    }

    pub fn with_unicast_response(mut self, unicast_response: bool) -> Self {
        self.unicast_response = unicast_response;
        self
    }

    /// Splits the wire class into the class proper and the mDNS QU bit.
    pub fn from_wire_class(name: Arc<str>, qtype: u16, raw_class: u16) -> Self {
        Self {
            name,
            qtype,
            qclass: raw_class & !UNICAST_RESPONSE_BIT,
            unicast_response: raw_class & UNICAST_RESPONSE_BIT != 0,
        }
    }

    pub fn wire_class(&self) -> u16 {
        if self.unicast_response {
            self.qclass | UNICAST_RESPONSE_BIT
        } else {
            self.qclass & !UNICAST_RESPONSE_BIT
        }
    }

    pub fn record_type(&self) -> RecordType {
        RecordType::from_u16(self.qtype)
    }

    pub fn is_internet_class(&self) -> bool {
        self.qclass == CLASS_IN || self.qclass == crate::mdns::CLASS_ANY
    }
}
