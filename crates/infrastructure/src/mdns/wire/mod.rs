//! DNS wire format (RFC 1035 §4) as used by mDNS.
//!
//! Decoding follows compression pointers; encoding never compresses, so
//! every encoded buffer is self-contained and decodes back to the same
//! message.
mod decoder;
mod encoder;

pub use decoder::decode;
pub use encoder::encode;

pub(crate) const HEADER_LEN: usize = 12;
/// Wire length limit for a name, length octets and root label included.
pub(crate) const MAX_NAME_LEN: usize = 255;
pub(crate) const MAX_LABEL_LEN: usize = 63;
