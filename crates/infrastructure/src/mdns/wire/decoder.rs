use super::{HEADER_LEN, MAX_NAME_LEN};
use ferrous_mdns_domain::{DnsMessage, MdnsError, MessageFlags, Question, ResourceRecord};
use std::sync::Arc;

const POINTER_TAG: u8 = 0xC0;
const LABEL_TYPE_MASK: u8 = 0xC0;
const POINTER_OFFSET_MASK: u8 = 0x3F;

/// Caps up-front allocation so a hostile header count cannot reserve more
/// than the datagram could possibly hold.
const MAX_PREALLOC: usize = 64;

fn malformed(reason: impl Into<String>) -> MdnsError {
    MdnsError::MalformedMessage(reason.into())
}

/// Parses a complete DNS message.
///
/// Every section is read using the counts declared in the header; a count
/// that cannot be satisfied by the remaining bytes is a `MalformedMessage`.
/// Record types and classes are not interpreted, so unknown ones decode as
/// opaque records. Bytes after the last declared record are ignored.
pub fn decode(buf: &[u8]) -> Result<DnsMessage, MdnsError> {
    if buf.len() < HEADER_LEN {
        return Err(malformed(format!(
            "{} bytes is shorter than the {} byte header",
            buf.len(),
            HEADER_LEN
        )));
    }

    let mut reader = Reader::new(buf);
    let id = reader.u16()?;
    let flags = MessageFlags::from_u16(reader.u16()?);
    let qdcount = reader.u16()? as usize;
    let ancount = reader.u16()? as usize;
    let nscount = reader.u16()? as usize;
    let arcount = reader.u16()? as usize;

    let mut questions = Vec::with_capacity(qdcount.min(MAX_PREALLOC));
    for _ in 0..qdcount {
        questions.push(reader.question()?);
    }

    Ok(DnsMessage {
        id,
        flags,
        questions,
        answers: reader.records(ancount)?,
        authorities: reader.records(nscount)?,
        additionals: reader.records(arcount)?,
    })
}

struct Reader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    fn bytes(&mut self, len: usize) -> Result<&'a [u8], MdnsError> {
        let end = self
            .pos
            .checked_add(len)
            .filter(|end| *end <= self.buf.len())
            .ok_or_else(|| {
                malformed(format!(
                    "{} bytes needed at offset {}, {} available",
                    len,
                    self.pos,
                    self.buf.len().saturating_sub(self.pos)
                ))
            })?;
        let slice = &self.buf[self.pos..end];
        self.pos = end;
        Ok(slice)
    }

    fn u16(&mut self) -> Result<u16, MdnsError> {
        let b = self.bytes(2)?;
        Ok(u16::from_be_bytes([b[0], b[1]]))
    }

    fn u32(&mut self) -> Result<u32, MdnsError> {
        let b = self.bytes(4)?;
        Ok(u32::from_be_bytes([b[0], b[1], b[2], b[3]]))
    }

    fn name(&mut self) -> Result<Arc<str>, MdnsError> {
        let (name, end) = read_name(self.buf, self.pos)?;
        self.pos = end;
        Ok(name.into())
    }

    fn question(&mut self) -> Result<Question, MdnsError> {
        let name = self.name()?;
        let qtype = self.u16()?;
        let raw_class = self.u16()?;
        Ok(Question::from_wire_class(name, qtype, raw_class))
    }

    fn record(&mut self) -> Result<ResourceRecord, MdnsError> {
        let name = self.name()?;
        let rtype = self.u16()?;
        let class = self.u16()?;
        let ttl = self.u32()?;
        let rdlength = self.u16()? as usize;
        let rdata = self.bytes(rdlength)?.to_vec();
        Ok(ResourceRecord {
            name,
            rtype,
            class,
            ttl,
            rdata,
        })
    }

    fn records(&mut self, count: usize) -> Result<Vec<ResourceRecord>, MdnsError> {
        let mut records = Vec::with_capacity(count.min(MAX_PREALLOC));
        for _ in 0..count {
            records.push(self.record()?);
        }
        Ok(records)
    }
}

/// Reads the name starting at `start` and returns it with the offset just
/// past its in-place encoding.
///
/// A compression pointer must target an offset strictly before the start of
/// the name segment that contains it. Each jump therefore moves strictly
/// backward, which bounds the walk and rules out pointer loops.
fn read_name(buf: &[u8], start: usize) -> Result<(String, usize), MdnsError> {
    let mut name = String::new();
    let mut wire_len = 1usize;
    let mut pos = start;
    let mut segment_start = start;
    let mut end: Option<usize> = None;

    loop {
        let len = *buf
            .get(pos)
            .ok_or_else(|| malformed(format!("name at offset {} runs past the buffer", start)))?;

        match len & LABEL_TYPE_MASK {
            0x00 if len == 0 => {
                return Ok((name, end.unwrap_or(pos + 1)));
            }
            0x00 => {
                let label_start = pos + 1;
                let label_end = label_start + len as usize;
                let label = buf.get(label_start..label_end).ok_or_else(|| {
                    malformed(format!(
                        "label of {} bytes at offset {} exceeds the buffer",
                        len, pos
                    ))
                })?;

                wire_len += 1 + len as usize;
                if wire_len > MAX_NAME_LEN {
                    return Err(malformed(format!(
                        "name at offset {} exceeds {} bytes",
                        start, MAX_NAME_LEN
                    )));
                }

                // Names are carried as dotted text, so a label must not
                // contain the separator itself.
                let label = std::str::from_utf8(label)
                    .ok()
                    .filter(|text| !text.contains('.'))
                    .ok_or_else(|| {
                        malformed(format!(
                            "label at offset {} is not a plain text label",
                            pos
                        ))
                    })?;

                if !name.is_empty() {
                    name.push('.');
                }
                name.push_str(label);
                pos = label_end;
            }
            POINTER_TAG => {
                let low = *buf.get(pos + 1).ok_or_else(|| {
                    malformed(format!("truncated compression pointer at offset {}", pos))
                })?;
                let target = (((len & POINTER_OFFSET_MASK) as usize) << 8) | low as usize;
                if target >= segment_start {
                    return Err(malformed(format!(
                        "compression pointer at offset {} targets {} outside the parsed region",
                        pos, target
                    )));
                }
                end.get_or_insert(pos + 2);
                segment_start = target;
                pos = target;
            }
            _ => {
                return Err(malformed(format!(
                    "reserved label type 0x{:02x} at offset {}",
                    len, pos
                )));
            }
        }
    }
}
