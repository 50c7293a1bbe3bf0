use super::{HEADER_LEN, MAX_LABEL_LEN, MAX_NAME_LEN};
use ferrous_mdns_domain::{DnsMessage, MdnsError, ResourceRecord};

/// Serializes `message` without name compression.
///
/// Header counts are taken from the section lengths. Fails on names that
/// cannot be represented on the wire and on sections or rdata too large
/// for their 16-bit length fields.
pub fn encode(message: &DnsMessage) -> Result<Vec<u8>, MdnsError> {
    let mut buf = Vec::with_capacity(512);

    buf.extend_from_slice(&message.id.to_be_bytes());
    buf.extend_from_slice(&message.flags.to_u16().to_be_bytes());
    for count in [
        message.questions.len(),
        message.answers.len(),
        message.authorities.len(),
        message.additionals.len(),
    ] {
        buf.extend_from_slice(&length_u16(count, "section")?.to_be_bytes());
    }
    debug_assert_eq!(buf.len(), HEADER_LEN);

    for question in &message.questions {
        write_name(&mut buf, &question.name)?;
        buf.extend_from_slice(&question.qtype.to_be_bytes());
        buf.extend_from_slice(&question.wire_class().to_be_bytes());
    }

    for record in message
        .answers
        .iter()
        .chain(&message.authorities)
        .chain(&message.additionals)
    {
        write_record(&mut buf, record)?;
    }

    Ok(buf)
}

fn length_u16(len: usize, what: &str) -> Result<u16, MdnsError> {
    u16::try_from(len).map_err(|_| {
        MdnsError::MalformedMessage(format!("{} length {} exceeds 65535", what, len))
    })
}

fn write_record(buf: &mut Vec<u8>, record: &ResourceRecord) -> Result<(), MdnsError> {
    write_name(buf, &record.name)?;
    buf.extend_from_slice(&record.rtype.to_be_bytes());
    buf.extend_from_slice(&record.class.to_be_bytes());
    buf.extend_from_slice(&record.ttl.to_be_bytes());
    buf.extend_from_slice(&length_u16(record.rdata.len(), "rdata")?.to_be_bytes());
    buf.extend_from_slice(&record.rdata);
    Ok(())
}

/// Writes `name` as length-prefixed labels. A single trailing dot is
/// accepted; `""` and `"."` are the root name.
fn write_name(buf: &mut Vec<u8>, name: &str) -> Result<(), MdnsError> {
    let trimmed = name.strip_suffix('.').unwrap_or(name);
    if trimmed.is_empty() {
        buf.push(0);
        return Ok(());
    }

    let wire_len = trimmed.len() + 2;
    if wire_len > MAX_NAME_LEN {
        return Err(MdnsError::InvalidName(format!(
            "{} exceeds {} bytes on the wire",
            name, MAX_NAME_LEN
        )));
    }

    for label in trimmed.split('.') {
        if label.is_empty() || label.len() > MAX_LABEL_LEN {
            return Err(MdnsError::InvalidName(format!(
                "{} has a label of {} bytes",
                name,
                label.len()
            )));
        }
        buf.push(label.len() as u8);
        buf.extend_from_slice(label.as_bytes());
    }
    buf.push(0);
    Ok(())
}
