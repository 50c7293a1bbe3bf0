const QR_MASK: u16 = 0x8000;
const OPCODE_SHIFT: u16 = 11;
const OPCODE_MASK: u16 = 0x0F;
const AA_MASK: u16 = 0x0400;
const TC_MASK: u16 = 0x0200;
const RD_MASK: u16 = 0x0100;
const RA_MASK: u16 = 0x0080;
const Z_SHIFT: u16 = 4;
const Z_MASK: u16 = 0x07;
const RCODE_MASK: u16 = 0x0F;

/// Second header word of a DNS message.
///
/// `z` keeps the three reserved bits (Z, AD, CD) so a decoded header
/// re-encodes bit for bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MessageFlags {
    pub qr: bool,
    pub opcode: u8,
    pub aa: bool,
    pub tc: bool,
    pub rd: bool,
    pub ra: bool,
    pub z: u8,
    pub rcode: u8,
}

impl MessageFlags {
    pub fn authoritative_response() -> Self {
        Self {
            qr: true,
            aa: true,
            ..Self::default()
        }
    }

    pub fn from_u16(raw: u16) -> Self {
        Self {
            qr: raw & QR_MASK != 0,
            opcode: ((raw >> OPCODE_SHIFT) & OPCODE_MASK) as u8,
            aa: raw & AA_MASK != 0,
            tc: raw & TC_MASK != 0,
            rd: raw & RD_MASK != 0,
            ra: raw & RA_MASK != 0,
            z: ((raw >> Z_SHIFT) & Z_MASK) as u8,
            rcode: (raw & RCODE_MASK) as u8,
        }
    }

    /// Out-of-range `opcode`, `z` and `rcode` values are masked to their field width.
    pub fn to_u16(&self) -> u16 {
        let mut raw = 0u16;
        if self.qr {
            raw |= QR_MASK;
        }
        raw |= (self.opcode as u16 & OPCODE_MASK) << OPCODE_SHIFT;
        if self.aa {
            raw |= AA_MASK;
        }
        if self.tc {
            raw |= TC_MASK;
        }
        if self.rd {
            raw |= RD_MASK;
        }
        if self.ra {
            raw |= RA_MASK;
        }
        raw |= (self.z as u16 & Z_MASK) << Z_SHIFT;
        raw |= self.rcode as u16 & RCODE_MASK;
        raw
    }
}
