use tessera_base::{BinRead, BinWrite};

use crate::error::TxError;

/// Usage tag of a transaction attribute. The tag decides how the data
/// field is framed on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AttributeUsage(pub u8);

impl AttributeUsage {
    pub const CONTRACT_HASH: Self = Self(0x00);
    pub const ECDH02: Self = Self(0x02);
    pub const ECDH03: Self = Self(0x03);
    pub const SCRIPT: Self = Self(0x20);
    pub const VOTE: Self = Self(0x30);
    pub const DESCRIPTION_URL: Self = Self(0x81);
    pub const DESCRIPTION: Self = Self(0x90);
    pub const HASH1: Self = Self(0xA1);
    pub const HASH15: Self = Self(0xAF);
    pub const REMARK: Self = Self(0xF0);

    /// Remarks occupy the whole 0xF0..=0xFF range.
    pub const fn is_remark(self) -> bool {
        self.0 >= 0xF0
    }

    const fn framing(self) -> Option<Framing> {
        match self.0 {
            0x00 | 0x30 | 0xA1..=0xAF => Some(Framing::Fixed(32)),
            0x02 | 0x03 => Some(Framing::Ecdh),
            0x20 => Some(Framing::Fixed(20)),
            0x81 => Some(Framing::ByteLength),
            0x90 | 0xF0..=0xFF => Some(Framing::VarLength),
            _ => None,
        }
    }
}

enum Framing {
    /// Raw data of a known width, no length prefix.
    Fixed(usize),
    /// 33 bytes in memory with `data[0]` repeating the usage tag; only
    /// the trailing 32 bytes travel on the wire.
    Ecdh,
    /// Single length byte, then the data.
    ByteLength,
    /// Varint length, then the data.
    VarLength,
}

/// One usage-tagged attribute of a transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TxAttribute {
    pub usage: AttributeUsage,
    pub data: Vec<u8>,
}

impl TxAttribute {
    pub fn new(usage: AttributeUsage, data: Vec<u8>) -> Self {
        Self { usage, data }
    }

    /// Builds an ECDH attribute, prefixing the stored data with the
    /// usage tag as the wire convention requires.
    pub fn ecdh(usage: AttributeUsage, shared: &[u8; 32]) -> Self {
        let mut data = Vec::with_capacity(33);
        data.push(usage.0);
        data.extend_from_slice(shared);
        Self { usage, data }
    }

    fn length_error(&self, expected: usize) -> TxError {
        TxError::AttributeLength {
            usage: self.usage.0,
            expected,
            actual: self.data.len(),
        }
    }

    pub fn encode<W: BinWrite>(&self, w: &mut W) -> Result<(), TxError> {
        let framing = self
            .usage
            .framing()
            .ok_or(TxError::UnknownAttributeUsage(self.usage.0))?;
        w.write_u8(self.usage.0);
        match framing {
            Framing::Fixed(width) => {
                if self.data.len() != width {
                    return Err(self.length_error(width));
                }
                w.write_bytes(&self.data);
            }
            Framing::Ecdh => {
                if self.data.len() != 33 || self.data[0] != self.usage.0 {
                    return Err(self.length_error(33));
                }
                w.write_bytes(&self.data[1..]);
            }
            Framing::ByteLength => {
                if self.data.len() > 0xFF {
                    return Err(self.length_error(0xFF));
                }
                w.write_u8(self.data.len() as u8);
                w.write_bytes(&self.data);
            }
            Framing::VarLength => w.write_var_bytes(&self.data),
        }
        Ok(())
    }

    pub fn decode<R: BinRead>(r: &mut R) -> Result<Self, TxError> {
        let usage = AttributeUsage(r.read_u8()?);
        let framing = usage
            .framing()
            .ok_or(TxError::UnknownAttributeUsage(usage.0))?;
        let data = match framing {
            Framing::Fixed(width) => {
                let mut data = vec![0u8; width];
                r.read_into(&mut data)?;
                data
            }
            Framing::Ecdh => {
                let mut data = vec![0u8; 33];
                data[0] = usage.0;
                r.read_into(&mut data[1..])?;
                data
            }
            Framing::ByteLength => {
                let len = r.read_u8()? as usize;
                let mut data = vec![0u8; len];
                r.read_into(&mut data)?;
                data
            }
            Framing::VarLength => r.read_var_bytes(u16::MAX as u64)?,
        };
        Ok(Self { usage, data })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tessera_base::SliceReader;

    fn round_trip(attr: &TxAttribute) -> TxAttribute {
        let mut wire = Vec::new();
        attr.encode(&mut wire).unwrap();
        let mut r = SliceReader::new(&wire);
        let back = TxAttribute::decode(&mut r).unwrap();
        assert_eq!(r.remaining(), 0);
        back
    }

    #[test]
    fn fixed_width_usages() {
        for usage in [
            AttributeUsage::CONTRACT_HASH,
            AttributeUsage::VOTE,
            AttributeUsage::HASH1,
            AttributeUsage::HASH15,
        ] {
            let attr = TxAttribute::new(usage, vec![0x5A; 32]);
            let mut wire = Vec::new();
            attr.encode(&mut wire).unwrap();
            assert_eq!(wire.len(), 33); // tag + raw 32, no length prefix
            assert_eq!(round_trip(&attr), attr);
        }

        let attr = TxAttribute::new(AttributeUsage::SCRIPT, vec![0x11; 20]);
        let mut wire = Vec::new();
        attr.encode(&mut wire).unwrap();
        assert_eq!(wire.len(), 21);
        assert_eq!(round_trip(&attr), attr);
    }

    #[test]
    fn wrong_width_rejected() {
        let attr = TxAttribute::new(AttributeUsage::VOTE, vec![0u8; 31]);
        let err = attr.encode(&mut Vec::new()).unwrap_err();
        assert_eq!(
            err,
            TxError::AttributeLength {
                usage: 0x30,
                expected: 32,
                actual: 31
            }
        );
    }

    #[test]
    fn ecdh_wire_drops_leading_tag_byte() {
        let attr = TxAttribute::ecdh(AttributeUsage::ECDH03, &[0xCD; 32]);
        let mut wire = Vec::new();
        attr.encode(&mut wire).unwrap();
        assert_eq!(wire.len(), 33);
        assert_eq!(wire[0], 0x03);
        assert_eq!(&wire[1..], [0xCD; 32]);

        let back = round_trip(&attr);
        assert_eq!(back.data.len(), 33);
        assert_eq!(back.data[0], 0x03);
    }

    #[test]
    fn description_url_uses_byte_length() {
        let attr = TxAttribute::new(AttributeUsage::DESCRIPTION_URL, b"https://x".to_vec());
        let mut wire = Vec::new();
        attr.encode(&mut wire).unwrap();
        assert_eq!(wire[0], 0x81);
        assert_eq!(wire[1], 9);
        assert_eq!(round_trip(&attr), attr);

        let oversized = TxAttribute::new(AttributeUsage::DESCRIPTION_URL, vec![0u8; 256]);
        assert!(oversized.encode(&mut Vec::new()).is_err());
    }

    #[test]
    fn remarks_use_varint_length() {
        let attr = TxAttribute::new(AttributeUsage(0xFF), vec![0xEE; 300]);
        let mut wire = Vec::new();
        attr.encode(&mut wire).unwrap();
        assert_eq!(wire[0], 0xFF);
        assert_eq!(wire[1], 0xFD); // varint marker for a u16 length
        assert_eq!(round_trip(&attr), attr);
        assert!(AttributeUsage(0xFF).is_remark());
    }

    #[test]
    fn unknown_usage_rejected_both_ways() {
        let attr = TxAttribute::new(AttributeUsage(0x40), Vec::new());
        assert_eq!(
            attr.encode(&mut Vec::new()).unwrap_err(),
            TxError::UnknownAttributeUsage(0x40)
        );

        let mut r = SliceReader::new(&[0x40]);
        assert_eq!(
            TxAttribute::decode(&mut r).unwrap_err(),
            TxError::UnknownAttributeUsage(0x40)
        );
    }
}
